// Copyright (C) 2026 journal2gelf developers
//
// This file is part of journal2gelf.
//
// journal2gelf is free software: you can redistribute it and/or modify it under the terms of the
// GNU General Public License as published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// journal2gelf is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without
// even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with journal2gelf.  If
// not, see <http://www.gnu.org/licenses/>.

//! Forward [systemd-journald] records to a [GELF] server such as [Graylog].
//!
//! [systemd-journald]: https://www.freedesktop.org/software/systemd/man/latest/systemd-journald.service.html
//! [GELF]: https://go2docs.graylog.org/current/getting_in_log_data/gelf.html
//! [Graylog]: https://graylog.org/
//!
//! # Introduction
//!
//! journald keeps structured log records, and `journalctl -o json` will export them one JSON
//! object per line (older versions exported a pretty-printed JSON list instead; both formats are
//! supported). GELF servers want those same records as JSON with a different, fixed vocabulary:
//! reserved keys (`version`, `timestamp`, `level`, `facility`, `host`, `short_message`) plus
//! arbitrary `_`-prefixed additional keys, zlib-compressed, one message per UDP datagram.
//!
//! This crate is the plumbing between the two. The pieces, in the order a line of input meets
//! them:
//!
//! 1. [`frame`] reconstructs one complete record's text from the line stream;
//! 2. [`transform`] parses the record and maps journal fields onto GELF fields, applying the
//!    value-shape normalization in [`fields`] and the facility table in [`facility`];
//! 3. [`dispatch`] completes, serializes & compresses the message and hands it to [`transport`];
//! 4. [`pipeline`] drives the whole thing line-by-line, containing every per-record failure.
//!
//! The processing model is deliberately primitive: single-threaded, synchronous, blocking on the
//! next input line. There is no buffering, batching, retry, or back-pressure; a slow transport
//! stalls the pipeline, and an undeliverable message is logged and abandoned. Centralizing
//! journal contents is the job; guaranteed delivery is somebody else's.
//!
//! # Usage
//!
//! The usual arrangement is the shipped binary:
//!
//! ```text
//! journalctl -o json | journal2gelf --host graylog.example.com
//! journal2gelf --tail --host graylog.example.com -p 12201
//! ```
//!
//! but the pipeline is usable as a library against any [`BufRead`](std::io::BufRead) and any
//! [`Transport`](transport::Transport) implementation:
//!
//! ```no_run
//! use journal2gelf::{frame::Mode, pipeline::Pipeline, transport::UdpTransport};
//!
//! let transport = UdpTransport::new("graylog.example.com:12201").unwrap();
//! let mut pipeline = Pipeline::new(Mode::SingleLine, false, transport);
//! let stdin = std::io::stdin();
//! pipeline.run(stdin.lock()).unwrap();
//! ```

pub mod dispatch;
pub mod error;
pub mod facility;
pub mod fields;
pub mod frame;
pub mod gelf;
pub mod journal;
pub mod pipeline;
pub mod transform;
pub mod transport;
