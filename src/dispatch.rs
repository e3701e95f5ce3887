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

//! Serializing & delivering GELF messages.
//!
//! [`Dispatcher`] takes a finished [`GelfMessage`], completes the two reserved fields a GELF
//! server expects on every message but a journal record may lack (`host` falls back to the local
//! hostname, `timestamp` to the wall clock), serializes the message to JSON, compresses it with
//! zlib, and hands the result to the [`Transport`]. One message, one payload; no retries, no
//! batching — a transport failure is reported to the caller and the next record proceeds.

use crate::{
    error::{Error, Result},
    gelf::GelfMessage,
    transport::Transport,
};

use backtrace::Backtrace;
use chrono::Utc;
use flate2::{write::ZlibEncoder, Compression};

use std::io::Write;

/// Hand finished GELF messages to a [`Transport`], compressed.
pub struct Dispatcher<T: Transport> {
    transport: T,
    local_host: String,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(transport: T) -> Dispatcher<T> {
        // The hostname is process-wide constant data; fetch it once.
        let local_host = hostname::get()
            .ok()
            .and_then(|h| h.into_string().ok())
            .unwrap_or_else(|| String::from("localhost"));
        Dispatcher {
            transport,
            local_host,
        }
    }

    /// Serialize, compress & send one message. Returns the number of bytes put on the wire.
    pub fn dispatch(&self, mut msg: GelfMessage) -> Result<usize> {
        if msg.host.is_none() {
            msg.host = Some(self.local_host.clone());
        }
        if msg.timestamp.is_none() {
            msg.timestamp = Some(Utc::now().timestamp_micros() as f64 / 1_000_000.0);
        }

        let serialized = serde_json::to_vec(&msg).map_err(|err| Error::Payload {
            source: Box::new(err),
            back: Backtrace::new(),
        })?;

        let mut encoder = ZlibEncoder::new(
            Vec::with_capacity(serialized.len()),
            Compression::default(),
        );
        encoder.write_all(&serialized).map_err(|err| Error::Payload {
            source: Box::new(err),
            back: Backtrace::new(),
        })?;
        let compressed = encoder.finish().map_err(|err| Error::Payload {
            source: Box::new(err),
            back: Backtrace::new(),
        })?;

        self.transport.send(&compressed)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! A transport double that captures payloads instead of sending them.

    use super::*;

    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    pub(crate) struct CaptureTransport {
        pub(crate) sent: Rc<RefCell<Vec<Vec<u8>>>>,
    }

    impl Transport for CaptureTransport {
        fn send(&self, buf: &[u8]) -> Result<usize> {
            self.sent.borrow_mut().push(buf.to_vec());
            Ok(buf.len())
        }
    }

    pub(crate) struct FailingTransport;

    impl Transport for FailingTransport {
        fn send(&self, _buf: &[u8]) -> Result<usize> {
            Err(Error::Transport {
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "wire fell over",
                )),
                back: Backtrace::new(),
            })
        }
    }

    /// Undo the dispatcher's compression and get the message JSON back.
    pub(crate) fn decompress(payload: &[u8]) -> serde_json::Value {
        use std::io::Read;
        let mut decoder = flate2::read::ZlibDecoder::new(payload);
        let mut buf = Vec::new();
        decoder.read_to_end(&mut buf).unwrap();
        serde_json::from_slice(&buf).unwrap()
    }
}
