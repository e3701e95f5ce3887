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

//! [journal2gelf](crate) errors

use backtrace::Backtrace;

/// [journal2gelf](crate) error type
///
/// [journal2gelf](crate) eschews libraries like [thiserror], [anyhow] & [Snafu] in favor of a
/// straightforward enumeration with a few match arms chosen on the basis of what the caller will
/// need to respond. Every failure mode here is scoped to a single record or to process startup;
/// nothing in this enumeration is allowed to take the pipeline down (see
/// [`pipeline`](crate::pipeline)).
///
/// [thiserror]: https://docs.rs/thiserror
/// [anyhow]: https://docs.rs/anyhow
/// [Snafu]: https://docs.rs/snafu/latest/snafu
#[non_exhaustive]
pub enum Error {
    /// A reserved journal field held a value that could not be converted to its GELF form
    BadFieldValue { key: String, back: Backtrace },
    /// Failed to spawn, or read from, the journal export process
    Journal {
        source: std::io::Error,
        back: Backtrace,
    },
    /// A record parsed as JSON, but its top level was not an object
    NotAnObject { back: Backtrace },
    /// A raw record was not well-formed JSON
    Parse {
        source: serde_json::Error,
        back: Backtrace,
    },
    /// Failed to serialize or compress an outbound GELF payload
    Payload {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
        back: Backtrace,
    },
    /// General transport layer error
    Transport {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
        back: Backtrace,
    },
}

impl std::fmt::Display for Error {
    // `Error` is non-exhaustive so that adding variants won't be a breaking change to our
    // callers. That means the compiler won't catch us if we miss a variant here, so we
    // always include a `_` arm.
    #[allow(unreachable_patterns)]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::BadFieldValue { key, .. } => {
                write!(f, "Journal field {:?} held an inconvertible value", key)
            }
            Error::Journal { source, .. } => {
                write!(f, "While running the journal export process, got {}", source)
            }
            Error::NotAnObject { .. } => {
                write!(f, "Record parsed as JSON, but was not an object")
            }
            Error::Parse { source, .. } => write!(f, "Malformed journal record: {}", source),
            Error::Payload { source, .. } => {
                write!(f, "While encoding a GELF payload, got {}", source)
            }
            Error::Transport { source, .. } => write!(f, "Transport error: {:?}", source),
            _ => write!(f, "Other journal2gelf error"),
        }
    }
}

impl std::fmt::Debug for Error {
    // `Error` is non-exhaustive so that adding variants won't be a breaking change to our
    // callers. That means the compiler won't catch us if we miss a variant here, so we
    // always include a `_` arm.
    #[allow(unreachable_patterns)]
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::BadFieldValue { key: _, back } => write!(f, "{}\n{:?}", self, back),
            Error::Journal { source: _, back } => write!(f, "{}\n{:?}", self, back),
            Error::NotAnObject { back } => write!(f, "{}\n{:?}", self, back),
            Error::Parse { source: _, back } => write!(f, "{}\n{:?}", self, back),
            Error::Payload { source: _, back } => write!(f, "{}\n{:?}", self, back),
            Error::Transport { source: _, back } => write!(f, "{}\n{:?}", self, back),
            err => write!(f, "journal2gelf error: {}", err),
        }
    }
}

impl std::convert::From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Journal {
            source: err,
            back: Backtrace::new(),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
