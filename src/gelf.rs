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

//! The GELF message model.
//!
//! [GELF] (Graylog Extended Log Format) is a JSON log-message schema with a handful of reserved
//! keys plus arbitrary user-defined keys, each of the latter prefixed with `_`.
//!
//! [GELF]: https://go2docs.graylog.org/current/getting_in_log_data/gelf.html

use serde::Serialize;
use serde_json::{Map, Value};

/// The GELF schema version this crate speaks.
pub const GELF_VERSION: &str = "1.0";

/// One GELF message, ready for serialization.
///
/// Reserved fields other than `version` are optional here because a journal record need not
/// supply any of them; the dispatcher completes `host` and `timestamp` just before sending (see
/// [`Dispatcher`](crate::dispatch::Dispatcher)). Additional `_`-prefixed fields flatten into the
/// top-level JSON object.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GelfMessage {
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_message: Option<String>,
    #[serde(flatten)]
    pub additional: Map<String, Value>,
}

impl GelfMessage {
    pub fn new() -> GelfMessage {
        GelfMessage {
            version: GELF_VERSION,
            timestamp: None,
            level: None,
            facility: None,
            host: None,
            short_message: None,
            additional: Map::new(),
        }
    }

    /// A message with no `short_message`, or one that is blank after trimming, has nothing to
    /// report and must never be dispatched.
    pub fn has_short_message(&self) -> bool {
        self.short_message
            .as_deref()
            .map_or(false, |m| !m.trim().is_empty())
    }
}

impl std::default::Default for GelfMessage {
    fn default() -> Self {
        GelfMessage::new()
    }
}
