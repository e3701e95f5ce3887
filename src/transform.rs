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

//! Turning raw journal records into GELF messages.
//!
//! [`RecordTransformer`] parses one raw record's text as a JSON object and maps each journal
//! field onto its GELF counterpart, first match wins:
//!
//! 1. keys beginning with `.` and the `__CURSOR` key are journal-internal and dropped;
//! 2. `__REALTIME_TIMESTAMP` (microseconds since the epoch) becomes `timestamp` (float seconds);
//! 3. `PRIORITY` becomes `level`;
//! 4. `SYSLOG_FACILITY` becomes `facility` via the [`facility`](crate::facility) table;
//! 5. `_HOSTNAME` becomes `host`;
//! 6. `MESSAGE` becomes `short_message`, trimmed;
//! 7. everything else keeps its value (shape-normalized per [`fields`](crate::fields)) under
//!    `_` + the original key.
//!
//! A record whose `short_message` ends up absent or blank has nothing to report and yields no
//! message at all, by design distinct from a parse failure. A reserved field whose value defeats
//! its conversion fails the whole record: that indicates a malformed upstream record, and
//! silently skipping the field would corrupt the reserved GELF key.

use crate::{
    error::{Error, Result},
    facility,
    fields::FieldValue,
    gelf::GelfMessage,
};

use backtrace::Backtrace;
use serde_json::Value;

/// Transform raw record text into [`GelfMessage`]s. Stateless apart from configuration.
pub struct RecordTransformer {
    prepend_host: bool,
}

impl RecordTransformer {
    /// `prepend_host` prefixes each message with the hostname the record was written on, for
    /// aggregation servers that don't surface the `host` field prominently.
    pub fn new(prepend_host: bool) -> RecordTransformer {
        RecordTransformer { prepend_host }
    }

    /// Transform one raw record.
    ///
    /// `Ok(None)` means the record was well-formed but had no message to report; `Err` means the
    /// record was malformed. Neither is fatal to the caller's stream.
    pub fn transform(&self, record: &str) -> Result<Option<GelfMessage>> {
        let parsed: Value = serde_json::from_str(record).map_err(|err| Error::Parse {
            source: err,
            back: Backtrace::new(),
        })?;
        let object = match parsed {
            Value::Object(map) => map,
            _ => {
                return Err(Error::NotAnObject {
                    back: Backtrace::new(),
                })
            }
        };

        let mut msg = GelfMessage::new();
        for (key, value) in object {
            apply_field(&mut msg, &key, &value)?;
        }

        if !msg.has_short_message() {
            return Ok(None);
        }

        if self.prepend_host {
            let prepended = match (msg.host.as_deref(), msg.short_message.as_deref()) {
                (Some(host), Some(short)) if !host.trim().is_empty() => {
                    Some(format!("{} {}", host.trim(), short))
                }
                _ => None,
            };
            if let Some(p) = prepended {
                msg.short_message = Some(p);
            }
        }

        Ok(Some(msg))
    }
}

/// Apply one journal field to the message under the per-key precedence rules.
fn apply_field(msg: &mut GelfMessage, key: &str, value: &Value) -> Result<()> {
    if key.starts_with('.') || key == "__CURSOR" {
        return Ok(());
    }
    let value = FieldValue::classify(value).ok_or_else(|| bad_field(key))?;
    match key {
        "__REALTIME_TIMESTAMP" => {
            let usec = value.as_integer().ok_or_else(|| bad_field(key))?;
            msg.timestamp = Some(usec as f64 / 1_000_000.0);
        }
        "PRIORITY" => {
            msg.level = Some(value.as_integer().ok_or_else(|| bad_field(key))?);
        }
        "SYSLOG_FACILITY" => {
            let code = value.as_integer().ok_or_else(|| bad_field(key))?;
            msg.facility = Some(facility::name(code).to_owned());
        }
        "_HOSTNAME" => {
            msg.host = Some(value.into_text().ok_or_else(|| bad_field(key))?);
        }
        "MESSAGE" => {
            let text = value.into_text().ok_or_else(|| bad_field(key))?;
            msg.short_message = Some(text.trim().to_owned());
        }
        _ => {
            let normalized = value.into_json().ok_or_else(|| bad_field(key))?;
            msg.additional.insert(format!("_{}", key), normalized);
        }
    }
    Ok(())
}

fn bad_field(key: &str) -> Error {
    Error::BadFieldValue {
        key: key.to_owned(),
        back: Backtrace::new(),
    }
}

#[cfg(test)]
mod transform_tests {
    use super::*;
    use crate::frame::{FrameAssembler, Mode};

    fn transform(record: &str) -> Result<Option<GelfMessage>> {
        RecordTransformer::new(false).transform(record)
    }

    #[test]
    fn test_message_mapping() {
        let msg = transform(r#"{"MESSAGE": "  hello  "}"#).unwrap().unwrap();
        assert_eq!(msg.version, "1.0");
        assert_eq!(msg.short_message.as_deref(), Some("hello"));
    }

    #[test]
    fn test_timestamp_conversion() {
        let msg = transform(r#"{"MESSAGE": "hi", "__REALTIME_TIMESTAMP": 1700000000000000}"#)
            .unwrap()
            .unwrap();
        assert_eq!(msg.timestamp, Some(1700000000.0));

        // journalctl also exports the timestamp as a decimal string
        let msg = transform(r#"{"MESSAGE": "hi", "__REALTIME_TIMESTAMP": "1700000000000000"}"#)
            .unwrap()
            .unwrap();
        assert_eq!(msg.timestamp, Some(1700000000.0));
    }

    #[test]
    fn test_internal_fields_dropped() {
        let msg = transform(r#"{"MESSAGE": "hi", ".foo": "x", "__CURSOR": "s=deadbeef"}"#)
            .unwrap()
            .unwrap();
        assert!(msg.additional.is_empty());
        let json = serde_json::to_string(&msg).unwrap();
        assert!(!json.contains("foo"));
        assert!(!json.contains("CURSOR"));
    }

    #[test]
    fn test_priority_and_facility() {
        let msg = transform(r#"{"MESSAGE": "hi", "PRIORITY": "6", "SYSLOG_FACILITY": 3}"#)
            .unwrap()
            .unwrap();
        assert_eq!(msg.level, Some(6));
        assert_eq!(msg.facility.as_deref(), Some("daemon"));
    }

    #[test]
    fn test_unknown_facility_degrades() {
        let msg = transform(r#"{"MESSAGE": "hi", "SYSLOG_FACILITY": 14}"#)
            .unwrap()
            .unwrap();
        assert_eq!(msg.facility.as_deref(), Some("unknown"));
    }

    #[test]
    fn test_non_numeric_priority_fails_record() {
        let err = transform(r#"{"MESSAGE": "hi", "PRIORITY": "high"}"#).unwrap_err();
        assert!(matches!(err, Error::BadFieldValue { .. }));

        let err = transform(r#"{"MESSAGE": "hi", "SYSLOG_FACILITY": null}"#).unwrap_err();
        assert!(matches!(err, Error::BadFieldValue { .. }));
    }

    #[test]
    fn test_additional_field_normalization() {
        let msg = transform(r#"{"MESSAGE": "hi", "FOO": [72, 105], "BAR": ["a", "b"]}"#)
            .unwrap()
            .unwrap();
        assert_eq!(msg.additional["_FOO"], "Hi");
        assert_eq!(msg.additional["_BAR"], "a\nb");
    }

    #[test]
    fn test_missing_or_blank_message_is_not_reportable() {
        assert_eq!(transform(r#"{"PRIORITY": "6"}"#).unwrap(), None);
        assert_eq!(transform(r#"{"MESSAGE": "   "}"#).unwrap(), None);
        assert_eq!(transform(r#"{"MESSAGE": ""}"#).unwrap(), None);
    }

    #[test]
    fn test_malformed_records() {
        assert!(matches!(
            transform("{ not json").unwrap_err(),
            Error::Parse { .. }
        ));
        assert!(matches!(
            transform(r#"["MESSAGE"]"#).unwrap_err(),
            Error::NotAnObject { .. }
        ));
    }

    #[test]
    fn test_host_prepend() {
        let t = RecordTransformer::new(true);
        let msg = t
            .transform(r#"{"MESSAGE": "boot ok", "_HOSTNAME": "web1"}"#)
            .unwrap()
            .unwrap();
        assert_eq!(msg.short_message.as_deref(), Some("web1 boot ok"));
        assert_eq!(msg.host.as_deref(), Some("web1"));

        // Without a hostname the message is left alone
        let msg = t.transform(r#"{"MESSAGE": "boot ok"}"#).unwrap().unwrap();
        assert_eq!(msg.short_message.as_deref(), Some("boot ok"));
    }

    #[test]
    fn test_multiline_framing_equals_single_line() {
        let mut asm = FrameAssembler::new(Mode::MultiLine);
        assert_eq!(asm.push_line("{"), None);
        assert_eq!(asm.push_line("\"MESSAGE\": \"hi\""), None);
        let raw = asm.push_line("},").unwrap();

        let from_multi = transform(&raw).unwrap().unwrap();
        let from_single = transform(r#"{"MESSAGE": "hi"}"#).unwrap().unwrap();
        assert_eq!(from_multi, from_single);
    }
}
