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

//! Journal field values & their normalization.
//!
//! A field value in journalctl's JSON export is untyped: the same key may arrive as a string, an
//! integer, a sequence of integers (journalctl's rendering of text it would not print verbatim,
//! one character code per element), or a sequence of strings (a field that occurred more than once
//! in the record). [`FieldValue`] makes that union an explicit tagged variant so that the
//! normalization rules are a pattern match rather than dynamic type inspection.

use serde_json::Value;

/// The shape of one journal field value.
///
/// The four "real" shapes journalctl produces each get a variant; anything else (null, bool,
/// float, nested object) is carried in [`FieldValue::Other`] untouched. An `Other` value passes
/// through verbatim when the field is not reserved, and refuses every conversion below, so a
/// reserved field holding one fails its record.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    /// UTF-8 text
    Text(String),
    /// An integral value
    Integer(i64),
    /// A sequence of character codes standing in for text journalctl declined to print
    CharCodes(Vec<i64>),
    /// A multi-valued field, one string per occurrence
    Lines(Vec<String>),
    /// Any other JSON shape, passed through untouched
    Other(Value),
}

impl FieldValue {
    /// Classify a raw JSON value into its journal shape.
    ///
    /// Returns `None` only for a sequence that is neither all-integers nor all-strings; such a
    /// value fits none of the journal export shapes and indicates a malformed upstream record.
    pub fn classify(value: &Value) -> Option<FieldValue> {
        match value {
            Value::String(s) => Some(FieldValue::Text(s.clone())),
            Value::Number(n) => match n.as_i64() {
                Some(n) => Some(FieldValue::Integer(n)),
                None => Some(FieldValue::Other(value.clone())),
            },
            Value::Array(items) => {
                let codes: Vec<i64> = items.iter().filter_map(Value::as_i64).collect();
                if codes.len() == items.len() {
                    return Some(FieldValue::CharCodes(codes));
                }
                let lines: Vec<String> = items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_owned))
                    .collect();
                if lines.len() == items.len() {
                    return Some(FieldValue::Lines(lines));
                }
                None
            }
            other => Some(FieldValue::Other(other.clone())),
        }
    }

    /// Read this value as an integer, tolerating journalctl's habit of exporting numeric fields
    /// as decimal strings (and, for good measure, as character codes that decode to digits).
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse().ok(),
            FieldValue::CharCodes(codes) => decode_char_codes(codes)?.trim().parse().ok(),
            _ => None,
        }
    }

    /// Normalize this value to text.
    pub fn into_text(self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Integer(n) => Some(n.to_string()),
            FieldValue::CharCodes(codes) => decode_char_codes(&codes),
            FieldValue::Lines(lines) => Some(lines.join("\n")),
            FieldValue::Other(_) => None,
        }
    }

    /// Normalize this value to the JSON form it takes in a GELF additional field: character
    /// codes become the text they encode, multi-valued fields join with newlines, everything
    /// else passes through.
    pub fn into_json(self) -> Option<Value> {
        match self {
            FieldValue::Text(s) => Some(Value::String(s)),
            FieldValue::Integer(n) => Some(Value::from(n)),
            FieldValue::CharCodes(codes) => decode_char_codes(&codes).map(Value::String),
            FieldValue::Lines(lines) => Some(Value::String(lines.join("\n"))),
            FieldValue::Other(v) => Some(v),
        }
    }
}

/// Reinterpret a sequence of integers as Unicode scalar values; `None` if any element is outside
/// the Unicode range.
fn decode_char_codes(codes: &[i64]) -> Option<String> {
    codes
        .iter()
        .map(|&c| u32::try_from(c).ok().and_then(char::from_u32))
        .collect()
}
