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

//! Record framing for journalctl's line-oriented export streams.
//!
//! Modern journalctl (`-o json`) emits one complete JSON object per line. Older versions emitted
//! a pretty-printed JSON list: a startup banner, an opening `[`, then each record spread across
//! several lines and terminated by a line reading exactly `},`. [`FrameAssembler`] reconstructs
//! one complete record's text from either stream, selected by [`Mode`] at startup.

/// Which export format the input stream carries. Fixed for the life of the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// One complete JSON record per input line
    SingleLine,
    /// Records spread across several lines inside a wrapping JSON list
    MultiLine,
}

/// Reassemble complete raw records from a stream of newline-stripped input lines.
///
/// The accumulation buffer is the only state; it is taken from the assembler wholesale on every
/// emission, so no residue can survive into the next record regardless of what the consumer does
/// with the emitted text.
pub struct FrameAssembler {
    mode: Mode,
    buf: Vec<String>,
}

impl FrameAssembler {
    pub fn new(mode: Mode) -> FrameAssembler {
        FrameAssembler {
            mode,
            buf: Vec::new(),
        }
    }

    /// Consume one input line; if it completes a record, emit the record's raw text.
    pub fn push_line(&mut self, line: &str) -> Option<String> {
        match self.mode {
            Mode::SingleLine => {
                if line.trim().is_empty() {
                    None
                } else {
                    Some(line.to_owned())
                }
            }
            Mode::MultiLine => {
                if line.starts_with("Logs begin at") || line.starts_with('[') {
                    // journal-tool startup banner / opening bracket of the wrapping list
                    None
                } else if line == "}," {
                    self.buf.push(String::from("}"));
                    Some(std::mem::take(&mut self.buf).join("\n"))
                } else {
                    self.buf.push(line.to_owned());
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod frame_tests {
    use super::*;

    #[test]
    fn test_single_line_mode() {
        let mut asm = FrameAssembler::new(Mode::SingleLine);
        assert_eq!(
            asm.push_line(r#"{"MESSAGE": "hi"}"#),
            Some(r#"{"MESSAGE": "hi"}"#.to_string())
        );
        assert_eq!(asm.push_line(""), None);
        assert_eq!(asm.push_line("   "), None);
    }

    #[test]
    fn test_multi_line_record() {
        let mut asm = FrameAssembler::new(Mode::MultiLine);
        assert_eq!(asm.push_line("Logs begin at Mon 2023-11-13"), None);
        assert_eq!(asm.push_line("["), None);
        assert_eq!(asm.push_line("{"), None);
        assert_eq!(asm.push_line("\"MESSAGE\": \"hi\""), None);
        assert_eq!(
            asm.push_line("},"),
            Some("{\n\"MESSAGE\": \"hi\"\n}".to_string())
        );
    }

    #[test]
    fn test_buffer_cleared_between_records() {
        let mut asm = FrameAssembler::new(Mode::MultiLine);
        asm.push_line("{");
        asm.push_line("\"MESSAGE\": \"first\"");
        let first = asm.push_line("},").unwrap();
        assert!(first.contains("first"));

        // The next record must not carry any residue from the first, even though the first was
        // never parsed by anyone.
        asm.push_line("{");
        asm.push_line("\"MESSAGE\": \"second\"");
        let second = asm.push_line("},").unwrap();
        assert_eq!(second, "{\n\"MESSAGE\": \"second\"\n}");
        assert!(!second.contains("first"));
    }

    #[test]
    fn test_emitted_record_parses() {
        let mut asm = FrameAssembler::new(Mode::MultiLine);
        asm.push_line("{");
        asm.push_line("\"MESSAGE\": \"hi\"");
        let raw = asm.push_line("},").unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["MESSAGE"], "hi");
    }
}
