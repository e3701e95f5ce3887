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

//! syslog facility-code definitions.
//!
//! RFCs [3164] & [5424] define twenty-four numeric "facilities" indicating the source of a log
//! message; journald passes the code through verbatim in the `SYSLOG_FACILITY` field, and GELF
//! wants a human-readable name in its `facility` field. [`name`] performs that translation.
//!
//! [3164]: https://datatracker.ietf.org/doc/html/rfc3164
//! [5424]: https://datatracker.ietf.org/doc/html/rfc5424
//!
//! The "facility" is clearly designed to indicate the source of the log message, but regrettably
//! selected a pre-defined set of values, along with eight "local" values. The set of selected
//! sources is, ahem, showing its age (does anyone have a line-printer anymore? A Usenet server?),
//! and codes 11 through 15 have no portable meaning across operating systems, so they fall
//! through to [`UNKNOWN`] along with everything outside the defined range.

/// The name reported for any facility code this table does not cover.
pub const UNKNOWN: &str = "unknown";

/// Map a syslog facility code to its canonical name.
///
/// The table is fixed at compile time; codes it does not cover (including 11-15 and anything
/// outside 0-23) degrade to [`UNKNOWN`] rather than failing the record.
pub fn name(code: i64) -> &'static str {
    match code {
        0 => "kern",
        1 => "user",
        2 => "mail",
        3 => "daemon",
        4 => "auth",
        5 => "syslog",
        6 => "lpr",
        7 => "news",
        8 => "uucp",
        9 => "cron",
        10 => "authpriv",
        16 => "local0",
        17 => "local1",
        18 => "local2",
        19 => "local3",
        20 => "local4",
        21 => "local5",
        22 => "local6",
        23 => "local7",
        _ => UNKNOWN,
    }
}

#[cfg(test)]
mod facility_tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(name(0), "kern");
        assert_eq!(name(3), "daemon");
        assert_eq!(name(10), "authpriv");
        assert_eq!(name(16), "local0");
        assert_eq!(name(23), "local7");
    }

    #[test]
    fn test_unknown_codes_degrade() {
        // 11-15 are deliberately absent from the table
        for code in 11..=15 {
            assert_eq!(name(code), UNKNOWN);
        }
        assert_eq!(name(24), UNKNOWN);
        assert_eq!(name(42), UNKNOWN);
        assert_eq!(name(-1), UNKNOWN);
    }
}
