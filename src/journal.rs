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

//! Spawning the journal export process.
//!
//! When not reading from stdin, the pipeline's input comes from `journalctl -o json`, either as a
//! one-shot dump of the journal's current contents or following the journal as records arrive.
//! The child's stdout is piped back to us; its stderr is left alone so journalctl's own
//! complaints land on the operator's terminal.

use crate::error::{Error, Result};

use backtrace::Backtrace;

use std::process::{Child, Command, Stdio};

/// How the journal export process should behave.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportMode {
    /// Dump the journal's current contents and exit
    Dump,
    /// Keep following the journal as new records arrive
    Follow,
}

/// Build the journalctl invocation for `mode`.
pub fn command(mode: ExportMode) -> Command {
    let mut cmd = Command::new("journalctl");
    cmd.arg("-o").arg("json");
    if let ExportMode::Follow = mode {
        cmd.arg("-f");
    }
    cmd.stdout(Stdio::piped());
    cmd
}

/// Spawn journalctl in `mode` with its stdout piped.
pub fn spawn(mode: ExportMode) -> Result<Child> {
    command(mode).spawn().map_err(|err| Error::Journal {
        source: err,
        back: Backtrace::new(),
    })
}
