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

//! The journal2gelf command-line program.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use journal2gelf::{
    frame::Mode,
    journal::{self, ExportMode},
    pipeline::Pipeline,
    transport::UdpTransport,
};

use std::io::{self, BufReader};

#[derive(Parser)]
#[command(
    name = "journal2gelf",
    version,
    about = "Forward systemd journald records to a GELF server like Graylog"
)]
struct Cli {
    /// Destination GELF server host
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Destination GELF server port
    #[arg(short, long, default_value_t = 12201)]
    port: u16,

    /// Spawn journalctl and follow the journal instead of reading stdin
    #[arg(short, long)]
    tail: bool,

    /// Spawn journalctl for a one-shot dump instead of reading stdin
    #[arg(short, long, conflicts_with = "tail")]
    dump: bool,

    /// Input records span multiple lines (older journalctl JSON output)
    #[arg(short, long)]
    multiline: bool,

    /// Prefix each message with the hostname it was recorded on
    #[arg(long)]
    prepend_host: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let transport = UdpTransport::new((cli.host.as_str(), cli.port))
        .with_context(|| format!("cannot reach GELF server at {}:{}", cli.host, cli.port))?;

    let mode = if cli.multiline {
        Mode::MultiLine
    } else {
        Mode::SingleLine
    };
    let mut pipeline = Pipeline::new(mode, cli.prepend_host, transport);

    if cli.tail || cli.dump {
        let export = if cli.tail {
            ExportMode::Follow
        } else {
            ExportMode::Dump
        };
        let mut child = journal::spawn(export).context("failed to spawn journalctl")?;
        let stdout = child
            .stdout
            .take()
            .context("journalctl stdout was not captured")?;
        pipeline.run(BufReader::new(stdout))?;
        child.wait().context("journalctl did not exit cleanly")?;
    } else {
        let stdin = io::stdin();
        pipeline.run(stdin.lock())?;
    }

    Ok(())
}
