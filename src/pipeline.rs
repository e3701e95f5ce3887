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

//! The line-driven forwarding pipeline.
//!
//! [`Pipeline`] wires the pieces together: input lines go to the
//! [`FrameAssembler`](crate::frame::FrameAssembler), each completed record to the
//! [`RecordTransformer`](crate::transform::RecordTransformer), and each resulting message to the
//! [`Dispatcher`](crate::dispatch::Dispatcher).
//!
//! No failure mode for a single record is allowed to terminate the stream: malformed records are
//! logged as warnings and dropped, messageless records are dropped without ceremony, transport
//! failures are logged with the offending input and the pipeline moves on. The only ways the
//! pipeline stops are end-of-input or an externally delivered termination signal. Every record's
//! fate is reported as an explicit [`Outcome`] so callers (and tests) need no side channel.

use crate::{
    dispatch::Dispatcher,
    error::{Error, Result},
    frame::{FrameAssembler, Mode},
    transform::RecordTransformer,
    transport::Transport,
};

use backtrace::Backtrace;
use tracing::{debug, error, warn};

use std::io::BufRead;

/// What became of one complete record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Converted & handed to the transport
    Delivered,
    /// Well-formed, but had no message to report; silently dropped
    DroppedInvalid,
    /// Malformed; dropped with a logged warning
    DroppedUnparseable,
    /// Converted, but the transport failed to deliver it
    TransportFailed,
}

/// The whole conversion pipeline, frame assembly through dispatch.
pub struct Pipeline<T: Transport> {
    assembler: FrameAssembler,
    transformer: RecordTransformer,
    dispatcher: Dispatcher<T>,
}

impl<T: Transport> Pipeline<T> {
    pub fn new(mode: Mode, prepend_host: bool, transport: T) -> Pipeline<T> {
        Pipeline {
            assembler: FrameAssembler::new(mode),
            transformer: RecordTransformer::new(prepend_host),
            dispatcher: Dispatcher::new(transport),
        }
    }

    /// Feed one newline-stripped input line; if it completed a record, report the record's fate.
    pub fn feed_line(&mut self, line: &str) -> Option<Outcome> {
        // The assembler's buffer is already cleared by the time we hold the record text, so a
        // failure anywhere below cannot contaminate the next record.
        let record = self.assembler.push_line(line)?;
        Some(self.handle_record(&record))
    }

    fn handle_record(&self, record: &str) -> Outcome {
        match self.transformer.transform(record) {
            Err(err) => {
                warn!("dropping journal record {:?}: {}", record, err);
                Outcome::DroppedUnparseable
            }
            Ok(None) => {
                debug!("journal record carried no message; nothing to report");
                Outcome::DroppedInvalid
            }
            Ok(Some(message)) => match self.dispatcher.dispatch(message) {
                Ok(_) => Outcome::Delivered,
                Err(err) => {
                    error!("failed to forward journal record {:?}: {}", record, err);
                    Outcome::TransportFailed
                }
            },
        }
    }

    /// Drive the pipeline from `input` until end-of-input.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        for line in input.lines() {
            let line = line.map_err(|err| Error::Journal {
                source: err,
                back: Backtrace::new(),
            })?;
            let _ = self.feed_line(&line);
        }
        Ok(())
    }
}

#[cfg(test)]
mod pipeline_tests {
    use super::*;
    use crate::dispatch::test_support::{decompress, CaptureTransport, FailingTransport};

    #[test]
    fn test_single_line_delivery() {
        let transport = CaptureTransport::default();
        let mut pipeline = Pipeline::new(Mode::SingleLine, false, transport.clone());

        assert_eq!(
            pipeline.feed_line(r#"{"MESSAGE": "hi", "PRIORITY": "6"}"#),
            Some(Outcome::Delivered)
        );

        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        let v = decompress(&sent[0]);
        assert_eq!(v["short_message"], "hi");
        assert_eq!(v["level"], 6);
    }

    #[test]
    fn test_malformed_line_is_not_fatal() {
        let transport = CaptureTransport::default();
        let mut pipeline = Pipeline::new(Mode::SingleLine, false, transport.clone());

        assert_eq!(
            pipeline.feed_line("{ this is not json"),
            Some(Outcome::DroppedUnparseable)
        );
        assert_eq!(
            pipeline.feed_line(r#"{"MESSAGE": "hi"}"#),
            Some(Outcome::Delivered)
        );

        // exactly one message went out
        assert_eq!(transport.sent.borrow().len(), 1);
    }

    #[test]
    fn test_messageless_record_silently_dropped() {
        let transport = CaptureTransport::default();
        let mut pipeline = Pipeline::new(Mode::SingleLine, false, transport.clone());

        assert_eq!(
            pipeline.feed_line(r#"{"MESSAGE": "   "}"#),
            Some(Outcome::DroppedInvalid)
        );
        assert_eq!(
            pipeline.feed_line(r#"{"PRIORITY": "6"}"#),
            Some(Outcome::DroppedInvalid)
        );
        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn test_transport_failure_does_not_stop_the_stream() {
        let mut pipeline = Pipeline::new(Mode::SingleLine, false, FailingTransport);

        assert_eq!(
            pipeline.feed_line(r#"{"MESSAGE": "hi"}"#),
            Some(Outcome::TransportFailed)
        );
        // the next record still gets its chance
        assert_eq!(
            pipeline.feed_line(r#"{"MESSAGE": "again"}"#),
            Some(Outcome::TransportFailed)
        );
    }

    #[test]
    fn test_multiline_stream() {
        let transport = CaptureTransport::default();
        let mut pipeline = Pipeline::new(Mode::MultiLine, false, transport.clone());

        let input = "Logs begin at Mon 2023-11-13\n\
                     [\n\
                     {\n\
                     \"MESSAGE\": \"first\"\n\
                     },\n\
                     {\n\
                     \"MESSAGE\": \"second\"\n\
                     },\n";
        pipeline.run(input.as_bytes()).unwrap();

        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 2);
        assert_eq!(decompress(&sent[0])["short_message"], "first");
        assert_eq!(decompress(&sent[1])["short_message"], "second");
    }

    #[test]
    fn test_run_reaches_end_of_input() {
        let transport = CaptureTransport::default();
        let mut pipeline = Pipeline::new(Mode::SingleLine, false, transport.clone());

        let input = "{ bad json\n{\"MESSAGE\": \"ok\"}\n\n";
        pipeline.run(input.as_bytes()).unwrap();
        assert_eq!(transport.sent.borrow().len(), 1);
    }
}
