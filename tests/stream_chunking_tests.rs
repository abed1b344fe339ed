//! Chunk-boundary behavior of the event-stream parser
//!
//! The backend delivers the event stream in arbitrary network chunks, so the
//! parser's output must not depend on where the cuts fall. These tests pin
//! that property, both on the documented scenarios and on arbitrary
//! splittings.

use proptest::prelude::*;

use po_prevoditelj::domain::events::TranslationEvent;
use po_prevoditelj::infrastructure::event_stream::EventStreamParser;

const WELL_FORMED_STREAM: &str = concat!(
    "event: progress\n",
    "data: {\"percent\":10,\"translated\":1,\"total\":10,\"status\":\"starting\"}\n",
    "\n",
    "event: progress\n",
    "data: {\"percent\":50,\"translated\":5,\"total\":10,\"eta_seconds\":7,\"current_text\":\"Add to cart\"}\n",
    "\n",
    "event: progress\n",
    "data: {\"percent\":90,\"translated\":9,\"total\":10}\n",
    "\n",
    "event: complete\n",
    "data: {\"filename\":\"theme.po\",\"target_lang\":\"hr\",\"total_entries\":10,\"translated_entries\":9,\"skipped_entries\":1,\"error_entries\":0,\"po_content\":\"msgid \\\"a\\\"\\nmsgstr \\\"b\\\"\\n\",\"entries\":[{\"msgid\":\"Add to cart\",\"translated\":\"Dodaj u košaricu\",\"status\":\"success\"}]}\n",
    "\n",
);

/// Parse the whole stream as a sequence of byte chunks.
fn parse_chunked(chunks: &[&[u8]]) -> Vec<TranslationEvent> {
    let mut parser = EventStreamParser::new();
    let mut events = Vec::new();
    for chunk in chunks {
        events.extend(parser.push_chunk(chunk));
    }
    events
}

/// Events compared through their serialized form; payload types carry no
/// equality of their own.
fn as_json(events: &[TranslationEvent]) -> Vec<serde_json::Value> {
    events
        .iter()
        .map(|e| serde_json::to_value(e).expect("events serialize"))
        .collect()
}

#[test]
fn whole_stream_in_one_chunk_dispatches_all_events() {
    let events = parse_chunked(&[WELL_FORMED_STREAM.as_bytes()]);
    assert_eq!(events.len(), 4);
    assert!(matches!(events[0], TranslationEvent::Progress(_)));
    assert!(matches!(events[3], TranslationEvent::Complete(_)));
}

#[test]
fn byte_at_a_time_delivery_matches_single_chunk_delivery() {
    let whole = parse_chunked(&[WELL_FORMED_STREAM.as_bytes()]);

    let bytes = WELL_FORMED_STREAM.as_bytes();
    let single_bytes: Vec<&[u8]> = bytes.chunks(1).collect();
    let trickled = parse_chunked(&single_bytes);

    assert_eq!(as_json(&whole), as_json(&trickled));
}

#[test]
fn documented_mid_json_split_dispatches_once_after_reassembly() {
    // The two chunks from the contract: the cut falls inside the JSON
    // payload, so nothing may be dispatched until the line is whole.
    let mut parser = EventStreamParser::new();

    let first = parser.push_chunk(b"event: progress\ndata: {\"percent\":10,\"total");
    assert!(first.is_empty(), "no dispatch before the line is complete");

    let second = parser.push_chunk(b"al\":5}\n\n");
    assert_eq!(second.len(), 1);
    match &second[0] {
        TranslationEvent::Progress(update) => assert_eq!(update.percent, 10),
        other => panic!("expected progress, got {other:?}"),
    }
}

#[test]
fn malformed_data_line_does_not_stop_later_dispatches() {
    let stream = concat!(
        "event: progress\n",
        "data: {\"percent\":20,\n",
        "data: {\"percent\":60}\n",
    );
    let events = parse_chunked(&[stream.as_bytes()]);
    assert_eq!(events.len(), 1);
    match &events[0] {
        TranslationEvent::Progress(update) => assert_eq!(update.percent, 60),
        other => panic!("expected progress, got {other:?}"),
    }
}

#[test]
fn trailing_partial_line_is_dropped_at_stream_end() {
    let mut parser = EventStreamParser::new();
    let events = parser.push_chunk(b"event: progress\ndata: {\"percent\":99}");
    // The stream ends here; the unterminated data line must never fire.
    assert!(events.is_empty());
}

proptest! {
    /// For every way of cutting the byte stream into delivery chunks, the
    /// dispatched events and their payloads are identical.
    #[test]
    fn dispatch_is_invariant_under_chunk_splitting(
        cut_points in proptest::collection::vec(1..WELL_FORMED_STREAM.len(), 0..8)
    ) {
        let bytes = WELL_FORMED_STREAM.as_bytes();

        let mut cuts = cut_points;
        cuts.sort_unstable();
        cuts.dedup();

        let mut chunks: Vec<&[u8]> = Vec::new();
        let mut start = 0;
        for cut in cuts {
            chunks.push(&bytes[start..cut]);
            start = cut;
        }
        chunks.push(&bytes[start..]);

        let reference = parse_chunked(&[bytes]);
        let split = parse_chunked(&chunks);

        prop_assert_eq!(as_json(&reference), as_json(&split));
    }
}
