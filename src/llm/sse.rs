//! Server-Sent Events framing for Vertex AI streaming responses
//!
//! Both publishers stream standard SSE: events separated by a blank line,
//! payload carried on `data:` lines. Claude adds `event:` lines, Gemini
//! (`alt=sse`) terminates with CRLF. Only the data payload is decoded.

use bytes::Bytes;
use futures::stream::Stream;
use futures::StreamExt;
use serde::de::DeserializeOwned;
use std::pin::Pin;

use crate::llm::core::error::LlmError;

/// Raw body stream as returned by reqwest
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, reqwest::Error>> + Send>>;

/// Decode a byte stream into one JSON value of type `T` per SSE event
///
/// Bytes are buffered until a complete event arrives, so events (and UTF-8
/// sequences) split across chunks are reassembled. Events without data,
/// such as comments, are skipped. Whatever is left when the body ends is
/// decoded as a final event.
pub fn parse_sse_stream<T>(
    byte_stream: ByteStream,
) -> Pin<Box<dyn Stream<Item = Result<T, LlmError>> + Send>>
where
    T: DeserializeOwned + Send + 'static,
{
    let mut buffer: Vec<u8> = Vec::new();

    // `None` marks the end of the body
    let chunks = byte_stream
        .map(Some)
        .chain(futures::stream::once(async { None }));

    let event_stream = chunks.flat_map(move |chunk_result| {
        let chunk = match chunk_result {
            Some(Ok(bytes)) => bytes,
            Some(Err(e)) => {
                return futures::stream::iter(vec![Err(LlmError::StreamError(e.to_string()))]);
            }
            None => {
                let rest = std::mem::take(&mut buffer);
                let last = decode_event::<T>(&rest).into_iter().collect::<Vec<_>>();
                return futures::stream::iter(last);
            }
        };

        buffer.extend_from_slice(&chunk);

        let mut events = Vec::new();
        while let Some((end, separator_len)) = find_event_boundary(&buffer) {
            let raw: Vec<u8> = buffer.drain(..end + separator_len).collect();
            if let Some(event) = decode_event::<T>(&raw[..end]) {
                events.push(event);
            }
        }

        futures::stream::iter(events)
    });

    Box::pin(event_stream)
}

/// Position and length of the first blank-line separator
fn find_event_boundary(buffer: &[u8]) -> Option<(usize, usize)> {
    let lf = find_subslice(buffer, b"\n\n").map(|pos| (pos, 2));
    let crlf = find_subslice(buffer, b"\r\n\r\n").map(|pos| (pos, 4));

    match (lf, crlf) {
        (Some(a), Some(b)) => Some(if a.0 <= b.0 { a } else { b }),
        (a, b) => a.or(b),
    }
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn decode_event<T: DeserializeOwned>(raw: &[u8]) -> Option<Result<T, LlmError>> {
    let text = match std::str::from_utf8(raw) {
        Ok(text) => text,
        Err(e) => {
            return Some(Err(LlmError::StreamError(format!(
                "Invalid UTF-8 in stream: {}",
                e
            ))))
        }
    };

    let data = event_data(text)?;

    Some(serde_json::from_str::<T>(&data).map_err(|e| {
        LlmError::SerializationError(format!("Failed to parse SSE data: {}. Data: {}", e, data))
    }))
}

/// Join the event's `data:` lines; `None` when there are none
fn event_data(event_text: &str) -> Option<String> {
    let lines: Vec<&str> = event_text
        .lines()
        .filter_map(|line| line.strip_prefix("data:"))
        .map(|value| value.strip_prefix(' ').unwrap_or(value))
        .collect();

    if lines.is_empty() {
        return None;
    }

    let data = lines.join("\n");
    if data.trim().is_empty() {
        None
    } else {
        Some(data)
    }
}
