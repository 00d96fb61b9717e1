//! Extraction of the single comparable output string from a backend-specific
//! response shape. Deterministic and stateless.

use crate::backend::RawResponse;
use crate::error::NormalizeError;

/// Event kind marking standard-output emission in an execution trace.
pub const STDOUT_EVENT_KIND: &str = "out";

/// Reduce a raw backend response to the user-visible output string.
///
/// An execution trace concatenates the text of every `"out"` event in
/// sequence order, no separators added (the backend embeds them in each
/// event's text). A trace with no `"out"` events yields the empty string.
/// A conversion response contributes only its first entry's text; an empty
/// conversion response violates the contract.
pub fn normalize(response: &RawResponse) -> Result<String, NormalizeError> {
    match response {
        RawResponse::Trace(events) => Ok(events
            .iter()
            .filter(|event| event.kind == STDOUT_EVENT_KIND)
            .map(|event| event.text.as_str())
            .collect()),
        RawResponse::Conversion(entries) => entries
            .first()
            .map(|entry| entry.text.clone())
            .ok_or(NormalizeError::EmptyConversion),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{ConversionEntry, TraceEvent};

    fn event(kind: &str, text: &str) -> TraceEvent {
        TraceEvent {
            kind: kind.to_owned(),
            text: text.to_owned(),
        }
    }

    #[test]
    fn trace_concatenates_out_events_in_order() {
        let response = RawResponse::Trace(vec![
            event("out", "Hello, "),
            event("err", "ignored"),
            event("out", "world!<br/>"),
        ]);
        assert_eq!(normalize(&response).unwrap(), "Hello, world!<br/>");
    }

    #[test]
    fn trace_with_no_out_events_is_empty_string() {
        let response = RawResponse::Trace(vec![event("err", "boom"), event("info", "x")]);
        assert_eq!(normalize(&response).unwrap(), "");
        let empty = RawResponse::Trace(Vec::new());
        assert_eq!(normalize(&empty).unwrap(), "");
    }

    #[test]
    fn conversion_takes_only_the_first_entry() {
        let response = RawResponse::Conversion(vec![
            ConversionEntry {
                text: "first".to_owned(),
            },
            ConversionEntry {
                text: "second".to_owned(),
            },
        ]);
        assert_eq!(normalize(&response).unwrap(), "first");
    }

    #[test]
    fn empty_conversion_is_a_normalization_error() {
        let response = RawResponse::Conversion(Vec::new());
        assert_eq!(
            normalize(&response).unwrap_err(),
            NormalizeError::EmptyConversion
        );
    }

    #[test]
    fn normalization_is_deterministic() {
        let response = RawResponse::Trace(vec![event("out", "6<br/>")]);
        assert_eq!(normalize(&response).unwrap(), normalize(&response).unwrap());
    }
}
