//! Percent-encoding for identifiers interpolated into API paths.
//!
//! Public ids come from user input (CLI arguments, TUI prompts) and from
//! server responses. Encoding them keeps a stray `/` or `?` from changing
//! which resource a request targets.

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters encoded in a single path segment.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for use as one URL path segment.
///
/// ```
/// use inventory_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("A1B2C3"), "A1B2C3");
/// assert_eq!(encode_path_segment("a/b"), "a%2Fb");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
