//! Locating the payload of a `<pre>` element in raw clipboard text.

use tracing::{debug, trace};

use crate::error::{Result, TransformError};

const PRE_OPEN: &str = "<pre";
const PRE_CLOSE: &str = "</pre>";

/// Returns the text between the opening `<pre ...>` tag and the first `</pre>`.
///
/// The opening tag ends at the first `>` after a `<pre` tag name; when there
/// is no such tag the first `>` in the input is used instead. A missing
/// `</pre>` is tolerated and yields the whole remainder. As in HTML parsing,
/// one line break right after the opening tag is dropped. Trailing whitespace
/// is trimmed.
pub fn extract_pre_payload(input: &str) -> Result<&str> {
	let folded = input.to_ascii_lowercase();

	let terminator = find_pre_open(&folded)
		.and_then(|open| folded[open..].find('>').map(|offset| open + offset))
		.or_else(|| folded.find('>'))
		.ok_or_else(|| TransformError::malformed(input))?;

	let mut body_start = terminator + 1;
	if folded[body_start..].starts_with("\r\n") {
		body_start += 2;
	} else if folded[body_start..].starts_with('\n') {
		body_start += 1;
	}
	let body_end = match folded[body_start..].find(PRE_CLOSE) {
		Some(offset) => body_start + offset,
		None => {
			debug!(target = "snipfence", "no closing </pre>, using remainder of input");
			input.len()
		}
	};

	let payload = input[body_start..body_end].trim_end();
	trace!(target = "snipfence", start = body_start, end = body_end, len = payload.len(), "extracted payload");
	Ok(payload)
}

/// Offset of the first `<pre` that is the whole tag name, so `<preview>` is skipped.
fn find_pre_open(folded: &str) -> Option<usize> {
	folded.match_indices(PRE_OPEN).map(|(open, _)| open).find(|&open| {
		folded[open + PRE_OPEN.len()..]
			.bytes()
			.next()
			.is_some_and(|next| next == b'>' || next == b'/' || next.is_ascii_whitespace())
	})
}
