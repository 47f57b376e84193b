//! Error types for snippet transformation and config loading.

use std::path::PathBuf;

use thiserror::Error;

/// Number of characters kept when previewing offending input.
pub const PREVIEW_CHARS: usize = 60;

#[derive(Debug, Error)]
pub enum TransformError {
	/// The input has no `>` at all, so no opening tag can end anywhere.
	#[error("malformed input: no tag terminator '>' found in {preview:?}")]
	MalformedInput { preview: String },

	#[error("failed to read config {}: {source}", .path.display())]
	ConfigIo {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("invalid config {}: {source}", .path.display())]
	ConfigParse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}

impl TransformError {
	pub(crate) fn malformed(input: &str) -> Self {
		TransformError::MalformedInput { preview: preview(input) }
	}
}

pub type Result<T> = std::result::Result<T, TransformError>;

/// First [`PREVIEW_CHARS`] characters of `input`, with `...` appended when cut.
pub fn preview(input: &str) -> String {
	match input.char_indices().nth(PREVIEW_CHARS) {
		Some((cut, _)) => format!("{}...", &input[..cut]),
		None => input.to_string(),
	}
}
