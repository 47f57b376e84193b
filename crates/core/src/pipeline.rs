//! Orchestration of the extract, clean, unescape and fence stages.

use tracing::debug;

use crate::config::TransformConfig;
use crate::entities::{strip_markup, unescape_html};
use crate::error::Result;
use crate::extract::extract_pre_payload;
use crate::fence::format_fenced;
use crate::language::LanguageTag;

/// Result of transforming one clipboard snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
	/// Unescaped payload, without fences.
	pub code: String,
	pub language: LanguageTag,
	/// The fenced Markdown block, ending in a line break.
	pub markdown: String,
}

pub fn transform(input: &str, language: &LanguageTag, config: &TransformConfig) -> Result<Snippet> {
	let payload = extract_pre_payload(input)?;
	let payload = if config.strip_markup {
		strip_markup(payload)
	} else {
		payload.to_string()
	};
	let code = unescape_html(&payload);
	let markdown = format_fenced(&code, language, &config.fence);

	debug!(target = "snipfence", language = %language, code_len = code.len(), "transformed snippet");
	Ok(Snippet {
		code,
		language: language.clone(),
		markdown,
	})
}
