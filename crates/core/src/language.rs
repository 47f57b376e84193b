//! Language hint resolution for the fence info string.

use std::fmt;

use crate::config::TransformConfig;

/// Identifier written right after the opening fence. Empty means untagged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageTag(String);

impl LanguageTag {
	pub fn empty() -> Self {
		Self::default()
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Display for LanguageTag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Resolves a hint by its first character, case-insensitively.
///
/// A missing hint, an empty one, or one with no matching rule all resolve
/// to the empty tag.
pub fn resolve_language(hint: Option<&str>, config: &TransformConfig) -> LanguageTag {
	let Some(first) = hint.and_then(|h| h.chars().next()) else {
		return LanguageTag::empty();
	};

	config
		.languages
		.iter()
		.find(|rule| rule.prefix.to_lowercase().eq(first.to_lowercase()))
		.map(|rule| LanguageTag(rule.tag.clone()))
		.unwrap_or_default()
}
