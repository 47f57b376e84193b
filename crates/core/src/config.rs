//! Transformation settings, built once at startup and passed by reference.
//!
//! Defaults reproduce the classic behaviour: `r`/`j`/`c` language hints,
//! triple-backtick fences and a 79-column dash separator. A JSON file may
//! override any subset of fields.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, TransformError};

pub const DEFAULT_FENCE: &str = "```";
pub const DEFAULT_SEPARATOR: char = '-';
pub const DEFAULT_SEPARATOR_WIDTH: usize = 79;

/// Maps the first character of a language hint to a fence tag.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageRule {
	pub prefix: char,
	pub tag: String,
}

impl LanguageRule {
	pub fn new(prefix: char, tag: impl Into<String>) -> Self {
		Self { prefix, tag: tag.into() }
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransformConfig {
	/// Checked in order; the first rule whose prefix matches wins.
	pub languages: Vec<LanguageRule>,
	pub fence: String,
	pub separator: char,
	pub separator_width: usize,
	/// Drop nested tags (highlighter spans, `<code>`) from the payload.
	pub strip_markup: bool,
}

impl Default for TransformConfig {
	fn default() -> Self {
		Self {
			languages: vec![LanguageRule::new('r', "ruby"), LanguageRule::new('j', "java"), LanguageRule::new('c', "clojure")],
			fence: DEFAULT_FENCE.to_string(),
			separator: DEFAULT_SEPARATOR,
			separator_width: DEFAULT_SEPARATOR_WIDTH,
			strip_markup: false,
		}
	}
}

impl TransformConfig {
	/// Loads a JSON config file; absent fields keep their defaults.
	pub fn from_path(path: &Path) -> Result<Self> {
		let raw = std::fs::read_to_string(path).map_err(|source| TransformError::ConfigIo {
			path: path.to_path_buf(),
			source,
		})?;
		let config: TransformConfig = serde_json::from_str(&raw).map_err(|source| TransformError::ConfigParse {
			path: path.to_path_buf(),
			source,
		})?;
		debug!(target = "snipfence", path = %path.display(), languages = config.languages.len(), "loaded config");
		Ok(config)
	}

	pub fn with_strip_markup(mut self, strip_markup: bool) -> Self {
		self.strip_markup = strip_markup;
		self
	}

	/// The full separator rule, without a line break.
	pub fn separator_line(&self) -> String {
		self.separator.to_string().repeat(self.separator_width)
	}
}
