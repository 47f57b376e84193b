//! Markdown fenced code block rendering.

use crate::config::DEFAULT_FENCE;
use crate::language::LanguageTag;

/// Wraps `payload` as `{fence}{tag}\n{payload}\n{fence}\n`.
///
/// When a payload line opens with a run of the fence character at least as
/// long as `fence`, the fence grows to one more than the longest such run.
pub fn format_fenced(payload: &str, tag: &LanguageTag, fence: &str) -> String {
	let fence = fence_for(payload, if fence.is_empty() { DEFAULT_FENCE } else { fence });
	format!("{fence}{tag}\n{payload}\n{fence}\n")
}

fn fence_for(payload: &str, fence: &str) -> String {
	let Some(marker) = fence.chars().next() else {
		return fence.to_string();
	};
	let base = fence.chars().count();

	let longest = payload
		.lines()
		.map(|line| line.trim_start().chars().take_while(|&c| c == marker).count())
		.max()
		.unwrap_or(0);

	if longest >= base {
		marker.to_string().repeat(longest + 1)
	} else {
		fence.to_string()
	}
}
