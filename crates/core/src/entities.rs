//! Entity decoding and markup stripping for extracted payloads.

use std::sync::LazyLock;

use regex_lite::Regex;

static BR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("BR_RE should compile"));
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</?[a-zA-Z][^>]*>").expect("TAG_RE should compile"));
static REFERENCE_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"&(?:#[xX]([0-9a-fA-F]+);?|#([0-9]+);?|([A-Za-z][A-Za-z0-9]*;?))").expect("REFERENCE_RE should compile"));

/// Names HTML5 still decodes when the trailing `;` is missing.
const LEGACY_NAMES: &[(&str, char)] = &[
	("quot", '"'),
	("QUOT", '"'),
	("amp", '&'),
	("AMP", '&'),
	("lt", '<'),
	("LT", '<'),
	("gt", '>'),
	("GT", '>'),
	("nbsp", '\u{a0}'),
	("copy", '\u{a9}'),
	("COPY", '\u{a9}'),
	("reg", '\u{ae}'),
	("REG", '\u{ae}'),
];

/// Decode HTML5 named and numeric character references in a single pass.
///
/// Numeric references to NUL, surrogates or values past U+10FFFF become
/// U+FFFD, and the semicolon is optional. Named references use the full
/// HTML5 table; without a semicolon only the legacy `amp`, `lt`, `gt`,
/// `quot`, `nbsp`, `copy` and `reg` names are recognised. Windows-1252 remapping of `&#128;`
/// through `&#159;` is not applied. Anything else is left as it is.
pub fn unescape_html(s: &str) -> String {
	REFERENCE_RE
		.replace_all(s, |caps: &regex_lite::Captures| {
			if let Some(hex) = caps.get(1) {
				return numeric_char(u32::from_str_radix(hex.as_str(), 16).ok()).to_string();
			}
			if let Some(dec) = caps.get(2) {
				return numeric_char(dec.as_str().parse().ok()).to_string();
			}
			let whole = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
			let name = caps.get(3).map(|m| m.as_str()).unwrap_or_default();
			if name.ends_with(';') {
				return html_escape::decode_html_entities(whole).into_owned();
			}
			match LEGACY_NAMES.iter().find(|(legacy, _)| name.starts_with(legacy)) {
				Some((legacy, ch)) => format!("{ch}{}", &name[legacy.len()..]),
				None => whole.to_string(),
			}
		})
		.into_owned()
}

fn numeric_char(code: Option<u32>) -> char {
	code.filter(|&c| c != 0).and_then(char::from_u32).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Remove nested element tags, turning `<br>` into a line break.
///
/// Escaped angle brackets (`&lt;`) are untouched since decoding runs later.
pub fn strip_markup(s: &str) -> String {
	let result = BR_RE.replace_all(s, "\n");
	TAG_RE.replace_all(&result, "").into_owned()
}
