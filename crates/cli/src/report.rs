//! Before/after report printed to stdout.

use snipfence::TransformConfig;

/// Renders the input and output sections, each between separator rules.
pub fn render_report(input: &str, output: &str, config: &TransformConfig) -> String {
	let rule = config.separator_line();
	let mut report = format!("{rule}\n");
	for (heading, body) in [("Input:", input), ("Output:", output)] {
		report.push_str(heading);
		report.push('\n');
		report.push_str(&sandwich(body, &rule));
	}
	report
}

fn sandwich(body: &str, rule: &str) -> String {
	format!("{rule}\n{}\n{rule}\n", chomp(body))
}

/// Removes one trailing line break, if any.
fn chomp(s: &str) -> &str {
	s.strip_suffix("\r\n").or_else(|| s.strip_suffix('\n')).unwrap_or(s)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn report_layout_matches_sections() {
		let config = TransformConfig {
			separator_width: 3,
			..TransformConfig::default()
		};
		let report = render_report("<pre>x</pre>\n", "```\nx\n```\n", &config);
		assert_eq!(report, "---\nInput:\n---\n<pre>x</pre>\n---\nOutput:\n---\n```\nx\n```\n---\n");
	}

	#[test]
	fn default_rule_is_79_wide() {
		let report = render_report("a", "b", &TransformConfig::default());
		let first = report.lines().next().unwrap();
		assert_eq!(first, "-".repeat(79));
		assert_eq!(report.lines().count(), 9);
	}

	#[test]
	fn chomp_only_removes_one_break() {
		assert_eq!(chomp("a\n\n"), "a\n");
		assert_eq!(chomp("a\r\n"), "a");
		assert_eq!(chomp("a"), "a");
	}
}
