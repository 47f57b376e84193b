//! Integration tests for the `snipfence` binary.
//!
//! Input is piped through `--stdin` and `--no-copy` keeps the system
//! clipboard out of the picture, so these run on headless machines.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

fn snipfence_binary() -> PathBuf {
	let mut path = std::env::current_exe().expect("current_exe should resolve");
	path.pop();
	path.pop();
	path.push("snipfence");
	path
}

fn run_snipfence(args: &[&str], stdin: &str) -> (bool, Option<i32>, String, String) {
	run_snipfence_with_log(args, stdin, None)
}

fn run_snipfence_with_log(args: &[&str], stdin: &str, rust_log: Option<&str>) -> (bool, Option<i32>, String, String) {
	let mut full_args = vec!["--stdin", "--no-copy"];
	full_args.extend_from_slice(args);

	let mut command = Command::new(snipfence_binary());
	command.args(&full_args);
	match rust_log {
		Some(filter) => command.env("RUST_LOG", filter),
		None => command.env_remove("RUST_LOG"),
	};
	let mut child = command
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.expect("Failed to execute snipfence");
	// The binary may exit before reading stdin (config errors), so a broken pipe is fine.
	let _ = child.stdin.take().expect("stdin should be piped").write_all(stdin.as_bytes());
	let output = child.wait_with_output().expect("snipfence should finish");

	let stdout = String::from_utf8_lossy(&output.stdout).to_string();
	let stderr = String::from_utf8_lossy(&output.stderr).to_string();

	(output.status.success(), output.status.code(), stdout, stderr)
}

fn rule() -> String {
	"-".repeat(79)
}

#[test]
fn converts_ruby_snippet_with_full_report() {
	let input = "<pre class=\"brush: ruby; title: ; notranslate\" title=\"\">def f(x)\n  x + 1\nend\n</pre>\n";
	let (success, _, stdout, stderr) = run_snipfence(&["ruby"], input);

	assert!(success, "Command failed: {stderr}");
	let rule = rule();
	let expected = format!(
		"{rule}\nInput:\n{rule}\n<pre class=\"brush: ruby; title: ; notranslate\" title=\"\">def f(x)\n  x + 1\nend\n</pre>\n{rule}\nOutput:\n{rule}\n```ruby\ndef f(x)\n  x + 1\nend\n```\n{rule}\n"
	);
	assert_eq!(stdout, expected);
}

#[test]
fn unescapes_entities_and_tags_by_first_letter() {
	let input = "<pre>if (a &lt; b &amp;&amp; s.equals(&quot;x&quot;)) {}</pre>";
	let (success, _, stdout, stderr) = run_snipfence(&["JAVA"], input);

	assert!(success, "Command failed: {stderr}");
	assert!(stdout.contains("```java\nif (a < b && s.equals(\"x\")) {}\n```\n"), "stdout:\n{stdout}");
}

#[test]
fn unknown_hint_gives_untagged_fence() {
	let (success, _, stdout, stderr) = run_snipfence(&["xyz"], "<pre>x</pre>");

	assert!(success, "Command failed: {stderr}");
	assert!(stdout.contains("Output:\n"));
	assert!(stdout.contains(&format!("{}\n```\nx\n```\n", rule())));
}

#[test]
fn missing_close_tag_is_tolerated() {
	let (success, _, stdout, stderr) = run_snipfence(&["clojure"], "<pre>(inc 1)\n");

	assert!(success, "Command failed: {stderr}");
	assert!(stdout.contains("```clojure\n(inc 1)\n```\n"));
}

#[test]
fn malformed_input_exits_non_zero_with_preview() {
	let input = "this clipboard text has no markup at all and is long enough to be cut short";
	let (success, code, stdout, stderr) = run_snipfence(&[], input);

	assert!(!success);
	assert_eq!(code, Some(1));
	assert!(stdout.is_empty(), "stdout should be empty, got:\n{stdout}");
	assert!(stderr.contains("malformed input"), "stderr:\n{stderr}");
	assert!(stderr.contains("this clipboard text has no markup at all and is long enough ..."), "stderr:\n{stderr}");
}

#[test]
fn malformed_input_diagnostic_survives_rust_log() {
	for filter in ["snipfence_cli=debug", "", "off", "snipfence=off"] {
		let (success, code, _, stderr) = run_snipfence_with_log(&[], "no markup", Some(filter));

		assert!(!success, "RUST_LOG={filter:?}");
		assert_eq!(code, Some(1), "RUST_LOG={filter:?}");
		assert!(stderr.contains("malformed input"), "RUST_LOG={filter:?} stderr:\n{stderr}");
	}
}

#[test]
fn lookalike_tags_are_skipped() {
	let (success, _, stdout, stderr) = run_snipfence(&["ruby"], "<preview>x</preview><pre>\nreal\n</pre>");

	assert!(success, "Command failed: {stderr}");
	assert!(stdout.contains("```ruby\nreal\n```\n"), "stdout:\n{stdout}");
}

#[test]
fn strip_markup_drops_highlighter_spans() {
	let input = "<pre class=\"hl\"><span class=\"k\">fn</span> main() {}</pre>";
	let (success, _, stdout, stderr) = run_snipfence(&["--strip-markup"], input);

	assert!(success, "Command failed: {stderr}");
	assert!(stdout.contains("```\nfn main() {}\n```\n"));
}

#[test]
fn invalid_config_file_fails() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("snipfence.json");
	std::fs::write(&path, "{ not json").unwrap();
	let path = path.to_string_lossy().to_string();

	let (success, code, _, stderr) = run_snipfence(&["-c", &path], "<pre>x</pre>");

	assert!(!success);
	assert_eq!(code, Some(1));
	assert!(stderr.contains("invalid config"), "stderr:\n{stderr}");
}
