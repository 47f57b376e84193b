//! One invocation: read, transform, report, copy.

use std::io::{self, Read, Write};

use anyhow::{Context, anyhow};
use snipfence::{TransformConfig, resolve_language, transform};
use tracing::info;

use crate::cli::Cli;
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::error::Result;
use crate::report::render_report;

/// Builds the config from defaults, the optional file, then flags.
pub fn load_config(cli: &Cli) -> Result<TransformConfig> {
	let config = match &cli.config {
		Some(path) => TransformConfig::from_path(path)?,
		None => TransformConfig::default(),
	};
	let strip_markup = config.strip_markup || cli.strip_markup;
	Ok(config.with_strip_markup(strip_markup))
}

/// Runs against the real clipboard and process stdio.
pub fn execute(cli: &Cli) -> Result<()> {
	let config = load_config(cli)?;
	let clipboard = if cli.uses_clipboard() { Some(SystemClipboard::detect()?) } else { None };

	let stdin = io::stdin();
	let stdout = io::stdout();
	run(
		cli,
		&config,
		clipboard.as_ref().map(|c| c as &dyn Clipboard),
		stdin.lock(),
		&mut stdout.lock(),
	)
}

pub fn run(cli: &Cli, config: &TransformConfig, clipboard: Option<&dyn Clipboard>, input: impl Read, out: &mut impl Write) -> Result<()> {
	let raw = if cli.stdin {
		io::read_to_string(input).context("failed to read snippet from stdin")?
	} else {
		require(clipboard)?.read_text()?
	};

	let language = resolve_language(cli.language.as_deref(), config);
	info!(target = "snipfence", hint = ?cli.language, %language, input_len = raw.len(), "transforming snippet");
	let snippet = transform(&raw, &language, config)?;

	out.write_all(render_report(&raw, &snippet.markdown, config).as_bytes())?;
	out.flush()?;

	if cli.no_copy {
		info!(target = "snipfence", "clipboard left untouched");
	} else {
		require(clipboard)?.write_text(&snippet.markdown)?;
		info!(target = "snipfence", bytes = snippet.markdown.len(), "copied fenced block to clipboard");
	}
	Ok(())
}

fn require(clipboard: Option<&dyn Clipboard>) -> Result<&dyn Clipboard> {
	Ok(clipboard.ok_or_else(|| anyhow!("clipboard access required but no clipboard was configured"))?)
}
