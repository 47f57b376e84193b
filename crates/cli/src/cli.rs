use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "snipfence")]
#[command(about = "Rewrap an HTML <pre> snippet from the clipboard as a Markdown code fence")]
#[command(version)]
pub struct Cli {
	/// Language hint; only the first letter counts (r = ruby, j = java, c = clojure)
	pub language: Option<String>,

	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// JSON file overriding the language table, fence or separator
	#[arg(short, long, value_name = "FILE")]
	pub config: Option<PathBuf>,

	/// Read the snippet from stdin instead of the clipboard
	#[arg(long)]
	pub stdin: bool,

	/// Leave the clipboard untouched
	#[arg(long)]
	pub no_copy: bool,

	/// Strip tags nested inside the <pre> element
	#[arg(long)]
	pub strip_markup: bool,
}

impl Cli {
	/// Whether any step needs the system clipboard.
	pub fn uses_clipboard(&self) -> bool {
		!self.stdin || !self.no_copy
	}
}
