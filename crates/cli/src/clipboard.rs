//! System clipboard access through the platform's copy/paste utilities.
//!
//! The first backend whose utilities are all on `PATH` is used. Copies are
//! staged through a temporary file that becomes the utility's stdin.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ClipboardError {
	#[error("no clipboard utility found on PATH (tried: {tried})")]
	Unavailable { tried: String },

	#[error("failed to run {program}: {source}")]
	Spawn {
		program: String,
		#[source]
		source: io::Error,
	},

	#[error("{program} exited with {status}")]
	Failed { program: String, status: ExitStatus },

	#[error("clipboard text is not valid UTF-8")]
	NotUtf8(#[from] std::string::FromUtf8Error),

	#[error("failed to stage clipboard text in a temp file: {0}")]
	Staging(#[source] io::Error),
}

/// A single-slot text register, last writer wins.
pub trait Clipboard {
	fn read_text(&self) -> Result<String, ClipboardError>;
	fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// A resolved program plus its fixed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
	pub program: PathBuf,
	pub args: Vec<String>,
}

impl ToolCommand {
	pub fn new(program: impl Into<PathBuf>, args: &[&str]) -> Self {
		Self {
			program: program.into(),
			args: args.iter().map(|a| a.to_string()).collect(),
		}
	}

	fn command(&self) -> Command {
		let mut cmd = Command::new(&self.program);
		cmd.args(&self.args);
		cmd
	}

	fn label(&self) -> String {
		self.program.display().to_string()
	}
}

struct Backend {
	name: &'static str,
	/// Only considered when this environment variable is set.
	requires_env: Option<&'static str>,
	paste: (&'static str, &'static [&'static str]),
	copy: (&'static str, &'static [&'static str]),
}

const BACKENDS: &[Backend] = &[
	Backend {
		name: "pasteboard",
		requires_env: None,
		paste: ("pbpaste", &[]),
		copy: ("pbcopy", &[]),
	},
	Backend {
		name: "wayland",
		requires_env: Some("WAYLAND_DISPLAY"),
		paste: ("wl-paste", &["--no-newline"]),
		copy: ("wl-copy", &[]),
	},
	Backend {
		name: "xclip",
		requires_env: None,
		paste: ("xclip", &["-selection", "clipboard", "-out"]),
		copy: ("xclip", &["-selection", "clipboard", "-in"]),
	},
	Backend {
		name: "xsel",
		requires_env: None,
		paste: ("xsel", &["--clipboard", "--output"]),
		copy: ("xsel", &["--clipboard", "--input"]),
	},
	Backend {
		name: "windows",
		requires_env: None,
		paste: (
			"powershell",
			&["-NoProfile", "-Command", "[Console]::OutputEncoding = [Text.Encoding]::UTF8; Get-Clipboard -Raw"],
		),
		// `clip` decodes stdin with the console code page and mangles UTF-8.
		copy: (
			"powershell",
			&[
				"-NoProfile",
				"-Command",
				"[Console]::InputEncoding = [Text.Encoding]::UTF8; Set-Clipboard -Value ([Console]::In.ReadToEnd())",
			],
		),
	},
];

/// Clipboard backed by external utilities.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
	paste: ToolCommand,
	copy: ToolCommand,
}

impl SystemClipboard {
	pub fn new(paste: ToolCommand, copy: ToolCommand) -> Self {
		Self { paste, copy }
	}

	/// Picks the first backend available on this machine.
	pub fn detect() -> Result<Self, ClipboardError> {
		for backend in BACKENDS {
			if backend.requires_env.is_some_and(|var| std::env::var_os(var).is_none()) {
				continue;
			}
			let (Ok(paste), Ok(copy)) = (which::which(backend.paste.0), which::which(backend.copy.0)) else {
				continue;
			};
			info!(target = "snipfence", backend = backend.name, "using clipboard backend");
			return Ok(Self::new(ToolCommand::new(paste, backend.paste.1), ToolCommand::new(copy, backend.copy.1)));
		}

		let tried = BACKENDS.iter().map(|b| b.name).collect::<Vec<_>>().join(", ");
		Err(ClipboardError::Unavailable { tried })
	}
}

impl Clipboard for SystemClipboard {
	fn read_text(&self) -> Result<String, ClipboardError> {
		let program = self.paste.label();
		let output = self
			.paste
			.command()
			.stdin(Stdio::null())
			.stderr(Stdio::inherit())
			.output()
			.map_err(|source| ClipboardError::Spawn {
				program: program.clone(),
				source,
			})?;
		if !output.status.success() {
			return Err(ClipboardError::Failed { program, status: output.status });
		}

		let text = String::from_utf8(output.stdout)?;
		debug!(target = "snipfence", %program, bytes = text.len(), "read clipboard");
		Ok(text)
	}

	fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
		let mut staged = tempfile::NamedTempFile::new().map_err(ClipboardError::Staging)?;
		staged.write_all(text.as_bytes()).map_err(ClipboardError::Staging)?;
		staged.flush().map_err(ClipboardError::Staging)?;
		let stdin = staged.reopen().map_err(ClipboardError::Staging)?;

		// X11 utilities fork a daemon that keeps inherited pipes open, so
		// nothing is captured from stdout/stderr here.
		let program = self.copy.label();
		let status = self
			.copy
			.command()
			.stdin(Stdio::from(stdin))
			.stdout(Stdio::null())
			.stderr(Stdio::null())
			.status()
			.map_err(|source| ClipboardError::Spawn {
				program: program.clone(),
				source,
			})?;
		if !status.success() {
			return Err(ClipboardError::Failed { program, status });
		}

		debug!(target = "snipfence", %program, staged = %staged.path().display(), bytes = text.len(), "wrote clipboard");
		Ok(())
	}
}
