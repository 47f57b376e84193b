use snipfence::TransformError;
use thiserror::Error;

use crate::clipboard::ClipboardError;

#[derive(Debug, Error)]
pub enum CliError {
	#[error(transparent)]
	Transform(#[from] TransformError),

	#[error(transparent)]
	Clipboard(#[from] ClipboardError),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error(transparent)]
	Anyhow(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
