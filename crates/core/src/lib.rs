//! Conversion of copied HTML `<pre>` snippets into Markdown fenced code blocks.
//!
//! The transformation runs in isolated stages so each can be tested alone:
//!
//! * [`resolve_language`] maps a short hint (`ruby`, `j`, ...) to a fence tag
//! * [`extract_pre_payload`] finds the text inside the `<pre>` element
//! * [`unescape_html`] decodes character references
//! * [`format_fenced`] wraps the result in a fence
//!
//! [`transform`] chains them using a [`TransformConfig`].

pub mod config;
pub mod entities;
pub mod error;
pub mod extract;
pub mod fence;
pub mod language;
pub mod pipeline;

pub use config::{LanguageRule, TransformConfig};
pub use entities::{strip_markup, unescape_html};
pub use error::{Result, TransformError};
pub use extract::extract_pre_payload;
pub use fence::format_fenced;
pub use language::{LanguageTag, resolve_language};
pub use pipeline::{Snippet, transform};
