//! docwriter - streaming element writers
//!
//! This crate turns an ordered stream of element events ("open", "text",
//! "close", "self-closing") into a document string. Two writers share the
//! same [`Writer`] interface:
//!
//! - [`MarkdownWriter`] translates a fixed set of element kinds into Markdown
//!   syntax, tracking list and table context as it goes.
//! - [`HtmlWriter`] emits the events back out as literal markup.
//!
//! # Architecture
//!
//! ```text
//!                 ┌──────────────────┐
//!  open / text    │  Context Stack   │
//!  close ────────▶│  List / Table    │ ──▶ Fragments ──▶ String
//!  self-closing   │  Passthrough     │
//!                 └──────────────────┘
//! ```
//!
//! Events are applied as they arrive; no tree is retained.
//!
//! # Example
//!
//! ```rust
//! use docwriter::{writer, Attributes, Writer, WriterOptions};
//!
//! let mut out = writer(WriterOptions::markdown());
//!
//! out.open_plain("h1");
//! out.text("Hello");
//! out.close();
//!
//! let mut link = Attributes::new();
//! link.insert("href".to_string(), "http://example.com".to_string());
//! out.open("a", &link);
//! out.text("World");
//! out.close();
//!
//! assert_eq!(out.as_string(), "# Hello\n\n[World](http://example.com)");
//! ```

mod attributes;
mod fragments;
mod html;
mod markdown;
mod options;
mod utilities;

pub use attributes::{attributes, Attributes};
pub use fragments::Fragments;
pub use html::HtmlWriter;
pub use markdown::MarkdownWriter;
pub use options::{OutputFormat, WriterOptions};
pub use utilities::escape_markdown;

/// Error type for writer operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WriterError {
    #[error("Unbalanced close: no element is open")]
    UnbalancedClose,
}

pub type Result<T> = std::result::Result<T, WriterError>;

/// An event-driven document writer.
///
/// Callers are trusted to pair every `open` with exactly one `close`.
pub trait Writer {
    /// Start an element of the given kind.
    fn open(&mut self, kind: &str, attributes: &Attributes);

    /// Finish the most recently opened element.
    fn try_close(&mut self) -> Result<()>;

    /// Append character data.
    fn text(&mut self, value: &str);

    /// Write an element that has no content.
    fn self_closing(&mut self, kind: &str, attributes: &Attributes);

    /// Everything written so far, concatenated.
    fn as_string(&self) -> String;

    /// Finish the most recently opened element, ignoring an unbalanced call.
    fn close(&mut self) {
        if let Err(err) = self.try_close() {
            log::warn!("ignoring close: {err}");
        }
    }

    /// Start an element that has no attributes.
    fn open_plain(&mut self, kind: &str) {
        self.open(kind, &Attributes::new());
    }

    /// Write a content-less element that has no attributes.
    fn self_closing_plain(&mut self, kind: &str) {
        self.self_closing(kind, &Attributes::new());
    }
}

/// Create the writer selected by `options.output_format`.
pub fn writer(options: WriterOptions) -> Box<dyn Writer> {
    match options.output_format {
        OutputFormat::Markdown => Box::new(MarkdownWriter::with_options(options)),
        OutputFormat::Html => Box::new(HtmlWriter::new()),
    }
}
