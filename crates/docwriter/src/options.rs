//! Configuration options for the writers

use std::convert::Infallible;
use std::str::FromStr;

use indexmap::IndexSet;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Translate elements into Markdown syntax
    Markdown,
    /// Write elements back out as literal markup
    #[default]
    Html,
}

impl FromStr for OutputFormat {
    type Err = Infallible;

    /// Anything other than "markdown" selects [`OutputFormat::Html`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "markdown" => OutputFormat::Markdown,
            _ => OutputFormat::Html,
        })
    }
}

/// Options for creating a writer
#[derive(Debug, Clone, Default)]
pub struct WriterOptions {
    /// Output format
    pub output_format: OutputFormat,

    /// Element kinds written as literal HTML, together with everything nested
    /// inside them (Markdown output only)
    pub preserve_as_html: IndexSet<String>,
}

impl WriterOptions {
    /// Options selecting Markdown output
    pub fn markdown() -> Self {
        Self {
            output_format: OutputFormat::Markdown,
            ..Default::default()
        }
    }

    /// Options selecting HTML output
    pub fn html() -> Self {
        Self {
            output_format: OutputFormat::Html,
            ..Default::default()
        }
    }

    /// Add element kinds to keep as literal HTML
    pub fn preserve_as_html<I, S>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for kind in kinds {
            self.preserve_as_html.insert(kind.into());
        }
        self
    }

    /// Check if an element kind is kept as literal HTML
    pub fn is_preserved(&self, kind: &str) -> bool {
        self.preserve_as_html.contains(kind)
    }
}
