//! HTML writer
//!
//! Writes every event back out as literal markup.

use std::borrow::Cow;
use std::fmt;

use crate::attributes::Attributes;
use crate::fragments::Fragments;
use crate::utilities::{end_tag, start_tag};
use crate::{Result, Writer, WriterError};

fn escape_attribute(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}

/// Writer producing HTML
#[derive(Debug, Default)]
pub struct HtmlWriter {
    fragments: Fragments,
    /// Kinds of the currently open elements
    stack: Vec<String>,
}

impl HtmlWriter {
    /// Create an empty HtmlWriter
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements currently open
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Writer for HtmlWriter {
    fn open(&mut self, kind: &str, attributes: &Attributes) {
        log::trace!("open <{kind}> at depth {}", self.stack.len() + 1);
        self.fragments
            .push(start_tag(kind, attributes, false, escape_attribute));
        self.stack.push(kind.to_string());
    }

    fn try_close(&mut self) -> Result<()> {
        let kind = self.stack.pop().ok_or(WriterError::UnbalancedClose)?;
        log::trace!("close <{kind}> at depth {}", self.stack.len() + 1);
        self.fragments.push(end_tag(&kind));
        Ok(())
    }

    fn text(&mut self, value: &str) {
        self.fragments.push(html_escape::encode_text(value));
    }

    fn self_closing(&mut self, kind: &str, attributes: &Attributes) {
        self.fragments
            .push(start_tag(kind, attributes, true, escape_attribute));
    }

    fn as_string(&self) -> String {
        self.fragments.concat()
    }
}

impl fmt::Display for HtmlWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.fragments, f)
    }
}
