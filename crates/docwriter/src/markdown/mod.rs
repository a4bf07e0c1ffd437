//! Markdown writer
//!
//! Translates element events into Markdown as they arrive. Formatting that
//! depends on enclosing structure (list numbering and indentation, table
//! rows) is tracked in [`state`] and saved on a context stack so it can be
//! restored when each element closes.

mod handlers;
mod state;

use std::fmt;

use crate::attributes::{non_empty, Attributes};
use crate::fragments::Fragments;
use crate::options::WriterOptions;
use crate::utilities::{anchor, end_tag, escape_markdown, start_tag, verbatim};
use crate::{Result, Writer, WriterError};

use handlers::{AnchorPosition, ElementKind, End};
use state::{Ambient, ListId};

/// What is needed to close an open element
#[derive(Debug)]
struct Frame {
    kind: String,
    end: End,
    /// List that was current when the element opened
    saved_list: Option<ListId>,
    /// Opened through `self_closing`
    self_closing: bool,
    /// Listed in `preserve_as_html`
    preserved: bool,
}

/// Writer producing Markdown
#[derive(Debug)]
pub struct MarkdownWriter {
    options: WriterOptions,
    fragments: Fragments,
    stack: Vec<Frame>,
    ambient: Ambient,
    /// Number of open `preserve_as_html` elements
    passthrough_depth: usize,
}

impl MarkdownWriter {
    /// Create a MarkdownWriter with default options
    pub fn new() -> Self {
        Self::with_options(WriterOptions::markdown())
    }

    /// Create a MarkdownWriter with custom options
    pub fn with_options(options: WriterOptions) -> Self {
        Self {
            options,
            fragments: Fragments::new(),
            stack: Vec::new(),
            ambient: Ambient::default(),
            passthrough_depth: 0,
        }
    }

    /// Get the current options
    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    /// Number of elements currently open
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Whether elements are currently written as literal HTML
    pub fn in_passthrough(&self) -> bool {
        self.passthrough_depth > 0
    }

    /// Get the fragments written so far
    pub fn fragments(&self) -> &Fragments {
        &self.fragments
    }

    fn begin(&mut self, kind: &str, attributes: &Attributes, self_closing: bool) {
        let preserved = self.options.is_preserved(kind);
        if preserved {
            self.passthrough_depth += 1;
            if self.passthrough_depth == 1 {
                log::debug!("entering passthrough at <{kind}>");
            }
        }

        let opening = ElementKind::from_name(kind).open(attributes, &mut self.ambient);
        self.stack.push(Frame {
            kind: kind.to_string(),
            end: opening.end,
            saved_list: self.ambient.current_list,
            self_closing,
            preserved,
        });
        log::trace!("open <{kind}> at depth {}", self.stack.len());

        if opening.anchor == AnchorPosition::Before {
            self.write_anchor(attributes);
        }

        let start = opening.start.resolve(&mut self.ambient);
        if self.in_passthrough() {
            self.fragments
                .push(start_tag(kind, attributes, self_closing, verbatim));
        } else {
            self.fragments.push(start);
        }

        if opening.anchor == AnchorPosition::After {
            self.write_anchor(attributes);
        }
    }

    fn finish(&mut self, frame: Frame) {
        log::trace!("close <{}> at depth {}", frame.kind, self.stack.len() + 1);

        if frame.end == End::List {
            if let Some(id) = self.ambient.current_list {
                self.ambient.lists.leave(id);
            }
        }
        self.ambient.current_list = frame.saved_list;
        let end = frame.end.resolve(&mut self.ambient);
        if !self.in_passthrough() {
            self.fragments.push(end);
        } else if !frame.self_closing {
            self.fragments.push(end_tag(&frame.kind));
        }

        if frame.preserved {
            self.passthrough_depth = self.passthrough_depth.saturating_sub(1);
            if self.passthrough_depth == 0 {
                log::debug!("leaving passthrough at </{}>", frame.kind);
                self.fragments.push("\n\n");
            }
        }
    }

    fn write_anchor(&mut self, attributes: &Attributes) {
        if let Some(id) = non_empty(attributes, "id") {
            self.fragments.push(anchor(id));
        }
    }
}

impl Default for MarkdownWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer for MarkdownWriter {
    fn open(&mut self, kind: &str, attributes: &Attributes) {
        self.begin(kind, attributes, false);
    }

    fn try_close(&mut self) -> Result<()> {
        let frame = self.stack.pop().ok_or(WriterError::UnbalancedClose)?;
        self.finish(frame);
        Ok(())
    }

    fn text(&mut self, value: &str) {
        if self.in_passthrough() {
            self.fragments.push(value);
        } else {
            self.fragments.push(escape_markdown(value));
        }
    }

    fn self_closing(&mut self, kind: &str, attributes: &Attributes) {
        self.begin(kind, attributes, true);
        if let Some(frame) = self.stack.pop() {
            self.finish(frame);
        }
    }

    fn as_string(&self) -> String {
        self.fragments.concat()
    }
}

impl fmt::Display for MarkdownWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.fragments, f)
    }
}
