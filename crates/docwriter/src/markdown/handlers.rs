//! Formatting rules for each element kind.
//!
//! Every rule produces Markdown text. Passthrough mode is handled by the
//! writer, which still runs the rules for their effect on list and table
//! context and then writes literal tags instead.

use crate::attributes::{non_empty, Attributes};

use super::state::Ambient;

/// Recognized element kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ElementKind {
    Paragraph,
    LineBreak,
    List { ordered: bool },
    ListItem,
    /// Same delimiter on both sides (strong, emphasis, pre)
    Delimited(&'static str),
    Link,
    Image,
    Heading(usize),
    Table,
    TableRow,
    TableCell,
    /// Writes no decoration of its own
    Unknown,
}

/// Where the id-anchor goes relative to the start text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum AnchorPosition {
    Before,
    #[default]
    After,
}

/// Text written when an element opens
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Start {
    Text(String),
    /// Opening a list creates the new list context, so it runs after the
    /// enclosing list has been saved
    List { ordered: bool },
}

/// Text written when an element closes
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum End {
    Text(String),
    List,
    ListItem,
    Table,
    TableRow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Opening {
    pub start: Start,
    pub end: End,
    pub anchor: AnchorPosition,
}

impl Opening {
    fn text(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: Start::Text(start.into()),
            end: End::Text(end.into()),
            anchor: AnchorPosition::After,
        }
    }

    fn empty() -> Self {
        Self::text("", "")
    }
}

impl ElementKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "p" => ElementKind::Paragraph,
            "br" => ElementKind::LineBreak,
            "ul" => ElementKind::List { ordered: false },
            "ol" => ElementKind::List { ordered: true },
            "li" => ElementKind::ListItem,
            "strong" => ElementKind::Delimited("__"),
            "em" | "i" => ElementKind::Delimited("*"),
            "b" => ElementKind::Delimited("**"),
            "pre" => ElementKind::Delimited("```"),
            "a" => ElementKind::Link,
            "img" => ElementKind::Image,
            "table" => ElementKind::Table,
            "tr" => ElementKind::TableRow,
            "td" => ElementKind::TableCell,
            "h1" => ElementKind::Heading(1),
            "h2" => ElementKind::Heading(2),
            "h3" => ElementKind::Heading(3),
            "h4" => ElementKind::Heading(4),
            "h5" => ElementKind::Heading(5),
            "h6" => ElementKind::Heading(6),
            _ => ElementKind::Unknown,
        }
    }

    /// Apply the rule for an opening element
    pub fn open(self, attributes: &Attributes, ambient: &mut Ambient) -> Opening {
        let in_table = ambient.in_table();

        match self {
            ElementKind::Paragraph => Opening::text("", if in_table { " " } else { "\n\n" }),

            ElementKind::LineBreak => Opening::text(if in_table { " " } else { "  \n" }, ""),

            ElementKind::List { ordered } => Opening {
                start: Start::List { ordered },
                end: End::List,
                anchor: AnchorPosition::After,
            },

            ElementKind::ListItem => {
                ambient.list_item.open();
                let (indent, bullet) = match ambient.current_list {
                    Some(id) => {
                        let list = ambient.lists.next_item(id);
                        (list.indent, list.bullet())
                    }
                    None => (0, "-".to_string()),
                };
                let start = if in_table {
                    String::new()
                } else {
                    format!("{}{} ", "\t".repeat(indent), bullet)
                };
                Opening {
                    start: Start::Text(start),
                    end: End::ListItem,
                    anchor: AnchorPosition::After,
                }
            }

            ElementKind::Delimited(delimiter) => Opening::text(delimiter, delimiter),

            ElementKind::Link => match non_empty(attributes, "href") {
                Some(href) => Opening {
                    start: Start::Text("[".to_string()),
                    end: End::Text(format!("]({href})")),
                    anchor: AnchorPosition::Before,
                },
                None => Opening::empty(),
            },

            ElementKind::Image => {
                let src = non_empty(attributes, "src");
                let alt = non_empty(attributes, "alt");
                if src.is_none() && alt.is_none() {
                    return Opening::empty();
                }
                let image = format!("![{}]({})", alt.unwrap_or(""), src.unwrap_or(""));
                Opening::text(image, "")
            }

            ElementKind::Heading(level) => {
                if in_table {
                    Opening::text("", " ")
                } else {
                    Opening::text(format!("{} ", "#".repeat(level)), "\n\n")
                }
            }

            ElementKind::Table => {
                ambient.table.enter();
                Opening {
                    start: Start::Text(String::new()),
                    end: End::Table,
                    anchor: AnchorPosition::After,
                }
            }

            ElementKind::TableRow => Opening {
                start: Start::Text(String::new()),
                end: End::TableRow,
                anchor: AnchorPosition::After,
            },

            ElementKind::TableCell => {
                ambient.table.open_cell();
                Opening::text("|", "")
            }

            ElementKind::Unknown => Opening::empty(),
        }
    }
}

impl Start {
    /// Produce the start text, entering a new list if this opens one
    pub fn resolve(self, ambient: &mut Ambient) -> String {
        match self {
            Start::Text(text) => text,
            Start::List { ordered } => {
                let parent = ambient.current_list;
                let text = if parent.is_some() && !ambient.in_table() {
                    "\n"
                } else {
                    ""
                };
                ambient.current_list = Some(ambient.lists.enter(parent, ordered));
                text.to_string()
            }
        }
    }
}

impl End {
    /// Produce the end text.
    ///
    /// Runs after the writer has restored the list context that was current
    /// when the element opened.
    pub fn resolve(self, ambient: &mut Ambient) -> String {
        let in_table = ambient.in_table();

        match self {
            End::Text(text) => text,
            End::List => {
                if in_table || ambient.current_list.is_some() {
                    String::new()
                } else {
                    "\n".to_string()
                }
            }
            End::ListItem => {
                if !ambient.list_item.close() {
                    String::new()
                } else if in_table {
                    ";".to_string()
                } else {
                    "\n".to_string()
                }
            }
            End::Table => {
                ambient.table.leave();
                "\n".to_string()
            }
            End::TableRow => ambient.table.close_row(),
        }
    }
}
