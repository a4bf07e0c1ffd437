//! Ambient list and table context shared across sibling elements

/// Index of a list in [`Lists`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ListId(usize);

/// A list being written
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ListState {
    pub is_ordered: bool,
    /// Nesting depth, 0 for a top-level list
    pub indent: usize,
    /// Items opened so far
    pub count: usize,
}

impl ListState {
    /// Marker for the next item, `-` or `N.`
    pub fn bullet(&self) -> String {
        if self.is_ordered {
            format!("{}.", self.count)
        } else {
            "-".to_string()
        }
    }
}

/// Every list opened by a writer.
///
/// Context frames refer to lists by id so that item counts are shared by all
/// frames that saw the same list.
#[derive(Debug, Default)]
pub(crate) struct Lists {
    lists: Vec<ListState>,
}

impl Lists {
    /// Start a list nested inside `parent` (if any)
    pub fn enter(&mut self, parent: Option<ListId>, is_ordered: bool) -> ListId {
        let indent = parent.map_or(0, |id| self.get(id).indent + 1);
        self.lists.push(ListState {
            is_ordered,
            indent,
            count: 0,
        });
        ListId(self.lists.len() - 1)
    }

    pub fn get(&self, id: ListId) -> &ListState {
        &self.lists[id.0]
    }

    /// Drop a closed list.
    ///
    /// Lists close innermost first, so the closing list is the newest entry
    /// and no open frame still refers to it.
    pub fn leave(&mut self, id: ListId) {
        if id.0 + 1 == self.lists.len() {
            self.lists.pop();
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Count a new item and return the list as it stands after counting
    pub fn next_item(&mut self, id: ListId) -> &ListState {
        let list = &mut self.lists[id.0];
        list.count += 1;
        list
    }
}

/// Whether the most recently opened list item has written its terminator.
///
/// There is one flag per writer, not per item: a nested item closing sets it,
/// which suppresses the terminator of the item that contains the nested list.
#[derive(Debug, Default)]
pub(crate) struct ListItemState {
    has_closed: bool,
}

impl ListItemState {
    pub fn open(&mut self) {
        self.has_closed = false;
    }

    /// Returns true the first time it is called after [`open`](Self::open)
    pub fn close(&mut self) -> bool {
        !std::mem::replace(&mut self.has_closed, true)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct TableState {
    pub is_table: bool,
    /// Rows closed so far
    pub row_count: usize,
    /// Cells opened in the current row
    pub column_count: usize,
}

impl TableState {
    pub fn enter(&mut self) {
        *self = Self {
            is_table: true,
            ..Self::default()
        };
    }

    pub fn leave(&mut self) {
        *self = Self::default();
    }

    pub fn open_cell(&mut self) {
        self.column_count += 1;
    }

    /// Finish a row; the first row is followed by the header separator
    pub fn close_row(&mut self) -> String {
        let mut end = String::from("|\n");
        if self.row_count == 0 {
            end.push('|');
            end.push_str(&"-|".repeat(self.column_count));
            end.push('\n');
        }
        self.row_count += 1;
        self.column_count = 0;
        end
    }
}

/// Context that formatting rules read and update as elements open and close
#[derive(Debug, Default)]
pub(crate) struct Ambient {
    pub lists: Lists,
    /// Innermost open list
    pub current_list: Option<ListId>,
    pub list_item: ListItemState,
    pub table: TableState,
}

impl Ambient {
    pub fn in_table(&self) -> bool {
        self.table.is_table
    }
}
