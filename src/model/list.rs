/// Name of the top-level list. Every other list is named after the
/// parent item that was selected to reach it.
pub const ROOT_LIST: &str = "list";

/// An ordered sequence of to-do items, identified by name.
///
/// Items are opaque text; duplicates are allowed. One screen owns one
/// `TodoList` in memory at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    pub name: String,
    pub items: Vec<String>,
}

impl TodoList {
    pub fn new(name: impl Into<String>, items: Vec<String>) -> Self {
        TodoList {
            name: name.into(),
            items,
        }
    }

    /// Append an item. Returns false (and changes nothing) if the text is
    /// empty after trimming; accepted text is stored as typed, untrimmed.
    pub fn add(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.items.push(text.to_string());
        true
    }

    /// Remove the item at `index`, returning it. The returned text is also
    /// the name of the nested list headed by that item.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
