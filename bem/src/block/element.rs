use indexmap::IndexSet;

/// A named part of a block, e.g. `title` in `card__title`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    /// Element modifiers in first-seen order.
    pub modifiers: IndexSet<String>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            modifiers: IndexSet::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    pub fn add_modifier(&mut self, modifier: impl Into<String>) {
        self.modifiers.insert(modifier.into());
    }
}
