pub mod element;

use indexmap::{IndexMap, IndexSet};

pub use element::Element;

/// A BEM block: the root selector that elements and modifiers hang off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub name: String,
    /// Block-level modifiers in first-seen order.
    pub modifiers: IndexSet<String>,
    /// Elements keyed by name, in first-seen order.
    pub elements: IndexMap<String, Element>,
}

impl Block {
    pub fn new(name: impl Into<String>) -> Self {
        Block {
            name: name.into(),
            modifiers: IndexSet::new(),
            elements: IndexMap::new(),
        }
    }

    /// A block with neither elements nor modifiers renders as a single rule.
    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty() && self.elements.is_empty()
    }

    pub fn add_modifier(&mut self, modifier: impl Into<String>) {
        self.modifiers.insert(modifier.into());
    }

    /// Get the element with this name, creating it on first use.
    /// An existing element is never replaced.
    pub fn element_mut(&mut self, name: &str) -> &mut Element {
        self.elements
            .entry(name.to_string())
            .or_insert_with(|| Element::new(name))
    }

    pub fn element(&self, name: &str) -> Option<&Element> {
        self.elements.get(name)
    }
}

/// The blocks discovered during one parse, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockSet {
    blocks: IndexMap<String, Block>,
}

impl BlockSet {
    pub fn new() -> Self {
        BlockSet::default()
    }

    /// Get the block with this name, creating it on first use.
    pub fn block_mut(&mut self, name: &str) -> &mut Block {
        self.blocks
            .entry(name.to_string())
            .or_insert_with(|| Block::new(name))
    }

    pub fn get(&self, name: &str) -> Option<&Block> {
        self.blocks.get(name)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.blocks.keys().map(|s| s.as_str())
    }
}

impl<'a> IntoIterator for &'a BlockSet {
    type Item = &'a Block;
    type IntoIter = indexmap::map::Values<'a, String, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.values()
    }
}
