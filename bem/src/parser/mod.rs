mod split;

use tracing::{debug, trace};

use crate::block::BlockSet;

pub use split::split_first;

/// The strings that join a block to its elements and a block or element to
/// its modifiers. Both are matched literally and need not be disjoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separators {
    pub element: String,
    pub modifier: String,
}

impl Separators {
    pub fn new(element: impl Into<String>, modifier: impl Into<String>) -> Self {
        Separators {
            element: element.into(),
            modifier: modifier.into(),
        }
    }
}

impl Default for Separators {
    fn default() -> Self {
        Separators::new("__", "_")
    }
}

/// How a single class name maps onto the BEM hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassName<'a> {
    Block(&'a str),
    BlockModifier {
        block: &'a str,
        modifier: &'a str,
    },
    Element {
        block: &'a str,
        element: &'a str,
    },
    ElementModifier {
        block: &'a str,
        element: &'a str,
        modifier: &'a str,
    },
}

impl<'a> ClassName<'a> {
    /// Classify one class name. The element separator is searched once; the
    /// modifier separator is then searched inside whatever follows it, or in
    /// the whole name when there is no element part.
    pub fn classify(name: &'a str, separators: &Separators) -> Self {
        if let Some((block, rest)) = split_first(name, &separators.element) {
            return match split_first(rest, &separators.modifier) {
                Some((element, modifier)) => ClassName::ElementModifier {
                    block,
                    element,
                    modifier,
                },
                None => ClassName::Element {
                    block,
                    element: rest,
                },
            };
        }

        match split_first(name, &separators.modifier) {
            Some((block, modifier)) => ClassName::BlockModifier { block, modifier },
            None => ClassName::Block(name),
        }
    }

    pub fn block(&self) -> &'a str {
        match *self {
            ClassName::Block(block)
            | ClassName::BlockModifier { block, .. }
            | ClassName::Element { block, .. }
            | ClassName::ElementModifier { block, .. } => block,
        }
    }
}

/// Parser entry point. Holds no state between calls.
pub struct Parser {
    separators: Separators,
}

impl Parser {
    pub fn new(separators: Separators) -> Self {
        Parser { separators }
    }

    /// Build the block hierarchy for `class_names`. Blank names must already
    /// have been filtered out by the caller.
    pub fn parse<I, S>(&self, class_names: I) -> BlockSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut blocks = BlockSet::new();
        let mut seen = 0usize;

        for class_name in class_names {
            let class_name = class_name.as_ref();
            seen += 1;
            let classified = ClassName::classify(class_name, &self.separators);
            trace!(class_name, ?classified, "classified class name");
            insert(&mut blocks, classified);
        }

        debug!(class_names = seen, blocks = blocks.len(), "parsed BEM blocks");
        blocks
    }
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new(Separators::default())
    }
}

/// Parse `class_names` with the given separators.
pub fn parse<I, S>(class_names: I, separators: &Separators) -> BlockSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Parser::new(separators.clone()).parse(class_names)
}

fn insert(blocks: &mut BlockSet, class_name: ClassName<'_>) {
    let block = blocks.block_mut(class_name.block());
    match class_name {
        ClassName::Block(_) => {}
        ClassName::BlockModifier { modifier, .. } => block.add_modifier(modifier),
        ClassName::Element { element, .. } => {
            block.element_mut(element);
        }
        ClassName::ElementModifier {
            element, modifier, ..
        } => block.element_mut(element).add_modifier(modifier),
    }
}
