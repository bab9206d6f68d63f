//! Prefix tree over dictionary words
//!
//! Nodes live in a flat arena and refer to their children by index, so the finished
//! tree is a plain `Vec` that can be shared read-only across threads.
//!
//! ```text
//! (root)--h--e*--l--l*--o*     * marks a complete word
//! (root)--h--e--l--l-x-q       no child for 'q': stop searching
//! ```

use rustc_hash::FxHashMap;

/// Handle to a node in a [`PrefixTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

#[derive(Debug, Default, Clone)]
struct Node {
    children: FxHashMap<char, NodeId>,
    is_word: bool,
}

/// Dictionary stored as a prefix tree
#[derive(Debug, Clone)]
pub struct PrefixTree {
    nodes: Vec<Node>,
    word_count: usize,
}

impl Default for PrefixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixTree {
    /// The root node, reached by the empty prefix
    pub const ROOT: NodeId = NodeId(0);

    /// Create an empty tree
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            word_count: 0,
        }
    }

    /// Build a tree from raw words, lowercasing each one
    ///
    /// # Examples
    /// ```
    /// use wordbrain_solver::dictionary::PrefixTree;
    ///
    /// let tree = PrefixTree::from_words(["Donut", "donate", "DON"]);
    /// assert!(tree.contains("donut"));
    /// assert!(tree.contains("don"));
    /// assert!(!tree.contains("do"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = Self::new();
        for word in words {
            tree.insert(&word.as_ref().to_lowercase());
        }
        tree
    }

    /// Add a word, creating any missing nodes along its path
    ///
    /// Inserting a word that is already present changes nothing. The empty string is
    /// never a word and is ignored.
    ///
    /// # Panics
    /// Panics if the tree grows past `u32::MAX` nodes.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let mut node = Self::ROOT;
        for letter in word.chars() {
            node = match self.child(node, letter) {
                Some(child) => child,
                None => {
                    let child = NodeId(
                        u32::try_from(self.nodes.len()).expect("prefix tree node limit exceeded"),
                    );
                    self.nodes.push(Node::default());
                    self.node_mut(node).children.insert(letter, child);
                    child
                }
            };
        }

        let end = self.node_mut(node);
        if !end.is_word {
            end.is_word = true;
            self.word_count += 1;
        }
    }

    /// Whether `letter` continues a known prefix from `node`
    #[inline]
    #[must_use]
    pub fn has_child(&self, node: NodeId, letter: char) -> bool {
        self.node(node).children.contains_key(&letter)
    }

    /// The node reached from `node` by `letter`, if that prefix exists
    #[inline]
    #[must_use]
    pub fn child(&self, node: NodeId, letter: char) -> Option<NodeId> {
        self.node(node).children.get(&letter).copied()
    }

    /// Whether the path to `node` spells a complete word rather than just a prefix
    #[inline]
    #[must_use]
    pub fn is_word(&self, node: NodeId) -> bool {
        self.node(node).is_word
    }

    /// Follow `prefix` from the root
    #[must_use]
    pub fn find(&self, prefix: &str) -> Option<NodeId> {
        prefix
            .chars()
            .try_fold(Self::ROOT, |node, letter| self.child(node, letter))
    }

    /// Whether `word` was inserted
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(|node| self.is_word(node))
    }

    /// Number of distinct words stored
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of nodes, including the root
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    // Handles only come from this tree, so indexing cannot miss.
    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0 as usize]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0 as usize]
    }
}
