//! A set of words implemented with an AVL tree.

#[cfg(test)]
use std::cell::Cell;
use std::cmp::{self, Ordering};
use std::fmt;
use std::iter::FusedIterator;

use crate::distance;

/// A set of words kept in an AVL tree, ordered lexicographically.
///
/// Besides ordered iteration the tree answers two kinds of queries:
/// prefix matches for autocomplete and near misses (edit distance 1)
/// for spelling suggestions.
///
/// ```
/// use wordtree::WordTree;
/// let mut tree = WordTree::new();
/// tree.insert("apple");
/// tree.insert("application");
/// tree.insert("banana");
/// let matches: Vec<&str> = tree.search_by_prefix("app").collect();
/// assert_eq!(matches, ["apple", "application"]);
/// let suggestions: Vec<&str> = tree.search_by_edit_distance("banena").collect();
/// assert_eq!(suggestions, ["banana"]);
/// ```
#[derive(Clone, Default)]
pub struct WordTree {
    root: Link,
    num_nodes: usize,
}

type Link = Option<Box<Node>>;

#[cfg(test)]
thread_local! {
    static ROTATIONS: Cell<Rotations> = const { Cell::new(Rotations { left: 0, right: 0 }) };
}

/// Rotations performed on the current thread.
#[cfg(test)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Rotations {
    pub(crate) left: usize,
    pub(crate) right: usize,
}

/// Returns the rotations performed on this thread so far and resets the count.
#[cfg(test)]
pub(crate) fn take_rotations() -> Rotations {
    ROTATIONS.with(|rotations| rotations.take())
}

#[derive(Clone)]
struct Node {
    key: String,
    left: Link,
    right: Link,
    height: usize,
}

/// An iterator over the words of a tree in ascending order.
///
/// This `struct` is created by the [`iter`] method on [`WordTree`].
///
/// [`iter`]: WordTree::iter
#[derive(Clone)]
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
    remaining: usize,
}

/// An iterator over the words starting with a given prefix.
///
/// This `struct` is created by the [`search_by_prefix`] method on [`WordTree`].
///
/// [`search_by_prefix`]: WordTree::search_by_prefix
#[derive(Clone)]
pub struct PrefixMatches<'a, 'q> {
    iter: Iter<'a>,
    prefix: &'q str,
}

/// An iterator over the words within a small edit distance of a query.
///
/// This `struct` is created by the [`search_by_edit_distance`] and
/// [`search_within_distance`] methods on [`WordTree`].
///
/// [`search_by_edit_distance`]: WordTree::search_by_edit_distance
/// [`search_within_distance`]: WordTree::search_within_distance
#[derive(Clone)]
pub struct Suggestions<'a, 'q> {
    iter: Iter<'a>,
    query: &'q str,
    max_distance: usize,
}

impl WordTree {
    /// Creates an empty tree.
    /// No memory is allocated until the first word is inserted.
    pub fn new() -> Self {
        Self {
            root: None,
            num_nodes: 0,
        }
    }

    /// Returns true if the tree contains no words.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of words in the tree.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Returns the height of the tree, 0 if empty and 1 for a single word.
    pub fn height(&self) -> usize {
        Self::height_of(&self.root)
    }

    /// Clears the tree, deallocating all memory.
    pub fn clear(&mut self) {
        self.root = None;
        self.num_nodes = 0;
    }

    /// Returns the stored word equal to `key`, found by ordinary binary search.
    pub fn get(&self, key: &str) -> Option<&str> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(node.key.as_str()) {
                Ordering::Equal => return Some(&node.key),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Returns true if the tree contains `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Inserts a word into the tree and restores balance on the way back up.
    /// Returns whether the word was newly inserted; inserting a word that is
    /// already present leaves the tree unchanged.
    pub fn insert<K: AsRef<str>>(&mut self, key: K) -> bool {
        let mut inserted = false;
        let root = self.root.take();
        self.root = Some(Self::insert_at(root, key.as_ref(), &mut inserted));
        if inserted {
            self.num_nodes += 1;
        }
        inserted
    }

    /// Gets an iterator over all words in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref(), self.num_nodes)
    }

    /// Walks the tree in order, yielding every word in ascending order.
    /// Each call starts a fresh traversal.
    pub fn traverse_in_order(&self) -> Iter<'_> {
        self.iter()
    }

    /// Gets an iterator over all words that start with `prefix`, in ascending order.
    ///
    /// The whole tree is scanned.
    pub fn search_by_prefix<'a, 'q>(&'a self, prefix: &'q str) -> PrefixMatches<'a, 'q> {
        PrefixMatches {
            iter: self.iter(),
            prefix,
        }
    }

    /// Gets an iterator over all words at edit distance exactly 1 from `query`,
    /// in ascending order. A word equal to `query` is not a suggestion.
    pub fn search_by_edit_distance<'a, 'q>(&'a self, query: &'q str) -> Suggestions<'a, 'q> {
        self.search_within_distance(query, 1)
    }

    /// Gets an iterator over all words whose edit distance `d` from `query`
    /// satisfies `0 < d <= max_distance`, in ascending order.
    pub fn search_within_distance<'a, 'q>(
        &'a self,
        query: &'q str,
        max_distance: usize,
    ) -> Suggestions<'a, 'q> {
        Suggestions {
            iter: self.iter(),
            query,
            max_distance,
        }
    }

    /// Asserts that the internal tree structure is consistent.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        let mut num_nodes = 0;
        Self::check_subtree(&self.root, None, None, &mut num_nodes);
        assert_eq!(num_nodes, self.num_nodes);
    }

    #[cfg(any(test, feature = "consistency_check"))]
    fn check_subtree(
        link: &Link,
        lower: Option<&str>,
        upper: Option<&str>,
        num_nodes: &mut usize,
    ) -> usize {
        let node = match link {
            None => return 0,
            Some(node) => node,
        };

        // Check search order against the bounds inherited from ancestors
        if let Some(lower) = lower {
            assert!(lower < node.key.as_str());
        }
        if let Some(upper) = upper {
            assert!(node.key.as_str() < upper);
        }

        let key = Some(node.key.as_str());
        let left_height = Self::check_subtree(&node.left, lower, key, num_nodes);
        let right_height = Self::check_subtree(&node.right, key, upper, num_nodes);

        // Check height
        assert_eq!(node.height, 1 + cmp::max(left_height, right_height));

        // Check AVL condition (nearly balance)
        assert!(left_height <= right_height + 1);
        assert!(right_height <= left_height + 1);

        *num_nodes += 1;
        node.height
    }

    /// Returns the words in pre-order, root first.
    #[cfg(test)]
    pub(crate) fn preorder(&self) -> Vec<&str> {
        fn walk<'a>(link: &'a Link, out: &mut Vec<&'a str>) {
            if let Some(node) = link {
                out.push(node.key.as_str());
                walk(&node.left, out);
                walk(&node.right, out);
            }
        }
        let mut out = Vec::with_capacity(self.num_nodes);
        walk(&self.root, &mut out);
        out
    }

    fn insert_at(link: Link, key: &str, inserted: &mut bool) -> Box<Node> {
        let mut node = match link {
            None => {
                *inserted = true;
                return Node::create(key);
            }
            Some(node) => node,
        };

        match key.cmp(node.key.as_str()) {
            Ordering::Less => {
                let left = node.left.take();
                node.left = Some(Self::insert_at(left, key, inserted));
            }
            Ordering::Greater => {
                let right = node.right.take();
                node.right = Some(Self::insert_at(right, key, inserted));
            }
            Ordering::Equal => return node,
        }

        Self::adjust_height(&mut node);
        Self::rebalance_node(node, key)
    }

    fn height_of(link: &Link) -> usize {
        match link {
            None => 0,
            Some(node) => node.height,
        }
    }

    fn left_height(node: &Node) -> usize {
        Self::height_of(&node.left)
    }

    fn right_height(node: &Node) -> usize {
        Self::height_of(&node.right)
    }

    fn balance_factor(node: &Node) -> isize {
        Self::left_height(node) as isize - Self::right_height(node) as isize
    }

    fn adjust_height(node: &mut Node) {
        node.height = 1 + cmp::max(Self::left_height(node), Self::right_height(node));
    }

    fn rotate_left(mut node: Box<Node>) -> Box<Node> {
        match node.right.take() {
            None => node,
            Some(mut right) => {
                #[cfg(test)]
                ROTATIONS.with(|r| r.set(Rotations { left: r.get().left + 1, ..r.get() }));
                node.right = right.left.take();
                Self::adjust_height(&mut node);
                right.left = Some(node);
                Self::adjust_height(&mut right);
                right
            }
        }
    }

    fn rotate_right(mut node: Box<Node>) -> Box<Node> {
        match node.left.take() {
            None => node,
            Some(mut left) => {
                #[cfg(test)]
                ROTATIONS.with(|r| r.set(Rotations { right: r.get().right + 1, ..r.get() }));
                node.left = left.right.take();
                Self::adjust_height(&mut node);
                left.right = Some(node);
                Self::adjust_height(&mut left);
                left
            }
        }
    }

    /// Restores the AVL condition at `node` after `key` was inserted below it.
    /// The side of the child the key went to decides between a single
    /// and a double rotation. Returns the root of the rebalanced subtree.
    fn rebalance_node(mut node: Box<Node>, key: &str) -> Box<Node> {
        let balance = Self::balance_factor(&node);
        debug_assert!((-2..=2).contains(&balance));
        if balance > 1 {
            // Left heavy
            if let Some(left) = node.left.take() {
                node.left = Some(match key.cmp(left.key.as_str()) {
                    Ordering::Greater => Self::rotate_left(left),
                    _ => left,
                });
            }
            Self::rotate_right(node)
        } else if balance < -1 {
            // Right heavy
            if let Some(right) = node.right.take() {
                node.right = Some(match key.cmp(right.key.as_str()) {
                    Ordering::Less => Self::rotate_right(right),
                    _ => right,
                });
            }
            Self::rotate_left(node)
        } else {
            node
        }
    }
}

impl Node {
    fn create(key: &str) -> Box<Node> {
        Box::new(Node {
            key: key.to_owned(),
            left: None,
            right: None,
            height: 1,
        })
    }
}

impl fmt::Debug for WordTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: AsRef<str>> Extend<K> for WordTree {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: AsRef<str>> FromIterator<K> for WordTree {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = WordTree::new();
        tree.extend(iter);
        tree
    }
}

impl<'a> IntoIterator for &'a WordTree {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> Iter<'a> {
    fn new(root: Option<&'a Node>, remaining: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining,
        };
        iter.descend_left(root);
        iter
    }

    fn descend_left(&mut self, mut current: Option<&'a Node>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_left(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> Iterator for PrefixMatches<'a, '_> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let prefix = self.prefix;
        self.iter.by_ref().find(|key| key.starts_with(prefix))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl FusedIterator for PrefixMatches<'_, '_> {}

impl<'a> Iterator for Suggestions<'a, '_> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let (query, max_distance) = (self.query, self.max_distance);
        self.iter.by_ref().find(|key| {
            matches!(distance::levenshtein_within(key, query, max_distance), Some(d) if d > 0)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl FusedIterator for Suggestions<'_, '_> {}
