//! A word list stored in an AVL tree.
//!
//! [`WordTree`] keeps words in lexicographic order and stays balanced on
//! every insertion. It answers prefix queries for autocomplete and edit
//! distance queries for spelling suggestions. The [`loader`] module fills a
//! tree from a line-oriented word list.
//!
//! ```
//! use wordtree::WordTree;
//! let tree: WordTree = ["kitten", "mitten", "kitchen"].into_iter().collect();
//! assert_eq!(tree.search_by_prefix("kit").collect::<Vec<_>>(), ["kitchen", "kitten"]);
//! assert_eq!(tree.search_by_edit_distance("sitten").collect::<Vec<_>>(), ["kitten", "mitten"]);
//! ```

pub mod distance;
pub mod error;
pub mod loader;
mod tree;

pub use error::{Error, Result};
pub use loader::{extend_from_reader, load_words, LoadStats};
pub use tree::{Iter, PrefixMatches, Suggestions, WordTree};
