/// Word accumulator: insertion, loading from word lists, and pattern output.
pub mod accumulator;
/// Trait for types that can serve as trie edge labels.
pub mod char_trait;
/// Trie node and children module containing the core tree structures.
pub mod children;
/// Internal index-based node storage.
pub(crate) mod node_arena;
/// Serialization of the trie into a regular expression.
pub mod pattern;

pub use accumulator::{IntoWord, TrieAccumulator};
pub use char_trait::TrieChar;
pub use children::{ChildIter, NodeRef};
pub use pattern::{PrefixWords, END_ANCHOR, START_ANCHOR};
