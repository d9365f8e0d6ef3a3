//! # regexomatic
//!
//! Compress a word list into a single regular expression.
//!
//! Instead of one alternative per word (`foo|bar|baz`), the words are stored in
//! a prefix tree and the tree is written out with each shared prefix spelled
//! once: `\A(?:ba(?:r|z)|foo)\z`. Literal characters are quoted for the
//! [`regex`](https://docs.rs/regex) crate dialect, and children are written
//! in sorted order, so the same set of words always gives the same pattern.
//!
//! ## Quick Start
//!
//! ```
//! use regexomatic::TrieAccumulator;
//!
//! let mut acc: TrieAccumulator = TrieAccumulator::new();
//! for word in ["foo", "bar", "baz", "blum", "flob"] {
//!     acc.insert(word);
//! }
//! assert_eq!(acc.to_pattern(), r"\A(?:b(?:a(?:r|z)|lum)|f(?:lob|oo))\z");
//! ```
//!
//! Word files are read one word per line, with surrounding whitespace removed:
//!
//! ```no_run
//! use regexomatic::TrieAccumulator;
//!
//! let mut acc: TrieAccumulator = TrieAccumulator::new();
//! acc.add_file("/usr/share/dict/words").unwrap();
//! println!("{acc}");
//! ```
//!
//! ## Prefix words
//!
//! Every node records whether a word ends there, and
//! [`TrieAccumulator::contains`] uses that. The default serialization ignores
//! it, so a word that is a proper prefix of another one is not matched on its
//! own. Choose [`PrefixWords::Optional`] to match every inserted word:
//!
//! ```
//! use regexomatic::{PrefixWords, TrieAccumulator};
//!
//! let mut acc: TrieAccumulator = TrieAccumulator::new();
//! acc.extend(["car", "cart"]);
//! assert_eq!(acc.to_pattern(), r"\Acart\z");
//!
//! acc.set_prefix_words(PrefixWords::Optional);
//! assert_eq!(acc.to_pattern(), r"\Acar(?:t)?\z");
//! ```
//!
//! ## Byte words
//!
//! The trie is generic over the edge label. With `u8` labels, words are split
//! into bytes and the pattern is meant for `regex::bytes`:
//!
//! ```
//! use regexomatic::TrieAccumulator;
//!
//! let mut acc = TrieAccumulator::<u8>::new();
//! acc.insert(&[b'a', 0xFF][..]);
//! assert_eq!(acc.to_pattern(), r"\Aa(?-u:\xFF)\z");
//! ```

#![warn(missing_docs)]

/// Prefix tree, its node types, and pattern serialization.
pub mod trie;

pub use trie::{IntoWord, NodeRef, PrefixWords, TrieAccumulator, TrieChar};
