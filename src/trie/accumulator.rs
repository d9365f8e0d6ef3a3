use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;
use smallvec::SmallVec;

use super::char_trait::TrieChar;
use super::children::NodeRef;
use super::node_arena::{NodeArena, ROOT};
use super::pattern::{write_pattern, PrefixWords};

/// Trait for types that can be inserted as a word into a trie.
///
/// Implemented for common string and sequence types so that
/// [`TrieAccumulator::insert`] accepts them directly. Strings can be read as
/// `char`s or as bytes, depending on the accumulator's label type.
pub trait IntoWord<C: TrieChar> {
    /// Collects this word into a character buffer.
    fn collect_word(&self) -> SmallVec<[C; 32]>;
}

// String types → char or u8

impl IntoWord<char> for str {
    fn collect_word(&self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoWord<u8> for str {
    fn collect_word(&self) -> SmallVec<[u8; 32]> {
        self.bytes().collect()
    }
}

impl IntoWord<char> for String {
    fn collect_word(&self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoWord<u8> for String {
    fn collect_word(&self) -> SmallVec<[u8; 32]> {
        self.bytes().collect()
    }
}

// Generic sequence types → C

impl<C: TrieChar> IntoWord<C> for [C] {
    fn collect_word(&self) -> SmallVec<[C; 32]> {
        SmallVec::from_slice(self)
    }
}

impl<C: TrieChar> IntoWord<C> for Vec<C> {
    fn collect_word(&self) -> SmallVec<[C; 32]> {
        SmallVec::from_slice(self)
    }
}

impl<C: TrieChar, const N: usize> IntoWord<C> for [C; N] {
    fn collect_word(&self) -> SmallVec<[C; 32]> {
        SmallVec::from_slice(self)
    }
}

impl<C: TrieChar, W: IntoWord<C> + ?Sized> IntoWord<C> for &W {
    fn collect_word(&self) -> SmallVec<[C; 32]> {
        (**self).collect_word()
    }
}

/// Accumulates words into a prefix tree and serializes them as one regular
/// expression.
///
/// Words sharing a prefix share a path from the root, so the pattern spells
/// each shared prefix once and branches with `(?:...|...)` where the words
/// diverge. Children are enumerated in sorted order, which makes the pattern
/// a pure function of the set of inserted words.
///
/// The label type `C` is `char` by default. Use `u8` to build the trie over
/// raw bytes; the pattern is then meant for `regex::bytes`.
///
/// # Examples
///
/// ```
/// use regexomatic::TrieAccumulator;
///
/// let mut acc: TrieAccumulator = TrieAccumulator::new();
/// for word in ["foo", "bar", "baz", "blum", "flob"] {
///     acc.insert(word);
/// }
/// assert_eq!(acc.to_pattern(), r"\A(?:b(?:a(?:r|z)|lum)|f(?:lob|oo))\z");
/// ```
#[derive(Clone)]
pub struct TrieAccumulator<C: TrieChar = char> {
    arena: NodeArena<C>,
    len: usize,
    prefix_words: PrefixWords,
}

impl<C: TrieChar> TrieAccumulator<C> {
    /// Creates an empty accumulator that swallows prefix words, see
    /// [`PrefixWords::Swallow`].
    pub fn new() -> Self {
        Self::with_prefix_words(PrefixWords::default())
    }

    /// Creates an empty accumulator with the given prefix-word handling.
    pub fn with_prefix_words(prefix_words: PrefixWords) -> Self {
        TrieAccumulator {
            arena: NodeArena::new(),
            len: 0,
            prefix_words,
        }
    }

    /// Returns how words that prefix other words are serialized.
    pub fn prefix_words(&self) -> PrefixWords {
        self.prefix_words
    }

    /// Changes how words that prefix other words are serialized.
    ///
    /// Only serialization is affected; the trie itself is unchanged.
    pub fn set_prefix_words(&mut self, prefix_words: PrefixWords) {
        self.prefix_words = prefix_words;
    }

    /// Adds a word and returns it unchanged.
    ///
    /// Missing nodes along the word's path are created. Inserting a word that
    /// is already present leaves the trie unchanged. The empty word creates no
    /// nodes.
    pub fn insert<W: IntoWord<C>>(&mut self, word: W) -> W {
        let letters = word.collect_word();
        self.insert_slice(&letters);
        word
    }

    fn insert_slice(&mut self, word: &[C]) {
        let mut node = ROOT;
        for &ch in word {
            node = match self.arena[node].get(ch) {
                Some(child) => child,
                None => {
                    let child = self.arena.alloc();
                    self.arena[node].insert(ch, child);
                    child
                }
            };
        }
        if self.arena[node].set_accepting() {
            self.len += 1;
        }
    }

    /// Trims each line and inserts it. Lines that are blank after trimming
    /// are skipped.
    ///
    /// Trimming follows [`TrieChar::trim_line`]: Unicode whitespace for
    /// `char` labels, ASCII whitespace for `u8` labels, the same rule as
    /// `add_reader` and `add_file`.
    ///
    /// Returns the number of lines inserted.
    pub fn add_lines<I>(&mut self, lines: I) -> usize
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        str: IntoWord<C>,
    {
        let mut added = 0;
        for line in lines {
            let word = C::trim_line(line.as_ref());
            if !word.is_empty() {
                self.insert(word);
                added += 1;
            }
        }
        added
    }

    /// Returns true if `word` was inserted.
    ///
    /// This is exact membership. It is true for a word that prefixes another
    /// word even when the pattern swallows it.
    pub fn contains(&self, word: impl IntoWord<C>) -> bool {
        word.collect_word()
            .iter()
            .try_fold(self.root(), |n, &ch| n.get(ch))
            .is_some_and(|n| n.is_accepting())
    }

    /// Returns the number of distinct words inserted.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no word was inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of trie nodes, root included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Returns the root node, which stands for the empty prefix.
    pub fn root(&self) -> NodeRef<'_, C> {
        NodeRef::new(&self.arena, ROOT)
    }

    /// Appends the anchored pattern to `out`.
    pub fn write_pattern(&self, out: &mut String) {
        write_pattern(&self.arena, self.prefix_words, out);
    }

    /// Returns the anchored pattern matching the accumulated words.
    ///
    /// The pattern starts with `\A`, ends with `\z` and is meant for the
    /// `regex` crate. An empty accumulator gives `\A\z`, which only matches
    /// the empty string.
    pub fn to_pattern(&self) -> String {
        let mut out = String::with_capacity(2 * self.arena.len() + 4);
        self.write_pattern(&mut out);
        out
    }
}

impl TrieAccumulator<char> {
    /// Inserts every line of a UTF-8 reader with Unicode whitespace trimmed;
    /// blank lines are skipped.
    ///
    /// Returns the number of lines inserted.
    ///
    /// # Errors
    ///
    /// Fails on a read error or a line that is not valid UTF-8. Lines read
    /// before the failure stay inserted.
    pub fn add_reader(&mut self, mut reader: impl BufRead) -> io::Result<usize> {
        // Reuse one buffer instead of allocating a string per line.
        let mut buf = String::with_capacity(80);
        let mut added = 0;
        loop {
            buf.clear();
            if reader.read_line(&mut buf)? == 0 {
                break;
            }
            let word = char::trim_line(&buf);
            if !word.is_empty() {
                self.insert(word);
                added += 1;
            }
        }
        Ok(added)
    }

    /// Inserts every line of a UTF-8 word file, one word per line, trimmed
    /// like [`add_reader`](Self::add_reader).
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be opened or read, or is not valid UTF-8.
    /// Words read before the failure stay inserted.
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> io::Result<usize> {
        let path = path.as_ref();
        let added = self.add_reader(BufReader::new(File::open(path)?))?;
        debug!(
            "read {added} words from {} ({} distinct, {} nodes)",
            path.display(),
            self.len,
            self.arena.len()
        );
        Ok(added)
    }
}

impl TrieAccumulator<u8> {
    /// Inserts every line of a reader as raw bytes, with ASCII whitespace
    /// trimmed; blank lines are skipped.
    ///
    /// Returns the number of lines inserted.
    ///
    /// # Errors
    ///
    /// Fails on a read error. Lines read before the failure stay inserted.
    pub fn add_reader(&mut self, mut reader: impl BufRead) -> io::Result<usize> {
        let mut buf = Vec::with_capacity(80);
        let mut added = 0;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let word = buf.trim_ascii();
            if !word.is_empty() {
                self.insert(word);
                added += 1;
            }
        }
        Ok(added)
    }

    /// Inserts every line of a word file as raw bytes, one word per line,
    /// trimmed like [`add_reader`](Self::add_reader).
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be opened or read. Words read before the
    /// failure stay inserted.
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> io::Result<usize> {
        let path = path.as_ref();
        let added = self.add_reader(BufReader::new(File::open(path)?))?;
        debug!(
            "read {added} byte words from {} ({} distinct, {} nodes)",
            path.display(),
            self.len,
            self.arena.len()
        );
        Ok(added)
    }
}

impl<C: TrieChar> Default for TrieAccumulator<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: TrieChar> fmt::Debug for TrieAccumulator<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieAccumulator")
            .field("words", &self.len)
            .field("nodes", &self.arena.len())
            .field("prefix_words", &self.prefix_words)
            .finish()
    }
}

/// Formats as the anchored pattern.
impl<C: TrieChar> fmt::Display for TrieAccumulator<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pattern())
    }
}

impl<C: TrieChar, W: IntoWord<C>> Extend<W> for TrieAccumulator<C> {
    fn extend<I: IntoIterator<Item = W>>(&mut self, words: I) {
        for word in words {
            self.insert(word);
        }
    }
}

impl<C: TrieChar, W: IntoWord<C>> FromIterator<W> for TrieAccumulator<C> {
    fn from_iter<I: IntoIterator<Item = W>>(words: I) -> Self {
        let mut acc = Self::new();
        acc.extend(words);
        acc
    }
}
