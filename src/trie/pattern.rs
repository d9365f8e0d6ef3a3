//! Serialization of a trie into an anchored regular expression.
//!
//! A node with no children contributes nothing. A node with one child
//! contributes the quoted letter followed by the child. A node with several
//! children contributes a non-capturing group with one alternative per child,
//! in label order.
//!
//! The walk uses an explicit stack, so the depth of the trie is not limited by
//! the call stack.

use itertools::{Itertools, Position};

use super::char_trait::TrieChar;
use super::children::{Children, TrieNode};
use super::node_arena::{NodeArena, NodeId, ROOT};

/// Anchor written at the start of every pattern (start of haystack).
pub const START_ANCHOR: &str = r"\A";

/// Anchor written at the end of every pattern (end of haystack).
///
/// This is `\z` rather than `\Z`; the `regex` crate has no `\Z`.
pub const END_ANCHOR: &str = r"\z";

/// How to serialize a word that is a proper prefix of another inserted word.
///
/// The trie has one path for `"car"` and `"cart"`; the question is whether
/// the pattern may stop after `r`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PrefixWords {
    /// The shorter word is absorbed into the longer one and is not matched on
    /// its own: `{"car", "cart"}` gives `\Acart\z`.
    #[default]
    Swallow,
    /// Every inserted word is matched; the tail after a prefix word is made
    /// optional: `{"car", "cart"}` gives `\Acar(?:t)?\z`.
    Optional,
}

enum Step<C> {
    Node(NodeId),
    Letter(C),
    Text(&'static str),
}

/// Appends the anchored pattern for the trie in `arena` to `out`.
pub(crate) fn write_pattern<C: TrieChar>(
    arena: &NodeArena<C>,
    prefix_words: PrefixWords,
    out: &mut String,
) {
    out.push_str(START_ANCHOR);

    let mut stack: Vec<Step<C>> = vec![Step::Node(ROOT)];
    let mut steps: Vec<Step<C>> = Vec::new();
    while let Some(step) = stack.pop() {
        match step {
            Step::Text(text) => out.push_str(text),
            Step::Letter(ch) => ch.quote_into(out),
            Step::Node(id) => {
                let node = &arena[id];
                let optional = prefix_words == PrefixWords::Optional && node.is_accepting();
                expand(node, optional, &mut steps);
                // Steps come out in writing order; the stack pops from the end.
                stack.extend(steps.drain(..).rev());
            }
        }
    }

    out.push_str(END_ANCHOR);
}

fn expand<C: TrieChar>(node: &TrieNode<C>, optional: bool, steps: &mut Vec<Step<C>>) {
    match node.children() {
        Children::None => {}
        Children::One((ch, child)) => {
            if optional {
                steps.push(Step::Text("(?:"));
            }
            steps.push(Step::Letter(*ch));
            steps.push(Step::Node(*child));
            if optional {
                steps.push(Step::Text(")?"));
            }
        }
        Children::Many(children) => {
            steps.push(Step::Text("(?:"));
            for (position, &(ch, child)) in children.iter().with_position() {
                if matches!(position, Position::Middle | Position::Last) {
                    steps.push(Step::Text("|"));
                }
                steps.push(Step::Letter(ch));
                steps.push(Step::Node(child));
            }
            steps.push(Step::Text(if optional { ")?" } else { ")" }));
        }
    }
}
