//! Example: turning a small word list into one regular expression.
//!
//! Prints the words, the trie's top-level branches, and the pattern, then
//! checks the pattern with the `regex` crate.
//!
//! Run with: cargo run --example words

use regex::Regex;
use regexomatic::{NodeRef, TrieAccumulator};

fn print_branches(node: NodeRef<'_, char>, prefix: &mut String, depth: usize) {
    for (ch, child) in node.children() {
        prefix.push(ch);
        println!("  {:indent$}{prefix}", "", indent = depth * 2);
        if depth < 1 {
            print_branches(child, prefix, depth + 1);
        }
        prefix.pop();
    }
}

fn main() {
    let words = ["foo", "bar", "baz", "blum", "flob"];
    let acc: TrieAccumulator = words.iter().collect();

    println!("Words: {words:?}");

    println!("\nBranches:");
    print_branches(acc.root(), &mut String::new(), 0);

    let pattern = acc.to_pattern();
    println!("\nPattern: {pattern}");

    let re = Regex::new(&pattern).unwrap();
    println!("\nMatches:");
    for word in words.iter().chain(&["fo", "bart", "qux"]) {
        println!("  {word}: {}", if re.is_match(word) { "yes" } else { "no" });
    }
}
