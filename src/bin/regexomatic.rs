use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use regexomatic::{PrefixWords, TrieAccumulator, TrieChar};

/// Print one regular expression matching every word of a word list.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Word list, one word per line; leading and trailing whitespace is ignored
    words: PathBuf,

    /// Build the trie over raw bytes instead of characters (pattern for `regex::bytes`)
    #[arg(long, default_value_t = false)]
    bytes: bool,

    /// How to treat words that are a proper prefix of another word
    #[arg(long, value_enum, default_value_t = PrefixMode::Swallow)]
    prefix_words: PrefixMode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PrefixMode {
    /// Only the longer word is matched
    Swallow,
    /// Both words are matched
    Optional,
}

impl From<PrefixMode> for PrefixWords {
    fn from(mode: PrefixMode) -> Self {
        match mode {
            PrefixMode::Swallow => PrefixWords::Swallow,
            PrefixMode::Optional => PrefixWords::Optional,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    run(&args, &mut io::stdout().lock())
}

/// Reads the word list named by `args` and writes the pattern and a newline to `out`.
fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let pattern = build_pattern(args)?;
    writeln!(out, "{pattern}").context("Failed to write pattern")?;
    out.flush().context("Failed to write pattern")?;
    Ok(())
}

fn build_pattern(args: &Args) -> Result<String> {
    let prefix_words = PrefixWords::from(args.prefix_words);
    let read_context = || format!("Failed to read words from {}", args.words.display());

    if args.bytes {
        let mut acc = TrieAccumulator::<u8>::with_prefix_words(prefix_words);
        acc.add_file(&args.words).with_context(read_context)?;
        summarize(&acc);
        Ok(acc.to_pattern())
    } else {
        let mut acc = TrieAccumulator::<char>::with_prefix_words(prefix_words);
        acc.add_file(&args.words).with_context(read_context)?;
        summarize(&acc);
        Ok(acc.to_pattern())
    }
}

fn summarize<C: TrieChar>(acc: &TrieAccumulator<C>) {
    info!(
        "{} distinct words, {} trie nodes, prefix words: {:?}",
        acc.len(),
        acc.node_count(),
        acc.prefix_words()
    );
}

#[cfg(test)]
mod test {
    use super::*;

    fn test_data(name: &str) -> String {
        format!("{}/testdata/{name}", env!("CARGO_MANIFEST_DIR"))
    }

    fn output(argv: &[&str]) -> Result<String> {
        let args = Args::try_parse_from(argv)?;
        let mut out = Vec::new();
        run(&args, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["regexomatic", "words.txt"]).unwrap();
        assert_eq!(args.words, PathBuf::from("words.txt"));
        assert!(!args.bytes);
        assert_eq!(args.prefix_words, PrefixMode::Swallow);
    }

    #[test]
    fn parses_flags() {
        let args = Args::try_parse_from([
            "regexomatic",
            "--bytes",
            "--prefix-words",
            "optional",
            "words.txt",
        ])
        .unwrap();
        assert!(args.bytes);
        assert_eq!(args.prefix_words, PrefixMode::Optional);
        assert_eq!(PrefixWords::from(args.prefix_words), PrefixWords::Optional);
    }

    #[test]
    fn rejects_bad_usage() {
        assert!(Args::try_parse_from(["regexomatic"]).is_err());
        assert!(Args::try_parse_from(["regexomatic", "--prefix-words", "maybe", "w.txt"]).is_err());
    }

    #[test]
    fn prints_pattern_and_newline() {
        let path = test_data("prefix.txt");
        assert_eq!(output(&["regexomatic", &path]).unwrap(), "\\Aca(?:fé|rt)\\z\n");
    }

    #[test]
    fn optional_prefix_words_reach_the_pattern() {
        let path = test_data("prefix.txt");
        assert_eq!(
            output(&["regexomatic", "--prefix-words", "optional", &path]).unwrap(),
            "\\Aca(?:fé|r(?:t)?)\\z\n"
        );
        assert_eq!(
            output(&["regexomatic", "--prefix-words", "swallow", &path]).unwrap(),
            "\\Aca(?:fé|rt)\\z\n"
        );
    }

    #[test]
    fn bytes_flag_builds_a_byte_pattern() {
        let path = test_data("prefix.txt");
        assert_eq!(
            output(&["regexomatic", "--bytes", &path]).unwrap(),
            "\\Aca(?:f(?-u:\\xC3)(?-u:\\xA9)|rt)\\z\n"
        );
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = output(&["regexomatic", "/nonexistent/words.txt"]).unwrap_err();
        let message = format!("{err:#}");
        assert!(
            message.starts_with("Failed to read words from /nonexistent/words.txt"),
            "{message}"
        );
        let io_err = err.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
    }
}
