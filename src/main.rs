//! Wordtree CLI binary.
//!
//! Loads a word list, takes one query and prints prefix completions
//! followed by spelling suggestions.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, Level};

use wordtree::WordTree;

/// Autocomplete and spelling suggestions from a word list
#[derive(Parser, Debug, Clone)]
#[command(name = "wordtree")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Word list to load, one word per line
    #[arg(short, long, env = "WORDTREE_WORDS", default_value = "midfile.txt")]
    pub words: PathBuf,

    /// Query to look up; read from stdin when omitted
    pub query: Option<String>,

    /// Largest edit distance for misspelling suggestions
    #[arg(long, default_value_t = 1)]
    pub max_distance: usize,

    /// Verbosity level (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Get the effective log level
    pub fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let tree = wordtree::load_words(&args.words)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let query = match args.query {
        Some(query) => query,
        None => {
            writeln!(out, "To get Prefix-based suggestions, type in prefix: ")?;
            out.flush()?;
            read_query(io::stdin().lock()).context("failed to read query")?
        }
    };
    let query = query.to_lowercase();
    debug!(query = %query, "searching");

    write_suggestions(&mut out, &tree, &query, args.max_distance)?;
    Ok(())
}

/// Reads one line and strips the line terminator.
fn read_query<R: BufRead>(mut input: R) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    let len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(len);
    Ok(line)
}

fn write_suggestions<W: Write>(
    out: &mut W,
    tree: &WordTree,
    query: &str,
    max_distance: usize,
) -> io::Result<()> {
    writeln!(out, "Words suggested based on prefix: ")?;
    for word in tree.search_by_prefix(query) {
        writeln!(out, "{word}")?;
    }

    writeln!(out, "Misspelled word suggestions: ")?;
    for word in tree.search_within_distance(query, max_distance) {
        writeln!(out, "{word}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_suggestions() {
        let tree: WordTree = ["apple", "application", "banana", "apply"].into_iter().collect();
        let mut out = Vec::new();
        write_suggestions(&mut out, &tree, "appla", 1).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Words suggested based on prefix: \n\
             Misspelled word suggestions: \n\
             apple\n\
             apply\n"
        );
    }

    #[test]
    fn test_write_suggestions_prefix() {
        let tree: WordTree = ["apple", "application", "banana"].into_iter().collect();
        let mut out = Vec::new();
        write_suggestions(&mut out, &tree, "app", 1).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            [
                "Words suggested based on prefix: ",
                "apple",
                "application",
                "Misspelled word suggestions: ",
            ]
        );
    }

    #[test]
    fn test_read_query() {
        assert_eq!(read_query(&b"Hello\r\nworld\n"[..]).unwrap(), "Hello");
        assert_eq!(read_query(&b"tail"[..]).unwrap(), "tail");
        assert_eq!(read_query(&b""[..]).unwrap(), "");
    }

    #[test]
    fn test_log_level() {
        let args = Args::parse_from(["wordtree", "-vv", "app"]);
        assert_eq!(args.log_level(), Level::DEBUG);
        assert_eq!(args.query.as_deref(), Some("app"));

        let args = Args::parse_from(["wordtree", "-v", "-q"]);
        assert_eq!(args.log_level(), Level::ERROR);
        assert_eq!(args.max_distance, 1);
    }
}
