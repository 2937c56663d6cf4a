//! Loading word lists into a tree, one word per line.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::WordTree;

/// Counts gathered while loading a word list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Number of lines read.
    pub lines: usize,
    /// Number of lines that added a new word.
    pub inserted: usize,
}

/// Builds a tree from the word list at `path`.
pub fn load_words<P: AsRef<Path>>(path: P) -> Result<WordTree> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => Error::NotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(err),
    })?;

    let mut tree = WordTree::new();
    let stats = extend_from_reader(&mut tree, BufReader::new(file))?;
    info!(
        path = %path.display(),
        lines = stats.lines,
        words = tree.len(),
        height = tree.height(),
        "loaded word list"
    );
    Ok(tree)
}

/// Inserts every line of `reader` into `tree`, verbatim apart from the line
/// terminator.
///
/// Lines end at `\n`, `\r` or `\r\n`. Bytes that are not valid UTF-8 are
/// replaced with U+FFFD rather than failing the load.
/// On a read error the words inserted so far stay in the tree.
pub fn extend_from_reader<R: BufRead>(tree: &mut WordTree, mut reader: R) -> Result<LoadStats> {
    let mut stats = LoadStats::default();
    let mut buf = Vec::new();
    while read_line_bytes(&mut reader, &mut buf)? {
        stats.lines += 1;
        let word = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = word {
            warn!(word = %word, line = stats.lines, "invalid UTF-8 replaced");
        }
        if tree.insert(&word) {
            stats.inserted += 1;
        } else {
            debug!(word = %word, line = stats.lines, "duplicate word ignored");
        }
    }
    Ok(stats)
}

/// Reads one line into `line` without its terminator.
/// Returns false once the input is exhausted.
fn read_line_bytes<R: BufRead>(reader: &mut R, line: &mut Vec<u8>) -> io::Result<bool> {
    line.clear();
    loop {
        let available = match reader.fill_buf() {
            Ok(available) => available,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        if available.is_empty() {
            return Ok(!line.is_empty());
        }

        match available.iter().position(|&b| b == b'\n' || b == b'\r') {
            None => {
                let len = available.len();
                line.extend_from_slice(available);
                reader.consume(len);
            }
            Some(end) => {
                let terminator = available[end];
                line.extend_from_slice(&available[..end]);
                reader.consume(end + 1);
                // \r\n is a single terminator, even across buffer refills
                if terminator == b'\r' && reader.fill_buf()?.first() == Some(&b'\n') {
                    reader.consume(1);
                }
                return Ok(true);
            }
        }
    }
}
