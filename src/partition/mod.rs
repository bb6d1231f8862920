//! Line-oriented YAML partitioning
//!
//! Splits raw YAML text into two fragments without parsing it: lines whose
//! mapping key is in a given key set go to the *extracted* fragment, every
//! other line goes to the *remainder*. Each run of comment lines travels with
//! the line that follows it, so documentation above a migrated key moves with
//! the key. Lines are copied byte for byte, terminators included.
//!
//! Classification works on one physical line at a time:
//!
//! | kind    | rule                                              | effect                                  |
//! |---------|---------------------------------------------------|-----------------------------------------|
//! | comment | first non-whitespace character is `#`             | buffered                                |
//! | blank   | only whitespace, then a newline                   | buffer flushed to remainder, line dropped |
//! | entry   | `<ws><token>:` with `token` free of ws and `:`    | buffer + line to extracted if key matches |
//! | other   | anything else                                     | buffer + line to remainder              |
//!
//! ## Known quirks
//!
//! Both are kept because migrated files downstream depend on the exact layout
//! this produces:
//!
//! - **Blank lines are dropped** from both fragments. They only serve as a
//!   trigger that commits pending comments to the remainder.
//! - **A trailing comment block is dropped** when the document ends in
//!   comment lines. [`TrailingComments::Remainder`] opts into keeping it.
//!
//! Indentation is not checked, so a nested key that shares a name with a
//! designated key is extracted too.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

#[allow(clippy::expect_used)]
static COMMENT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*#").expect("comment pattern is valid"));

#[allow(clippy::expect_used)]
static BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\n").expect("blank line pattern is valid"));

#[allow(clippy::expect_used)]
static KEY_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([^\s:]*):").expect("key token pattern is valid"));

/// Classification of a single physical line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Comment line, buffered until the next non-comment line
    Comment,
    /// Whitespace-only line terminated by a newline
    Blank,
    /// Line starting with a `token:` pair; holds the token
    Entry(&'a str),
    /// Any other content
    Other,
}

/// Classify one line (terminator included)
pub fn classify_line(line: &str) -> LineKind<'_> {
    if COMMENT_LINE.is_match(line) {
        return LineKind::Comment;
    }
    if BLANK_LINE.is_match(line) {
        return LineKind::Blank;
    }
    match KEY_TOKEN.captures(line).and_then(|caps| caps.get(1)) {
        Some(token) => LineKind::Entry(token.as_str()),
        None => LineKind::Other,
    }
}

/// What happens to comment lines left pending at end of document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrailingComments {
    /// Discard them (historical behaviour)
    #[default]
    Drop,
    /// Append them to the remainder fragment
    Remainder,
}

/// Result of partitioning a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Split {
    /// Lines not belonging to a designated key, in document order
    pub remainder: String,
    /// Designated key lines with their leading comments, in document order
    pub extracted: String,
    /// Key tokens of the extracted lines, in document order
    pub extracted_keys: Vec<String>,
    /// Number of blank lines dropped
    pub dropped_blank_lines: usize,
    /// Number of trailing comment lines dropped
    pub dropped_trailing_comments: usize,
}

/// Pending comment lines
#[derive(Default)]
struct CommentBlock {
    text: String,
    lines: usize,
}

impl CommentBlock {
    fn push(&mut self, line: &str) {
        self.text.push_str(line);
        self.lines += 1;
    }

    /// Append the buffered lines to `out` and clear the buffer
    fn flush_into(&mut self, out: &mut String) {
        out.push_str(&self.text);
        self.text.clear();
        self.lines = 0;
    }
}

/// Splits documents on a fixed key set
#[derive(Debug, Clone)]
pub struct Partitioner<'k> {
    keys: HashSet<&'k str>,
    trailing_comments: TrailingComments,
}

impl<'k> Partitioner<'k> {
    /// Create a partitioner extracting `keys`
    pub fn new(keys: impl IntoIterator<Item = &'k str>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            trailing_comments: TrailingComments::default(),
        }
    }

    /// Set the trailing comment policy
    pub fn with_trailing_comments(mut self, policy: TrailingComments) -> Self {
        self.trailing_comments = policy;
        self
    }

    /// Partition `document` into remainder and extracted fragments.
    ///
    /// Total over any input; never fails.
    pub fn split(&self, document: &str) -> Split {
        let mut split = Split::default();
        let mut pending = CommentBlock::default();

        for line in document.split_inclusive('\n') {
            match classify_line(line) {
                LineKind::Comment => pending.push(line),
                LineKind::Blank => {
                    pending.flush_into(&mut split.remainder);
                    split.dropped_blank_lines += 1;
                }
                LineKind::Entry(key) if self.keys.contains(key) => {
                    pending.flush_into(&mut split.extracted);
                    split.extracted.push_str(line);
                    split.extracted_keys.push(key.to_string());
                }
                LineKind::Entry(_) | LineKind::Other => {
                    pending.flush_into(&mut split.remainder);
                    split.remainder.push_str(line);
                }
            }
        }

        if pending.lines > 0 {
            match self.trailing_comments {
                TrailingComments::Drop => split.dropped_trailing_comments = pending.lines,
                TrailingComments::Remainder => pending.flush_into(&mut split.remainder),
            }
        }

        split
    }
}
