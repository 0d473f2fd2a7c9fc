//! Turns line oriented text into `(token, line)` pairs and feeds them to a
//! [`WordTree`].

use std::{
    collections::VecDeque,
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use log::{debug, info, trace};

use crate::{IndexError, WordTree, noise::is_noise, normalize::normalize};

/// A raw whitespace separated token and the 1-based line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub raw: String,
    pub line: usize,
}

/// Iterator over the tokens of a [`BufRead`], one source line at a time.
///
/// Bytes that are not valid UTF-8 become U+FFFD; only real read failures
/// are yielded as errors.
pub struct Tokens<R> {
    reader: R,
    line: usize,
    pending: VecDeque<String>,
    buf: Vec<u8>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            pending: VecDeque::new(),
            buf: Vec::new(),
        }
    }

    /// Line number of the most recently read source line.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> Iterator for Tokens<R> {
    type Item = io::Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(raw) = self.pending.pop_front() {
                return Some(Ok(Token { raw, line: self.line }));
            }

            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(n) => {
                    self.line += 1;
                    trace!(target: "tokens", "line {} ({n} bytes)", self.line);
                    let text = String::from_utf8_lossy(&self.buf);
                    self.pending.extend(text.split_whitespace().map(str::to_owned));
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Counters collected by [`index_reader`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    /// Tokens read from the input
    pub tokens: usize,
    /// Tokens added to the tree
    pub added: usize,
    /// Tokens skipped as noise words
    pub noise: usize,
    /// Source lines read
    pub lines: usize,
}

/// Adds every token of `reader` to `tree`.
///
/// With `skip_noise` set, tokens whose key [`is_noise`] are counted but not
/// added.
pub fn index_reader<R: BufRead>(
    tree: &mut WordTree,
    reader: R,
    skip_noise: bool,
) -> Result<IndexStats, IndexError> {
    let mut stats = IndexStats::default();
    let mut tokens = Tokens::new(reader);

    for token in tokens.by_ref() {
        let token = token?;
        stats.tokens += 1;

        if skip_noise && is_noise(&normalize(&token.raw)) {
            stats.noise += 1;
            continue;
        }
        tree.add(token.raw.as_str(), token.line)?;
        stats.added += 1;
    }
    stats.lines = tokens.line();

    debug!(target: "index", "{stats:?}");
    Ok(stats)
}

/// Opens `path` and runs [`index_reader`] over it.
///
/// # Errors
///
/// [`IndexError::Io`] when the file cannot be opened.
pub fn index_file<P: AsRef<Path>>(
    tree: &mut WordTree,
    path: P,
    skip_noise: bool,
) -> Result<IndexStats, IndexError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| IndexError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(target: "index", "indexing {}", path.display());

    index_reader(tree, BufReader::new(file), skip_noise)
}

#[cfg(test)]
mod tests {
    use std::io::{self, BufReader, Cursor, Read};

    use super::{Token, Tokens, index_file, index_reader};
    use crate::{IndexError, WordTree};

    fn tok(raw: &str, line: usize) -> Token {
        Token {
            raw: raw.into(),
            line,
        }
    }

    #[test]
    fn tokens_carry_line_numbers() {
        let text = "The cat\n  sat.\n\nthe  end\n";
        let tokens: Vec<_> = Tokens::new(Cursor::new(text))
            .collect::<io::Result<_>>()
            .unwrap();

        assert_eq!(
            tokens,
            [
                tok("The", 1),
                tok("cat", 1),
                tok("sat.", 2),
                tok("the", 4),
                tok("end", 4)
            ]
        );
    }

    #[test]
    fn last_line_without_newline() {
        let tokens: Vec<_> = Tokens::new(Cursor::new("a\nb"))
            .map(Result::unwrap)
            .collect();
        assert_eq!(tokens, [tok("a", 1), tok("b", 2)]);
    }

    #[test]
    fn undecodable_line_still_counts() {
        let tokens: Vec<_> = Tokens::new(Cursor::new(b"one\ncaf\xe9\nthree\n"))
            .map(Result::unwrap)
            .collect();
        assert_eq!(
            tokens,
            [tok("one", 1), tok("caf\u{fffd}", 2), tok("three", 3)]
        );
    }

    #[test]
    fn latin1_input_is_indexed() {
        let mut tree = WordTree::new();
        let stats = index_reader(&mut tree, Cursor::new(b"caf\xe9 ok\nfine\n"), false).unwrap();

        assert_eq!(stats.added, 3);
        assert_eq!(stats.lines, 2);
        assert_eq!(tree.size(), 3);
        assert_eq!(tree.find("ok").unwrap().lines(), &[1]);
        assert_eq!(tree.find("fine").unwrap().lines(), &[2]);
        assert!(tree.find("caf\u{fffd}").is_some());
    }

    #[test]
    fn index_the_cat_sat() {
        let mut tree = WordTree::new();
        let stats = index_reader(&mut tree, Cursor::new("The cat\nsat.\nthe\n"), false).unwrap();

        assert_eq!(stats.tokens, 4);
        assert_eq!(stats.added, 4);
        assert_eq!(stats.lines, 3);
        assert_eq!(tree.size(), 3);
        assert_eq!(tree.find("the").unwrap().lines(), &[1, 3]);
    }

    #[test]
    fn skip_noise() {
        let mut tree = WordTree::new();
        let stats = index_reader(&mut tree, Cursor::new("The cat sat on a mat\n"), true).unwrap();

        assert_eq!(stats.noise, 3);
        assert_eq!(stats.added, 3);
        assert!(tree.find("the").is_none());
        assert!(tree.find("mat").is_some());
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk on fire"))
        }
    }

    #[test]
    fn read_error_is_reported() {
        let mut tree = WordTree::new();
        let err = index_reader(&mut tree, BufReader::new(Broken), false).unwrap_err();
        assert!(matches!(err, IndexError::Stream(_)));
    }

    #[test]
    fn missing_file() {
        let mut tree = WordTree::new();
        let err = index_file(&mut tree, "/definitely/not/here.txt", false).unwrap_err();
        assert!(matches!(err, IndexError::Io { .. }));
        assert!(err.to_string().starts_with("Could not open file: '/definitely/not/here.txt'"));
    }
}
