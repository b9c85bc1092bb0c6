use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use serde::Serialize;

use crate::error::{TextprocError, TextprocResult};

/// How many times a word occurs in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    word: String,
    count: usize,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl core::fmt::Display for WordCount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.word, self.count)
    }
}

/// The `k` most frequent words of the file at `path`.
pub fn top_words(path: impl AsRef<Path>, k: usize) -> TextprocResult<Vec<WordCount>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| TextprocError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let ranked = top_words_from_reader(BufReader::new(file), k).map_err(|source| {
        TextprocError::Read {
            path: path.to_path_buf(),
            source,
        }
    })?;

    tracing::debug!(path = %path.display(), k, returned = ranked.len(), "ranked words");
    Ok(ranked)
}

/// Same as [`top_words`] for any buffered reader.
pub fn top_words_from_reader<R: BufRead>(reader: R, k: usize) -> io::Result<Vec<WordCount>> {
    let counts = count_words(reader)?;
    Ok(rank(counts, k))
}

/// Tally every token of `reader`, keyed by its raw bytes.
///
/// A token is a maximal run of bytes containing no Unicode whitespace. Bytes
/// that are not valid UTF-8 never separate tokens; they belong to the token
/// around them, so documents in other encodings still get counted. The input
/// is consumed line by line; a token never spans a line break since the break
/// itself is whitespace.
pub fn count_words<R: BufRead>(mut reader: R) -> io::Result<HashMap<Vec<u8>, usize>> {
    let mut counts: HashMap<Vec<u8>, usize> = HashMap::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        for_each_token(&line, |token| match counts.get_mut(token) {
            Some(n) => *n += 1,
            None => {
                counts.insert(token.to_vec(), 1);
            }
        });
    }

    Ok(counts)
}

fn for_each_token(line: &[u8], mut emit: impl FnMut(&[u8])) {
    let mut start: Option<usize> = None;
    let mut pos = 0;

    for chunk in line.utf8_chunks() {
        for (i, ch) in chunk.valid().char_indices() {
            if ch.is_whitespace() {
                if let Some(s) = start.take() {
                    emit(&line[s..pos + i]);
                }
            } else if start.is_none() {
                start = Some(pos + i);
            }
        }
        pos += chunk.valid().len();

        if !chunk.invalid().is_empty() {
            start.get_or_insert(pos);
            pos += chunk.invalid().len();
        }
    }

    if let Some(s) = start {
        emit(&line[s..]);
    }
}

/// Order by count descending, then word ascending (by bytes), and keep the
/// first `k`.
///
/// Words that are not valid UTF-8 are rendered lossily (`U+FFFD` for each bad
/// sequence) once ranked.
pub fn rank(counts: HashMap<Vec<u8>, usize>, k: usize) -> Vec<WordCount> {
    let mut ranked: Vec<(Vec<u8>, usize)> = counts.into_iter().collect();

    ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(k);
    ranked
        .into_iter()
        .map(|(bytes, count)| WordCount {
            word: String::from_utf8(bytes)
                .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()),
            count,
        })
        .collect()
}
