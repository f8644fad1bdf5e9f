use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

use crate::reader::{ChunkReader, ReadStats};
use crate::tokenizer::{changes_sentence, sanitize, segment_chunk, DocumentElement, SymbolPolicy};

/// 1-based sentence number within a document.
pub type Sentence = u64;

/// 1-based position of a word in the concordance's ascending iteration order.
/// Recomputed on each full iteration, never stored.
pub type WordIndex = u64;

/// Ordered list of the sentences one word appeared in.
///
/// Insertion order is preserved and duplicates are allowed: a word used twice
/// in sentence 3 records 3 twice. Equality is order-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Occurrences {
    sentences: Vec<Sentence>,
}

impl Occurrences {
    pub fn push(&mut self, sentence: Sentence) {
        self.sentences.push(sentence);
    }

    pub fn as_slice(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl FromIterator<Sentence> for Occurrences {
    fn from_iter<I: IntoIterator<Item = Sentence>>(iter: I) -> Self {
        Self {
            sentences: iter.into_iter().collect(),
        }
    }
}

// Sentence-boundary bookkeeping for the element stream. The previous-element
// state resets to suppressing at every chunk start, so punctuation attached
// to a word's chunk ("late." / "late...") advances the counter exactly once
// while a free-standing ellipsis chunk ("....") advances it zero times.
#[derive(Debug)]
struct SentenceCursor {
    current: Sentence,
    previous_ends_sentence: bool,
}

impl SentenceCursor {
    fn new() -> Self {
        Self {
            current: 1,
            previous_ends_sentence: true,
        }
    }

    fn begin_chunk(&mut self) {
        self.previous_ends_sentence = true;
    }

    fn observe_word(&mut self) -> Sentence {
        self.previous_ends_sentence = false;
        self.current
    }

    fn observe_symbol(&mut self, symbol: char) {
        if changes_sentence(symbol) {
            if !self.previous_ends_sentence {
                self.current += 1;
            }
            self.previous_ends_sentence = true;
        } else {
            self.previous_ends_sentence = false;
        }
    }
}

/// Mapping from normalized word to the sentences it occurred in, iterated in
/// ascending word order.
///
/// Insertions only ever create a key with a one-element occurrence list or
/// append to an existing key's list; entries are never removed. `Clone`
/// produces an independent aggregate and equality is deep map equality.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Concordance {
    words: BTreeMap<String, Occurrences>,
}

impl Concordance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `word`, inserted as given, in `sentence`.
    pub fn add(&mut self, word: impl Into<String>, sentence: Sentence) {
        self.words.entry(word.into()).or_default().push(sentence);
    }

    /// Build from pre-tokenized sentences, numbered 1..N in order. Words are
    /// normalized with the abbreviation heuristic; the segmenter is not
    /// involved.
    pub fn from_sentences<I, S, W>(sentences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut concordance = Concordance::new();

        let mut sentence: Sentence = 1;
        for words in sentences {
            for word in words {
                let raw = word.as_ref();
                concordance.add(sanitize(raw, SymbolPolicy::for_word(raw)), sentence);
            }
            sentence += 1;
        }

        concordance
    }

    /// Aggregate pre-segmented input, one element slice per chunk.
    pub fn from_elements<I, C>(chunks: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[DocumentElement]>,
    {
        let mut concordance = Concordance::new();
        let mut cursor = SentenceCursor::new();

        for chunk in chunks {
            concordance.consume_chunk(chunk.as_ref(), &mut cursor);
        }

        concordance
    }

    /// Build a concordance from a plain-text document.
    ///
    /// A missing or unreadable path yields an empty concordance rather than
    /// an error; see [`from_file_with_stats`](Self::from_file_with_stats) for
    /// the variant that reports what happened.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Self {
        Self::from_file_with_stats(path).0
    }

    /// Build a concordance from a plain-text document, returning the read
    /// statistics alongside it (chunk/byte counts, any degraded-open error).
    pub fn from_file_with_stats<P: AsRef<Path>>(path: P) -> (Self, ReadStats) {
        let mut reader = ChunkReader::open(path);
        let mut concordance = Concordance::new();
        let mut cursor = SentenceCursor::new();

        while let Some(chunk) = reader.next_chunk() {
            concordance.consume_chunk(&segment_chunk(&chunk), &mut cursor);
        }

        let stats = reader.into_stats();
        debug!(
            "Aggregated {}: {} chunks, {} distinct words, {} sentences",
            stats.file_path,
            stats.chunks_read,
            concordance.size(),
            cursor.current
        );

        (concordance, stats)
    }

    fn consume_chunk(&mut self, elements: &[DocumentElement], cursor: &mut SentenceCursor) {
        cursor.begin_chunk();

        for element in elements {
            match element {
                DocumentElement::Word(raw) => {
                    let sentence = cursor.observe_word();
                    self.add(sanitize(raw, SymbolPolicy::for_word(raw)), sentence);
                }
                DocumentElement::Symbol(symbol) => cursor.observe_symbol(*symbol),
            }
        }
    }

    /// Number of distinct normalized words.
    pub fn size(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Occurrence list for one normalized word, if present.
    pub fn get(&self, word: &str) -> Option<&Occurrences> {
        self.words.get(word)
    }

    /// Visit every word in ascending order with its 1-based index.
    pub fn for_each_word<F>(&self, mut visit: F)
    where
        F: FnMut(WordIndex, &str, &Occurrences),
    {
        for (index, word, occurrences) in self.iter() {
            visit(index, word, occurrences);
        }
    }

    /// Iterate `(index, word, occurrences)` in ascending word order.
    pub fn iter(&self) -> impl Iterator<Item = (WordIndex, &str, &Occurrences)> + '_ {
        self.words
            .iter()
            .enumerate()
            .map(|(offset, (word, occurrences))| (offset as WordIndex + 1, word.as_str(), occurrences))
    }

    /// Highest sentence number recorded across all occurrences.
    pub fn last_sentence(&self) -> Sentence {
        self.words
            .values()
            .flat_map(|occurrences| occurrences.as_slice())
            .copied()
            .max()
            .unwrap_or(0)
    }

    /// Total occurrence count across all words.
    pub fn total_occurrences(&self) -> u64 {
        self.words.values().map(|occurrences| occurrences.len() as u64).sum()
    }
}

/// Convenience wrapper logging an aggregation run the way the CLI consumes it.
pub fn build_from_file<P: AsRef<Path>>(path: P) -> (Concordance, ReadStats) {
    let (concordance, stats) = Concordance::from_file_with_stats(path);
    info!(
        "Concordance built from {}: {} distinct words across {} sentences",
        stats.file_path,
        concordance.size(),
        concordance.last_sentence()
    );
    (concordance, stats)
}
