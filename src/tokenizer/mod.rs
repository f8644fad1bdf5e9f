// Tokenization layer: typed document elements, chunk segmentation, word
// sanitization, and the sentence-boundary predicate the aggregator applies.

pub mod sanitizer;
pub mod segmenter;
pub mod validator;

// Re-export core functions
pub use sanitizer::{sanitize, SymbolPolicy};
pub use segmenter::segment_chunk;
pub use validator::is_valid;

use crate::reader::{ChunkReader, ReaderConfig};
use std::collections::VecDeque;
use std::path::Path;

/// One atomic unit of a document: a word, or a lone non-alphanumeric symbol.
///
/// The segmenter emits these in document order; the aggregator dispatches on
/// the variant (word insertion vs. sentence-boundary check).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentElement {
    Word(String),
    Symbol(char),
}

impl DocumentElement {
    pub fn as_word(&self) -> Option<&str> {
        match self {
            DocumentElement::Word(word) => Some(word),
            DocumentElement::Symbol(_) => None,
        }
    }

    pub fn as_symbol(&self) -> Option<char> {
        match self {
            DocumentElement::Word(_) => None,
            DocumentElement::Symbol(symbol) => Some(*symbol),
        }
    }
}

/// True iff a symbol character ends a sentence.
pub fn changes_sentence(symbol: char) -> bool {
    matches!(symbol, '.' | '!' | '?' | ';')
}

/// Streams a document as a flat sequence of [`DocumentElement`]s.
///
/// Thin composition of [`ChunkReader`] and [`segment_chunk`], preserving the
/// reader's degradation policy: a missing file yields an exhausted stream.
pub struct ElementStream {
    chunks: ChunkReader,
    buffered: VecDeque<DocumentElement>,
}

impl ElementStream {
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::with_config(path, ReaderConfig::default())
    }

    pub fn with_config<P: AsRef<Path>>(path: P, config: ReaderConfig) -> Self {
        Self {
            chunks: ChunkReader::with_config(path, config),
            buffered: VecDeque::new(),
        }
    }

    /// True while at least one more element is available.
    pub fn has_next(&mut self) -> bool {
        self.refill();
        !self.buffered.is_empty()
    }

    fn refill(&mut self) {
        while self.buffered.is_empty() {
            match self.chunks.next_chunk() {
                Some(chunk) => self.buffered.extend(segment_chunk(&chunk)),
                None => break,
            }
        }
    }
}

impl Iterator for ElementStream {
    type Item = DocumentElement;

    fn next(&mut self) -> Option<DocumentElement> {
        self.refill();
        self.buffered.pop_front()
    }
}
