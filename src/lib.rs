pub mod concordance;
pub mod output;
pub mod reader;
pub mod stats;
pub mod tokenizer;

// Re-export main types for convenient access
pub use concordance::{build_from_file, Concordance, Occurrences, Sentence, WordIndex};
pub use output::{index_label, join_line, occurrences_column, word_column};
pub use reader::{ChunkReader, ReadStats, ReaderConfig};
pub use stats::RunStats;
pub use tokenizer::{
    changes_sentence, is_valid, sanitize, segment_chunk, DocumentElement, ElementStream,
    SymbolPolicy,
};
