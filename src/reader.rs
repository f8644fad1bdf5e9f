use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, warn};

/// Configuration for chunk reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Buffer size for the underlying file reads (default: 8KB)
    pub buffer_size: usize,
    /// Number of chunks prefetched per buffer fill (default: 20)
    pub batch_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            buffer_size: 8192,
            batch_size: 20,
        }
    }
}

/// Statistics for one chunk-reading run
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub chunks_read: u64,
    pub bytes_read: u64,
    pub read_error: Option<String>,
}

/// Pull-based source of whitespace-free chunks from a plain-text document.
///
/// A chunk is a maximal run of non-whitespace bytes, where whitespace is
/// exactly space, tab, and newline. The reader prefetches a bounded batch of
/// chunks per fill; callers only observe "next chunk or none." Opening a
/// missing or unreadable path does not fail: the reader simply yields no
/// chunks and records the error in its stats. The file handle is released on
/// drop regardless of exit path.
pub struct ChunkReader {
    source: Option<std::io::Bytes<BufReader<File>>>,
    prefetched: VecDeque<String>,
    config: ReaderConfig,
    stats: ReadStats,
}

impl ChunkReader {
    /// Open `path` for chunk reading with default configuration.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::with_config(path, ReaderConfig::default())
    }

    pub fn with_config<P: AsRef<Path>>(path: P, config: ReaderConfig) -> Self {
        let path = path.as_ref();
        let mut stats = ReadStats {
            file_path: path.display().to_string(),
            chunks_read: 0,
            bytes_read: 0,
            read_error: None,
        };

        let source = match File::open(path) {
            Ok(file) => {
                debug!("Opened document for chunk reading: {}", path.display());
                Some(BufReader::with_capacity(config.buffer_size, file).bytes())
            }
            Err(e) => {
                let error_msg = format!("Failed to open document {}: {}", path.display(), e);
                warn!("{}", error_msg);
                stats.read_error = Some(error_msg);
                None
            }
        };

        Self {
            source,
            prefetched: VecDeque::new(),
            config,
            stats,
        }
    }

    /// Next maximal run of non-whitespace bytes, or `None` at end of input.
    pub fn next_chunk(&mut self) -> Option<String> {
        if self.prefetched.is_empty() {
            self.fill_buffer();
        }
        self.prefetched.pop_front()
    }

    /// True while at least one more chunk is available.
    pub fn has_next(&mut self) -> bool {
        if self.prefetched.is_empty() {
            self.fill_buffer();
        }
        !self.prefetched.is_empty()
    }

    pub fn stats(&self) -> &ReadStats {
        &self.stats
    }

    pub fn into_stats(self) -> ReadStats {
        self.stats
    }

    fn fill_buffer(&mut self) {
        if self.source.is_none() {
            return;
        }

        for _ in 0..self.config.batch_size {
            match self.read_chunk() {
                Some(chunk) => {
                    self.stats.chunks_read += 1;
                    self.prefetched.push_back(chunk);
                }
                None => break,
            }
        }
    }

    fn read_chunk(&mut self) -> Option<String> {
        let source = self.source.as_mut()?;
        let mut chunk = String::new();
        let mut failure = None;

        loop {
            match source.next() {
                Some(Ok(byte)) => {
                    self.stats.bytes_read += 1;
                    if is_whitespace(byte) {
                        if !chunk.is_empty() {
                            break;
                        }
                    } else {
                        chunk.push(byte as char);
                    }
                }
                Some(Err(e)) => {
                    failure = Some(format!(
                        "Read error in {} after {} bytes: {}",
                        self.stats.file_path, self.stats.bytes_read, e
                    ));
                    break;
                }
                None => break,
            }
        }

        if let Some(message) = failure {
            warn!("{}", message);
            self.stats.read_error = Some(message);
            // Degrade to end-of-input; partial chunk content is still returned.
            self.source = None;
        }

        if chunk.is_empty() {
            None
        } else {
            Some(chunk)
        }
    }
}

impl Iterator for ChunkReader {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.next_chunk()
    }
}

// Whitespace is exactly space, tab, and newline; \r is document content.
fn is_whitespace(byte: u8) -> bool {
    byte == b' ' || byte == b'\n' || byte == b'\t'
}
