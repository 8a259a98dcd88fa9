//! Word frequency counting with bounded top-k selection.
//!
//! A document is lowercased, split on whitespace and counted into a
//! [`FrequencyTable`]; [`top_k`] then picks the most frequent words with a
//! min-heap of size `k` instead of sorting the whole vocabulary.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use log::debug;

pub mod counter;
pub mod error;
pub mod report;
pub mod topk;

pub use counter::FrequencyTable;
pub use error::{Result, WordFreqError};
pub use report::Layout;
pub use topk::{top_k, FrequencyEntry};

/// Reads the whole document into memory. The file is closed before returning.
pub fn read_document(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let read_err = |source: io::Error| WordFreqError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut text = String::new();
    File::open(path)
        .and_then(|mut file| file.read_to_string(&mut text))
        .map_err(read_err)?;

    debug!("read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

/// Counts `text` and returns its `k` most frequent words of at least
/// `min_len` characters, highest count first.
pub fn analyze(text: &str, min_len: usize, k: usize) -> Vec<FrequencyEntry> {
    let top = FrequencyTable::from_text(text, min_len).top_k(k);
    debug!("selected {} of the top {} words", top.len(), k);
    top
}
