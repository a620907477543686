//! Shared CSV plumbing for the loaders.

use fundamenticks_core::{Error, Result};
use std::collections::HashMap;
use std::io::Read;

/// Build a trimming, flexible CSV reader over `input`.
pub(crate) fn csv_reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input)
}

/// Column positions keyed by lower-cased header name.
pub(crate) struct HeaderMap {
    columns: HashMap<String, usize>,
}

impl HeaderMap {
    /// Read and index the header row.
    pub(crate) fn read<R: Read>(reader: &mut csv::Reader<R>) -> Result<Self> {
        let headers = reader
            .headers()
            .map_err(|e| Error::csv(format!("failed to read headers: {e}")))?;
        let columns = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.trim().trim_start_matches('\u{feff}').to_ascii_lowercase(), i))
            .collect();
        Ok(Self { columns })
    }

    /// Position of an optional column.
    pub(crate) fn get(&self, name: &str) -> Option<usize> {
        self.columns.get(&name.to_ascii_lowercase()).copied()
    }

    /// Position of a required column.
    pub(crate) fn require(&self, name: &str) -> Result<usize> {
        self.get(name)
            .ok_or_else(|| Error::schema(format!("missing required column '{name}'")))
    }
}

/// Text of a cell, empty when the record is short.
pub(crate) fn cell(record: &csv::StringRecord, idx: Option<usize>) -> &str {
    idx.and_then(|i| record.get(i)).unwrap_or("")
}
