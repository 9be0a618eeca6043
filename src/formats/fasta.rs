//! Plain FASTA reading for the feature pipeline.

use crate::core::io::{open_input, LineIterator};
use crate::core::FastaParseError;
use std::path::Path;

/// One FASTA record: header id (up to the first whitespace) and sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub sequence: String,
}

/// Read every record of a FASTA file. Sequence lines are concatenated and
/// uppercased; a record without sequence data is a format error, as is any
/// non-ASCII sequence character. The ASCII guarantee lets the feature
/// pipeline slice sequences by byte index.
pub fn read_fasta<P: AsRef<Path>>(path: P) -> Result<Vec<FastaRecord>, FastaParseError> {
    let reader = open_input(path.as_ref())?;
    let mut lines = LineIterator::new(reader);
    let mut records: Vec<FastaRecord> = Vec::new();
    let mut current: Option<FastaRecord> = None;
    let mut line_no = 0usize;

    while let Some(line) = lines.next_line() {
        let line = line?;
        line_no += 1;
        if line.is_empty() {
            continue;
        }
        if let Some(header) = line.strip_prefix('>') {
            if let Some(record) = current.take() {
                push_record(record, &mut records)?;
            }
            let id = header.split_whitespace().next().unwrap_or("").to_string();
            current = Some(FastaRecord {
                id,
                sequence: String::new(),
            });
        } else {
            match current.as_mut() {
                Some(record) => {
                    if !line.is_ascii() {
                        return Err(FastaParseError::InvalidBase {
                            id: record.id.clone(),
                            line: line_no,
                        });
                    }
                    record.sequence.push_str(&line.to_ascii_uppercase());
                }
                None => return Err(FastaParseError::MissingHeader { line: line_no }),
            }
        }
    }
    if let Some(record) = current.take() {
        push_record(record, &mut records)?;
    }
    Ok(records)
}

fn push_record(
    record: FastaRecord,
    records: &mut Vec<FastaRecord>,
) -> Result<(), FastaParseError> {
    if record.sequence.is_empty() {
        return Err(FastaParseError::EmptyRecord { id: record.id });
    }
    records.push(record);
    Ok(())
}
