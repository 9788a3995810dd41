//! Field-separator detection from a content sample.

use std::collections::HashMap;
use thiserror::Error;

/// Delimiters considered, in tie-break order
pub const CANDIDATES: [u8; 4] = [b',', b';', b'\t', b'|'];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SniffError {
    #[error("sample is empty")]
    Empty,
    #[error("could not determine delimiter")]
    Undetermined,
}

/// First `max_bytes` of `content`, cut back to the last complete line when truncated.
pub fn take_sample(content: &str, max_bytes: usize) -> &str {
    if content.len() <= max_bytes {
        return content;
    }

    let mut end = max_bytes;
    while !content.is_char_boundary(end) {
        end -= 1;
    }
    let cut = &content[..end];

    match cut.rfind('\n') {
        Some(i) if i > 0 => &cut[..i],
        _ => cut,
    }
}

/// Guess the delimiter of a header-bearing sample.
///
/// A delimiter is consistent when every record holds the same non-zero number
/// of it outside quotes; the highest such count wins. Failing that, a
/// delimiter whose most common count covers at least 90% of records is
/// accepted.
pub fn sniff_delimiter(sample: &str) -> Result<u8, SniffError> {
    let records = split_records(sample);
    if records.is_empty() {
        return Err(SniffError::Empty);
    }

    let counts: Vec<(u8, Vec<usize>)> = CANDIDATES
        .iter()
        .map(|&d| (d, records.iter().map(|r| count_unquoted(r, d)).collect()))
        .collect();

    let mut best: Option<(u8, usize)> = None;
    for (delim, per_record) in &counts {
        let first = per_record[0];
        if first == 0 || per_record.iter().any(|&n| n != first) {
            continue;
        }
        if best.is_none_or(|(_, n)| first > n) {
            best = Some((*delim, first));
        }
    }
    if let Some((delim, _)) = best {
        return Ok(delim);
    }

    let mut best: Option<(u8, usize)> = None;
    for (delim, per_record) in &counts {
        let Some(agreeing) = modal_frequency(per_record) else {
            continue;
        };
        if agreeing * 10 < records.len() * 9 {
            continue;
        }
        if best.is_none_or(|(_, n)| agreeing > n) {
            best = Some((*delim, agreeing));
        }
    }

    best.map(|(delim, _)| delim).ok_or(SniffError::Undetermined)
}

/// How many records share the most common non-zero count
fn modal_frequency(per_record: &[usize]) -> Option<usize> {
    let mut freq: HashMap<usize, usize> = HashMap::new();
    for &n in per_record.iter().filter(|&&n| n > 0) {
        *freq.entry(n).or_insert(0) += 1;
    }
    freq.into_values().max()
}

/// Split on newlines outside double quotes, dropping blank lines
fn split_records(sample: &str) -> Vec<&str> {
    let mut records = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (i, c) in sample.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            '\n' if !in_quotes => {
                records.push(&sample[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    records.push(&sample[start..]);

    records
        .into_iter()
        .map(|r| r.trim_end_matches('\r'))
        .filter(|r| !r.trim().is_empty())
        .collect()
}

fn count_unquoted(record: &str, delim: u8) -> usize {
    let mut in_quotes = false;
    record
        .bytes()
        .filter(|&b| {
            if b == b'"' {
                in_quotes = !in_quotes;
            }
            !in_quotes && b == delim
        })
        .count()
}
