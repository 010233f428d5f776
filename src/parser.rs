// 🏗️ Arrival Record Parser
// One record per line:
//   species,age,sex,color,weight,origin...,arrivalDate,birthSeason
//
// The origin is the variable-length middle of the line. It may be quoted and
// contain commas: "Serengeti, Tanzania".

use crate::animal::AnimalRecord;
use crate::error::LineError;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use indexmap::IndexMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// Minimum number of fields in a valid arrivals line
pub const MIN_FIELDS: usize = 8;

/// Calendar format for the arrival date
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// PARSE OUTCOME
// ============================================================================

/// A line that did not become a record
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedLine {
    pub line_number: usize,
    pub raw_line: String,
    pub error: LineError,
}

/// Result of parsing a whole arrivals feed: successes and failures side by side
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    /// Accepted records, in file order
    pub records: Vec<AnimalRecord>,

    /// Rejected lines, in file order
    pub rejected: Vec<RejectedLine>,

    /// Accepted records per species, in first-seen order
    pub species_counts: IndexMap<String, usize>,
}

impl ParseOutcome {
    fn accept(&mut self, record: AnimalRecord) {
        *self
            .species_counts
            .entry(record.species.clone())
            .or_insert(0) += 1;
        self.records.push(record);
    }

    fn reject(&mut self, line_number: usize, raw_line: &str, error: LineError) {
        warn!(
            line = line_number,
            kind = error.kind(),
            "Skipping arrivals line: {} - {}",
            error,
            raw_line
        );
        self.rejected.push(RejectedLine {
            line_number,
            raw_line: raw_line.to_string(),
            error,
        });
    }

    pub fn accepted_count(&self) -> usize {
        self.records.len()
    }

    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }
}

// ============================================================================
// TOKENIZER
// ============================================================================

/// Split one line into trimmed fields, keeping quoted spans intact.
///
/// `a,"b, c",d` → `["a", "b, c", "d"]`
/// `a, "b, c" ,d` → `["a", "b, c", "d"]`
pub fn tokenize_line(line: &str) -> std::result::Result<Vec<String>, LineError> {
    let line = tighten_quoted_fields(line);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    let mut record = StringRecord::new();
    match reader.read_record(&mut record) {
        Ok(true) => Ok(record.iter().map(|field| field.trim().to_string()).collect()),
        Ok(false) => Ok(Vec::new()),
        Err(e) => Err(LineError::Tokenize(e.to_string())),
    }
}

/// Remove whitespace between a delimiter and an opening quote, and between a
/// closing quote and the next delimiter. The csv reader only honors a quote
/// that is the first byte of a field.
fn tighten_quoted_fields(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut pending = String::new();
    let mut in_quotes = false;
    let mut at_field_start = true;
    let mut after_quote = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            out.push(c);
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    // escaped quote
                    out.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                    after_quote = true;
                }
            }
            continue;
        }

        if (at_field_start || after_quote) && c.is_whitespace() {
            pending.push(c);
            continue;
        }

        let opens_quote = at_field_start && c == '"';
        let ends_quoted_field = after_quote && c == ',';
        if !opens_quote && !ends_quoted_field {
            out.push_str(&pending);
        }
        pending.clear();
        out.push(c);

        in_quotes = opens_quote;
        at_field_start = c == ',';
        after_quote = false;
    }

    if !after_quote {
        out.push_str(&pending);
    }
    out
}

/// Drop one pair of surrounding double quotes, if present
fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

// ============================================================================
// LINE PARSER
// ============================================================================

/// Parse a single arrivals line into a record.
///
/// Every field between index 5 and the last two is part of the origin, so an
/// unquoted origin containing commas is rejoined as well.
pub fn parse_line(line: &str) -> std::result::Result<AnimalRecord, LineError> {
    let fields = tokenize_line(line)?;

    if fields.len() < MIN_FIELDS {
        return Err(LineError::TooFewFields {
            found: fields.len(),
        });
    }

    let last = fields.len() - 1;

    let species = fields[0].clone();
    let age = fields[1]
        .parse::<u32>()
        .map_err(|_| LineError::InvalidAge(fields[1].clone()))?;
    let sex = fields[2].clone();
    let color = fields[3].clone();
    let weight = fields[4]
        .parse::<f64>()
        .map_err(|_| LineError::InvalidWeight(fields[4].clone()))?;

    let origin = fields[5..last - 1].join(",");
    let origin = strip_quotes(origin.trim()).to_string();

    let arrival_date = NaiveDate::parse_from_str(&fields[last - 1], DATE_FORMAT)
        .map_err(|_| LineError::InvalidDate(fields[last - 1].clone()))?;
    let birth_season = fields[last].clone();

    Ok(AnimalRecord::new(
        species,
        age,
        sex,
        color,
        weight,
        origin,
        arrival_date,
        birth_season,
    ))
}

// ============================================================================
// FEED PARSER
// ============================================================================

/// Decode one raw line (without its `\n`). Invalid UTF-8 comes back as the
/// lossy text of the line plus the decoding error.
pub(crate) fn decode_line(mut bytes: Vec<u8>) -> std::result::Result<String, (String, String)> {
    if bytes.last() == Some(&b'\r') {
        bytes.pop();
    }

    String::from_utf8(bytes).map_err(|e| {
        let reason = e.utf8_error().to_string();
        (String::from_utf8_lossy(e.as_bytes()).into_owned(), reason)
    })
}

/// ArrivalParser - reads a whole arrivals feed, one result per line
pub struct ArrivalParser;

impl ArrivalParser {
    pub fn new() -> Self {
        ArrivalParser
    }

    /// Parse an arrivals file. Only failing to open the file is an error;
    /// bad lines are collected in the outcome.
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseOutcome> {
        let file = File::open(file_path)
            .with_context(|| format!("Failed to open arrivals file: {}", file_path.display()))?;

        Ok(self.parse_reader(BufReader::new(file)))
    }

    /// Parse arrivals from any buffered reader
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> ParseOutcome {
        let mut outcome = ParseOutcome::default();

        for (index, chunk) in reader.split(b'\n').enumerate() {
            let line_number = index + 1;

            let bytes = match chunk {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!(line = line_number, "Stopped reading arrivals: {}", e);
                    break;
                }
            };

            let line = match decode_line(bytes) {
                Ok(line) => line,
                Err((raw_line, reason)) => {
                    outcome.reject(line_number, &raw_line, LineError::Unreadable(reason));
                    continue;
                }
            };

            if line.trim().is_empty() {
                debug!(line = line_number, "Skipping blank arrivals line");
                continue;
            }

            match parse_line(&line) {
                Ok(record) => outcome.accept(record),
                Err(error) => outcome.reject(line_number, &line, error),
            }
        }

        debug!(
            accepted = outcome.accepted_count(),
            rejected = outcome.rejected_count(),
            "Parsed arrivals feed"
        );

        outcome
    }

    /// Parse arrivals text held in memory
    pub fn parse_str(&self, text: &str) -> ParseOutcome {
        self.parse_reader(text.as_bytes())
    }
}

impl Default for ArrivalParser {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
