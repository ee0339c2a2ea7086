//! A push-based CSV parser built on a resumable computation.
//!
//! The caller feeds the parser one chunk of text at a time. Chunks can split
//! records, fields, and even quoted strings anywhere; the parser keeps its
//! place between chunks and hands back every record completed by the chunk it
//! was just given. Resuming with `None` means "end of input": the parser
//! flushes the last record and finishes.
//!
//! Key concepts demonstrated:
//! - Writing a producer as a struct that implements `Iterator`
//! - Reading each step's input through an `InputCell`
//! - Using a sentinel input to let the caller end the computation
//! - The completing step returning the final value a second time
//!
//! Run with: `cargo run --example csv_parser`

use resumable::InputCell;
use resumable::Resumable;

/// Represents a parsed CSV record
#[derive(Debug, Clone, PartialEq)]
pub struct CsvRecord {
    pub fields: Vec<String>,
    pub line_number: usize,
}

/// Parser state carried from one chunk to the next.
pub struct CsvParser {
    chunk: InputCell<Option<String>>,
    field: String,
    record: Vec<String>,
    in_quotes: bool,
    line_number: usize,
    done: bool,
}

impl CsvParser {
    fn end_field(&mut self) {
        self.record.push(std::mem::take(&mut self.field));
    }

    fn end_record(&mut self) -> CsvRecord {
        self.end_field();
        let record = CsvRecord {
            fields: std::mem::take(&mut self.record),
            line_number: self.line_number,
        };
        self.line_number += 1;
        record
    }
}

impl Iterator for CsvParser {
    type Item = Vec<CsvRecord>;

    fn next(&mut self) -> Option<Vec<CsvRecord>> {
        if self.done {
            return None;
        }
        let Some(chunk) = self.chunk.get() else {
            // End of input - handle final record if needed
            self.done = true;
            if self.field.is_empty() && self.record.is_empty() {
                return Some(Vec::new());
            }
            return Some(vec![self.end_record()]);
        };

        let mut records = Vec::new();
        for ch in chunk.chars() {
            match ch {
                '"' => self.in_quotes = !self.in_quotes,
                ',' if !self.in_quotes => self.end_field(),
                '\n' if !self.in_quotes => records.push(self.end_record()),
                // Skip carriage returns
                '\r' if !self.in_quotes => {}
                _ => self.field.push(ch),
            }
        }
        Some(records)
    }
}

/// Creates a parser that accepts chunks of CSV text and yields the records
/// each chunk completes.
pub fn csv_parser() -> Resumable<Option<String>, CsvParser> {
    Resumable::new(|chunk| CsvParser {
        chunk,
        field: String::new(),
        record: Vec::new(),
        in_quotes: false,
        line_number: 1,
        done: false,
    })
}

fn main() {
    println!("CSV Parser Example using resumable computations\n");

    // The same data as one string, split at awkward places.
    let chunks = [
        "Name,Age,City\n\"John ",
        "Doe\",30,New York\n\"Jane Smith\",25,\"Los",
        " Angeles\"\nBob Johnson,35,Chi",
        "cago\n\"Mary Wilson\",28,Boston",
    ];

    println!("Input chunks:");
    for chunk in &chunks {
        println!("  {chunk:?}");
    }
    println!();

    // Example 1: feed chunks by hand.
    println!("Example 1: Feeding chunks one resume at a time:");
    let mut parser = csv_parser();
    for chunk in chunks {
        match parser.resume(Some(chunk.to_string())) {
            Ok(records) => {
                for record in records {
                    println!(
                        "  Line {}: {:?}",
                        record.line_number, record.fields
                    );
                }
            }
            Err(e) => println!("  Error: {e}"),
        }
    }
    // The last record has no trailing newline; ending the input flushes it.
    if let Ok(records) = parser.resume(None) {
        for record in records {
            println!(
                "  Line {}: {:?} (flushed)",
                record.line_number, record.fields
            );
        }
    }
    println!("  Alive after end of input: {}", parser.is_alive());

    // The step that discovers the end returns the final value again.
    let repeated = parser.resume(None);
    println!("  Completing step returned: {repeated:?}");
    println!("  Alive now: {}", parser.is_alive());
    println!("  Resuming again: {:?}\n", parser.resume(None));

    // Example 2: drive the parser with the whole stream of inputs.
    println!("Example 2: Driving the parser, keeping people over 30:");
    let inputs = chunks
        .iter()
        .map(|chunk| Some(chunk.to_string()))
        .chain([None]);
    csv_parser()
        .drive(inputs)
        .flatten()
        .filter(|record| record.line_number > 1)
        .filter(|record| {
            record
                .fields
                .get(1)
                .and_then(|age| age.parse::<u32>().ok())
                .is_some_and(|age| age > 30)
        })
        .for_each(|record| println!("  Over 30: {:?}", record.fields));
}
