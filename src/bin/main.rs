// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 The library-catalog-rs authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use clap::Parser;
use csv::{ReaderBuilder, Trim, Writer};
use library_catalog_rs::{Book, BookCategory, Library, User};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::PathBuf;
use std::process;

/// Library Catalog - Process operation CSV files
///
/// Reads catalog and circulation operations from a CSV file and outputs
/// the final catalog state to stdout. Supports adding/removing books,
/// registering members, checkouts, and returns.
#[derive(Parser, Debug)]
#[command(name = "library-catalog-rs")]
#[command(about = "A library catalog that processes operation CSVs", long_about = None)]
struct Args {
    /// Path to CSV file with operations
    ///
    /// Expected format: op,title,author,category,username,name
    /// Example: cargo run -- operations.csv > catalog.csv
    #[arg(value_name = "FILE")]
    input: PathBuf,
}

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Open input file
    let file = match File::open(&args.input) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error opening file '{}': {}", args.input.display(), e);
            process::exit(1);
        }
    };

    // Process operations from CSV
    let library = match process_operations(BufReader::new(file)) {
        Ok(library) => library,
        Err(e) => {
            eprintln!("Error processing operations: {}", e);
            process::exit(1);
        }
    };

    // Write results to stdout
    if let Err(e) = write_catalog(&library, std::io::stdout()) {
        eprintln!("Error writing output: {}", e);
        process::exit(1);
    }
}

/// Raw CSV record matching the input format.
///
/// Fields: `op, title, author, category, username, name`
#[derive(Debug, Deserialize)]
struct CsvRecord {
    op: String,
    title: Option<String>,
    author: Option<String>,
    category: Option<String>,
    username: Option<String>,
    name: Option<String>,
}

/// A single catalog or circulation operation parsed from one CSV row.
#[derive(Debug)]
enum Operation {
    AddBook(Book),
    RemoveBook(String),
    Register(User),
    Checkout { title: String, username: String },
    Return { title: String, username: String },
}

impl CsvRecord {
    /// Converts a CSV record into an operation.
    ///
    /// Returns `None` for unknown ops or missing required fields.
    fn into_operation(self) -> Option<Operation> {
        match self.op.to_lowercase().as_str() {
            "add" => {
                let title = self.title?;
                let author = self.author?;
                let category: BookCategory = self.category?.parse().ok()?;
                Some(Operation::AddBook(Book::new(title, author, category)))
            }
            "remove" => Some(Operation::RemoveBook(self.title?)),
            "register" => {
                let username = self.username?;
                let name = self.name?;
                Some(Operation::Register(User::new(username, name)))
            }
            "checkout" => Some(Operation::Checkout {
                title: self.title?,
                username: self.username?,
            }),
            "return" => Some(Operation::Return {
                title: self.title?,
                username: self.username?,
            }),
            _ => None,
        }
    }
}

/// Process operations from a CSV reader.
///
/// Uses streaming parsing, so arbitrarily long operation scripts never
/// load fully into memory. Malformed rows, unknown ops, and rejected
/// circulation operations are skipped.
///
/// # CSV Format
///
/// Expected columns: `op, title, author, category, username, name`
/// - `op`: Operation (add, remove, register, checkout, return)
/// - `title`/`author`/`category`: Book fields (category in kebab-case)
/// - `username`/`name`: Member fields
///
/// # Example
///
/// ```csv
/// op,title,author,category,username,name
/// add,1984,George Orwell,fiction,,
/// register,,,,user1,John Doe
/// checkout,1984,,,user1,
/// ```
///
/// # Errors
///
/// Returns a CSV error if the reader fails or the CSV structure is invalid.
/// Individual rejected operations are logged in debug mode but don't stop
/// processing.
pub fn process_operations<R: Read>(reader: R) -> Result<Library, csv::Error> {
    let library = Library::new();

    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All) // Handle whitespace in fields like " checkout "
        .flexible(true) // Allow trailing fields to be omitted
        .has_headers(true) // Skip first row as header
        .from_reader(reader);

    for result in rdr.deserialize::<CsvRecord>() {
        match result {
            Ok(record) => {
                let Some(op) = record.into_operation() else {
                    #[cfg(debug_assertions)]
                    eprintln!("Skipping invalid operation record");
                    continue;
                };

                match op {
                    Operation::AddBook(book) => library.add_book(book),
                    Operation::RemoveBook(title) => {
                        library.remove_book(&title);
                    }
                    Operation::Register(user) => {
                        library.register_user(user);
                    }
                    Operation::Checkout { title, username } => {
                        // Rejected operations don't stop the script
                        if let Err(e) = library.checkout(&title, &username) {
                            #[cfg(debug_assertions)]
                            eprintln!("Skipping checkout of '{}': {}", title, e);
                        }
                    }
                    Operation::Return { title, username } => {
                        if let Err(e) = library.return_book(&title, &username) {
                            #[cfg(debug_assertions)]
                            eprintln!("Skipping return of '{}': {}", title, e);
                        }
                    }
                }
            }
            Err(e) => {
                // Skip malformed rows
                #[cfg(debug_assertions)]
                eprintln!("Skipping malformed row: {}", e);
                continue;
            }
        }
    }

    Ok(library)
}

/// Write catalog state to a CSV writer.
///
/// Outputs all books in insertion order.
///
/// # CSV Format
///
/// Columns: `title, author, category, available`
///
/// # Example
///
/// ```csv
/// title,author,category,available
/// 1984,George Orwell,fiction,false
/// Dune,Frank Herbert,science-fiction,true
/// ```
///
/// # Errors
///
/// Returns a CSV error if writing fails.
pub fn write_catalog<W: Write>(library: &Library, writer: W) -> Result<(), csv::Error> {
    let mut wtr = Writer::from_writer(writer);

    for book in library.books() {
        wtr.serialize(&book)?;
    }

    // Flush to ensure all data is written
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_add_and_register() {
        let csv = "op,title,author,category,username,name\n\
                   add,1984,George Orwell,fiction,,\n\
                   register,,,,user1,John Doe\n";
        let library = process_operations(Cursor::new(csv)).unwrap();

        assert_eq!(library.book_count(), 1);
        assert_eq!(library.user_count(), 1);
        assert!(library.find_book("1984").unwrap().is_available());
    }

    #[test]
    fn parse_checkout_flips_availability() {
        let csv = "op,title,author,category,username,name\n\
                   add,1984,George Orwell,fiction,,\n\
                   register,,,,user1,John Doe\n\
                   checkout,1984,,,user1,\n";
        let library = process_operations(Cursor::new(csv)).unwrap();

        assert!(!library.find_book("1984").unwrap().is_available());
        assert_eq!(library.get_user("user1").unwrap().borrowed(), 1);
    }

    #[test]
    fn parse_demo_scenario() {
        // The seeded scenario: two books, two members, one checkout
        // followed by one return.
        let csv = "op,title,author,category,username,name\n\
                   add,1984,George Orwell,fiction,,\n\
                   add,To Kill a Mockingbird,Harper Lee,fiction,,\n\
                   register,,,,user1,John Doe\n\
                   register,,,,user2,Jane Smith\n\
                   checkout,1984,,,user1,\n\
                   return,1984,,,user1,\n";
        let library = process_operations(Cursor::new(csv)).unwrap();

        assert_eq!(library.book_count(), 2);
        assert_eq!(library.user_count(), 2);
        assert!(library.find_book("1984").unwrap().is_available());
        assert_eq!(library.get_user("user1").unwrap().borrowed(), 0);
    }

    #[test]
    fn parse_remove_operation() {
        let csv = "op,title,author,category,username,name\n\
                   add,1984,George Orwell,fiction,,\n\
                   add,Dune,Frank Herbert,science-fiction,,\n\
                   remove,1984,,,,\n";
        let library = process_operations(Cursor::new(csv)).unwrap();

        assert_eq!(library.book_count(), 1);
        assert!(library.find_book("1984").is_none());
    }

    #[test]
    fn parse_with_whitespace() {
        let csv = "op,title,author,category,username,name\n\
                   add , 1984 , George Orwell , fiction ,,\n";
        let library = process_operations(Cursor::new(csv)).unwrap();

        assert_eq!(library.book_count(), 1);
        assert!(library.find_book("1984").is_some());
    }

    #[test]
    fn skip_malformed_and_unknown_rows() {
        let csv = "op,title,author,category,username,name\n\
                   add,1984,George Orwell,fiction,,\n\
                   shelve,nothing,here,at-all,,\n\
                   add,Dune,Frank Herbert,science-fiction,,\n";
        let library = process_operations(Cursor::new(csv)).unwrap();

        assert_eq!(library.book_count(), 2); // Two valid adds
    }

    #[test]
    fn rejected_checkout_does_not_stop_processing() {
        let csv = "op,title,author,category,username,name\n\
                   add,1984,George Orwell,fiction,,\n\
                   checkout,1984,,,ghost_user,\n\
                   register,,,,user1,John Doe\n\
                   checkout,1984,,,user1,\n";
        let library = process_operations(Cursor::new(csv)).unwrap();

        // Ghost checkout skipped, real one applied
        assert!(!library.find_book("1984").unwrap().is_available());
    }

    #[test]
    fn write_catalog_to_csv() {
        let csv = "op,title,author,category,username,name\n\
                   add,1984,George Orwell,fiction,,\n\
                   add,Dune,Frank Herbert,science-fiction,,\n";
        let library = process_operations(Cursor::new(csv)).unwrap();

        let mut output = Vec::new();
        write_catalog(&library, &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str.contains("title,author,category,available"));
        assert!(output_str.contains("Dune,Frank Herbert,science-fiction,true"));
    }
}
