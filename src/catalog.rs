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

//! Book storage and lookup.

use crate::book::Book;

/// Insertion-ordered collection of books.
///
/// Duplicate titles may be stored, but title lookup returns the first
/// match, making titles the de facto unique key.
#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Appends a book. No uniqueness check: a duplicate title is stored
    /// but stays unreachable by lookup behind the first insertion.
    pub fn add(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Removes every book with this exact title, returning how many were
    /// removed. Subsequent lookups for the title fail.
    pub fn remove_by_title(&mut self, title: &str) -> usize {
        let before = self.books.len();
        self.books.retain(|book| book.title() != title);
        before - self.books.len()
    }

    /// First book with this exact title, in insertion order.
    pub fn find_by_title(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.title() == title)
    }

    pub(crate) fn find_by_title_mut(&mut self, title: &str) -> Option<&mut Book> {
        self.books.iter_mut().find(|book| book.title() == title)
    }

    /// All books by this author (case-sensitive exact match), in insertion
    /// order. Empty when none match.
    pub fn find_by_author(&self, author: &str) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|book| book.author() == author)
            .collect()
    }

    /// All books in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
