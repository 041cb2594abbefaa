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

//! Registered member entity.
//!
//! # Example
//!
//! ```
//! use library_catalog_rs::User;
//!
//! let user = User::new("user1", "John Doe");
//! assert_eq!(user.borrowed(), 0);
//! assert!(user.can_borrow());
//! ```

use crate::base::Username;
use crate::book::Book;
use serde::Serialize;

/// A registered library member.
///
/// # Invariants
///
/// - `borrowed` equals the length of `history` at all times.
/// - `borrowed` never exceeds [`User::MAX_LOANS`].
///
/// The history holds the books *currently* checked out, not a log of past
/// returns. Entries are checkout-time snapshots compared by the [`Book`]
/// equality contract (title, author, category).
#[derive(Debug, Clone, Serialize)]
pub struct User {
    username: Username,
    full_name: String,
    borrowed: usize,
    history: Vec<Book>,
}

impl User {
    /// Maximum number of books a member may hold at once.
    pub const MAX_LOANS: usize = 3;

    /// Creates a member with an empty borrowing history.
    pub fn new(username: impl Into<Username>, full_name: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            full_name: full_name.into(),
            borrowed: 0,
            history: Vec::new(),
        }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Count of books currently held.
    pub fn borrowed(&self) -> usize {
        self.borrowed
    }

    /// Books currently held, in checkout order.
    pub fn history(&self) -> &[Book] {
        &self.history
    }

    /// Whether the member is below the borrowing limit.
    pub fn can_borrow(&self) -> bool {
        self.borrowed < Self::MAX_LOANS
    }

    /// Whether the member currently holds this book.
    pub fn holds(&self, book: &Book) -> bool {
        self.history.contains(book)
    }

    /// Records a successful checkout. Caller validates `can_borrow` first.
    pub(crate) fn record_loan(&mut self, book: Book) {
        self.borrowed += 1;
        self.history.push(book);
        self.assert_invariants();
    }

    /// Records a successful return, removing a single occurrence from the
    /// history. Caller validates `holds` first; an absent book is a no-op.
    pub(crate) fn record_return(&mut self, book: &Book) {
        if let Some(position) = self.history.iter().position(|held| held == book) {
            self.history.remove(position);
            self.borrowed -= 1;
        }
        self.assert_invariants();
    }

    fn assert_invariants(&self) {
        debug_assert_eq!(
            self.borrowed,
            self.history.len(),
            "Invariant violated: borrowed count {} != history length {}",
            self.borrowed,
            self.history.len()
        );
        debug_assert!(
            self.borrowed <= Self::MAX_LOANS,
            "Invariant violated: borrowed count {} exceeds limit",
            self.borrowed
        );
    }
}
