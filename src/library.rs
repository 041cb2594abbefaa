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

//! Circulation engine.
//!
//! The [`Library`] is the central component that coordinates the catalog
//! and the member registry to perform checkouts and returns.
//!
//! # Circulation
//!
//! - **Checkout**: flips a book to unavailable and appends it to the
//!   member's borrowing history, subject to the borrowing limit.
//! - **Return**: flips the book back to available and removes one
//!   occurrence from the member's history.
//!
//! # Thread Safety
//!
//! A single [`Mutex`] guards catalog, membership, and circulation as one
//! unit. Checkout and return mutate a book and a member together, so both
//! either happen under the same lock or not at all; per-entity locks would
//! reintroduce a window between the two updates.

use crate::base::Username;
use crate::book::Book;
use crate::catalog::Catalog;
use crate::error::CirculationError;
use crate::membership::Membership;
use crate::user::User;
use parking_lot::Mutex;

#[derive(Debug, Default)]
struct LibraryData {
    catalog: Catalog,
    membership: Membership,
}

/// Circulation engine owning the catalog and the member registry.
///
/// # Invariants
///
/// - A book is unavailable exactly while one member holds it in history.
/// - A member's borrowed count equals their history length and never
///   exceeds [`User::MAX_LOANS`].
/// - A rejected operation leaves both entities untouched.
#[derive(Debug, Default)]
pub struct Library {
    inner: Mutex<LibraryData>,
}

impl Library {
    /// Creates a library with no books and no members.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(LibraryData::default()),
        }
    }

    // === Catalog operations ===

    /// Adds a book to the catalog. Duplicate titles are permitted; only
    /// the first insertion is reachable by title lookup.
    pub fn add_book(&self, book: Book) {
        self.inner.lock().catalog.add(book);
    }

    /// Removes every book with this title, returning how many were removed.
    pub fn remove_book(&self, title: &str) -> usize {
        self.inner.lock().catalog.remove_by_title(title)
    }

    /// Snapshot of the first book with this title.
    pub fn find_book(&self, title: &str) -> Option<Book> {
        self.inner.lock().catalog.find_by_title(title).cloned()
    }

    /// Snapshots of all books by this author, in insertion order.
    pub fn books_by_author(&self, author: &str) -> Vec<Book> {
        self.inner
            .lock()
            .catalog
            .find_by_author(author)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Snapshot of the whole catalog in insertion order.
    ///
    /// Useful for generating output reports of catalog state.
    pub fn books(&self) -> Vec<Book> {
        self.inner.lock().catalog.books().to_vec()
    }

    pub fn book_count(&self) -> usize {
        self.inner.lock().catalog.len()
    }

    // === Membership operations ===

    /// Registers a member. Re-registering a username replaces the earlier
    /// entry and returns the displaced member.
    pub fn register_user(&self, user: User) -> Option<User> {
        self.inner.lock().membership.register(user)
    }

    /// Snapshot of a member by username.
    pub fn get_user(&self, username: &str) -> Option<User> {
        self.inner.lock().membership.lookup(username).cloned()
    }

    pub fn user_count(&self) -> usize {
        self.inner.lock().membership.len()
    }

    // === Circulation ===

    /// Checks a book out to a member.
    ///
    /// On success the book becomes unavailable, the member's borrowed
    /// count rises by one, and a snapshot of the book is appended to their
    /// history. This is the only success path; any failure leaves both
    /// entities unchanged.
    ///
    /// # Errors
    ///
    /// - [`CirculationError::UserNotFound`] - Username is not registered.
    /// - [`CirculationError::BookNotFound`] - No book with this title.
    /// - [`CirculationError::CheckoutRejected`] - Book already checked out,
    ///   or the member holds [`User::MAX_LOANS`] books.
    pub fn checkout(&self, title: &str, username: &str) -> Result<(), CirculationError> {
        let mut data = self.inner.lock();
        let LibraryData {
            catalog,
            membership,
        } = &mut *data;

        let user = membership
            .lookup_mut(username)
            .ok_or(CirculationError::UserNotFound)?;
        let book = catalog
            .find_by_title_mut(title)
            .ok_or(CirculationError::BookNotFound)?;

        if !book.is_available() || !user.can_borrow() {
            return Err(CirculationError::CheckoutRejected);
        }

        book.set_available(false);
        let snapshot = book.clone();
        user.record_loan(snapshot);
        Ok(())
    }

    /// Returns a book previously checked out by a member.
    ///
    /// On success the book becomes available again, the member's borrowed
    /// count drops by one, and a single occurrence is removed from their
    /// history. Any failure leaves both entities unchanged.
    ///
    /// # Errors
    ///
    /// - [`CirculationError::UserNotFound`] - Username is not registered.
    /// - [`CirculationError::BookNotFound`] - No book with this title.
    /// - [`CirculationError::ReturnRejected`] - Book is already available,
    ///   or this member does not hold it.
    pub fn return_book(&self, title: &str, username: &str) -> Result<(), CirculationError> {
        let mut data = self.inner.lock();
        let LibraryData {
            catalog,
            membership,
        } = &mut *data;

        let user = membership
            .lookup_mut(username)
            .ok_or(CirculationError::UserNotFound)?;
        let book = catalog
            .find_by_title_mut(title)
            .ok_or(CirculationError::BookNotFound)?;

        if book.is_available() || !user.holds(book) {
            return Err(CirculationError::ReturnRejected);
        }

        book.set_available(true);
        user.record_return(book);
        Ok(())
    }

    /// Runs a closure against a member snapshot, avoiding the clone when
    /// only a field is needed.
    pub fn with_user<T>(&self, username: &str, f: impl FnOnce(&User) -> T) -> Option<T> {
        self.inner.lock().membership.lookup(username).map(f)
    }

    /// Usernames currently holding the given title.
    pub fn holders(&self, title: &str) -> Vec<Username> {
        let data = self.inner.lock();
        let Some(book) = data.catalog.find_by_title(title) else {
            return Vec::new();
        };
        data.membership
            .users()
            .filter(|user| user.holds(book))
            .map(|user| user.username().clone())
            .collect()
    }
}
