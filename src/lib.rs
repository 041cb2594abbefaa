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

//! # Library Catalog
//!
//! This library provides an in-memory catalog of books, a member registry,
//! and the circulation rules (checkout/return) connecting them.
//!
//! ## Core Components
//!
//! - [`Library`]: Circulation engine coordinating catalog and membership
//! - [`Catalog`]: Insertion-ordered book storage with title/author lookup
//! - [`Membership`]: Member registry keyed by unique username
//! - [`CirculationError`]: Error types for rejected circulation operations
//!
//! ## Example
//!
//! ```
//! use library_catalog_rs::{Book, BookCategory, Library, User};
//!
//! let library = Library::new();
//!
//! library.add_book(Book::new("1984", "George Orwell", BookCategory::Fiction));
//! library.register_user(User::new("user1", "John Doe"));
//!
//! // Check the book out
//! library.checkout("1984", "user1").unwrap();
//! assert!(!library.find_book("1984").unwrap().is_available());
//!
//! // And return it
//! library.return_book("1984", "user1").unwrap();
//! assert!(library.find_book("1984").unwrap().is_available());
//! ```
//!
//! ## Thread Safety
//!
//! [`Library`] guards all of its state with a single mutex, so checkout and
//! return stay atomic across the book and the member they touch even under
//! concurrent callers.

pub mod base;
pub mod book;
pub mod catalog;
pub mod error;
mod library;
pub mod membership;
pub mod user;

pub use base::Username;
pub use book::{Book, BookCategory, ParseCategoryError};
pub use catalog::Catalog;
pub use error::CirculationError;
pub use library::Library;
pub use membership::Membership;
pub use user::User;
