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

//! Error types for circulation operations.

use thiserror::Error;

/// Circulation operation errors.
///
/// Not-found conditions and business-rule rejections are distinct kinds,
/// so callers can tell a missing title apart from a book that exists but
/// is already checked out.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CirculationError {
    /// Username has no corresponding registered member
    #[error("user does not exist")]
    UserNotFound,

    /// Title has no corresponding book in the catalog
    #[error("book not found in catalog")]
    BookNotFound,

    /// Book is already checked out, or the member is at the borrowing limit
    #[error("book is not available for checkout")]
    CheckoutRejected,

    /// Book is already available, or not held by this member
    #[error("book cannot be returned")]
    ReturnRejected,
}
