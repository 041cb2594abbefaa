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

//! Book entity and its fixed category set.
//!
//! Books follow a two-state machine per title:
//! - `Available` → `CheckedOut` (via checkout)
//! - `CheckedOut` → `Available` (via return)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed, closed set of genres a book can belong to.
///
/// The set is intentionally not extensible; an open string would let
/// typos create phantom categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookCategory {
    Fiction,
    NonFiction,
    ScienceFiction,
    Mystery,
    Romance,
    Horror,
    Thriller,
    Biography,
    History,
    SelfHelp,
    Science,
    Philosophy,
}

impl BookCategory {
    /// Kebab-case name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fiction => "fiction",
            Self::NonFiction => "non-fiction",
            Self::ScienceFiction => "science-fiction",
            Self::Mystery => "mystery",
            Self::Romance => "romance",
            Self::Horror => "horror",
            Self::Thriller => "thriller",
            Self::Biography => "biography",
            Self::History => "history",
            Self::SelfHelp => "self-help",
            Self::Science => "science",
            Self::Philosophy => "philosophy",
        }
    }
}

impl fmt::Display for BookCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(pub String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown book category '{}'", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for BookCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fiction" => Ok(Self::Fiction),
            "non-fiction" => Ok(Self::NonFiction),
            "science-fiction" => Ok(Self::ScienceFiction),
            "mystery" => Ok(Self::Mystery),
            "romance" => Ok(Self::Romance),
            "horror" => Ok(Self::Horror),
            "thriller" => Ok(Self::Thriller),
            "biography" => Ok(Self::Biography),
            "history" => Ok(Self::History),
            "self-help" => Ok(Self::SelfHelp),
            "science" => Ok(Self::Science),
            "philosophy" => Ok(Self::Philosophy),
            other => Err(ParseCategoryError(other.to_owned())),
        }
    }
}

/// A book held by the catalog.
///
/// The title acts as the lookup key: the catalog permits duplicate titles
/// in storage, but only the first insertion is ever reachable by title.
///
/// # Equality
///
/// Two books are equal when their identity fields (title, author, category)
/// match. Availability is deliberately excluded: a member's borrowing
/// history stores checkout-time snapshots, and a return must still find the
/// snapshot after the live book's availability flips back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    category: BookCategory,
    available: bool,
}

impl Book {
    /// Creates a book that starts out available.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        category: BookCategory,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            category,
            available: true,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn category(&self) -> BookCategory {
        self.category
    }

    /// A book is available unless currently checked out by exactly one member.
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Availability flips only through circulation.
    pub(crate) fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.author == other.author
            && self.category == other.category
    }
}

impl Eq for Book {}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} [{}]", self.title, self.author, self.category)
    }
}
