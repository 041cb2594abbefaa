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

//! Member registry.

use crate::base::Username;
use crate::user::User;
use std::collections::HashMap;

/// Registered members, keyed by unique username.
#[derive(Debug, Default)]
pub struct Membership {
    users: HashMap<Username, User>,
}

impl Membership {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
        }
    }

    /// Registers a member. Re-registering a username replaces the earlier
    /// entry (last write wins) and returns the displaced member.
    pub fn register(&mut self, user: User) -> Option<User> {
        self.users.insert(user.username().clone(), user)
    }

    /// Looks up a member by username.
    pub fn lookup(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }

    pub(crate) fn lookup_mut(&mut self, username: &str) -> Option<&mut User> {
        self.users.get_mut(username)
    }

    /// Iterates over all registered members in arbitrary order.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_lookup() {
        let mut membership = Membership::new();
        membership.register(User::new("user1", "John Doe"));

        let user = membership.lookup("user1").unwrap();
        assert_eq!(user.full_name(), "John Doe");
    }

    #[test]
    fn lookup_unknown_returns_none() {
        let membership = Membership::new();
        assert!(membership.lookup("ghost_user").is_none());
    }

    #[test]
    fn reregistering_replaces_earlier_entry() {
        let mut membership = Membership::new();
        membership.register(User::new("user1", "John Doe"));
        let displaced = membership.register(User::new("user1", "Johnny Doe"));

        assert_eq!(displaced.unwrap().full_name(), "John Doe");
        assert_eq!(membership.lookup("user1").unwrap().full_name(), "Johnny Doe");
        assert_eq!(membership.len(), 1);
    }
}
