//! Core UserBuilder structure and its setters
//!
//! Copyright (c) 2025 Profile Builder Team
//! Licensed under the Apache-2.0 license

use crate::types::{Phone, User};
use tracing::trace;

/// Builder for constructing `User` records
///
/// Only the name is required to start. Every optional field stays absent
/// unless its setter is called; calling a setter twice keeps the later value.
///
/// ```
/// use profile_core::UserBuilder;
///
/// let travis = UserBuilder::new("Travis")
///     .age(18)
///     .phone(111222333u64)
///     .address("123 Loom Avenue")
///     .build();
///
/// assert_eq!(travis.age(), Some(18));
/// ```
#[derive(Debug, Clone)]
#[must_use = "a builder does nothing until `build` is called"]
pub struct UserBuilder {
    user: User,
}

impl UserBuilder {
    /// Create a new builder for a record named `name`
    pub fn new(name: impl Into<String>) -> Self {
        let user = User::named(name);
        trace!(name = %user.name(), "Starting user builder");
        Self { user }
    }

    /// Set the age
    pub fn age(mut self, age: u32) -> Self {
        trace!(age, "Setting age");
        self.user.set_age(age);
        self
    }

    /// Set the phone, numeric or textual
    pub fn phone(mut self, phone: impl Into<Phone>) -> Self {
        let phone = phone.into();
        trace!(phone = %phone, "Setting phone");
        self.user.set_phone(phone);
        self
    }

    /// Set the address
    pub fn address(mut self, address: impl Into<String>) -> Self {
        let address = address.into();
        trace!(address = %address, "Setting address");
        self.user.set_address(address);
        self
    }

    /// The record as staged so far, without consuming the builder
    pub fn snapshot(&self) -> User {
        self.user.clone()
    }

    /// Finish construction and return the record
    pub fn build(self) -> User {
        trace!(user = %self.user, "Built user");
        self.user
    }
}

impl From<UserBuilder> for User {
    fn from(builder: UserBuilder) -> Self {
        builder.build()
    }
}
