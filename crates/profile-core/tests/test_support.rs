//! Shared test support utilities for integration tests
#![allow(dead_code)]

use profile_core::{Phone, User, UserBuilder, UserOptions};

/// Bob, built positionally with nothing but a name
pub fn bob() -> User {
    User::from_parts("Bob", None, None, None)
}

/// Harley, built with a builder and no setters
pub fn harley() -> User {
    UserBuilder::new("Harley").build()
}

/// Travis, built with a builder and every setter
pub fn travis() -> User {
    UserBuilder::new("Travis")
        .age(18)
        .phone(111222333u64)
        .address("123 Loom Avenue")
        .build()
}

/// Tom, built from options carrying only an age
pub fn tom() -> User {
    User::from_options(
        "Tom",
        Some(UserOptions {
            age: Some(22),
            ..Default::default()
        }),
    )
}

/// Steve, built from options carrying only an address
pub fn steve() -> User {
    User::from_options(
        "Steve",
        Some(UserOptions {
            address: Some("456 Beck Street".to_string()),
            ..Default::default()
        }),
    )
}

/// The placeholder phone as a record would carry it
pub fn placeholder_phone() -> Option<Phone> {
    Some(Phone::Text("default".to_string()))
}
