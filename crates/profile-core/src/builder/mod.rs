//! Fluent builder for user records
//!
//! A `UserBuilder` owns the record under construction. Each setter takes the
//! builder by value and hands it back, so calls chain in any order and any
//! subset; `build` releases the finished record.
//!
//! Copyright (c) 2025 Profile Builder Team
//! Licensed under the Apache-2.0 license

mod core;

pub use self::core::UserBuilder;
