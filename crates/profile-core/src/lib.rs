//! Profile Core - three ways to construct a user profile record
//!
//! A `User` always has a name; age, phone and address are optional. This
//! crate offers three construction styles for it:
//!
//! - **Positional**: [`User::from_parts`] takes every field in order
//! - **Fluent builder**: [`UserBuilder`] stages fields through chained setters
//! - **Options object**: [`User::from_options`] takes the name plus a
//!   [`UserOptions`] bundle whose omitted fields fall back to defaults
//!
//! # Example
//!
//! ```
//! use profile_core::{Phone, User, UserBuilder, UserOptions};
//!
//! let harley = UserBuilder::new("Harley").build();
//! assert_eq!(harley.phone(), None);
//!
//! let steve = User::from_options(
//!     "Steve",
//!     Some(UserOptions { address: Some("456 Beck Street".into()), ..Default::default() }),
//! );
//! assert_eq!(steve.phone(), Some(&Phone::placeholder()));
//! ```

pub mod builder;
pub mod error;
pub mod options;
pub mod types;

// Re-export main types for convenience
pub use builder::UserBuilder;
pub use error::{Error, Result};
pub use options::UserOptions;
pub use types::{Phone, User, DEFAULT_PHONE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_default_phone_constant() {
        assert_eq!(DEFAULT_PHONE, "default");
    }
}
