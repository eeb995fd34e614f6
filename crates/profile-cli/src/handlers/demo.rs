//! Demo command handler

use crate::error::Result;
use crate::output::{ConstructionStyle, OutputWriter, RecordEntry};
use profile_core::{User, UserBuilder, UserOptions};

/// The canonical example records, one or two per construction style
pub fn demo_entries() -> Vec<RecordEntry> {
    vec![
        // Every optional field has to be spelled out as absent
        RecordEntry::new(
            "Bob",
            ConstructionStyle::Positional,
            User::from_parts("Bob", None, None, None),
        ),
        RecordEntry::new(
            "Harley",
            ConstructionStyle::Builder,
            UserBuilder::new("Harley").build(),
        ),
        RecordEntry::new(
            "Travis",
            ConstructionStyle::Builder,
            UserBuilder::new("Travis")
                .age(18)
                .phone(111222333u64)
                .address("123 Loom Avenue")
                .build(),
        ),
        RecordEntry::new(
            "Tom",
            ConstructionStyle::Options,
            User::from_options(
                "Tom",
                Some(UserOptions {
                    age: Some(22),
                    ..Default::default()
                }),
            ),
        ),
        RecordEntry::new(
            "Steve",
            ConstructionStyle::Options,
            User::from_options(
                "Steve",
                Some(UserOptions {
                    address: Some("456 Beck Street".to_string()),
                    ..Default::default()
                }),
            ),
        ),
    ]
}

/// Handle the demo command
pub fn handle_demo(output: &mut OutputWriter) -> Result<()> {
    output.section("Construction styles")?;
    output.entries(&demo_entries())
}
