//! Entity module - `SeaORM` entity definitions for the local database.

pub mod local_entry;

pub use local_entry::{Column as LocalEntryColumn, Entity as LocalEntry, Model as LocalEntryModel};
