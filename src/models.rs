//! Domain records. Plain data with serde shapes matching what is stored.

pub mod client_request;
pub mod gold_price;
pub mod karat;
pub mod preferences;
pub mod product;

pub use client_request::{ClientRequest, RequestDraft, RequestKind, RequestStatus};
pub use gold_price::{GoldPrice, PriceSet};
pub use karat::Karat;
pub use preferences::{AppPreferences, PATTERNS, Pattern};
pub use product::{Category, Product};
