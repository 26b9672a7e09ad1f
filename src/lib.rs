//! `jewel-catalog` - data core for a jewelry storefront
//!
//! This crate provides the data-access layer behind a jewelry catalog: products,
//! live buy/sell prices per karat tier, customer service requests, favorites and
//! display preferences. Products and prices live in a hosted document store when
//! one is configured and fall back to an on-device `SQLite` key-value store
//! otherwise, behind a single facade ([`core::Catalog`]).

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,
    clippy::nursery,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Style consistency
    clippy::enum_glob_use,
    clippy::redundant_closure_for_method_calls,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
)]

/// Configuration loading for the local database, remote store and admin gate
pub mod config;
/// Catalog facade, storage strategies and local-only services
pub mod core;
/// `SeaORM` entity definitions for the local database
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Domain records
pub mod models;
/// Remote document store client
pub mod remote;
/// On-device key-value store
pub mod storage;

#[cfg(test)]
pub mod test_utils;
