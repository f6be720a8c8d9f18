//! Magma Core - Shared types library.
//!
//! This crate provides common types used across all Magma Fit House cart
//! components:
//! - `cart` - The cart engine (store, persistence, view, order hand-off)
//! - `cli` - Command-line storefront adapter
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! URL handling. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, names, and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
