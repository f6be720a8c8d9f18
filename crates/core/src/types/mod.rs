//! Core types for the Magma Fit House cart.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod item;
pub mod name;
pub mod price;

pub use id::ItemId;
pub use item::Item;
pub use name::{ItemName, NameError};
pub use price::{Price, PriceError};
