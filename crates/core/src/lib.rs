//! Basket Core - Shared types library.
//!
//! This crate provides the domain types used across all Basket components:
//! - `cart` - The cart store (state, persistence, scoped access)
//! - `cli` - Command-line tool for inspecting and mutating the cart
//!
//! # Architecture
//!
//! The core crate contains only types and pure cart logic - no I/O, no
//! storage access, no runtime. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product ids, prices, line items, and the cart collection

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
