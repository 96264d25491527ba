//! Deterministic address-to-page generator for the Babel-space retrieval
//! engine.
//!
//! # Overview
//!
//! This crate provides the pure, total mapping at the bottom of the
//! retrieval pipeline: a hex (or arbitrary-byte) address in, a 3200-character
//! page drawn from a fixed 29-symbol alphabet out. It is deliberately free of
//! I/O, randomness, and shared state:
//!
//! - No network calls.
//! - No dependence on wall-clock time or hardware.
//! - Same address always yields a byte-identical page.
//!
//! # Core Guarantee
//!
//! > **Same address → identical 3200-character page, forever.**
//!
//! # Quick Start
//!
//! ```rust
//! use generator::{address_to_page, validate_page, PAGE_LENGTH};
//!
//! let page = address_to_page(b"deadbeef");
//! assert_eq!(page.chars().count(), PAGE_LENGTH);
//! assert!(validate_page(&page).is_ok());
//! ```
//!
//! # Module Structure
//!
//! - `alphabet`: the fixed 29-symbol alphabet.
//! - `generator`: the keyed-PRF algorithm (`address_to_page`).
//! - `validate`: page shape/content validation (`validate_page`).
//! - `address`: deterministic address derivation (`random_address`).
//! - `error`: typed validation failure reasons.

mod address;
mod alphabet;
mod error;
mod generator;
mod validate;

pub use crate::address::random_address;
pub use crate::alphabet::{ALPHABET, ALPHABET_SIZE};
pub use crate::error::PageValidationError;
pub use crate::generator::{address_to_page, PAGE_LENGTH};
pub use crate::validate::validate_page;
