//! # tally-domain
//!
//! Pure domain model for the tally record services.
//!
//! ## Responsibilities
//! - Foundational types: store-assigned identifiers, list filters, error conventions
//! - Define the [`record::Record`] abstraction every stored kind implements
//! - Define **Products** (name, category, price) and **Users** (name)
//! - Decode client payloads into typed values
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod filter;
pub mod id;
pub mod payload;
pub mod record;

pub mod product;
pub mod user;
