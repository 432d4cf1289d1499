//! # tally-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters must implement
//!   (driven/outbound port):
//!   - `RecordRepository<T>` — create, list, get, update, delete for one record kind
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ProductService` — create, list by category, update, delete products
//!   - `UserService` — create, list by name, update, delete users
//! - Orchestrate domain objects without knowing *how* records are stored
//!
//! ## Dependency rule
//! Depends on `tally-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
