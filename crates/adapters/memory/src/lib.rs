//! # tally-adapter-memory
//!
//! In-memory persistence adapter.
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `tally-app::ports::storage`
//! - Hold the authoritative set of records for one kind in process memory
//! - Assign identifiers: strictly increasing from 1, never reused
//! - Serialize every operation through a single lock so id assignment and
//!   map mutation happen in one critical section
//!
//! ## Dependency rule
//! Depends on `tally-app` (for port traits) and `tally-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod store;

pub use store::InMemoryStore;
