//! # tally-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a small **JSON API** per record kind (`/products`, `/users`)
//! - Translate method, query string and body into application service calls
//!   (driving adapter): `POST` creates, `GET` lists, `PUT ?id=N` updates,
//!   `DELETE ?id=N` deletes
//! - Reject bad identifiers and undecodable bodies before any store is touched
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `tally-app` (for port traits and services) and `tally-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
