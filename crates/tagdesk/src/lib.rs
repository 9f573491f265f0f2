//! Order intake and administration library for a custom pet tag retailer.
//!
//! The `orders` module carries the whole business-rule surface: pricing,
//! shape configuration rules, submission validation, the repository
//! abstraction, the intake service, and the form/admin controllers built on
//! top of it. `config`, `telemetry`, and `error` provide the runtime plumbing
//! shared with the API service.

pub mod config;
pub mod error;
pub mod orders;
pub mod telemetry;
