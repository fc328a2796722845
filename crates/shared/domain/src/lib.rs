//! # Domain Models
//!
//! Plain configuration types for the Swagger UI bundle. The only dependency is `serde`.
//! Keep it lean: defaults and accessors live here, behavior lives in `swb-kernel`.

pub mod config;
pub mod constants;
