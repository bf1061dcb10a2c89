//! Data models for the dealership backend.
//!
//! These models match the frontend JSON shapes exactly for seamless interoperability.

mod admin;
mod car;
mod contact;

pub use admin::*;
pub use car::*;
pub use contact::*;
