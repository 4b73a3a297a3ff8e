//! Operations on the value contract.
//!
//! The contract stores one string, read with `getvalue()` and replaced
//! with `update(string)`.

pub mod operations;

pub use operations::{Deployment, ValueContract, ValueUpdate};
