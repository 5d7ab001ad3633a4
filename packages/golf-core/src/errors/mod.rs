//! Error handling for the golf scoring core.

pub mod domain;

pub use domain::{DomainError, ValidationKind};
