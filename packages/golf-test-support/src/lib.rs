//! Golf core test support utilities
//!
//! Unified logging initialization and shared proptest configuration for
//! unit and integration tests.

pub mod logging;
pub mod proptest_prelude;
