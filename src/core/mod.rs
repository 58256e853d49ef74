//! Core customer types, VAT normalization, and billing merge.
//!
//! This module holds the pure part of the reconciliation: no network,
//! no file system. Everything here is deterministic and unit-testable.

mod builder;
mod error;
mod merge;
mod normalize;
mod types;

pub use builder::*;
pub use error::*;
pub use merge::*;
pub use normalize::*;
pub use types::*;
