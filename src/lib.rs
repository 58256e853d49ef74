//! # vatsync
//!
//! Batch reconciliation of customer VAT numbers and billing addresses
//! against the Chargebee subscription-billing API.
//!
//! For every customer the updater looks the remote record up by email,
//! strips a leading two-letter country prefix from the VAT number,
//! overlays the supplied fields onto the existing billing address and
//! pushes the result back. Each outcome is appended to a plain-text log.
//!
//! ## Quick Start
//!
//! ```rust
//! use vatsync::core::*;
//!
//! let input = CustomerInputBuilder::new("billing@acme.de", "DE123456789")
//!     .city("Berlin")
//!     .build();
//!
//! let vat = normalize_vat_number(&input.vat_number);
//! assert_eq!(vat.value, "123456789");
//! assert_eq!(vat.stripped_prefix.as_deref(), Some("DE"));
//!
//! let record = merge_billing_record(&input, &vat.value, None);
//! assert_eq!(record.get(BillingField::City), Some("Berlin"));
//! assert_eq!(record.get(BillingField::Country), None);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Data model, VAT normalization, merge, batch orchestration |
//! | `chargebee` (default) | Blocking Chargebee v2 client and `update_vat_numbers` |
//! | `cli` | The `vatsync` command-line binary |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod batch;

#[cfg(feature = "chargebee")]
pub mod chargebee;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
