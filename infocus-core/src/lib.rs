//! infocus-core
//!
//! Core types and contracts shared across the infocus workspace.
//!
//! - `model`: the directory, quote, and logo data structures.
//! - `error`: the two-kind fetch error taxonomy.
//! - `connector`: provider role traits and the `MarketSource` umbrella.
//!
//! Provider traits are `async_trait` contracts; connectors decode their own
//! wire formats and return typed results, so the error taxonomy flows through
//! every layer unchanged.
#![warn(missing_docs)]

/// Provider role traits and the `MarketSource` umbrella contract.
pub mod connector;
/// The workspace error type.
pub mod error;
/// Directory, quote, and logo data structures.
pub mod model;

pub use connector::{DirectoryProvider, LogoProvider, MarketSource, QuoteProvider};
pub use error::{ErrorKind, FetchError};
pub use model::{CompanyDirectory, CompanyListing, Logo, Quote};
