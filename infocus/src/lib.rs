//! infocus
//!
//! A single-screen stock viewer: pick a company, see its latest quote and
//! logo. The crate is the screen controller — everything that happens between
//! a pluggable [`MarketSource`] and a set of passive display fields.
//!
//! Architecture
//! - All mutable state (directory, display fields) is owned by [`Screen`] and
//!   touched only on its single presentation task; fetch completions and user
//!   events are marshaled onto it as [`ScreenEvent`] values.
//! - Two pipelines: the startup directory load, and the per-symbol quote load
//!   (quote + logo fetched independently and concurrently).
//! - Failures become tagged [`ErrorReport`] values on the notice stream;
//!   network errors carry a retry token that re-enters the failed pipeline,
//!   decode errors offer acknowledgment only.
//! - In-flight fetches are never cancelled: reselecting quickly lets the last
//!   completion win the display.
//!
//! Driving the screen:
//! ```rust,ignore
//! let (source, _controller) = infocus_mock::MockSource::new();
//! let (mut screen, mut notices) = infocus::Screen::new(source);
//! let handle = screen.handle();   // give to the picker / alert presenter
//! tokio::spawn(async move { screen.run().await });
//! ```
#![warn(missing_docs)]

/// Error reports, retry tokens, and modal content.
pub mod alert;
/// The passive display fields and their two transitions.
pub mod presenter;
/// The screen controller, its events, and the presentation task loop.
pub mod screen;

pub use alert::{Alert, AlertAction, AlertEffect, ErrorReport, RetryToken};
pub use presenter::{ChangeColor, DisplayState, Emphasis, PLACEHOLDER, change_color};
pub use screen::{Notice, Screen, ScreenEvent, ScreenHandle};

// Re-export core types for convenience
pub use infocus_core::{
    CompanyDirectory, CompanyListing, DirectoryProvider, ErrorKind, FetchError, Logo,
    LogoProvider, MarketSource, Quote, QuoteProvider,
};
