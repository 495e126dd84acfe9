//! infocus-iex
//!
//! The real HTTP connector for the infocus stock screen, speaking the
//! IEX-style REST endpoints:
//!
//! - `GET {api_base}/1.0/stock/market/list/infocus` — tracked companies
//! - `GET {api_base}/1.0/stock/{symbol}/quote` — point-in-time quote
//! - `GET {logo_base}/iex/api/logos/{symbol}.png` — raw logo bytes
//!
//! The connector decodes its own wire formats and surfaces the workspace's
//! two-kind [`FetchError`](infocus_core::FetchError) taxonomy.
#![warn(missing_docs)]

mod client;
mod wire;

pub use client::{BuildError, DEFAULT_API_BASE, DEFAULT_LOGO_BASE, IexConnector, IexConnectorBuilder};
