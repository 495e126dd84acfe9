use std::fmt;

use serde::{Deserialize, Serialize};

/// One element of the tracked-company payload.
///
/// The upstream feed sends camelCase objects with more fields than we need;
/// anything beyond the name and symbol is ignored during decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyListing {
    /// Company display name, the unique key of the directory.
    pub company_name: String,
    /// Ticker symbol used for quote and logo lookups.
    pub symbol: String,
}

/// The name → symbol mapping of tracked companies.
///
/// Names are unique keys; inserting a duplicate name replaces its symbol
/// (last write wins). Index-based access is the contract the picker relies
/// on: `name_at(i)` and `symbol_at(i)` are backed by the same underlying
/// sequence, so titles and resolved symbols can never skew.
#[derive(Debug, Clone, Default)]
pub struct CompanyDirectory {
    entries: Vec<(String, String)>,
}

impl CompanyDirectory {
    /// Create an empty directory.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a directory from decoded listings, collapsing duplicate names
    /// last-write-wins.
    #[must_use]
    pub fn from_listings(listings: impl IntoIterator<Item = CompanyListing>) -> Self {
        let mut dir = Self::new();
        dir.merge(listings);
        dir
    }

    /// Insert one entry. A duplicate name keeps its position and takes the
    /// new symbol.
    pub fn insert(&mut self, name: impl Into<String>, symbol: impl Into<String>) {
        let name = name.into();
        let symbol = symbol.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = symbol,
            None => self.entries.push((name, symbol)),
        }
    }

    /// Merge decoded listings into the directory, last-write-wins on name.
    pub fn merge(&mut self, listings: impl IntoIterator<Item = CompanyListing>) {
        for listing in listings {
            self.insert(listing.company_name, listing.symbol);
        }
    }

    /// Number of tracked companies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory holds no companies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The i-th company name in enumeration order.
    #[must_use]
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(n, _)| n.as_str())
    }

    /// The i-th symbol, co-indexed with [`Self::name_at`].
    #[must_use]
    pub fn symbol_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|(_, s)| s.as_str())
    }

    /// All names in enumeration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

/// Point-in-time quote for one symbol.
///
/// Transient by design: rebuilt on every fetch, handed to the presenter,
/// then discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// Company display name as reported by the quote endpoint.
    pub company_name: String,
    /// Ticker symbol as reported by the quote endpoint.
    pub symbol: String,
    /// Latest price.
    pub price: f64,
    /// Price change since previous close. Sign drives the display color.
    pub change: f64,
}

/// Raw logo bytes for a symbol.
///
/// The bytes are never validated as an image: corrupt content under a 200
/// response is displayed as-is (blank), not raised as an error.
#[derive(Clone, PartialEq, Eq)]
pub struct Logo {
    bytes: Vec<u8>,
}

impl Logo {
    /// Wrap fetched image bytes.
    #[must_use]
    pub const fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// The raw bytes, for the environment to hand to its image decoder.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the logo holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for Logo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Logo({} bytes)", self.bytes.len())
    }
}
