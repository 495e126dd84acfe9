//! infocus-mock
//!
//! Deterministic in-memory [`MarketSource`](infocus_core::MarketSource) for
//! tests and examples. Serves static fixture data by default; per-call
//! behavior can be overridden mid-test through a [`MockController`] handle,
//! and call counters let tests assert that a retry actually re-issued a
//! fetch.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::sleep;

use infocus_core::{
    CompanyListing, DirectoryProvider, FetchError, Logo, LogoProvider, Quote, QuoteProvider,
};

mod fixtures;

/// Instruction for how a mocked call should behave.
#[derive(Debug, Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Return the provided value after a delay (simulate a slow fetch).
    ReturnAfter(T, Duration),
    /// Fail immediately with the provided error.
    Fail(FetchError),
    /// Hang indefinitely (simulate a stalled connection).
    Hang,
}

async fn apply<T>(rule: MockBehavior<T>) -> Result<T, FetchError> {
    match rule {
        MockBehavior::Return(value) => Ok(value),
        MockBehavior::ReturnAfter(value, delay) => {
            sleep(delay).await;
            Ok(value)
        }
        MockBehavior::Fail(err) => Err(err),
        MockBehavior::Hang => std::future::pending().await,
    }
}

#[derive(Default)]
struct InternalState {
    directory_rule: Option<MockBehavior<Vec<CompanyListing>>>,
    quote_rules: HashMap<String, MockBehavior<Quote>>,
    logo_rules: HashMap<String, MockBehavior<Logo>>,
    directory_calls: usize,
    quote_calls: Vec<String>,
    logo_calls: Vec<String>,
}

/// Mock market-data source backed by static fixtures and overridable rules.
pub struct MockSource {
    state: Arc<Mutex<InternalState>>,
}

/// Handle used by tests to steer a [`MockSource`] from the outside.
pub struct MockController {
    state: Arc<Mutex<InternalState>>,
}

impl MockSource {
    /// Create a fixture-backed source and its controller.
    #[must_use]
    pub fn new() -> (Arc<Self>, MockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        (
            Arc::new(Self {
                state: Arc::clone(&state),
            }),
            MockController { state },
        )
    }
}

impl MockController {
    /// Set the behavior of `company_list` calls. `None` restores fixtures.
    pub async fn set_directory_behavior(
        &self,
        behavior: Option<MockBehavior<Vec<CompanyListing>>>,
    ) {
        self.state.lock().await.directory_rule = behavior;
    }

    /// Set the behavior of `quote` calls for one symbol.
    pub async fn set_quote_behavior(&self, symbol: impl Into<String>, behavior: MockBehavior<Quote>) {
        self.state
            .lock()
            .await
            .quote_rules
            .insert(symbol.into(), behavior);
    }

    /// Set the behavior of `logo` calls for one symbol.
    pub async fn set_logo_behavior(&self, symbol: impl Into<String>, behavior: MockBehavior<Logo>) {
        self.state
            .lock()
            .await
            .logo_rules
            .insert(symbol.into(), behavior);
    }

    /// How many times `company_list` has been called.
    pub async fn directory_calls(&self) -> usize {
        self.state.lock().await.directory_calls
    }

    /// The symbols `quote` has been called with, in order.
    pub async fn quote_calls(&self) -> Vec<String> {
        self.state.lock().await.quote_calls.clone()
    }

    /// The symbols `logo` has been called with, in order.
    pub async fn logo_calls(&self) -> Vec<String> {
        self.state.lock().await.logo_calls.clone()
    }
}

#[async_trait]
impl DirectoryProvider for MockSource {
    async fn company_list(&self) -> Result<Vec<CompanyListing>, FetchError> {
        let rule = {
            let mut state = self.state.lock().await;
            state.directory_calls += 1;
            state.directory_rule.clone()
        };
        match rule {
            Some(rule) => apply(rule).await,
            None => Ok(fixtures::companies()),
        }
    }
}

#[async_trait]
impl QuoteProvider for MockSource {
    async fn quote(&self, symbol: &str) -> Result<Quote, FetchError> {
        let rule = {
            let mut state = self.state.lock().await;
            state.quote_calls.push(symbol.to_string());
            state.quote_rules.get(symbol).cloned()
        };
        match rule {
            Some(rule) => apply(rule).await,
            None => fixtures::quote_by_symbol(symbol)
                .ok_or_else(|| FetchError::network(format!("no fixture quote for {symbol}"))),
        }
    }
}

#[async_trait]
impl LogoProvider for MockSource {
    async fn logo(&self, symbol: &str) -> Result<Logo, FetchError> {
        let rule = {
            let mut state = self.state.lock().await;
            state.logo_calls.push(symbol.to_string());
            state.logo_rules.get(symbol).cloned()
        };
        match rule {
            Some(rule) => apply(rule).await,
            None => fixtures::logo_by_symbol(symbol)
                .ok_or_else(|| FetchError::network(format!("no fixture logo for {symbol}"))),
        }
    }
}
