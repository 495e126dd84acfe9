use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use infocus_core::{
    CompanyDirectory, CompanyListing, DirectoryProvider, FetchError, Logo, LogoProvider,
    MarketSource, Quote, QuoteProvider,
};

use crate::alert::{ErrorReport, RetryToken};
use crate::presenter::DisplayState;

/// Event marshaled onto the presentation task.
///
/// User input and network completions alike arrive as values on one channel,
/// so all state mutation happens on the single consumer in arrival order.
/// Completions carry no generation counter: when fetches overlap, the last
/// completion applied wins the display.
#[derive(Debug)]
pub enum ScreenEvent {
    /// The picker reported a row selection.
    Select(usize),
    /// The user chose the retry action on an error alert.
    Retry(RetryToken),
    /// The directory fetch delivered its listings.
    DirectoryLoaded(Vec<CompanyListing>),
    /// The directory fetch failed.
    DirectoryFailed(FetchError),
    /// The quote sub-fetch delivered a decoded quote.
    QuoteLoaded(Quote),
    /// The quote sub-fetch failed.
    QuoteFailed {
        /// Symbol the fetch was issued for.
        symbol: String,
        /// The failure.
        error: FetchError,
    },
    /// The logo sub-fetch delivered image bytes.
    LogoLoaded(Logo),
    /// The logo sub-fetch failed.
    LogoFailed {
        /// Symbol the fetch was issued for.
        symbol: String,
        /// The failure.
        error: FetchError,
    },
}

/// Out-of-band notification for the embedding UI.
#[derive(Debug, Clone)]
pub enum Notice {
    /// The directory changed; the picker should reload its rows.
    DirectoryReady {
        /// Number of tracked companies.
        count: usize,
    },
    /// A pipeline failed; present the report as a modal.
    FetchFailed(ErrorReport),
}

/// Cheaply cloneable external face of the screen.
///
/// Safe to use from any thread; both methods post an event and return
/// immediately. Sends after the screen is gone are silently dropped.
#[derive(Clone)]
pub struct ScreenHandle {
    tx: UnboundedSender<ScreenEvent>,
}

impl ScreenHandle {
    /// The picker selected the given row.
    pub fn select(&self, index: usize) {
        let _ = self.tx.send(ScreenEvent::Select(index));
    }

    /// The user chose the retry action on an error alert.
    pub fn retry(&self, token: RetryToken) {
        let _ = self.tx.send(ScreenEvent::Retry(token));
    }
}

/// The screen controller.
///
/// Owns the company directory and the display state; fetches run on spawned
/// tasks and post completions back through the event channel. Must live
/// inside a Tokio runtime.
pub struct Screen {
    source: Arc<dyn MarketSource>,
    directory: CompanyDirectory,
    display: DisplayState,
    tx: UnboundedSender<ScreenEvent>,
    rx: UnboundedReceiver<ScreenEvent>,
    notices: UnboundedSender<Notice>,
}

impl Screen {
    /// Create a screen over the given source, returning the notice stream
    /// the embedding UI consumes (picker reloads and error modals).
    #[must_use]
    pub fn new(source: Arc<dyn MarketSource>) -> (Self, UnboundedReceiver<Notice>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let (notices, notice_rx) = mpsc::unbounded_channel();
        (
            Self {
                source,
                directory: CompanyDirectory::new(),
                display: DisplayState::default(),
                tx,
                rx,
                notices,
            },
            notice_rx,
        )
    }

    /// A handle for posting user events from other threads.
    #[must_use]
    pub fn handle(&self) -> ScreenHandle {
        ScreenHandle {
            tx: self.tx.clone(),
        }
    }

    /// The current display fields, for the environment to draw.
    #[must_use]
    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Number of picker rows (companies in the directory).
    #[must_use]
    pub fn company_count(&self) -> usize {
        self.directory.len()
    }

    /// Title for the i-th picker row. Backed by the same enumeration that
    /// selection resolves symbols against, so titles and symbols cannot skew.
    #[must_use]
    pub fn company_title(&self, index: usize) -> Option<&str> {
        self.directory.name_at(index)
    }

    /// Kick off the startup directory load.
    pub fn start(&mut self) {
        self.load_directory();
    }

    /// Convenience loop: start, then apply events as they arrive. Intended
    /// to be spawned as the presentation task; runs for the life of the
    /// screen.
    pub async fn run(mut self) {
        self.start();
        while self.tick().await {}
    }

    /// Receive and apply one event. Returns `false` once the event channel
    /// has closed.
    pub async fn tick(&mut self) -> bool {
        match self.rx.recv().await {
            Some(event) => {
                self.apply(event);
                true
            }
            None => false,
        }
    }

    /// Apply one event to the screen state.
    pub fn apply(&mut self, event: ScreenEvent) {
        match event {
            ScreenEvent::Select(index) => self.on_select(index),
            ScreenEvent::Retry(token) => self.on_retry(token),
            ScreenEvent::DirectoryLoaded(listings) => self.on_directory_loaded(listings),
            ScreenEvent::DirectoryFailed(error) => {
                tracing::warn!(%error, "directory fetch failed");
                self.report(error, RetryToken::Directory);
            }
            ScreenEvent::QuoteLoaded(quote) => self.display.show_quote(&quote),
            ScreenEvent::QuoteFailed { symbol, error } => {
                tracing::warn!(%symbol, %error, "quote fetch failed");
                self.report(error, RetryToken::Quote { symbol });
            }
            ScreenEvent::LogoLoaded(logo) => self.display.set_logo(logo),
            ScreenEvent::LogoFailed { symbol, error } => {
                tracing::warn!(%symbol, %error, "logo fetch failed");
                self.report(error, RetryToken::Quote { symbol });
            }
        }
    }

    /// Single-shot startup pipeline: fetch the tracked companies.
    fn load_directory(&mut self) {
        self.display.busy = true;
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let event = match source.company_list().await {
                Ok(listings) => ScreenEvent::DirectoryLoaded(listings),
                Err(error) => ScreenEvent::DirectoryFailed(error),
            };
            let _ = tx.send(event);
        });
    }

    /// Quote pipeline: two independent fetches for one symbol, no ordering
    /// dependency between them. In-flight fetches for other symbols are not
    /// cancelled.
    fn load_quote(&mut self, symbol: String) {
        // Reset to the loading placeholder before either fetch is issued.
        self.display.show_loading();

        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let quote_symbol = symbol.clone();
        tokio::spawn(async move {
            let event = match source.quote(&quote_symbol).await {
                Ok(quote) => ScreenEvent::QuoteLoaded(quote),
                Err(error) => ScreenEvent::QuoteFailed {
                    symbol: quote_symbol,
                    error,
                },
            };
            let _ = tx.send(event);
        });

        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let event = match source.logo(&symbol).await {
                Ok(logo) => ScreenEvent::LogoLoaded(logo),
                Err(error) => ScreenEvent::LogoFailed { symbol, error },
            };
            let _ = tx.send(event);
        });
    }

    fn on_directory_loaded(&mut self, listings: Vec<CompanyListing>) {
        self.directory.merge(listings);
        let count = self.directory.len();
        tracing::debug!(count, "directory loaded");
        let _ = self.notices.send(Notice::DirectoryReady { count });
        if let Some(symbol) = self.directory.symbol_at(0).map(str::to_string) {
            self.load_quote(symbol);
        }
    }

    fn on_select(&mut self, index: usize) {
        match self.directory.symbol_at(index).map(str::to_string) {
            Some(symbol) => self.load_quote(symbol),
            None => {
                tracing::warn!(index, count = self.directory.len(), "ignoring out-of-range selection");
            }
        }
    }

    fn on_retry(&mut self, token: RetryToken) {
        match token {
            RetryToken::Directory => self.load_directory(),
            RetryToken::Quote { symbol } => self.load_quote(symbol),
        }
    }

    fn report(&mut self, error: FetchError, token: RetryToken) {
        let _ = self.notices.send(Notice::FetchFailed(ErrorReport::new(error, token)));
    }
}
