use infocus_core::FetchError;

/// Which pipeline a retry re-enters.
///
/// A quote retry re-runs the entire `load_quote` call for its symbol — both
/// sub-fetches — even when only one of them failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryToken {
    /// Re-run the startup directory load.
    Directory,
    /// Re-run the quote pipeline for this symbol.
    Quote {
        /// Symbol whose pipeline failed.
        symbol: String,
    },
}

/// Tagged failure value emitted by the pipelines.
///
/// `retry` is present exactly when the error is transport-level: network
/// failures are assumed transient and offer a retry, decode failures are
/// assumed non-transient and offer only acknowledgment.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReport {
    /// The failure that terminated the pipeline call.
    pub error: FetchError,
    /// Token that re-enters the failed pipeline, network errors only.
    pub retry: Option<RetryToken>,
}

impl ErrorReport {
    pub(crate) fn new(error: FetchError, token: RetryToken) -> Self {
        let retry = error.is_network().then_some(token);
        Self { error, retry }
    }
}

/// Modal content for the environment to present.
///
/// The reporter is a pure consumer of an [`ErrorReport`]; it never re-enters
/// a pipeline itself. Only the user choosing a [`AlertEffect::Retry`] action
/// (routed through `ScreenHandle::retry`) does.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    /// Modal title.
    pub title: &'static str,
    /// Modal body text.
    pub message: &'static str,
    /// The single choice offered to the user.
    pub actions: Vec<AlertAction>,
}

/// One actionable choice on an alert.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertAction {
    /// Button label.
    pub label: &'static str,
    /// What choosing the action does.
    pub effect: AlertEffect,
}

/// Effect of an alert action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertEffect {
    /// Re-enter the failed pipeline via `ScreenHandle::retry`.
    Retry(RetryToken),
    /// Dismiss the modal; explicitly not a retry.
    Acknowledge,
}

impl Alert {
    /// Render the modal for a failure report.
    ///
    /// Network errors offer a lone retry action with no dismiss-without-retry
    /// option; decode errors offer a lone acknowledgment.
    #[must_use]
    pub fn from_report(report: &ErrorReport) -> Self {
        match &report.retry {
            Some(token) => Self {
                title: "Network Error",
                message: "Please, check your internet connection",
                actions: vec![AlertAction {
                    label: "Retry",
                    effect: AlertEffect::Retry(token.clone()),
                }],
            },
            None => Self {
                title: "Error",
                message: "Oops! Something went wrong. please try again later",
                actions: vec![AlertAction {
                    label: "Ok",
                    effect: AlertEffect::Acknowledge,
                }],
            },
        }
    }
}
