use std::time::Duration;

use infocus::{
    Alert, AlertEffect, ChangeColor, Emphasis, FetchError, Notice, PLACEHOLDER, RetryToken, Screen,
};
use infocus_core::{CompanyListing, Quote};
use infocus_mock::{MockBehavior, MockSource};

fn listing(name: &str, symbol: &str) -> CompanyListing {
    CompanyListing {
        company_name: name.to_string(),
        symbol: symbol.to_string(),
    }
}

fn quote(name: &str, symbol: &str, price: f64, change: f64) -> Quote {
    Quote {
        company_name: name.to_string(),
        symbol: symbol.to_string(),
        price,
        change,
    }
}

#[tokio::test]
async fn startup_loads_directory_then_first_quote() {
    let (source, _controller) = MockSource::new();
    let (mut screen, mut notices) = Screen::new(source);

    screen.start();
    assert!(screen.display().busy);

    screen.tick().await; // directory
    assert_eq!(screen.company_count(), 3);
    assert_eq!(screen.company_title(0), Some("Apple Inc."));
    assert!(matches!(
        notices.try_recv(),
        Ok(Notice::DirectoryReady { count: 3 })
    ));

    screen.tick().await; // quote and logo, in either order
    screen.tick().await;
    let display = screen.display();
    assert_eq!(display.company_name, "Apple Inc.");
    assert_eq!(display.name_weight, Emphasis::Bold);
    assert_eq!(display.symbol, "AAPL");
    assert_eq!(display.price, "190.0");
    assert_eq!(display.change, "2.0");
    assert_eq!(display.change_color, ChangeColor::Positive);
    assert!(!display.busy);
    assert!(display.logo.is_some());
}

#[tokio::test]
async fn empty_directory_reloads_the_picker_and_fetches_nothing() {
    let (source, controller) = MockSource::new();
    controller
        .set_directory_behavior(Some(MockBehavior::Return(vec![])))
        .await;

    let (mut screen, mut notices) = Screen::new(source);
    screen.start();
    screen.tick().await; // DirectoryLoaded

    assert_eq!(screen.company_count(), 0);
    assert!(matches!(
        notices.try_recv(),
        Ok(Notice::DirectoryReady { count: 0 })
    ));
    assert!(controller.quote_calls().await.is_empty());
}

#[tokio::test]
async fn selection_resolves_the_symbol_paired_with_the_title() {
    let (source, controller) = MockSource::new();
    let (mut screen, _notices) = Screen::new(source);
    let handle = screen.handle();

    screen.start();
    for _ in 0..3 {
        screen.tick().await;
    }

    handle.select(2);
    for _ in 0..3 {
        screen.tick().await;
    }

    assert_eq!(screen.company_title(2), Some("Coca-Cola"));
    assert_eq!(screen.display().symbol, "KO");
    assert_eq!(screen.display().change, "0.0");
    assert_eq!(screen.display().change_color, ChangeColor::Neutral);
    assert_eq!(controller.quote_calls().await, vec!["AAPL", "KO"]);
}

#[tokio::test]
async fn out_of_range_selection_is_ignored() {
    let (source, controller) = MockSource::new();
    let (mut screen, _notices) = Screen::new(source);
    let handle = screen.handle();

    screen.start();
    for _ in 0..3 {
        screen.tick().await;
    }
    let before = screen.display().clone();

    handle.select(99);
    screen.tick().await;

    assert_eq!(screen.display(), &before);
    assert_eq!(controller.quote_calls().await, vec!["AAPL"]);
}

#[tokio::test]
async fn single_company_payload_displays_scenario_a() {
    let (source, controller) = MockSource::new();
    controller
        .set_directory_behavior(Some(MockBehavior::Return(vec![listing(
            "Apple Inc.",
            "AAPL",
        )])))
        .await;
    controller
        .set_quote_behavior(
            "AAPL",
            MockBehavior::Return(quote("Apple Inc.", "AAPL", 150.0, -2.5)),
        )
        .await;

    let (mut screen, _notices) = Screen::new(source);
    screen.start();
    for _ in 0..3 {
        screen.tick().await;
    }

    let display = screen.display();
    assert_eq!(screen.company_count(), 1);
    assert_eq!(display.company_name, "Apple Inc.");
    assert_eq!(display.name_weight, Emphasis::Bold);
    assert_eq!(display.symbol, "AAPL");
    assert_eq!(display.price, "150.0");
    assert_eq!(display.change, "-2.5");
    assert_eq!(display.change_color, ChangeColor::Alert);
}

#[tokio::test]
async fn directory_network_failure_retries_the_identical_fetch() {
    let (source, controller) = MockSource::new();
    controller
        .set_directory_behavior(Some(MockBehavior::Fail(FetchError::network(
            "unexpected status 503",
        ))))
        .await;

    let (mut screen, mut notices) = Screen::new(source);
    let handle = screen.handle();

    screen.start();
    screen.tick().await; // DirectoryFailed

    let report = match notices.try_recv() {
        Ok(Notice::FetchFailed(report)) => report,
        other => panic!("expected a failure notice, got {other:?}"),
    };
    assert!(report.error.is_network());
    assert_eq!(report.retry, Some(RetryToken::Directory));

    let alert = Alert::from_report(&report);
    assert_eq!(alert.title, "Network Error");
    assert_eq!(alert.message, "Please, check your internet connection");
    assert_eq!(alert.actions.len(), 1);
    assert_eq!(alert.actions[0].label, "Retry");
    assert_eq!(
        alert.actions[0].effect,
        AlertEffect::Retry(RetryToken::Directory)
    );

    // Connection comes back; the user taps Retry.
    controller.set_directory_behavior(None).await;
    let AlertEffect::Retry(token) = alert.actions[0].effect.clone() else {
        unreachable!()
    };
    handle.retry(token);
    screen.tick().await; // Retry
    screen.tick().await; // DirectoryLoaded

    assert_eq!(controller.directory_calls().await, 2);
    assert_eq!(screen.company_count(), 3);
}

#[tokio::test]
async fn directory_decode_failure_offers_no_retry() {
    let (source, controller) = MockSource::new();
    controller
        .set_directory_behavior(Some(MockBehavior::Fail(FetchError::decode(
            "company list: expected an array",
        ))))
        .await;

    let (mut screen, mut notices) = Screen::new(source);
    screen.start();
    screen.tick().await;

    let report = match notices.try_recv() {
        Ok(Notice::FetchFailed(report)) => report,
        other => panic!("expected a failure notice, got {other:?}"),
    };
    assert!(report.error.is_decode());
    assert_eq!(report.retry, None);

    let alert = Alert::from_report(&report);
    assert_eq!(alert.title, "Error");
    assert_eq!(alert.actions[0].label, "Ok");
    assert_eq!(alert.actions[0].effect, AlertEffect::Acknowledge);
}

#[tokio::test]
async fn quote_decode_failure_leaves_the_placeholder_untouched() {
    let (source, controller) = MockSource::new();
    controller
        .set_quote_behavior(
            "AAPL",
            MockBehavior::Fail(FetchError::decode("quote: missing or mistyped field `change`")),
        )
        .await;

    let (mut screen, mut notices) = Screen::new(source);
    screen.start();
    for _ in 0..3 {
        screen.tick().await;
    }

    // No partial apply: the text fields still show the loading placeholder.
    let display = screen.display();
    assert_eq!(display.company_name, PLACEHOLDER);
    assert_eq!(display.symbol, PLACEHOLDER);
    assert_eq!(display.price, PLACEHOLDER);
    assert_eq!(display.change, PLACEHOLDER);
    assert!(display.busy);

    assert!(matches!(notices.try_recv(), Ok(Notice::DirectoryReady { .. })));
    let report = match notices.try_recv() {
        Ok(Notice::FetchFailed(report)) => report,
        other => panic!("expected a failure notice, got {other:?}"),
    };
    assert!(report.error.is_decode());
    assert_eq!(report.retry, None);
}

#[tokio::test]
async fn quote_network_failure_retry_reruns_both_sub_fetches() {
    let (source, controller) = MockSource::new();
    controller
        .set_quote_behavior("AAPL", MockBehavior::Fail(FetchError::network("timed out")))
        .await;

    let (mut screen, mut notices) = Screen::new(source);
    let handle = screen.handle();

    screen.start();
    for _ in 0..3 {
        screen.tick().await;
    }

    assert!(matches!(notices.try_recv(), Ok(Notice::DirectoryReady { .. })));
    let report = match notices.try_recv() {
        Ok(Notice::FetchFailed(report)) => report,
        other => panic!("expected a failure notice, got {other:?}"),
    };
    assert_eq!(
        report.retry,
        Some(RetryToken::Quote {
            symbol: "AAPL".to_string()
        })
    );

    controller
        .set_quote_behavior(
            "AAPL",
            MockBehavior::Return(quote("Apple Inc.", "AAPL", 190.0, 2.0)),
        )
        .await;
    handle.retry(report.retry.clone().unwrap());
    for _ in 0..3 {
        screen.tick().await; // Retry + both sub-fetch completions
    }

    assert_eq!(screen.display().symbol, "AAPL");
    assert_eq!(controller.quote_calls().await, vec!["AAPL", "AAPL"]);
    assert_eq!(controller.logo_calls().await, vec!["AAPL", "AAPL"]);
}

#[tokio::test]
async fn logo_failure_reports_independently_of_the_quote() {
    let (source, controller) = MockSource::new();
    controller
        .set_logo_behavior("AAPL", MockBehavior::Fail(FetchError::network("404")))
        .await;

    let (mut screen, mut notices) = Screen::new(source);
    screen.start();
    for _ in 0..3 {
        screen.tick().await;
    }

    // Quote landed even though the logo did not.
    assert_eq!(screen.display().symbol, "AAPL");
    assert_eq!(screen.display().logo, None);

    assert!(matches!(notices.try_recv(), Ok(Notice::DirectoryReady { .. })));
    let report = match notices.try_recv() {
        Ok(Notice::FetchFailed(report)) => report,
        other => panic!("expected a failure notice, got {other:?}"),
    };
    assert!(report.error.is_network());
    assert_eq!(
        report.retry,
        Some(RetryToken::Quote {
            symbol: "AAPL".to_string()
        })
    );
}

// Rapid reselection with no cancellation: the stale fetch completes after the
// fresh one and wins the display.
#[tokio::test]
async fn last_completed_fetch_wins_on_rapid_reselection() {
    let (source, controller) = MockSource::new();
    controller
        .set_quote_behavior(
            "AAPL",
            MockBehavior::ReturnAfter(
                quote("Apple Inc.", "AAPL", 190.0, 2.0),
                Duration::from_millis(80),
            ),
        )
        .await;
    controller
        .set_quote_behavior(
            "MSFT",
            MockBehavior::ReturnAfter(
                quote("Microsoft Corp", "MSFT", 420.0, -1.5),
                Duration::from_millis(10),
            ),
        )
        .await;

    let (mut screen, _notices) = Screen::new(source);
    let handle = screen.handle();

    screen.start();
    screen.tick().await; // directory; AAPL pipeline in flight
    handle.select(1); // MSFT pipeline joins it immediately

    // Select + two logos + MSFT quote + AAPL quote.
    for _ in 0..5 {
        screen.tick().await;
    }

    let display = screen.display();
    assert_eq!(display.symbol, "AAPL");
    assert_eq!(display.price, "190.0");
}
