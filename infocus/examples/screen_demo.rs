//! Drive the screen against the mock source and print each display
//! transition. Run with `cargo run -p infocus --example screen_demo`.

use infocus::{Notice, Screen};
use infocus_mock::MockSource;

fn print_display(screen: &Screen) {
    let d = screen.display();
    let busy = if d.busy { " (loading)" } else { "" };
    println!(
        "{} [{}]  price {}  change {}  {:?}{busy}",
        d.company_name, d.symbol, d.price, d.change, d.change_color
    );
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let (source, _controller) = MockSource::new();
    let (mut screen, mut notices) = Screen::new(source);
    let handle = screen.handle();

    // Startup: directory, then the first company's quote and logo.
    screen.start();
    for _ in 0..3 {
        screen.tick().await;
    }
    if let Ok(Notice::DirectoryReady { count }) = notices.try_recv() {
        println!("{count} companies tracked");
    }
    print_display(&screen);

    // The user flips the picker to the second row.
    handle.select(1);
    for _ in 0..3 {
        screen.tick().await;
    }
    print_display(&screen);
}
