use infocus_core::{Logo, Quote};

/// Marker shown in every text field while a quote fetch is in flight.
pub const PLACEHOLDER: &str = "-";

/// Weight of the company-name field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// Normal weight, used for the loading placeholder.
    Regular,
    /// Bold weight, used once a quote is displayed.
    Bold,
}

/// Color of the price-change field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeColor {
    /// Negative change.
    Alert,
    /// Exactly zero change.
    Neutral,
    /// Positive change.
    Positive,
}

/// The passive display fields of the screen.
///
/// This is pure UI state: the environment reads it to draw, nothing here
/// performs rendering. The two transitions (`show_loading`, `show_quote`)
/// assume validated input and cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    /// Company display name.
    pub company_name: String,
    /// Weight applied to the company-name field.
    pub name_weight: Emphasis,
    /// Ticker symbol.
    pub symbol: String,
    /// Rendered latest price.
    pub price: String,
    /// Rendered price change.
    pub change: String,
    /// Color applied to the price-change field.
    pub change_color: ChangeColor,
    /// Whether the busy indicator is active.
    pub busy: bool,
    /// Logo slot; `None` renders blank.
    pub logo: Option<Logo>,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            company_name: PLACEHOLDER.to_string(),
            name_weight: Emphasis::Regular,
            symbol: PLACEHOLDER.to_string(),
            price: PLACEHOLDER.to_string(),
            change: PLACEHOLDER.to_string(),
            change_color: ChangeColor::Neutral,
            busy: false,
            logo: None,
        }
    }
}

impl DisplayState {
    /// Reset every field to the loading placeholder and activate the busy
    /// indicator. Fully overwrites any previously displayed quote, so calling
    /// it twice in a row is a no-op.
    pub fn show_loading(&mut self) {
        self.company_name = PLACEHOLDER.to_string();
        self.name_weight = Emphasis::Regular;
        self.symbol = PLACEHOLDER.to_string();
        self.price = PLACEHOLDER.to_string();
        self.change = PLACEHOLDER.to_string();
        self.change_color = ChangeColor::Neutral;
        self.logo = None;
        self.busy = true;
    }

    /// Render a decoded quote into the text fields and deactivate the busy
    /// indicator. The logo slot is a separate side channel and is left
    /// untouched.
    pub fn show_quote(&mut self, quote: &Quote) {
        self.busy = false;
        self.company_name = quote.company_name.clone();
        self.name_weight = Emphasis::Bold;
        self.symbol = quote.symbol.clone();
        self.price = render_decimal(quote.price);
        self.change = render_decimal(quote.change);
        self.change_color = change_color(quote.change);
    }

    /// Assign the logo slot. Idempotent overwrite; may land before or after
    /// the text fields for the same symbol.
    pub fn set_logo(&mut self, logo: Logo) {
        self.logo = Some(logo);
    }
}

/// Exhaustive three-way partition on the sign of the change. Zero is
/// strictly neutral, not folded into either branch.
#[must_use]
pub fn change_color(change: f64) -> ChangeColor {
    if change < 0.0 {
        ChangeColor::Alert
    } else if change == 0.0 {
        ChangeColor::Neutral
    } else {
        ChangeColor::Positive
    }
}

// Whole values keep one fractional digit ("150.0"), everything else uses the
// shortest float form ("-2.5", "60.37").
fn render_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
