use infocus_core::{CompanyListing, Logo, Quote};

pub fn companies() -> Vec<CompanyListing> {
    [
        ("Apple Inc.", "AAPL"),
        ("Microsoft Corp", "MSFT"),
        ("Coca-Cola", "KO"),
    ]
    .into_iter()
    .map(|(name, symbol)| CompanyListing {
        company_name: name.to_string(),
        symbol: symbol.to_string(),
    })
    .collect()
}

// One fixture per change sign so presenter tests cover all three colors.
pub fn quote_by_symbol(symbol: &str) -> Option<Quote> {
    match symbol {
        "AAPL" => Some(q("Apple Inc.", "AAPL", 190.0, 2.0)),
        "MSFT" => Some(q("Microsoft Corp", "MSFT", 420.0, -1.5)),
        "KO" => Some(q("Coca-Cola", "KO", 60.0, 0.0)),
        _ => None,
    }
}

pub fn logo_by_symbol(symbol: &str) -> Option<Logo> {
    match symbol {
        "AAPL" | "MSFT" | "KO" => Some(Logo::new(vec![
            0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a,
        ])),
        _ => None,
    }
}

fn q(name: &str, symbol: &str, price: f64, change: f64) -> Quote {
    Quote {
        company_name: name.to_string(),
        symbol: symbol.to_string(),
        price,
        change,
    }
}
