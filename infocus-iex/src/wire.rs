use infocus_core::{CompanyListing, FetchError, Quote};
use serde_json::Value;

/// Decode the tracked-company payload: a JSON array of objects carrying at
/// least `companyName` and `symbol`. Extra fields are ignored by serde.
pub(crate) fn decode_company_list(bytes: &[u8]) -> Result<Vec<CompanyListing>, FetchError> {
    serde_json::from_slice(bytes).map_err(|e| FetchError::decode(format!("company list: {e}")))
}

/// Decode a quote payload generically.
///
/// The upstream quote object carries dozens of fields that vary by plan and
/// symbol; only four are read here, and any of them missing or wrong-typed is
/// a decode error.
pub(crate) fn decode_quote(bytes: &[u8]) -> Result<Quote, FetchError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| FetchError::decode(format!("quote: {e}")))?;
    let obj = value
        .as_object()
        .ok_or_else(|| FetchError::decode("quote: payload is not an object"))?;

    let company_name = require_str(obj, "companyName")?;
    let symbol = require_str(obj, "symbol")?;
    let price = require_number(obj, "latestPrice")?;
    let change = require_number(obj, "change")?;

    Ok(Quote {
        company_name,
        symbol,
        price,
        change,
    })
}

fn require_str(obj: &serde_json::Map<String, Value>, field: &str) -> Result<String, FetchError> {
    obj.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| missing(field))
}

fn require_number(obj: &serde_json::Map<String, Value>, field: &str) -> Result<f64, FetchError> {
    obj.get(field).and_then(Value::as_f64).ok_or_else(|| missing(field))
}

fn missing(field: &str) -> FetchError {
    FetchError::decode(format!("quote: missing or mistyped field `{field}`"))
}
