//! Display currency table
//!
//! A currency here is only the glyph printed in front of amounts. Stored
//! values are never converted.

/// Symbol used when nothing has been selected
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Human-readable currency names and their display symbols, in menu order
pub const CURRENCIES: &[(&str, &str)] = &[
    ("USD ($)", "$"),
    ("EUR (€)", "€"),
    ("GBP (£)", "£"),
    ("INR (₹)", "₹"),
    ("JPY (¥)", "¥"),
];

/// Look up the human-readable name for a symbol, if it is a known one
pub fn currency_name(symbol: &str) -> Option<&'static str> {
    CURRENCIES
        .iter()
        .find(|(_, s)| *s == symbol)
        .map(|(name, _)| *name)
}

pub(crate) fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(currency_name("€"), Some("EUR (€)"));
        assert_eq!(currency_name("CHF"), None);
        assert_eq!(CURRENCIES.len(), 5);
    }
}
