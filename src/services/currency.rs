//! Currency service
//!
//! Selects the display symbol and formats amounts with it. Selecting a
//! currency never converts stored amounts, and any symbol is accepted.

use tracing::debug;

use crate::models::{currency_name, Money, CURRENCIES};
use crate::storage::Storage;

pub struct CurrencyService<'a> {
    storage: &'a mut Storage,
}

impl<'a> CurrencyService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// The currently selected symbol
    pub fn symbol(&self) -> &str {
        &self.storage.state().currency_symbol
    }

    /// Known currencies as (name, symbol) pairs
    pub fn available(&self) -> &'static [(&'static str, &'static str)] {
        CURRENCIES
    }

    /// Human-readable name of the selection, if it is a known currency
    pub fn current_name(&self) -> Option<&'static str> {
        currency_name(self.symbol())
    }

    /// Replace the selected symbol and persist
    pub fn select(&mut self, symbol: &str) {
        self.storage.state_mut().currency_symbol = symbol.to_string();
        self.storage.persist();
        debug!(symbol, "Selected currency");
    }

    /// Render an amount with the selected symbol, e.g. `€1234.50`
    pub fn format(&self, amount: Money) -> String {
        amount.format_with_symbol(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::rc::Rc;

    #[test]
    fn test_default_symbol() {
        let mut storage = Storage::open(MemoryStore::new());
        let service = CurrencyService::new(&mut storage);

        assert_eq!(service.symbol(), "$");
        assert_eq!(service.current_name(), Some("USD ($)"));
        assert_eq!(service.available().len(), 5);
    }

    #[test]
    fn test_select_and_format() {
        let store = Rc::new(MemoryStore::new());
        let mut storage = Storage::open(Rc::clone(&store));
        let mut service = CurrencyService::new(&mut storage);

        service.select("€");
        assert_eq!(service.format(Money::from_cents(123450)), "€1234.50");
        assert_eq!(service.format(Money::from_cents(-1234)), "€-12.34");
        assert_eq!(store.saved().unwrap().currency_symbol, "€");
    }

    #[test]
    fn test_custom_symbol_accepted() {
        let mut storage = Storage::open(MemoryStore::new());
        let mut service = CurrencyService::new(&mut storage);

        service.select("CHF ");
        assert_eq!(service.symbol(), "CHF ");
        assert_eq!(service.current_name(), None);
        assert_eq!(service.format(Money::from_cents(5)), "CHF 0.05");
    }
}
