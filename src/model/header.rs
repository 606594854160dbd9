//! Order header shown at the top of every printed page.

use crate::codec::to_upper_tr;
use crate::config::{DEFAULT_DISPLAY_NAME, ORDER_NUMBER_PREFIX, ORIGIN_ADDRESS};
use chrono::{Datelike, Local, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Session-wide order identity, generated once at start-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    /// Order number (e.g. "DNC-20264821").
    pub order_number: String,
    /// Order date as DD/MM/YYYY.
    pub date: String,
    /// Origin address.
    pub address: String,
}

impl SessionInfo {
    /// Generate a session from the local date and a random 4-digit suffix.
    pub fn generate() -> Self {
        let suffix = rand::rng().random_range(1000..=9999);
        Self::from_parts(Local::now().date_naive(), suffix)
    }

    /// Build a session from a fixed date and order-number suffix.
    pub fn from_parts(date: NaiveDate, suffix: u16) -> Self {
        Self {
            order_number: format!("{}-{}{}", ORDER_NUMBER_PREFIX, date.year(), suffix),
            date: date.format("%d/%m/%Y").to_string(),
            address: ORIGIN_ADDRESS.to_string(),
        }
    }
}

/// Customer names, editable at any time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    /// Account (cari) name.
    pub account_name: String,
    /// Customer name.
    pub customer_name: String,
}

impl CustomerInfo {
    /// Set the account name, uppercased.
    pub fn set_account_name(&mut self, name: &str) {
        self.account_name = to_upper_tr(name);
    }

    /// Set the customer name, uppercased.
    pub fn set_customer_name(&mut self, name: &str) {
        self.customer_name = to_upper_tr(name);
    }
}

/// Header of a printed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderHeader {
    pub order_number: String,
    pub date: String,
    pub address: String,
    pub account_name: String,
    pub customer_name: String,
}

impl OrderHeader {
    /// Combine session identity with the current customer names.
    pub fn new(session: &SessionInfo, customer: &CustomerInfo) -> Self {
        Self {
            order_number: session.order_number.clone(),
            date: session.date.clone(),
            address: session.address.clone(),
            account_name: customer.account_name.clone(),
            customer_name: customer.customer_name.clone(),
        }
    }

    /// Account name for display, falling back to the placeholder.
    pub fn account_display(&self) -> &str {
        display_or_default(&self.account_name)
    }

    /// Customer name for display, falling back to the placeholder.
    pub fn customer_display(&self) -> &str {
        display_or_default(&self.customer_name)
    }
}

fn display_or_default(name: &str) -> &str {
    if name.trim().is_empty() {
        DEFAULT_DISPLAY_NAME
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_from_parts() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        let session = SessionInfo::from_parts(date, 4821);
        assert_eq!(session.order_number, "DNC-20264821");
        assert_eq!(session.date, "07/03/2026");
        assert_eq!(session.address, "Keşan/EDİRNE");
    }

    #[test]
    fn test_generated_order_number_shape() {
        let session = SessionInfo::generate();
        let digits = session.order_number.strip_prefix("DNC-").unwrap();
        assert_eq!(digits.len(), 8);
        let suffix: u16 = digits[4..].parse().unwrap();
        assert!((1000..=9999).contains(&suffix));
    }

    #[test]
    fn test_customer_names_uppercased_in_turkish() {
        let mut customer = CustomerInfo::default();
        customer.set_customer_name("ali yılmaz");
        customer.set_account_name("inşaat");
        assert_eq!(customer.customer_name, "ALİ YILMAZ");
        assert_eq!(customer.account_name, "İNŞAAT");
    }

    #[test]
    fn test_empty_names_display_placeholder() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let header = OrderHeader::new(&SessionInfo::from_parts(date, 1000), &CustomerInfo::default());
        assert_eq!(header.account_display(), "STANDART");
        assert_eq!(header.customer_display(), "STANDART");
    }
}
