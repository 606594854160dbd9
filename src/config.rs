//! Configuration constants and settings for order composition and printing.

use serde::{Deserialize, Serialize};

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Minimum billable area per piece in square meters.
pub const MIN_BILLABLE_AREA_M2: f64 = 0.25;

/// Decimal places kept for billable area.
pub const AREA_DECIMALS: i32 = 3;

/// Centimeters per meter.
pub const CM_PER_M: f64 = 100.0;

/// Regular line items printed per A4 page.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Company name printed in the page header.
pub const COMPANY_NAME: &str = "DİNÇ CAM";

/// Tagline printed under the company name.
pub const COMPANY_TAGLINE: &str = "CAM | AYNA | LAMİNE";

/// Fixed origin address of every order.
pub const ORIGIN_ADDRESS: &str = "Keşan/EDİRNE";

/// Prefix of generated order numbers.
pub const ORDER_NUMBER_PREFIX: &str = "DNC";

/// Shown in place of an empty customer or account name.
pub const DEFAULT_DISPLAY_NAME: &str = "STANDART";

/// Print layout configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintConfig {
    /// Capacity of one regular page.
    pub items_per_page: usize,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

impl PrintConfig {
    /// Create a print configuration with the given page capacity.
    pub fn new(items_per_page: usize) -> Self {
        Self { items_per_page }
    }

    /// Page capacity actually used for splitting (never zero).
    pub fn page_capacity(&self) -> usize {
        self.items_per_page.max(1)
    }
}

/// Utility functions for floating-point handling.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Round half away from zero to the given number of decimals.
    #[inline]
    pub fn round_to(value: f64, decimals: i32) -> f64 {
        let factor = 10f64.powi(decimals);
        (value * factor).round() / factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_print_config() {
        assert_eq!(PrintConfig::default().items_per_page, 20);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        assert_eq!(PrintConfig::new(0).page_capacity(), 1);
        assert_eq!(PrintConfig::new(5).page_capacity(), 5);
    }

    #[test]
    fn test_round_to() {
        assert!(float_cmp::approx_eq(float_cmp::round_to(0.12345, 3), 0.123));
        assert!(float_cmp::approx_eq(float_cmp::round_to(1.2346, 3), 1.235));
        assert!(float_cmp::approx_eq(float_cmp::round_to(0.5, 0), 1.0));
    }
}
