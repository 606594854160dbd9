//! Caller-side input validation.
//!
//! The core assumes positive numeric dimensions; form input is checked here
//! before it reaches [`Order::add`](crate::order::Order::add).

use crate::error::{OrderError, Result};
use crate::model::{ItemDraft, ProductSpec};
use crate::order::Order;
use serde::{Deserialize, Serialize};

/// Raw form input for one line item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawItemInput {
    pub product: ProductSpec,
    pub width: String,
    pub height: String,
    pub quantity: String,
    #[serde(default)]
    pub trapezoid_delta: String,
}

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }
}

/// Parse a positive dimension in centimeters.
pub fn parse_dimension(field: &str, value: &str) -> Result<f64> {
    let parsed = value
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| OrderError::InvalidNumber {
            field: field.to_string(),
            value: value.to_string(),
        })?;

    if !parsed.is_finite() || parsed <= 0.0 {
        return Err(OrderError::NonPositive {
            field: field.to_string(),
            value: parsed,
        });
    }

    Ok(parsed)
}

/// Parse a positive piece count.
pub fn parse_quantity(value: &str) -> Result<u32> {
    let parsed = value.trim().parse::<i64>().map_err(|_| OrderError::InvalidNumber {
        field: "quantity".to_string(),
        value: value.to_string(),
    })?;

    if parsed <= 0 {
        return Err(OrderError::NonPositive {
            field: "quantity".to_string(),
            value: parsed as f64,
        });
    }

    u32::try_from(parsed).map_err(|_| OrderError::InvalidNumber {
        field: "quantity".to_string(),
        value: value.to_string(),
    })
}

/// Parse the optional trapezoid delta. Blank, unparsable or non-positive input means none.
pub fn parse_trapezoid_delta(value: &str) -> Option<f64> {
    value
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|d| d.is_finite() && *d > 0.0)
}

/// Turn raw form input into a validated draft.
pub fn parse_item_input(input: &RawItemInput) -> Result<ItemDraft> {
    Ok(ItemDraft {
        product: input.product,
        width: parse_dimension("width", &input.width)?,
        height: parse_dimension("height", &input.height)?,
        quantity: parse_quantity(&input.quantity)?,
        trapezoid_delta: parse_trapezoid_delta(&input.trapezoid_delta),
    })
}

/// Check a draft that did not come through [`parse_item_input`].
pub fn validate_draft(draft: &ItemDraft) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if !(draft.width > 0.0 && draft.height > 0.0) {
        result.add_error(format!(
            "Invalid dimensions ({} x {})",
            draft.width, draft.height
        ));
    }
    if draft.quantity == 0 {
        result.add_error("Quantity must be at least 1");
    }
    if let Some(delta) = draft.trapezoid_delta {
        if delta >= draft.width && delta > 0.0 {
            result.add_warning(format!(
                "Trapezoid delta {} cm is not smaller than width {} cm",
                delta, draft.width
            ));
        }
    }

    result
}

/// Report order-level warnings.
pub fn validate_order(order: &Order) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for (idx, item) in order.items().iter().enumerate() {
        if item.below_minimum_area() {
            result.add_warning(format!(
                "Item {} ({} cm): billed at the minimum area",
                idx + 1,
                item.dimensions_string()
            ));
        }
        if let Some(delta) = item.trapezoid_delta {
            if delta >= item.width && delta > 0.0 {
                result.add_warning(format!(
                    "Item {}: trapezoid delta {} cm is not smaller than width {} cm",
                    idx + 1,
                    delta,
                    item.width
                ));
            }
        }
    }

    result
}
