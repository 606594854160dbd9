//! JSON order drafts read by the command-line tool.

use super::Order;
use crate::error::{OrderError, Result};
use crate::model::{ItemDraft, SessionInfo};
use crate::validation::{validate_draft, ValidationResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, error, warn};

/// An order as written by hand or exported by a form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderFile {
    /// Account (cari) name.
    #[serde(default)]
    pub account: Option<String>,
    /// Customer name.
    #[serde(default)]
    pub customer: Option<String>,
    /// Line items in order.
    #[serde(default)]
    pub items: Vec<ItemDraft>,
}

impl OrderFile {
    /// Parse an order file from JSON text.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read and parse an order file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(OrderError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let file = Self::parse(&content)?;
        debug!("Loaded {} item(s) from {}", file.items.len(), path.display());
        Ok(file)
    }

    /// Validate every item draft.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::ok();
        for (idx, draft) in self.items.iter().enumerate() {
            let item_result = validate_draft(draft);
            for warning in item_result.warnings {
                result.add_warning(format!("Item {}: {}", idx + 1, warning));
            }
            for error in item_result.errors {
                result.add_error(format!("Item {}: {}", idx + 1, error));
            }
        }
        result
    }

    /// Read, parse and validate an order file.
    ///
    /// Warnings are logged. Any validation error is logged and the whole file
    /// is rejected, so no invalid draft reaches the order.
    pub fn load_validated(path: &Path) -> Result<Self> {
        let file = Self::load(path)?;
        let validation = file.validate();

        for warning in &validation.warnings {
            warn!("{}", warning);
        }
        for err in &validation.errors {
            error!("{}", err);
        }

        if !validation.passed {
            return Err(OrderError::ValidationFailed {
                errors: validation.errors,
            });
        }
        Ok(file)
    }

    /// Build an order for a session from this file.
    pub fn into_order(self, session: SessionInfo) -> Order {
        let mut order = Order::new(session);
        if let Some(account) = &self.account {
            order.customer_mut().set_account_name(account);
        }
        if let Some(customer) = &self.customer {
            order.customer_mut().set_customer_name(customer);
        }
        for draft in self.items {
            order.add(draft);
        }
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductSpec;
    use chrono::NaiveDate;

    const SAMPLE: &str = r#"{
        "customer": "mehmet",
        "items": [
            { "product": { "family": "laminated" }, "width": 100, "height": 50, "quantity": 2 },
            { "product": { "family": "mirror", "shape": "ellipse" },
              "width": 60, "height": 90, "quantity": 1 }
        ]
    }"#;

    #[test]
    fn test_parse_sample() {
        let file = OrderFile::parse(SAMPLE).unwrap();
        assert_eq!(file.items.len(), 2);
        assert_eq!(file.items[0].product, ProductSpec::Laminated);
        assert_eq!(file.account, None);
        assert!(file.validate().passed);
    }

    #[test]
    fn test_into_order() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let order = OrderFile::parse(SAMPLE)
            .unwrap()
            .into_order(SessionInfo::from_parts(date, 2000));
        assert_eq!(order.len(), 2);
        assert_eq!(order.header().customer_name, "MEHMET");
        assert_eq!(order.items()[1].label, "4MM AYNA - ELİPS");
    }

    #[test]
    fn test_invalid_json() {
        let err = OrderFile::parse("{ not json").unwrap_err();
        assert!(matches!(err, OrderError::Json(_)));
    }

    #[test]
    fn test_zero_quantity_fails_validation() {
        let file = OrderFile::parse(
            r#"{ "items": [ { "product": { "family": "laminated" }, "width": 10, "height": 10, "quantity": 0 } ] }"#,
        )
        .unwrap();
        assert!(!file.validate().passed);
    }

    #[test]
    fn test_load_validated_rejects_bad_drafts() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            br#"{ "items": [ { "product": { "family": "laminated" }, "width": -100, "height": 50, "quantity": 0 } ] }"#,
        )
        .unwrap();

        let err = OrderFile::load_validated(file.path()).unwrap_err();
        assert_eq!(err.code_value(), 102);
        match err {
            OrderError::ValidationFailed { errors } => {
                assert_eq!(errors.len(), 2);
                assert!(errors.iter().all(|e| e.starts_with("Item 1")));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = OrderFile::load(Path::new("/nonexistent/order.json")).unwrap_err();
        assert!(matches!(err, OrderError::FileNotFound { .. }));
    }
}
