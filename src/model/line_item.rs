//! Order line item definition.

use super::attributes::{CutShape, HoleSpec};
use super::product::ProductSpec;
use crate::area::BillableArea;
use serde::{Deserialize, Serialize};

/// Stable identifier of a line item within an order.
pub type ItemId = u64;

/// Form input for a new or updated line item, already validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    /// Product family and options.
    pub product: ProductSpec,
    /// Width in centimeters.
    pub width: f64,
    /// Height in centimeters.
    pub height: f64,
    /// Number of pieces.
    pub quantity: u32,
    /// Difference between bottom and top edge for trapezoid cuts, in centimeters.
    #[serde(default)]
    pub trapezoid_delta: Option<f64>,
}

/// One line of an order.
///
/// `area` and `below_minimum_area` are computed once when the item is
/// created or updated and are never written anywhere else.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    id: ItemId,
    /// Canonical label describing the product.
    pub label: String,
    /// Width in centimeters.
    pub width: f64,
    /// Height in centimeters.
    pub height: f64,
    /// Number of pieces.
    pub quantity: u32,
    /// Trapezoid delta in centimeters.
    pub trapezoid_delta: Option<f64>,
    /// Cut outline (ellipse / round diameter / straight).
    pub cut_shape: CutShape,
    /// Hole specification (insulated glazing only).
    pub hole: Option<HoleSpec>,
    area: f64,
    below_minimum_area: bool,
}

impl LineItem {
    pub(crate) fn new(id: ItemId, label: String, draft: &ItemDraft, area: BillableArea) -> Self {
        Self {
            id,
            label,
            width: draft.width,
            height: draft.height,
            quantity: draft.quantity,
            trapezoid_delta: draft.trapezoid_delta,
            cut_shape: draft.product.cut_shape(),
            hole: draft.product.hole(),
            area: area.area,
            below_minimum_area: area.below_minimum,
        }
    }

    /// Item identifier.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Billable area of one piece in square meters.
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Whether the piece was billed at the minimum area.
    pub fn below_minimum_area(&self) -> bool {
        self.below_minimum_area
    }

    /// Billable area of the whole line (area times quantity).
    pub fn total_area(&self) -> f64 {
        self.area * self.quantity as f64
    }

    /// Check if this item is cut as a trapezoid.
    pub fn is_trapezoid(&self) -> bool {
        self.trapezoid_delta.is_some_and(|d| d > 0.0)
    }

    /// Check if this item is cut as an ellipse.
    pub fn is_ellipse(&self) -> bool {
        self.cut_shape.is_ellipse()
    }

    /// Check if this item is cut to a round diameter.
    pub fn is_round_diameter(&self) -> bool {
        self.cut_shape.is_round_diameter()
    }

    /// Get display dimensions (width x height).
    pub fn dimensions_string(&self) -> String {
        format!("{} x {}", self.width, self.height)
    }
}

/// Category fields applied to every item at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkUpdatePayload {
    /// Canonical label.
    pub label: String,
    /// Cut outline.
    pub cut_shape: CutShape,
    /// Hole specification.
    pub hole: Option<HoleSpec>,
}

impl BulkUpdatePayload {
    /// Build a payload from the currently selected product.
    pub fn from_spec(spec: &ProductSpec) -> Self {
        Self {
            label: crate::codec::encode(spec),
            cut_shape: spec.cut_shape(),
            hole: spec.hole(),
        }
    }
}
