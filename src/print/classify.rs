//! Print category assignment.

use crate::model::LineItem;
use serde::{Deserialize, Serialize};

/// Print page category. Every line item belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrintCategory {
    /// Rectangular pieces, listed in a table.
    Regular,
    /// Trapezoid cuts with their schema.
    Trapezoid,
    /// Ellipse cuts.
    Ellipse,
    /// Round-diameter cuts.
    RoundDiameter,
}

impl PrintCategory {
    /// Dedicated categories in the order their pages follow the regular pages.
    pub const SPECIAL: [PrintCategory; 3] = [
        PrintCategory::Trapezoid,
        PrintCategory::Ellipse,
        PrintCategory::RoundDiameter,
    ];

    /// Page title.
    pub fn title(&self) -> &'static str {
        match self {
            PrintCategory::Regular => "Ürün Listesi",
            PrintCategory::Trapezoid => "Yamuk Kesim Şemaları",
            PrintCategory::Ellipse => "Elips Kesim Şemaları",
            PrintCategory::RoundDiameter => "Yuvarlak Çap Kesim Şemaları",
        }
    }
}

/// Assign a line item to its print category.
///
/// A positive trapezoid delta wins over the ellipse and round-diameter shapes.
pub fn classify(item: &LineItem) -> PrintCategory {
    if item.is_trapezoid() {
        PrintCategory::Trapezoid
    } else if item.is_ellipse() {
        PrintCategory::Ellipse
    } else if item.is_round_diameter() {
        PrintCategory::RoundDiameter
    } else {
        PrintCategory::Regular
    }
}

/// Items of one category, in insertion order.
pub fn items_in<'a>(items: &'a [LineItem], category: PrintCategory) -> Vec<&'a LineItem> {
    items.iter().filter(|item| classify(item) == category).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CutShape, ItemDraft, ProductSpec};
    use crate::order::Order;

    fn order_with(drafts: &[ItemDraft]) -> Order {
        let mut order = Order::default();
        for draft in drafts {
            order.add(*draft);
        }
        order
    }

    fn draft(shape: CutShape, delta: Option<f64>) -> ItemDraft {
        ItemDraft {
            product: ProductSpec::Mirror { shape },
            width: 60.0,
            height: 80.0,
            quantity: 1,
            trapezoid_delta: delta,
        }
    }

    #[test]
    fn test_categories() {
        let order = order_with(&[
            draft(CutShape::Straight, None),
            draft(CutShape::Ellipse, None),
            draft(CutShape::RoundDiameter, None),
            draft(CutShape::Straight, Some(12.0)),
        ]);
        let categories: Vec<_> = order.items().iter().map(classify).collect();
        assert_eq!(
            categories,
            vec![
                PrintCategory::Regular,
                PrintCategory::Ellipse,
                PrintCategory::RoundDiameter,
                PrintCategory::Trapezoid,
            ]
        );
    }

    #[test]
    fn test_trapezoid_wins_over_shape() {
        let order = order_with(&[
            draft(CutShape::Ellipse, Some(5.0)),
            draft(CutShape::RoundDiameter, Some(0.5)),
        ]);
        for item in order.items() {
            assert_eq!(classify(item), PrintCategory::Trapezoid);
        }
    }

    #[test]
    fn test_zero_delta_is_not_trapezoid() {
        let order = order_with(&[
            draft(CutShape::Straight, Some(0.0)),
            draft(CutShape::Ellipse, Some(0.0)),
        ]);
        assert_eq!(classify(&order.items()[0]), PrintCategory::Regular);
        assert_eq!(classify(&order.items()[1]), PrintCategory::Ellipse);
    }

    #[test]
    fn test_items_in_keeps_order() {
        let order = order_with(&[
            draft(CutShape::Ellipse, None),
            draft(CutShape::Straight, None),
            draft(CutShape::Ellipse, None),
        ]);
        let ids: Vec<_> = items_in(order.items(), PrintCategory::Ellipse)
            .iter()
            .map(|i| i.id())
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
