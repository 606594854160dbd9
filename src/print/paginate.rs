//! Page planning for printed orders.
//!
//! Page order is fixed: regular pages first, then one page each for the
//! trapezoid, ellipse and round-diameter categories when they have items.
//! An empty order still prints a single empty regular page.

use super::classify::{classify, PrintCategory};
use crate::config::PrintConfig;
use crate::model::LineItem;
use serde::Serialize;
use tracing::debug;

/// One printed page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintPage<'a> {
    /// Category shown on this page.
    pub category: PrintCategory,
    /// Items on this page, in insertion order.
    pub items: Vec<&'a LineItem>,
    /// 1-based page number.
    pub page_number: usize,
    /// Total number of pages in the plan.
    pub total_pages: usize,
    /// Only the last page carries the grand totals.
    pub is_last_page: bool,
}

/// Ordered list of pages for an order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintPlan<'a> {
    pub pages: Vec<PrintPage<'a>>,
}

impl<'a> PrintPlan<'a> {
    /// Number of pages.
    pub fn total_pages(&self) -> usize {
        self.pages.len()
    }

    /// Number of regular pages.
    pub fn regular_page_count(&self) -> usize {
        self.pages
            .iter()
            .filter(|p| p.category == PrintCategory::Regular)
            .count()
    }

    /// The dedicated page of a non-regular category, if present.
    pub fn page_for(&self, category: PrintCategory) -> Option<&PrintPage<'a>> {
        self.pages.iter().find(|p| p.category == category)
    }

    /// The page that carries the grand totals.
    pub fn last_page(&self) -> Option<&PrintPage<'a>> {
        self.pages.last()
    }
}

/// Build the page plan for `items`.
pub fn paginate<'a>(items: &'a [LineItem], config: &PrintConfig) -> PrintPlan<'a> {
    let mut regular = Vec::new();
    let mut special: [Vec<&'a LineItem>; 3] = Default::default();

    for item in items {
        match classify(item) {
            PrintCategory::Regular => regular.push(item),
            PrintCategory::Trapezoid => special[0].push(item),
            PrintCategory::Ellipse => special[1].push(item),
            PrintCategory::RoundDiameter => special[2].push(item),
        }
    }

    let mut groups: Vec<(PrintCategory, Vec<&'a LineItem>)> = regular
        .chunks(config.page_capacity())
        .map(|chunk| (PrintCategory::Regular, chunk.to_vec()))
        .collect();

    if items.is_empty() {
        groups.push((PrintCategory::Regular, Vec::new()));
    }

    for (category, group) in PrintCategory::SPECIAL.into_iter().zip(special) {
        if !group.is_empty() {
            groups.push((category, group));
        }
    }

    let total_pages = groups.len();
    let pages: Vec<PrintPage<'a>> = groups
        .into_iter()
        .enumerate()
        .map(|(idx, (category, page_items))| PrintPage {
            category,
            items: page_items,
            page_number: idx + 1,
            total_pages,
            is_last_page: idx + 1 == total_pages,
        })
        .collect();

    debug!(
        "Planned {} page(s) for {} item(s), {} per regular page",
        total_pages,
        items.len(),
        config.page_capacity()
    );

    PrintPlan { pages }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CutShape, ItemDraft, ProductSpec};
    use crate::order::Order;
    use pretty_assertions::assert_eq;

    fn add(order: &mut Order, shape: CutShape, delta: Option<f64>, n: usize) {
        for _ in 0..n {
            order.add(ItemDraft {
                product: ProductSpec::SinglePane {
                    thickness: Default::default(),
                    shape,
                },
                width: 100.0,
                height: 100.0,
                quantity: 1,
                trapezoid_delta: delta,
            });
        }
    }

    fn sizes(plan: &PrintPlan) -> Vec<(PrintCategory, usize)> {
        plan.pages
            .iter()
            .map(|p| (p.category, p.items.len()))
            .collect()
    }

    #[test]
    fn test_45_regular_items() {
        let mut order = Order::default();
        add(&mut order, CutShape::Straight, None, 45);
        let plan = paginate(order.items(), &PrintConfig::default());
        assert_eq!(
            sizes(&plan),
            vec![
                (PrintCategory::Regular, 20),
                (PrintCategory::Regular, 20),
                (PrintCategory::Regular, 5),
            ]
        );
        let last: Vec<bool> = plan.pages.iter().map(|p| p.is_last_page).collect();
        assert_eq!(last, vec![false, false, true]);
        assert!(plan.pages.iter().all(|p| p.total_pages == 3));
    }

    #[test]
    fn test_empty_order_has_one_page() {
        let plan = paginate(&[], &PrintConfig::default());
        assert_eq!(plan.total_pages(), 1);
        let page = &plan.pages[0];
        assert_eq!(page.category, PrintCategory::Regular);
        assert!(page.items.is_empty());
        assert_eq!(page.page_number, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.is_last_page);
    }

    #[test]
    fn test_special_pages_follow_regular_pages() {
        let mut order = Order::default();
        add(&mut order, CutShape::RoundDiameter, None, 2);
        add(&mut order, CutShape::Straight, None, 21);
        add(&mut order, CutShape::Ellipse, None, 1);
        add(&mut order, CutShape::Straight, Some(10.0), 3);

        let plan = paginate(order.items(), &PrintConfig::default());
        assert_eq!(
            sizes(&plan),
            vec![
                (PrintCategory::Regular, 20),
                (PrintCategory::Regular, 1),
                (PrintCategory::Trapezoid, 3),
                (PrintCategory::Ellipse, 1),
                (PrintCategory::RoundDiameter, 2),
            ]
        );
        let numbers: Vec<usize> = plan.pages.iter().map(|p| p.page_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
        assert_eq!(plan.last_page().map(|p| p.category), Some(PrintCategory::RoundDiameter));
        assert_eq!(plan.pages.iter().filter(|p| p.is_last_page).count(), 1);
    }

    #[test]
    fn test_only_special_items_has_no_regular_page() {
        let mut order = Order::default();
        add(&mut order, CutShape::Ellipse, None, 4);
        let plan = paginate(order.items(), &PrintConfig::default());
        assert_eq!(sizes(&plan), vec![(PrintCategory::Ellipse, 4)]);
        assert_eq!(plan.regular_page_count(), 0);
        assert!(plan.pages[0].is_last_page);
    }

    #[test]
    fn test_custom_capacity_and_insertion_order() {
        let mut order = Order::default();
        add(&mut order, CutShape::Straight, None, 7);
        let plan = paginate(order.items(), &PrintConfig::new(3));
        assert_eq!(plan.regular_page_count(), 3);
        let ids: Vec<u64> = plan
            .pages
            .iter()
            .flat_map(|p| p.items.iter().map(|i| i.id()))
            .collect();
        assert_eq!(ids, (1..=7).collect::<Vec<u64>>());
    }

    #[test]
    fn test_page_for_category() {
        let mut order = Order::default();
        add(&mut order, CutShape::Straight, Some(4.0), 1);
        let plan = paginate(order.items(), &PrintConfig::default());
        assert!(plan.page_for(PrintCategory::Trapezoid).is_some());
        assert!(plan.page_for(PrintCategory::Ellipse).is_none());
    }
}
