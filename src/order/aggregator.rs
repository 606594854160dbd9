//! The order: line-item collection, customer header and derived totals.

use crate::area::billable_area;
use crate::codec::{decode, encode, DecodedLabel};
use crate::config::PrintConfig;
use crate::error::{OrderError, Result};
use crate::model::{
    BulkUpdatePayload, CustomerInfo, ItemDraft, ItemId, LineItem, OrderHeader, Selection,
    SessionInfo,
};
use crate::print::{paginate, PrintPlan};
use serde::Serialize;
use tracing::debug;

/// Totals over the whole order, independent of print categories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrderTotals {
    /// Sum of quantities.
    pub quantity: u64,
    /// Sum of billable area times quantity, in square meters.
    pub area: f64,
}

/// An order being composed.
///
/// Line items are only created or changed through [`Order::add`],
/// [`Order::update`] and [`Order::bulk_update`]; these are the only places
/// that encode labels and compute billable areas.
#[derive(Debug, Clone)]
pub struct Order {
    session: SessionInfo,
    customer: CustomerInfo,
    items: Vec<LineItem>,
    next_id: ItemId,
}

impl Default for Order {
    fn default() -> Self {
        Self::new(SessionInfo::generate())
    }
}

impl Order {
    /// Create an empty order for a session.
    pub fn new(session: SessionInfo) -> Self {
        Self {
            session,
            customer: CustomerInfo::default(),
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Find a line item by id.
    pub fn get(&self, id: ItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Number of line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the order has no line items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Session identity.
    pub fn session(&self) -> &SessionInfo {
        &self.session
    }

    /// Customer names.
    pub fn customer(&self) -> &CustomerInfo {
        &self.customer
    }

    /// Mutable customer names.
    pub fn customer_mut(&mut self) -> &mut CustomerInfo {
        &mut self.customer
    }

    /// Current header, built from the session and the latest customer names.
    pub fn header(&self) -> OrderHeader {
        OrderHeader::new(&self.session, &self.customer)
    }

    /// Add a line item and return its id.
    pub fn add(&mut self, draft: ItemDraft) -> ItemId {
        let id = self.next_id;
        self.next_id += 1;

        let item = build_item(id, &draft);
        debug!(
            "Added item {}: {} {} x{}",
            id,
            item.label,
            item.dimensions_string(),
            item.quantity
        );
        self.items.push(item);
        id
    }

    /// Replace every field of an existing line item, keeping its id and position.
    pub fn update(&mut self, id: ItemId, draft: ItemDraft) -> Result<()> {
        let slot = self
            .items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or(OrderError::ItemNotFound { id })?;

        *slot = build_item(id, &draft);
        debug!("Updated item {}: {}", id, slot.label);
        Ok(())
    }

    /// Remove a line item.
    pub fn remove(&mut self, id: ItemId) -> Result<LineItem> {
        let idx = self
            .items
            .iter()
            .position(|item| item.id() == id)
            .ok_or(OrderError::ItemNotFound { id })?;

        debug!("Removed item {}", id);
        Ok(self.items.remove(idx))
    }

    /// Apply one set of category fields to every line item.
    ///
    /// Label, cut shape and hole are replaced and any trapezoid delta is
    /// cleared. Dimensions, quantity, area and id are left as they are.
    /// Returns the number of items changed.
    pub fn bulk_update(&mut self, payload: &BulkUpdatePayload) -> usize {
        for item in &mut self.items {
            item.label = payload.label.clone();
            item.cut_shape = payload.cut_shape;
            item.hole = payload.hole;
            item.trapezoid_delta = None;
        }
        debug!("Bulk updated {} item(s) to {}", self.items.len(), payload.label);
        self.items.len()
    }

    /// Load an item's label into the editor selection.
    ///
    /// Returns the decode report so dropped segments are visible to the caller.
    pub fn load_for_edit(&self, id: ItemId, selection: &mut Selection) -> Result<DecodedLabel> {
        let item = self.get(id).ok_or(OrderError::ItemNotFound { id })?;
        let decoded = decode(&item.label);
        selection.apply(&decoded);
        Ok(decoded)
    }

    /// Sum of quantities.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| item.quantity as u64).sum()
    }

    /// Sum of billable area times quantity.
    pub fn total_area(&self) -> f64 {
        self.items.iter().map(LineItem::total_area).sum()
    }

    /// Both totals.
    pub fn totals(&self) -> OrderTotals {
        OrderTotals {
            quantity: self.total_quantity(),
            area: self.total_area(),
        }
    }

    /// Page plan for the current items.
    pub fn print_plan(&self, config: &PrintConfig) -> PrintPlan<'_> {
        paginate(&self.items, config)
    }
}

fn build_item(id: ItemId, draft: &ItemDraft) -> LineItem {
    let label = encode(&draft.product);
    let area = billable_area(draft.width, draft.height);
    LineItem::new(id, label, draft, area)
}
