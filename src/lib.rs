//! glass-order-rs - Order composition and print pagination for cut-glass orders.
//!
//! An order is a list of line items (insulated glazing, single pane, mirror,
//! laminated) with dimensions and quantities. Each item carries a canonical
//! label, a billable area with a 0.25 m² floor, and a print category. The
//! order is printed as A4 pages: regular items in tables of 20, followed by
//! one page each for trapezoid, ellipse and round-diameter cuts.
//!
//! # Example
//!
//! ```no_run
//! use glass_order_rs::{encode, ItemDraft, Order, PrintConfig, ProductSpec};
//!
//! let mut order = Order::default();
//! order.add(ItemDraft {
//!     product: ProductSpec::Laminated,
//!     width: 100.0,
//!     height: 50.0,
//!     quantity: 2,
//!     trapezoid_delta: None,
//! });
//! let plan = order.print_plan(&PrintConfig::default());
//! println!("{} page(s), {:.2} m²", plan.total_pages(), order.total_area());
//! assert_eq!(encode(&ProductSpec::Laminated), "4+4 LAMİNE CAM");
//! ```

pub mod area;
pub mod codec;
pub mod config;
pub mod error;
pub mod model;
pub mod order;
pub mod print;
pub mod validation;

// Re-exports for convenience
pub use area::{billable_area, BillableArea};
pub use codec::{decode, encode, DecodedLabel};
pub use config::PrintConfig;
pub use error::{OrderError, Result};
pub use model::{
    BulkUpdatePayload, Composition, CutShape, Family, Finish, GlassType, HoleSpec, ItemDraft,
    ItemId, LineItem, OrderHeader, PaneThickness, Pattern, ProductSpec, Selection, SessionInfo,
};
pub use order::{Order, OrderFile, OrderTotals};
pub use print::{classify, paginate, render_plan, PrintCategory, PrintPage, PrintPlan};
pub use validation::{parse_item_input, validate_order, RawItemInput, ValidationResult};

/// Render an order file as plain-text pages.
///
/// This is the high-level pipeline used by the command-line tool:
/// 1. Load and validate the order file
/// 2. Build the order (labels, billable areas)
/// 3. Plan the pages
/// 4. Render every page
pub fn render_order_file(input_path: &std::path::Path, config: &PrintConfig) -> Result<String> {
    let order = OrderFile::load_validated(input_path)?.into_order(SessionInfo::generate());
    let plan = order.print_plan(config);
    Ok(render_plan(&plan, &order.header(), &order.totals()))
}
