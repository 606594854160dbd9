//! Print planning and plain-text page rendering.

mod classify;
mod paginate;
mod render;

pub use classify::{classify, items_in, PrintCategory};
pub use paginate::{paginate, PrintPage, PrintPlan};
pub use render::{format_area, format_meters, render_page, render_plan};
