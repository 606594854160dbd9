//! Order composition.

mod aggregator;
mod file;

pub use aggregator::{Order, OrderTotals};
pub use file::OrderFile;
