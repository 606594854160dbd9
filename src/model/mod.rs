//! Data model types for cut-glass orders.

mod attributes;
mod header;
mod line_item;
mod product;

pub use attributes::{
    Composition, CutShape, Family, Finish, GlassType, HoleSpec, PaneThickness, Pattern,
    MIRROR_THICKNESS,
};
pub use header::{CustomerInfo, OrderHeader, SessionInfo};
pub use line_item::{BulkUpdatePayload, ItemDraft, ItemId, LineItem};
pub use product::{ProductSpec, Selection};
