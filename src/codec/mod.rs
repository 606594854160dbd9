//! Canonical product labels.
//!
//! A label is the single string that describes what a line item is, e.g.
//! `4+12+4 ISI YALITIMLI ÇİFTCAM - DÜZCAM - BACA` or `5MM TEKCAM - ELİPS`.
//! [`encode`] builds one from a [`ProductSpec`](crate::model::ProductSpec);
//! [`decode`] reads one back on a best-effort basis for editing.

mod decode;
mod encode;
mod locale;

pub use decode::{decode, Attribute, DecodedLabel, Segment};
pub use encode::encode;
pub use locale::to_upper_tr;

/// Joins the segments of a label.
pub const SEPARATOR: &str = " - ";

/// Base suffix and family marker of insulated glazing.
pub const INSULATED_SUFFIX: &str = "ISI YALITIMLI ÇİFTCAM";

/// Base suffix and family marker of single-pane glass.
pub const SINGLE_PANE_SUFFIX: &str = "TEKCAM";

/// Base suffix and family marker of mirrors.
pub const MIRROR_SUFFIX: &str = "AYNA";

/// Full label of laminated glass.
pub const LAMINATED_LABEL: &str = "4+4 LAMİNE CAM";
