//! Best-effort label decoding.
//!
//! Decoding never fails. Segments that match a known attribute are reported
//! as [`Segment::Recognized`]; everything else is kept verbatim as
//! [`Segment::Unrecognized`] and ignored when the result is applied to a
//! [`Selection`]. Only labels produced by [`encode`](super::encode) are
//! guaranteed to decode back to the same product.

use super::{
    to_upper_tr, INSULATED_SUFFIX, LAMINATED_LABEL, MIRROR_SUFFIX, SEPARATOR, SINGLE_PANE_SUFFIX,
};
use crate::model::{
    Composition, CutShape, Family, Finish, GlassType, HoleSpec, PaneThickness, Pattern, Selection,
    MIRROR_THICKNESS,
};
use serde::Serialize;
use tracing::warn;

/// A product attribute read from a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Attribute {
    Composition(Composition),
    Finish(Finish),
    Hole(HoleSpec),
    PaneThickness(PaneThickness),
    MirrorThickness,
    CutShape(CutShape),
}

/// One piece of a decoded label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Segment {
    Recognized(Attribute),
    Unrecognized(String),
}

/// Result of decoding a label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DecodedLabel {
    /// Detected family, if any family marker was present.
    pub family: Option<Family>,
    /// Label segments in order of appearance.
    pub segments: Vec<Segment>,
}

impl DecodedLabel {
    /// Recognized attributes in order.
    pub fn recognized(&self) -> impl Iterator<Item = Attribute> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Recognized(attr) => Some(*attr),
            Segment::Unrecognized(_) => None,
        })
    }

    /// Segments that were dropped.
    pub fn unrecognized(&self) -> impl Iterator<Item = &str> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Unrecognized(text) => Some(text.as_str()),
            Segment::Recognized(_) => None,
        })
    }

    /// Check if every segment was understood.
    pub fn is_complete(&self) -> bool {
        self.family.is_some() && self.unrecognized().next().is_none()
    }
}

/// Decode a label into its family and attribute segments.
pub fn decode(label: &str) -> DecodedLabel {
    let label = to_upper_tr(label.trim());

    let family = detect_family(&label);
    let segments = match family {
        Some(Family::InsulatedGlazing) => decode_insulated(&label),
        Some(Family::SinglePane) => decode_shaped(&label, SINGLE_PANE_SUFFIX, |head| {
            PaneThickness::from_code(head).map(Attribute::PaneThickness)
        }),
        Some(Family::Mirror) => decode_shaped(&label, MIRROR_SUFFIX, |head| {
            (head == MIRROR_THICKNESS).then_some(Attribute::MirrorThickness)
        }),
        Some(Family::Laminated) => decode_laminated(&label),
        None => vec![Segment::Unrecognized(label.clone())],
    };

    let decoded = DecodedLabel { family, segments };
    for text in decoded.unrecognized() {
        warn!("Unrecognized label segment '{}' in '{}'", text, label);
    }
    decoded
}

/// Family markers are checked in a fixed priority order.
fn detect_family(label: &str) -> Option<Family> {
    if label.contains(INSULATED_SUFFIX) {
        Some(Family::InsulatedGlazing)
    } else if label.contains(SINGLE_PANE_SUFFIX) {
        Some(Family::SinglePane)
    } else if label.contains(LAMINATED_LABEL) {
        Some(Family::Laminated)
    } else if label.contains(MIRROR_SUFFIX) {
        Some(Family::Mirror)
    } else {
        None
    }
}

/// Split off the leading segment and strip the family suffix from it.
fn split_head<'a>(label: &'a str, suffix: &str) -> (String, Vec<&'a str>) {
    let mut parts = label.split(SEPARATOR);
    let head = parts.next().unwrap_or_default();
    let head = head.replace(suffix, "").trim().to_string();
    (head, parts.map(str::trim).collect())
}

fn decode_insulated(label: &str) -> Vec<Segment> {
    let (head, tail) = split_head(label, INSULATED_SUFFIX);
    let mut segments = Vec::with_capacity(tail.len() + 1);

    segments.push(match Composition::from_code(&head) {
        Some(c) => Segment::Recognized(Attribute::Composition(c)),
        None => Segment::Unrecognized(head),
    });

    let mut has_hole = false;
    let mut has_finish = false;
    for part in tail {
        let attr = if let (false, Some(h)) = (has_hole, HoleSpec::from_code(part)) {
            has_hole = true;
            Some(Attribute::Hole(h))
        } else if has_finish {
            None
        } else if let Some(p) = Pattern::from_code(part) {
            has_finish = true;
            Some(Attribute::Finish(Finish::Pattern(p)))
        } else if let Some(t) = GlassType::from_code(part) {
            has_finish = true;
            Some(Attribute::Finish(Finish::Type(t)))
        } else {
            None
        };
        segments.push(match attr {
            Some(attr) => Segment::Recognized(attr),
            None => Segment::Unrecognized(part.to_string()),
        });
    }

    segments
}

fn decode_shaped(
    label: &str,
    suffix: &str,
    head_attr: impl Fn(&str) -> Option<Attribute>,
) -> Vec<Segment> {
    let (head, tail) = split_head(label, suffix);
    let mut segments = Vec::with_capacity(tail.len() + 1);

    segments.push(match head_attr(&head) {
        Some(attr) => Segment::Recognized(attr),
        None => Segment::Unrecognized(head),
    });

    let mut has_shape = false;
    for part in tail {
        match CutShape::from_marker(part) {
            Some(shape) if !has_shape => {
                has_shape = true;
                segments.push(Segment::Recognized(Attribute::CutShape(shape)));
            }
            _ => segments.push(Segment::Unrecognized(part.to_string())),
        }
    }

    segments
}

fn decode_laminated(label: &str) -> Vec<Segment> {
    let rest = label.replace(LAMINATED_LABEL, "");
    let rest = rest.trim().trim_start_matches('-').trim();
    if rest.is_empty() {
        Vec::new()
    } else {
        vec![Segment::Unrecognized(rest.to_string())]
    }
}

impl Selection {
    /// Apply a decoded label on top of the current selection.
    ///
    /// Options the label names are replaced; the hole, finish and cut shape
    /// reset to their defaults when absent. A composition or thickness the
    /// label does not recognize keeps its previous value. Labels without a
    /// family marker leave the selection untouched.
    pub fn apply(&mut self, decoded: &DecodedLabel) {
        let Some(family) = decoded.family else {
            return;
        };

        self.set_family(family);
        match family {
            Family::InsulatedGlazing => {
                self.hole = None;
                self.pattern = None;
                self.glass_type = GlassType::Clear;
            }
            Family::SinglePane | Family::Mirror => self.cut_shape = CutShape::Straight,
            Family::Laminated => {}
        }

        for attr in decoded.recognized() {
            match attr {
                Attribute::Composition(c) => self.composition = c,
                Attribute::Finish(Finish::Pattern(p)) => self.set_pattern(Some(p)),
                Attribute::Finish(Finish::Type(t)) => self.glass_type = t,
                Attribute::Hole(h) => self.hole = Some(h),
                Attribute::PaneThickness(t) => self.pane_thickness = t,
                Attribute::CutShape(s) => self.cut_shape = s,
                Attribute::MirrorThickness => {}
            }
        }
    }
}
