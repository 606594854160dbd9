//! Structured product description and the editor selection state.

use super::attributes::{
    Composition, CutShape, Family, Finish, GlassType, HoleSpec, PaneThickness, Pattern,
};
use serde::{Deserialize, Serialize};

/// A fully resolved product: one family with only the options that apply to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum ProductSpec {
    InsulatedGlazing {
        #[serde(default)]
        composition: Composition,
        #[serde(default)]
        finish: Finish,
        #[serde(default)]
        hole: Option<HoleSpec>,
    },
    SinglePane {
        #[serde(default)]
        thickness: PaneThickness,
        #[serde(default)]
        shape: CutShape,
    },
    Mirror {
        #[serde(default)]
        shape: CutShape,
    },
    Laminated,
}

impl Default for ProductSpec {
    fn default() -> Self {
        Selection::default().spec()
    }
}

impl ProductSpec {
    /// Product family.
    pub fn family(&self) -> Family {
        match self {
            ProductSpec::InsulatedGlazing { .. } => Family::InsulatedGlazing,
            ProductSpec::SinglePane { .. } => Family::SinglePane,
            ProductSpec::Mirror { .. } => Family::Mirror,
            ProductSpec::Laminated => Family::Laminated,
        }
    }

    /// Cut outline; only single-pane and mirror pieces can be shaped.
    pub fn cut_shape(&self) -> CutShape {
        match self {
            ProductSpec::SinglePane { shape, .. } | ProductSpec::Mirror { shape } => *shape,
            _ => CutShape::Straight,
        }
    }

    /// Hole specification; only insulated glazing carries one.
    pub fn hole(&self) -> Option<HoleSpec> {
        match self {
            ProductSpec::InsulatedGlazing { hole, .. } => *hole,
            _ => None,
        }
    }
}

/// Editor state holding every family's sub-options at once.
///
/// Only the options of the selected family reach the label; the rest are
/// kept so switching back and forth does not lose them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub family: Family,
    pub composition: Composition,
    pub glass_type: GlassType,
    pub pattern: Option<Pattern>,
    pub hole: Option<HoleSpec>,
    pub pane_thickness: PaneThickness,
    pub cut_shape: CutShape,
}

impl Selection {
    /// Switch family, resetting options the new family cannot carry.
    pub fn set_family(&mut self, family: Family) {
        self.family = family;
        if !matches!(family, Family::SinglePane | Family::Mirror) {
            self.cut_shape = CutShape::Straight;
        }
        if family != Family::InsulatedGlazing {
            self.hole = None;
            self.pattern = None;
        }
    }

    /// Select a decorative pattern. Any pattern forces the glass type back to clear.
    pub fn set_pattern(&mut self, pattern: Option<Pattern>) {
        self.pattern = pattern;
        if pattern.is_some() {
            self.glass_type = GlassType::Clear;
        }
    }

    /// Resolve the selection into a product spec. A pattern overrides the glass type.
    pub fn spec(&self) -> ProductSpec {
        match self.family {
            Family::InsulatedGlazing => ProductSpec::InsulatedGlazing {
                composition: self.composition,
                finish: match self.pattern {
                    Some(p) => Finish::Pattern(p),
                    None => Finish::Type(self.glass_type),
                },
                hole: self.hole,
            },
            Family::SinglePane => ProductSpec::SinglePane {
                thickness: self.pane_thickness,
                shape: self.cut_shape,
            },
            Family::Mirror => ProductSpec::Mirror {
                shape: self.cut_shape,
            },
            Family::Laminated => ProductSpec::Laminated,
        }
    }
}

impl From<ProductSpec> for Selection {
    fn from(spec: ProductSpec) -> Self {
        let mut selection = Selection::default();
        selection.set_family(spec.family());
        match spec {
            ProductSpec::InsulatedGlazing {
                composition,
                finish,
                hole,
            } => {
                selection.composition = composition;
                match finish {
                    Finish::Pattern(p) => selection.set_pattern(Some(p)),
                    Finish::Type(t) => selection.glass_type = t,
                }
                selection.hole = hole;
            }
            ProductSpec::SinglePane { thickness, shape } => {
                selection.pane_thickness = thickness;
                selection.cut_shape = shape;
            }
            ProductSpec::Mirror { shape } => selection.cut_shape = shape,
            ProductSpec::Laminated => {}
        }
        selection
    }
}
