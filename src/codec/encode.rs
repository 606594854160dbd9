//! Label encoding.

use super::{
    to_upper_tr, INSULATED_SUFFIX, LAMINATED_LABEL, MIRROR_SUFFIX, SEPARATOR, SINGLE_PANE_SUFFIX,
};
use crate::model::{CutShape, ProductSpec, MIRROR_THICKNESS};

/// Build the canonical label for a product.
pub fn encode(spec: &ProductSpec) -> String {
    let label = match spec {
        ProductSpec::InsulatedGlazing {
            composition,
            finish,
            hole,
        } => {
            let mut segments = vec![
                format!("{} {}", composition.code(), INSULATED_SUFFIX),
                finish.code().to_string(),
            ];
            if let Some(hole) = hole {
                segments.push(hole.code().to_string());
            }
            segments.join(SEPARATOR)
        }
        ProductSpec::SinglePane { thickness, shape } => {
            with_shape(format!("{} {}", thickness.code(), SINGLE_PANE_SUFFIX), *shape)
        }
        ProductSpec::Mirror { shape } => {
            with_shape(format!("{} {}", MIRROR_THICKNESS, MIRROR_SUFFIX), *shape)
        }
        ProductSpec::Laminated => LAMINATED_LABEL.to_string(),
    };

    to_upper_tr(&label)
}

fn with_shape(base: String, shape: CutShape) -> String {
    match shape.marker() {
        Some(marker) => format!("{}{}{}", base, SEPARATOR, marker),
        None => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Composition, Finish, GlassType, HoleSpec, PaneThickness, Pattern};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_insulated_with_type_and_hole() {
        let spec = ProductSpec::InsulatedGlazing {
            composition: Composition::C4x12x4,
            finish: Finish::Type(GlassType::Clear),
            hole: Some(HoleSpec::Chimney),
        };
        assert_eq!(encode(&spec), "4+12+4 ISI YALITIMLI ÇİFTCAM - DÜZCAM - BACA");
    }

    #[test]
    fn test_insulated_with_pattern() {
        let spec = ProductSpec::InsulatedGlazing {
            composition: Composition::C4x16x4,
            finish: Finish::Pattern(Pattern::FrostedLemon),
            hole: None,
        };
        assert_eq!(encode(&spec), "4+16+4 ISI YALITIMLI ÇİFTCAM - BUZLU LİMON");
    }

    #[test]
    fn test_single_pane() {
        let plain = ProductSpec::SinglePane {
            thickness: PaneThickness::Mm6,
            shape: CutShape::Straight,
        };
        let round = ProductSpec::SinglePane {
            thickness: PaneThickness::Mm10,
            shape: CutShape::RoundDiameter,
        };
        assert_eq!(encode(&plain), "6MM TEKCAM");
        assert_eq!(encode(&round), "10MM TEKCAM - YUV.ÇAP");
    }

    #[test]
    fn test_mirror() {
        assert_eq!(
            encode(&ProductSpec::Mirror {
                shape: CutShape::Ellipse
            }),
            "4MM AYNA - ELİPS"
        );
        assert_eq!(
            encode(&ProductSpec::Mirror {
                shape: CutShape::Straight
            }),
            "4MM AYNA"
        );
    }

    #[test]
    fn test_laminated() {
        assert_eq!(encode(&ProductSpec::Laminated), "4+4 LAMİNE CAM");
    }

    #[test]
    fn test_deterministic() {
        let spec = ProductSpec::InsulatedGlazing {
            composition: Composition::C4x20x4,
            finish: Finish::Type(GlassType::DoubleSideSmoked),
            hole: Some(HoleSpec::Vent),
        };
        assert_eq!(encode(&spec).as_bytes(), encode(&spec).as_bytes());
    }
}
