//! Enumerated product attributes and their canonical label codes.

use serde::{Deserialize, Serialize};

/// Top-level product kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    /// Insulated double glazing (ISICAM).
    #[default]
    InsulatedGlazing,
    /// Single pane (TEKCAM).
    SinglePane,
    /// Mirror (AYNA).
    Mirror,
    /// 4+4 laminated glass.
    Laminated,
}

/// Panel-thickness composition of an insulated glazing unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Composition {
    #[serde(rename = "4+9+4")]
    C4x9x4,
    #[serde(rename = "4+11+4")]
    C4x11x4,
    #[default]
    #[serde(rename = "4+12+4")]
    C4x12x4,
    #[serde(rename = "4+14+4")]
    C4x14x4,
    #[serde(rename = "4+16+4")]
    C4x16x4,
    #[serde(rename = "4+20+4")]
    C4x20x4,
    #[serde(rename = "4+22+4")]
    C4x22x4,
}

impl Composition {
    pub const ALL: [Composition; 7] = [
        Composition::C4x9x4,
        Composition::C4x11x4,
        Composition::C4x12x4,
        Composition::C4x14x4,
        Composition::C4x16x4,
        Composition::C4x20x4,
        Composition::C4x22x4,
    ];

    /// Label code.
    pub fn code(&self) -> &'static str {
        match self {
            Composition::C4x9x4 => "4+9+4",
            Composition::C4x11x4 => "4+11+4",
            Composition::C4x12x4 => "4+12+4",
            Composition::C4x14x4 => "4+14+4",
            Composition::C4x16x4 => "4+16+4",
            Composition::C4x20x4 => "4+20+4",
            Composition::C4x22x4 => "4+22+4",
        }
    }

    /// Exact match against the label codes.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

/// Glass type of an insulated glazing unit without a decorative pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlassType {
    /// DÜZCAM
    #[default]
    Clear,
    /// TEK TARAF FÜME
    SingleSideSmoked,
    /// ÇİFT TARAF FÜME
    DoubleSideSmoked,
    /// LOW-E
    LowE,
}

impl GlassType {
    pub const ALL: [GlassType; 4] = [
        GlassType::Clear,
        GlassType::SingleSideSmoked,
        GlassType::DoubleSideSmoked,
        GlassType::LowE,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            GlassType::Clear => "DÜZCAM",
            GlassType::SingleSideSmoked => "TEK TARAF FÜME",
            GlassType::DoubleSideSmoked => "ÇİFT TARAF FÜME",
            GlassType::LowE => "LOW-E",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

/// Decorative pattern. "None" is modelled as the absence of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    /// BUZLU TOPRAK
    FrostedEarth,
    /// BUZLU LİMON
    FrostedLemon,
    /// FÜME
    Smoked,
    /// SATİNA
    Satina,
}

impl Pattern {
    pub const ALL: [Pattern; 4] = [
        Pattern::FrostedEarth,
        Pattern::FrostedLemon,
        Pattern::Smoked,
        Pattern::Satina,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Pattern::FrostedEarth => "BUZLU TOPRAK",
            Pattern::FrostedLemon => "BUZLU LİMON",
            Pattern::Smoked => "FÜME",
            Pattern::Satina => "SATİNA",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }
}

/// Either a decorative pattern or a plain glass type; never both in a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Finish {
    Pattern(Pattern),
    Type(GlassType),
}

impl Default for Finish {
    fn default() -> Self {
        Finish::Type(GlassType::default())
    }
}

impl Finish {
    pub fn code(&self) -> &'static str {
        match self {
            Finish::Pattern(p) => p.code(),
            Finish::Type(t) => t.code(),
        }
    }
}

/// Drilled hole specification for insulated glazing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoleSpec {
    /// BACA
    Chimney,
    /// MENFEZ
    Vent,
}

impl HoleSpec {
    pub const ALL: [HoleSpec; 2] = [HoleSpec::Chimney, HoleSpec::Vent];

    pub fn code(&self) -> &'static str {
        match self {
            HoleSpec::Chimney => "BACA",
            HoleSpec::Vent => "MENFEZ",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|h| h.code() == code)
    }
}

/// Single-pane glass thickness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaneThickness {
    #[default]
    #[serde(rename = "4MM")]
    Mm4,
    #[serde(rename = "5MM")]
    Mm5,
    #[serde(rename = "6MM")]
    Mm6,
    #[serde(rename = "8MM")]
    Mm8,
    #[serde(rename = "10MM")]
    Mm10,
}

impl PaneThickness {
    pub const ALL: [PaneThickness; 5] = [
        PaneThickness::Mm4,
        PaneThickness::Mm5,
        PaneThickness::Mm6,
        PaneThickness::Mm8,
        PaneThickness::Mm10,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PaneThickness::Mm4 => "4MM",
            PaneThickness::Mm5 => "5MM",
            PaneThickness::Mm6 => "6MM",
            PaneThickness::Mm8 => "8MM",
            PaneThickness::Mm10 => "10MM",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

/// Only mirror thickness on offer.
pub const MIRROR_THICKNESS: &str = "4MM";

/// Cut outline of a single-pane or mirror piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CutShape {
    /// Plain rectangular cut.
    #[default]
    Straight,
    /// ELİPS
    Ellipse,
    /// YUV.ÇAP
    RoundDiameter,
}

impl CutShape {
    /// Label marker, if the shape has one.
    pub fn marker(&self) -> Option<&'static str> {
        match self {
            CutShape::Straight => None,
            CutShape::Ellipse => Some("ELİPS"),
            CutShape::RoundDiameter => Some("YUV.ÇAP"),
        }
    }

    pub fn from_marker(marker: &str) -> Option<Self> {
        [CutShape::Ellipse, CutShape::RoundDiameter]
            .into_iter()
            .find(|s| s.marker() == Some(marker))
    }

    pub fn is_ellipse(&self) -> bool {
        *self == CutShape::Ellipse
    }

    pub fn is_round_diameter(&self) -> bool {
        *self == CutShape::RoundDiameter
    }
}
