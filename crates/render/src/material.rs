//! Material presets offered by the material-swap UI

use std::fmt;

use crate::color::{rgba, Color};

/// The six supported texture presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialKind {
    Wood,
    Metal,
    Fabric,
    Leather,
    Marble,
    Carbon,
}

/// Language for user-facing material labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Korean,
}

/// Silhouette body color for the neutral fallback
pub const NEUTRAL_BASE_COLOR: Color = rgba(128, 128, 128, 0.8);

impl MaterialKind {
    pub const ALL: [MaterialKind; 6] = [
        MaterialKind::Wood,
        MaterialKind::Metal,
        MaterialKind::Fabric,
        MaterialKind::Leather,
        MaterialKind::Marble,
        MaterialKind::Carbon,
    ];

    /// Case-sensitive match against the preset ids.
    ///
    /// Anything else, including `""`, is `None` and renders with the neutral fill.
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "wood" => Some(Self::Wood),
            "metal" => Some(Self::Metal),
            "fabric" => Some(Self::Fabric),
            "leather" => Some(Self::Leather),
            "marble" => Some(Self::Marble),
            "carbon" => Some(Self::Carbon),
            _ => None,
        }
    }

    /// Identifier used by the UI state and in file names
    pub fn id(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Metal => "metal",
            Self::Fabric => "fabric",
            Self::Leather => "leather",
            Self::Marble => "marble",
            Self::Carbon => "carbon",
        }
    }

    /// Display label
    pub fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::English, Self::Wood) => "Wood",
            (Locale::English, Self::Metal) => "Metal",
            (Locale::English, Self::Fabric) => "Fabric",
            (Locale::English, Self::Leather) => "Leather",
            (Locale::English, Self::Marble) => "Marble",
            (Locale::English, Self::Carbon) => "Carbon",
            (Locale::Korean, Self::Wood) => "나무",
            (Locale::Korean, Self::Metal) => "메탈",
            (Locale::Korean, Self::Fabric) => "패브릭",
            (Locale::Korean, Self::Leather) => "가죽",
            (Locale::Korean, Self::Marble) => "대리석",
            (Locale::Korean, Self::Carbon) => "카본",
        }
    }

    /// Short description of the surface finish
    pub fn finish(self) -> &'static str {
        match self {
            Self::Wood => "natural wood grain, warm brown tones, organic surface",
            Self::Metal => "polished metal, reflective brushed-steel finish",
            Self::Fabric => "soft textile, woven thread pattern, natural fibers",
            Self::Leather => "premium leather, fine pores, rich brown grain",
            Self::Marble => "polished stone, white and gray veining",
            Self::Carbon => "dark woven carbon fiber, composite twill",
        }
    }

    /// Semi-transparent silhouette body color
    pub fn base_color(self) -> Color {
        match self {
            Self::Wood => rgba(160, 100, 50, 0.8),
            Self::Metal => rgba(192, 192, 200, 0.8),
            Self::Fabric => rgba(200, 170, 130, 0.8),
            Self::Leather => rgba(110, 60, 30, 0.8),
            Self::Marble => rgba(240, 235, 225, 0.8),
            Self::Carbon => rgba(40, 40, 40, 0.8),
        }
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Silhouette body color for an optional material
pub fn base_color_for(material: Option<MaterialKind>) -> Color {
    material.map_or(NEUTRAL_BASE_COLOR, MaterialKind::base_color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_ids() {
        for kind in MaterialKind::ALL {
            assert_eq!(MaterialKind::parse(kind.id()), Some(kind));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(MaterialKind::parse("Wood"), None);
        assert_eq!(MaterialKind::parse("METAL"), None);
        assert_eq!(MaterialKind::parse(""), None);
        assert_eq!(MaterialKind::parse("plastic"), None);
    }

    #[test]
    fn test_display_matches_id() {
        assert_eq!(MaterialKind::Marble.to_string(), "marble");
    }

    #[test]
    fn test_labels() {
        assert_eq!(MaterialKind::Leather.label(Locale::English), "Leather");
        assert_eq!(MaterialKind::Leather.label(Locale::Korean), "가죽");
    }

    #[test]
    fn test_base_colors_are_translucent() {
        for kind in MaterialKind::ALL {
            let alpha = kind.base_color()[3];
            assert!(alpha > 0.0 && alpha < 1.0);
        }
        assert_eq!(base_color_for(None), NEUTRAL_BASE_COLOR);
    }
}
