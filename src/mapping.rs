//! Mapping parameters
//!
//! Per-mapping settings that the mapping function reads when it warps an
//! input onto the canvas. Only the data lives here. The warp itself runs in
//! the renderer.

use serde::{Deserialize, Serialize};

/// Mapping function applied to an input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MappingKind {
    /// Longitude/latitude grid over the full input
    #[default]
    Equirectangular,
    /// Angular fisheye centered in the input
    Fisheye,
}

impl MappingKind {
    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            MappingKind::Equirectangular => "Equirectangular",
            MappingKind::Fisheye => "Fisheye",
        }
    }

    /// Get all mapping kinds for iteration
    pub fn all() -> &'static [MappingKind] {
        &[MappingKind::Equirectangular, MappingKind::Fisheye]
    }
}

/// Settings for the active mapping (serialized with the viewport settings)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MappingSettings {
    #[serde(rename = "kind", default)]
    pub kind: MappingKind,
    /// Fraction of the input cut from the top (equirectangular)
    #[serde(rename = "stripTop", default)]
    pub strip_top: f32,
    /// Fraction of the input cut from the bottom (equirectangular)
    #[serde(rename = "stripBottom", default)]
    pub strip_bottom: f32,
    /// Radial stretch (fisheye)
    #[serde(rename = "stretch", default)]
    pub stretch: f32,
    #[serde(rename = "flipHorizontal", default)]
    pub flip_horizontal: bool,
    #[serde(rename = "flipVertical", default)]
    pub flip_vertical: bool,
}

impl Default for MappingSettings {
    fn default() -> Self {
        Self {
            kind: MappingKind::default(),
            strip_top: 0.0,
            strip_bottom: 0.0,
            stretch: 0.0,
            flip_horizontal: false,
            flip_vertical: false,
        }
    }
}

impl MappingSettings {
    pub fn new(kind: MappingKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// Clamp every value into its valid range.
    ///
    /// Strips and stretch land in `[0, 1]`, NaN becomes 0, and the strips are
    /// scaled down together when they would cut away the whole input.
    pub fn sanitize(&mut self) {
        let before = *self;
        self.strip_top = unit(self.strip_top);
        self.strip_bottom = unit(self.strip_bottom);
        self.stretch = unit(self.stretch);

        let strips = self.strip_top + self.strip_bottom;
        if strips > 1.0 {
            self.strip_top /= strips;
            self.strip_bottom /= strips;
        }

        if *self != before {
            log::warn!("Mapping parameters clamped: {:?} -> {:?}", before, *self);
        }
    }

    /// Input rows left after stripping, as `(top, bottom)` in `[0, 1]`
    pub fn visible_rows(&self) -> (f32, f32) {
        (self.strip_top, 1.0 - self.strip_bottom)
    }
}

fn unit(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let mapping = MappingSettings::default();
        assert_eq!(mapping.kind, MappingKind::Equirectangular);
        assert_eq!(mapping.visible_rows(), (0.0, 1.0));
        assert_eq!(MappingKind::all().len(), 2);
    }

    #[test]
    fn test_sanitize_clamps_ranges() {
        let mut mapping = MappingSettings {
            strip_top: -0.5,
            strip_bottom: f32::NAN,
            stretch: 3.0,
            ..MappingSettings::new(MappingKind::Fisheye)
        };
        mapping.sanitize();
        assert_eq!(mapping.strip_top, 0.0);
        assert_eq!(mapping.strip_bottom, 0.0);
        assert_eq!(mapping.stretch, 1.0);
        assert_eq!(mapping.kind, MappingKind::Fisheye);
    }

    #[test]
    fn test_sanitize_keeps_some_rows() {
        let mut mapping = MappingSettings {
            strip_top: 0.75,
            strip_bottom: 0.75,
            ..Default::default()
        };
        mapping.sanitize();
        assert!((mapping.strip_top - 0.5).abs() < 1e-6);
        assert!((mapping.strip_bottom - 0.5).abs() < 1e-6);

        let mut valid = MappingSettings {
            strip_top: 0.1,
            strip_bottom: 0.2,
            ..Default::default()
        };
        valid.sanitize();
        assert_eq!(valid.visible_rows(), (0.1, 0.8));
    }

    #[test]
    fn test_json_field_names() {
        let mapping = MappingSettings {
            strip_top: 0.25,
            flip_vertical: true,
            ..Default::default()
        };
        let json = serde_json::to_string(&mapping).unwrap();
        assert!(json.contains("\"stripTop\":0.25"));
        assert!(json.contains("\"flipVertical\":true"));

        let partial: MappingSettings = serde_json::from_str(r#"{"kind": "Fisheye"}"#).unwrap();
        assert_eq!(partial, MappingSettings::new(MappingKind::Fisheye));
    }
}
