//! Viewport settings
//!
//! Persists the camera rig, canvas geometry, mapping parameters and preview
//! border as JSON.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::canvas::{BoxCanvas, Canvas, CanvasKind, DomeCanvas, SphereCanvas};
use crate::mapping::MappingSettings;
use crate::math::{Angle, PolarVec};
use crate::ui::InputPreview;
use crate::visual::Tracker;

/// Settings for the interactive viewport (serialized as JSON)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportSettings {
    /// Pivot the camera orbits around
    #[serde(rename = "trackerCenter", default)]
    pub tracker_center: [f32; 3],
    /// Camera longitude in degrees
    #[serde(rename = "trackerLongitude", default)]
    pub tracker_longitude: f32,
    /// Camera latitude in degrees
    #[serde(rename = "trackerLatitude", default)]
    pub tracker_latitude: f32,
    /// Camera distance from the pivot
    #[serde(rename = "trackerDistance", default = "default_tracker_distance")]
    pub tracker_distance: f32,
    #[serde(rename = "minDistance", default = "default_min_distance")]
    pub min_distance: f32,
    #[serde(rename = "maxDistance", default = "default_max_distance")]
    pub max_distance: f32,

    /// Relative preview border
    #[serde(rename = "border", default)]
    pub border: f32,

    /// Which canvas is active
    #[serde(rename = "canvasKind", default)]
    pub canvas_kind: CanvasKind,
    /// Box canvas size (width, height, depth)
    #[serde(rename = "boxSize", default = "default_box_size")]
    pub box_size: [f32; 3],
    /// Dome canvas radius
    #[serde(rename = "domeRadius", default = "default_dome_radius")]
    pub dome_radius: f32,
    /// Sphere canvas radius
    #[serde(rename = "sphereRadius", default = "default_sphere_radius")]
    pub sphere_radius: f32,

    /// Active mapping and its parameters
    #[serde(rename = "mapping", default)]
    pub mapping: MappingSettings,
}

fn default_tracker_distance() -> f32 {
    20.0
}
fn default_min_distance() -> f32 {
    1.0
}
fn default_max_distance() -> f32 {
    100.0
}
fn default_box_size() -> [f32; 3] {
    crate::canvas::box_canvas::DEFAULT_BOX_SIZE.to_array()
}
fn default_dome_radius() -> f32 {
    crate::canvas::dome::DEFAULT_DOME_RADIUS
}
fn default_sphere_radius() -> f32 {
    crate::canvas::sphere::DEFAULT_SPHERE_RADIUS
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            tracker_center: [0.0; 3],
            tracker_longitude: 0.0,
            tracker_latitude: 0.0,
            tracker_distance: default_tracker_distance(),
            min_distance: default_min_distance(),
            max_distance: default_max_distance(),
            border: 0.0,
            canvas_kind: CanvasKind::default(),
            box_size: default_box_size(),
            dome_radius: default_dome_radius(),
            sphere_radius: default_sphere_radius(),
            mapping: MappingSettings::default(),
        }
    }
}

impl ViewportSettings {
    /// Default settings file in the user's config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("projmap-viewport");
            p.push("viewport.json");
            p
        })
    }

    /// Load settings from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path)?;
        let mut settings: Self = serde_json::from_str(&contents)?;
        settings.mapping.sanitize();
        log::info!("Loaded viewport settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to a JSON file, creating parent directories
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load from the default path, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from_file(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to load viewport settings, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Save to the default path
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = Self::default_path().ok_or(SettingsError::NoConfigDir)?;
        self.save_to_file(&path)
    }

    /// Build a tracker from the stored state, distance limited into range
    pub fn tracker(&self) -> Tracker {
        let mut tracker = Tracker::new(
            Vec3::from_array(self.tracker_center),
            PolarVec::new(
                Angle::degrees(self.tracker_longitude),
                Angle::degrees(self.tracker_latitude),
                self.tracker_distance,
            ),
        );
        tracker.limit_distance(self.min_distance, self.max_distance);
        tracker
    }

    /// Store the tracker state
    pub fn capture_tracker(&mut self, tracker: &Tracker) {
        let direction = tracker.direction();
        self.tracker_center = tracker.center().to_array();
        self.tracker_longitude = direction.longitude().to_degrees();
        self.tracker_latitude = direction.latitude().to_degrees();
        self.tracker_distance = direction.radius();
    }

    pub fn apply_to_box(&self, canvas: &mut BoxCanvas) {
        canvas.set_size(Vec3::from_array(self.box_size));
    }

    pub fn apply_to_preview(&self, preview: &mut InputPreview) {
        preview.set_border(self.border);
    }

    /// Create the configured canvas
    pub fn create_canvas(&self) -> Box<dyn Canvas> {
        match self.canvas_kind {
            CanvasKind::Box => Box::new(BoxCanvas::with_size(Vec3::from_array(self.box_size))),
            CanvasKind::Dome => Box::new(DomeCanvas::with_radius(self.dome_radius)),
            CanvasKind::Sphere => Box::new(SphereCanvas::with_radius(self.sphere_radius)),
        }
    }
}

/// Settings-related errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not find config directory")]
    NoConfigDir,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("projmap-viewport-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_default_settings() {
        let settings = ViewportSettings::default();
        assert_eq!(settings.box_size, [10.0, 10.0, 10.0]);
        assert_eq!(settings.canvas_kind, CanvasKind::Box);
        assert_eq!(settings.tracker().distance(), 20.0);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: ViewportSettings = serde_json::from_str(r#"{"border": 0.1}"#).unwrap();
        assert_eq!(settings.border, 0.1);
        assert_eq!(settings.max_distance, 100.0);
        assert_eq!(settings.dome_radius, 5.0);
    }

    #[test]
    fn test_tracker_distance_limited() {
        let settings = ViewportSettings {
            tracker_distance: 500.0,
            ..Default::default()
        };
        assert_eq!(settings.tracker().distance(), 100.0);
    }

    #[test]
    fn test_capture_tracker() {
        let mut tracker = Tracker::default();
        tracker.set_center(Vec3::new(1.0, 2.0, 3.0));
        tracker.track(45.0, 10.0, 4.0);

        let mut settings = ViewportSettings::default();
        settings.capture_tracker(&tracker);
        assert_eq!(settings.tracker(), tracker);
    }

    #[test]
    fn test_file_round_trip() {
        let path = scratch_path("round_trip/viewport.json");
        let settings = ViewportSettings {
            border: 0.2,
            canvas_kind: CanvasKind::Dome,
            box_size: [4.0, 5.0, 6.0],
            ..Default::default()
        };
        settings.save_to_file(&path).unwrap();
        let loaded = ViewportSettings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_invalid_json() {
        let path = scratch_path("invalid.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            ViewportSettings::load_from_file(&path),
            Err(SettingsError::Json(_))
        ));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_apply() {
        let settings = ViewportSettings {
            border: 0.3,
            box_size: [1.0, 2.0, 3.0],
            ..Default::default()
        };
        let mut canvas = BoxCanvas::new();
        settings.apply_to_box(&mut canvas);
        assert_eq!(canvas.size(), Vec3::new(1.0, 2.0, 3.0));

        let mut preview = InputPreview::new();
        settings.apply_to_preview(&mut preview);
        assert_eq!(preview.border(), 0.3);

        let dome = ViewportSettings {
            canvas_kind: CanvasKind::Dome,
            ..Default::default()
        }
        .create_canvas();
        assert_eq!(dome.kind(), CanvasKind::Dome);
    }

    #[test]
    fn test_create_sphere_canvas() {
        let settings = ViewportSettings {
            canvas_kind: CanvasKind::Sphere,
            sphere_radius: 3.0,
            ..Default::default()
        };
        let sphere = settings.create_canvas();
        assert_eq!(sphere.kind(), CanvasKind::Sphere);
        assert_eq!(sphere.bounds().min(), Vec3::splat(-3.0));
        assert_eq!(sphere.bounds().max(), Vec3::splat(3.0));

        let json = serde_json::to_string(&settings).unwrap();
        let loaded: ViewportSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.canvas_kind, CanvasKind::Sphere);
        assert_eq!(loaded.sphere_radius, 3.0);
    }

    #[test]
    fn test_loaded_mapping_is_sanitized() {
        let path = scratch_path("mapping/viewport.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            r#"{"mapping": {"kind": "Equirectangular", "stripTop": 1.5}}"#,
        )
        .unwrap();
        let loaded = ViewportSettings::load_from_file(&path).unwrap();
        assert_eq!(loaded.mapping.strip_top, 1.0);
        assert_eq!(loaded.sphere_radius, 5.0);
        let _ = fs::remove_file(&path);
    }
}
