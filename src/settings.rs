//! Demo settings
//!
//! Persisted as JSON: LocalStorage on web, a file on native. Missing or
//! malformed settings never fail, they fall back to defaults.

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_ANIMATION_DURATION, DEFAULT_FRAMES_PER_SECOND, DEFAULT_PREVIEW_COLUMNS,
    DEFAULT_PREVIEW_ROWS, DEFAULT_RADIUS, MAX_ANIMATION_DURATION, MAX_FRAMES_PER_SECOND,
};

/// Demo settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base radius of both shapes (scene units, screen height = 2)
    pub radius: f32,
    /// Crossfade length in seconds (0 = instant)
    pub animation_duration: f32,
    /// Clock steps per second
    pub frames_per_second: u32,

    // === Native preview ===
    /// Characters per preview line
    pub preview_columns: usize,
    /// Preview lines
    pub preview_rows: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            animation_duration: DEFAULT_ANIMATION_DURATION,
            frames_per_second: DEFAULT_FRAMES_PER_SECOND,
            preview_columns: DEFAULT_PREVIEW_COLUMNS,
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "mobius_settings";

    /// Default settings file (native)
    pub const DEFAULT_PATH: &'static str = "mobius.json";

    /// Environment variable overriding the settings file path (native)
    pub const PATH_ENV: &'static str = "MOBIUS_SETTINGS";

    /// Replace values the SDF math cannot accept
    ///
    /// Radius is used as a scale divisor and must stay positive; the clock
    /// step divides by the frame rate. Duration and frame rate are capped so
    /// a crossfade spans a bounded number of frames.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.radius.is_finite() && self.radius > 0.0) {
            log::warn!("Invalid radius {}, using {}", self.radius, defaults.radius);
            self.radius = defaults.radius;
        }
        if !self.animation_duration.is_finite() {
            self.animation_duration = defaults.animation_duration;
        }
        self.animation_duration = self.animation_duration.clamp(0.0, MAX_ANIMATION_DURATION);
        self.frames_per_second = self.frames_per_second.clamp(1, MAX_FRAMES_PER_SECOND);
        self.preview_columns = self.preview_columns.max(1);
        self.preview_rows = self.preview_rows.max(1);
        self
    }

    /// Parse settings JSON; unknown fields are ignored, missing ones defaulted
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<Self>(json) {
            Ok(settings) => Some(settings.sanitized()),
            Err(e) => {
                log::warn!("Ignoring malformed settings: {}", e);
                None
            }
        }
    }

    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string_pretty(self).ok()
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings, storing them on first run so they can be edited
    #[cfg(target_arch = "wasm32")]
    pub fn load_or_init() -> Self {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(Self::STORAGE_KEY).ok().flatten())
            .is_some();

        let settings = Self::load();
        if !stored {
            settings.save();
        }
        settings
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Some(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Settings file path, honoring `MOBIUS_SETTINGS`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn path() -> std::path::PathBuf {
        std::env::var_os(Self::PATH_ENV)
            .map(std::path::PathBuf::from)
            .unwrap_or_else(|| std::path::PathBuf::from(Self::DEFAULT_PATH))
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    /// Load settings, writing them out on first run so they can be edited
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_init() -> Self {
        Self::load_or_init_at(&Self::path())
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_init_at(path: &std::path::Path) -> Self {
        let settings = Self::load_from(path);
        if !path.exists() {
            settings.save_to(path);
        }
        settings
    }

    /// Load settings from a JSON file, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(&self, path: &std::path::Path) {
        if let Some(json) = self.to_json() {
            match std::fs::write(path, json) {
                Ok(()) => log::info!("Settings saved to {}", path.display()),
                Err(e) => log::warn!("Could not write {}: {}", path.display(), e),
            }
        }
    }
}
