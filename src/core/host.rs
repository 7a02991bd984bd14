use crate::constants::{
    AR_MODES, CAMERA_ORBIT_BOUNDS, ENVIRONMENT_IMAGE, INTERACTION_PROMPT, SHADOW_INTENSITY,
    TOUCH_ACTION, VIEWER_STYLE,
};
use crate::core::{find_preset, CameraOrbit, QualityPreset, ViewerError};

/// Attribute sink for the embedded model viewer element.
pub trait ModelViewer {
    fn set_attribute(&self, name: &str, value: &str);
}

/// Model load status as reported by the viewer's `load`/`error` events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed,
}

/// Static attributes applied to the viewer element on mount.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    pub auto_rotate: bool,
    pub camera_controls: bool,
    pub ar: bool,
    pub ar_modes: String,
    pub touch_action: String,
    pub interaction_prompt: String,
    pub environment_image: String,
    pub shadow_intensity: String,
    pub min_camera_orbit: String,
    pub max_camera_orbit: String,
    pub style: String,
    pub initial_orbit: CameraOrbit,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            auto_rotate: true,
            camera_controls: true,
            ar: true,
            ar_modes: AR_MODES.to_string(),
            touch_action: TOUCH_ACTION.to_string(),
            interaction_prompt: INTERACTION_PROMPT.to_string(),
            environment_image: ENVIRONMENT_IMAGE.to_string(),
            shadow_intensity: SHADOW_INTENSITY.to_string(),
            min_camera_orbit: CAMERA_ORBIT_BOUNDS.to_string(),
            max_camera_orbit: CAMERA_ORBIT_BOUNDS.to_string(),
            style: VIEWER_STYLE.to_string(),
            initial_orbit: CameraOrbit::default_pose(),
        }
    }
}

impl ViewerConfig {
    /// Mount-time attributes, excluding `src`, `alt` and `camera-orbit`.
    /// Boolean attributes are present with an empty value or omitted.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = Vec::with_capacity(11);
        for (name, on) in [
            ("auto-rotate", self.auto_rotate),
            ("camera-controls", self.camera_controls),
            ("ar", self.ar),
        ] {
            if on {
                attrs.push((name, String::new()));
            }
        }
        attrs.push(("ar-modes", self.ar_modes.clone()));
        attrs.push(("touch-action", self.touch_action.clone()));
        attrs.push(("interaction-prompt", self.interaction_prompt.clone()));
        attrs.push(("environment-image", self.environment_image.clone()));
        attrs.push(("shadow-intensity", self.shadow_intensity.clone()));
        attrs.push(("min-camera-orbit", self.min_camera_orbit.clone()));
        attrs.push(("max-camera-orbit", self.max_camera_orbit.clone()));
        attrs.push(("style", self.style.clone()));
        attrs
    }
}

/// Owns the selected quality preset and keeps the mounted viewer's source
/// in sync with it.
pub struct ViewerHost<V> {
    presets: &'static [QualityPreset],
    selected: usize,
    config: ViewerConfig,
    viewer: Option<V>,
    pose_applied: bool,
    load_state: LoadState,
}

impl<V: ModelViewer> ViewerHost<V> {
    pub fn new(
        presets: &'static [QualityPreset],
        default_preset: &str,
        config: ViewerConfig,
    ) -> Result<Self, ViewerError> {
        if presets.is_empty() {
            return Err(ViewerError::EmptyPresetList);
        }
        for (i, p) in presets.iter().enumerate() {
            if presets[..i].iter().any(|q| q.name == p.name) {
                return Err(ViewerError::DuplicatePreset(p.name.to_string()));
            }
        }
        let selected = find_preset(presets, default_preset)
            .ok_or_else(|| ViewerError::InvalidPreset(default_preset.to_string()))?;
        Ok(Self {
            presets,
            selected,
            config,
            viewer: None,
            pose_applied: false,
            load_state: LoadState::Loading,
        })
    }

    #[inline]
    pub fn presets(&self) -> &'static [QualityPreset] {
        self.presets
    }

    #[inline]
    pub fn selected(&self) -> &'static QualityPreset {
        &self.presets[self.selected]
    }

    #[inline]
    pub fn is_active(&self, name: &str) -> bool {
        self.selected().name == name
    }

    #[inline]
    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn viewer(&self) -> Option<&V> {
        self.viewer.as_ref()
    }

    /// Configure and take ownership of the viewer element. The default
    /// camera pose is only written on the first mount.
    pub fn mount(&mut self, viewer: V) {
        for (name, value) in self.config.attributes() {
            viewer.set_attribute(name, &value);
        }
        if !self.pose_applied {
            viewer.set_attribute("camera-orbit", &self.config.initial_orbit.to_string());
            self.pose_applied = true;
        }
        self.viewer = Some(viewer);
        self.apply_source();
    }

    pub fn unmount(&mut self) -> Option<V> {
        self.viewer.take()
    }

    /// Select a preset by name. Unknown names leave the selection unchanged.
    pub fn select_preset(&mut self, name: &str) -> Result<&'static QualityPreset, ViewerError> {
        let index = find_preset(self.presets, name)
            .ok_or_else(|| ViewerError::InvalidPreset(name.to_string()))?;
        if index != self.selected {
            self.selected = index;
            let preset = self.selected();
            log::info!("[viewer] preset={} src={}", preset.name, preset.asset_path);
            self.apply_source();
        }
        Ok(self.selected())
    }

    pub fn model_loaded(&mut self) {
        self.load_state = LoadState::Loaded;
    }

    pub fn model_failed(&mut self) {
        log::warn!("[viewer] model failed to load: {}", self.selected().asset_path);
        self.load_state = LoadState::Failed;
    }

    fn apply_source(&mut self) {
        if let Some(viewer) = &self.viewer {
            let preset = self.selected();
            viewer.set_attribute("src", preset.asset_path);
            viewer.set_attribute("alt", &preset.alt_text());
            self.load_state = LoadState::Loading;
        }
    }
}
