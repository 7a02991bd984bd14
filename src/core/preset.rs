use crate::constants::MODEL_ALT_PREFIX;

/// A named model asset variant ("quality level").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QualityPreset {
    pub name: &'static str,
    pub asset_path: &'static str,
}

impl QualityPreset {
    pub const fn new(name: &'static str, asset_path: &'static str) -> Self {
        Self { name, asset_path }
    }

    /// Text for the viewer's `alt` attribute.
    pub fn alt_text(&self) -> String {
        format!("{} - {}", MODEL_ALT_PREFIX, self.name)
    }
}

#[inline]
pub fn find_preset(presets: &[QualityPreset], name: &str) -> Option<usize> {
    presets.iter().position(|p| p.name == name)
}
