use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ViewerError {
    #[error("unknown quality preset: {0}")]
    InvalidPreset(String),
    #[error("duplicate quality preset name: {0}")]
    DuplicatePreset(String),
    #[error("preset list is empty")]
    EmptyPresetList,
    #[error("invalid camera orbit: {0:?}")]
    InvalidOrbit(String),
}
