//! Viewer, camera and layout constants.
//!
//! These constants express intended behavior (camera defaults, clamp
//! limits, asset locations) and keep magic numbers out of the code.

use crate::core::{ComponentDescriptor, QualityPreset};

// Quality presets, in selector order
pub const QUALITY_PRESETS: &[QualityPreset] = &[
    QualityPreset::new("Good", "/3d/iphone_16_pro_max/good.glb"),
    QualityPreset::new("Excellent", "/3d/iphone_16_pro_max/excellent.glb"),
    QualityPreset::new("Premium", "/3d/iphone_16_pro_max/premium.glb"),
];
pub const DEFAULT_PRESET: &str = "Premium";

// Alt text prefix; the preset name is appended
pub const MODEL_ALT_PREFIX: &str = "iPhone 16 Pro Max";

// Default camera pose applied on first mount
pub const DEFAULT_AZIMUTH_DEG: f64 = 45.0;
pub const DEFAULT_POLAR_DEG: f64 = 75.0;
pub const DEFAULT_RADIUS_M: f64 = 2.5;

// Orbit control steps
pub const ORBIT_ROTATE_STEP_RAD: f64 = 0.5;
pub const ORBIT_ZOOM_STEP_M: f64 = 0.5;

// Radius clamp (meters). Fixed for the single model scale in use.
pub const ORBIT_MIN_RADIUS_M: f64 = 1.0;
pub const ORBIT_MAX_RADIUS_M: f64 = 10.0;

// Static viewer element attributes
pub const ENVIRONMENT_IMAGE: &str = "/Export.png";
pub const SHADOW_INTENSITY: &str = "1";
pub const TOUCH_ACTION: &str = "pan-y";
pub const INTERACTION_PROMPT: &str = "auto";
pub const AR_MODES: &str = "webxr scene-viewer quick-look";
pub const CAMERA_ORBIT_BOUNDS: &str = "auto auto auto";
pub const VIEWER_STYLE: &str = "width: 100%; height: 500px; background-color: transparent";

// DOM
pub const MODEL_VIEWER_TAG: &str = "model-viewer";
pub const APP_ROOT_ID: &str = "app";

pub const LOAD_FAILED_MESSAGE: &str = "Model failed to load";

// Condition panel shown under the viewer
pub const COMPONENT_INFO: [ComponentDescriptor; 4] = [
    ComponentDescriptor {
        icon: "📱",
        title: "Screen",
        description: "Flawless. No signs of use, no scratches, no nothing.",
    },
    ComponentDescriptor {
        icon: "📱",
        title: "Body",
        description: "Almost no signs of use. May have hairline scratches that are barely visible. You might strain your eyes just to spot them.",
    },
    ComponentDescriptor {
        icon: "⚙️",
        title: "Hardware",
        description: "100% fully functional. Tested, checked, and cleaned by professional refurbishers who are vetted by Back Market.",
    },
    ComponentDescriptor {
        icon: "🔋",
        title: "Battery",
        description: "Good health: minimum 80% battery capacity. Good performance for average daily use.",
    },
];
