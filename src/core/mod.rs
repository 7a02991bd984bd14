//! Platform-independent viewer logic: presets, camera orbit math and the
//! viewer host state. Nothing in here touches the DOM, so it builds and
//! tests on the host as well as on `wasm32`.

pub mod descriptor;
pub mod error;
pub mod host;
pub mod orbit;
pub mod preset;

pub use descriptor::*;
pub use error::*;
pub use host::*;
pub use orbit::*;
pub use preset::*;
