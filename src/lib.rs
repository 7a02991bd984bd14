pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod model_viewer;
#[cfg(target_arch = "wasm32")]
mod ui;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::constants::{APP_ROOT_ID, DEFAULT_PRESET, QUALITY_PRESETS};
    use crate::core::{OrbitController, ViewerConfig, ViewerHost};
    use crate::model_viewer::{self, ModelViewerElement};
    use crate::{events, ui};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("phone-viewer starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    async fn init() -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let root = document
            .get_element_by_id(APP_ROOT_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", APP_ROOT_ID))?;

        let mut host = ViewerHost::new(QUALITY_PRESETS, DEFAULT_PRESET, ViewerConfig::default())?;
        let viewer = ModelViewerElement::create(&document)
            .map_err(|e| anyhow::anyhow!("create viewer: {:?}", e))?;
        // Attributes go on before the element is connected so the first load
        // already uses the selected preset.
        host.mount(viewer.clone());

        let page = ui::build_page(&document, &root, host.presets(), viewer.element())
            .map_err(|e| anyhow::anyhow!("build page: {:?}", e))?;
        ui::sync_active_preset(&page.preset_buttons, host.selected().name);
        ui::show_load_state(&page.status, host.load_state());
        log::info!("[viewer] preset={}", host.selected().name);

        let host = Rc::new(RefCell::new(host));
        let controller = Rc::new(RefCell::new(OrbitController::new()));

        events::wire_load_events(&viewer, host.clone(), page.status.clone());
        events::wire_orbit_buttons(&page.orbit_buttons, controller.clone());
        events::wire_preset_buttons(Rc::new(page.preset_buttons), host, page.status);

        // Orbit buttons stay inert until the element is upgraded and its
        // camera API exists.
        model_viewer::when_defined(&window)
            .await
            .map_err(|e| anyhow::anyhow!("waiting for <model-viewer>: {:?}", e))?;
        controller.borrow_mut().attach(viewer);
        log::info!("[viewer] ready");
        Ok(())
    }
}
