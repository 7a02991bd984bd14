use crate::constants::{COMPONENT_INFO, LOAD_FAILED_MESSAGE};
use crate::core::{LoadState, OrbitAction, QualityPreset};
use crate::dom;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Handles to the interactive parts of the page.
pub struct Page {
    pub preset_buttons: Vec<(&'static str, web::Element)>,
    pub orbit_buttons: Vec<(OrbitAction, web::Element)>,
    pub status: web::Element,
}

/// (class, icon, label) for each orbit button.
fn orbit_button_parts(action: OrbitAction) -> (&'static str, &'static str, Option<&'static str>) {
    match action {
        OrbitAction::RotateLeft => ("control-btn left", "↻", Some("Turn left")),
        OrbitAction::Reset => ("control-btn reset", "⟲", Some("Reset")),
        OrbitAction::RotateRight => ("control-btn right", "↺", Some("Turn right")),
        OrbitAction::ZoomIn => ("zoom-btn zoom-in", "+", None),
        OrbitAction::ZoomOut => ("zoom-btn zoom-out", "−", None),
    }
}

/// Build the viewer page under `root`, embedding `viewer`.
pub fn build_page(
    document: &web::Document,
    root: &web::Element,
    presets: &[QualityPreset],
    viewer: &web::HtmlElement,
) -> Result<Page, JsValue> {
    let page = dom::create_element(document, "div", "phone-viewer", None)?;

    let selector = dom::create_element(document, "div", "quality-selector", None)?;
    let mut preset_buttons = Vec::with_capacity(presets.len());
    for preset in presets {
        let btn = dom::create_element(document, "button", "quality-btn", Some(preset.name))?;
        selector.append_child(&btn)?;
        preset_buttons.push((preset.name, btn));
    }
    page.append_child(&selector)?;

    let container = dom::create_element(document, "div", "model-container", None)?;
    container.append_child(viewer)?;

    let mut orbit_buttons = Vec::with_capacity(5);
    for (group_class, icon_class, text_class, actions) in [
        ("controls", "control-icon", "control-text", &OrbitAction::ROTATION[..]),
        ("zoom-controls", "zoom-icon", "", &OrbitAction::ZOOM[..]),
    ] {
        let group = dom::create_element(document, "div", group_class, None)?;
        for &action in actions {
            let (class, icon, label) = orbit_button_parts(action);
            let btn = dom::create_element(document, "button", class, None)?;
            btn.append_child(&dom::create_element(document, "span", icon_class, Some(icon))?)?;
            if let Some(label) = label {
                btn.append_child(&dom::create_element(document, "span", text_class, Some(label))?)?;
            }
            group.append_child(&btn)?;
            orbit_buttons.push((action, btn));
        }
        container.append_child(&group)?;
    }

    let status = dom::create_element(document, "p", "model-status", None)?;
    container.append_child(&status)?;
    page.append_child(&container)?;

    page.append_child(&component_info(document)?)?;
    root.append_child(&page)?;

    Ok(Page {
        preset_buttons,
        orbit_buttons,
        status,
    })
}

fn component_info(document: &web::Document) -> Result<web::Element, JsValue> {
    let info = dom::create_element(document, "div", "component-info", None)?;
    for item in &COMPONENT_INFO {
        let entry = dom::create_element(document, "div", "component-item", None)?;
        let header = dom::create_element(document, "div", "component-header", None)?;
        header.append_child(&dom::create_element(document, "span", "component-icon", Some(item.icon))?)?;
        header.append_child(&dom::create_element(document, "h3", "component-title", Some(item.title))?)?;
        entry.append_child(&header)?;
        entry.append_child(&dom::create_element(
            document,
            "p",
            "component-description",
            Some(item.description),
        )?)?;
        info.append_child(&entry)?;
    }
    Ok(info)
}

/// Mark exactly the selected preset button as active.
pub fn sync_active_preset(buttons: &[(&'static str, web::Element)], selected: &str) {
    for (name, btn) in buttons {
        dom::set_class(btn, "active", *name == selected);
    }
}

pub fn show_load_state(status: &web::Element, state: LoadState) {
    let failed = state == LoadState::Failed;
    status.set_text_content(failed.then_some(LOAD_FAILED_MESSAGE));
    dom::set_class(status, "hidden", !failed);
}
