use crate::core::{OrbitAction, OrbitController, ViewerHost};
use crate::dom;
use crate::model_viewer::ModelViewerElement;
use crate::ui;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub type SharedHost = Rc<RefCell<ViewerHost<ModelViewerElement>>>;
pub type SharedController = Rc<RefCell<OrbitController<ModelViewerElement>>>;

pub fn wire_preset_buttons(
    buttons: Rc<Vec<(&'static str, web::Element)>>,
    host: SharedHost,
    status: web::Element,
) {
    for (name, btn) in buttons.iter() {
        let name = *name;
        let buttons = buttons.clone();
        let host = host.clone();
        let status = status.clone();
        dom::add_click_listener(btn, move || {
            let result = host.borrow_mut().select_preset(name);
            match result {
                Ok(preset) => {
                    ui::sync_active_preset(&buttons, preset.name);
                    ui::show_load_state(&status, host.borrow().load_state());
                }
                Err(e) => log::error!("{}", e),
            }
        });
    }
}

pub fn wire_orbit_buttons(buttons: &[(OrbitAction, web::Element)], controller: SharedController) {
    for (action, btn) in buttons {
        let action = *action;
        let controller = controller.clone();
        dom::add_click_listener(btn, move || {
            if controller.borrow().apply(action).is_none() && !controller.borrow().is_ready() {
                log::debug!("[orbit] {:?} ignored, viewer not ready", action);
            }
        });
    }
}

/// Track the viewer's `load`/`error` events so a failed model shows up as a
/// status message. Nothing is retried.
pub fn wire_load_events(viewer: &ModelViewerElement, host: SharedHost, status: web::Element) {
    let host_ok = host.clone();
    let status_ok = status.clone();
    dom::add_listener(viewer.element(), "load", move || {
        host_ok.borrow_mut().model_loaded();
        ui::show_load_state(&status_ok, host_ok.borrow().load_state());
    });

    dom::add_listener(viewer.element(), "error", move || {
        host.borrow_mut().model_failed();
        ui::show_load_state(&status, host.borrow().load_state());
    });
}
