//! Binding to the `<model-viewer>` custom element.
//!
//! The element exposes its camera API as plain JS properties and methods,
//! so everything here goes through `js_sys::Reflect` rather than typed
//! bindings.

use crate::constants::MODEL_VIEWER_TAG;
use crate::core::{CameraOrbit, ModelViewer, OrbitTarget};
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[derive(Clone)]
pub struct ModelViewerElement {
    el: web::HtmlElement,
}

impl ModelViewerElement {
    pub fn create(document: &web::Document) -> Result<Self, JsValue> {
        let el = document
            .create_element(MODEL_VIEWER_TAG)?
            .dyn_into::<web::HtmlElement>()
            .map_err(JsValue::from)?;
        Ok(Self { el })
    }

    #[inline]
    pub fn element(&self) -> &web::HtmlElement {
        &self.el
    }
}

impl ModelViewer for ModelViewerElement {
    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(e) = self.el.set_attribute(name, value) {
            log::warn!("[viewer] set {}: {:?}", name, e);
        }
    }
}

impl OrbitTarget for ModelViewerElement {
    fn orbit(&self) -> Option<CameraOrbit> {
        let spherical = match call_method(&self.el, "getCameraOrbit", &[]) {
            Ok(v) => v,
            Err(e) => {
                log::warn!("[viewer] getCameraOrbit: {:?}", e);
                return None;
            }
        };
        Some(CameraOrbit::new(
            number_field(&spherical, "theta")?,
            number_field(&spherical, "phi")?,
            number_field(&spherical, "radius")?,
        ))
    }

    fn set_orbit(&self, orbit: CameraOrbit) {
        let value = JsValue::from_str(&orbit.to_string());
        if let Err(e) = Reflect::set(&self.el, &JsValue::from_str("cameraOrbit"), &value) {
            log::warn!("[viewer] set cameraOrbit: {:?}", e);
        }
    }

    fn reset_orbit(&self) {
        if let Err(e) = call_method(&self.el, "resetTurntableRotation", &[]) {
            log::warn!("[viewer] resetTurntableRotation: {:?}", e);
        }
    }
}

/// Resolves once the `<model-viewer>` element class is registered, i.e. once
/// the element's methods can be called.
pub async fn when_defined(window: &web::Window) -> Result<(), JsValue> {
    let registry = window.custom_elements();
    let promise = call_method(&registry, "whenDefined", &[JsValue::from_str(MODEL_VIEWER_TAG)])?
        .dyn_into::<Promise>()?;
    JsFuture::from(promise).await?;
    Ok(())
}

fn call_method(target: &JsValue, name: &str, args: &[JsValue]) -> Result<JsValue, JsValue> {
    let func = Reflect::get(target, &JsValue::from_str(name))?.dyn_into::<Function>()?;
    match args {
        [] => func.call0(target),
        [a] => func.call1(target, a),
        _ => func.apply(target, &args.iter().collect::<js_sys::Array>()),
    }
}

#[inline]
fn number_field(obj: &JsValue, key: &str) -> Option<f64> {
    Reflect::get(obj, &JsValue::from_str(key)).ok()?.as_f64()
}
