use tilt_core::CssVars;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn document_has_focus(window: &web::Window) -> bool {
    window
        .document()
        .and_then(|d| d.has_focus().ok())
        .unwrap_or(false)
}

#[inline]
pub fn now_ms(window: &web::Window) -> f64 {
    window.performance().map(|p| p.now()).unwrap_or(0.0)
}

pub fn set_css_vars(el: &web::HtmlElement, vars: &CssVars) {
    let style = el.style();
    for (name, value) in vars {
        if let Err(e) = style.set_property(name, value) {
            log::warn!("[card] set {} failed: {:?}", name, e);
        }
    }
}

#[inline]
pub fn add_classes(el: &web::Element, classes: &[&str]) {
    let cl = el.class_list();
    for class in classes {
        _ = cl.add_1(class);
    }
}

#[inline]
pub fn remove_class(el: &web::Element, class: &str) {
    _ = el.class_list().remove_1(class);
}
