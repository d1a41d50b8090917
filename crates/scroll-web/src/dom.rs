use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(el) = node.dyn_into::<web::HtmlElement>() {
                    out.push(el);
                }
            }
        }
    }
    out
}

pub fn element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn scroll_offset(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

/// (content height, viewport height) in CSS pixels.
pub fn scroll_extents(window: &web::Window, document: &web::Document) -> (f32, f32) {
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    let content = document
        .document_element()
        .map(|el| el.scroll_height())
        .unwrap_or(0) as f32;
    (content, viewport)
}

#[inline]
pub fn set_style(el: &web::HtmlElement, prop: &str, value: &str) {
    let _ = el.style().set_property(prop, value);
}

pub fn apply_slide(el: &web::HtmlElement, translate_x_pct: f32, opacity: f32) {
    set_style(el, "transform", &format!("translateX({translate_x_pct}%)"));
    set_style(el, "opacity", &format!("{opacity}"));
}

#[inline]
pub fn set_css_var(el: &web::HtmlElement, name: &str, value: f32) {
    let _ = el.style().set_property(name, &format!("{value}"));
}

/// Local progress of a pinned section: how far the viewport has scrolled
/// into the element's own range, 0 before it pins and 1 once it unpins.
pub fn section_progress(el: &web::HtmlElement, viewport_height: f32) -> f32 {
    let rect = el.get_bounding_client_rect();
    let span = rect.height() as f32 - viewport_height;
    if span <= 0.0 {
        return 0.0;
    }
    ((-rect.top() as f32) / span).clamp(0.0, 1.0)
}
