#![cfg(target_arch = "wasm32")]
//! Browser host: wires page scrolling to the animation core and applies
//! the computed slide/list/reveal styles back to the document. Camera and
//! object parameters are published as CSS custom properties on the stage
//! element for the page's renderer to consume; rendering itself stays
//! outside this crate.

mod dom;
mod events;
mod frame;

use instant::Instant;
use scroll_core::progress::RenderGate;
use scroll_core::{AnimationConfig, ScrollAnimator};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scroll-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;

    let stage = dom::element_by_id(&document, "scroll-stage")
        .ok_or_else(|| anyhow::anyhow!("missing #scroll-stage"))?;

    let slides = dom::query_all(&document, ".slide");
    let list_items = dom::query_all(&document, ".scroll-list-item");
    let zoom_section = dom::query_all(&document, ".zoomed-text-section").into_iter().next();
    let zoom_text = dom::element_by_id(&document, "zoom-text");
    let curtains = match (
        dom::query_all(&document, ".curtain-left").into_iter().next(),
        dom::query_all(&document, ".curtain-right").into_iter().next(),
    ) {
        (Some(left), Some(right)) => Some((left, right)),
        _ => None,
    };
    let gallery_section = dom::query_all(&document, ".side-scroll").into_iter().next();
    let gallery_list = dom::query_all(&document, ".side-scroll-list").into_iter().next();

    log::info!(
        "stage ready: {} slides, {} list items",
        slides.len(),
        list_items.len()
    );

    let animator = ScrollAnimator::new(AnimationConfig::default(), slides.len())?;

    let scroll_offset = Rc::new(RefCell::new(dom::scroll_offset(&window)));
    let needs_render = Rc::new(RefCell::new(true));
    events::attach_scroll_listener(&window, scroll_offset.clone());
    events::attach_resize_listener(&window, needs_render.clone());

    let ctx = frame::FrameContext {
        animator,
        gate: RenderGate::new(),
        window,
        document,
        scroll_offset,
        needs_render,
        stage,
        slides,
        list_items,
        zoom_section,
        zoom_text,
        curtains,
        gallery_section,
        gallery_list,
        last_instant: Instant::now(),
    };
    frame::start_loop(Rc::new(RefCell::new(ctx)));
    Ok(())
}
