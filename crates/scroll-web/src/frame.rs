use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use scroll_core::pinned;
use scroll_core::progress::{self, RenderGate};
use scroll_core::slides::list_focus;
use scroll_core::{ScrollAnimator, SlideEdge, TransitionEvent};

use crate::dom;

pub struct FrameContext {
    pub animator: ScrollAnimator,
    pub gate: RenderGate,

    pub window: web::Window,
    pub document: web::Document,
    pub scroll_offset: Rc<RefCell<f32>>,
    pub needs_render: Rc<RefCell<bool>>,

    pub stage: web::HtmlElement,
    pub slides: Vec<web::HtmlElement>,
    pub list_items: Vec<web::HtmlElement>,
    pub zoom_section: Option<web::HtmlElement>,
    pub zoom_text: Option<web::HtmlElement>,
    pub curtains: Option<(web::HtmlElement, web::HtmlElement)>,
    pub gallery_section: Option<web::HtmlElement>,
    pub gallery_list: Option<web::HtmlElement>,

    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let elapsed = (now - self.last_instant).as_secs_f32();

        let offset = *self.scroll_offset.borrow();
        let (content, viewport) = dom::scroll_extents(&self.window, &self.document);
        let progress = progress::normalized(offset, content, viewport);

        let forced = std::mem::take(&mut *self.needs_render.borrow_mut());
        let animating = forced || self.animator.is_settling(progress);
        if !self.gate.should_render(offset, animating, elapsed) {
            return;
        }
        self.last_instant = now;

        let frame = self.animator.advance(progress);

        // Publish camera/object parameters for the page's renderer.
        dom::set_css_var(&self.stage, "--camera-distance", frame.camera_distance);
        dom::set_css_var(&self.stage, "--object-rotation-y", frame.object.rotation_y);
        dom::set_css_var(&self.stage, "--object-position-y", frame.object.position_y);

        for state in &frame.slides {
            if let Some(el) = self.slides.get(state.index) {
                dom::apply_slide(el, state.translate_x_pct, state.opacity);
            }
        }

        if !self.list_items.is_empty() {
            let focus = list_focus(progress, self.list_items.len());
            for (el, opacity) in self.list_items.iter().zip(focus.iter()) {
                dom::set_style(el, "opacity", &format!("{opacity}"));
            }
        }

        if let (Some(section), Some(text)) = (&self.zoom_section, &self.zoom_text) {
            let local = dom::section_progress(section, viewport);
            let zoom = pinned::text_zoom(local);
            dom::set_style(text, "transform", &format!("scale({})", zoom.scale));
            if let Some((left, right)) = &self.curtains {
                dom::set_style(left, "width", &format!("{}%", zoom.curtain_width_pct));
                dom::set_style(right, "width", &format!("{}%", zoom.curtain_width_pct));
            }
        }

        if let (Some(section), Some(list)) = (&self.gallery_section, &self.gallery_list) {
            let local = dom::section_progress(section, viewport);
            let viewport_w = self
                .window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0) as f32;
            let x = pinned::horizontal_offset(local, list.scroll_width() as f32, viewport_w);
            dom::set_style(list, "transform", &format!("translateX({x}px)"));
        }

        for event in &frame.events {
            match event {
                TransitionEvent::SequenceChanged { from, to } => {
                    log::info!("sequence {from} -> {to}");
                }
                TransitionEvent::Slide(SlideEdge::Entered(index)) => {
                    let _ = self.stage.set_attribute("data-active-slide", &index.to_string());
                }
                TransitionEvent::Slide(SlideEdge::Left(_)) => {}
            }
        }

        self.gate.mark_rendered(offset);
    }
}

/// Drive `FrameContext::frame` from requestAnimationFrame until the page
/// goes away.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
