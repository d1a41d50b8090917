//! Pinned-section effects: the zoom-through-text reveal and the
//! horizontal gallery. Both take the local progress of their own pinned
//! range, not the page-wide progress.

use crate::ease::ease_in_out_quad;

/// Scale the text reaches at the end of the reveal.
pub const TEXT_ZOOM_MAX_SCALE: f32 = 23.0;

// Segment layout within the pinned range. The curtains start opening
// while the zoom is still running.
const ZOOM_SEGMENT_END: f32 = 0.6;
const CURTAIN_SEGMENT_START: f32 = 0.36;
const CURTAIN_SEGMENT_LEN: f32 = 0.6;

/// Parameters for the zoom-through-text reveal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextZoom {
    /// Uniform scale applied to the text block.
    pub scale: f32,
    /// Width of each side curtain as a percentage of the viewport.
    pub curtain_width_pct: f32,
}

/// Text scale and curtain widths at `progress` through the pinned range.
pub fn text_zoom(progress: f32) -> TextZoom {
    let p = progress.clamp(0.0, 1.0);
    let zoom_t = (p / ZOOM_SEGMENT_END).clamp(0.0, 1.0);
    let scale = 1.0 + (TEXT_ZOOM_MAX_SCALE - 1.0) * ease_in_out_quad(zoom_t);
    let curtain_t = ((p - CURTAIN_SEGMENT_START) / CURTAIN_SEGMENT_LEN).clamp(0.0, 1.0);
    let curtain_width_pct = 50.0 * (1.0 - ease_in_out_quad(curtain_t));
    TextZoom {
        scale,
        curtain_width_pct,
    }
}

/// Horizontal offset for a pinned side-scroll gallery: progress maps
/// linearly onto the overflow width. Zero when the content already fits
/// in the viewport.
pub fn horizontal_offset(progress: f32, content_extent: f32, viewport_extent: f32) -> f32 {
    let overflow = content_extent - viewport_extent;
    if overflow <= 0.0 {
        return 0.0;
    }
    -progress.clamp(0.0, 1.0) * overflow
}
