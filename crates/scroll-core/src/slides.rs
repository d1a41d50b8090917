//! Slide windows, focus tracking, and list dimming.

use smallvec::SmallVec;

use crate::constants::{LIST_DIM_OPACITY, SLIDE_ENTRY_END, SLIDE_EXIT_START};

/// Positional/opacity state for one slide in the sequence. Recomputed
/// from scratch every evaluation; no smoothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideState {
    pub index: usize,
    /// Horizontal translation as a percentage of the slide's own width.
    /// +100 is parked off-screen right, -100 fully exited left.
    pub translate_x_pct: f32,
    pub opacity: f32,
}

/// Index of the slide whose window contains `progress`, or `None` for an
/// empty sequence. A progress exactly on a window boundary belongs to the
/// later slide (floor semantics).
pub fn active_slide(progress: f32, slide_count: usize) -> Option<usize> {
    if slide_count == 0 {
        return None;
    }
    let p = progress.clamp(0.0, 1.0);
    Some(((p * slide_count as f32).floor() as usize).min(slide_count - 1))
}

/// Per-slide transform/opacity for the whole sequence at `progress`.
///
/// Each slide owns an equal-width window of progress. The active slide
/// runs entry (slide in from the right, fade in), steady, and exit
/// (slide out left, fade out) sub-phases within its window; every other
/// slide is parked fully off-screen on the side it exits/enters from.
pub fn slide_states(progress: f32, slide_count: usize) -> SmallVec<[SlideState; 4]> {
    let mut out = SmallVec::new();
    let Some(active) = active_slide(progress, slide_count) else {
        return out;
    };
    let p = progress.clamp(0.0, 1.0);
    let window = 1.0 / slide_count as f32;
    for index in 0..slide_count {
        let state = if index == active {
            let local = ((p - index as f32 * window) / window).clamp(0.0, 1.0);
            if local < SLIDE_ENTRY_END {
                let t = local / SLIDE_ENTRY_END;
                SlideState {
                    index,
                    translate_x_pct: 100.0 - t * 100.0,
                    opacity: t,
                }
            } else if local < SLIDE_EXIT_START {
                SlideState {
                    index,
                    translate_x_pct: 0.0,
                    opacity: 1.0,
                }
            } else {
                let t = (local - SLIDE_EXIT_START) / (1.0 - SLIDE_EXIT_START);
                SlideState {
                    index,
                    translate_x_pct: -100.0 * t,
                    opacity: 1.0 - t,
                }
            }
        } else if index < active {
            SlideState {
                index,
                translate_x_pct: -100.0,
                opacity: 0.0,
            }
        } else {
            SlideState {
                index,
                translate_x_pct: 100.0,
                opacity: 0.0,
            }
        };
        out.push(state);
    }
    out
}

/// Discrete active-slide transitions. Emitted once per boundary crossing
/// so the presentation layer can apply them idempotently instead of
/// mutating the document from inside the animation math.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideEdge {
    Entered(usize),
    Left(usize),
}

/// Cross-frame memory of the active slide.
#[derive(Clone, Debug, Default)]
pub struct SlideTracker {
    active: Option<usize>,
}

impl SlideTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Record the active slide for this frame, returning the edges
    /// crossed since the last one. Same index twice returns nothing.
    pub fn observe(&mut self, active: Option<usize>) -> SmallVec<[SlideEdge; 2]> {
        let mut edges = SmallVec::new();
        if active == self.active {
            return edges;
        }
        if let Some(prev) = self.active {
            edges.push(SlideEdge::Left(prev));
        }
        if let Some(next) = active {
            edges.push(SlideEdge::Entered(next));
        }
        self.active = active;
        edges
    }
}

/// Per-item opacity for a scroll-focused list.
///
/// The item nearest the focus point is fully opaque and neighbors
/// cross-fade linearly down to a dim floor, so focus hands over smoothly
/// as the scroll moves through the list. The first and last items are
/// fully lit at the scroll extremes.
pub fn list_focus(progress: f32, item_count: usize) -> SmallVec<[f32; 8]> {
    let mut out = SmallVec::new();
    if item_count == 0 {
        return out;
    }
    let p = progress.clamp(0.0, 1.0);
    let pos = (p * item_count as f32 - 0.5).clamp(0.0, (item_count - 1) as f32);
    for index in 0..item_count {
        let d = (pos - index as f32).abs().min(1.0);
        out.push(1.0 - (1.0 - LIST_DIM_OPACITY) * d);
    }
    out
}
