//! Headless driver: sweeps a synthetic scroll timeline through the
//! animation core at a fixed step count and reports what happened. Used
//! for eyeballing transition timing and smoothing lag without a browser.

use std::time::Instant;

use anyhow::Result;
use scroll_core::{AnimationConfig, ScrollAnimator, SlideEdge, TransitionEvent};

const DEFAULT_STEPS: u32 = 600;
const SLIDE_COUNT: usize = 3;

fn main() -> Result<()> {
    env_logger::init();

    let steps: u32 = std::env::args()
        .nth(1)
        .map(|s| s.parse())
        .transpose()?
        .unwrap_or(DEFAULT_STEPS)
        .max(1);

    let config = AnimationConfig::default();
    let mut animator = ScrollAnimator::new(config, SLIDE_COUNT)?;

    let started = Instant::now();
    let mut sequence_changes = 0u32;
    let mut slide_edges = 0u32;
    let mut last_frame = None;

    for step in 0..=steps {
        let progress = step as f32 / steps as f32;
        let frame = animator.advance(progress);
        for event in &frame.events {
            match event {
                TransitionEvent::SequenceChanged { from, to } => {
                    sequence_changes += 1;
                    log::info!("step {step} (progress {progress:.3}): sequence {from} -> {to}");
                }
                TransitionEvent::Slide(SlideEdge::Entered(index)) => {
                    slide_edges += 1;
                    log::info!("step {step} (progress {progress:.3}): slide {index} entered");
                }
                TransitionEvent::Slide(SlideEdge::Left(index)) => {
                    slide_edges += 1;
                    log::info!("step {step} (progress {progress:.3}): slide {index} left");
                }
            }
        }
        last_frame = Some(frame);
    }

    let frame = last_frame.expect("at least one step");
    println!("swept {} frames in {:?}", steps + 1, started.elapsed());
    println!("sequence changes: {sequence_changes}, slide edges: {slide_edges}");
    println!(
        "final camera distance {:.3} (resting {:.3}), rotation {:.3} rad, vertical {:.3}",
        frame.camera_distance,
        animator.config().zoomed_out,
        frame.object.rotation_y,
        frame.object.position_y,
    );

    Ok(())
}
