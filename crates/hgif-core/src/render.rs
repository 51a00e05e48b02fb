//! Per-frame render pipeline.
//!
//! A frame is an ordered list of stages (background, particles, focal content,
//! processing overlay) drawn onto any [`Surface`]. All motion is a pure
//! function of elapsed time and index, so no per-particle state is kept.

use crate::config::DemoConfig;
use crate::constants::*;
use crate::playback::PlaybackState;
use crate::strategy::Strategy;
use crate::surface::{stops, Paint, Surface, TextAlign};
use glam::DVec2;
use std::f64::consts::TAU;

/// Everything a stage may read for one frame.
pub struct FrameInput<'a, I> {
    pub strategy: Strategy,
    pub elapsed_sec: f64,
    pub playback: &'a PlaybackState<I>,
}

pub trait RenderStage<S: Surface> {
    fn name(&self) -> &'static str;
    fn draw(&self, frame: &FrameInput<'_, S::Image>, surface: &mut S);
}

pub struct RenderPipeline<S: Surface> {
    stages: Vec<Box<dyn RenderStage<S>>>,
}

impl<S: Surface> RenderPipeline<S> {
    pub fn empty() -> Self {
        Self { stages: Vec::new() }
    }

    /// Background, particles, focal content, then the processing overlay.
    pub fn standard(config: &DemoConfig) -> Self {
        Self::empty()
            .with_stage(Background)
            .with_stage(Particles {
                count_l2: config.particles_l2,
                count_base: config.particles_base,
            })
            .with_stage(FocalContent)
            .with_stage(ProcessingOverlay)
    }

    pub fn with_stage(mut self, stage: impl RenderStage<S> + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    pub fn render(
        &self,
        surface: &mut S,
        strategy: Strategy,
        elapsed_sec: f64,
        playback: &PlaybackState<S::Image>,
    ) {
        let frame = FrameInput {
            strategy,
            elapsed_sec,
            playback,
        };
        for stage in &self.stages {
            stage.draw(&frame, surface);
        }
    }
}

#[inline]
pub fn particle_position(index: usize, t: f64, canvas: DVec2) -> DVec2 {
    let i = index as f64;
    let x = ((t * 0.5 + i * 0.3).sin() * 0.5 + 0.5) * canvas.x;
    let y = ((t * 0.3 + i * 0.5).cos() * 0.5 + 0.5) * canvas.y;
    DVec2::new(x, y)
}

#[inline]
pub fn focal_radius(t: f64) -> f64 {
    FOCAL_RADIUS + (t * 2.0).sin() * FOCAL_PULSE
}

fn accent_gradient(from: DVec2, to: DVec2) -> Paint {
    Paint::Linear {
        from,
        to,
        stops: stops(&[(0.0, ACCENT_PURPLE), (1.0, ACCENT_CYAN)]),
    }
}

pub struct Background;

impl<S: Surface> RenderStage<S> for Background {
    fn name(&self) -> &'static str {
        "background"
    }

    fn draw(&self, frame: &FrameInput<'_, S::Image>, surface: &mut S) {
        let size = surface.size();
        let stop_list = if frame.strategy.layer.is_high_fidelity() {
            stops(&BG_L2_STOPS)
        } else {
            stops(&BG_BASE_STOPS)
        };
        let paint = Paint::Linear {
            from: DVec2::ZERO,
            to: size,
            stops: stop_list,
        };
        surface.fill_rect(DVec2::ZERO, size, &paint);
    }
}

pub struct Particles {
    pub count_l2: usize,
    pub count_base: usize,
}

impl<S: Surface> RenderStage<S> for Particles {
    fn name(&self) -> &'static str {
        "particles"
    }

    fn draw(&self, frame: &FrameInput<'_, S::Image>, surface: &mut S) {
        let size = surface.size();
        let t = frame.elapsed_sec;
        let hi = frame.strategy.layer.is_high_fidelity();
        let (count, alpha) = if hi {
            (self.count_l2, PARTICLE_ALPHA_L2)
        } else {
            (self.count_base, PARTICLE_ALPHA_BASE)
        };
        let (r, g, b) = PARTICLE_RGB;
        let paint = Paint::rgba(r, g, b, alpha);
        surface.save();
        for i in 0..count {
            let radius = if hi {
                PARTICLE_RADIUS_L2 + (t + i as f64).sin() * PARTICLE_RADIUS_SWING
            } else {
                PARTICLE_RADIUS_BASE
            };
            surface.fill_circle(particle_position(i, t, size), radius, &paint);
        }
        surface.restore();
    }
}

/// Default animated object when nothing is uploaded, or the finished image.
/// While an upload is processing the overlay stage owns the frame.
pub struct FocalContent;

impl FocalContent {
    fn draw_default_object<S: Surface>(&self, strategy: &Strategy, t: f64, surface: &mut S) {
        let size = surface.size();
        let center = size * 0.5;
        let radius = focal_radius(t);

        if strategy.layer.is_high_fidelity() {
            let glow = Paint::Radial {
                center,
                inner_radius: 0.0,
                outer_radius: radius * 2.0,
                stops: stops(&[(0.0, GLOW_INNER), (1.0, "transparent")]),
            };
            surface.fill_rect(DVec2::ZERO, size, &glow);
        }

        let r = DVec2::splat(radius);
        surface.fill_circle(center, radius, &accent_gradient(center - r, center + r));

        // Two counter-rotating ring accents
        let rings = [
            (RING_GAP, t * 1.2, ACCENT_PURPLE),
            (RING_GAP + RING_SPACING, -t * 0.8, ACCENT_CYAN),
        ];
        for (gap, start, color) in rings {
            let start = start.rem_euclid(TAU);
            surface.stroke_arc(
                center,
                radius + gap,
                start,
                start + RING_SWEEP,
                RING_LINE_WIDTH,
                &Paint::solid(color),
            );
        }

        surface.fill_text(
            FOCAL_LABEL,
            center + DVec2::new(0.0, 8.0),
            FONT_FOCAL,
            TextAlign::Center,
            &Paint::solid("white"),
        );
    }
}

impl<S: Surface> RenderStage<S> for FocalContent {
    fn name(&self) -> &'static str {
        "focal"
    }

    fn draw(&self, frame: &FrameInput<'_, S::Image>, surface: &mut S) {
        let Some(image) = frame.playback.uploaded_image.as_ref() else {
            self.draw_default_object(&frame.strategy, frame.elapsed_sec, surface);
            return;
        };
        if frame.playback.is_processing() {
            return;
        }
        let (origin, size) = image.fitted_rect(surface.size(), IMAGE_FIT);
        let hi = frame.strategy.layer.is_high_fidelity();

        surface.save();
        if hi {
            surface.set_shadow(ENHANCED_SHADOW_BLUR, GLOW_SHADOW);
            surface.set_filter(ENHANCED_FILTER);
        } else {
            surface.set_filter(STANDARD_FILTER);
        }
        surface.draw_image(&image.handle, origin, size);
        surface.restore();

        let (label, color) = if hi {
            (LABEL_HIGH_FIDELITY, ACCENT_PURPLE)
        } else {
            (LABEL_STANDARD, MUTED_GREY)
        };
        surface.fill_text(
            label,
            origin + size - DVec2::splat(LABEL_INSET),
            FONT_LABEL,
            TextAlign::Right,
            &Paint::solid(color),
        );
    }
}

pub struct ProcessingOverlay;

impl<S: Surface> RenderStage<S> for ProcessingOverlay {
    fn name(&self) -> &'static str {
        "overlay"
    }

    fn draw(&self, frame: &FrameInput<'_, S::Image>, surface: &mut S) {
        if frame.playback.uploaded_image.is_none() || !frame.playback.is_processing() {
            return;
        }
        let size = surface.size();
        surface.save();
        surface.fill_rect(DVec2::ZERO, size, &Paint::solid(OVERLAY_DIM));

        let bar_w = size.x * PROGRESS_WIDTH_FRACTION;
        let bar_origin = DVec2::new((size.x - bar_w) * 0.5, size.y * 0.5);
        surface.fill_rect(
            bar_origin,
            DVec2::new(bar_w, PROGRESS_HEIGHT),
            &Paint::solid(PROGRESS_TRACK),
        );

        let fraction = f64::from(frame.playback.progress_percent()) / 100.0;
        surface.fill_rect(
            bar_origin,
            DVec2::new(bar_w * fraction, PROGRESS_HEIGHT),
            &accent_gradient(bar_origin, bar_origin + DVec2::new(bar_w, 0.0)),
        );

        surface.fill_text(
            PROGRESS_CAPTION,
            DVec2::new(size.x * 0.5, bar_origin.y - PROGRESS_CAPTION_OFFSET),
            FONT_CAPTION,
            TextAlign::Center,
            &Paint::solid("white"),
        );
        surface.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particles_stay_inside_the_canvas() {
        let canvas = DVec2::new(640.0, 360.0);
        for i in 0..50 {
            for step in 0..40 {
                let p = particle_position(i, step as f64 * 0.37, canvas);
                assert!(p.x >= 0.0 && p.x <= canvas.x);
                assert!(p.y >= 0.0 && p.y <= canvas.y);
            }
        }
    }

    #[test]
    fn particle_position_is_a_pure_function() {
        let canvas = DVec2::new(100.0, 100.0);
        assert_eq!(
            particle_position(7, 3.25, canvas),
            particle_position(7, 3.25, canvas)
        );
    }

    #[test]
    fn focal_radius_pulses_between_sixty_and_hundred() {
        for step in 0..100 {
            let r = focal_radius(step as f64 * 0.1);
            assert!((60.0..=100.0).contains(&r));
        }
    }
}
