use crate::app::AppState;
use crate::render::RenderPipeline;
use crate::repeat::RepeatHandle;
use crate::strategy::{Layer, Strategy};
use crate::surface::Surface;

/// Receives the strategy chosen for each drawn frame.
pub trait HudSink {
    fn update_hud(&mut self, strategy: &Strategy);
}

impl<F> HudSink for F
where
    F: FnMut(&Strategy),
{
    fn update_hud(&mut self, strategy: &Strategy) {
        self(strategy)
    }
}

/// Cooperative per-frame loop state. The host owns the actual scheduling
/// (`requestAnimationFrame` on the web); the driver owns the playing flag and
/// the pending frame id so a stop always cancels the outstanding callback.
#[derive(Debug, Default)]
pub struct AnimationDriver {
    playing: bool,
    pending: RepeatHandle,
    frames_drawn: u64,
    last_layer: Option<Layer>,
}

impl AnimationDriver {
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Returns true when playback was stopped and the host must request the
    /// first frame.
    pub fn start(&mut self) -> bool {
        !std::mem::replace(&mut self.playing, true)
    }

    /// Clear the playing flag. Returns the pending frame id to cancel.
    pub fn stop(&mut self) -> Option<i32> {
        self.playing = false;
        self.pending.disarm()
    }

    /// Record the id of the frame the host just requested. A stale id that
    /// was still pending is handed back for cancellation.
    pub fn frame_requested(&mut self, id: i32) -> Option<i32> {
        self.pending.arm(id)
    }

    /// Run one frame: strategy from current state, render, HUD. Returns the
    /// strategy drawn, or `None` when stopped (nothing is drawn then).
    pub fn tick<S: Surface>(
        &mut self,
        app: &AppState<S::Image>,
        pipeline: &RenderPipeline<S>,
        surface: &mut S,
        hud: &mut impl HudSink,
        elapsed_sec: f64,
    ) -> Option<Strategy> {
        self.pending.disarm();
        if !self.playing {
            return None;
        }
        let strategy = app.strategy();
        if self.last_layer != Some(strategy.layer) {
            log::debug!(
                "[frame] layer {} ({} @ {} Mbps)",
                strategy.layer,
                strategy.quality_label,
                app.bandwidth_mbps()
            );
            self.last_layer = Some(strategy.layer);
        }
        pipeline.render(surface, strategy, elapsed_sec, &app.playback);
        hud.update_hud(&strategy);
        self.frames_drawn += 1;
        Some(strategy)
    }
}
