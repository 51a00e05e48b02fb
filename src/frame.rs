use crate::canvas::CanvasSurface;
use crate::hud::DomHud;
use crate::SharedApp;
use hgif_core::{AnimationDriver, RenderPipeline};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct FrameContext {
    pub app: SharedApp,
    pub driver: AnimationDriver,
    pub pipeline: RenderPipeline<CanvasSurface>,
    pub surface: CanvasSurface,
    pub hud: DomHud,
    pub started: Instant,
}

impl FrameContext {
    /// Draw one frame. Returns whether another frame should be scheduled.
    pub fn frame(&mut self) -> bool {
        let elapsed = self.started.elapsed().as_secs_f64();
        let app = self.app.borrow();
        self.driver
            .tick(&app, &self.pipeline, &mut self.surface, &mut self.hud, elapsed)
            .is_some()
    }
}

/// `requestAnimationFrame` loop around a [`FrameContext`].
pub struct FrameLoop {
    ctx: Rc<RefCell<FrameContext>>,
    tick: TickSlot,
}

impl FrameLoop {
    pub fn new(ctx: FrameContext) -> Rc<Self> {
        let ctx = Rc::new(RefCell::new(ctx));
        let tick: TickSlot = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        let ctx_tick = ctx.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let again = ctx_tick.borrow_mut().frame();
            if again {
                request_frame(&tick_clone, &ctx_tick);
            }
        }) as Box<dyn FnMut()>));
        Rc::new(Self { ctx, tick })
    }

    pub fn start(&self) {
        if self.ctx.borrow_mut().driver.start() {
            log::info!("[frame] playing");
            request_frame(&self.tick, &self.ctx);
        }
    }

    pub fn stop(&self) {
        let pending = self.ctx.borrow_mut().driver.stop();
        if let (Some(id), Some(w)) = (pending, web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        log::info!("[frame] paused");
    }

    pub fn toggle(&self) {
        let playing = self.ctx.borrow().driver.is_playing();
        if playing {
            self.stop();
        } else {
            self.start();
        }
    }
}

fn request_frame(tick: &TickSlot, ctx: &Rc<RefCell<FrameContext>>) {
    let Some(w) = web::window() else {
        return;
    };
    let slot = tick.borrow();
    let Some(callback) = slot.as_ref() else {
        return;
    };
    match w.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(id) => {
            if let Some(stale) = ctx.borrow_mut().driver.frame_requested(id) {
                // a frame was still queued; drop it so only one is in flight
                _ = w.cancel_animation_frame(stale);
            }
        }
        Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
    }
}
