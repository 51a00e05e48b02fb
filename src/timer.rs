use hgif_core::RepeatHandle;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A `setInterval` timer whose id is tracked so it can always be cleared.
#[derive(Default)]
pub struct Interval {
    name: &'static str,
    handle: RepeatHandle,
    // Held until the next `arm`: `disarm` may run from inside this callback.
    callback: Option<Closure<dyn FnMut()>>,
}

impl Interval {
    pub fn named(name: &'static str) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    /// Start firing `f` every `every_ms`, clearing any earlier timer first.
    pub fn arm(&mut self, every_ms: i32, f: impl FnMut() + 'static) {
        self.disarm();
        let Some(w) = web::window() else {
            return;
        };
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        match w.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            every_ms,
        ) {
            Ok(id) => {
                self.handle.arm(id);
                self.callback = Some(callback);
                log::debug!("[timer] {} armed as {id} every {every_ms} ms", self.name);
            }
            Err(e) => log::error!("[timer] {} could not be armed: {:?}", self.name, e),
        }
    }

    pub fn disarm(&mut self) {
        if let Some(id) = self.handle.disarm() {
            if let Some(w) = web::window() {
                w.clear_interval_with_handle(id);
            }
            log::debug!("[timer] {} cleared ({id})", self.name);
        }
    }
}
