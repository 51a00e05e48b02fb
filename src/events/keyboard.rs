use crate::dom;
use crate::frame::FrameLoop;
use crate::input;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_global_keydown(document: &web::Document, frame_loop: Rc<FrameLoop>) {
    dom::add_listener(document, "keydown", move |ev| {
        let Some(key_ev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if input::is_playback_toggle(&key_ev.key(), &dom::target_tag(&ev)) {
            frame_loop.toggle();
            ev.prevent_default();
        }
    });
}
