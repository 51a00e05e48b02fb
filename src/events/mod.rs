pub mod controls;
pub mod keyboard;
pub mod upload;

use crate::constants::*;
use crate::dom;
use crate::input;
use crate::timer::Interval;
use crate::SharedApp;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub use controls::wire_controls;
pub use keyboard::wire_global_keydown;
pub use upload::{wire_download, wire_upload};

/// Handles every control handler needs; cloned into each closure.
#[derive(Clone)]
pub struct Ui {
    pub app: SharedApp,
    pub document: web::Document,
    pub slider: web::HtmlInputElement,
    pub auto_switch: web::HtmlInputElement,
    pub download_btn: Option<web::HtmlButtonElement>,
    pub auto_timer: Rc<RefCell<Interval>>,
    pub progress_timer: Rc<RefCell<Interval>>,
}

impl Ui {
    pub fn new(app: SharedApp, document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            app,
            document: document.clone(),
            slider: dom::element(document, ID_BANDWIDTH_SLIDER)?,
            auto_switch: dom::element(document, ID_AUTO_MODE)?,
            download_btn: dom::element(document, ID_DOWNLOAD_BTN).ok(),
            auto_timer: Rc::new(RefCell::new(Interval::named("auto-mode"))),
            progress_timer: Rc::new(RefCell::new(Interval::named("progress"))),
        })
    }

    /// Mirror a bandwidth value into the slider and its readout.
    pub fn show_bandwidth(&self, mbps: f64) {
        self.slider.set_value(&mbps.to_string());
        dom::set_text(&self.document, ID_BANDWIDTH_VALUE, &input::bandwidth_text(mbps));
    }

    pub fn set_download_enabled(&self, enabled: bool) {
        if let Some(btn) = &self.download_btn {
            btn.set_disabled(!enabled);
        }
    }
}
