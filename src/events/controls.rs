use super::Ui;
use crate::constants::*;
use crate::dom;
use crate::input;
use hgif_core::{AutoBandwidth, DeviceKind, TimerChange};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_controls(ui: &Ui) {
    wire_slider(ui);
    wire_auto_switch(ui);
    wire_device_select(ui);
    wire_presets(ui);
}

fn wire_slider(ui: &Ui) {
    let ui_in = ui.clone();
    dom::add_listener(&ui.slider, "input", move |_| {
        let Some(mbps) = input::parse_mbps(&ui_in.slider.value()) else {
            return;
        };
        ui_in.app.borrow_mut().set_bandwidth(mbps);
        dom::set_text(&ui_in.document, ID_BANDWIDTH_VALUE, &input::bandwidth_text(mbps));
    });
}

fn wire_auto_switch(ui: &Ui) {
    let ui_change = ui.clone();
    dom::add_listener(&ui.auto_switch, "change", move |_| {
        let on = ui_change.auto_switch.checked();
        set_auto_mode(&ui_change, on);
    });
    if ui.auto_switch.checked() {
        set_auto_mode(ui, true);
    }
}

/// Switch between manual and generated bandwidth.
pub fn set_auto_mode(ui: &Ui, on: bool) {
    ui.slider.set_disabled(on);
    let change = ui.app.borrow_mut().set_auto_mode(on);
    apply_timer_change(ui, change);
}

fn apply_timer_change(ui: &Ui, change: TimerChange) {
    match change {
        TimerChange::Keep => {}
        TimerChange::Disarm => ui.auto_timer.borrow_mut().disarm(),
        TimerChange::Arm => {
            let config = ui.app.borrow().config.auto.clone();
            let every_ms = config.interval_ms;
            let mut generator = AutoBandwidth::new(config, rand::random());
            let ui_tick = ui.clone();
            ui.auto_timer.borrow_mut().arm(every_ms, move || {
                let sample = generator.sample(js_sys::Date::now());
                let applied = ui_tick.app.borrow_mut().auto_tick(sample);
                if applied {
                    ui_tick.show_bandwidth(sample);
                }
            });
        }
    }
}

fn wire_device_select(ui: &Ui) {
    let Ok(select) = dom::element::<web::HtmlSelectElement>(&ui.document, ID_DEVICE_SELECT) else {
        log::warn!("[controls] #{ID_DEVICE_SELECT} missing; device profile is fixed");
        return;
    };
    let app = ui.app.clone();
    let select_change = select.clone();
    dom::add_listener(&select, "change", move |_| {
        match select_change.value().parse::<DeviceKind>() {
            Ok(kind) => app.borrow_mut().select_device(kind),
            Err(e) => log::warn!("[controls] {e}"),
        }
    });
}

fn wire_presets(ui: &Ui) {
    let Ok(nodes) = ui.document.query_selector_all(PRESET_SELECTOR) else {
        return;
    };
    let buttons: Vec<web::Element> = (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect();
    for btn in &buttons {
        let Some(mbps) = btn.get_attribute(PRESET_ATTR).as_deref().and_then(input::parse_mbps)
        else {
            log::warn!("[controls] preset without a numeric {PRESET_ATTR}");
            continue;
        };
        let ui_click = ui.clone();
        let all = buttons.clone();
        let this = btn.clone();
        dom::add_listener(btn, "click", move |_| {
            let label = this.text_content().unwrap_or_default();
            ui_click.auto_switch.set_checked(false);
            ui_click.slider.set_disabled(false);
            let change = ui_click.app.borrow_mut().apply_preset(mbps, label.trim());
            apply_timer_change(&ui_click, change);
            ui_click.show_bandwidth(mbps);
            for b in &all {
                _ = b.class_list().remove_1(PRESET_ACTIVE_CLASS);
            }
            _ = this.class_list().add_1(PRESET_ACTIVE_CLASS);
        });
    }
}
