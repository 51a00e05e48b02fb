use super::Ui;
use crate::constants::*;
use crate::dom;
use crate::export;
use crate::input;
use hgif_core::{ProgressStep, UploadedImage};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_upload(ui: &Ui) {
    let file_input = dom::element::<web::HtmlInputElement>(&ui.document, ID_FILE_INPUT).ok();
    if let Some(input_el) = &file_input {
        let ui_change = ui.clone();
        let input_change = input_el.clone();
        dom::add_listener(input_el, "change", move |_| {
            let file = input_change.files().and_then(|list| list.get(0));
            handle_file(&ui_change, file);
        });
    }

    let Ok(zone) = dom::element::<web::HtmlElement>(&ui.document, ID_DROP_ZONE) else {
        log::warn!("[upload] #{ID_DROP_ZONE} missing; drag and drop disabled");
        return;
    };

    dom::add_listener(&zone, "click", move |ev| {
        let inside_hud = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest(HUD_SELECTOR).ok().flatten())
            .is_some();
        if input::click_opens_picker(&dom::target_tag(&ev), inside_hud) {
            if let Some(picker) = &file_input {
                picker.click();
            }
        }
    });

    for (name, color) in [
        ("dragenter", DROP_BORDER_ACTIVE),
        ("dragover", DROP_BORDER_ACTIVE),
        ("dragleave", DROP_BORDER_IDLE),
        ("drop", DROP_BORDER_IDLE),
    ] {
        let zone_style = zone.clone();
        dom::add_listener(&zone, name, move |ev| {
            ev.prevent_default();
            _ = zone_style.style().set_property("border-color", color);
        });
    }

    let ui_drop = ui.clone();
    dom::add_listener(&zone, "drop", move |ev| {
        let file = ev
            .dyn_ref::<web::DragEvent>()
            .and_then(|d| d.data_transfer())
            .and_then(|dt| dt.files())
            .and_then(|list| list.get(0));
        handle_file(&ui_drop, file);
    });
}

pub fn wire_download(ui: &Ui) {
    let Some(btn) = ui.download_btn.clone() else {
        return;
    };
    let can_export = ui.app.borrow().can_export();
    ui.set_download_enabled(can_export);
    let ui_click = ui.clone();
    dom::add_listener(&btn, "click", move |_| {
        if let Err(e) = export::download(&ui_click.app, &ui_click.document) {
            log::error!("[export] {:?}", e);
        }
    });
}

/// Gate by MIME type, read as a data URL, then decode into an `<img>`.
fn handle_file(ui: &Ui, file: Option<web::File>) {
    let mime = file.as_ref().map(|f| f.type_());
    if ui.app.borrow_mut().begin_upload(mime.as_deref()).is_err() {
        return;
    }
    let Some(file) = file else {
        return;
    };
    log::info!("[upload] reading {} ({} bytes)", file.name(), file.size());

    let reader = match web::FileReader::new() {
        Ok(r) => r,
        Err(e) => {
            log::error!("[upload] FileReader unavailable: {:?}", e);
            return;
        }
    };
    let ui_load = ui.clone();
    let reader_load = reader.clone();
    let onload = Closure::once_into_js(move || {
        match reader_load.result().ok().and_then(|v| v.as_string()) {
            Some(url) => decode_image(&ui_load, &url),
            None => ui_load.app.borrow_mut().image_decode_failed(),
        };
    });
    let ui_err = ui.clone();
    let onerror = Closure::once_into_js(move || {
        ui_err.app.borrow_mut().image_decode_failed();
    });
    reader.set_onload(Some(onload.unchecked_ref()));
    reader.set_onerror(Some(onerror.unchecked_ref()));
    if let Err(e) = reader.read_as_data_url(&file) {
        log::error!("[upload] readAsDataURL failed: {:?}", e);
        ui.app.borrow_mut().image_decode_failed();
    }
}

fn decode_image(ui: &Ui, data_url: &str) {
    let img = match web::HtmlImageElement::new() {
        Ok(img) => img,
        Err(e) => {
            log::error!("[upload] could not create <img>: {:?}", e);
            ui.app.borrow_mut().image_decode_failed();
            return;
        }
    };
    let ui_ok = ui.clone();
    let img_ok = img.clone();
    let onload = Closure::once_into_js(move || image_ready(&ui_ok, img_ok));
    let ui_err = ui.clone();
    let onerror = Closure::once_into_js(move || {
        ui_err.app.borrow_mut().image_decode_failed();
    });
    img.set_onload(Some(onload.unchecked_ref()));
    img.set_onerror(Some(onerror.unchecked_ref()));
    img.set_src(data_url);
}

fn image_ready(ui: &Ui, img: web::HtmlImageElement) {
    let width = f64::from(img.natural_width());
    let height = f64::from(img.natural_height());
    ui.set_download_enabled(false);
    let every_ms = {
        let mut app = ui.app.borrow_mut();
        app.image_decoded(UploadedImage::new(img, width, height));
        app.config.progress_interval_ms
    };

    let ui_tick = ui.clone();
    ui.progress_timer.borrow_mut().arm(every_ms, move || {
        let step = ui_tick.app.borrow_mut().advance_processing();
        match step {
            ProgressStep::Finished => {
                ui_tick.progress_timer.borrow_mut().disarm();
                ui_tick.set_download_enabled(true);
            }
            ProgressStep::Idle => ui_tick.progress_timer.borrow_mut().disarm(),
            ProgressStep::Advanced(_) => {}
        }
    });
}
