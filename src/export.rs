use crate::canvas;
use crate::SharedApp;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Bake the enhanced filter into the uploaded image at native size and
/// trigger a browser download.
pub fn download(app: &SharedApp, document: &web::Document) -> anyhow::Result<()> {
    let (plan, image) = {
        let state = app.borrow();
        let (Some(plan), Some(uploaded)) = (state.export_plan(), &state.playback.uploaded_image)
        else {
            return Ok(());
        };
        if !state.can_export() {
            log::info!("[export] still processing");
            return Ok(());
        }
        (plan, uploaded.handle.clone())
    };

    let offscreen: web::HtmlCanvasElement = create(document, "canvas")?;
    offscreen.set_width(plan.width);
    offscreen.set_height(plan.height);
    let ctx = canvas::context_2d(&offscreen)?;
    ctx.set_filter(plan.filter);
    ctx.draw_image_with_html_image_element(&image, 0.0, 0.0)
        .map_err(|e| anyhow::anyhow!("drawImage failed: {:?}", e))?;
    let url = offscreen
        .to_data_url_with_type(plan.mime)
        .map_err(|e| anyhow::anyhow!("toDataURL failed: {:?}", e))?;

    let link: web::HtmlAnchorElement = create(document, "a")?;
    link.set_download(plan.file_name);
    link.set_href(&url);
    link.click();
    log::info!("[export] {} {}x{}", plan.file_name, plan.width, plan.height);

    app.borrow_mut().record_export();
    Ok(())
}

fn create<T: JsCast>(document: &web::Document, tag: &str) -> anyhow::Result<T> {
    document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("createElement({tag}) failed: {:?}", e))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}
