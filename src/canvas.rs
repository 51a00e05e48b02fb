use glam::DVec2;
use hgif_core::{ColorStop, Paint, Surface, TextAlign};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// `Surface` over a 2D canvas context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = context_2d(&canvas)?;
        Ok(Self { canvas, ctx })
    }

    fn style(&self, paint: &Paint) -> JsValue {
        match paint {
            Paint::Solid(color) => JsValue::from_str(color),
            Paint::Linear { from, to, stops } => {
                let g = self.ctx.create_linear_gradient(from.x, from.y, to.x, to.y);
                add_stops(&g, stops);
                g.into()
            }
            Paint::Radial {
                center,
                inner_radius,
                outer_radius,
                stops,
            } => match self.ctx.create_radial_gradient(
                center.x,
                center.y,
                *inner_radius,
                center.x,
                center.y,
                *outer_radius,
            ) {
                Ok(g) => {
                    add_stops(&g, stops);
                    g.into()
                }
                Err(e) => {
                    log::warn!("[canvas] radial gradient rejected: {:?}", e);
                    JsValue::from_str("transparent")
                }
            },
        }
    }
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
}

fn add_stops(gradient: &web::CanvasGradient, stops: &[ColorStop]) {
    for stop in stops {
        _ = gradient.add_color_stop(stop.offset as f32, &stop.color);
    }
}

#[allow(deprecated)]
impl Surface for CanvasSurface {
    type Image = web::HtmlImageElement;

    fn size(&self) -> DVec2 {
        DVec2::new(f64::from(self.canvas.width()), f64::from(self.canvas.height()))
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn fill_rect(&mut self, origin: DVec2, size: DVec2, paint: &Paint) {
        self.ctx.set_fill_style(&self.style(paint));
        self.ctx.fill_rect(origin.x, origin.y, size.x, size.y);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, paint: &Paint) {
        self.ctx.set_fill_style(&self.style(paint));
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x, center.y, radius.max(0.0), 0.0, std::f64::consts::TAU);
        self.ctx.fill();
    }

    fn stroke_arc(
        &mut self,
        center: DVec2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        line_width: f64,
        paint: &Paint,
    ) {
        self.ctx.set_stroke_style(&self.style(paint));
        self.ctx.set_line_width(line_width);
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x, center.y, radius.max(0.0), start_angle, end_angle);
        self.ctx.stroke();
    }

    fn fill_text(&mut self, text: &str, at: DVec2, font: &str, align: TextAlign, paint: &Paint) {
        self.ctx.set_fill_style(&self.style(paint));
        self.ctx.set_font(font);
        self.ctx.set_text_align(align.as_css());
        _ = self.ctx.fill_text(text, at.x, at.y);
    }

    fn set_filter(&mut self, filter: &str) {
        self.ctx.set_filter(filter);
    }

    fn set_shadow(&mut self, blur: f64, color: &str) {
        self.ctx.set_shadow_blur(blur);
        self.ctx.set_shadow_color(color);
    }

    fn draw_image(&mut self, image: &Self::Image, origin: DVec2, size: DVec2) {
        if let Err(e) = self
            .ctx
            .draw_image_with_html_image_element_and_dw_and_dh(image, origin.x, origin.y, size.x, size.y)
        {
            log::warn!("[canvas] drawImage failed: {:?}", e);
        }
    }
}
