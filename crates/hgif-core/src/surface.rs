//! Drawing seam between the render pipeline and a host canvas.
//!
//! The primitive set mirrors what the 2D canvas offers and what the pipeline
//! needs; nothing here knows about the DOM.

use glam::DVec2;
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: String,
}

pub type Stops = SmallVec<[ColorStop; 3]>;

pub fn stops(pairs: &[(f64, &str)]) -> Stops {
    pairs
        .iter()
        .map(|&(offset, color)| ColorStop {
            offset,
            color: color.to_string(),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(String),
    Linear {
        from: DVec2,
        to: DVec2,
        stops: Stops,
    },
    Radial {
        center: DVec2,
        inner_radius: f64,
        outer_radius: f64,
        stops: Stops,
    },
}

impl Paint {
    pub fn solid(color: impl Into<String>) -> Self {
        Paint::Solid(color.into())
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Paint::Solid(format!("rgba({r}, {g}, {b}, {a})"))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Center,
    Right,
}

impl TextAlign {
    pub fn as_css(self) -> &'static str {
        match self {
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

pub trait Surface {
    /// Host raster handle (an `<img>` on the web).
    type Image;

    fn size(&self) -> DVec2;
    fn save(&mut self);
    fn restore(&mut self);
    fn fill_rect(&mut self, origin: DVec2, size: DVec2, paint: &Paint);
    fn fill_circle(&mut self, center: DVec2, radius: f64, paint: &Paint);
    #[allow(clippy::too_many_arguments)]
    fn stroke_arc(
        &mut self,
        center: DVec2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        line_width: f64,
        paint: &Paint,
    );
    fn fill_text(&mut self, text: &str, at: DVec2, font: &str, align: TextAlign, paint: &Paint);
    /// CSS filter applied to subsequent draws until `restore`.
    fn set_filter(&mut self, filter: &str);
    fn set_shadow(&mut self, blur: f64, color: &str);
    fn draw_image(&mut self, image: &Self::Image, origin: DVec2, size: DVec2);
}
