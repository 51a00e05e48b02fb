use crate::surface::{Paint, Surface, TextAlign};
use glam::DVec2;

/// One primitive call captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    FillRect {
        origin: DVec2,
        size: DVec2,
        paint: Paint,
    },
    FillCircle {
        center: DVec2,
        radius: f64,
        paint: Paint,
    },
    StrokeArc {
        center: DVec2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        line_width: f64,
    },
    Text {
        text: String,
        at: DVec2,
        font: String,
        align: TextAlign,
    },
    Filter(String),
    Shadow {
        blur: f64,
        color: String,
    },
    Image {
        name: String,
        origin: DVec2,
        size: DVec2,
    },
}

/// Headless surface that records every call. Images are identified by name.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: DVec2,
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: DVec2::new(width, height),
            commands: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .count()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn filters(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Filter(f) => Some(f.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn has_radial_fill(&self) -> bool {
        self.commands.iter().any(|c| {
            matches!(
                c,
                DrawCommand::FillRect {
                    paint: Paint::Radial { .. },
                    ..
                }
            )
        })
    }
}

impl Surface for RecordingSurface {
    type Image = String;

    fn size(&self) -> DVec2 {
        self.size
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn fill_rect(&mut self, origin: DVec2, size: DVec2, paint: &Paint) {
        self.commands.push(DrawCommand::FillRect {
            origin,
            size,
            paint: paint.clone(),
        });
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, paint: &Paint) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            paint: paint.clone(),
        });
    }

    fn stroke_arc(
        &mut self,
        center: DVec2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        line_width: f64,
        _paint: &Paint,
    ) {
        self.commands.push(DrawCommand::StrokeArc {
            center,
            radius,
            start_angle,
            end_angle,
            line_width,
        });
    }

    fn fill_text(&mut self, text: &str, at: DVec2, font: &str, align: TextAlign, _paint: &Paint) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            font: font.to_string(),
            align,
        });
    }

    fn set_filter(&mut self, filter: &str) {
        self.commands.push(DrawCommand::Filter(filter.to_string()));
    }

    fn set_shadow(&mut self, blur: f64, color: &str) {
        self.commands.push(DrawCommand::Shadow {
            blur,
            color: color.to_string(),
        });
    }

    fn draw_image(&mut self, image: &String, origin: DVec2, size: DVec2) {
        self.commands.push(DrawCommand::Image {
            name: image.clone(),
            origin,
            size,
        });
    }
}
