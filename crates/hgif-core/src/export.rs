use crate::constants::{ENHANCED_FILTER, EXPORT_FILE_NAME, EXPORT_MIME};
use crate::playback::UploadedImage;

/// How to re-encode the uploaded image for download: native size, enhanced
/// filter baked in, standard raster encoding behind a cosmetic extension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportPlan {
    pub width: u32,
    pub height: u32,
    pub filter: &'static str,
    pub file_name: &'static str,
    pub mime: &'static str,
}

impl ExportPlan {
    pub fn for_image<I>(image: &UploadedImage<I>) -> Self {
        Self {
            width: image.width.max(1.0).round() as u32,
            height: image.height.max(1.0).round() as u32,
            filter: ENHANCED_FILTER,
            file_name: EXPORT_FILE_NAME,
            mime: EXPORT_MIME,
        }
    }
}
