use crate::error::UploadError;
use glam::DVec2;

/// Host image handle plus its natural pixel size.
#[derive(Clone, Debug)]
pub struct UploadedImage<I> {
    pub handle: I,
    pub width: f64,
    pub height: f64,
}

impl<I> UploadedImage<I> {
    pub fn new(handle: I, width: f64, height: f64) -> Self {
        Self {
            handle,
            width,
            height,
        }
    }

    /// Top-left and size of the image scaled uniformly to `fit` of `canvas`
    /// and centred.
    pub fn fitted_rect(&self, canvas: DVec2, fit: f64) -> (DVec2, DVec2) {
        let src = DVec2::new(self.width.max(1.0), self.height.max(1.0));
        let scale = (canvas.x / src.x).min(canvas.y / src.y) * fit;
        let size = src * scale;
        ((canvas - size) * 0.5, size)
    }
}

/// Result of one progress tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressStep {
    /// No job is running; the tick was ignored.
    Idle,
    Advanced(u8),
    /// This tick reached 100; processing has just ended.
    Finished,
}

#[derive(Clone, Debug)]
pub struct PlaybackState<I> {
    pub uploaded_image: Option<UploadedImage<I>>,
    is_processing: bool,
    progress_percent: u8,
}

impl<I> Default for PlaybackState<I> {
    fn default() -> Self {
        Self {
            uploaded_image: None,
            is_processing: false,
            progress_percent: 0,
        }
    }
}

impl<I> PlaybackState<I> {
    pub fn is_processing(&self) -> bool {
        self.is_processing
    }

    pub fn progress_percent(&self) -> u8 {
        self.progress_percent
    }

    /// Replace the current image and restart the fake enhancement job at 0 %.
    pub fn load_image(&mut self, image: UploadedImage<I>) {
        self.uploaded_image = Some(image);
        self.is_processing = true;
        self.progress_percent = 0;
    }

    /// Add `step` percent. The value never exceeds 100 and processing stops on
    /// exactly the tick that first reaches it.
    pub fn advance(&mut self, step: u8) -> ProgressStep {
        if !self.is_processing {
            return ProgressStep::Idle;
        }
        let next = self.progress_percent.saturating_add(step.max(1)).min(100);
        self.progress_percent = next;
        if next >= 100 {
            self.is_processing = false;
            ProgressStep::Finished
        } else {
            ProgressStep::Advanced(next)
        }
    }

    /// Export is only offered for a finished image.
    pub fn can_export(&self) -> bool {
        self.uploaded_image.is_some() && !self.is_processing
    }
}

/// Gate applied to picked or dropped files before decoding.
pub fn check_upload(mime: Option<&str>) -> Result<(), UploadError> {
    match mime {
        None => Err(UploadError::MissingFile),
        Some(m) if m.starts_with("image/") => Ok(()),
        Some(m) => Err(UploadError::NotAnImage { mime: m.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fitted_rect_centres_and_scales_to_fit() {
        let img = UploadedImage::new((), 200.0, 100.0);
        let (pos, size) = img.fitted_rect(DVec2::new(800.0, 600.0), 0.7);
        assert!((size.x - 560.0).abs() < 1e-9);
        assert!((size.y - 280.0).abs() < 1e-9);
        assert!((pos.x - 120.0).abs() < 1e-9);
        assert!((pos.y - 160.0).abs() < 1e-9);
    }

    #[test]
    fn advance_without_job_is_idle() {
        let mut p = PlaybackState::<()>::default();
        assert_eq!(p.advance(2), ProgressStep::Idle);
        assert_eq!(p.progress_percent(), 0);
    }

    #[test]
    fn uneven_step_clamps_at_one_hundred() {
        let mut p = PlaybackState::default();
        p.load_image(UploadedImage::new((), 1.0, 1.0));
        let mut last = ProgressStep::Idle;
        for _ in 0..34 {
            last = p.advance(3);
        }
        assert_eq!(last, ProgressStep::Finished);
        assert_eq!(p.progress_percent(), 100);
    }

    #[test]
    fn check_upload_accepts_images_only() {
        assert_eq!(check_upload(Some("image/png")), Ok(()));
        assert_eq!(check_upload(None), Err(UploadError::MissingFile));
        assert_eq!(
            check_upload(Some("text/plain")),
            Err(UploadError::NotAnImage {
                mime: "text/plain".into()
            })
        );
    }
}
