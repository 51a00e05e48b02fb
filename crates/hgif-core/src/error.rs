use thiserror::Error;

/// Rejections on the upload path. Each one becomes a single error-severity
/// agent log entry; the rest of the state is left alone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("no file was provided")]
    MissingFile,
    #[error("unsupported file type `{mime}`")]
    NotAnImage { mime: String },
    #[error("the image could not be decoded")]
    DecodeFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeviceError {
    #[error("unknown device profile `{0}`")]
    UnknownDevice(String),
}
