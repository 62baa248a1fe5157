// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the scanner application
//!
//! Internal errors carry enough detail for logging and the CLI; at the UI
//! boundary every failure collapses into the "no barcode found" text state.

use std::fmt;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Main application error type
#[derive(Debug, Clone)]
pub enum AppError {
    /// Capture-related errors
    Capture(CaptureError),
    /// Scan-related errors
    Scan(ScanError),
    /// Configuration errors
    Config(String),
    /// Generic error with message
    Other(String),
}

/// One-shot capture errors
#[derive(Debug, Clone)]
pub enum CaptureError {
    /// No capture devices found
    NoDeviceFound,
    /// Device could not be opened
    OpenFailed(String),
    /// No format the capture path understands was negotiated
    UnsupportedFormat(String),
    /// No usable frame arrived before the capture deadline
    Timeout,
    /// Frame data could not be converted to RGBA
    ConversionFailed(String),
}

/// Scan request errors
#[derive(Debug, Clone)]
pub enum ScanError {
    /// Input image could not be read or decoded
    UnreadableImage(String),
    /// The recognizer task died before reporting a result
    TaskFailed(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Capture(e) => write!(f, "Capture error: {}", e),
            AppError::Scan(e) => write!(f, "Scan error: {}", e),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::NoDeviceFound => write!(f, "No capture devices found"),
            CaptureError::OpenFailed(msg) => write!(f, "Failed to open device: {}", msg),
            CaptureError::UnsupportedFormat(msg) => write!(f, "Unsupported format: {}", msg),
            CaptureError::Timeout => write!(f, "Timed out waiting for a frame"),
            CaptureError::ConversionFailed(msg) => write!(f, "Frame conversion failed: {}", msg),
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::UnreadableImage(msg) => write!(f, "Unreadable image: {}", msg),
            ScanError::TaskFailed(msg) => write!(f, "Recognizer task failed: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for CaptureError {}
impl std::error::Error for ScanError {}

// Conversions from sub-errors to AppError
impl From<CaptureError> for AppError {
    fn from(err: CaptureError) -> Self {
        AppError::Capture(err)
    }
}

impl From<ScanError> for AppError {
    fn from(err: ScanError) -> Self {
        AppError::Scan(err)
    }
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Other(msg)
    }
}

impl From<&str> for AppError {
    fn from(msg: &str) -> Self {
        AppError::Other(msg.to_string())
    }
}

impl From<std::io::Error> for CaptureError {
    fn from(err: std::io::Error) -> Self {
        CaptureError::OpenFailed(err.to_string())
    }
}
