// SPDX-License-Identifier: GPL-3.0-only

//! Shared types for the capture backend

use std::sync::Arc;
use std::time::Instant;

/// A captured still frame.
///
/// Pixel data is always RGBA8. `stride` is the length of one row in bytes
/// and may exceed `width * 4` when the source had row padding. The data is
/// reference counted so the frame can be shared into scan tasks without
/// copying.
#[derive(Debug, Clone)]
pub struct CameraFrame {
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Row length in bytes
    pub stride: u32,
    /// RGBA pixel data
    pub data: Arc<[u8]>,
    /// When the frame was captured
    pub captured_at: Instant,
}

impl CameraFrame {
    /// Build a frame from tightly packed RGBA data
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            stride: width * 4,
            data: Arc::from(data.as_slice()),
            captured_at: Instant::now(),
        }
    }
}

/// A capture device discovered during enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraDevice {
    /// Human readable device name (V4L2 card)
    pub name: String,
    /// Device path (e.g., /dev/video0)
    pub path: String,
}
