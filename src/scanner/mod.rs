// SPDX-License-Identifier: GPL-3.0-only

//! Scan request coordinator
//!
//! Wraps the `rqrr` recognizer behind a single asynchronous request:
//! a captured frame goes in, an optional decoded payload comes out. The
//! recognizer runs on a blocking worker so the UI executor never stalls
//! on pixel crunching.
//!
//! The caller sees exactly two outcomes: `Some(payload)` for the first
//! barcode that decoded, or `None`. Internal recognizer failures (grids
//! that refuse to decode, a panicking worker) deliberately fold into
//! `None` - the UI shows the same "no barcode found" text either way.

use crate::backends::camera::CameraFrame;
use crate::constants::scan::MAX_SCAN_DIMENSION;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Barcode scanner
///
/// Analyzes captured frames for decodable barcodes. Frames are converted
/// to grayscale and downscaled to a bounded processing dimension before
/// being handed to the recognizer.
pub struct Scanner {
    /// Maximum dimension for processing (frames are downscaled to this)
    max_dimension: u32,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    /// Create a new scanner with default settings
    pub fn new() -> Self {
        Self {
            max_dimension: MAX_SCAN_DIMENSION,
        }
    }

    /// Create a scanner with a custom max processing dimension
    pub fn with_max_dimension(max_dimension: u32) -> Self {
        Self { max_dimension }
    }

    /// Submit a frame for asynchronous recognition.
    ///
    /// Resolves exactly once per request with the first decoded barcode's
    /// payload, or `None` when nothing decoded. Overlapping requests are
    /// not sequenced; each resolves independently.
    pub async fn request_scan(&self, frame: Arc<CameraFrame>) -> Option<String> {
        let max_dim = self.max_dimension;

        // Run recognition in a blocking task to avoid starving the runtime
        tokio::task::spawn_blocking(move || scan_sync(&frame, max_dim))
            .await
            .unwrap_or_else(|e| {
                warn!(error = %e, "scan task panicked");
                None
            })
    }

    /// Synchronous variant used by the CLI, where no runtime is available.
    pub fn scan_blocking(&self, frame: &CameraFrame) -> Option<String> {
        scan_sync(frame, self.max_dimension)
    }
}

/// Synchronous recognition (runs in a blocking task)
fn scan_sync(frame: &CameraFrame, max_dimension: u32) -> Option<String> {
    let start = std::time::Instant::now();

    let luma = frame_to_luma(frame);
    let (luma, width, height) = if frame.width > max_dimension || frame.height > max_dimension {
        downscale_luma(&luma, frame.width, frame.height, max_dimension)
    } else {
        (luma, frame.width, frame.height)
    };

    trace!(
        width,
        height,
        prep_ms = start.elapsed().as_millis(),
        "Prepared grayscale image for recognition"
    );

    let result = decode_luma(&luma, width, height);

    debug!(
        found = result.is_some(),
        total_ms = start.elapsed().as_millis(),
        "Scan request complete"
    );

    result
}

/// Hand a grayscale buffer to the recognizer and pick the first payload.
///
/// `prepare_from_greyscale` is used instead of the image-buffer entry point
/// so the recognizer's pixel types stay out of this crate's API.
pub fn decode_luma(luma: &[u8], width: u32, height: u32) -> Option<String> {
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        width as usize,
        height as usize,
        |x, y| luma[y * width as usize + x],
    );

    let grids = prepared.detect_grids();
    trace!(count = grids.len(), "Recognizer detected grids");

    first_decoded(grids.into_iter().map(|grid| grid.decode().map(|(_meta, content)| content)))
}

/// First successfully decoded payload wins; failed grids are skipped.
///
/// When every grid fails to decode the overall result is `None`, matching
/// the empty-result case - the two are indistinguishable to callers.
fn first_decoded<E: std::fmt::Display>(
    results: impl IntoIterator<Item = Result<String, E>>,
) -> Option<String> {
    for result in results {
        match result {
            Ok(content) => return Some(content),
            Err(e) => {
                debug!(error = %e, "Failed to decode detected grid");
            }
        }
    }
    None
}

/// Convert an RGBA frame to Rec.601 luma, dropping any stride padding
fn frame_to_luma(frame: &CameraFrame) -> Vec<u8> {
    let width = frame.width as usize;
    let height = frame.height as usize;
    let stride = frame.stride as usize;

    let mut luma = Vec::with_capacity(width * height);

    for y in 0..height {
        let row_start = y * stride;
        for x in 0..width {
            let offset = row_start + x * 4;
            if offset + 2 < frame.data.len() {
                let r = frame.data[offset] as u32;
                let g = frame.data[offset + 1] as u32;
                let b = frame.data[offset + 2] as u32;
                luma.push(((77 * r + 150 * g + 29 * b) >> 8) as u8);
            } else {
                luma.push(0);
            }
        }
    }

    luma
}

/// Downscale a grayscale buffer with bilinear interpolation.
///
/// Returns the scaled buffer and its dimensions.
fn downscale_luma(src: &[u8], width: u32, height: u32, max_dimension: u32) -> (Vec<u8>, u32, u32) {
    let scale = (width as f32 / max_dimension as f32).max(height as f32 / max_dimension as f32);
    let dst_width = ((width as f32 / scale) as u32).max(1);
    let dst_height = ((height as f32 / scale) as u32).max(1);

    let src_width = width as usize;
    let src_height = height as usize;

    let mut result = Vec::with_capacity((dst_width * dst_height) as usize);

    let x_ratio = width as f32 / dst_width as f32;
    let y_ratio = height as f32 / dst_height as f32;

    for y in 0..dst_height {
        for x in 0..dst_width {
            let src_x = x as f32 * x_ratio;
            let src_y = y as f32 * y_ratio;

            let x0 = src_x as usize;
            let y0 = src_y as usize;
            let x1 = (x0 + 1).min(src_width - 1);
            let y1 = (y0 + 1).min(src_height - 1);

            let x_frac = src_x - x0 as f32;
            let y_frac = src_y - y0 as f32;

            let get = |px: usize, py: usize| -> f32 {
                src.get(py * src_width + px).copied().unwrap_or(0) as f32
            };

            let p00 = get(x0, y0);
            let p01 = get(x1, y0);
            let p10 = get(x0, y1);
            let p11 = get(x1, y1);

            let value = p00 * (1.0 - x_frac) * (1.0 - y_frac)
                + p01 * x_frac * (1.0 - y_frac)
                + p10 * (1.0 - x_frac) * y_frac
                + p11 * x_frac * y_frac;

            result.push(value as u8);
        }
    }

    (result, dst_width, dst_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn rgba_frame(width: u32, height: u32, stride: u32, data: Vec<u8>) -> CameraFrame {
        CameraFrame {
            width,
            height,
            stride,
            data: Arc::from(data.as_slice()),
            captured_at: Instant::now(),
        }
    }

    #[test]
    fn test_frame_to_luma_drops_stride_padding() {
        // 2x2 RGBA frame with 2 bytes of stride padding per row
        let data: Vec<u8> = vec![
            255, 255, 255, 255, // white
            0, 0, 0, 255, // black
            0, 0, // padding
            0, 0, 0, 255, // black
            255, 255, 255, 255, // white
            0, 0, // padding
        ];

        let frame = rgba_frame(2, 2, 10, data);
        let luma = frame_to_luma(&frame);

        assert_eq!(luma.len(), 4);
        assert!(luma[0] > 240); // white
        assert_eq!(luma[1], 0); // black
        assert_eq!(luma[2], 0);
        assert!(luma[3] > 240);
    }

    #[test]
    fn test_downscale_luma_preserves_gradient() {
        // 4x2 horizontal gradient
        let src = vec![0u8, 85, 170, 255, 0, 85, 170, 255];
        let (scaled, w, h) = downscale_luma(&src, 4, 2, 2);

        assert_eq!((w, h), (2, 1));
        assert_eq!(scaled.len(), 2);
        assert!(scaled[0] < 100); // near start of gradient
        assert!(scaled[1] > 150); // near end of gradient
    }

    #[test]
    fn test_first_decoded_picks_first_success() {
        let results: Vec<Result<String, String>> = vec![
            Err("ecc failure".to_string()),
            Ok("first".to_string()),
            Ok("second".to_string()),
        ];
        assert_eq!(first_decoded(results), Some("first".to_string()));
    }

    #[test]
    fn test_first_decoded_folds_all_failures_to_none() {
        let results: Vec<Result<String, String>> =
            vec![Err("a".to_string()), Err("b".to_string())];
        assert_eq!(first_decoded(results), None);
    }

    #[test]
    fn test_first_decoded_empty_is_none() {
        let results: Vec<Result<String, String>> = Vec::new();
        assert_eq!(first_decoded(results), None);
    }

    #[test]
    fn test_scan_blank_frame_finds_nothing() {
        let data = vec![255u8; (64 * 64 * 4) as usize];
        let frame = rgba_frame(64, 64, 64 * 4, data);
        assert_eq!(Scanner::new().scan_blocking(&frame), None);
    }
}
