// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the scan request coordinator
//!
//! The recognizer itself is external; these tests exercise the contract
//! around it: absence on undecodable input, failure folded into absence,
//! and independent resolution of overlapping requests.

use snapscan::{CameraFrame, Scanner};
use std::sync::Arc;

/// A uniform frame - nothing for the recognizer to find
fn blank_frame(width: u32, height: u32, value: u8) -> Arc<CameraFrame> {
    let mut data = vec![value; (width * height * 4) as usize];
    // Keep alpha opaque
    for pixel in data.chunks_exact_mut(4) {
        pixel[3] = 255;
    }
    Arc::new(CameraFrame::from_rgba(width, height, data))
}

/// A noisy gradient - structure, but no barcode
fn gradient_frame(width: u32, height: u32) -> Arc<CameraFrame> {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let v = ((x * 255 / width.max(1)) ^ (y * 7)) as u8;
            data.extend_from_slice(&[v, v, v, 255]);
        }
    }
    Arc::new(CameraFrame::from_rgba(width, height, data))
}

#[tokio::test]
async fn test_blank_frame_resolves_absence() {
    let scanner = Scanner::new();
    let result = scanner.request_scan(blank_frame(128, 128, 255)).await;
    assert_eq!(result, None);
}

#[tokio::test]
async fn test_dark_frame_resolves_absence() {
    // An unreadable (all black) capture is the recognizer's problem; the
    // coordinator still resolves to the absence signal
    let scanner = Scanner::new();
    let result = scanner.request_scan(blank_frame(128, 128, 0)).await;
    assert_eq!(result, None);
}

#[tokio::test]
async fn test_overlapping_requests_resolve_independently() {
    // No at-most-one-concurrent-request invariant: both requests get a
    // terminal answer
    let scanner = Scanner::new();
    let (a, b) = tokio::join!(
        scanner.request_scan(gradient_frame(96, 96)),
        scanner.request_scan(blank_frame(96, 96, 255)),
    );
    assert_eq!(a, None);
    assert_eq!(b, None);
}

#[test]
fn test_blocking_scan_matches_async_contract() {
    let scanner = Scanner::new();
    let frame = gradient_frame(64, 64);
    assert_eq!(scanner.scan_blocking(&frame), None);
}

#[test]
fn test_oversized_frame_is_downscaled_not_rejected() {
    // Frames beyond the processing bound go through the downscale path and
    // still produce a terminal result
    let scanner = Scanner::with_max_dimension(64);
    let frame = gradient_frame(256, 128);
    assert_eq!(scanner.scan_blocking(&frame), None);
}

#[test]
fn test_tiny_frame_is_accepted() {
    // No explicit input validation: degenerate sizes are handed to the
    // recognizer as-is
    let scanner = Scanner::new();
    let frame = blank_frame(4, 4, 128);
    assert_eq!(scanner.scan_blocking(&frame), None);
}
