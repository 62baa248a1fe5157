// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for constants module

use snapscan::constants::{capture, scan, ui};

#[test]
fn test_scan_dimension_is_usable() {
    // The recognizer needs a meaningful amount of resolution to find
    // finder patterns in a handheld capture
    assert!(scan::MAX_SCAN_DIMENSION >= 256);
}

#[test]
fn test_capture_warmup_fits_in_timeout() {
    // The warm-up window must leave room for at least one post-warm-up frame
    assert!(capture::WARMUP < capture::TIMEOUT);
}

#[test]
fn test_capture_requests_nonzero_resolution() {
    assert!(capture::DEFAULT_WIDTH > 0);
    assert!(capture::DEFAULT_HEIGHT > 0);
    assert!(capture::BUFFER_COUNT > 0);
}

#[test]
fn test_ui_preview_fits_minimum_window() {
    // The preview plus padding must fit the minimum window width set in main
    assert!(ui::CAPTURE_PREVIEW_SIZE + 2.0 * ui::SCREEN_PADDING as f32 <= 360.0);
}
