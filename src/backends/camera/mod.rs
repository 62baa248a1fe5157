// SPDX-License-Identifier: GPL-3.0-only

//! One-shot camera capture backend
//!
//! The scanner never streams video; it asks this module for a single still
//! frame, the way the original hands off to an external camera application.
//! A capture that produces no frame (no device, busy device, timeout) is
//! reported as `None` to the UI - the user-cancelled-the-camera case.

mod v4l2;

pub mod types;

pub use types::{CameraDevice, CameraFrame};
pub use v4l2::{capture_still, enumerate_devices};

use std::sync::Arc;
use tracing::warn;

/// Capture one still frame without blocking the UI executor.
///
/// `preferred` is the device path to try first (the last used camera from
/// config); enumeration order decides otherwise. Failures are logged and
/// folded to `None`.
pub async fn capture_still_async(preferred: Option<String>) -> Option<Arc<CameraFrame>> {
    tokio::task::spawn_blocking(move || capture_still(preferred.as_deref()))
        .await
        .map_err(|e| {
            warn!(error = %e, "capture task panicked");
        })
        .ok()?
        .map_err(|e| {
            warn!(error = %e, "still capture failed");
        })
        .ok()
        .map(Arc::new)
}
