// SPDX-License-Identifier: GPL-3.0-only

//! Application state management

use crate::backends::camera::{CameraDevice, CameraFrame};
use crate::config::Config;
use cosmic::cosmic_config;
use cosmic::widget::about::About;
use std::sync::Arc;

/// Camera permission state.
///
/// Read before launching the capture step; mutated only by the portal
/// response handler. `Unknown` and `Denied` both gate the camera - the
/// distinction only matters for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PermissionState {
    /// Never asked
    #[default]
    Unknown,
    /// Portal granted access
    Granted,
    /// Portal denied access; the next button press asks again
    Denied,
}

impl PermissionState {
    /// Whether the camera may be launched
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionState::Granted)
    }
}

/// The application model stores app-specific state used to describe its
/// interface and drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    pub core: cosmic::Core,
    /// Display a context drawer with the designated page if defined.
    pub context_page: ContextPage,
    /// The about page for this app.
    pub about: About,
    /// Configuration data that persists between application runs.
    pub config: Config,
    /// Configuration handler for saving settings
    pub config_handler: Option<cosmic_config::Config>,
    /// Camera permission state
    pub permission: PermissionState,
    /// Most recent captured frame, kept for re-display and re-scanning
    pub captured_frame: Option<Arc<CameraFrame>>,
    /// Image handle for the captured frame (cached for rendering)
    pub captured_handle: Option<cosmic::widget::image::Handle>,
    /// Result headline: the scan prompt, a decoded payload, or the
    /// "no barcode found" sentinel
    pub result_text: String,
    /// Available capture devices
    pub available_cameras: Vec<CameraDevice>,
    /// Dropdown options (cached for UI)
    pub camera_dropdown_options: Vec<String>,
    /// Current camera index
    pub current_camera_index: usize,
}

/// The context page to display in the context drawer.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ContextPage {
    #[default]
    About,
    Settings,
}

/// Messages emitted by the application and its widgets.
///
/// Messages are organized into logical groups:
/// - **UI Navigation**: Context pages and external URLs
/// - **Permission & Capture**: Portal requests and one-shot capture
/// - **Scanning**: Scan requests against the stored frame
/// - **Settings**: Configuration and device selection
#[derive(Debug, Clone)]
pub enum Message {
    // ===== UI Navigation =====
    /// Open external URL (repository, etc.)
    LaunchUrl(String),
    /// Toggle context drawer page (About, Settings)
    ToggleContextPage(ContextPage),

    // ===== Permission & Capture =====
    /// Open Camera button pressed
    OpenCamera,
    /// Portal answered the permission request
    PermissionResult(bool),
    /// Capture finished; `None` is the cancelled/no-frame case
    CaptureFinished(Option<Arc<CameraFrame>>),

    // ===== Scanning =====
    /// Captured image clicked; scan the stored frame again
    RescanCapture,
    /// Scan request resolved
    ScanFinished(Option<String>),

    // ===== Settings =====
    /// Configuration updated
    UpdateConfig(Config),
    /// Capture devices enumerated asynchronously during startup
    CamerasEnumerated(Vec<CameraDevice>),
    /// Select capture device by index
    SelectCamera(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_default_is_not_granted() {
        assert!(!PermissionState::default().is_granted());
    }

    #[test]
    fn test_permission_denied_is_not_granted() {
        assert!(!PermissionState::Denied.is_granted());
        assert!(PermissionState::Granted.is_granted());
    }
}
