// SPDX-License-Identifier: GPL-3.0-only

//! Message update handling
//!
//! The main `update()` function acts as a dispatcher, while the handlers
//! live in the `handlers` submodules organized by functional domain.
//!
//! # Handler Modules
//!
//! - `handlers::ui`: Context pages, external URLs, settings
//! - `handlers::capture`: Permission requests and one-shot capture
//! - `handlers::scan`: Scan requests and results

use crate::app::state::{AppModel, Message};
use cosmic::Task;

impl AppModel {
    /// Main message handler - routes messages to appropriate handler methods.
    pub fn update(&mut self, message: Message) -> Task<cosmic::Action<Message>> {
        match message {
            // ===== UI Navigation =====
            Message::LaunchUrl(url) => self.handle_launch_url(url),
            Message::ToggleContextPage(page) => self.handle_toggle_context_page(page),

            // ===== Permission & Capture =====
            Message::OpenCamera => self.handle_open_camera(),
            Message::PermissionResult(granted) => self.handle_permission_result(granted),
            Message::CaptureFinished(frame) => self.handle_capture_finished(frame),

            // ===== Scanning =====
            Message::RescanCapture => self.handle_rescan_capture(),
            Message::ScanFinished(result) => self.handle_scan_finished(result),

            // ===== Settings =====
            Message::UpdateConfig(config) => self.handle_update_config(config),
            Message::CamerasEnumerated(devices) => self.handle_cameras_enumerated(devices),
            Message::SelectCamera(index) => self.handle_select_camera(index),
        }
    }
}
