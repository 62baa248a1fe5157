// SPDX-License-Identifier: GPL-3.0-only

//! Permission and capture handlers
//!
//! The Open Camera button is the only entry point: with permission it
//! launches a one-shot capture, without it it asks the portal. A grant
//! only flips the flag - the user presses the button again to capture,
//! and a denial leaves the screen untouched.

use crate::app::state::{AppModel, Message, PermissionState};
use cosmic::Task;
use std::sync::Arc;
use tracing::{info, warn};

impl AppModel {
    // =========================================================================
    // Permission & Capture Handlers
    // =========================================================================

    pub(crate) fn handle_open_camera(&mut self) -> Task<cosmic::Action<Message>> {
        if self.permission.is_granted() {
            self.launch_capture()
        } else {
            info!("Requesting camera permission from portal");
            Task::perform(
                async {
                    match crate::backends::portal::request_camera_access().await {
                        Ok(granted) => granted,
                        Err(err) => {
                            warn!(error = %err, "Permission request failed");
                            false
                        }
                    }
                },
                |granted| cosmic::Action::App(Message::PermissionResult(granted)),
            )
        }
    }

    pub(crate) fn handle_permission_result(
        &mut self,
        granted: bool,
    ) -> Task<cosmic::Action<Message>> {
        // Only the flag changes here; the user re-triggers the button to
        // actually open the camera
        self.permission = if granted {
            PermissionState::Granted
        } else {
            PermissionState::Denied
        };
        info!(granted, "Camera permission updated");
        Task::none()
    }

    /// Launch the one-shot capture. Requires permission.
    pub(crate) fn launch_capture(&self) -> Task<cosmic::Action<Message>> {
        let preferred = self
            .available_cameras
            .get(self.current_camera_index)
            .map(|d| d.path.clone())
            .or_else(|| self.config.last_camera_path.clone());

        Task::perform(
            crate::backends::camera::capture_still_async(preferred),
            |frame| cosmic::Action::App(Message::CaptureFinished(frame)),
        )
    }

    pub(crate) fn handle_capture_finished(
        &mut self,
        frame: Option<Arc<crate::backends::camera::CameraFrame>>,
    ) -> Task<cosmic::Action<Message>> {
        let Some(frame) = frame else {
            // The cancelled-capture case: nothing changes on screen
            info!("Capture produced no frame");
            return Task::none();
        };

        info!(
            width = frame.width,
            height = frame.height,
            "Capture finished"
        );

        self.captured_handle = Some(cosmic::widget::image::Handle::from_rgba(
            frame.width,
            frame.height,
            frame.data.to_vec(),
        ));
        self.captured_frame = Some(frame);

        // A fresh capture is scanned immediately
        self.start_scan()
    }
}
