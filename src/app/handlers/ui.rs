// SPDX-License-Identifier: GPL-3.0-only

//! UI navigation and settings handlers

use crate::app::state::{AppModel, ContextPage, Message};
use crate::backends::camera::CameraDevice;
use crate::config::Config;
use cosmic::Task;
use tracing::{error, info};

impl AppModel {
    // =========================================================================
    // UI Navigation Handlers
    // =========================================================================

    pub(crate) fn handle_launch_url(&self, url: String) -> Task<cosmic::Action<Message>> {
        match open::that_detached(&url) {
            Ok(()) => {}
            Err(err) => {
                error!(url = %url, error = %err, "Failed to open URL");
            }
        }
        Task::none()
    }

    pub(crate) fn handle_toggle_context_page(
        &mut self,
        context_page: ContextPage,
    ) -> Task<cosmic::Action<Message>> {
        if self.context_page == context_page {
            self.core.window.show_context = !self.core.window.show_context;
        } else {
            self.context_page = context_page;
            self.core.window.show_context = true;
        }
        Task::none()
    }

    // =========================================================================
    // Settings Handlers
    // =========================================================================

    pub(crate) fn handle_update_config(&mut self, config: Config) -> Task<cosmic::Action<Message>> {
        self.config = config;
        Task::none()
    }

    pub(crate) fn handle_cameras_enumerated(
        &mut self,
        devices: Vec<CameraDevice>,
    ) -> Task<cosmic::Action<Message>> {
        info!(count = devices.len(), "Capture devices enumerated");

        // Restore the last used camera when it is still present
        self.current_camera_index = self
            .config
            .last_camera_path
            .as_ref()
            .and_then(|last| devices.iter().position(|d| &d.path == last))
            .unwrap_or(0);

        self.camera_dropdown_options = devices.iter().map(|d| d.name.clone()).collect();
        self.available_cameras = devices;

        Task::none()
    }

    pub(crate) fn handle_select_camera(&mut self, index: usize) -> Task<cosmic::Action<Message>> {
        let Some(device) = self.available_cameras.get(index) else {
            return Task::none();
        };

        info!(name = %device.name, path = %device.path, "Camera selected");
        self.current_camera_index = index;

        let path = device.path.clone();
        if let Some(handler) = &self.config_handler {
            if let Err(err) = self.config.set_last_camera_path(handler, Some(path)) {
                error!(?err, "Failed to save camera selection");
            }
        }

        Task::none()
    }
}
