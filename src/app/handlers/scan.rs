// SPDX-License-Identifier: GPL-3.0-only

//! Scan request handlers

use crate::app::state::{AppModel, Message};
use crate::fl;
use crate::scanner::Scanner;
use cosmic::Task;
use std::sync::Arc;
use tracing::info;

impl AppModel {
    // =========================================================================
    // Scanning Handlers
    // =========================================================================

    /// Submit the stored frame to the coordinator.
    ///
    /// Fire-and-forget: no pending flag, no cancellation. Overlapping
    /// requests resolve independently and may complete in either order.
    pub(crate) fn start_scan(&self) -> Task<cosmic::Action<Message>> {
        let Some(frame) = &self.captured_frame else {
            return Task::none();
        };

        let frame = Arc::clone(frame);
        info!("Submitting scan request");

        Task::perform(
            async move { Scanner::new().request_scan(frame).await },
            |result| cosmic::Action::App(Message::ScanFinished(result)),
        )
    }

    /// Re-scan the stored frame without re-invoking the camera
    pub(crate) fn handle_rescan_capture(&mut self) -> Task<cosmic::Action<Message>> {
        self.start_scan()
    }

    pub(crate) fn handle_scan_finished(
        &mut self,
        result: Option<String>,
    ) -> Task<cosmic::Action<Message>> {
        info!(found = result.is_some(), "Scan finished");
        self.result_text = result.unwrap_or_else(|| fl!("no-barcode-found"));
        Task::none()
    }
}
