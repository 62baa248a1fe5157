// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

/// Scan processing constants
pub mod scan {
    /// Maximum dimension for recognizer input.
    ///
    /// Captured frames larger than this are downscaled before being handed to
    /// the recognizer. Barcodes are typically large enough in a deliberate
    /// capture to survive this reduction.
    pub const MAX_SCAN_DIMENSION: u32 = 1024;
}

/// One-shot capture constants
pub mod capture {
    use std::time::Duration;

    /// Requested capture width
    pub const DEFAULT_WIDTH: u32 = 1280;

    /// Requested capture height
    pub const DEFAULT_HEIGHT: u32 = 720;

    /// Number of mmap buffers for the capture stream
    pub const BUFFER_COUNT: u32 = 4;

    /// Sensor warm-up period; frames received before this are discarded
    /// (auto-exposure needs a few frames to settle)
    pub const WARMUP: Duration = Duration::from_millis(500);

    /// Give up on the capture entirely after this long
    pub const TIMEOUT: Duration = Duration::from_secs(5);
}

/// UI layout constants
pub mod ui {
    /// Result headline text size
    pub const RESULT_TEXT_SIZE: u16 = 24;

    /// Hint text size under the captured image
    pub const HINT_TEXT_SIZE: u16 = 12;

    /// Edge length of the captured image preview
    pub const CAPTURE_PREVIEW_SIZE: f32 = 280.0;

    /// Outer padding of the main screen
    pub const SCREEN_PADDING: u16 = 16;
}

/// Application metadata helpers
pub mod app_info {
    use std::path::Path;

    /// Get the application version from build-time environment
    pub fn version() -> &'static str {
        env!("GIT_VERSION")
    }

    /// Check if the application is running inside a Flatpak sandbox
    pub fn is_flatpak() -> bool {
        Path::new("/.flatpak-info").exists()
    }

    /// Get the runtime environment string (e.g., "Flatpak" or "Native")
    pub fn runtime_environment() -> &'static str {
        if is_flatpak() { "Flatpak" } else { "Native" }
    }
}
