// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for configuration module

use snapscan::Config;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(
        config.last_camera_path, None,
        "A fresh config should not remember a camera"
    );
}
