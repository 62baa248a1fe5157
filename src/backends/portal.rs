// SPDX-License-Identifier: GPL-3.0-only

//! Camera permission via the XDG desktop portal
//!
//! Asks `org.freedesktop.portal.Camera.AccessCamera` on the session bus for
//! camera access. The portal answers asynchronously through a `Response`
//! signal on a per-request object; response code 0 means granted. Works in
//! both native and flatpak environments. A session without the portal is
//! treated as a denial - the UI handles it exactly like a denied dialog.

use futures::StreamExt;
use std::collections::HashMap;
use tracing::{debug, info, warn};
use zbus::zvariant::{OwnedValue, Value};

const PORTAL_DESTINATION: &str = "org.freedesktop.portal.Desktop";
const PORTAL_PATH: &str = "/org/freedesktop/portal/desktop";

/// Token used for the portal request handle
const HANDLE_TOKEN: &str = "snapscan_camera";

/// Request camera access from the desktop portal.
///
/// Resolves to `Ok(true)` when access was granted, `Ok(false)` when the user
/// (or the portal) denied it. Errors describe D-Bus level failures; callers
/// treat them as denial.
pub async fn request_camera_access() -> Result<bool, String> {
    let connection = zbus::Connection::session()
        .await
        .map_err(|e| format!("Failed to connect to session D-Bus: {}", e))?;

    let camera_proxy = zbus::Proxy::new(
        &connection,
        PORTAL_DESTINATION,
        PORTAL_PATH,
        "org.freedesktop.portal.Camera",
    )
    .await
    .map_err(|e| format!("Failed to create camera portal proxy: {}", e))?;

    let camera_present: bool = camera_proxy
        .get_property("IsCameraPresent")
        .await
        .unwrap_or(false);
    debug!(camera_present, "Queried camera portal");

    // The response arrives as a signal on a request object whose path is
    // derived from our unique bus name and the handle token, so subscribe
    // before issuing the call
    let request_path = request_object_path(&connection)?;
    let request_proxy = zbus::Proxy::new(
        &connection,
        PORTAL_DESTINATION,
        request_path.as_str(),
        "org.freedesktop.portal.Request",
    )
    .await
    .map_err(|e| format!("Failed to create portal request proxy: {}", e))?;

    let mut responses = request_proxy
        .receive_signal("Response")
        .await
        .map_err(|e| format!("Failed to subscribe to portal response: {}", e))?;

    let mut options: HashMap<&str, Value> = HashMap::new();
    options.insert("handle_token", Value::new(HANDLE_TOKEN));

    let _handle: zbus::zvariant::OwnedObjectPath = camera_proxy
        .call("AccessCamera", &(options,))
        .await
        .map_err(|e| format!("AccessCamera call failed: {}", e))?;

    let message = responses
        .next()
        .await
        .ok_or_else(|| "Portal response stream closed".to_string())?;

    let (code, _results): (u32, HashMap<String, OwnedValue>) = message
        .body()
        .deserialize()
        .map_err(|e| format!("Malformed portal response: {}", e))?;

    let granted = code == 0;
    if granted {
        info!("Camera access granted by portal");
    } else {
        warn!(code, "Camera access denied by portal");
    }

    Ok(granted)
}

/// Build the request object path the portal will answer on.
///
/// Per the portal convention this is
/// `/org/freedesktop/portal/desktop/request/<sender>/<token>` where sender is
/// our unique name with the leading ':' stripped and '.' replaced by '_'.
fn request_object_path(connection: &zbus::Connection) -> Result<String, String> {
    let unique_name = connection
        .unique_name()
        .ok_or_else(|| "Connection has no unique name".to_string())?;

    let sender = unique_name.as_str().trim_start_matches(':').replace('.', "_");

    Ok(format!(
        "/org/freedesktop/portal/desktop/request/{}/{}",
        sender, HANDLE_TOKEN
    ))
}
