use std::process::Command;

use log::{debug, warn};

use super::Notifier;

/// Shells out to the platform notifier (`osascript` on macOS,
/// `notify-send` elsewhere). Best-effort: any failure is logged and
/// swallowed.
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, body: &str) {
        let result = if cfg!(target_os = "macos") {
            let script = format!("display notification \"{body}\" with title \"{title}\"");
            Command::new("osascript").args(["-e", &script]).status()
        } else {
            Command::new("notify-send").args([title, body]).status()
        };
        match result {
            Ok(status) if status.success() => debug!("notification sent: {title}"),
            Ok(status) => warn!("notifier exited with {status}"),
            Err(err) => warn!("failed to send notification: {err}"),
        }
    }
}

/// Discards notifications; used when the desktop is out of reach.
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, title: &str, _body: &str) {
        debug!("notification suppressed: {title}");
    }
}
