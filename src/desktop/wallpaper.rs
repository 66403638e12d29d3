use std::path::Path;
use std::process::Command;

use log::{debug, error, info, warn};

use super::WallpaperSetter;

/// GNOME family: `gsettings` picture-uri.
pub struct GnomeWallpaper;

impl WallpaperSetter for GnomeWallpaper {
    fn set(&self, image: &Path) {
        let uri = format!("file://{}", image.display());
        let result = Command::new("gsettings")
            .args(["set", "org.gnome.desktop.background", "picture-uri", &uri])
            .status();
        report("gsettings", &uri, result);
    }
}

/// macOS family: System Events via `osascript`.
pub struct MacWallpaper;

impl WallpaperSetter for MacWallpaper {
    fn set(&self, image: &Path) {
        let script = format!(
            "tell application \"System Events\" to set picture of every desktop to \"{}\"",
            image.display()
        );
        let result = Command::new("osascript").args(["-e", &script]).status();
        report("osascript", &image.display().to_string(), result);
    }
}

/// Fallback family for platforms without a supported setter.
pub struct UnsupportedWallpaper;

impl WallpaperSetter for UnsupportedWallpaper {
    fn set(&self, _image: &Path) {
        warn!(
            "wallpaper setting not supported on this platform ({})",
            std::env::consts::OS
        );
    }
}

/// Discards wallpaper updates; used when the desktop is out of reach.
pub struct NoopWallpaper;

impl WallpaperSetter for NoopWallpaper {
    fn set(&self, image: &Path) {
        debug!("wallpaper update skipped for {}", image.display());
    }
}

/// The setter for the platform family this binary was built for. The
/// platform branch lives here and nowhere else; callers hold the trait.
pub fn platform_wallpaper() -> Box<dyn WallpaperSetter> {
    #[cfg(target_os = "linux")]
    return Box::new(GnomeWallpaper);
    #[cfg(target_os = "macos")]
    return Box::new(MacWallpaper);
    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    Box::new(UnsupportedWallpaper)
}

fn report(tool: &str, target: &str, result: std::io::Result<std::process::ExitStatus>) {
    match result {
        Ok(status) if status.success() => info!("wallpaper set to {target}"),
        Ok(status) => warn!("{tool} exited with {status} setting wallpaper"),
        Err(err) => error!("failed to run {tool}: {err}"),
    }
}
