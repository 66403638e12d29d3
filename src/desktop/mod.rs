//! Desktop side effects behind capability interfaces. Everything here is
//! fire-and-forget: failures are logged, never propagated.

mod notify;
mod wallpaper;

pub use notify::{DesktopNotifier, NoopNotifier};
pub use wallpaper::{
    GnomeWallpaper, MacWallpaper, NoopWallpaper, UnsupportedWallpaper, platform_wallpaper,
};

use std::path::Path;

/// Sets an image file as the desktop wallpaper.
pub trait WallpaperSetter {
    fn set(&self, image: &Path);
}

/// Dispatches a best-effort desktop notification.
pub trait Notifier {
    fn notify(&self, title: &str, body: &str);
}
