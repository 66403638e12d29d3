use std::path::Path;

use serde_json::json;

use crate::chart::SvgRadar;
use crate::desktop::{NoopNotifier, NoopWallpaper};
use crate::error::Result;
use crate::output::{self, Format};
use crate::store::files::DataDir;
use crate::store::rpg::publish;
use crate::store::settings::Theme;

pub fn set(root: &Path, theme: Theme, format: Format) -> Result<()> {
    apply(root, |_| theme, format)
}

pub fn toggle(root: &Path, format: Format) -> Result<()> {
    apply(root, Theme::toggled, format)
}

pub fn show(root: &Path, format: Format) -> Result<()> {
    let settings = DataDir::new(root).load_settings();
    print(settings.theme, format)
}

/// Change the theme and re-render the chart in the new palette, so the
/// wallpaper file matches the next time the desktop reads it.
fn apply(root: &Path, change: impl FnOnce(Theme) -> Theme, format: Format) -> Result<()> {
    let dir = DataDir::new(root);
    let mut settings = dir.load_settings();
    settings.theme = change(settings.theme);
    dir.save_settings(&settings);

    let rpg = dir.load_rpg();
    if !rpg.is_empty() {
        publish(
            &rpg,
            settings.theme,
            &SvgRadar::default(),
            &NoopWallpaper,
            &NoopNotifier,
            &dir.wallpaper_path(),
        )?;
    }
    print(settings.theme, format)
}

fn print(theme: Theme, format: Format) -> Result<()> {
    match format {
        Format::Json => output::print_json(&json!({"theme": theme})),
        Format::Pretty => {
            println!("Theme: {theme}");
            Ok(())
        }
    }
}
