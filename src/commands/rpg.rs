use std::path::Path;

use chrono::NaiveDate;
use serde_json::json;

use crate::chart::SvgRadar;
use crate::desktop::{DesktopNotifier, NoopNotifier, NoopWallpaper, platform_wallpaper};
use crate::error::Result;
use crate::output::{self, Format};
use crate::store::files::DataDir;
use crate::store::rpg::{DayCounters, RpgLog, Snapshot, Stat, publish};

/// Log a day of stats, persist, and publish the refreshed radar chart to
/// the desktop. `date` defaults to the local calendar date;
/// `no_desktop` still renders the chart but skips wallpaper and
/// notification.
pub fn log(
    root: &Path,
    counters: DayCounters,
    date: Option<NaiveDate>,
    no_desktop: bool,
    format: Format,
) -> Result<()> {
    let dir = DataDir::new(root);
    let mut rpg = dir.load_rpg();
    let date = match date {
        Some(date) => {
            rpg.log(date, counters)?;
            date
        }
        None => rpg.log_today(counters)?,
    };
    dir.save_rpg(&rpg);

    let theme = dir.load_settings().theme;
    let renderer = SvgRadar::default();
    let image = dir.wallpaper_path();
    if no_desktop {
        publish(&rpg, theme, &renderer, &NoopWallpaper, &NoopNotifier, &image)?;
    } else {
        let wallpaper = platform_wallpaper();
        publish(
            &rpg,
            theme,
            &renderer,
            wallpaper.as_ref(),
            &DesktopNotifier,
            &image,
        )?;
    }

    match format {
        Format::Json => output::print_json(&json!({
            "date": date,
            "counters": rpg.counters_for(date),
            "wallpaper": image,
        })),
        Format::Pretty => {
            println!("Progress logged for {date}; wallpaper updated.");
            Ok(())
        }
    }
}

pub fn show(root: &Path, format: Format) -> Result<()> {
    let rpg = DataDir::new(root).load_rpg();
    let snapshot = rpg.latest_snapshot()?;
    print(&rpg, &snapshot, format)
}

fn print(rpg: &RpgLog, snapshot: &Snapshot, format: Format) -> Result<()> {
    match format {
        Format::Json => {
            let values: serde_json::Map<String, serde_json::Value> = Stat::ALL
                .iter()
                .zip(snapshot.values)
                .map(|(stat, value)| (stat.code().to_string(), value.into()))
                .collect();
            output::print_json(&json!({
                "date": snapshot.date,
                "values": values,
                "days_logged": rpg.len(),
            }))
        }
        Format::Pretty => {
            println!("RPG stats for {} ({} day(s) logged)", snapshot.date, rpg.len());
            for (stat, value) in Stat::ALL.iter().zip(snapshot.values) {
                println!("  {:>4} {:2}  {}", stat.code(), value, stat.label());
            }
            Ok(())
        }
    }
}
