//! The RPG stat log: one entry per calendar day, nine counters per entry.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{Local, NaiveDate};
use log::error;
use serde::{Deserialize, Serialize};

use crate::chart::{ChartRenderer, Palette};
use crate::desktop::{Notifier, WallpaperSetter};
use crate::error::{GrowError, Result};
use crate::radar;
use crate::store::settings::Theme;

pub const STAT_COUNT: usize = 9;
pub const MAX_STAT_VALUE: u8 = 10;

/// The nine tracked attributes, in canonical chart order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Stat {
    Atk,
    Def,
    Cha,
    Int,
    Wis,
    Luk,
    Sta,
    Fam,
    Gold,
}

impl Stat {
    pub const ALL: [Stat; STAT_COUNT] = [
        Stat::Atk,
        Stat::Def,
        Stat::Cha,
        Stat::Int,
        Stat::Wis,
        Stat::Luk,
        Stat::Sta,
        Stat::Fam,
        Stat::Gold,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Self::Atk => "ATK",
            Self::Def => "DEF",
            Self::Cha => "CHA",
            Self::Int => "INT",
            Self::Wis => "WIS",
            Self::Luk => "LUK",
            Self::Sta => "STA",
            Self::Fam => "FAM",
            Self::Gold => "GOLD",
        }
    }

    /// The life area the attribute stands for.
    pub fn label(self) -> &'static str {
        match self {
            Self::Atk => "Strength Training",
            Self::Def => "Bodybuilding & Health",
            Self::Cha => "People Skills",
            Self::Int => "Books & Learning",
            Self::Wis => "Reflection & Life Experience",
            Self::Luk => "Random Opportunities",
            Self::Sta => "Energy, Stamina",
            Self::Fam => "Fame and Popularity",
            Self::Gold => "Finance & Resources",
        }
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// One day's counters. Absent stats read as zero.
pub type DayCounters = BTreeMap<Stat, u8>;

/// The whole log document: date-keyed, so the greatest key is the most
/// recent entry (ISO dates order lexicographically by calendar order).
/// Entries are never deleted; re-logging a date overwrites it wholesale.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RpgLog {
    days: BTreeMap<NaiveDate, DayCounters>,
}

impl RpgLog {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn counters_for(&self, date: NaiveDate) -> Option<&DayCounters> {
        self.days.get(&date)
    }

    /// Upsert one day's counters. Every count must be in `0..=10`; a
    /// violation fails without touching the log. The date's previous
    /// entry, if any, is replaced entirely (overwrite, not merge).
    pub fn log(&mut self, date: NaiveDate, counters: DayCounters) -> Result<()> {
        for (&stat, &value) in &counters {
            if value > MAX_STAT_VALUE {
                return Err(GrowError::StatOutOfRange {
                    stat: stat.code(),
                    value,
                });
            }
        }
        self.days.insert(date, counters);
        Ok(())
    }

    /// Upsert the local calendar date. Returns the date logged.
    pub fn log_today(&mut self, counters: DayCounters) -> Result<NaiveDate> {
        let today = Local::now().date_naive();
        self.log(today, counters)?;
        Ok(today)
    }

    /// The most recent day's values in canonical stat order, absent
    /// stats defaulting to zero.
    pub fn latest_snapshot(&self) -> Result<Snapshot> {
        let (&date, counters) = self.days.last_key_value().ok_or(GrowError::EmptyLog)?;
        let mut values = [0u8; STAT_COUNT];
        for (slot, stat) in values.iter_mut().zip(Stat::ALL) {
            *slot = counters.get(&stat).copied().unwrap_or(0);
        }
        Ok(Snapshot { date, values })
    }
}

/// The most recent logged day, reduced to chart-ready values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub date: NaiveDate,
    pub values: [u8; STAT_COUNT],
}

/// Publish the latest snapshot to the desktop: render the radar chart to
/// `image_path`, set it as wallpaper, and send a notification. Depends
/// only on the capability traits; render failure is logged and skips the
/// desktop calls (the previous image stays in place).
pub fn publish(
    rpg: &RpgLog,
    theme: Theme,
    renderer: &dyn ChartRenderer,
    wallpaper: &dyn WallpaperSetter,
    notifier: &dyn Notifier,
    image_path: &Path,
) -> Result<()> {
    let snapshot = rpg.latest_snapshot()?;
    let series = radar::build_series(&snapshot.values);
    let palette = Palette::for_theme(theme);
    if let Err(err) = renderer.render(&snapshot, &series, &palette, image_path) {
        error!("chart render to {} failed: {err}", image_path.display());
        return Ok(());
    }
    wallpaper.set(image_path);
    notifier.notify(
        "RPG Progress Tracker",
        "Your daily stats have been logged and your wallpaper updated!",
    );
    Ok(())
}
