//! Theme palettes and the chart-rendering seam.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::radar::RadarPoint;
use crate::store::rpg::{MAX_STAT_VALUE, Snapshot, Stat};
use crate::store::settings::Theme;

/// Chart colors matched to the application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub grid: &'static str,
    pub line: &'static str,
    pub fill: &'static str,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: "#212121",
                text: "#eeeeee",
                grid: "#555555",
                line: "#3f51b5",
                fill: "#3f51b5",
            },
            Theme::Light => Self {
                background: "#f0f0f0",
                text: "#111111",
                grid: "#bbbbbb",
                line: "#3f51b5",
                fill: "#3f51b5",
            },
        }
    }
}

/// Renders a radar series to an image file on disk. Implementations are
/// swappable; the publication pipeline only sees this trait.
pub trait ChartRenderer {
    fn render(
        &self,
        snapshot: &Snapshot,
        series: &[RadarPoint],
        palette: &Palette,
        path: &Path,
    ) -> Result<()>;
}

/// The shipped renderer: a self-contained SVG radar chart with grid
/// rings, spokes, axis labels and a dated title.
pub struct SvgRadar {
    pub size: u32,
}

impl Default for SvgRadar {
    fn default() -> Self {
        Self { size: 800 }
    }
}

impl ChartRenderer for SvgRadar {
    fn render(
        &self,
        snapshot: &Snapshot,
        series: &[RadarPoint],
        palette: &Palette,
        path: &Path,
    ) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.draw(snapshot, series, palette))?;
        Ok(())
    }
}

impl SvgRadar {
    fn draw(&self, snapshot: &Snapshot, series: &[RadarPoint], palette: &Palette) -> String {
        let size = f64::from(self.size);
        let center = size / 2.0;
        let radius = size * 0.375;
        let label_radius = radius + size * 0.04;

        let mut svg = String::new();
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{0}" height="{0}" viewBox="0 0 {0} {0}">"#,
            self.size
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            palette.background
        ));
        svg.push('\n');

        // Grid rings every 2 counts up to the maximum, tick values on the
        // first axis.
        for tick in (2..=u32::from(MAX_STAT_VALUE)).step_by(2) {
            let ring = radius * f64::from(tick) / f64::from(MAX_STAT_VALUE);
            svg.push_str(&format!(
                r#"<circle cx="{center}" cy="{center}" r="{ring:.1}" fill="none" stroke="{}" stroke-width="1"/>"#,
                palette.grid
            ));
            svg.push('\n');
            svg.push_str(&format!(
                r#"<text x="{:.1}" y="{:.1}" fill="{}" font-size="{:.0}">{tick}</text>"#,
                center + ring + 4.0,
                center - 4.0,
                palette.text,
                size * 0.016,
            ));
            svg.push('\n');
        }

        // One spoke and label per stat axis.
        for (stat, &(angle, _)) in Stat::ALL.iter().zip(series) {
            let (x, y) = polar(center, radius, angle, 1.0);
            svg.push_str(&format!(
                r#"<line x1="{center}" y1="{center}" x2="{x:.1}" y2="{y:.1}" stroke="{}" stroke-width="1"/>"#,
                palette.grid
            ));
            svg.push('\n');
            let (lx, ly) = polar(center, label_radius, angle, 1.0);
            svg.push_str(&format!(
                r#"<text x="{lx:.1}" y="{ly:.1}" fill="{}" font-size="{:.0}" text-anchor="middle">{}</text>"#,
                palette.text,
                size * 0.02,
                xml_escape(stat.label()),
            ));
            svg.push('\n');
        }

        // The data polygon, closed by the repeated first point.
        let points: Vec<String> = series
            .iter()
            .map(|&(angle, value)| {
                let (x, y) = polar(center, radius, angle, value / f64::from(MAX_STAT_VALUE));
                format!("{x:.1},{y:.1}")
            })
            .collect();
        svg.push_str(&format!(
            r#"<polygon points="{}" fill="{}" fill-opacity="0.25" stroke="{}" stroke-width="2"/>"#,
            points.join(" "),
            palette.fill,
            palette.line,
        ));
        svg.push('\n');

        svg.push_str(&format!(
            r#"<text x="{center}" y="{:.1}" fill="{}" font-size="{:.0}" text-anchor="middle">RPG Stats for {}</text>"#,
            size * 0.05,
            palette.text,
            size * 0.03,
            snapshot.date,
        ));
        svg.push_str("\n</svg>\n");
        svg
    }
}

fn polar(center: f64, radius: f64, angle: f64, fraction: f64) -> (f64, f64) {
    let r = radius * fraction;
    (center + r * angle.cos(), center - r * angle.sin())
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radar::build_series;
    use tempfile::tempdir;

    fn snapshot() -> Snapshot {
        Snapshot {
            date: "2024-05-01".parse().unwrap(),
            values: [3, 4, 5, 6, 7, 8, 9, 10, 1],
        }
    }

    #[test]
    fn render_writes_a_dated_svg() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wallpaper").join("wallpaper.svg");
        let snap = snapshot();
        let series = build_series(&snap.values);

        SvgRadar::default()
            .render(&snap, &series, &Palette::for_theme(Theme::Dark), &path)
            .unwrap();

        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("RPG Stats for 2024-05-01"));
        assert!(svg.contains("#212121"));
        assert!(svg.contains("<polygon"));
        assert!(svg.contains("Finance &amp; Resources"));
    }

    #[test]
    fn light_palette_uses_light_background() {
        let palette = Palette::for_theme(Theme::Light);
        assert_eq!(palette.background, "#f0f0f0");
        let snap = snapshot();
        let series = build_series(&snap.values);
        let svg = SvgRadar::default().draw(&snap, &series, &palette);
        assert!(svg.contains("#f0f0f0"));
        assert!(!svg.contains("#212121"));
    }

    #[test]
    fn polygon_has_ten_vertices() {
        let snap = snapshot();
        let series = build_series(&snap.values);
        let svg = SvgRadar::default().draw(&snap, &series, &Palette::for_theme(Theme::Dark));
        let points = svg
            .lines()
            .find(|line| line.starts_with("<polygon"))
            .unwrap();
        let count = points
            .split_once(r#"points=""#)
            .unwrap()
            .1
            .split_once('"')
            .unwrap()
            .0
            .split_whitespace()
            .count();
        assert_eq!(count, 10);
    }
}
