//! Radar-chart geometry: pure transforms, no I/O.

use std::f64::consts::TAU;

use crate::store::rpg::STAT_COUNT;

/// One (angle, value) vertex of the radar polygon. Angles are radians
/// counter-clockwise from the positive x axis.
pub type RadarPoint = (f64, f64);

/// Spread the nine values over evenly spaced angles starting at 0, then
/// repeat the first point to close the polygon: always exactly 10 pairs.
pub fn build_series(values: &[u8; STAT_COUNT]) -> Vec<RadarPoint> {
    let mut series: Vec<RadarPoint> = values
        .iter()
        .enumerate()
        .map(|(i, &value)| (TAU * i as f64 / STAT_COUNT as f64, f64::from(value)))
        .collect();
    series.push(series[0]);
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_has_ten_points_and_closes() {
        let series = build_series(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(series.len(), STAT_COUNT + 1);
        assert_eq!(series[9], series[0]);
    }

    #[test]
    fn angles_are_evenly_spaced_from_zero() {
        let series = build_series(&[0; STAT_COUNT]);
        assert_eq!(series[0].0, 0.0);
        let step = TAU / STAT_COUNT as f64;
        for (i, &(angle, _)) in series.iter().take(STAT_COUNT).enumerate() {
            assert!((angle - step * i as f64).abs() < 1e-12);
        }
    }

    #[test]
    fn values_carry_through_in_order() {
        let series = build_series(&[0, 1, 2, 3, 4, 5, 6, 7, 10]);
        let values: Vec<f64> = series.iter().map(|&(_, v)| v).collect();
        assert_eq!(values, [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 10.0, 0.0]);
    }
}
