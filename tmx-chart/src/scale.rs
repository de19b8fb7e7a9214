//! Position scales and the scale builder for the matrix.

use crate::color::ColorScale;
use crate::config::{Layout, TEMP_MAX, TEMP_MIN};

/// Discrete band scale: every domain value gets an equal slot of the range,
/// with inner padding between bands and outer padding at both ends.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale<K> {
    domain: Vec<K>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl<K: PartialEq + Copy> BandScale<K> {
    pub fn new(domain: Vec<K>, range: (f64, f64)) -> Self {
        let mut scale = BandScale {
            domain,
            range,
            padding_inner: 0.0,
            padding_outer: 0.0,
            start: 0.0,
            step: 0.0,
            bandwidth: 0.0,
        };
        scale.rescale();
        scale
    }

    /// Set inner and outer padding to the same fraction of a step.
    pub fn padding(mut self, padding: f64) -> Self {
        self.padding_inner = padding.clamp(0.0, 1.0);
        self.padding_outer = padding;
        self.rescale();
        self
    }

    fn rescale(&mut self) {
        let n = self.domain.len() as f64;
        let (r0, r1) = self.range;
        let (lo, hi) = if r1 < r0 { (r1, r0) } else { (r0, r1) };
        self.step = (hi - lo) / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        // bands are centered in the range
        self.start = lo + (hi - lo - self.step * (n - self.padding_inner)) * 0.5;
        self.bandwidth = self.step * (1.0 - self.padding_inner);
    }

    /// Offset of the band for `key`, or `None` when `key` is not in the domain.
    pub fn position(&self, key: &K) -> Option<f64> {
        self.domain
            .iter()
            .position(|k| k == key)
            .map(|i| self.start + self.step * i as f64)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn domain(&self) -> &[K] {
        &self.domain
    }
}

/// Continuous linear scale. A zero-width domain maps to the range midpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        LinearScale { domain, range }
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = if d1 == d0 { 0.5 } else { (value - d0) / (d1 - d0) };
        r0 + (r1 - r0) * t
    }
}

/// The three scales shared by the grid and the legend. Built once per chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Scales {
    pub color: ColorScale,
    /// Year to column offset.
    pub x: BandScale<i32>,
    /// Zero-based month to row offset.
    pub y: BandScale<u32>,
}

impl Scales {
    pub fn build(years: &[i32], layout: &Layout) -> Scales {
        let x = BandScale::new(years.to_vec(), (0.0, layout.grid_width(years.len())))
            .padding(layout.band_padding);
        let y = BandScale::new((0..12).collect(), (0.0, layout.grid_height()))
            .padding(layout.band_padding);
        Scales {
            color: ColorScale::new(TEMP_MIN, TEMP_MAX),
            x,
            y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_band_without_padding() {
        let scale = BandScale::new(vec![2021, 2022, 2023, 2024], (0.0, 400.0));
        assert_eq!(scale.position(&2021), Some(0.0));
        assert_eq!(scale.position(&2023), Some(200.0));
        assert_eq!(scale.bandwidth(), 100.0);
        assert_eq!(scale.position(&1999), None);
    }

    #[test]
    fn test_band_padding_splits_gutter() {
        let years: Vec<i32> = (2014..=2023).collect();
        let scale = BandScale::new(years, (0.0, 1000.0)).padding(0.05);
        let step = 1000.0 / 10.05;
        assert!(close(scale.step(), step));
        assert!(close(scale.bandwidth(), step * 0.95));
        let first = scale.position(&2014).unwrap();
        assert!(close(first, (1000.0 - step * 9.95) / 2.0));
        // centered
        let last = scale.position(&2023).unwrap();
        assert!(close(1000.0 - (last + scale.bandwidth()), first));
        // consecutive bands are one step apart
        let second = scale.position(&2015).unwrap();
        assert!(close(second - first, step));
    }

    #[test]
    fn test_scales_build_default_layout() {
        let years: Vec<i32> = (2014..=2023).collect();
        let scales = Scales::build(&years, &Layout::default());
        assert!(scales.x.bandwidth() < 100.0);
        assert!(scales.y.bandwidth() < 70.0);
        assert_eq!(scales.y.domain().len(), 12);
        assert!(scales.y.position(&11).unwrap() + scales.y.bandwidth() <= 840.0);
        assert_eq!(scales.color.domain(), (0.0, 40.0));
    }

    #[test]
    fn test_linear_inverted_range() {
        let y = LinearScale::new((0.0, 40.0), (66.0, 4.0));
        assert_eq!(y.apply(0.0), 66.0);
        assert_eq!(y.apply(40.0), 4.0);
        assert_eq!(y.apply(20.0), 35.0);
    }

    #[test]
    fn test_linear_degenerate_domain() {
        let x = LinearScale::new((0.0, 0.0), (4.0, 96.0));
        assert_eq!(x.apply(0.0), 50.0);
    }
}
