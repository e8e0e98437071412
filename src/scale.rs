//! Domain to pixel mappings.
//!
//! The categorical scales follow the usual band/point model: the range is cut
//! into `n` steps, `padding_inner` of a step is left between bands and
//! `padding_outer` steps at either end, and the leftover space is split by
//! `align`. A point scale is a band scale with inner padding 1, so each band
//! collapses to a point.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ChartError, Result};

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

pub const DEFAULT_TICK_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Position of `value` within the domain, 0 at the start and 1 at the end.
    /// Not clamped. A collapsed domain puts everything at 0.5.
    pub fn normalize(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let span = d1 - d0;
        if span == 0.0 {
            return 0.5;
        }
        (value - d0) / span
    }

    pub fn map(&self, value: f64) -> f64 {
        let (r0, r1) = self.range;
        r0 + self.normalize(value) * (r1 - r0)
    }

    pub fn invert(&self, pixel: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r1 == r0 {
            return (d0 + d1) / 2.0;
        }
        d0 + (pixel - r0) / (r1 - r0) * (d1 - d0)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }

    /// Formats tick values with just enough decimals for the tick step.
    pub fn tick_format(&self, count: usize) -> impl Fn(f64) -> String + use<> {
        let step = tick_step(self.domain.0, self.domain.1, count);
        let precision = if step == 0.0 || !step.is_finite() {
            0
        } else {
            (-step.abs().log10().floor()).max(0.0) as usize
        };
        move |value| format!("{value:.precision$}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
    step: f64,
    bandwidth: f64,
    start: f64,
}

impl BandScale {
    /// Band scale with the same inner and outer padding.
    pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        Self::with_padding(domain, range, padding, padding, 0.5)
    }

    pub fn with_padding(
        domain: Vec<String>,
        range: (f64, f64),
        padding_inner: f64,
        padding_outer: f64,
        align: f64,
    ) -> Self {
        let padding_inner = padding_inner.clamp(0.0, 1.0);
        let padding_outer = padding_outer.max(0.0);
        let align = align.clamp(0.0, 1.0);
        let n = domain.len() as f64;
        let (r0, r1) = range;
        let (lo, hi) = if r1 < r0 { (r1, r0) } else { (r0, r1) };
        let step = (hi - lo) / (n - padding_inner + padding_outer * 2.0).max(1.0);
        let start = lo + (hi - lo - step * (n - padding_inner)) * align;
        let bandwidth = step * (1.0 - padding_inner);
        Self {
            domain,
            range,
            padding_inner,
            padding_outer,
            step,
            bandwidth,
            start,
        }
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn padding_inner(&self) -> f64 {
        self.padding_inner
    }

    pub fn padding_outer(&self) -> f64 {
        self.padding_outer
    }

    /// Start of the band for `label`, or `None` when the label is not in the domain.
    pub fn map(&self, label: &str) -> Option<f64> {
        let index = self.domain.iter().position(|d| d == label)?;
        // A reversed range lists bands from the far end.
        let slot = if self.range.1 < self.range.0 {
            self.domain.len() - 1 - index
        } else {
            index
        };
        Some(self.start + self.step * slot as f64)
    }
}

/// Evenly spaced categorical positions; the first label sits at the range
/// start and the last at the range end.
#[derive(Debug, Clone, PartialEq)]
pub struct PointScale {
    band: BandScale,
}

impl PointScale {
    pub fn new(domain: Vec<String>, range: (f64, f64)) -> Self {
        Self {
            band: BandScale::with_padding(domain, range, 1.0, 0.0, 0.5),
        }
    }

    pub fn domain(&self) -> &[String] {
        self.band.domain()
    }

    pub fn range(&self) -> (f64, f64) {
        self.band.range()
    }

    pub fn step(&self) -> f64 {
        self.band.step()
    }

    pub fn map(&self, label: &str) -> Option<f64> {
        self.band.map(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn parse(input: &str) -> Result<Self> {
        let caps = HEX_COLOR_RE
            .captures(input.trim())
            .ok_or_else(|| ChartError::InvalidColor(input.to_string()))?;
        let hex = &caps[1];
        let channel = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0);
        if hex.len() == 3 {
            let expand = |i: usize| {
                let digit = &hex[i..i + 1];
                channel(&format!("{digit}{digit}"))
            };
            return Ok(Self {
                r: expand(0),
                g: expand(1),
                b: expand(2),
            });
        }
        Ok(Self {
            r: channel(&hex[0..2]),
            g: channel(&hex[2..4]),
            b: channel(&hex[4..6]),
        })
    }
}

/// Linear scale from numbers to colors, interpolated channel by channel in RGB.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    position: LinearScale,
    from: Rgb,
    to: Rgb,
}

impl ColorScale {
    pub fn new(domain: (f64, f64), from: &str, to: &str) -> Result<Self> {
        Ok(Self {
            position: LinearScale::new(domain, (0.0, 1.0)),
            from: Rgb::parse(from)?,
            to: Rgb::parse(to)?,
        })
    }

    /// Values outside the domain extrapolate; channels are clamped to 0..=255.
    pub fn map(&self, value: f64) -> String {
        let t = self.position.map(value);
        let lerp = |a: u8, b: u8| {
            let v = a as f64 + (b as f64 - a as f64) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        format!(
            "rgb({}, {}, {})",
            lerp(self.from.r, self.to.r),
            lerp(self.from.g, self.to.g),
            lerp(self.from.b, self.to.b)
        )
    }
}

/// Returns `(i1, i2, inc)`; a negative `inc` means the step is `1 / -inc`.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let pos = 10f64.powf(-power) / factor;
        i1 = (start * pos).round();
        i2 = (stop * pos).round();
        if i1 / pos < start {
            i1 += 1.0;
        }
        if i2 / pos > stop {
            i2 -= 1.0;
        }
        inc = -pos;
    } else {
        inc = 10f64.powf(power) * factor;
        i1 = (start / inc).round();
        i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Round tick values (1, 2 or 5 times a power of ten) covering `[start, stop]`.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count as f64);
    if i2 < i1 {
        return Vec::new();
    }
    let n = (i2 - i1 + 1.0) as usize;
    let mut out: Vec<f64> = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect();
    if reverse {
        out.reverse();
    }
    out
}

pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    if count == 0 || start == stop {
        return 0.0;
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (_, _, inc) = tick_spec(lo, hi, count as f64);
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse { -step } else { step }
}
