use std::f64::consts::{PI, TAU};

use serde::Serialize;

use crate::surface::{Element, fmt_num};

const EPSILON: f64 = 1e-12;

/// Polyline through `points` in order: `M x,y L x,y ...`.
pub fn line_path(points: &[(f64, f64)]) -> String {
    let mut d = String::new();
    for (idx, (x, y)) in points.iter().enumerate() {
        d.push(if idx == 0 { 'M' } else { 'L' });
        d.push_str(&fmt_num(*x));
        d.push(',');
        d.push_str(&fmt_num(*y));
    }
    d
}

/// Maps each datum through the accessors and builds the polyline.
pub fn line<T>(data: &[T], x: impl Fn(&T) -> f64, y: impl Fn(&T) -> f64) -> String {
    let points: Vec<(f64, f64)> = data.iter().map(|d| (x(d), y(d))).collect();
    line_path(&points)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Bar anchored at `baseline`; a smaller `top` gives a taller bar.
    pub fn bar(x: f64, width: f64, top: f64, baseline: f64) -> Self {
        Self {
            x,
            y: top,
            width,
            height: baseline - top,
        }
    }

    pub fn to_element(self) -> Element {
        Element::new("rect")
            .num("x", self.x)
            .num("y", self.y)
            .num("width", self.width)
            .num("height", self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

impl Circle {
    pub fn to_element(self) -> Element {
        Element::new("circle")
            .num("cx", self.cx)
            .num("cy", self.cy)
            .num("r", self.r)
    }
}

/// One slice of a pie partition. Angles are radians from 12 o'clock, clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PieArc {
    pub index: usize,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl PieArc {
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// Splits the full circle in proportion to `values`, keeping input order.
/// Negative values count as zero; a zero total gives every slice a zero span.
pub fn pie(values: &[f64]) -> Vec<PieArc> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    let k = if total > 0.0 { TAU / total } else { 0.0 };
    let mut angle = 0.0;
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let span = value.max(0.0) * k;
            let arc = PieArc {
                index,
                value: *value,
                start_angle: angle,
                end_angle: angle + span,
            };
            angle += span;
            arc
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGenerator {
    pub inner_radius: f64,
    pub outer_radius: f64,
}

impl ArcGenerator {
    pub fn new(inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            inner_radius,
            outer_radius,
        }
    }

    pub fn centroid(&self, arc: &PieArc) -> (f64, f64) {
        let r = (self.inner_radius + self.outer_radius) / 2.0;
        let a = (arc.start_angle + arc.end_angle) / 2.0;
        polar(r, a)
    }

    /// SVG path for the slice, centered on the origin.
    pub fn path(&self, arc: &PieArc) -> String {
        let r1 = self.outer_radius.max(0.0);
        let r0 = self.inner_radius.clamp(0.0, r1);
        let span = arc.span().abs();
        if r1 <= EPSILON {
            return "M0,0Z".to_string();
        }
        let sweep = if arc.end_angle >= arc.start_angle { 1 } else { 0 };

        if span >= TAU - EPSILON {
            // A full circle needs two half arcs.
            let mut d = full_circle(r1, sweep);
            if r0 > EPSILON {
                d.push_str(&full_circle(r0, 1 - sweep));
            }
            return d;
        }

        let large = if span >= PI { 1 } else { 0 };
        let (x0, y0) = polar(r1, arc.start_angle);
        let (x1, y1) = polar(r1, arc.end_angle);
        let mut d = format!("M{},{}", fmt_num(x0), fmt_num(y0));
        if span > EPSILON {
            d.push_str(&format!(
                "A{r},{r},0,{large},{sweep},{},{}",
                fmt_num(x1),
                fmt_num(y1),
                r = fmt_num(r1)
            ));
        }
        if r0 > EPSILON {
            let (x2, y2) = polar(r0, arc.end_angle);
            let (x3, y3) = polar(r0, arc.start_angle);
            d.push_str(&format!("L{},{}", fmt_num(x2), fmt_num(y2)));
            if span > EPSILON {
                d.push_str(&format!(
                    "A{r},{r},0,{large},{},{},{}",
                    1 - sweep,
                    fmt_num(x3),
                    fmt_num(y3),
                    r = fmt_num(r0)
                ));
            }
        } else {
            d.push_str("L0,0");
        }
        d.push('Z');
        d
    }
}

fn full_circle(r: f64, sweep: i32) -> String {
    let r_s = fmt_num(r);
    format!(
        "M0,{neg}A{r_s},{r_s},0,1,{sweep},0,{r_s}A{r_s},{r_s},0,1,{sweep},0,{neg}Z",
        neg = fmt_num(-r)
    )
}

fn polar(r: f64, angle: f64) -> (f64, f64) {
    (r * angle.sin(), -r * angle.cos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn line_path_connects_points_in_order() {
        assert_eq!(line_path(&[(0.0, 10.0), (5.5, 2.0), (8.0, 3.0)]), "M0,10L5.5,2L8,3");
        assert_eq!(line_path(&[]), "");
    }

    #[test]
    fn bar_grows_up_from_baseline() {
        let rect = Rect::bar(10.0, 20.0, 100.0, 300.0);
        assert_relative_eq!(rect.height, 200.0);
        assert_eq!(rect.to_element().get_attr("y"), Some("100"));
    }

    #[test]
    fn pie_spans_follow_shares() {
        let arcs = pie(&[45.0, 30.0, 15.0, 10.0]);
        assert_eq!(arcs.len(), 4);
        let total: f64 = arcs.iter().map(PieArc::span).sum();
        assert_relative_eq!(total.to_degrees(), 360.0, epsilon = 1e-9);
        for (arc, value) in arcs.iter().zip([45.0, 30.0, 15.0, 10.0]) {
            assert_relative_eq!(arc.span() / TAU, value / 100.0, epsilon = 1e-12);
        }
        assert_relative_eq!(arcs[0].start_angle, 0.0);
        assert_relative_eq!(arcs[3].end_angle, TAU, epsilon = 1e-12);
    }

    #[test]
    fn pie_with_zero_total_is_empty() {
        let arcs = pie(&[0.0, 0.0]);
        assert!(arcs.iter().all(|a| a.span() == 0.0));
    }

    #[test]
    fn arc_path_and_centroid() {
        let arc = ArcGenerator::new(0.0, 100.0);
        let quarter = PieArc {
            index: 0,
            value: 1.0,
            start_angle: 0.0,
            end_angle: PI / 2.0,
        };
        assert_eq!(arc.path(&quarter), "M0,-100A100,100,0,0,1,100,0L0,0Z");
        let (cx, cy) = arc.centroid(&quarter);
        assert_relative_eq!(cx, 50.0 * (PI / 4.0).sin());
        assert_relative_eq!(cy, -50.0 * (PI / 4.0).cos());

        let whole = PieArc {
            index: 0,
            value: 1.0,
            start_angle: 0.0,
            end_angle: TAU,
        };
        assert_eq!(arc.path(&whole), "M0,-100A100,100,0,1,1,0,100A100,100,0,1,1,0,-100Z");
    }
}
