use crate::scale::{BandScale, DEFAULT_TICK_COUNT, LinearScale, PointScale};
use crate::surface::{Element, fmt_num, translate};

const TICK_SIZE_INNER: f64 = 6.0;
const TICK_SIZE_OUTER: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

/// Scales an axis can draw: tick positions with their labels, plus the range
/// the domain line covers.
pub trait AxisScale {
    fn ticks(&self) -> Vec<(f64, String)>;
    fn axis_range(&self) -> (f64, f64);
}

impl AxisScale for LinearScale {
    fn ticks(&self) -> Vec<(f64, String)> {
        let format = self.tick_format(DEFAULT_TICK_COUNT);
        LinearScale::ticks(self, DEFAULT_TICK_COUNT)
            .into_iter()
            .map(|value| (self.map(value), format(value)))
            .collect()
    }

    fn axis_range(&self) -> (f64, f64) {
        self.range()
    }
}

impl AxisScale for PointScale {
    fn ticks(&self) -> Vec<(f64, String)> {
        self.domain()
            .iter()
            .filter_map(|label| Some((self.map(label)?, label.clone())))
            .collect()
    }

    fn axis_range(&self) -> (f64, f64) {
        self.range()
    }
}

impl AxisScale for BandScale {
    fn ticks(&self) -> Vec<(f64, String)> {
        let half = self.bandwidth() / 2.0;
        self.domain()
            .iter()
            .filter_map(|label| Some((self.map(label)? + half, label.clone())))
            .collect()
    }

    fn axis_range(&self) -> (f64, f64) {
        self.range()
    }
}

/// Builds an axis group: a domain path and one tick per tick value.
/// The caller positions the group (bottom axes sit at the plot height).
pub fn axis(orient: Orient, scale: &impl AxisScale, font_family: &str) -> Element {
    let (r0, r1) = scale.axis_range();
    let (anchor, domain) = match orient {
        Orient::Bottom => (
            "middle",
            format!(
                "M{r0},{o}V0H{r1}V{o}",
                r0 = fmt_num(r0),
                r1 = fmt_num(r1),
                o = fmt_num(TICK_SIZE_OUTER)
            ),
        ),
        Orient::Left => (
            "end",
            format!(
                "M{o},{r0}H0V{r1}H{o}",
                r0 = fmt_num(r0),
                r1 = fmt_num(r1),
                o = fmt_num(-TICK_SIZE_OUTER)
            ),
        ),
    };

    let mut group = Element::new("g")
        .attr("fill", "none")
        .attr("font-size", "10")
        .attr("font-family", font_family)
        .attr("text-anchor", anchor);
    group.append(
        Element::new("path")
            .attr("class", "domain")
            .attr("stroke", "currentColor")
            .attr("d", domain),
    );

    let offset = TICK_SIZE_INNER.max(0.0) + TICK_PADDING;
    for (position, label) in scale.ticks() {
        let tick = match orient {
            Orient::Bottom => Element::new("g").attr("transform", translate(position, 0.0)),
            Orient::Left => Element::new("g").attr("transform", translate(0.0, position)),
        };
        let tick = group.append(tick.attr("class", "tick").attr("opacity", "1"));
        match orient {
            Orient::Bottom => {
                tick.append(
                    Element::new("line")
                        .attr("stroke", "currentColor")
                        .num("y2", TICK_SIZE_INNER),
                );
                tick.append(
                    Element::new("text")
                        .attr("fill", "currentColor")
                        .num("y", offset)
                        .attr("dy", "0.71em")
                        .text(label),
                );
            }
            Orient::Left => {
                tick.append(
                    Element::new("line")
                        .attr("stroke", "currentColor")
                        .num("x2", -TICK_SIZE_INNER),
                );
                tick.append(
                    Element::new("text")
                        .attr("fill", "currentColor")
                        .num("x", -offset)
                        .attr("dy", "0.32em")
                        .text(label),
                );
            }
        }
    }
    group
}
