use tracing::debug;

use crate::axis::{Orient, axis};
use crate::config::Config;
use crate::data::DataSource;
use crate::error::Result;
use crate::ir::{ChartKind, ScatterPoint};
use crate::scale::LinearScale;
use crate::shape::{Circle, line};
use crate::surface::{Element, Surface, translate};

use super::{attach, plot_origin};

const X_DOMAIN: (f64, f64) = (0.0, 100.0);
const Y_DOMAIN: (f64, f64) = (0.0, 10.0);
const X_LABEL_OFFSET: f64 = 40.0;
const Y_LABEL_OFFSET: f64 = -40.0;

/// Humidity against pressure, dots colored by rain, with a fixed trendline.
pub fn assemble_scatter(
    surface: &mut Surface,
    config: &Config,
    source: &mut impl DataSource<Vec<ScatterPoint>>,
) -> Result<()> {
    let layout = &config.layout;
    let theme = &config.theme;
    let scatter = &config.scatter;
    let (width, height) = (layout.width(), layout.height());
    let g = attach(surface, ChartKind::Scatter, layout, plot_origin(layout))?;

    let data = source.produce();

    let x = LinearScale::new(X_DOMAIN, (0.0, width));
    let y = LinearScale::new(Y_DOMAIN, (height, 0.0));

    for d in &data {
        let dot = Circle {
            cx: x.map(d.humidity as f64),
            cy: y.map(d.pressure),
            r: scatter.dot_radius,
        };
        let fill = if d.rain {
            &theme.rain_color
        } else {
            &theme.dry_color
        };
        g.append(
            dot.to_element()
                .attr("class", "scatter-dot")
                .attr("fill", fill.as_str()),
        );
    }

    let trend = line(
        &data,
        |d| x.map(d.humidity as f64),
        |d| y.map(scatter.trend_intercept + d.humidity as f64 * scatter.trend_slope),
    );
    g.append(
        Element::new("path")
            .attr("class", "line")
            .attr("fill", "none")
            .attr("stroke", theme.trend_color.as_str())
            .num("stroke-width", theme.trend_width)
            .attr("d", trend),
    );

    g.append(
        axis(Orient::Bottom, &x, &theme.font_family).attr("transform", translate(0.0, height)),
    );
    g.append(axis(Orient::Left, &y, &theme.font_family));

    g.append(
        Element::new("text")
            .attr("class", "axis-label")
            .attr("text-anchor", "middle")
            .attr("font-family", theme.font_family.as_str())
            .num("x", width / 2.0)
            .num("y", height + X_LABEL_OFFSET)
            .text(scatter.x_label.as_str()),
    );
    g.append(
        Element::new("text")
            .attr("class", "axis-label")
            .attr("text-anchor", "middle")
            .attr("font-family", theme.font_family.as_str())
            .attr("transform", "rotate(-90)")
            .num("x", -height / 2.0)
            .num("y", Y_LABEL_OFFSET)
            .text(scatter.y_label.as_str()),
    );

    debug!(chart = %ChartKind::Scatter, dots = data.len(), "chart assembled");
    Ok(())
}
