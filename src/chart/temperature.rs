use tracing::debug;

use crate::axis::{Orient, axis};
use crate::config::Config;
use crate::data::DataSource;
use crate::error::{ChartError, Result};
use crate::ir::{ChartKind, WeeklyTemperaturePoint};
use crate::scale::{LinearScale, PointScale};
use crate::shape::line_path;
use crate::surface::{Element, Surface, translate};

use super::{attach, plot_origin};

const Y_DOMAIN: (f64, f64) = (0.0, 35.0);
const LEGEND_INSET: f64 = 100.0;

/// Weekly max/min temperature lines over a categorical week axis.
pub fn assemble_temperature(
    surface: &mut Surface,
    config: &Config,
    source: &mut impl DataSource<Vec<WeeklyTemperaturePoint>>,
) -> Result<()> {
    let layout = &config.layout;
    let theme = &config.theme;
    let (width, height) = (layout.width(), layout.height());
    let g = attach(surface, ChartKind::Temperature, layout, plot_origin(layout))?;

    let data = source.produce();

    let x = PointScale::new(data.iter().map(|d| d.week.clone()).collect(), (0.0, width));
    let y = LinearScale::new(Y_DOMAIN, (height, 0.0));

    let mut max_points = Vec::with_capacity(data.len());
    let mut min_points = Vec::with_capacity(data.len());
    for d in &data {
        let px = x.map(&d.week).ok_or_else(|| ChartError::UnknownCategory {
            chart: "temperature",
            label: d.week.clone(),
        })?;
        max_points.push((px, y.map(d.max_temp)));
        min_points.push((px, y.map(d.min_temp)));
    }

    for (points, color) in [
        (&max_points, &theme.max_temp_color),
        (&min_points, &theme.min_temp_color),
    ] {
        g.append(
            Element::new("path")
                .attr("class", "line")
                .attr("fill", "none")
                .attr("stroke", color.as_str())
                .num("stroke-width", theme.line_width)
                .attr("d", line_path(points)),
        );
    }

    g.append(
        axis(Orient::Bottom, &x, &theme.font_family).attr("transform", translate(0.0, height)),
    );
    g.append(axis(Orient::Left, &y, &theme.font_family));

    let legend = g.append(
        Element::new("g")
            .attr("class", "legend")
            .attr("transform", translate(width - LEGEND_INSET, 0.0)),
    );
    for (row, (label, color)) in [
        ("Avg. Max Temp", &theme.max_temp_color),
        ("Avg. Min Temp", &theme.min_temp_color),
    ]
    .into_iter()
    .enumerate()
    {
        let baseline = 10.0 + row as f64 * 20.0;
        legend.append(
            Element::new("rect")
                .attr("class", "swatch")
                .num("x", 0.0)
                .num("y", baseline - 9.0)
                .num("width", 10.0)
                .num("height", 10.0)
                .attr("fill", color.as_str()),
        );
        legend.append(
            Element::new("text")
                .num("x", 15.0)
                .num("y", baseline)
                .attr("fill", color.as_str())
                .attr("font-family", theme.font_family.as_str())
                .text(label),
        );
    }

    debug!(chart = %ChartKind::Temperature, points = data.len(), "chart assembled");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SyntheticSource;

    fn render() -> Surface {
        let mut surface = Surface::dashboard();
        let mut source = SyntheticSource::new(Some(3));
        assemble_temperature(&mut surface, &Config::default(), &mut source).unwrap();
        surface
    }

    #[test]
    fn draws_two_lines_through_fifteen_weeks() {
        let surface = render();
        let svg = surface.container("temperature-chart").unwrap().svg().unwrap();
        let lines: Vec<_> = svg
            .find_all("path")
            .into_iter()
            .filter(|p| p.has_class("line"))
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].get_attr("stroke"), Some("steelblue"));
        assert_eq!(lines[1].get_attr("stroke"), Some("orange"));
        for line in lines {
            let d = line.get_attr("d").unwrap();
            assert!(d.starts_with("M0,"));
            assert_eq!(d.matches('L').count(), 14);
        }
    }

    #[test]
    fn min_line_sits_below_max_line() {
        let surface = render();
        let svg = surface.container("temperature-chart").unwrap().svg().unwrap();
        let ys = |d: &str| -> Vec<f64> {
            d.split(['M', 'L'])
                .filter(|s| !s.is_empty())
                .map(|pt| pt.split(',').nth(1).unwrap().parse().unwrap())
                .collect()
        };
        let paths: Vec<_> = svg.find_all("path").into_iter().filter(|p| p.has_class("line")).collect();
        let max_y = ys(paths[0].get_attr("d").unwrap());
        let min_y = ys(paths[1].get_attr("d").unwrap());
        for (hi, lo) in max_y.iter().zip(&min_y) {
            // Larger pixel y is lower on screen.
            assert!(lo > hi);
        }
    }

    #[test]
    fn legend_names_both_series() {
        let surface = render();
        let svg = surface.container("temperature-chart").unwrap().svg().unwrap();
        let legend = svg
            .descendants()
            .into_iter()
            .find(|el| el.has_class("legend"))
            .unwrap();
        assert_eq!(legend.get_attr("transform"), Some("translate(380,0)"));
        let labels: Vec<_> = legend.find_all("text").iter().filter_map(|t| t.text.clone()).collect();
        assert_eq!(labels, ["Avg. Max Temp", "Avg. Min Temp"]);
    }
}
