use tracing::debug;

use crate::config::Config;
use crate::data::DataSource;
use crate::error::Result;
use crate::ir::{ChartKind, PieSlice};
use crate::shape::{ArcGenerator, pie};
use crate::surface::{Element, Surface, fmt_num, translate};

use super::attach;

/// Full pie (no hole) centered in the plot area, one labeled arc per slice.
pub fn assemble_pie(
    surface: &mut Surface,
    config: &Config,
    source: &mut impl DataSource<Vec<PieSlice>>,
) -> Result<()> {
    let layout = &config.layout;
    let theme = &config.theme;
    let (width, height) = (layout.width(), layout.height());
    let center = (
        width / 2.0 + layout.margin.left,
        height / 2.0 + layout.margin.top,
    );
    let g = attach(surface, ChartKind::Pie, layout, center)?;

    let data = source.produce();

    let values: Vec<f64> = data.iter().map(|d| d.value).collect();
    let arcs = pie(&values);
    let arc = ArcGenerator::new(0.0, width.min(height) / 2.0);

    for (slice, d) in arcs.iter().zip(&data) {
        let group = g.append(Element::new("g").attr("class", "arc"));
        group.append(
            Element::new("path")
                .attr("d", arc.path(slice))
                .attr("fill", theme.pie_color(slice.index)),
        );
        let (cx, cy) = arc.centroid(slice);
        group.append(
            Element::new("text")
                .attr("transform", translate(cx, cy))
                .attr("text-anchor", "middle")
                .attr("font-family", theme.font_family.as_str())
                .attr("font-size", format!("{}px", fmt_num(theme.pie_label_size)))
                .attr("fill", theme.pie_label_color.as_str())
                .text(d.label.as_str()),
        );
    }

    debug!(chart = %ChartKind::Pie, slices = arcs.len(), "chart assembled");
    Ok(())
}
