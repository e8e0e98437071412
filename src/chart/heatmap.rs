use tracing::debug;

use crate::config::Config;
use crate::data::DataSource;
use crate::error::Result;
use crate::ir::{ChartKind, YearValue};
use crate::scale::ColorScale;
use crate::shape::Rect;
use crate::surface::{Element, Surface};

use super::{attach, plot_origin};

/// Column and row of item `index` in a grid filled row by row.
pub fn grid_cell(index: usize, columns: usize) -> (usize, usize) {
    let columns = columns.max(1);
    (index % columns, index / columns)
}

/// One colored square per year, laid out row by row, labeled with the year.
pub fn assemble_heatmap(
    surface: &mut Surface,
    config: &Config,
    source: &mut impl DataSource<Vec<YearValue>>,
) -> Result<()> {
    let layout = &config.layout;
    let theme = &config.theme;
    let heat = &config.heatmap;
    let g = attach(surface, ChartKind::Heatmap, layout, plot_origin(layout))?;

    let data = source.produce();

    let color = ColorScale::new(heat.color_domain, &heat.color_from, &heat.color_to)?;
    let size = layout.width().min(layout.height()) / heat.cell_divisor;

    for (i, d) in data.iter().enumerate() {
        let (col, row) = grid_cell(i, heat.columns);
        let cell = Rect {
            x: col as f64 * size,
            y: row as f64 * size,
            width: size,
            height: size,
        };
        g.append(
            cell.to_element()
                .attr("fill", color.map(d.value))
                .attr("stroke", theme.heat_stroke.as_str()),
        );
    }

    for (i, d) in data.iter().enumerate() {
        let (col, row) = grid_cell(i, heat.columns);
        g.append(
            Element::new("text")
                .attr("class", "year-label")
                .num("x", col as f64 * size + size / 2.0)
                .num("y", row as f64 * size + size / 2.0)
                .attr("text-anchor", "middle")
                .attr("dominant-baseline", "middle")
                .attr("font-family", theme.font_family.as_str())
                .attr("fill", theme.heat_label_color.as_str())
                .text(d.year.as_str()),
        );
    }

    debug!(chart = %ChartKind::Heatmap, cells = data.len(), cell_size = size, "chart assembled");
    Ok(())
}
