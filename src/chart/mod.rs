//! Chart assemblers.
//!
//! Every assembler runs the same steps: attach an `<svg>` to its container,
//! pull the dataset, build scales, append shapes, then axes and labels.

mod heatmap;
mod monthly;
mod pie;
mod scatter;
mod temperature;

pub use heatmap::{assemble_heatmap, grid_cell};
pub use monthly::assemble_monthly;
pub use pie::assemble_pie;
pub use scatter::assemble_scatter;
pub use temperature::assemble_temperature;

use tracing::debug;

use crate::config::{ChartLayout, Config};
use crate::data::DashboardSource;
use crate::error::Result;
use crate::ir::ChartKind;
use crate::surface::{Element, Surface, translate};

/// Attaches an `<svg>` of the full outer size to `kind`'s container and
/// returns its inner group, translated to `(x, y)`.
fn attach<'s>(
    surface: &'s mut Surface,
    kind: ChartKind,
    layout: &ChartLayout,
    origin: (f64, f64),
) -> Result<&'s mut Element> {
    let container = surface.select(kind.container())?;
    let svg = container.append(
        Element::new("svg")
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .num("width", layout.outer_width)
            .num("height", layout.outer_height),
    );
    Ok(svg.append(Element::new("g").attr("transform", translate(origin.0, origin.1))))
}

/// Inner group origin for charts drawn in plot coordinates.
fn plot_origin(layout: &ChartLayout) -> (f64, f64) {
    (layout.margin.left, layout.margin.top)
}

pub fn render_chart<S: DashboardSource>(
    kind: ChartKind,
    surface: &mut Surface,
    config: &Config,
    source: &mut S,
) -> Result<()> {
    match kind {
        ChartKind::Temperature => assemble_temperature(surface, config, source),
        ChartKind::Monthly => assemble_monthly(surface, config, source),
        ChartKind::Scatter => assemble_scatter(surface, config, source),
        ChartKind::Heatmap => assemble_heatmap(surface, config, source),
        ChartKind::Pie => assemble_pie(surface, config, source),
    }
}

/// Renders all five charts in order. The first failure stops the run.
pub fn render_dashboard<S: DashboardSource>(
    surface: &mut Surface,
    config: &Config,
    source: &mut S,
) -> Result<()> {
    for kind in ChartKind::ALL {
        render_chart(kind, surface, config, source)?;
    }
    debug!(charts = ChartKind::ALL.len(), "dashboard rendered");
    Ok(())
}
