pub mod axis;
pub mod chart;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod ir;
pub mod render;
pub mod scale;
pub mod shape;
pub mod surface;
pub mod surface_dump;
pub mod telemetry;
pub mod theme;

pub use chart::{render_chart, render_dashboard};
#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{ChartLayout, Config, load_config};
pub use data::{DataSource, Fixture, SyntheticSource};
pub use error::{ChartError, Result};
pub use ir::ChartKind;
pub use render::render_html;
pub use surface::Surface;
pub use theme::Theme;

/// Renders one chart with a seeded random source and returns its SVG markup.
pub fn render_chart_svg(kind: ChartKind, config: &Config, seed: Option<u64>) -> anyhow::Result<String> {
    let mut surface = Surface::dashboard();
    let mut source = SyntheticSource::new(seed).with_heat_max(config.heatmap.color_domain.1);
    render_chart(kind, &mut surface, config, &mut source)?;
    render::chart_svg(&surface, kind)
}

/// Renders all five charts into a standalone HTML page.
pub fn render_dashboard_html(config: &Config, seed: Option<u64>) -> anyhow::Result<String> {
    let mut surface = Surface::dashboard();
    let mut source = SyntheticSource::new(seed).with_heat_max(config.heatmap.color_domain.1);
    render_dashboard(&mut surface, config, &mut source)?;
    Ok(render_html(&surface, config))
}
