use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 40.0,
            right: 60.0,
            bottom: 60.0,
            left: 60.0,
        }
    }
}

/// Outer size of every chart and the margin around its plot area.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ChartLayout {
    pub margin: Margin,
    pub outer_width: f64,
    pub outer_height: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            margin: Margin::default(),
            outer_width: 600.0,
            outer_height: 400.0,
        }
    }
}

impl ChartLayout {
    /// Plot width inside the margins.
    pub fn width(&self) -> f64 {
        (self.outer_width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Plot height inside the margins.
    pub fn height(&self) -> f64 {
        (self.outer_height - self.margin.top - self.margin.bottom).max(0.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapConfig {
    pub color_domain: (f64, f64),
    pub color_from: String,
    pub color_to: String,
    pub columns: usize,
    pub cell_divisor: f64,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            color_domain: (0.06, 11.67),
            color_from: "#FFB6C1".to_string(),
            color_to: "#8B0000".to_string(),
            columns: 3,
            cell_divisor: 4.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScatterConfig {
    pub trend_intercept: f64,
    pub trend_slope: f64,
    pub dot_radius: f64,
    pub x_label: String,
    pub y_label: String,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            trend_intercept: 4.0,
            trend_slope: 0.04,
            dot_radius: 4.0,
            x_label: "Humidity9am".to_string(),
            y_label: "Std.dev of Pressure9..".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Zoom applied when rasterizing to PNG.
    pub scale: f32,
    pub background: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            background: "#FFFFFF".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    pub layout: ChartLayout,
    pub heatmap: HeatmapConfig,
    pub scatter: ScatterConfig,
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        let theme = Theme::weather();
        let render = RenderConfig {
            background: theme.background.clone(),
            ..Default::default()
        };
        Self {
            theme,
            layout: ChartLayout::default(),
            heatmap: HeatmapConfig::default(),
            scatter: ScatterConfig::default(),
            render,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MarginFile {
    top: Option<f64>,
    right: Option<f64>,
    bottom: Option<f64>,
    left: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutFile {
    margin: Option<MarginFile>,
    width: Option<f64>,
    height: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaletteFile {
    font_family: Option<String>,
    background: Option<String>,
    max_temp_color: Option<String>,
    min_temp_color: Option<String>,
    bar_primary_color: Option<String>,
    bar_secondary_color: Option<String>,
    rain_color: Option<String>,
    dry_color: Option<String>,
    line_width: Option<f64>,
    trend_color: Option<String>,
    trend_width: Option<f64>,
    heat_stroke: Option<String>,
    heat_label_color: Option<String>,
    pie_colors: Option<Vec<String>>,
    pie_label_color: Option<String>,
    pie_label_size: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HeatmapFile {
    color_domain: Option<[f64; 2]>,
    color_range: Option<[String; 2]>,
    columns: Option<usize>,
    cell_divisor: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScatterFile {
    trend_intercept: Option<f64>,
    trend_slope: Option<f64>,
    dot_radius: Option<f64>,
    x_label: Option<String>,
    y_label: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    layout: Option<LayoutFile>,
    palette: Option<PaletteFile>,
    heatmap: Option<HeatmapFile>,
    scatter: Option<ScatterFile>,
    png_scale: Option<f32>,
}

/// Reads a JSON (or JSON5) config file over the defaults. `None` gives the defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let parsed: ConfigFile = json5::from_str(contents)?;

    if let Some(layout) = parsed.layout {
        if let Some(margin) = layout.margin {
            let m = &mut config.layout.margin;
            if let Some(v) = margin.top {
                m.top = v;
            }
            if let Some(v) = margin.right {
                m.right = v;
            }
            if let Some(v) = margin.bottom {
                m.bottom = v;
            }
            if let Some(v) = margin.left {
                m.left = v;
            }
        }
        if let Some(v) = layout.width {
            config.layout.outer_width = v;
        }
        if let Some(v) = layout.height {
            config.layout.outer_height = v;
        }
    }

    if let Some(palette) = parsed.palette {
        let theme = &mut config.theme;
        if let Some(v) = palette.font_family {
            theme.font_family = v;
        }
        if let Some(v) = palette.background {
            config.render.background = v.clone();
            theme.background = v;
        }
        if let Some(v) = palette.max_temp_color {
            theme.max_temp_color = v;
        }
        if let Some(v) = palette.min_temp_color {
            theme.min_temp_color = v;
        }
        if let Some(v) = palette.bar_primary_color {
            theme.bar_primary_color = v;
        }
        if let Some(v) = palette.bar_secondary_color {
            theme.bar_secondary_color = v;
        }
        if let Some(v) = palette.rain_color {
            theme.rain_color = v;
        }
        if let Some(v) = palette.dry_color {
            theme.dry_color = v;
        }
        if let Some(v) = palette.line_width {
            theme.line_width = v;
        }
        if let Some(v) = palette.trend_color {
            theme.trend_color = v;
        }
        if let Some(v) = palette.trend_width {
            theme.trend_width = v;
        }
        if let Some(v) = palette.heat_stroke {
            theme.heat_stroke = v;
        }
        if let Some(v) = palette.heat_label_color {
            theme.heat_label_color = v;
        }
        if let Some(v) = palette.pie_label_color {
            theme.pie_label_color = v;
        }
        if let Some(v) = palette.pie_label_size {
            theme.pie_label_size = v;
        }
        if let Some(v) = palette.pie_colors {
            if v.is_empty() {
                warn!("ignoring empty pieColors");
            } else {
                theme.pie_colors = v;
            }
        }
    }

    if let Some(heatmap) = parsed.heatmap {
        if let Some([lo, hi]) = heatmap.color_domain {
            if lo.is_finite() && hi.is_finite() && lo < hi {
                config.heatmap.color_domain = (lo, hi);
            } else {
                warn!(lo, hi, "ignoring heatmap.colorDomain; bounds must be finite and increasing");
            }
        }
        if let Some([from, to]) = heatmap.color_range {
            config.heatmap.color_from = from;
            config.heatmap.color_to = to;
        }
        if let Some(v) = heatmap.columns {
            if v == 0 {
                warn!("ignoring heatmap.columns = 0");
            } else {
                config.heatmap.columns = v;
            }
        }
        if let Some(v) = heatmap.cell_divisor {
            if v.is_finite() && v > 0.0 {
                config.heatmap.cell_divisor = v;
            } else {
                warn!(v, "ignoring heatmap.cellDivisor; must be positive");
            }
        }
    }

    if let Some(scatter) = parsed.scatter {
        if let Some(v) = scatter.trend_intercept {
            config.scatter.trend_intercept = v;
        }
        if let Some(v) = scatter.trend_slope {
            config.scatter.trend_slope = v;
        }
        if let Some(v) = scatter.dot_radius {
            config.scatter.dot_radius = v;
        }
        if let Some(v) = scatter.x_label {
            config.scatter.x_label = v;
        }
        if let Some(v) = scatter.y_label {
            config.scatter.y_label = v;
        }
    }

    if let Some(v) = parsed.png_scale {
        config.render.scale = v;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plot_area() {
        let layout = ChartLayout::default();
        assert_eq!(layout.width(), 480.0);
        assert_eq!(layout.height(), 300.0);
    }

    #[test]
    fn overrides_only_given_fields() {
        let config = parse_config(
            r##"{
                // JSON5 comments are accepted
                layout: { margin: { left: 80 }, width: 800 },
                palette: { rainColor: "#0000FF" },
                heatmap: { colorDomain: [0, 20], columns: 0 },
                scatter: { trendSlope: 0.05 },
            }"##,
        )
        .unwrap();
        assert_eq!(config.layout.margin.left, 80.0);
        assert_eq!(config.layout.margin.top, 40.0);
        assert_eq!(config.layout.width(), 800.0 - 80.0 - 60.0);
        assert_eq!(config.theme.rain_color, "#0000FF");
        assert_eq!(config.theme.dry_color, "green");
        assert_eq!(config.heatmap.color_domain, (0.0, 20.0));
        assert_eq!(config.heatmap.columns, 3);
        assert_eq!(config.scatter.trend_slope, 0.05);
        assert_eq!(config.scatter.trend_intercept, 4.0);
    }

    #[test]
    fn missing_path_gives_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.heatmap.color_domain, (0.06, 11.67));
        assert_eq!(config.scatter.trend_slope, 0.04);
    }

    #[test]
    fn rejects_unbounded_or_inverted_color_domain() {
        let config = parse_config("{ heatmap: { colorDomain: [0, Infinity] } }").unwrap();
        assert_eq!(config.heatmap.color_domain, (0.06, 11.67));
        let config = parse_config("{ heatmap: { colorDomain: [5, 1], cellDivisor: 0 } }").unwrap();
        assert_eq!(config.heatmap.color_domain, (0.06, 11.67));
        assert_eq!(config.heatmap.cell_divisor, 4.0);
    }

    #[test]
    fn palette_sizes_and_heatmap_cells_are_configurable() {
        let config = parse_config(
            r##"{
                palette: {
                    lineWidth: 3, trendWidth: 2, heatStroke: "#000000",
                    heatLabelColor: "black", pieLabelColor: "#333333", pieLabelSize: 14,
                },
                heatmap: { cellDivisor: 5 },
            }"##,
        )
        .unwrap();
        assert_eq!(config.theme.line_width, 3.0);
        assert_eq!(config.theme.trend_width, 2.0);
        assert_eq!(config.theme.heat_stroke, "#000000");
        assert_eq!(config.theme.heat_label_color, "black");
        assert_eq!(config.theme.pie_label_color, "#333333");
        assert_eq!(config.theme.pie_label_size, 14.0);
        assert_eq!(config.heatmap.cell_divisor, 5.0);
    }

    #[test]
    fn plain_json_parses() {
        let config = parse_config(r#"{"pngScale": 2.0}"#).unwrap();
        assert_eq!(config.render.scale, 2.0);
    }
}
