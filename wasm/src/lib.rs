use serde::Deserialize;
use wasm_bindgen::prelude::*;
use weather_charts::{ChartKind, Config, render_chart_svg as render_svg};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartRenderOptions {
    seed: Option<u64>,
    width: Option<f64>,
    height: Option<f64>,
    font_family: Option<String>,
}

fn build_config(options: &ChartRenderOptions) -> Config {
    let mut config = Config::default();
    if let Some(width) = options.width {
        config.layout.outer_width = width;
    }
    if let Some(height) = options.height {
        config.layout.outer_height = height;
    }
    if let Some(font_family) = &options.font_family {
        config.theme.font_family = font_family.clone();
    }
    config
}

/// SVG markup for the chart that belongs in `container` (e.g. `"pie-chart"`).
#[wasm_bindgen]
pub fn render_chart_svg(container: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let options = if let Some(raw_options) = options_json {
        serde_json::from_str::<ChartRenderOptions>(&raw_options)
            .map_err(|error| JsValue::from_str(&error.to_string()))?
    } else {
        ChartRenderOptions::default()
    };
    let kind: ChartKind = container
        .parse()
        .map_err(|error: weather_charts::ChartError| JsValue::from_str(&error.to_string()))?;

    render_svg(kind, &build_config(&options), options.seed)
        .map_err(|error| JsValue::from_str(&error.to_string()))
}

#[cfg(test)]
mod tests {
    use weather_charts::{ChartKind, render_chart_svg};

    use crate::{ChartRenderOptions, build_config};

    #[test]
    fn renders_pie_with_custom_size() {
        let options: ChartRenderOptions =
            serde_json::from_str(r#"{"seed": 1, "width": 800, "height": 500}"#).unwrap();
        let svg = render_chart_svg(ChartKind::Pie, &build_config(&options), options.seed)
            .expect("pie should render");

        assert!(svg.contains("width=\"800\""));
        assert!(svg.contains("No, Yes"));
    }
}
