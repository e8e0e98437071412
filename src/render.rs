use crate::config::Config;
use crate::ir::ChartKind;
use crate::surface::{Surface, escape_xml};
use anyhow::Result;
use std::path::Path;

/// Standalone SVG document for one chart container.
pub fn chart_svg(surface: &Surface, kind: ChartKind) -> Result<String> {
    surface
        .container_svg(kind.container())
        .filter(|svg| !svg.is_empty())
        .ok_or_else(|| anyhow::anyhow!("container `{}` has nothing to render", kind.container()))
}

/// An HTML page holding every container of the surface as a `<div id=...>`.
pub fn render_html(surface: &Surface, config: &Config) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Weather charts</title>\n");
    html.push_str(&format!(
        "<style>body {{ background: {}; font-family: {}; }} .chart {{ margin: 1em 0; }}</style>\n",
        escape_xml(&config.theme.background),
        escape_xml(&config.theme.font_family)
    ));
    html.push_str("</head>\n<body>\n");
    for container in &surface.containers {
        html.push_str(&format!(
            "<div class=\"chart\" id=\"{}\">",
            escape_xml(&container.id)
        ));
        for child in &container.children {
            child.write_svg(&mut html);
        }
        html.push_str("</div>\n");
    }
    html.push_str("</body>\n</html>\n");
    html
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(
    svg: &str,
    output: &Path,
    render_cfg: &crate::config::RenderConfig,
) -> Result<()> {
    use crate::scale::Rgb;
    use resvg::tiny_skia;

    let mut opt = usvg::Options::default();
    opt.font_family = "DejaVu Sans".to_string();
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let scale = if render_cfg.scale > 0.0 {
        render_cfg.scale
    } else {
        1.0
    };
    let size = tree
        .size()
        .to_int_size()
        .scale_by(scale)
        .ok_or_else(|| anyhow::anyhow!("Invalid PNG scale {}", scale))?;
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let background = Rgb::parse(&render_cfg.background).unwrap_or(Rgb {
        r: 255,
        g: 255,
        b: 255,
    });
    pixmap.fill(tiny_skia::Color::from_rgba8(
        background.r,
        background.g,
        background.b,
        255,
    ));

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap_mut,
    );
    pixmap.save_png(output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::render_dashboard;
    use crate::data::SyntheticSource;

    #[test]
    fn html_page_holds_every_container() {
        let config = Config::default();
        let mut surface = Surface::dashboard();
        render_dashboard(&mut surface, &config, &mut SyntheticSource::new(Some(1))).unwrap();
        let html = render_html(&surface, &config);
        for kind in ChartKind::ALL {
            assert!(html.contains(&format!("id=\"{}\"", kind.container())));
        }
        assert_eq!(html.matches("<svg").count(), 5);
        assert!(html.contains("Yes, Yes"));
    }

    #[test]
    fn empty_container_has_no_svg() {
        let surface = Surface::dashboard();
        assert!(chart_svg(&surface, ChartKind::Pie).is_err());
    }
}
