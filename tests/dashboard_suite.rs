use weather_charts::{ChartKind, Config, Surface, SyntheticSource, render_dashboard};

fn assert_valid_svg(svg: &str, chart: &str) {
    assert!(svg.starts_with("<svg"), "{chart}: missing <svg tag");
    assert!(svg.ends_with("</svg>"), "{chart}: missing </svg tag");
    assert!(!svg.contains("NaN"), "{chart}: NaN coordinate");
}

fn render(seed: u64) -> Surface {
    let mut surface = Surface::dashboard();
    let mut source = SyntheticSource::new(Some(seed));
    render_dashboard(&mut surface, &Config::default(), &mut source).expect("dashboard renders");
    surface
}

#[test]
fn render_all_charts() {
    let surface = render(2024);
    for kind in ChartKind::ALL {
        let svg = surface
            .container_svg(kind.container())
            .expect("container exists");
        assert_valid_svg(&svg, kind.container());
    }
}

#[test]
fn same_seed_renders_identical_markup() {
    let a = render(99);
    let b = render(99);
    for kind in ChartKind::ALL {
        assert_eq!(
            a.container_svg(kind.container()),
            b.container_svg(kind.container()),
            "{kind} differs"
        );
    }
}

#[test]
fn axes_only_on_cartesian_charts() {
    let surface = render(1);
    for kind in ChartKind::ALL {
        let svg = surface.container(kind.container()).unwrap().svg().unwrap();
        let domains = svg
            .find_all("path")
            .into_iter()
            .filter(|p| p.has_class("domain"))
            .count();
        let expected = match kind {
            ChartKind::Heatmap | ChartKind::Pie => 0,
            _ => 2,
        };
        assert_eq!(domains, expected, "{kind}");
    }
}

#[test]
fn single_chart_svg_and_html_page() {
    let config = Config::default();
    let svg = weather_charts::render_chart_svg(ChartKind::Scatter, &config, Some(3)).unwrap();
    assert_valid_svg(&svg, "scatter-plot");
    assert_eq!(svg.matches("<circle").count(), 100);

    let html = weather_charts::render_dashboard_html(&config, Some(3)).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<div class=\"chart\" id=\"pie-chart\">"));
}

#[test]
fn configured_font_reaches_axis_ticks() {
    let config = weather_charts::config::parse_config(r#"{ palette: { fontFamily: "Georgia" } }"#)
        .expect("config parses");
    let mut surface = Surface::dashboard();
    render_dashboard(&mut surface, &config, &mut SyntheticSource::new(Some(5))).unwrap();
    let svg = surface.container_svg("monthly-chart").unwrap();
    assert!(svg.contains("font-family=\"Georgia\""));
    assert!(!svg.contains("sans-serif"));
}

#[test]
fn unbounded_color_domain_still_renders() {
    let config = weather_charts::config::parse_config("{ heatmap: { colorDomain: [0, Infinity] } }")
        .expect("config parses");
    let mut surface = Surface::dashboard();
    let mut source = SyntheticSource::new(Some(1)).with_heat_max(config.heatmap.color_domain.1);
    render_dashboard(&mut surface, &config, &mut source).expect("dashboard renders");
    assert_valid_svg(&surface.container_svg("heatmap").unwrap(), "heatmap");
}
