use crate::chart::{render_chart, render_dashboard};
use crate::config::load_config;
use crate::data::SyntheticSource;
use crate::ir::ChartKind;
use crate::render::{chart_svg, render_html, write_output_svg};
use crate::surface::Surface;
use crate::surface_dump::write_surface_dump;
use crate::telemetry::init_tracing;
use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "wxcharts", version, about = "Render the weather demo charts to SVG, PNG or HTML")]
pub struct Args {
    /// Output directory. Defaults to stdout (HTML or SVG only).
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "html")]
    pub output_format: OutputFormat,

    /// Config file (JSON or JSON5) overriding layout, palette and chart constants
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Seed for the random datasets
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Render a single chart (temperature, monthly, scatter, heatmap, pie)
    #[arg(long = "only")]
    pub only: Option<ChartKind>,

    /// Write a JSON dump of the rendered display tree
    #[arg(long = "dump")]
    pub dump: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
    Html,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Html => "html",
        }
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let _ = init_tracing(level);

    let config = load_config(args.config.as_deref())?;
    let charts: Vec<ChartKind> = match args.only {
        Some(kind) => vec![kind],
        None => ChartKind::ALL.to_vec(),
    };

    let mut surface = Surface::dashboard();
    let mut source = SyntheticSource::new(args.seed).with_heat_max(config.heatmap.color_domain.1);
    if charts.len() == ChartKind::ALL.len() {
        render_dashboard(&mut surface, &config, &mut source)?;
    } else {
        for kind in &charts {
            render_chart(*kind, &mut surface, &config, &mut source)?;
        }
    }
    debug!(charts = charts.len(), seed = ?args.seed, "surface populated");

    if let Some(path) = args.dump.as_deref() {
        write_surface_dump(path, &surface)?;
        info!(path = %path.display(), "wrote surface dump");
    }

    match args.output_format {
        OutputFormat::Html => {
            let html = render_html(&surface, &config);
            let target = args
                .output
                .as_deref()
                .map(|dir| output_file(dir, "index", OutputFormat::Html))
                .transpose()?;
            write_output_svg(&html, target.as_deref())?;
        }
        OutputFormat::Svg => {
            let Some(dir) = args.output.as_deref() else {
                if charts.len() != 1 {
                    return Err(anyhow::anyhow!(
                        "Output directory required for more than one SVG (or pass --only)"
                    ));
                }
                let svg = chart_svg(&surface, charts[0])?;
                return write_output_svg(&svg, None);
            };
            for kind in &charts {
                let svg = chart_svg(&surface, *kind)?;
                let path = output_file(dir, kind.container(), OutputFormat::Svg)?;
                write_output_svg(&svg, Some(&path))?;
                info!(path = %path.display(), "wrote chart");
            }
        }
        OutputFormat::Png => write_pngs(&surface, &charts, args.output.as_deref(), &config)?,
    }

    Ok(())
}

#[cfg(feature = "png")]
fn write_pngs(
    surface: &Surface,
    charts: &[ChartKind],
    output: Option<&Path>,
    config: &crate::config::Config,
) -> Result<()> {
    let dir = ensure_output(output, "png")?;
    for kind in charts {
        let svg = chart_svg(surface, *kind)?;
        let path = output_file(dir, kind.container(), OutputFormat::Png)?;
        crate::render::write_output_png(&svg, &path, &config.render)?;
        info!(path = %path.display(), "wrote chart");
    }
    Ok(())
}

#[cfg(not(feature = "png"))]
fn write_pngs(
    _surface: &Surface,
    _charts: &[ChartKind],
    _output: Option<&Path>,
    _config: &crate::config::Config,
) -> Result<()> {
    Err(anyhow::anyhow!("PNG output requires the `png` feature"))
}

#[cfg_attr(not(feature = "png"), allow(dead_code))]
fn ensure_output<'a>(output: Option<&'a Path>, ext: &str) -> Result<&'a Path> {
    output.ok_or_else(|| anyhow::anyhow!("Output directory required for {} output", ext))
}

/// `<dir>/<stem>.<ext>`, creating `dir` when missing.
fn output_file(dir: &Path, stem: &str, format: OutputFormat) -> Result<PathBuf> {
    if dir.exists() && !dir.is_dir() {
        return Err(anyhow::anyhow!(
            "Output path {} is not a directory",
            dir.display()
        ));
    }
    std::fs::create_dir_all(dir)?;
    Ok(dir.join(format!("{}.{}", stem, format.extension())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let args = Args::try_parse_from([
            "wxcharts", "-e", "svg", "-o", "out", "--seed", "42", "--only", "heatmap", "-vv",
        ])
        .unwrap();
        assert_eq!(args.output_format, OutputFormat::Svg);
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.only, Some(ChartKind::Heatmap));
        assert_eq!(args.verbose, 2);
        assert_eq!(args.output.as_deref(), Some(Path::new("out")));
    }

    #[test]
    fn rejects_unknown_chart() {
        assert!(Args::try_parse_from(["wxcharts", "--only", "radar"]).is_err());
    }

    #[test]
    fn output_files_land_in_directory() {
        let dir = std::env::temp_dir().join(format!("wxcharts-cli-{}", std::process::id()));
        let path = output_file(&dir, "pie-chart", OutputFormat::Svg).unwrap();
        assert_eq!(path, dir.join("pie-chart.svg"));
        assert!(dir.is_dir());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
