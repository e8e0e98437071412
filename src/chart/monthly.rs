use tracing::debug;

use crate::axis::{Orient, axis};
use crate::config::Config;
use crate::data::DataSource;
use crate::error::{ChartError, Result};
use crate::ir::{ChartKind, MONTHS, MonthlyValue};
use crate::scale::{BandScale, LinearScale};
use crate::shape::Rect;
use crate::surface::{Surface, translate};

use super::{attach, plot_origin};

const Y_DOMAIN: (f64, f64) = (0.0, 45.0);
const BAND_PADDING: f64 = 0.2;

/// Two bars per month drawn over each other in the same band, value1 first.
pub fn assemble_monthly(
    surface: &mut Surface,
    config: &Config,
    source: &mut impl DataSource<Vec<MonthlyValue>>,
) -> Result<()> {
    let layout = &config.layout;
    let theme = &config.theme;
    let (width, height) = (layout.width(), layout.height());
    let g = attach(surface, ChartKind::Monthly, layout, plot_origin(layout))?;

    let data = source.produce();

    let months: Vec<String> = MONTHS.iter().map(|m| m.to_string()).collect();
    let x = BandScale::new(months, (0.0, width), BAND_PADDING);
    let y = LinearScale::new(Y_DOMAIN, (height, 0.0));

    let series: [(fn(&MonthlyValue) -> f64, &str); 2] = [
        (first_value, theme.bar_primary_color.as_str()),
        (second_value, theme.bar_secondary_color.as_str()),
    ];
    for (value, fill) in series {
        for d in &data {
            let left = x.map(&d.month).ok_or_else(|| ChartError::UnknownCategory {
                chart: "monthly",
                label: d.month.clone(),
            })?;
            let bar = Rect::bar(left, x.bandwidth(), y.map(value(d)), height);
            g.append(bar.to_element().attr("class", "bar").attr("fill", fill));
        }
    }

    g.append(
        axis(Orient::Bottom, &x, &theme.font_family).attr("transform", translate(0.0, height)),
    );
    g.append(axis(Orient::Left, &y, &theme.font_family));

    debug!(chart = %ChartKind::Monthly, bars = data.len() * 2, "chart assembled");
    Ok(())
}

fn first_value(d: &MonthlyValue) -> f64 {
    d.value1
}

fn second_value(d: &MonthlyValue) -> f64 {
    d.value2
}
