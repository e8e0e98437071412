use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::ChartError;

/// The five charts, each bound to one fixed container name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChartKind {
    Temperature,
    Monthly,
    Scatter,
    Heatmap,
    Pie,
}

impl ChartKind {
    /// Render order used by the dashboard entry point.
    pub const ALL: [ChartKind; 5] = [
        ChartKind::Temperature,
        ChartKind::Monthly,
        ChartKind::Scatter,
        ChartKind::Heatmap,
        ChartKind::Pie,
    ];

    pub fn container(self) -> &'static str {
        match self {
            Self::Temperature => "temperature-chart",
            Self::Monthly => "monthly-chart",
            Self::Scatter => "scatter-plot",
            Self::Heatmap => "heatmap",
            Self::Pie => "pie-chart",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "temperature" | "temperature-chart" => Some(Self::Temperature),
            "monthly" | "monthly-chart" => Some(Self::Monthly),
            "scatter" | "scatter-plot" => Some(Self::Scatter),
            "heatmap" => Some(Self::Heatmap),
            "pie" | "pie-chart" => Some(Self::Pie),
            _ => None,
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.container())
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s.trim()).ok_or_else(|| ChartError::UnknownChart(s.to_string()))
    }
}

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const YEARS: [&str; 9] = [
    "2007", "2008", "2009", "2010", "2012", "2014", "2015", "2016", "2017",
];

pub const WEEK_COUNT: usize = 15;
pub const SCATTER_COUNT: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyTemperaturePoint {
    pub week: String,
    pub max_temp: f64,
    pub min_temp: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyValue {
    pub month: String,
    pub value1: f64,
    pub value2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub humidity: u32,
    pub pressure: f64,
    pub rain: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearValue {
    pub year: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

impl PieSlice {
    pub fn new(label: &str, value: f64) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_names_round_trip_through_container() {
        for kind in ChartKind::ALL {
            assert_eq!(kind.container().parse::<ChartKind>().unwrap(), kind);
        }
        assert_eq!("pie".parse::<ChartKind>().unwrap(), ChartKind::Pie);
        assert!(matches!(
            "donut".parse::<ChartKind>(),
            Err(ChartError::UnknownChart(name)) if name == "donut"
        ));
    }
}
