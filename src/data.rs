//! Dataset producers for the five charts.
//!
//! Each chart pulls its records through [`DataSource`], so tests can hand an
//! assembler a [`Fixture`] instead of the random generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ir::{
    MONTHS, MonthlyValue, PieSlice, SCATTER_COUNT, ScatterPoint, WEEK_COUNT,
    WeeklyTemperaturePoint, YEARS, YearValue,
};

pub trait DataSource<T> {
    fn produce(&mut self) -> T;
}

/// Everything the dashboard needs, one dataset per chart.
pub trait DashboardSource:
    DataSource<Vec<WeeklyTemperaturePoint>>
    + DataSource<Vec<MonthlyValue>>
    + DataSource<Vec<ScatterPoint>>
    + DataSource<Vec<YearValue>>
    + DataSource<Vec<PieSlice>>
{
}

impl<T> DashboardSource for T where
    T: DataSource<Vec<WeeklyTemperaturePoint>>
        + DataSource<Vec<MonthlyValue>>
        + DataSource<Vec<ScatterPoint>>
        + DataSource<Vec<YearValue>>
        + DataSource<Vec<PieSlice>>
{
}

/// Returns a clone of the same dataset on every call.
#[derive(Debug, Clone)]
pub struct Fixture<T>(pub T);

impl<T: Clone> DataSource<T> for Fixture<T> {
    fn produce(&mut self) -> T {
        self.0.clone()
    }
}

const DEFAULT_HEAT_MAX: f64 = 11.67;

/// Sine-wave temperatures, uniform random values and the fixed pie split.
pub struct SyntheticSource {
    rng: StdRng,
    heat_max: f64,
}

impl SyntheticSource {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            heat_max: DEFAULT_HEAT_MAX,
        }
    }

    /// Upper bound (exclusive) of the random heatmap values.
    pub fn with_heat_max(mut self, heat_max: f64) -> Self {
        self.heat_max = heat_max;
        self
    }
}

impl DataSource<Vec<WeeklyTemperaturePoint>> for SyntheticSource {
    fn produce(&mut self) -> Vec<WeeklyTemperaturePoint> {
        (0..WEEK_COUNT)
            .map(|i| {
                let wave = (i as f64 / 3.0).sin() * 5.0;
                WeeklyTemperaturePoint {
                    week: format!("Week {}", i + 1),
                    max_temp: wave + 25.0,
                    min_temp: wave + 20.0,
                }
            })
            .collect()
    }
}

impl DataSource<Vec<MonthlyValue>> for SyntheticSource {
    fn produce(&mut self) -> Vec<MonthlyValue> {
        MONTHS
            .iter()
            .map(|month| MonthlyValue {
                month: month.to_string(),
                value1: self.rng.gen_range(10.0..40.0),
                value2: self.rng.gen_range(0.0..10.0),
            })
            .collect()
    }
}

impl DataSource<Vec<ScatterPoint>> for SyntheticSource {
    fn produce(&mut self) -> Vec<ScatterPoint> {
        (0..SCATTER_COUNT)
            .map(|humidity| ScatterPoint {
                humidity,
                pressure: self.rng.gen_range(4.0..8.0),
                rain: self.rng.gen_bool(0.5),
            })
            .collect()
    }
}

impl DataSource<Vec<YearValue>> for SyntheticSource {
    fn produce(&mut self) -> Vec<YearValue> {
        let heat_max = if self.heat_max.is_finite() {
            self.heat_max.max(f64::MIN_POSITIVE)
        } else {
            DEFAULT_HEAT_MAX
        };
        YEARS
            .iter()
            .map(|year| YearValue {
                year: year.to_string(),
                value: self.rng.gen_range(0.0..heat_max),
            })
            .collect()
    }
}

impl DataSource<Vec<PieSlice>> for SyntheticSource {
    fn produce(&mut self) -> Vec<PieSlice> {
        rain_split()
    }
}

/// Rain today / rain tomorrow split, in percent.
pub fn rain_split() -> Vec<PieSlice> {
    vec![
        PieSlice::new("No, No", 45.0),
        PieSlice::new("No, Yes", 30.0),
        PieSlice::new("Yes, No", 15.0),
        PieSlice::new("Yes, Yes", 10.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn infinite_heat_bound_falls_back_to_default() {
        let years: Vec<YearValue> = SyntheticSource::new(Some(1)).with_heat_max(f64::INFINITY).produce();
        assert_eq!(years.len(), 9);
        assert!(years.iter().all(|y| (0.0..DEFAULT_HEAT_MAX).contains(&y.value)));
    }

    #[test]
    fn weekly_min_trails_max_by_five() {
        let weeks: Vec<WeeklyTemperaturePoint> = SyntheticSource::new(Some(1)).produce();
        assert_eq!(weeks.len(), 15);
        assert_eq!(weeks[0].week, "Week 1");
        assert_eq!(weeks[14].week, "Week 15");
        for point in &weeks {
            assert!(point.min_temp <= point.max_temp);
            assert_relative_eq!(point.max_temp - point.min_temp, 5.0, epsilon = 1e-9);
        }
        assert_relative_eq!(weeks[0].max_temp, 25.0);
    }

    #[test]
    fn pie_split_sums_to_hundred() {
        let slices: Vec<PieSlice> = SyntheticSource::new(None).produce();
        let total: f64 = slices.iter().map(|s| s.value).sum();
        assert_relative_eq!(total, 100.0);
        assert_eq!(slices[3].label, "Yes, Yes");
    }

    #[test]
    fn fixture_returns_same_dataset() {
        let mut fixture = Fixture(vec![YearValue {
            year: "2007".to_string(),
            value: 1.0,
        }]);
        assert_eq!(fixture.produce(), fixture.produce());
    }

    proptest! {
        #[test]
        fn random_values_stay_in_range(seed in any::<u64>()) {
            let mut source = SyntheticSource::new(Some(seed));

            let months: Vec<MonthlyValue> = source.produce();
            prop_assert_eq!(months.len(), 12);
            for m in &months {
                prop_assert!((10.0..40.0).contains(&m.value1));
                prop_assert!((0.0..10.0).contains(&m.value2));
            }

            let points: Vec<ScatterPoint> = source.produce();
            prop_assert_eq!(points.len(), 100);
            for (i, p) in points.iter().enumerate() {
                prop_assert_eq!(p.humidity as usize, i);
                prop_assert!((4.0..8.0).contains(&p.pressure));
            }

            let years: Vec<YearValue> = source.produce();
            prop_assert_eq!(years.len(), 9);
            for y in &years {
                prop_assert!((0.0..11.67).contains(&y.value));
            }
        }

        #[test]
        fn same_seed_same_data(seed in any::<u64>()) {
            let a: Vec<MonthlyValue> = SyntheticSource::new(Some(seed)).produce();
            let b: Vec<MonthlyValue> = SyntheticSource::new(Some(seed)).produce();
            prop_assert_eq!(a, b);
        }
    }
}
