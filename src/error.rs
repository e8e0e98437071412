use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("no container named `{0}` on the surface")]
    MissingContainer(String),

    #[error("{chart}: no slot for category `{label}`")]
    UnknownCategory { chart: &'static str, label: String },

    #[error("invalid color `{0}` (expected #rgb or #rrggbb)")]
    InvalidColor(String),

    #[error("unknown chart `{0}`")]
    UnknownChart(String),
}

pub type Result<T> = std::result::Result<T, ChartError>;
