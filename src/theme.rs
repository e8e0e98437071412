use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub background: String,
    pub max_temp_color: String,
    pub min_temp_color: String,
    pub line_width: f64,
    pub bar_primary_color: String,
    pub bar_secondary_color: String,
    pub rain_color: String,
    pub dry_color: String,
    pub trend_color: String,
    pub trend_width: f64,
    pub heat_stroke: String,
    pub heat_label_color: String,
    pub pie_colors: Vec<String>,
    pub pie_label_color: String,
    pub pie_label_size: f64,
}

impl Theme {
    pub fn weather() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            background: "#FFFFFF".to_string(),
            max_temp_color: "steelblue".to_string(),
            min_temp_color: "orange".to_string(),
            line_width: 1.5,
            bar_primary_color: "#98FB98".to_string(),
            bar_secondary_color: "#228B22".to_string(),
            rain_color: "red".to_string(),
            dry_color: "green".to_string(),
            trend_color: "black".to_string(),
            trend_width: 1.0,
            heat_stroke: "white".to_string(),
            heat_label_color: "white".to_string(),
            pie_colors: vec![
                "#FF6B6B".to_string(),
                "#FFB6C1".to_string(),
                "#4ECDC4".to_string(),
                "#45B7AF".to_string(),
            ],
            pie_label_color: "white".to_string(),
            pie_label_size: 12.0,
        }
    }

    /// Palette entry for slice `index`, cycling when there are more slices than colors.
    pub fn pie_color(&self, index: usize) -> &str {
        if self.pie_colors.is_empty() {
            return "#999999";
        }
        &self.pie_colors[index % self.pie_colors.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::weather()
    }
}
