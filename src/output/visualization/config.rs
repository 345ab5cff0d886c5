//! Plot configuration shared across visualization modules

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title (drawn above all panels)
/// - `xlabel`, `ylabel`: Axis labels of single-panel plots
/// - `line_color`: Line color for single-series plots
/// - `series_colors`: Optional colors for multi-series plots (one per series)
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example
///
/// ```rust,ignore
/// use lorenz_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::projections("Lorenz attractor, rho = 28");
/// config.line_color = BLUE;
/// config.width = 1920;
/// ```
#[derive(Clone, Debug)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1200)
    pub width: u32,

    /// Image height in pixels (default: 400)
    pub height: u32,

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (default: auto-set by plot type)
    pub xlabel: String,

    /// Y-axis label (default: auto-set by plot type)
    pub ylabel: String,

    /// Line color for single-series plots (default: BLUE)
    pub line_color: RGBColor,

    /// Optional colors for multi-series plots
    ///
    /// If None, uses the default palette: [BLUE, RED, GREEN, MAGENTA, CYAN, ...]
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 1)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 400,
            title: "Plot".to_string(),
            xlabel: String::new(),
            ylabel: String::new(),
            line_color: BLUE,
            series_colors: None,
            background: WHITE,
            line_width: 1,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
///
/// ```rust,ignore
/// let config = PlotConfig::projections(NO_TITLE);
/// ```
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Three planar projections side by side (1200 × 400)
    ///
    /// Axis labels are set per panel; title defaults to "Lorenz Attractor".
    pub fn projections(title: impl IntoOptionalTitle) -> Self {
        Self {
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Lorenz Attractor".to_string()),
            ..Self::default()
        }
    }

    /// Overlaid projections of two runs (1200 × 400)
    ///
    /// Title defaults to "Sensitivity to Initial Conditions".
    pub fn comparison(title: impl IntoOptionalTitle) -> Self {
        Self {
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Sensitivity to Initial Conditions".to_string()),
            ..Self::default()
        }
    }

    /// x, y, z versus time (1000 × 600)
    ///
    /// Title defaults to "Components".
    pub fn components(title: impl IntoOptionalTitle) -> Self {
        Self {
            width: 1000,
            height: 600,
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Components".to_string()),
            xlabel: "t".to_string(),
            ylabel: "value".to_string(),
            series_colors: Some(vec![BLUE, GREEN, RED]),
            ..Self::default()
        }
    }

    /// Distance between two runs versus time, log scale (1000 × 600)
    ///
    /// Title defaults to "Separation".
    pub fn separation(title: impl IntoOptionalTitle) -> Self {
        Self {
            width: 1000,
            height: 600,
            title: title
                .into_optional_title()
                .unwrap_or_else(|| "Separation".to_string()),
            xlabel: "t".to_string(),
            ylabel: "|Δ|".to_string(),
            ..Self::default()
        }
    }

    /// Builder pattern: custom series colors
    ///
    /// ```rust,ignore
    /// use plotters::prelude::*;
    ///
    /// let config = PlotConfig::comparison(NO_TITLE).with_series_colors(vec![BLACK, RED]);
    /// ```
    pub fn with_series_colors(mut self, colors: Vec<RGBColor>) -> Self {
        self.series_colors = Some(colors);
        self
    }

    /// Get color for series at index i
    ///
    /// Uses custom colors if provided, otherwise falls back to default palette
    pub(crate) fn get_series_color(&self, series_index: usize) -> RGBColor {
        if let Some(colors) = &self.series_colors
            && series_index < colors.len()
        {
            return colors[series_index];
        }

        const DEFAULT_COLORS: [RGBColor; 8] = [
            BLUE,
            RED,
            GREEN,
            MAGENTA,
            CYAN,
            BLACK,
            RGBColor(255, 165, 0),   // Orange
            RGBColor(128, 0, 128),   // Purple
        ];

        DEFAULT_COLORS[series_index % DEFAULT_COLORS.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_config_default() {
        let config = PlotConfig::default();
        assert_eq!(config.width, 1200);
        assert_eq!(config.height, 400);
        assert!(config.show_grid);
    }

    #[test]
    fn test_projections_config_default_title() {
        let config = PlotConfig::projections(NO_TITLE);
        assert_eq!(config.title, "Lorenz Attractor");
    }

    #[test]
    fn test_comparison_config_with_string() {
        let config = PlotConfig::comparison(format!("rho = {}", 28));
        assert_eq!(config.title, "rho = 28");
    }

    #[test]
    fn test_components_config() {
        let config = PlotConfig::components("Run");
        assert_eq!(config.title, "Run");
        assert_eq!(config.xlabel, "t");
        assert_eq!(config.get_series_color(0), BLUE);
        assert_eq!(config.get_series_color(1), GREEN);
        assert_eq!(config.get_series_color(2), RED);
    }

    #[test]
    fn test_get_series_color_default_palette() {
        let config = PlotConfig::default();
        assert_eq!(config.get_series_color(0), BLUE);
        assert_eq!(config.get_series_color(1), RED);
        assert_eq!(config.get_series_color(8), BLUE);
    }

    #[test]
    fn test_get_series_color_falls_back_past_custom_colors() {
        let config = PlotConfig::separation(NO_TITLE).with_series_colors(vec![BLACK]);
        assert_eq!(config.get_series_color(0), BLACK);
        assert_eq!(config.get_series_color(1), RED);
    }
}
