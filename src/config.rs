use crate::error::MockupError;
use crate::theme::Theme;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

static COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap());

#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// Hex circumradius in board units.
    pub hex_size: f32,
    pub spacing_factor: f32,
    pub hex_stroke_width: f32,
    pub token_radius: f32,
    pub token_stroke_width: f32,
    pub port_radius: f32,
    pub port_stroke_width: f32,
    pub show_pips: bool,
    pub pip_radius: f32,
    pub pip_spacing: f32,
    pub x_range: (f32, f32),
    pub y_range: (f32, f32),
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            hex_size: 0.5,
            spacing_factor: 1.75,
            hex_stroke_width: 2.0,
            token_radius: 0.2,
            token_stroke_width: 1.0,
            port_radius: 0.25,
            port_stroke_width: 2.0,
            show_pips: true,
            pip_radius: 0.018,
            pip_spacing: 0.055,
            x_range: (-4.0, 4.0),
            y_range: (-4.0, 4.0),
        }
    }
}

impl BoardConfig {
    pub fn spacing(&self) -> f32 {
        self.hex_size * self.spacing_factor
    }
}

/// Font sizes are in points.
#[derive(Debug, Clone)]
pub struct FontSizes {
    pub suptitle: f32,
    pub board_title: f32,
    pub header: f32,
    pub body: f32,
    pub table: f32,
    pub small: f32,
    pub token: f32,
    pub ghost: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            suptitle: 20.0,
            board_title: 16.0,
            header: 14.0,
            body: 10.0,
            table: 9.0,
            small: 8.0,
            token: 10.0,
            ghost: 20.0,
        }
    }
}

/// Frame lengths are in points, like fonts, so a dpi change rescales the
/// whole figure instead of reflowing it.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    pub outer_margin: f32,
    pub panel_gap: f32,
    pub title_band: f32,
    pub panel_corner_radius: f32,
    pub fonts: FontSizes,
    pub board: BoardConfig,
    pub log_line_step: f32,
    pub player_card_step: f32,
    pub market_row_step: f32,
    pub tab_width: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            outer_margin: 14.4,
            panel_gap: 14.4,
            title_band: 52.8,
            panel_corner_radius: 3.84,
            fonts: FontSizes::default(),
            board: BoardConfig::default(),
            log_line_step: 0.4,
            player_card_step: 1.35,
            market_row_step: 0.24,
            tab_width: 2.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub width_in: f32,
    pub height_in: f32,
    pub dpi: f32,
    pub background: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width_in: 16.0,
            height_in: 10.0,
            dpi: 150.0,
            background: "#1a1a1a".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn pixel_size(&self) -> (f32, f32) {
        (
            (self.width_in * self.dpi).round(),
            (self.height_in * self.dpi).round(),
        )
    }

    pub fn pt_to_px(&self, points: f32) -> f32 {
        points * self.dpi / 72.0
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        let theme = Theme::dark();
        let render = RenderConfig {
            background: theme.background.clone(),
            ..Default::default()
        };
        Self {
            theme,
            layout: LayoutConfig::default(),
            render,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    background: Option<String>,
    panel_background: Option<String>,
    text_color: Option<String>,
    alert_color: Option<String>,
    positive_color: Option<String>,
    port_fill: Option<String>,
    wood: Option<String>,
    brick: Option<String>,
    sheep: Option<String>,
    wheat: Option<String>,
    ore: Option<String>,
    desert: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RenderConfigFile {
    width: Option<f32>,
    height: Option<f32>,
    dpi: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BoardConfigFile {
    hex_size: Option<f32>,
    spacing_factor: Option<f32>,
    show_pips: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    render: Option<RenderConfigFile>,
    board: Option<BoardConfigFile>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let parsed: ConfigFile = serde_json::from_str(contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        config.theme = Theme::by_name(theme_name)
            .ok_or_else(|| MockupError::UnknownTheme(theme_name.to_string()))?;
    }

    if let Some(vars) = parsed.theme_variables {
        let theme = &mut config.theme;
        if let Some(v) = vars.font_family {
            theme.font_family = v;
        }
        let overrides = [
            ("background", vars.background, &mut theme.background),
            ("panelBackground", vars.panel_background, &mut theme.panel_background),
            ("textColor", vars.text_color, &mut theme.text_color),
            ("alertColor", vars.alert_color, &mut theme.alert_color),
            ("positiveColor", vars.positive_color, &mut theme.positive_color),
            ("portFill", vars.port_fill, &mut theme.port_fill),
            ("wood", vars.wood, &mut theme.wood),
            ("brick", vars.brick, &mut theme.brick),
            ("sheep", vars.sheep, &mut theme.sheep),
            ("wheat", vars.wheat, &mut theme.wheat),
            ("ore", vars.ore, &mut theme.ore),
            ("desert", vars.desert, &mut theme.desert),
        ];
        for (field, value, slot) in overrides {
            if let Some(value) = value {
                validate_color(field, &value)?;
                *slot = value;
            }
        }
    }
    config.render.background = config.theme.background.clone();

    if let Some(render) = parsed.render {
        if let Some(v) = render.width {
            config.render.width_in = v;
        }
        if let Some(v) = render.height {
            config.render.height_in = v;
        }
        if let Some(v) = render.dpi {
            config.render.dpi = v;
        }
    }
    validate_canvas(&config.render)?;

    if let Some(board) = parsed.board {
        if let Some(v) = board.hex_size {
            config.layout.board.hex_size = v;
        }
        if let Some(v) = board.spacing_factor {
            config.layout.board.spacing_factor = v;
        }
        if let Some(v) = board.show_pips {
            config.layout.board.show_pips = v;
        }
    }

    Ok(config)
}

pub fn validate_color(field: &str, value: &str) -> Result<(), MockupError> {
    if COLOR_RE.is_match(value) {
        Ok(())
    } else {
        Err(MockupError::InvalidColor {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

fn validate_canvas(render: &RenderConfig) -> Result<(), MockupError> {
    let valid = |v: f32| v.is_finite() && v > 0.0;
    if valid(render.width_in) && valid(render.height_in) && valid(render.dpi) {
        Ok(())
    } else {
        Err(MockupError::InvalidCanvas {
            width: render.width_in,
            height: render.height_in,
            dpi: render.dpi,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_canvas_matches_figure() {
        let config = Config::default();
        assert_eq!(config.render.pixel_size(), (2400.0, 1500.0));
        assert_eq!(config.render.background, "#1a1a1a");
        assert!((config.render.pt_to_px(72.0) - 150.0).abs() < 1e-4);
        assert!((config.layout.board.spacing() - 0.875).abs() < 1e-6);
    }

    #[test]
    fn overrides_apply() {
        let config = parse_config(
            r##"{
                "theme": "light",
                "themeVariables": { "alertColor": "#ff0000", "fontFamily": "Inter" },
                "render": { "dpi": 100 },
                "board": { "showPips": false }
            }"##,
        )
        .unwrap();
        assert_eq!(config.theme.alert_color, "#ff0000");
        assert_eq!(config.theme.font_family, "Inter");
        assert_eq!(config.render.background, Theme::light().background);
        assert_eq!(config.render.pixel_size(), (1600.0, 1000.0));
        assert!(!config.layout.board.show_pips);
    }

    #[test]
    fn rejects_bad_color() {
        let err = parse_config(r#"{ "themeVariables": { "wood": "green" } }"#).unwrap_err();
        let err = err.downcast::<MockupError>().unwrap();
        assert!(matches!(err, MockupError::InvalidColor { ref field, .. } if field == "wood"));
    }

    #[test]
    fn rejects_unknown_theme_and_bad_canvas() {
        assert!(parse_config(r#"{ "theme": "neon" }"#).is_err());
        assert!(parse_config(r#"{ "render": { "dpi": 0 } }"#).is_err());
    }

    #[test]
    fn color_forms() {
        for ok in ["#fff", "#1a1a1a", "#4169E1ff"] {
            assert!(validate_color("x", ok).is_ok(), "{ok}");
        }
        for bad in ["fff", "#12", "#gggggg", "red"] {
            assert!(validate_color("x", bad).is_err(), "{bad}");
        }
    }
}
