use std::fs;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
    #[serde(default)]
    pub gradients: ThemeGradients,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub fg: String,
    pub title: String,
    pub question: String,
    pub feedback: String,
    pub dim: String,
    pub border: String,
    pub accent: String,
    pub header_bg: String,
    pub header_fg: String,
    pub bar_filled: String,
    pub bar_empty: String,
    pub error: String,
    pub success: String,
}

/// Start and end stops for the per-character color blends.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeGradients {
    pub splash: [String; 2],
    pub right: [String; 2],
    pub wrong: [String; 2],
    #[serde(default = "default_steps")]
    pub steps: usize,
}

fn default_steps() -> usize {
    50
}

impl Theme {
    pub fn load(name: &str) -> Option<Self> {
        if let Some(config_dir) = dirs::config_dir() {
            let user_theme_path = config_dir
                .join("mathbuddy")
                .join("themes")
                .join(format!("{name}.toml"));
            if let Ok(content) = fs::read_to_string(&user_theme_path) {
                if let Ok(theme) = toml::from_str::<Theme>(&content) {
                    return Some(theme);
                }
            }
        }

        let filename = format!("{name}.toml");
        let file = ThemeAssets::get(&filename)?;
        let content = std::str::from_utf8(file.data.as_ref()).ok()?;
        toml::from_str::<Theme>(content).ok()
    }

    pub fn available_themes() -> Vec<String> {
        ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load("bubblegum").unwrap_or_else(|| Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
            gradients: ThemeGradients::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "#1a1a2e".to_string(),
            fg: "#e0def4".to_string(),
            title: "#ff87d7".to_string(),
            question: "#0087ff".to_string(),
            feedback: "#00af87".to_string(),
            dim: "#555555".to_string(),
            border: "#874bfd".to_string(),
            accent: "#ff5fff".to_string(),
            header_bg: "#5f00af".to_string(),
            header_fg: "#ff5fff".to_string(),
            bar_filled: "#874bfd".to_string(),
            bar_empty: "#2a2a40".to_string(),
            error: "#fb9700".to_string(),
            success: "#a6e3a1".to_string(),
        }
    }
}

impl Default for ThemeGradients {
    fn default() -> Self {
        Self {
            splash: ["#f25d94".to_string(), "#edff82".to_string()],
            right: ["#ff5f87".to_string(), "#874bfd".to_string()],
            wrong: ["#fb9700".to_string(), "#edff82".to_string()],
            steps: default_steps(),
        }
    }
}

impl ThemeColors {
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Color::Rgb(r, g, b);
            }
        }
        Color::White
    }

    pub fn bg(&self) -> Color { Self::parse_color(&self.bg) }
    pub fn fg(&self) -> Color { Self::parse_color(&self.fg) }
    pub fn title(&self) -> Color { Self::parse_color(&self.title) }
    pub fn question(&self) -> Color { Self::parse_color(&self.question) }
    pub fn feedback(&self) -> Color { Self::parse_color(&self.feedback) }
    pub fn dim(&self) -> Color { Self::parse_color(&self.dim) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn accent(&self) -> Color { Self::parse_color(&self.accent) }
    pub fn header_bg(&self) -> Color { Self::parse_color(&self.header_bg) }
    pub fn header_fg(&self) -> Color { Self::parse_color(&self.header_fg) }
    pub fn bar_filled(&self) -> Color { Self::parse_color(&self.bar_filled) }
    pub fn bar_empty(&self) -> Color { Self::parse_color(&self.bar_empty) }
    pub fn error(&self) -> Color { Self::parse_color(&self.error) }
    pub fn success(&self) -> Color { Self::parse_color(&self.success) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(ThemeColors::parse_color("#ff0080"), Color::Rgb(255, 0, 128));
        assert_eq!(ThemeColors::parse_color("nope"), Color::White);
    }

    #[test]
    fn test_bundled_themes_parse() {
        let names = Theme::available_themes();
        assert!(names.contains(&"bubblegum".to_string()));
        for name in names {
            assert!(Theme::load(&name).is_some(), "theme {name} failed to parse");
        }
    }

    #[test]
    fn test_missing_gradients_fall_back() {
        let toml_str = format!(
            "name = \"bare\"\n[colors]\n{}",
            toml::to_string(&ThemeColors::default()).unwrap()
        );
        let theme: Theme = toml::from_str(&toml_str).unwrap();
        assert_eq!(theme.gradients.steps, 50);
    }
}
