use crate::state::Screen;
use ratatui::style::Color;

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub secondary: ColorSpec,
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_secondary: ColorSpec,
    pub text_muted: ColorSpec,

    // Background colors
    pub background: ColorSpec,
    pub surface: ColorSpec,
    pub scrim: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
    pub info: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
}

/// An RGB color.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec::rgb(125, 207, 255),
            secondary: ColorSpec::rgb(158, 206, 106),
            accent: ColorSpec::rgb(255, 159, 196),
            banner: ColorSpec::rgb(255, 159, 196),
            text: ColorSpec::rgb(169, 177, 214),
            text_secondary: ColorSpec::rgb(192, 202, 245),
            text_muted: ColorSpec::rgb(117, 121, 148),
            background: ColorSpec::rgb(26, 27, 38),
            surface: ColorSpec::rgb(36, 40, 59),
            scrim: ColorSpec::rgb(16, 16, 24),
            success: ColorSpec::rgb(158, 206, 106),
            warning: ColorSpec::rgb(255, 202, 40),
            error: ColorSpec::rgb(247, 118, 142),
            info: ColorSpec::rgb(125, 207, 255),
            border_active: ColorSpec::rgb(125, 207, 255),
            border_normal: ColorSpec::rgb(117, 121, 148),
            highlight_bg: ColorSpec::rgb(125, 207, 255),
            highlight_fg: ColorSpec::rgb(26, 27, 38),
        }
    }

    /// Rose Pine theme.
    ///
    pub fn rose_pine() -> Self {
        Theme {
            name: "rose-pine".to_string(),
            primary: ColorSpec::rgb(196, 167, 231),
            secondary: ColorSpec::rgb(49, 116, 143),
            accent: ColorSpec::rgb(235, 111, 146),
            banner: ColorSpec::rgb(235, 111, 146),
            text: ColorSpec::rgb(224, 222, 244),
            text_secondary: ColorSpec::rgb(144, 140, 170),
            text_muted: ColorSpec::rgb(86, 82, 100),
            background: ColorSpec::rgb(25, 23, 36),
            surface: ColorSpec::rgb(31, 29, 43),
            scrim: ColorSpec::rgb(15, 14, 22),
            success: ColorSpec::rgb(49, 116, 143),
            warning: ColorSpec::rgb(246, 193, 119),
            error: ColorSpec::rgb(235, 111, 146),
            info: ColorSpec::rgb(156, 207, 216),
            border_active: ColorSpec::rgb(196, 167, 231),
            border_normal: ColorSpec::rgb(144, 140, 170),
            highlight_bg: ColorSpec::rgb(156, 207, 216),
            highlight_fg: ColorSpec::rgb(25, 23, 36),
        }
    }

    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: ColorSpec::rgb(161, 119, 255),
            secondary: ColorSpec::rgb(59, 247, 209),
            accent: ColorSpec::rgb(255, 109, 146),
            banner: ColorSpec::rgb(255, 109, 146),
            text: ColorSpec::rgb(88, 82, 96),
            text_secondary: ColorSpec::rgb(121, 117, 147),
            text_muted: ColorSpec::rgb(152, 147, 165),
            background: ColorSpec::rgb(250, 244, 237),
            surface: ColorSpec::rgb(255, 250, 243),
            scrim: ColorSpec::rgb(206, 200, 194),
            success: ColorSpec::rgb(59, 247, 209),
            warning: ColorSpec::rgb(255, 210, 0),
            error: ColorSpec::rgb(235, 111, 146),
            info: ColorSpec::rgb(61, 174, 233),
            border_active: ColorSpec::rgb(161, 119, 255),
            border_normal: ColorSpec::rgb(88, 82, 96),
            highlight_bg: ColorSpec::rgb(61, 174, 233),
            highlight_fg: ColorSpec::rgb(250, 244, 237),
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            primary: ColorSpec::rgb(189, 147, 249),
            secondary: ColorSpec::rgb(139, 233, 253),
            accent: ColorSpec::rgb(255, 121, 198),
            banner: ColorSpec::rgb(255, 121, 198),
            text: ColorSpec::rgb(248, 248, 242),
            text_secondary: ColorSpec::rgb(189, 147, 249),
            text_muted: ColorSpec::rgb(98, 114, 164),
            background: ColorSpec::rgb(40, 42, 54),
            surface: ColorSpec::rgb(68, 71, 90),
            scrim: ColorSpec::rgb(24, 25, 33),
            success: ColorSpec::rgb(80, 250, 123),
            warning: ColorSpec::rgb(255, 184, 108),
            error: ColorSpec::rgb(255, 85, 85),
            info: ColorSpec::rgb(139, 233, 253),
            border_active: ColorSpec::rgb(189, 147, 249),
            border_normal: ColorSpec::rgb(98, 114, 164),
            highlight_bg: ColorSpec::rgb(139, 233, 253),
            highlight_fg: ColorSpec::rgb(40, 42, 54),
        }
    }

    /// Catppuccin Mocha theme.
    ///
    pub fn catppuccin_mocha() -> Self {
        Theme {
            name: "catppuccin-mocha".to_string(),
            primary: ColorSpec::rgb(203, 166, 247),
            secondary: ColorSpec::rgb(166, 227, 161),
            accent: ColorSpec::rgb(250, 179, 135),
            banner: ColorSpec::rgb(245, 189, 230),
            text: ColorSpec::rgb(205, 214, 244),
            text_secondary: ColorSpec::rgb(186, 194, 222),
            text_muted: ColorSpec::rgb(166, 173, 200),
            background: ColorSpec::rgb(17, 17, 27),
            surface: ColorSpec::rgb(24, 24, 37),
            scrim: ColorSpec::rgb(10, 10, 16),
            success: ColorSpec::rgb(166, 227, 161),
            warning: ColorSpec::rgb(249, 226, 175),
            error: ColorSpec::rgb(243, 139, 168),
            info: ColorSpec::rgb(137, 180, 250),
            border_active: ColorSpec::rgb(203, 166, 247),
            border_normal: ColorSpec::rgb(166, 173, 200),
            highlight_bg: ColorSpec::rgb(137, 180, 250),
            highlight_fg: ColorSpec::rgb(17, 17, 27),
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "rose-pine" => Some(Self::rose_pine()),
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            "dracula" => Some(Self::dracula()),
            "catppuccin-mocha" => Some(Self::catppuccin_mocha()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "tokyo-night".to_string(),
            "rose-pine".to_string(),
            "rose-pine-dawn".to_string(),
            "dracula".to_string(),
            "catppuccin-mocha".to_string(),
        ]
    }

    /// Accent color of a screen, used for its header and drawer row.
    ///
    pub fn screen_accent(&self, screen: Screen) -> Color {
        match screen {
            Screen::Home => self.primary,
            Screen::WaterTracking => self.info,
            Screen::NutritionGuide => self.success,
            Screen::SymptomChecker => self.error,
            Screen::Medications => self.warning,
            Screen::MentalHealth => self.accent,
            Screen::HealthTips => self.secondary,
        }
        .to_color()
    }
}
