use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Monokai,
    GruvboxDark,
    Nord,
    HighContrast,
}

pub struct ThemeColors {
    pub background: Color,
    pub border: Color,
    pub text: Color,
    pub accent: Color,
    pub paddle: Color,
    pub ball: Color,
    pub net: Color,
}

impl Theme {
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Monokai => "Monokai",
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::Nord => "Nord",
            Theme::HighContrast => "High Contrast",
        }
    }

    pub fn next(self) -> Theme {
        match self {
            Theme::Monokai => Theme::GruvboxDark,
            Theme::GruvboxDark => Theme::Nord,
            Theme::Nord => Theme::HighContrast,
            Theme::HighContrast => Theme::Monokai,
        }
    }

    pub fn prev(self) -> Theme {
        match self {
            Theme::Monokai => Theme::HighContrast,
            Theme::GruvboxDark => Theme::Monokai,
            Theme::Nord => Theme::GruvboxDark,
            Theme::HighContrast => Theme::Nord,
        }
    }

    pub fn colors(&self) -> ThemeColors {
        match self {
            Theme::Monokai => ThemeColors {
                background: Color::Reset,
                border: Color::Rgb(249, 38, 114), // Monokai pink
                text: Color::Rgb(248, 248, 242),  // Monokai foreground
                accent: Color::Rgb(166, 226, 46), // Monokai green
                paddle: Color::Rgb(102, 217, 239), // Monokai cyan
                ball: Color::Rgb(255, 95, 135),   // Monokai light pink
                net: Color::Rgb(117, 113, 94),    // Monokai comment grey
            },
            Theme::GruvboxDark => ThemeColors {
                background: Color::Reset,
                border: Color::Rgb(250, 189, 47), // Gruvbox yellow
                text: Color::Rgb(235, 219, 178),  // Gruvbox fg
                accent: Color::Rgb(184, 187, 38), // Gruvbox green
                paddle: Color::Rgb(131, 165, 152), // Gruvbox blue
                ball: Color::Rgb(251, 73, 52),    // Gruvbox red
                net: Color::Rgb(146, 131, 116),   // Gruvbox grey
            },
            Theme::Nord => ThemeColors {
                background: Color::Reset,
                border: Color::Rgb(136, 192, 208),
                text: Color::Rgb(216, 222, 233),
                accent: Color::Rgb(143, 188, 187),
                paddle: Color::Rgb(94, 129, 172),
                ball: Color::Rgb(191, 97, 106),
                net: Color::Rgb(76, 86, 106),
            },
            Theme::HighContrast => ThemeColors {
                background: Color::Black,
                border: Color::White,
                text: Color::White,
                accent: Color::Yellow,
                paddle: Color::Rgb(0, 255, 255),
                ball: Color::Rgb(255, 0, 0),
                net: Color::White,
            },
        }
    }
}
