use ratatui::style::Color;

/// Accent palettes named after the six classic voice personas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Theme {
    #[default]
    Miku,
    Rin,
    Len,
    Luka,
    Meiko,
    Kaito,
}

impl Theme {
    const ALL: [Theme; 6] = [
        Theme::Miku,
        Theme::Rin,
        Theme::Len,
        Theme::Luka,
        Theme::Meiko,
        Theme::Kaito,
    ];

    pub(crate) fn name(self) -> &'static str {
        match self {
            Theme::Miku => "Miku",
            Theme::Rin => "Rin",
            Theme::Len => "Len",
            Theme::Luka => "Luka",
            Theme::Meiko => "MEIKO",
            Theme::Kaito => "KAITO",
        }
    }

    pub(crate) fn accent(self) -> Color {
        match self {
            Theme::Miku => Color::Rgb(0x39, 0xC5, 0xBB),
            Theme::Rin => Color::Rgb(0xFF, 0xA5, 0x00),
            Theme::Len => Color::Rgb(0xFF, 0xE2, 0x11),
            Theme::Luka => Color::Rgb(0xFF, 0xC0, 0xCB),
            Theme::Meiko => Color::Rgb(0xD8, 0x00, 0x00),
            Theme::Kaito => Color::Rgb(0x00, 0x00, 0xFF),
        }
    }

    /// Text colour that stays readable on top of [`Theme::accent`].
    pub(crate) fn on_accent(self) -> Color {
        match self {
            Theme::Meiko | Theme::Kaito => Color::White,
            _ => Color::Black,
        }
    }

    pub(crate) fn next(self) -> Theme {
        let index = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}
