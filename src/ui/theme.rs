use crate::infra::ThemeChoice;
use ratatui::style::Color;

// Two small palettes with the same roles. Prefer adding a role here over
// sprinkling raw colors through the render functions.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub bg: Color,
    pub bar_bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub dim: Color,
    pub border: Color,
    pub accent: Color,
    pub error: Color,
}

const DARK: Palette = Palette {
    bg: Color::Rgb(13, 15, 19),
    bar_bg: Color::Rgb(20, 24, 31),
    fg: Color::Rgb(226, 229, 234),
    muted: Color::Rgb(148, 155, 168),
    dim: Color::Rgb(100, 108, 122),
    border: Color::Rgb(58, 66, 82),
    accent: Color::Rgb(94, 177, 255),
    error: Color::Rgb(247, 118, 118),
};

const LIGHT: Palette = Palette {
    bg: Color::Rgb(248, 248, 246),
    bar_bg: Color::Rgb(230, 231, 228),
    fg: Color::Rgb(32, 36, 42),
    muted: Color::Rgb(96, 104, 116),
    dim: Color::Rgb(140, 147, 158),
    border: Color::Rgb(182, 188, 198),
    accent: Color::Rgb(20, 100, 186),
    error: Color::Rgb(182, 42, 42),
};

pub fn palette(choice: ThemeChoice) -> &'static Palette {
    match choice {
        ThemeChoice::Dark => &DARK,
        ThemeChoice::Light => &LIGHT,
    }
}
