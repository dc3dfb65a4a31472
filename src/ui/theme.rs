use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    TrueColor,
    Ansi256,
    NoColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeName {
    Latte,
    Frappe,
    Macchiato,
    Mocha,
}

impl ThemeName {
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "latte" => Self::Latte,
            "frappe" => Self::Frappe,
            "macchiato" => Self::Macchiato,
            _ => Self::Mocha,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ThemePalette {
    pub text: (u8, u8, u8),
    pub subtext: (u8, u8, u8),
    pub base: (u8, u8, u8),
    pub surface: (u8, u8, u8),
    pub accent: (u8, u8, u8),
    pub accent2: (u8, u8, u8),
    pub accent3: (u8, u8, u8),
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub name: ThemeName,
    pub palette: ThemePalette,
    pub capability: ColorCapability,
}

impl Theme {
    pub fn load(name: &str) -> Self {
        let name = ThemeName::from_str_or_default(name);
        Self {
            name,
            palette: palette(name),
            capability: detect_color_capability(),
        }
    }

    pub fn color_text(&self) -> Color {
        map_color(self.capability, self.palette.text)
    }
    pub fn color_subtext(&self) -> Color {
        map_color(self.capability, self.palette.subtext)
    }
    pub fn color_base(&self) -> Color {
        map_color(self.capability, self.palette.base)
    }
    pub fn color_surface(&self) -> Color {
        map_color(self.capability, self.palette.surface)
    }
    pub fn color_accent(&self) -> Color {
        map_color(self.capability, self.palette.accent)
    }
    pub fn color_accent2(&self) -> Color {
        map_color(self.capability, self.palette.accent2)
    }
    pub fn color_accent3(&self) -> Color {
        map_color(self.capability, self.palette.accent3)
    }
}

// Catppuccin flavors: text, subtext0, base, surface0, mauve, blue, peach.
fn palette(name: ThemeName) -> ThemePalette {
    match name {
        ThemeName::Latte => ThemePalette {
            text: (0x4c, 0x4f, 0x69),
            subtext: (0x6c, 0x6f, 0x85),
            base: (0xef, 0xf1, 0xf5),
            surface: (0xcc, 0xd0, 0xda),
            accent: (0x88, 0x39, 0xef),
            accent2: (0x1e, 0x66, 0xf5),
            accent3: (0xfe, 0x64, 0x0b),
        },
        ThemeName::Frappe => ThemePalette {
            text: (0xc6, 0xd0, 0xf5),
            subtext: (0xa5, 0xad, 0xce),
            base: (0x30, 0x34, 0x46),
            surface: (0x41, 0x45, 0x59),
            accent: (0xca, 0x9e, 0xe6),
            accent2: (0x8c, 0xaa, 0xee),
            accent3: (0xef, 0x9f, 0x76),
        },
        ThemeName::Macchiato => ThemePalette {
            text: (0xca, 0xd3, 0xf5),
            subtext: (0xa5, 0xad, 0xcb),
            base: (0x24, 0x27, 0x3a),
            surface: (0x36, 0x3a, 0x4f),
            accent: (0xc6, 0xa0, 0xf6),
            accent2: (0x8a, 0xad, 0xf4),
            accent3: (0xf5, 0xa9, 0x7f),
        },
        ThemeName::Mocha => ThemePalette {
            text: (0xcd, 0xd6, 0xf4),
            subtext: (0xa6, 0xad, 0xc8),
            base: (0x1e, 0x1e, 0x2e),
            surface: (0x31, 0x32, 0x44),
            accent: (0xcb, 0xa6, 0xf7),
            accent2: (0x89, 0xb4, 0xfa),
            accent3: (0xfa, 0xb3, 0x87),
        },
    }
}

pub fn detect_color_capability() -> ColorCapability {
    let colorterm = std::env::var("COLORTERM").unwrap_or_default().to_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return ColorCapability::TrueColor;
    }

    let term = std::env::var("TERM").unwrap_or_default().to_lowercase();
    if term.contains("256color") {
        return ColorCapability::Ansi256;
    }

    ColorCapability::NoColor
}

fn map_color(cap: ColorCapability, t: (u8, u8, u8)) -> Color {
    match cap {
        ColorCapability::TrueColor => Color::Rgb(t.0, t.1, t.2),
        ColorCapability::Ansi256 => Color::Indexed(rgb_to_ansi256(t.0, t.1, t.2)),
        ColorCapability::NoColor => Color::Reset,
    }
}

fn rgb_to_ansi256(r: u8, g: u8, b: u8) -> u8 {
    // 6x6x6 color cube, 16..231
    let r6 = (r as u16 * 5 / 255) as u8;
    let g6 = (g as u16 * 5 / 255) as u8;
    let b6 = (b as u16 * 5 / 255) as u8;
    16 + 36 * r6 + 6 * g6 + b6
}
