use serde::{Deserialize, Serialize};

/// Colour scheme for the Minesweeper board and the sketches.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Classic,
    Night,
    Pastel,
}

/// CSS colour strings for one theme.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub stroke: &'static str,
    pub hidden: &'static str,
    pub revealed: &'static str,
    pub mine: &'static str,
    pub flag: &'static str,
    /// Digit colours for counts 1 to 8.
    pub numbers: [&'static str; 8],
    /// Fill colours the sketches cycle through.
    pub accents: [&'static str; 4],
}

const CLASSIC: Palette = Palette {
    background: "#f4f1ea",
    stroke: "#3b3a36",
    hidden: "#b9b4a8",
    revealed: "#ebe6da",
    mine: "#2a2926",
    flag: "#d1453b",
    numbers: [
        "#2563eb", "#15803d", "#dc2626", "#1e3a8a", "#7f1d1d", "#0f766e", "#111827", "#6b7280",
    ],
    accents: ["#e76f51", "#f4a261", "#2a9d8f", "#264653"],
};

const NIGHT: Palette = Palette {
    background: "#14161f",
    stroke: "#0a0b10",
    hidden: "#2c3142",
    revealed: "#1d2130",
    mine: "#f8f8f2",
    flag: "#ff79c6",
    numbers: [
        "#8be9fd", "#50fa7b", "#ff5555", "#bd93f9", "#ffb86c", "#f1fa8c", "#f8f8f2", "#6272a4",
    ],
    accents: ["#bd93f9", "#8be9fd", "#50fa7b", "#ff79c6"],
};

const PASTEL: Palette = Palette {
    background: "#fdf6f0",
    stroke: "#8d7b8f",
    hidden: "#d8c8e8",
    revealed: "#fbeff5",
    mine: "#6d597a",
    flag: "#e56b6f",
    numbers: [
        "#6096ba", "#74a57f", "#e56b6f", "#355070", "#b56576", "#52b69a", "#6d597a", "#a8a8a8",
    ],
    accents: ["#ffcad4", "#b0d0d3", "#c08497", "#f7af9d"],
};

impl Theme {
    pub const ALL: [Self; 3] = [Self::Classic, Self::Night, Self::Pastel];

    pub const fn palette(self) -> &'static Palette {
        use Theme::*;
        match self {
            Classic => &CLASSIC,
            Night => &NIGHT,
            Pastel => &PASTEL,
        }
    }
}

impl Palette {
    /// Digit colour for a tile count; `None` for zero.
    pub fn number(&self, count: u8) -> Option<&'static str> {
        match count {
            1..=8 => Some(self.numbers[usize::from(count - 1)]),
            _ => None,
        }
    }

    pub fn accent(&self, index: usize) -> &'static str {
        self.accents[index % self.accents.len()]
    }
}
