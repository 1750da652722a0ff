use std::fmt;
use std::str::FromStr;

use crate::{ColSeq, Error};

/// Palette registry entry.
pub(crate) struct PaletteData {
    pub(crate) name: PaletteName,
    pub(crate) seq: ColSeq<'static>,
    pub(crate) typ: PaletteType,
    pub(crate) print: Trivalent,
    pub(crate) url: &'static str,
}

/// Names of the built-in palettes.
///
/// The discriminant is the position of the palette in the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaletteName {
    /// Yellow-white to dark red.  See [`crate::INCANDESCENT`].
    Incandescent,
    /// Pale yellow to dark brown through blue.  See
    /// [`crate::IRIDESCENT`].
    Iridescent,
    /// The full smooth rainbow.  See [`crate::RAINBOW`].
    Rainbow,
    /// The smooth rainbow restricted to purple … red.  See
    /// [`crate::RAINBOW_PURPLE_TO_RED`].
    RainbowPurpleToRed,
}

impl PaletteName {
    /// All names, in registry order.
    pub const ALL: [PaletteName; 4] = [
        PaletteName::Incandescent,
        PaletteName::Iridescent,
        PaletteName::Rainbow,
        PaletteName::RainbowPurpleToRed,
    ];

    /// The kebab-case name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            PaletteName::Incandescent => "incandescent",
            PaletteName::Iridescent => "iridescent",
            PaletteName::Rainbow => "rainbow",
            PaletteName::RainbowPurpleToRed => "rainbow-purple-to-red",
        }
    }
}

impl fmt::Display for PaletteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteName {
    type Err = Error;

    /// Case insensitive; `_` and ` ` are accepted in place of `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm: String = s.trim().chars()
            .map(|c| if c == '_' || c == ' ' { '-' }
                     else { c.to_ascii_lowercase() })
            .collect();
        PaletteName::ALL.iter().copied()
            .find(|n| n.as_str() == norm)
            .ok_or_else(|| Error::UnknownPalette(s.to_string()))
    }
}

/// Type of palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteType {
    /// Sequential color scheme, suited to ordered data that progress
    /// from low to high.
    Seq,
    /// Divergent color scheme, putting equal emphasis on mid-range
    /// values and on extremes at both ends of the data range.
    Div,
    /// Qualitative color scheme, for nominal or categorical data.
    Qual,
}

/// Trivalent logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trivalent {
    Yes,
    Maybe,
    No,
}
