//! Paul Tol's sequential color schemes.
//!
//! Color values copyright © 2022 Paul Tol
//! <https://personal.sron.nl/~pault/>.

use rgb::RGBA8;

use crate::ColSeq;

pub(crate) mod ty;
use ty::{PaletteData, PaletteName, PaletteType, Trivalent};

const fn c(r: u8, g: u8, b: u8) -> RGBA8 {
    RGBA8 { r, g, b, a: 255 }
}

static INCANDESCENT_DATA: [RGBA8; 11] = [
    c(206, 255, 255),
    c(198, 247, 214),
    c(162, 244, 155),
    c(187, 228, 83),
    c(213, 206, 4),
    c(231, 181, 3),
    c(241, 153, 3),
    c(246, 121, 11),
    c(249, 73, 2),
    c(228, 5, 21),
    c(168, 0, 3),
];

static IRIDESCENT_DATA: [RGBA8; 23] = [
    c(254, 251, 233),
    c(252, 247, 213),
    c(245, 243, 193),
    c(234, 240, 181),
    c(221, 236, 191),
    c(208, 231, 202),
    c(194, 227, 210),
    c(181, 221, 216),
    c(168, 216, 220),
    c(155, 210, 225),
    c(141, 203, 228),
    c(129, 196, 231),
    c(123, 188, 231),
    c(126, 178, 228),
    c(136, 165, 221),
    c(147, 152, 210),
    c(155, 138, 196),
    c(157, 125, 178),
    c(154, 112, 158),
    c(144, 99, 136),
    c(128, 87, 112),
    c(104, 73, 87),
    c(70, 53, 58),
];

static RAINBOW_DATA: [RGBA8; 34] = [
    c(232, 236, 251),
    c(221, 216, 239),
    c(209, 193, 225),
    c(195, 168, 209),
    c(181, 143, 194),
    c(167, 120, 180),
    c(155, 98, 167),
    c(140, 78, 153),
    c(111, 76, 155), // purple
    c(96, 89, 169),
    c(85, 104, 184),
    c(78, 121, 197),
    c(77, 138, 198),
    c(78, 150, 188),
    c(84, 158, 179),
    c(89, 165, 169),
    c(96, 171, 158),
    c(105, 177, 144),
    c(119, 183, 125),
    c(140, 188, 104),
    c(166, 190, 84),
    c(190, 188, 72),
    c(209, 181, 65),
    c(221, 170, 60),
    c(228, 156, 57),
    c(231, 140, 53),
    c(230, 121, 50),
    c(228, 99, 45),
    c(223, 72, 40),
    c(218, 34, 34), // red
    c(184, 34, 30),
    c(149, 33, 27),
    c(114, 30, 23),
    c(82, 26, 19),
];

/// Incandescent color scheme, from pale yellow-white to dark red.
///
/// This scheme is not print friendly.
///
/// See <https://personal.sron.nl/~pault/#fig:scheme_incandescent>.
pub static INCANDESCENT: ColSeq<'static> = ColSeq::new(&INCANDESCENT_DATA);

/// Iridescent color scheme, from pale yellow to dark brown through
/// light blue and purple.
///
/// See <https://personal.sron.nl/~pault/#fig:scheme_iridescent>.
pub static IRIDESCENT: ColSeq<'static> = ColSeq::new(&IRIDESCENT_DATA);

/// Smooth rainbow scheme.
///
/// It does not have to be used over the full range, see
/// [`RAINBOW_PURPLE_TO_RED`].
///
/// See <https://personal.sron.nl/~pault/#fig:scheme_rainbow_smooth>.
pub static RAINBOW: ColSeq<'static> = ColSeq::new(&RAINBOW_DATA);

/// Smooth rainbow scheme restricted to the purple … red part.
/// It shares its colors with [`RAINBOW`].
pub static RAINBOW_PURPLE_TO_RED: ColSeq<'static> =
    ColSeq::new(&RAINBOW_DATA).sub(8, 22);

/// Registry of all palettes, indexed by [`PaletteName`].
pub(crate) static ALL_PALETTES: [PaletteData; 4] = [
    PaletteData {
        name: PaletteName::Incandescent,
        seq: ColSeq::new(&INCANDESCENT_DATA),
        typ: PaletteType::Seq,
        print: Trivalent::No,
        url: "https://personal.sron.nl/~pault/#fig:scheme_incandescent",
    },
    PaletteData {
        name: PaletteName::Iridescent,
        seq: ColSeq::new(&IRIDESCENT_DATA),
        typ: PaletteType::Seq,
        print: Trivalent::Yes,
        url: "https://personal.sron.nl/~pault/#fig:scheme_iridescent",
    },
    PaletteData {
        name: PaletteName::Rainbow,
        seq: ColSeq::new(&RAINBOW_DATA),
        typ: PaletteType::Seq,
        print: Trivalent::Yes,
        url: "https://personal.sron.nl/~pault/#fig:scheme_rainbow_smooth",
    },
    PaletteData {
        name: PaletteName::RainbowPurpleToRed,
        seq: ColSeq::new(&RAINBOW_DATA).sub(8, 22),
        typ: PaletteType::Seq,
        print: Trivalent::Yes,
        url: "https://personal.sron.nl/~pault/#fig:scheme_rainbow_smooth",
    },
];
