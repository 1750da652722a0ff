//! Color gradients friendly to color blind people.
//!
//! A gradient maps a value `t` ∈ \[0, 1\] to a color by linear
//! interpolation between the control points of a [`ColSeq`].
//!
//! - [`gradient`] (Paul Tol's smooth rainbow from purple to red)
//! - [`incandescent`], [`iridescent`], [`rainbow`]
//! - [`sequential`] for any color sequence.
//!
//! The color schemes are taken from
//! [Paul Tol's page](https://personal.sron.nl/~pault/).  Use
//! [`Palette`] and [`palettes`] to enumerate them.
//!
//! # Out of range values
//!
//! Every entry point clamps `t` to \[0, 1\]: values below `0.` give
//! the first color, values above `1.` the last one.  `NaN` gives the
//! first color.

use std::fmt;
use std::marker::PhantomData;
use log::{debug, trace};
use rgb::{RGBA, RGB8, RGBA8, alt::BGRA8};

mod error;
mod palettes;
use palettes::{ALL_PALETTES, ty::PaletteData};
pub use error::Error;
pub use palettes::{INCANDESCENT, IRIDESCENT, RAINBOW, RAINBOW_PURPLE_TO_RED};
pub use palettes::ty::{PaletteName, PaletteType, Trivalent};

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;

    /// Return an iterator yielding `n` points uniformly spread
    /// between `a` and `b` (both included) together with their
    /// colors.  It is not required that `a <= b`.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use blind_gradient::{ColorRange, RAINBOW};
    /// let ticks: Vec<(f64, RGB8)> = RAINBOW.range(0., 100., 5).collect();
    /// assert_eq!(ticks[2].0, 50.);
    /// ```
    fn range(self, a: f64, b: f64, n: usize) -> Range<Self, Color>
    where Self: Sized {
        let a = a.clamp(f64::MIN, f64::MAX);
        let b = b.clamp(f64::MIN, f64::MAX);
        // `a` or `b` NaN will give an iterator yielding NaN.
        let (front, back) = if n == 0 { (1, 0) } else { (0, n - 1) };
        Range { range: self, color: PhantomData,
                a, b, last: n.saturating_sub(1), front, back,
                done: n == 0 }
    }
}

/// An iterator yielding `f64` in a given range together with colors.
///
/// Created by [`ColorRange::range`].
pub struct Range<R, Color> {
    range: R,
    color: PhantomData<Color>,
    a: f64, // finite or NaN
    b: f64, // finite or NaN
    last: usize,
    front: usize, // next position from the front
    back: usize,  // next position from the back (front ≤ back)
    done: bool,
}

impl<R, Color> Range<R, Color> where R: ColorRange<Color> {
    /// The value and color at position `k` ∈ `0 ..= self.last`.
    fn item(&self, k: usize) -> (f64, Color) {
        if k == 0 {
            (self.a, self.range.rgb(0.))
        } else if k == self.last {
            (self.b, self.range.rgb(1.))
        } else {
            let flast = self.last as f64;
            let t = k as f64 / flast;
            let mut x = ((self.last - k) as f64 * self.a
                         + k as f64 * self.b) / flast;
            if x.is_infinite() {
                x = (1. - t) * self.a + t * self.b;
            }
            (x, self.range.rgb(t))
        }
    }

    fn remaining(&self) -> usize {
        if self.done { 0 } else { self.back - self.front + 1 }
    }
}

impl<R, Color> Iterator for Range<R, Color>
where R: ColorRange<Color> {
    type Item = (f64, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done { return None }
        let item = self.item(self.front);
        if self.front == self.back { self.done = true }
        else { self.front += 1 }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining();
        (len, Some(len))
    }
}

impl<R, Color> ExactSizeIterator for Range<R, Color>
where R: ColorRange<Color> {}

impl<R, Color> DoubleEndedIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.done { return None }
        let item = self.item(self.back);
        if self.front == self.back { self.done = true }
        else { self.back -= 1 }
        Some(item)
    }
}

/// Pixel types that gradients can produce.
///
/// Gradients are computed with 8 bits per channel and then converted.
pub trait RGBColor: Sized {
    /// Return the color as 8-bit RGBA.
    fn to_rgba8(&self) -> RGBA8;

    /// Create a color from 8-bit RGBA components.
    fn from_rgba8(c: RGBA8) -> Self;

    /// Convert the color to grayscale (luma), keeping alpha.
    fn to_gray(&self) -> Self {
        let RGBA { r, g, b, a } = self.to_rgba8();
        let x = (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64)
            as u8;
        Self::from_rgba8(RGBA8 { r: x, g: x, b: x, a })
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba8(&self) -> RGBA8 { *self }

    #[inline]
    fn from_rgba8(c: RGBA8) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba8(&self) -> RGBA8 {
        RGBA8 { r: self.r, g: self.g, b: self.b, a: 255 }
    }

    #[inline]
    fn from_rgba8(c: RGBA8) -> Self { RGB8 { r: c.r, g: c.g, b: c.b } }
}

impl RGBColor for BGRA8 {
    #[inline]
    fn to_rgba8(&self) -> RGBA8 {
        RGBA8 { r: self.r, g: self.g, b: self.b, a: self.a }
    }

    #[inline]
    fn from_rgba8(c: RGBA8) -> Self {
        BGRA8 { b: c.b, g: c.g, r: c.r, a: c.a }
    }
}

/// Components in \[0, 255\].
impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba8(&self) -> RGBA8 {
        RGBA8 { r: self.r as u8, g: self.g as u8, b: self.b as u8,
                a: self.a as u8 }
    }

    #[inline]
    fn from_rgba8(c: RGBA8) -> Self {
        RGBA { r: c.r as f64, g: c.g as f64, b: c.b as f64, a: c.a as f64 }
    }
}

/// An ordered, non-empty sequence of colors, from the color for low
/// values to the one for high values.
///
/// A `ColSeq` borrows its colors; [`ColSeq::sub`] gives a view on a
/// part of it without copying.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColSeq<'a> {
    colors: &'a [RGBA8], // Invariant: non-empty
}

impl<'a> ColSeq<'a> {
    /// Create a color sequence.
    ///
    /// # Panics
    ///
    /// If `colors` is empty.  In a `static` or `const`, this is a
    /// compile time error.
    ///
    /// ```
    /// use rgb::RGBA8;
    /// use blind_gradient::ColSeq;
    /// static GRAYS: ColSeq = ColSeq::new(&[
    ///     RGBA8 { r: 0, g: 0, b: 0, a: 255 },
    ///     RGBA8 { r: 200, g: 200, b: 200, a: 255 }]);
    /// assert_eq!(GRAYS.at(0.5), RGBA8 { r: 100, g: 100, b: 100, a: 255 });
    /// ```
    pub const fn new(colors: &'a [RGBA8]) -> Self {
        assert!(!colors.is_empty(), "ColSeq::new: empty color sequence");
        ColSeq { colors }
    }

    /// Create a color sequence, failing if `colors` is empty.
    pub fn try_new(colors: &'a [RGBA8]) -> Result<Self, Error> {
        if colors.is_empty() {
            debug!("blind-gradient: rejected empty color sequence");
            return Err(Error::Empty)
        }
        Ok(ColSeq { colors })
    }

    /// The view on the `len` colors starting at position `start`.
    ///
    /// # Panics
    ///
    /// If `len == 0` or the range does not fit in `self`.
    pub const fn sub(self, start: usize, len: usize) -> Self {
        assert!(len > 0 && start <= self.colors.len()
                && len <= self.colors.len() - start,
                "ColSeq::sub: empty range or out of bounds");
        let (_, tail) = self.colors.split_at(start);
        let (colors, _) = tail.split_at(len);
        ColSeq { colors }
    }

    /// Same as [`ColSeq::sub`] but returns an error instead of
    /// panicking.
    pub fn try_sub(self, start: usize, len: usize) -> Result<Self, Error> {
        let parent = self.colors.len();
        match start.checked_add(len) {
            Some(end) if len > 0 && end <= parent =>
                Ok(ColSeq { colors: &self.colors[start .. end] }),
            _ => {
                debug!("blind-gradient: rejected sub-range {start}+{len} \
                        of {parent} colors");
                Err(Error::SubRange { start, len, parent })
            }
        }
    }

    /// Number of colors (at least 1).
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize { self.colors.len() }

    /// The control points.
    pub const fn colors(&self) -> &'a [RGBA8] { self.colors }

    /// The color for low values.
    pub fn first(&self) -> RGBA8 { self.colors[0] }

    /// The color for high values.
    pub fn last(&self) -> RGBA8 { self.colors[self.colors.len() - 1] }

    /// Iterate over the control points, from low to high.
    pub fn iter(&self) -> impl Iterator<Item = RGBA8> + 'a {
        self.colors.iter().copied()
    }

    /// Returns the color corresponding to `t` ∈ \[0., 1.\].  Other
    /// values of `t` are clamped.  The result is always opaque.
    #[inline]
    pub fn at(&self, t: f64) -> RGBA8 { self.at_unclamped(clamp_unit(t)) }

    /// Interpolation proper; `t` must be in \[0, 1\].
    fn at_unclamped(&self, t: f64) -> RGBA8 {
        let colors = self.colors;
        let last = colors.len() - 1;
        if last == 0 { return opaque(colors[0]) }
        let scaled = t * last as f64;
        let pos = scaled.floor();
        let delta = scaled - pos;
        let pos = pos as usize;
        if pos >= last { return opaque(colors[last]) }
        let c = colors[pos];
        let next = colors[pos + 1];
        // `as u8` truncates.
        let blend = |x: u8, y: u8| {
            (x as f64 + (y as f64 - x as f64) * delta) as u8 };
        RGBA8 { r: blend(c.r, next.r),
                g: blend(c.g, next.g),
                b: blend(c.b, next.b),
                a: 255 }
    }
}

impl<'a> TryFrom<&'a [RGBA8]> for ColSeq<'a> {
    type Error = Error;

    fn try_from(colors: &'a [RGBA8]) -> Result<Self, Error> {
        ColSeq::try_new(colors)
    }
}

impl<'a, Color: RGBColor> ColorRange<Color> for ColSeq<'a> {
    #[inline]
    fn rgb(&self, t: f64) -> Color { Color::from_rgba8(self.at(t)) }
}

#[inline]
fn opaque(c: RGBA8) -> RGBA8 { RGBA8 { a: 255, ..c } }

/// Clamp `t` to \[0, 1\], mapping NaN to `0.`.
#[inline]
fn clamp_unit(t: f64) -> f64 {
    if (0. ..= 1.).contains(&t) {
        t
    } else {
        trace!("blind-gradient: clamping t = {t} to [0, 1]");
        if t > 1. { 1. } else { 0. }
    }
}

/// Returns a color gradient from low to high, interpolating the
/// colors of `seq`.  `t` is expected in \[0, 1\] and clamped
/// otherwise.
///
/// # Example
///
/// ```
/// use rgb::RGBA8;
/// use blind_gradient::{sequential, ColSeq};
/// let seq = ColSeq::new(&[RGBA8 { r: 10, g: 20, b: 30, a: 255 },
///                         RGBA8 { r: 40, g: 50, b: 60, a: 255 },
///                         RGBA8 { r: 70, g: 80, b: 90, a: 255 }]);
/// assert_eq!(sequential(seq, 0.25), RGBA8 { r: 25, g: 35, b: 45, a: 255 });
/// ```
pub fn sequential(seq: ColSeq<'_>, t: f64) -> RGBA8 {
    seq.at(t)
}

/// Returns a color gradient from low (purple) to high (red).
///
/// It is a continuous version of the
/// [smooth rainbow](https://personal.sron.nl/~pault/#fig:scheme_rainbow_smooth)
/// scheme restricted to [`RAINBOW_PURPLE_TO_RED`].
pub fn gradient(t: f64) -> RGBA8 {
    sequential(RAINBOW_PURPLE_TO_RED, t)
}

/// Continuous version of [`INCANDESCENT`].
pub fn incandescent(t: f64) -> RGBA8 {
    sequential(INCANDESCENT, t)
}

/// Continuous version of [`IRIDESCENT`].
pub fn iridescent(t: f64) -> RGBA8 {
    sequential(IRIDESCENT, t)
}

/// Continuous version of the full [`RAINBOW`].
pub fn rainbow(t: f64) -> RGBA8 {
    sequential(RAINBOW, t)
}


/// # Color palettes
///
/// A named color scheme with some characteristics.
#[derive(Clone, Copy)]
pub struct Palette {
    data: &'static PaletteData,
}

impl Palette {
    /// The palette with the given name.
    pub fn get(name: PaletteName) -> Self {
        Palette { data: &ALL_PALETTES[name as usize] }
    }

    /// All known palettes.
    pub fn all() -> impl Iterator<Item = Palette> {
        ALL_PALETTES.iter().map(|data| Palette { data })
    }

    /// The name the palette is registered under.
    pub fn name(&self) -> PaletteName { self.data.name }

    /// The color sequence of the palette.
    pub fn seq(&self) -> ColSeq<'static> { self.data.seq }

    /// Returns the number of colors in the palette.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.data.seq.len() }

    /// Says whether the palette is `Seq`uential, `Div`ergent or
    /// `Qual`itative.
    pub fn typ(&self) -> PaletteType { self.data.typ }

    /// Says whether the palette is suitable for desktop color
    /// printing.
    pub fn print(&self) -> Trivalent { self.data.print }

    /// Where the palette is described.
    pub fn url(&self) -> &'static str { self.data.url }

    /// Returns the colors of the palette.
    pub fn colors<Color: RGBColor>(&self) -> Vec<Color> {
        self.data.seq.iter().map(Color::from_rgba8).collect()
    }
}

impl fmt::Debug for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Palette")
            .field("name", &self.data.name)
            .field("len", &self.len())
            .field("typ", &self.data.typ)
            .field("print", &self.data.print)
            .finish()
    }
}

impl<Color: RGBColor> ColorRange<Color> for Palette {
    #[inline]
    fn rgb(&self, t: f64) -> Color { self.data.seq.rgb(t) }
}

/// Set criteria to find matching palettes.
///
/// Created by [`palettes`].
#[derive(Clone, Debug)]
pub struct PaletteFind {
    len: usize,
    typ: Vec<PaletteType>,
    print: Trivalent,
}

/// Find palettes with at least `len` colors.  Use the methods of
/// [`PaletteFind`] to add criteria.
///
/// ```
/// use blind_gradient::{palettes, Trivalent};
/// let n = palettes(20).print(Trivalent::Yes).find().count();
/// assert_eq!(n, 3);
/// ```
pub fn palettes(len: usize) -> PaletteFind {
    PaletteFind {
        len,
        typ: vec![],
        print: Trivalent::No, // "no" means "not necessarily want"
    }
}

fn satisfy(prop: Trivalent, specified: Trivalent) -> bool {
    use Trivalent::*;
    match specified {
        Yes => matches!(prop, Yes),
        No => true,
        Maybe => matches!(prop, Yes | Maybe),
    }
}

impl PaletteFind {
    /// Find [`Palette`]s with this type.  Use several times to
    /// specify more than one [`PaletteType`].
    pub fn typ(mut self, t: PaletteType) -> Self {
        self.typ.push(t);
        self
    }

    /// Search palettes possibly ([`Trivalent::Maybe`]) or definitely
    /// ([`Trivalent::Yes`]) suitable for desktop color printing.
    pub fn print(mut self, at_least: Trivalent) -> Self {
        self.print = at_least;
        self
    }

    /// Return the palettes satisfying the criteria.
    pub fn find(self) -> impl Iterator<Item = Palette> {
        use PaletteType::*;
        let typ = { if self.typ.is_empty() { vec![Seq, Div, Qual] }
                    else { self.typ } };
        Palette::all().filter(move |p| {
            p.len() >= self.len
                && typ.contains(&p.typ())
                && satisfy(p.print(), self.print)
        })
    }
}


#[cfg(test)]
pub(crate) fn init_test_logger() {
    use std::sync::Once;
    use simplelog::{Config, TestLogger};
    static START: Once = Once::new();
    START.call_once(|| {
        TestLogger::init(log::LevelFilter::Trace, Config::default()).unwrap()
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn c(r: u8, g: u8, b: u8) -> RGBA8 { RGBA8 { r, g, b, a: 255 } }

    static THREE: [RGBA8; 3] = [c(10, 20, 30), c(40, 50, 60), c(70, 80, 90)];

    fn builtin() -> Vec<ColSeq<'static>> {
        vec![INCANDESCENT, IRIDESCENT, RAINBOW, RAINBOW_PURPLE_TO_RED]
    }

    fn samples(n: usize) -> impl Iterator<Item = f64> {
        (0 ..= n).map(move |i| i as f64 / n as f64)
    }

    #[test]
    fn endpoints_exact() {
        let mut seqs = builtin();
        seqs.push(ColSeq::new(&THREE));
        for s in seqs {
            assert_eq!(sequential(s, 0.), s.first());
            assert_eq!(sequential(s, 1.), s.last());
        }
    }

    #[test]
    fn midpoint() {
        let cs = [c(0, 0, 0), c(100, 200, 50)];
        let s = ColSeq::new(&cs);
        assert_eq!(sequential(s, 0.5), c(50, 100, 25));
    }

    #[test]
    fn between_first_control_points() {
        assert_eq!(sequential(ColSeq::new(&THREE), 0.25), c(25, 35, 45));
        assert_eq!(sequential(ColSeq::new(&THREE), 0.5), c(40, 50, 60));
    }

    #[test]
    fn truncates() {
        // 0 + 255 × 0.5 = 127.5
        let up = [c(0, 0, 0), c(255, 255, 255)];
        let s = ColSeq::new(&up);
        assert_eq!(sequential(s, 0.5), c(127, 127, 127));
        // 3 + (0 - 3) × 0.5 = 1.5
        let down = [c(3, 3, 3), c(0, 0, 0)];
        let s = ColSeq::new(&down);
        assert_eq!(sequential(s, 0.5), c(1, 1, 1));
    }

    #[test]
    fn degenerate() {
        let one = [c(1, 2, 3)];
        let s = ColSeq::new(&one);
        for t in samples(10) {
            assert_eq!(sequential(s, t), c(1, 2, 3));
        }
    }

    #[test]
    fn always_opaque() {
        let translucent = [RGBA8 { r: 9, g: 8, b: 7, a: 0 },
                           RGBA8 { r: 90, g: 80, b: 70, a: 128 }];
        let s = ColSeq::new(&translucent);
        for t in samples(50) {
            assert_eq!(sequential(s, t).a, 255, "t = {t}");
        }
        let one = ColSeq::new(&translucent[1 ..]);
        assert_eq!(sequential(one, 0.3), RGBA8 { r: 90, g: 80, b: 70, a: 255 });
        for s in builtin() {
            assert!(samples(200).all(|t| sequential(s, t).a == 255));
        }
    }

    #[test]
    fn monotonic_red() {
        let up = [c(0, 9, 9), c(50, 0, 0), c(51, 200, 3), c(200, 1, 1),
                  c(255, 0, 0)];
        let down: Vec<_> = up.iter().rev().copied().collect();
        let up = ColSeq::new(&up);
        let down = ColSeq::new(&down);
        let reds = |s: ColSeq| -> Vec<u8> {
            samples(1000).map(|t| sequential(s, t).r).collect() };
        assert!(reds(up).windows(2).all(|w| w[0] <= w[1]));
        assert!(reds(down).windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn linear_between_two_colors() {
        let a = c(0, 255, 30);
        let b = c(255, 0, 200);
        let ab = [a, b];
        let s = ColSeq::new(&ab);
        let lerp = |x: u8, y: u8, t: f64| x as f64 + (y as f64 - x as f64) * t;
        for t in samples(97) {
            let got = sequential(s, t);
            assert!((got.r as f64 - lerp(a.r, b.r, t)).abs() <= 1.);
            assert!((got.g as f64 - lerp(a.g, b.g, t)).abs() <= 1.);
            assert!((got.b as f64 - lerp(a.b, b.b, t)).abs() <= 1.);
        }
    }

    #[test]
    fn clamps_out_of_range() {
        init_test_logger();
        let s = ColSeq::new(&THREE);
        assert_eq!(sequential(s, 1.5), sequential(s, 1.));
        assert_eq!(sequential(s, f64::INFINITY), s.last());
        assert_eq!(sequential(s, -0.5), sequential(s, 0.));
        assert_eq!(sequential(s, f64::NEG_INFINITY), s.first());
        assert_eq!(sequential(s, f64::NAN), s.first());
    }

    #[test]
    fn clamps_in_every_entry_point() {
        init_test_logger();
        let wrappers: [(fn(f64) -> RGBA8, ColSeq); 4] = [
            (gradient, RAINBOW_PURPLE_TO_RED),
            (incandescent, INCANDESCENT),
            (iridescent, IRIDESCENT),
            (rainbow, RAINBOW)];
        for (f, s) in wrappers {
            assert_eq!(f(1.5), s.last());
            assert_eq!(f(-2.), s.first());
            let t = 0.37;
            assert_eq!(f(t), sequential(s, t));
            let via_trait: RGBA8 = s.rgb(7.);
            assert_eq!(via_trait, s.last());
        }
        for p in Palette::all() {
            let hi: RGB8 = p.rgb(1.5);
            assert_eq!(hi, RGB8::from_rgba8(p.seq().last()));
        }
    }

    #[test]
    fn sub_range_matches_copy() {
        let copy: Vec<RGBA8> = RAINBOW.colors()[8 .. 30].to_vec();
        let copy = ColSeq::try_new(&copy).unwrap();
        assert_eq!(RAINBOW.sub(8, 22), RAINBOW_PURPLE_TO_RED);
        for t in samples(333) {
            assert_eq!(gradient(t), sequential(copy, t));
        }
    }

    #[test]
    fn construction_errors() {
        init_test_logger();
        assert_eq!(ColSeq::try_new(&[]), Err(Error::Empty));
        assert_eq!(ColSeq::try_from(&THREE[..]), Ok(ColSeq::new(&THREE)));
        let s = ColSeq::new(&THREE);
        assert_eq!(s.try_sub(1, 2).map(|s| s.colors()), Ok(&THREE[1 ..]));
        assert_eq!(s.try_sub(2, 2),
                   Err(Error::SubRange { start: 2, len: 2, parent: 3 }));
        assert!(s.try_sub(0, 0).is_err());
        assert!(s.try_sub(usize::MAX, 2).is_err());
    }

    #[test]
    #[should_panic]
    fn new_empty_panics() {
        let empty: Vec<RGBA8> = vec![];
        ColSeq::new(&empty);
    }

    #[test]
    #[should_panic]
    fn sub_out_of_bounds_panics() {
        ColSeq::new(&THREE).sub(3, 1);
    }

    #[test]
    fn pixel_types() {
        let x = RAINBOW.at(0.5);
        let rgb: RGB8 = RAINBOW.rgb(0.5);
        let bgra: BGRA8 = RAINBOW.rgb(0.5);
        let f: RGBA<f64> = RAINBOW.rgb(0.5);
        assert_eq!(rgb.to_rgba8(), x);
        assert_eq!(bgra.to_rgba8(), x);
        assert_eq!(f.to_rgba8(), x);
        assert_eq!(c(0, 0, 0).to_gray(), c(0, 0, 0));
        assert_eq!(RGB8 { r: 100, g: 0, b: 0 }.to_gray(),
                   RGB8 { r: 29, g: 29, b: 29 });
    }

    #[test]
    fn seq_range() {
        let v: Vec<(f64, RGBA8)> = ColSeq::new(&THREE).range(0., 1., 11)
            .collect();
        assert_eq!(v.len(), 11);
        for (i, &(x, c)) in v.iter().enumerate() {
            assert!((x - 0.1 * i as f64).abs() <= 1e-15,
                    "{} ≉ {}", x, 0.1 * i as f64);
            assert_eq!(sequential(ColSeq::new(&THREE), x), c);
        }
        let rev: Vec<(f64, RGBA8)> = ColSeq::new(&THREE).range(0., 1., 11)
            .rev().collect();
        assert_eq!(rev.first(), v.last());
        assert_eq!(rev.last(), v.first());
    }

    #[test]
    fn range_edge_cases() {
        let mut it: Range<ColSeq, RGB8> = RAINBOW.range(5., -5., 3);
        assert_eq!(it.len(), 3);
        let (a, _) = it.next().unwrap();
        let (b, _) = it.next_back().unwrap();
        assert_eq!((a, b), (5., -5.));
        assert_eq!(it.len(), 1);
        assert_eq!(it.next().map(|(x, _)| x), Some(0.));
        assert!(it.next().is_none() && it.next_back().is_none());

        let mut empty = ColorRange::<RGB8>::range(RAINBOW, 0., 1., 0);
        assert_eq!(empty.len(), 0);
        assert!(empty.next().is_none());

        let one: Vec<(f64, RGB8)> = RAINBOW.range(2., 3., 1).collect();
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].0, 2.);
    }

    #[test]
    fn registry() {
        init_test_logger();
        assert_eq!(Palette::all().count(), PaletteName::ALL.len());
        for name in PaletteName::ALL {
            let p = Palette::get(name);
            assert_eq!(p.name(), name);
            assert!(p.url().starts_with("https://personal.sron.nl/~pault/"));
        }
        let p = Palette::get(PaletteName::RainbowPurpleToRed);
        assert_eq!(p.seq(), RAINBOW_PURPLE_TO_RED);
        assert_eq!(p.colors::<RGBA8>(), RAINBOW_PURPLE_TO_RED.colors());
        assert_eq!(Palette::get(PaletteName::Incandescent).print(),
                   Trivalent::No);
        assert!(Palette::all().all(|p| p.typ() == PaletteType::Seq));
    }

    #[test]
    fn find_palettes() {
        let all: Vec<_> = palettes(0).find().map(|p| p.name()).collect();
        assert_eq!(all, PaletteName::ALL);
        let printable: Vec<_> = palettes(0).print(Trivalent::Maybe).find()
            .map(|p| p.name()).collect();
        assert!(!printable.contains(&PaletteName::Incandescent));
        assert_eq!(printable.len(), 3);
        let long: Vec<_> = palettes(30).find().map(|p| p.name()).collect();
        assert_eq!(long, [PaletteName::Rainbow]);
        assert_eq!(palettes(0).typ(PaletteType::Seq).find().count(), 4);
        assert_eq!(palettes(0).typ(PaletteType::Div).typ(PaletteType::Qual)
                   .find().count(), 0);
    }
}
