//! Gradients interpolated linearly, channel by channel, in RGB space.

use rgb::{RGB, RGB8};
use crate::{ColorRange, PaletteError,
            color::{self, WHITE}};

#[inline]
fn lerp(c0: RGB<f64>, c1: RGB<f64>, t: f64) -> RGB<f64> {
    let s = 1. - t;
    RGB { r: s * c0.r + t * c1.r,
          g: s * c0.g + t * c1.g,
          b: s * c0.b + t * c1.b }
}

/// Gradient between two colors.
///
/// `t == 0.` gives the first color and `t == 1.` exactly the second.
#[derive(Clone, Copy, Debug)]
pub struct Gradient {
    c0: RGB<f64>,
    c1: RGB<f64>,
}

impl Gradient {
    pub fn new(c0: RGB<f64>, c1: RGB<f64>) -> Self { Gradient { c0, c1 } }

    /// Returns the color corresponding to `t` ∈ \[0., 1.\] but does
    /// not check the later condition.
    #[inline]
    fn rgb_unclamped(&self, t: f64) -> RGB<f64> { lerp(self.c0, self.c1, t) }
}

impl ColorRange for Gradient {
    fn rgb(&self, t: f64) -> RGB<f64> { self.rgb_unclamped(t.clamp(0., 1.)) }
}

/// Two-sided ramp `low → white → high`, white sitting at `t = 0.5`.
#[derive(Clone, Copy, Debug)]
pub struct Diverging {
    low: Gradient,
    high: Gradient,
}

impl Diverging {
    pub fn new(low: RGB<f64>, high: RGB<f64>) -> Self {
        Diverging { low: Gradient::new(low, WHITE),
                    high: Gradient::new(WHITE, high) }
    }
}

impl ColorRange for Diverging {
    fn rgb(&self, t: f64) -> RGB<f64> {
        let t = t.clamp(0., 1.);
        if t <= 0.5 { self.low.rgb_unclamped(2. * t) }
        else { self.high.rgb_unclamped(2. * t - 1.) }
    }
}

/// Piecewise linear gradient through evenly spaced stops.
///
/// Created by [`Palette::gradient`](crate::Palette::gradient).
#[derive(Clone, Debug)]
pub struct PaletteGradient {
    gradients: Vec<Gradient>, // Invariant: non-empty
}

impl PaletteGradient {
    /// `stops` must not be empty.  A single stop gives a constant
    /// gradient.
    pub(crate) fn new(stops: &[RGB8]) -> Self {
        let stops: Vec<_> = stops.iter().map(|&c| color::normalize(c)).collect();
        let gradients = if stops.len() == 1 {
            vec![Gradient::new(stops[0], stops[0])]
        } else {
            stops.windows(2).map(|c| Gradient::new(c[0], c[1])).collect()
        };
        PaletteGradient { gradients }
    }
}

impl ColorRange for PaletteGradient {
    fn rgb(&self, t: f64) -> RGB<f64> {
        let n = self.gradients.len();
        let tn = t.clamp(0., 1.) * n as f64;
        let i = tn.trunc() as usize;
        if i < n { self.gradients[i].rgb_unclamped(tn.fract()) }
        else { self.gradients[n-1].rgb_unclamped(1.) }
    }
}

/// Discrete colormap: `t` picks entry `⌊t N⌋`, the last entry
/// covering `t == 1.`.
#[derive(Clone, Debug)]
pub(crate) struct Listed {
    colors: Vec<RGB<f64>>, // Invariant: non-empty
}

impl Listed {
    pub(crate) fn new(colors: &[RGB8]) -> Self {
        Listed { colors: colors.iter().map(|&c| color::normalize(c)).collect() }
    }
}

impl ColorRange for Listed {
    fn rgb(&self, t: f64) -> RGB<f64> {
        let n = self.colors.len();
        let i = (t.clamp(0., 1.) * n as f64) as usize;
        self.colors[i.min(n - 1)]
    }
}

/// Number of entries of a Matplotlib colormap lookup table.
pub(crate) const LUT_SIZE: usize = 256;

/// A color range seen through a lookup table of [`LUT_SIZE`] entries,
/// entry `k` holding the color at `k / (LUT_SIZE - 1)`.  `t` selects
/// entry `⌊t LUT_SIZE⌋`, the last entry covering `t == 1.`.
#[derive(Clone, Debug)]
pub(crate) struct Lut<R> {
    range: R,
}

impl<R: ColorRange> Lut<R> {
    pub(crate) fn new(range: R) -> Self { Lut { range } }
}

impl<R: ColorRange> ColorRange for Lut<R> {
    fn rgb(&self, t: f64) -> RGB<f64> {
        let k = ((t.clamp(0., 1.) * LUT_SIZE as f64) as usize).min(LUT_SIZE - 1);
        self.range.rgb(k as f64 / (LUT_SIZE - 1) as f64)
    }
}

/// `n` colors from white to `target`, both included.
pub(crate) fn sequential(target: RGB<f64>, n: usize) -> Vec<String> {
    if n == 1 { return vec![color::rgb_to_hex(target)] }
    Gradient::new(WHITE, target).hex(n)
}

/// `n` colors from `low` through white to `high`.
pub(crate) fn diverging(low: RGB<f64>, high: RGB<f64>, n: usize) -> Vec<String> {
    let ramp = Diverging::new(low, high);
    if n == 1 { return vec![color::rgb_to_hex(ramp.rgb(0.5))] }
    ramp.hex(n)
}

/// Return `n` colors going from white (`#ffffff`) to `target`.
///
/// Entry `k` is the linear interpolation at `k / (n-1)`; for `n == 1`
/// the result is `[target]`.  Colors are lowercase `#rrggbb`.
///
/// ```
/// use tidyplots_palettes::create_sequential_gradient;
/// let g = create_sequential_gradient("#FF0000", 5)?;
/// assert_eq!(g, ["#ffffff", "#ffbfbf", "#ff8080", "#ff4040", "#ff0000"]);
/// # Ok::<(), tidyplots_palettes::PaletteError>(())
/// ```
pub fn create_sequential_gradient(target: &str, n: usize)
                                  -> Result<Vec<String>, PaletteError> {
    Ok(sequential(color::hex_to_rgb(target)?, n))
}

/// Return `n` colors going from `low` to white to `high`.
///
/// The first half interpolates `low → white`, the second half
/// `white → high`.  For odd `n` the middle entry is exactly
/// `#ffffff`; for even `n` the two central entries are the steps
/// closest to white on each side.  `n == 1` gives `[#ffffff]`.
pub fn create_diverging_gradient(low: &str, high: &str, n: usize)
                                 -> Result<Vec<String>, PaletteError> {
    let low = color::hex_to_rgb(low)?;
    let high = color::hex_to_rgb(high)?;
    Ok(diverging(low, high, n))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_red() {
        let g = create_sequential_gradient("#FF0000", 5).unwrap();
        assert_eq!(g, ["#ffffff", "#ffbfbf", "#ff8080", "#ff4040", "#ff0000"]);
        let rgb: Vec<_> = g.iter().map(|c| color::parse_hex(c).unwrap())
            .collect();
        assert!(rgb.windows(2).all(|w| w[0].g > w[1].g && w[0].b > w[1].b));
        assert!(rgb.iter().all(|c| c.r == 255));
    }

    #[test]
    fn sequential_degenerate() {
        assert_eq!(create_sequential_gradient("#3C5488", 1).unwrap(),
                   ["#3c5488"]);
        assert!(create_sequential_gradient("#3C5488", 0).unwrap().is_empty());
        assert_eq!(create_sequential_gradient("#3C5488", 2).unwrap(),
                   ["#ffffff", "#3c5488"]);
    }

    #[test]
    fn diverging_odd() {
        let g = create_diverging_gradient("#FF0000", "#0000FF", 5).unwrap();
        assert_eq!(g, ["#ff0000", "#ff8080", "#ffffff", "#8080ff", "#0000ff"]);
        for n in [3, 7, 9, 21] {
            let g = create_diverging_gradient("#E64B35", "#4DBBD5", n)
                .unwrap();
            assert_eq!(g.len(), n);
            assert_eq!(g[0], "#e64b35");
            assert_eq!(g[n / 2], "#ffffff");
            assert_eq!(g[n - 1], "#4dbbd5");
        }
    }

    #[test]
    fn diverging_even() {
        let g = create_diverging_gradient("#FF0000", "#0000FF", 4).unwrap();
        assert_eq!(g, ["#ff0000", "#ffaaaa", "#aaaaff", "#0000ff"]);
        assert_eq!(create_diverging_gradient("#FF0000", "#0000FF", 2)
                   .unwrap(), ["#ff0000", "#0000ff"]);
        assert_eq!(create_diverging_gradient("#FF0000", "#0000FF", 1)
                   .unwrap(), ["#ffffff"]);
    }

    #[test]
    fn invalid_color() {
        assert_eq!(create_diverging_gradient("#FF0000", "blue", 3),
                   Err(PaletteError::InvalidColorFormat("blue".into())));
        assert!(create_sequential_gradient("#FF00", 3).is_err());
    }

    #[test]
    fn palette_gradient_hits_stops() {
        let stops = [RGB8::new(0, 0, 0), RGB8::new(255, 0, 0),
                     RGB8::new(255, 255, 255)];
        let g = PaletteGradient::new(&stops);
        assert_eq!(g.hex(5), ["#000000", "#800000", "#ff0000", "#ff8080",
                              "#ffffff"]);
        let single = PaletteGradient::new(&stops[1..2]);
        assert_eq!(single.hex(3), ["#ff0000"; 3]);
    }

    #[test]
    fn listed_picks_floor() {
        let colors: Vec<_> = (0 .. 10u8).map(|i| RGB8::new(i, i, i)).collect();
        let l = Listed::new(&colors);
        let picked: Vec<_> = l.range(0., 1., 8)
            .map(|(_, c)| color::quantize(c).r).collect();
        assert_eq!(picked, [0, 1, 2, 4, 5, 7, 8, 9]);
    }

    #[test]
    fn lut_snaps_to_entries() {
        let ramp = Gradient::new(RGB::new(0., 0., 0.), WHITE);
        let lut = Lut::new(ramp);
        // Entry `k` is the level `k` of the ramp.
        let levels: Vec<_> = lut.range(0., 1., 8)
            .map(|(_, c)| color::quantize(c).r).collect();
        assert_eq!(levels, [0, 36, 73, 109, 146, 182, 219, 255]);
        assert_eq!(lut.rgb(0.5), ramp.rgb(128. / 255.));
        assert_eq!(lut.rgb(1. / 256.), lut.rgb(1.9 / 256.));
    }
}
