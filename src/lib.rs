//! Named color palettes and white-anchored gradients.
//!
//! - [`PaletteRegistry`] holds named [`Palette`]s; [`builtin`] is the
//!   shared registry with the journal palettes (`npg`, `aaas`,
//!   `lancet`,…) and sampled Matplotlib colormaps.
//! - [`create_sequential_gradient`] and [`create_diverging_gradient`]
//!   interpolate between palette colors and white.
//! - [`hex_to_rgb`] and [`rgb_to_hex`] convert colors.
//!
//! ```
//! use tidyplots_palettes::{builtin, PaletteKind};
//! let colors = builtin().query("npg").n_colors(3)
//!     .kind(PaletteKind::Diverging).i(0).j(3).colors()?;
//! assert_eq!(colors, ["#e64b35", "#ffffff", "#3c5488"]);
//! # Ok::<(), tidyplots_palettes::PaletteError>(())
//! ```

use rgb::RGB;

mod color;
mod error;
mod gradient;
mod palettes;
mod registry;

pub use color::{hex_to_rgb, rgb_to_hex, parse_hex, to_hex, normalize,
                quantize, WHITE};
pub use error::PaletteError;
pub use gradient::{Gradient, Diverging, PaletteGradient,
                   create_sequential_gradient, create_diverging_gradient};
pub use palettes::ty::PaletteKind;
pub use registry::{Palette, PaletteRegistry, RegistryBuilder, PaletteQuery,
                   builtin, get_palette, list_palettes, palette_kind,
                   colormap_names};

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> RGB<f64>;

    /// Return an iterator yielding uniform sampling of `n` points
    /// between `a` and `b` (with the bounds `a` and `b` included in
    /// the list of points) together with colors.  It is not required
    /// that `a <= b`.
    fn range(&self, mut a: f64, mut b: f64, n: usize) -> Range<'_, Self> {
        if a == f64::INFINITY { a = f64::MAX; }
        else if a == f64::NEG_INFINITY { a = f64::MIN };
        if b == f64::NEG_INFINITY { b = f64::MIN; }
        else if b == f64::INFINITY { b = f64::MAX };
        // `a` or `b` NaN will give an iterator yielding NaN.
        if n == 0 {
            Range { range: self, a, b, flast: 0., last: 0,
                    i: 1, j: 0 } // Empty iterator
        } else {
            Range { range: self, a, b, flast: (n - 1) as f64,
                    last: n - 1, i: 0, j: n - 1 }
        }
    }

    /// Sample `n` colors evenly over \[0, 1\], both ends included, as
    /// `#rrggbb` strings.
    fn hex(&self, n: usize) -> Vec<String> {
        self.range(0., 1., n).map(|(_, c)| rgb_to_hex(c)).collect()
    }
}

/// An iterator yielding `f64` in a given range together with colors.
///
/// Created by [`ColorRange::range`].
pub struct Range<'a, R: ?Sized> {
    range: &'a R,
    a: f64, // finite or NaN
    b: f64, // finite or NaN
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<'a, R> Range<'a, R> where R: ColorRange + ?Sized {
    /// Return the float and RGB color of the position `k` (assuming
    /// it is in the range `0 ..= self.last`).  The end points are
    /// evaluated at exactly `0.` and `1.`.
    fn rgb(&self, k: usize) -> (f64, RGB<f64>) {
        if k == 0 {
            (self.a, self.range.rgb(0.))
        } else if k == self.last {
            (self.b, self.range.rgb(1.))
        } else {
            let alpha = (self.last - k) as f64;
            let beta = k as f64;
            let t = beta / self.flast;
            let mut x = (alpha * self.a + beta * self.b) / self.flast;
            if x.is_infinite() {
                x = (1. - t) * self.a + t * self.b;
            }
            (x, self.range.rgb(t))
        }
    }
}

impl<'a, R> Iterator for Range<'a, R> where R: ColorRange + ?Sized {
    type Item = (f64, RGB<f64>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.j + 1).saturating_sub(self.i);
        (len, Some(len))
    }
}

impl<'a, R> ExactSizeIterator for Range<'a, R> where R: ColorRange + ?Sized {}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_points() {
        let g = Gradient::new(RGB::new(0., 0., 0.), WHITE);
        let r = g.range(0., 1., 11);
        assert_eq!(r.len(), 11);
        for (i, (x, c)) in r.enumerate() {
            assert!((x - 0.1 * i as f64).abs() <= 1e-15,
                    "{} ≉ {}", x, 0.1 * i as f64);
            assert_eq!(g.rgb(x), c);
        }
    }

    #[test]
    fn range_empty_and_single() {
        let g = Gradient::new(WHITE, RGB::new(1., 0., 0.));
        assert_eq!(g.range(0., 1., 0).len(), 0);
        assert_eq!(g.range(0., 1., 0).next(), None);
        let one: Vec<_> = g.range(3., 5., 1).collect();
        assert_eq!(one, [(3., WHITE)]);
    }

    #[test]
    fn range_infinite_bounds() {
        let g = Gradient::new(WHITE, WHITE);
        let xs: Vec<_> = g.range(f64::NEG_INFINITY, f64::INFINITY, 3)
            .map(|(x, _)| x).collect();
        assert_eq!(xs[0], f64::MIN);
        assert_eq!(xs[2], f64::MAX);
        assert!(xs[1].is_finite());
    }
}
