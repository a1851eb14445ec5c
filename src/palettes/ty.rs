use std::{fmt, str::FromStr};
use rgb::RGB8;
use crate::PaletteError;

/// How the colors of a built-in palette are obtained.
pub(crate) enum Source {
    /// Colors registered as is.
    Colors(&'static [RGB8]),
    /// Linear-segmented colormap through evenly spaced stops, resolved
    /// into a 256-entry lookup table and sampled at
    /// [`CMAP_SAMPLES`](super::CMAP_SAMPLES) points.
    Stops(&'static [RGB8]),
    /// Listed colormap, sampled at
    /// [`CMAP_SAMPLES`](super::CMAP_SAMPLES) points.
    Listed(&'static [RGB8]),
}

/// A built-in palette before it is registered.
pub(crate) struct PaletteData {
    pub(crate) name: &'static str,
    pub(crate) source: Source, // Invariant: non-empty
}

/// Type of Palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PaletteKind {
    /// Qualitative color scheme.  They do not imply magnitude
    /// differences between legend classes, and hues are used to
    /// create the primary visual differences between classes.
    #[default]
    Qualitative,
    /// Sequential color scheme, suited to ordered data that progress
    /// from low to high: a ramp from white to a single hue.
    Sequential,
    /// Divergent color scheme.  They put equal emphasis on mid-range
    /// critical values and extremes at both ends of the data range:
    /// a ramp from one hue through white to another.
    Diverging,
}

impl PaletteKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PaletteKind::Qualitative => "qualitative",
            PaletteKind::Sequential => "sequential",
            PaletteKind::Diverging => "diverging",
        }
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteKind {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "qualitative" => Ok(PaletteKind::Qualitative),
            "sequential" => Ok(PaletteKind::Sequential),
            "diverging" => Ok(PaletteKind::Diverging),
            _ => Err(PaletteError::UnknownKind(s.to_string())),
        }
    }
}
