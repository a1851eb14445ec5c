//! Named palettes and lookup.

use std::collections::BTreeMap;
use lazy_static::lazy_static;
use rgb::{RGB, RGB8};
use tracing::{debug, trace};

use crate::{ColorRange, PaletteError, PaletteKind,
            color,
            gradient::{self, Listed, Lut, PaletteGradient},
            palettes::{self, CMAP_SAMPLES, ty::{PaletteData, Source}}};

/// A named, ordered, immutable list of colors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    name: String,
    kind: PaletteKind,
    colors: Vec<RGB8>, // Invariant: non-empty
}

fn sample(range: &impl ColorRange) -> Vec<RGB8> {
    range.range(0., 1., CMAP_SAMPLES).map(|(_, c)| color::quantize(c)).collect()
}

impl Palette {
    fn from_data(p: &PaletteData) -> Self {
        let colors = match p.source {
            Source::Colors(c) => c.to_vec(),
            Source::Stops(c) => sample(&Lut::new(PaletteGradient::new(c))),
            Source::Listed(c) => sample(&Listed::new(c)),
        };
        Palette { name: p.name.to_string(), kind: palettes::kind_of(p.name),
                  colors }
    }

    pub fn name(&self) -> &str { &self.name }

    /// Classification of the palette name, see [`palette_kind`].
    pub fn kind(&self) -> PaletteKind { self.kind }

    /// Returns the number of colors in the palette (at least 1).
    pub fn len(&self) -> usize { self.colors.len() }

    pub fn colors(&self) -> &[RGB8] { &self.colors }

    /// The colors as lowercase `#rrggbb` strings, in registration
    /// order.
    pub fn hex(&self) -> Vec<String> {
        self.colors.iter().map(|&c| color::to_hex(c)).collect()
    }

    /// Returns a gradient going through all colors of the palette.
    /// It only makes sense for sequential and diverging palettes.
    pub fn gradient(&self) -> PaletteGradient { PaletteGradient::new(&self.colors) }

    /// The color at `index`, which must address an entry.
    fn color(&self, index: usize) -> Result<RGB<f64>, PaletteError> {
        match self.colors.get(index) {
            Some(&c) => Ok(color::normalize(c)),
            None => Err(PaletteError::InvalidIndex {
                name: self.name.clone(), index, len: self.len() }),
        }
    }
}

/// An immutable set of named palettes.
///
/// [`PaletteRegistry::new`] builds a registry with the built-in
/// palettes; [`builtin`] shares one such registry process-wide.
#[derive(Clone, Debug)]
pub struct PaletteRegistry {
    palettes: BTreeMap<String, Palette>,
}

impl Default for PaletteRegistry {
    fn default() -> Self { Self::new() }
}

impl PaletteRegistry {
    /// Registry of the built-in palettes.
    pub fn new() -> Self {
        let palettes: BTreeMap<_, _> = palettes::BUILTIN.iter()
            .map(|p| (p.name.to_string(), Palette::from_data(p)))
            .collect();
        debug!(palettes = palettes.len(), "built-in palette registry built");
        PaletteRegistry { palettes }
    }

    /// Configure a registry, possibly with custom palettes.
    pub fn builder() -> RegistryBuilder { RegistryBuilder::default() }

    /// Number of registered palettes.
    pub fn len(&self) -> usize { self.palettes.len() }

    pub fn is_empty(&self) -> bool { self.palettes.is_empty() }

    pub fn contains(&self, name: &str) -> bool { self.palettes.contains_key(name) }

    /// The palette registered under `name`.
    pub fn get(&self, name: &str) -> Result<&Palette, PaletteError> {
        self.palettes.get(name).ok_or_else(|| PaletteError::UnknownPalette {
            name: name.to_string(),
            available: self.list_palettes().into_iter().map(String::from)
                .collect() })
    }

    /// All palette names, sorted.
    pub fn list_palettes(&self) -> Vec<&str> {
        self.palettes.keys().map(String::as_str).collect()
    }

    /// Iterate over the palettes, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = &Palette> {
        self.palettes.values()
    }

    /// Start a lookup of the palette `name`.  Without further
    /// settings, [`PaletteQuery::colors`] returns the whole palette.
    pub fn query<'a>(&'a self, name: &'a str) -> PaletteQuery<'a> {
        PaletteQuery { registry: self, name, n_colors: None,
                       kind: PaletteKind::Qualitative, i: 0, j: None }
    }

    /// The colors of `name`: all of them if `n_colors` is `None`,
    /// otherwise exactly `n_colors`, cycling through the palette when
    /// it is shorter.
    pub fn get_palette(&self, name: &str, n_colors: Option<usize>)
                       -> Result<Vec<String>, PaletteError> {
        let q = self.query(name);
        match n_colors {
            Some(n) => q.n_colors(n).colors(),
            None => q.colors(),
        }
    }
}

/// Set the parameters of a palette lookup.
///
/// Created by [`PaletteRegistry::query`].
#[derive(Clone, Debug)]
pub struct PaletteQuery<'a> {
    registry: &'a PaletteRegistry,
    name: &'a str,
    n_colors: Option<usize>,
    kind: PaletteKind,
    i: usize,
    j: Option<usize>,
}

impl<'a> PaletteQuery<'a> {
    /// Ask for exactly `n` colors.
    pub fn n_colors(mut self, n: usize) -> Self {
        self.n_colors = Some(n);
        self
    }

    /// How the `n_colors` are produced (default: qualitative).
    pub fn kind(mut self, kind: PaletteKind) -> Self {
        self.kind = kind;
        self
    }

    /// Index of the target color of a sequential gradient, and of
    /// the low end of a diverging one (default: 0).
    pub fn i(mut self, i: usize) -> Self {
        self.i = i;
        self
    }

    /// Index of the high end of a diverging gradient.  Defaults to
    /// the color following `i`, wrapping to the first one after the
    /// last.
    pub fn j(mut self, j: usize) -> Self {
        self.j = Some(j);
        self
    }

    /// Resolve the query.
    ///
    /// The indices are checked whatever the kind and even when no
    /// `n_colors` is set; only the implicit `j` wraps around.
    pub fn colors(self) -> Result<Vec<String>, PaletteError> {
        let palette = self.registry.get(self.name)?;
        let low = palette.color(self.i)?;
        let j = self.j.unwrap_or((self.i + 1) % palette.len());
        let high = palette.color(j)?;
        let Some(n) = self.n_colors else { return Ok(palette.hex()) };
        trace!(name = self.name, n, kind = %self.kind, i = self.i, j,
               "resolving palette");
        let colors = match self.kind {
            PaletteKind::Qualitative => palette.colors.iter().cycle().take(n)
                .map(|&c| color::to_hex(c)).collect(),
            PaletteKind::Sequential => gradient::sequential(low, n),
            PaletteKind::Diverging => gradient::diverging(low, high, n),
        };
        Ok(colors)
    }
}

/// Configure a [`PaletteRegistry`].
///
/// ```
/// use tidyplots_palettes::PaletteRegistry;
/// let reg = PaletteRegistry::builder()
///     .builtin()
///     .palette("brand", &["#0B1F3A", "#F2A900"])
///     .build()?;
/// assert_eq!(reg.get_palette("brand", Some(3))?,
///            ["#0b1f3a", "#f2a900", "#0b1f3a"]);
/// assert!(reg.contains("npg"));
/// # Ok::<(), tidyplots_palettes::PaletteError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct RegistryBuilder {
    builtin: bool,
    custom: Vec<(String, Vec<String>)>,
}

impl RegistryBuilder {
    /// Include the built-in palettes.
    pub fn builtin(mut self) -> Self {
        self.builtin = true;
        self
    }

    /// Add the palette `name` made of `#RRGGBB` colors.
    pub fn palette(mut self, name: &str, colors: &[&str]) -> Self {
        self.custom.push((name.to_string(),
                          colors.iter().map(|c| c.to_string()).collect()));
        self
    }

    pub fn build(self) -> Result<PaletteRegistry, PaletteError> {
        let mut palettes = if self.builtin { PaletteRegistry::new().palettes }
                           else { BTreeMap::new() };
        for (name, hex) in self.custom {
            if hex.is_empty() { return Err(PaletteError::EmptyPalette(name)) }
            if palettes.contains_key(&name) {
                return Err(PaletteError::DuplicatePalette(name))
            }
            let colors = hex.iter().map(|c| color::parse_hex(c))
                .collect::<Result<Vec<_>, _>>()?;
            let kind = palettes::kind_of(&name);
            palettes.insert(name.clone(), Palette { name, kind, colors });
        }
        debug!(palettes = palettes.len(), "palette registry built");
        Ok(PaletteRegistry { palettes })
    }
}

lazy_static! {
    static ref BUILTIN: PaletteRegistry = PaletteRegistry::new();
}

/// The process-wide registry of built-in palettes, created on first
/// use.
pub fn builtin() -> &'static PaletteRegistry { &BUILTIN }

/// [`PaletteRegistry::get_palette`] on the [`builtin`] registry.
///
/// Sequential and diverging gradients, and the indices `i` and `j` of
/// the colors they go through, are set on a query built with
/// [`PaletteRegistry::query`], e.g. `builtin().query(name)`.
///
/// ```
/// use tidyplots_palettes::{builtin, get_palette, PaletteKind};
/// let npg = get_palette("npg", Some(12))?;
/// assert_eq!(npg[0], "#e64b35");
/// assert_eq!(npg[10], npg[0]);
///
/// let seq = builtin().query("npg").n_colors(5)
///     .kind(PaletteKind::Sequential).i(1).colors()?;
/// assert_eq!(seq.first().map(String::as_str), Some("#ffffff"));
/// assert_eq!(seq.last().map(String::as_str), Some("#4dbbd5"));
/// # Ok::<(), tidyplots_palettes::PaletteError>(())
/// ```
pub fn get_palette(name: &str, n_colors: Option<usize>)
                   -> Result<Vec<String>, PaletteError> {
    builtin().get_palette(name, n_colors)
}

/// Names of the [`builtin`] palettes, sorted.
pub fn list_palettes() -> Vec<&'static str> { builtin().list_palettes() }

/// Classify a palette name as sequential, diverging or qualitative.
///
/// Names of the Matplotlib sequential and diverging colormaps are
/// classified as such; every other string, registered or not, is
/// qualitative.
pub fn palette_kind(name: &str) -> PaletteKind { palettes::kind_of(name) }

/// Names of the built-in Matplotlib colormaps classified as `kind`.
/// Every one of them is registered in [`builtin`].
pub fn colormap_names(kind: PaletteKind) -> &'static [&'static str] {
    palettes::colormaps(kind)
}
