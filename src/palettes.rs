// Built-in palettes.

pub(crate) mod ty;
use ty::*;
use crate::color::rgb24;

/// Number of colors sampled from each Matplotlib colormap.
pub(crate) const CMAP_SAMPLES: usize = 8;

macro_rules! colors {
    ($($x: literal),* $(,)?) => { &[$(rgb24($x)),*] }
}

macro_rules! palettes {
    ($($name: literal => $src: ident [$($x: literal),* $(,)?]),* $(,)?) => {
        &[$(PaletteData { name: $name, source: Source::$src(colors![$($x),*]) }),*]
    }
}

/// Matplotlib sequential colormaps.
pub(crate) const SEQUENTIAL_CMAPS: [&str; 15] = [
    "viridis", "plasma", "inferno", "magma", "cividis",
    "Blues", "Greens", "Oranges", "Reds", "Purples",
    "YlOrBr", "YlOrRd", "OrRd", "PuRd", "RdPu",
];

/// Matplotlib diverging colormaps.
pub(crate) const DIVERGING_CMAPS: [&str; 11] = [
    "PiYG", "PRGn", "BrBG", "PuOr", "RdGy", "RdBu",
    "RdYlBu", "RdYlGn", "Spectral", "coolwarm", "bwr",
];

/// Matplotlib qualitative colormaps.
pub(crate) const QUALITATIVE_CMAPS: [&str; 8] = [
    "Pastel1", "Pastel2", "Paired", "Accent",
    "tab10", "tab20", "tab20b", "tab20c",
];

pub(crate) static BUILTIN: &[PaletteData] = palettes![
    // Scientific journals and organizations (ggsci)
    "npg" => Colors[0xE64B35, 0x4DBBD5, 0x00A087, 0x3C5488, 0xF39B7F,
                    0x8491B4, 0x91D1C2, 0xDC0000, 0x7E6148, 0xB09C85],
    "aaas" => Colors[0x3B4992, 0xEE0000, 0x008B45, 0x631879, 0x008280,
                     0xBB0021, 0x5F559B, 0xA20056, 0x808180, 0x1B1919],
    "nejm" => Colors[0xBC3C29, 0x0072B5, 0xE18727, 0x20854E, 0x7876B1,
                     0x6F99AD, 0xFFDC91, 0xEE4C97],
    "lancet" => Colors[0x00468B, 0xED0000, 0x42B540, 0x0099B4, 0x925E9F,
                       0xFDAF91, 0xAD002A, 0xADB6B6],
    "jama" => Colors[0x374E55, 0xDF8F44, 0x00A1D5, 0xB24745, 0x79AF97,
                     0x6A6599, 0x80796B],
    "jco" => Colors[0x0073C2, 0xEFC000, 0x868686, 0xCD534C, 0x7AA6DC,
                    0x003C67, 0x8F7700, 0x3B3B3B],
    "ucscgb" => Colors[0xFF0000, 0xFF9900, 0x00FF00, 0x6600FF, 0x0000FF,
                       0xFFCC00, 0xFF00CC, 0x00FF00, 0xFF6600],
    "d3" => Colors[0x1F77B4, 0xFF7F0E, 0x2CA02C, 0xD62728, 0x9467BD,
                   0x8C564B, 0xE377C2, 0x7F7F7F, 0xBCBD22, 0x17BECF],
    "material" => Colors[0x2196F3, 0xF44336, 0x4CAF50, 0xFFC107, 0x9C27B0,
                         0xFF9800, 0x795548, 0x607D8B],
    "igv" => Colors[0x5050FF, 0xCE3D32, 0x749B58, 0xF0B015, 0x6783B0,
                    0xB86A92, 0xC1B02C, 0x7F7F7F],
    "dark2" => Colors[0x1B9E77, 0xD95F02, 0x7570B3, 0xE7298A, 0x66A61E,
                      0xE6AB02, 0xA6761D, 0x666666],
    "set1" => Colors[0xE41A1C, 0x377EB8, 0x4DAF4A, 0x984EA3, 0xFF7F00,
                     0xFFFF33, 0xA65628, 0xF781BF],
    "set2" => Colors[0x66C2A5, 0xFC8D62, 0x8DA0CB, 0xE78AC3, 0xA6D854,
                     0xFFD92F, 0xE5C494, 0xB3B3B3],
    "set3" => Colors[0x8DD3C7, 0xFFFFB3, 0xBEBADA, 0xFB8072, 0x80B1D3,
                     0xFDB462, 0xB3DE69, 0xFCCDE5],

    // Matplotlib sequential colormaps.  viridis to magma are listed
    // colormaps of 256 entries, registered by their 8 samples.
    "viridis" => Colors[0x440154, 0x46327e, 0x365c8d, 0x277f8e, 0x1fa187,
                        0x4ac16d, 0xa0da39, 0xfde725],
    "plasma" => Colors[0x0d0887, 0x5302a3, 0x8b0aa5, 0xb83289, 0xdb5c68,
                       0xf48849, 0xfebd2a, 0xf0f921],
    "inferno" => Colors[0x000004, 0x280b54, 0x65156e, 0x9f2a63, 0xd44842,
                        0xf57d15, 0xfac228, 0xfcffa4],
    "magma" => Colors[0x000004, 0x221150, 0x5f187f, 0x982d80, 0xd3436e,
                      0xf8765c, 0xfebb81, 0xfcfdbf],
    "cividis" => Stops[0x00224e, 0x123570, 0x3b496c, 0x575d6d, 0x707173,
                       0x8a8678, 0xa59c74, 0xc3b369, 0xe1cc55, 0xfee838],
    "Blues" => Stops[0xf7fbff, 0xdeebf7, 0xc6dbef, 0x9ecae1, 0x6baed6,
                     0x4292c6, 0x2171b5, 0x08519c, 0x08306b],
    "Greens" => Stops[0xf7fcf5, 0xe5f5e0, 0xc7e9c0, 0xa1d99b, 0x74c476,
                      0x41ab5d, 0x238b45, 0x006d2c, 0x00441b],
    "Oranges" => Stops[0xfff5eb, 0xfee6ce, 0xfdd0a2, 0xfdae6b, 0xfd8d3c,
                       0xf16913, 0xd94801, 0xa63603, 0x7f2704],
    "Reds" => Stops[0xfff5f0, 0xfee0d2, 0xfcbba1, 0xfc9272, 0xfb6a4a,
                    0xef3b2c, 0xcb181d, 0xa50f15, 0x67000d],
    "Purples" => Stops[0xfcfbfd, 0xefedf5, 0xdadaeb, 0xbcbddc, 0x9e9ac8,
                       0x807dba, 0x6a51a3, 0x54278f, 0x3f007d],
    "YlOrBr" => Stops[0xffffe5, 0xfff7bc, 0xfee391, 0xfec44f, 0xfe9929,
                      0xec7014, 0xcc4c02, 0x993404, 0x662506],
    "YlOrRd" => Stops[0xffffcc, 0xffeda0, 0xfed976, 0xfeb24c, 0xfd8d3c,
                      0xfc4e2a, 0xe31a1c, 0xbd0026, 0x800026],
    "OrRd" => Stops[0xfff7ec, 0xfee8c8, 0xfdd49e, 0xfdbb84, 0xfc8d59,
                    0xef6548, 0xd7301f, 0xb30000, 0x7f0000],
    "PuRd" => Stops[0xf7f4f9, 0xe7e1ef, 0xd4b9da, 0xc994c7, 0xdf65b0,
                    0xe7298a, 0xce1256, 0x980043, 0x67001f],
    "RdPu" => Stops[0xfff7f3, 0xfde0dd, 0xfcc5c0, 0xfa9fb5, 0xf768a1,
                    0xdd3497, 0xae017e, 0x7a0177, 0x49006a],

    // Matplotlib diverging colormaps
    "PiYG" => Stops[0x8e0152, 0xc51b7d, 0xde77ae, 0xf1b6da, 0xfde0ef, 0xf7f7f7,
                    0xe6f5d0, 0xb8e186, 0x7fbc41, 0x4d9221, 0x276419],
    "PRGn" => Stops[0x40004b, 0x762a83, 0x9970ab, 0xc2a5cf, 0xe7d4e8, 0xf7f7f7,
                    0xd9f0d3, 0xa6dba0, 0x5aae61, 0x1b7837, 0x00441b],
    "BrBG" => Stops[0x543005, 0x8c510a, 0xbf812d, 0xdfc27d, 0xf6e8c3, 0xf5f5f5,
                    0xc7eae5, 0x80cdc1, 0x35978f, 0x01665e, 0x003c30],
    "PuOr" => Stops[0x7f3b08, 0xb35806, 0xe08214, 0xfdb863, 0xfee0b6, 0xf7f7f7,
                    0xd8daeb, 0xb2abd2, 0x8073ac, 0x542788, 0x2d004b],
    "RdGy" => Stops[0x67001f, 0xb2182b, 0xd6604d, 0xf4a582, 0xfddbc7, 0xffffff,
                    0xe0e0e0, 0xbababa, 0x878787, 0x4d4d4d, 0x1a1a1a],
    "RdBu" => Stops[0x67001f, 0xb2182b, 0xd6604d, 0xf4a582, 0xfddbc7, 0xf7f7f7,
                    0xd1e5f0, 0x92c5de, 0x4393c3, 0x2166ac, 0x053061],
    "RdYlBu" => Stops[0xa50026, 0xd73027, 0xf46d43, 0xfdae61, 0xfee090, 0xffffbf,
                      0xe0f3f8, 0xabd9e9, 0x74add1, 0x4575b4, 0x313695],
    "RdYlGn" => Stops[0xa50026, 0xd73027, 0xf46d43, 0xfdae61, 0xfee08b, 0xffffbf,
                      0xd9ef8b, 0xa6d96a, 0x66bd63, 0x1a9850, 0x006837],
    "Spectral" => Stops[0x9e0142, 0xd53e4f, 0xf46d43, 0xfdae61, 0xfee08b, 0xffffbf,
                        0xe6f598, 0xabdda4, 0x66c2a5, 0x3288bd, 0x5e4fa2],
    "coolwarm" => Stops[0x3b4cc0, 0x7b9ff9, 0xc0d4f5, 0xdddddd, 0xf2cbb7,
                        0xee8468, 0xb40426],
    "bwr" => Stops[0x0000ff, 0xffffff, 0xff0000],

    // Matplotlib qualitative colormaps
    "Pastel1" => Listed[0xfbb4ae, 0xb3cde3, 0xccebc5, 0xdecbe4, 0xfed9a6,
                        0xffffcc, 0xe5d8bd, 0xfddaec, 0xf2f2f2],
    "Pastel2" => Listed[0xb3e2cd, 0xfdcdac, 0xcbd5e8, 0xf4cae4, 0xe6f5c9,
                        0xfff2ae, 0xf1e2cc, 0xcccccc],
    "Paired" => Listed[0xa6cee3, 0x1f78b4, 0xb2df8a, 0x33a02c, 0xfb9a99, 0xe31a1c,
                       0xfdbf6f, 0xff7f00, 0xcab2d6, 0x6a3d9a, 0xffff99, 0xb15928],
    "Accent" => Listed[0x7fc97f, 0xbeaed4, 0xfdc086, 0xffff99, 0x386cb0,
                       0xf0027f, 0xbf5b17, 0x666666],
    "tab10" => Listed[0x1f77b4, 0xff7f0e, 0x2ca02c, 0xd62728, 0x9467bd,
                      0x8c564b, 0xe377c2, 0x7f7f7f, 0xbcbd22, 0x17becf],
    "tab20" => Listed[0x1f77b4, 0xaec7e8, 0xff7f0e, 0xffbb78, 0x2ca02c,
                      0x98df8a, 0xd62728, 0xff9896, 0x9467bd, 0xc5b0d5,
                      0x8c564b, 0xc49c94, 0xe377c2, 0xf7b6d2, 0x7f7f7f,
                      0xc7c7c7, 0xbcbd22, 0xdbdb8d, 0x17becf, 0x9edae5],
    "tab20b" => Listed[0x393b79, 0x5254a3, 0x6b6ecf, 0x9c9ede, 0x637939,
                       0x8ca252, 0xb5cf6b, 0xcedb9c, 0x8c6d31, 0xbd9e39,
                       0xe7ba52, 0xe7cb94, 0x843c39, 0xad494a, 0xd6616b,
                       0xe7969c, 0x7b4173, 0xa55194, 0xce6dbd, 0xde9ed6],
    "tab20c" => Listed[0x3182bd, 0x6baed6, 0x9ecae1, 0xc6dbef, 0xe6550d,
                       0xfd8d3c, 0xfdae6b, 0xfdd0a2, 0x31a354, 0x74c476,
                       0xa1d99b, 0xc7e9c0, 0x756bb1, 0x9e9ac8, 0xbcbddc,
                       0xdadaeb, 0x636363, 0x969696, 0xbdbdbd, 0xd9d9d9],
];

/// Classify `name` by membership in the colormap lists above.  Any
/// other name, registered or not, is qualitative.
pub(crate) fn kind_of(name: &str) -> PaletteKind {
    if SEQUENTIAL_CMAPS.contains(&name) { PaletteKind::Sequential }
    else if DIVERGING_CMAPS.contains(&name) { PaletteKind::Diverging }
    else { PaletteKind::Qualitative }
}

/// The Matplotlib colormap names of kind `kind`.
pub(crate) fn colormaps(kind: PaletteKind) -> &'static [&'static str] {
    match kind {
        PaletteKind::Qualitative => &QUALITATIVE_CMAPS,
        PaletteKind::Sequential => &SEQUENTIAL_CMAPS,
        PaletteKind::Diverging => &DIVERGING_CMAPS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colormaps_are_registered() {
        for name in SEQUENTIAL_CMAPS.iter().chain(&DIVERGING_CMAPS)
            .chain(&QUALITATIVE_CMAPS) {
            assert!(BUILTIN.iter().any(|p| p.name == *name), "{name}");
        }
    }

    #[test]
    fn names_unique_and_non_empty() {
        for (k, p) in BUILTIN.iter().enumerate() {
            assert!(BUILTIN[k + 1 ..].iter().all(|q| q.name != p.name),
                    "{}", p.name);
            let (Source::Colors(c) | Source::Stops(c) | Source::Listed(c))
                = p.source;
            assert!(!c.is_empty(), "{}", p.name);
        }
    }

    #[test]
    fn curated_sets_disjoint() {
        for name in SEQUENTIAL_CMAPS {
            assert!(!DIVERGING_CMAPS.contains(&name));
            assert!(!QUALITATIVE_CMAPS.contains(&name));
        }
        for name in DIVERGING_CMAPS {
            assert!(!QUALITATIVE_CMAPS.contains(&name));
        }
        assert_eq!(kind_of("Blues"), PaletteKind::Sequential);
        assert_eq!(kind_of("RdBu"), PaletteKind::Diverging);
        assert_eq!(kind_of("tab10"), PaletteKind::Qualitative);
        assert_eq!(kind_of("Set1"), PaletteKind::Qualitative);
    }
}
