use rgb::RGB;
use tidyplots_palettes::{
    builtin, create_diverging_gradient, create_sequential_gradient,
    get_palette, hex_to_rgb, list_palettes, palette_kind, parse_hex,
    rgb_to_hex, ColorRange, PaletteError, PaletteKind};

const NPG: [&str; 10] = ["#E64B35", "#4DBBD5", "#00A087", "#3C5488", "#F39B7F",
                         "#8491B4", "#91D1C2", "#DC0000", "#7E6148", "#B09C85"];

fn lower(colors: &[&str]) -> Vec<String> {
    colors.iter().map(|c| c.to_lowercase()).collect()
}

#[test]
fn npg_lookup() {
    assert_eq!(get_palette("npg", None).unwrap(), lower(&NPG));
    assert_eq!(get_palette("npg", Some(5)).unwrap(), lower(&NPG[..5]));
    let mut fifteen = lower(&NPG);
    fifteen.extend(lower(&NPG[..5]));
    assert_eq!(get_palette("npg", Some(15)).unwrap(), fifteen);
}

#[test]
fn index_far_out_of_range() {
    let r = builtin().query("npg").i(100).colors();
    assert!(matches!(r, Err(PaletteError::InvalidIndex { index: 100, .. })));
}

#[test]
fn conversions() {
    assert_eq!(hex_to_rgb("#FF0000").unwrap(), RGB::new(1., 0., 0.));
    assert_eq!(rgb_to_hex((1., 0., 0.)), "#ff0000");
    for c in NPG {
        assert_eq!(rgb_to_hex(hex_to_rgb(c).unwrap()), c.to_lowercase());
    }
}

#[test]
fn sequential_red() {
    let g = create_sequential_gradient("#FF0000", 5).unwrap();
    assert_eq!(g.len(), 5);
    assert_eq!(g[0], "#ffffff");
    assert_eq!(g[4], "#ff0000");
    let rgb: Vec<_> = g.iter().map(|c| parse_hex(c).unwrap()).collect();
    for w in rgb.windows(2) {
        assert!(w[0].g > w[1].g && w[0].b > w[1].b);
        assert!(w[0].r <= w[1].r);
    }
}

#[test]
fn gradients_over_every_registered_color() {
    for p in builtin().iter() {
        for c in p.hex() {
            for n in [2, 3, 6] {
                let g = create_sequential_gradient(&c, n).unwrap();
                assert_eq!((g[0].as_str(), &g[n - 1]), ("#ffffff", &c));
            }
        }
        let hex = p.hex();
        let (lo, hi) = (&hex[0], &hex[hex.len() - 1]);
        for n in [3, 5, 11] {
            let g = create_diverging_gradient(&lo.to_uppercase(), hi, n)
                .unwrap();
            assert_eq!(&g[0], lo);
            assert_eq!(g[n / 2], "#ffffff");
            assert_eq!(&g[n - 1], hi);
        }
    }
}

#[test]
fn classification_is_total() {
    for name in list_palettes().into_iter().chain(["", "nope", "BLUES"]) {
        let k = palette_kind(name);
        assert!(matches!(k, PaletteKind::Qualitative | PaletteKind::Sequential
                         | PaletteKind::Diverging));
    }
    assert_eq!(palette_kind("viridis"), PaletteKind::Sequential);
    assert_eq!(palette_kind("bwr"), PaletteKind::Diverging);
    assert_eq!(palette_kind("BLUES"), PaletteKind::Qualitative);
}

#[test]
fn kind_from_config_string() {
    let kind: PaletteKind = "sequential".parse().unwrap();
    let g = builtin().query("lancet").n_colors(3).kind(kind).i(1)
        .colors().unwrap();
    assert_eq!(g, ["#ffffff", "#f68080", "#ed0000"]);
}

#[test]
fn palette_gradient_through_stops() {
    let blues = builtin().get("Blues").unwrap();
    let g = blues.gradient();
    let hex = blues.hex();
    assert_eq!(rgb_to_hex(g.rgb(0.)), hex[0]);
    assert_eq!(rgb_to_hex(g.rgb(1.)), hex[hex.len() - 1]);
    assert_eq!(g.hex(100).len(), 100);
}
