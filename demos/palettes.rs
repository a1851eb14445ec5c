//! Write `palettes.html`, a swatch page of every built-in palette
//! with its sequential and diverging gradients.
//!
//! Run with `RUST_LOG=debug` to see the registry being built.

use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tidyplots_palettes::{builtin, ColorRange, Palette, PaletteKind};

type Err = Box<dyn Error>;

fn table_of_colors(fh: &mut impl Write, colors: &[String],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {c}\"></td>")?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td>\
                  </tr></table><br/>")?;
    Ok(())
}

fn palette(fh: &mut impl Write, p: &Palette) -> Result<(), Err> {
    let name = p.name();
    let c = format!("{name} ({}, {} colors)", p.kind(), p.len());
    table_of_colors(fh, &p.hex(), 40, &c)?;
    let q = || builtin().query(name).n_colors(9);
    table_of_colors(fh, &q().kind(PaletteKind::Sequential).colors()?, 40,
                    "sequential from the first color")?;
    table_of_colors(fh, &q().kind(PaletteKind::Diverging).colors()?, 40,
                    "diverging from the first to the second color")?;
    if p.kind() != PaletteKind::Qualitative {
        table_of_colors(fh, &p.gradient().hex(128), 1, "interpolated")?;
    }
    Ok(())
}

fn main() -> Result<(), Err> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let mut fh = BufWriter::new(File::create("palettes.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Palettes: {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;
    for kind in [PaletteKind::Qualitative, PaletteKind::Sequential,
                 PaletteKind::Diverging] {
        writeln!(fh, "<h3>{kind}</h3>")?;
        for p in builtin().iter().filter(|p| p.kind() == kind) {
            palette(&mut fh, p)?;
        }
    }
    writeln!(fh, "</body>\n\
                  </html>")?;
    info!(palettes = builtin().len(), "wrote palettes.html");
    Ok(())
}
