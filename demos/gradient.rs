//! Write `gradient.html` showing every palette, its interpolated
//! gradient and the grayscale version of both.

use std::{io::{BufWriter, Write},
          fs::File,
          error::Error};
use log::{info, LevelFilter};
use rgb::RGB8;
use simplelog::{Config, SimpleLogger};
use blind_gradient::{ColorRange, Palette, RGBColor, Trivalent};

type Err = Box<dyn Error>;

const OUTPUT: &str = "gradient.html";

fn css_string(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn table_of_colors(fh: &mut impl Write, colors: &[RGB8],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                 css_string(c))?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {}\"></td>",
                 css_string(c.to_gray()))?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

/// Sample the palette gradient in `n` columns, like an image encoder
/// asking for the color of each pixel column.
fn interpolated(fh: &mut impl Write, p: Palette, n: usize)
                -> Result<(), Err> {
    let colors: Vec<RGB8> = ColorRange::<RGB8>::range(p, 0., 1., n)
        .map(|(_, c)| c).collect();
    let comment = format!("{} (interpolated)", p.name());
    table_of_colors(fh, &colors, 1, &comment)
}

fn main() -> Result<(), Err> {
    SimpleLogger::init(LevelFilter::Debug, Config::default())?;
    let mut fh = BufWriter::new(File::create(OUTPUT)?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>blind-gradient: palettes</title>\n\
                  </head>\n\
                  <body>")?;
    for p in Palette::all() {
        info!("{}: {} colors", p.name(), p.len());
        let print = match p.print() {
            Trivalent::Yes => "",
            Trivalent::Maybe => ", maybe print friendly",
            Trivalent::No => ", not print friendly",
        };
        writeln!(fh, "<h3><a href=\"{}\">{}</a></h3>", p.url(), p.name())?;
        let c = format!("{} ({} colors{print})", p.name(), p.len());
        table_of_colors(&mut fh, &p.colors::<RGB8>(), 40, &c)?;
        interpolated(&mut fh, p, 500)?;
    }
    writeln!(fh, "</body>\n\
                  </html>")?;
    fh.flush()?;
    info!("wrote {OUTPUT}");
    Ok(())
}
