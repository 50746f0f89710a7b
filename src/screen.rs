use std::fs::File;
use std::io::{Write, BufWriter};
use std::path::Path;
use anyhow::{Context, Result};
use image::{Rgb, RgbImage};

/// Maximum channel value declared in the pixel-map header.
pub const PPM_MAX_VALUE: u16 = 255;

/// Row-major RGB raster. Channels are u16 so that an uncapped 256 survives
/// until serialization.
pub struct ScreenSpace {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u16>,
}

impl ScreenSpace {
    pub fn new(width: u32, height: u32) -> Self {
        let size_calc = (width as usize) * (height as usize);
        Self {
            width,
            height,
            rgb: vec![0; size_calc * 3],
        }
    }
    pub fn row_len(&self) -> usize {
        self.width as usize * 3
    }
    pub fn set_pixel(&mut self, x: u32, y: u32, red: u16, green: u16, blue: u16) {
        if x >= self.width || y >= self.height { return; }
        let i = ((y as usize) * (self.width as usize) + x as usize) * 3;
        self.rgb[i] = red;
        self.rgb[i + 1] = green;
        self.rgb[i + 2] = blue;
    }
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<(u16, u16, u16)> {
        if x >= self.width || y >= self.height { return None }
        let i = ((y as usize) * (self.width as usize) + x as usize) * 3;
        Some((self.rgb[i], self.rgb[i + 1], self.rgb[i + 2]))
    }
    /// Serialize as a plain (P3) pixel-map: header, then one line per row.
    pub fn write_ppm<W: Write>(&self, out: W) -> std::io::Result<()> {
        let mut out = BufWriter::new(out);
        writeln!(out, "P3")?;
        writeln!(out, "{} {}", self.width, self.height)?;
        writeln!(out, "{}", PPM_MAX_VALUE)?;
        if self.width > 0 {
            for row in self.rgb.chunks(self.row_len()) {
                let mut first = true;
                for channel in row {
                    if !first {
                        out.write_all(b" ")?;
                    }
                    write!(out, "{}", channel)?;
                    first = false;
                }
                out.write_all(b"\n")?;
            }
        }
        out.flush()
    }
    pub fn save_ppm(&self, path: &Path) -> Result<()> {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        self.write_ppm(file).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
    /// Write an 8-bit PNG preview; out-of-range channels saturate at 255.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        let img = RgbImage::from_fn(self.width, self.height, |x, y| {
            let (r, g, b) = self.get_pixel(x, y).unwrap_or((0, 0, 0));
            let sat = |c: u16| c.min(255) as u8;
            Rgb([sat(r), sat(g), sat(b)])
        });
        img.save(path).with_context(|| format!("saving {}", path.display()))?;
        Ok(())
    }
}
