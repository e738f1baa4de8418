//! Plain-text PPM (`P3`) export of the color raster.
//!
//! Layout, byte for byte:
//!
//! ```text
//! P3
//! <width> <height>
//! 255
//! R G B R G B ... (one "R G B " triple per pixel, then '\n', per row)
//! ```
//!
//! Alpha is dropped. Golden-image tests compare this output verbatim.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;

use super::Framebuffer;

impl Framebuffer {
    /// Writes the color raster as `P3` text.
    pub fn write_ppm<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "P3\n{} {}\n255\n", self.width, self.height)?;

        for row in self.rows() {
            for px in row.chunks_exact(4) {
                write!(out, "{} {} {} ", px[0], px[1], px[2])?;
            }
            out.write_all(b"\n")?;
        }
        Ok(())
    }

    pub fn to_ppm_string(&self) -> String {
        let mut out = Vec::with_capacity(16 + self.color.len() * 3);
        // Writing into a Vec cannot fail.
        let _ = self.write_ppm(&mut out);
        String::from_utf8_lossy(&out).into_owned()
    }

    /// Writes the `P3` text to `path`, replacing any existing file.
    pub fn save_ppm(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut out = BufWriter::new(File::create(path)?);
        self.write_ppm(&mut out)?;
        out.flush()?;
        log::debug!("wrote {}x{} ppm to {}", self.width, self.height, path.display());
        Ok(())
    }
}
