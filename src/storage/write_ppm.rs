use crate::core::data::resolution::Resolution;
use std::io::Write;
use std::path::Path;

/// Writes a packed RGB buffer as a binary PPM image.
pub fn write_ppm(
    resolution: Resolution,
    rgb_bytes: &[u8],
    filepath: impl AsRef<Path>,
) -> std::io::Result<()> {
    let mut file = std::fs::File::create(filepath)?;

    // PPM header: P6 means binary RGB, then width height max_colour
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", resolution.width(), resolution.height())?;
    writeln!(file, "255")?;
    file.write_all(rgb_bytes)?;

    Ok(())
}
