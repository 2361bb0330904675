use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::resolution::Resolution;
use crate::core::engine::generate::generate_field_rayon;
use crate::core::engine::kernel::JuliaKernel;
use crate::core::shade::greyscale::{GreyscaleShade, shade_field};
use crate::storage::write_ppm::write_ppm;
use std::path::Path;
use std::time::Instant;

/// Renders one Julia frame headlessly and writes it as a PPM file, running
/// the same engine path the interactive controller uses.
pub fn julia_snapshot(filepath: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
    let resolution = Resolution::new(800, 600)?;
    let region = ComplexRect::new(-2.0, 2.0, -2.0, 2.0)?;
    // A seed near the Mandelbrot boundary with plenty of filigree.
    let seed = Complex {
        real: -0.7,
        imag: 0.27,
    };
    let iteration_limit = 256;

    println!("Rendering Julia set...");
    println!(
        "Image size: {}x{}",
        resolution.width(),
        resolution.height()
    );
    println!("Seed: {} + {}i", seed.real, seed.imag);
    println!("Iteration limit: {}", iteration_limit);

    let kernel = JuliaKernel::new(resolution, region, seed, iteration_limit)?;

    let start = Instant::now();
    let field = generate_field_rayon(&kernel);
    let duration = start.elapsed();

    println!("Duration:   {:?}", duration);

    let shade = GreyscaleShade::new(iteration_limit);
    let rgb_bytes = shade_field(&field, &shade)?;

    if let Some(parent) = filepath.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    write_ppm(resolution, &rgb_bytes, &filepath)?;
    println!("Saved to {}", filepath.as_ref().display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_julia_snapshot_writes_a_complete_ppm() {
        let filepath = std::env::temp_dir().join("julia_explorer_snapshot_test.ppm");

        let result = julia_snapshot(&filepath);
        assert!(result.is_ok());

        let written = std::fs::read(&filepath).unwrap();
        let _ = std::fs::remove_file(&filepath);

        assert!(written.starts_with(b"P6\n800 600\n255\n"));
        assert_eq!(written.len(), b"P6\n800 600\n255\n".len() + 800 * 600 * 3);
    }
}
