fn main() -> Result<(), Box<dyn std::error::Error>> {
    julia_explorer::julia_snapshot("output/julia.ppm")?;

    Ok(())
}
