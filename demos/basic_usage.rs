// ============================================================================
// Basic Usage Example
// ============================================================================

use sigfig::prelude::*;

fn main() -> SigFigResult<()> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    println!("=== SigFig Example ===\n");

    // Literals state their own precision
    println!("Parsed literals:");
    for literal in ["13.32", "0.00230", "1200", "1200.", "1.20e3"] {
        let quantity = SigFig::parse(literal)?;
        println!("  {:>8} -> {:?}", literal, quantity);
    }

    // Products keep the fewest figures
    println!("\n=== Multiplication and Division ===");
    let length = SigFig::parse("8.03")?;
    let width = SigFig::parse("3.2")?;
    println!("  {} * {} = {}", length, width, length * width);
    println!("  {} / {} = {}", length, length, length / length);

    // Sums keep the fewest decimal places
    println!("\n=== Addition and Subtraction ===");
    let a = SigFig::parse("8.08")?;
    let b = SigFig::parse("2.1")?;
    println!("  {} + {} = {}", a, b, a + b);
    println!("  {} - {} = {}", a, b, a - b);

    // Plain numbers are exact
    println!("\n=== Exact Constants ===");
    let moles = SigFig::parse("14.52")?;
    println!("  {} * 8.314 = {}", moles, moles * 8.314);
    println!("  2 * {} = {}", a, 2 * a);

    // Chained calculations round only at display time
    println!("\n=== Chained Calculation ===");
    let radius = SigFig::parse("6.23")?;
    let height = SigFig::parse("4.630")?;
    let pi = SigFig::new(std::f64::consts::PI, 8)?;
    let volume = radius.powi(2) * pi * height;
    println!("  pi * r^2 * h = {} (stored {})", volume, volume.value());

    // Aggregates and functions
    println!("\n=== Functions ===");
    let samples = [a, SigFig::parse("8.0")?, SigFig::parse("8.1053")?];
    println!("  mean = {}", mean(&samples)?);
    println!("  sqrt(4.00) = {}", SigFig::parse("4.00")?.sqrt()?);
    println!("  log10(10.00) = {}", SigFig::parse("10.00")?.log10()?);

    // Alternate layouts
    println!("\n=== Formatting ===");
    let large = SigFig::new(1234.5, 3)?;
    println!("  auto:       {}", large);
    println!("  fixed:      {}", large.render(&FormatConfig::fixed())?);
    println!("  scientific: {}", large.render(&FormatConfig::scientific())?);
    println!("  python:     {}", large.render(&FormatConfig::python_style())?);

    // Domain errors are reported, not panicked on
    println!("\n=== Errors ===");
    if let Err(err) = SigFig::parse("-4.0")?.sqrt() {
        println!("  sqrt(-4.0): {}", err);
    }
    if let Err(err) = SigFig::parse("1.2.3") {
        println!("  parse(\"1.2.3\"): {}", err);
    }

    Ok(())
}
