// ============================================================================
// Basic Usage Example
// ============================================================================

use quadratic_equation::prelude::*;
use std::collections::HashMap;

fn describe(eq: &QuadraticEquation) {
    println!("{}", eq);
    match eq.solve() {
        Ok(roots) if roots.is_empty() => println!("  no real roots"),
        Ok(roots) => {
            let values: Vec<String> = roots.iter().copied().map(format_decimal).collect();
            println!("  {} = {}", eq.variable(), values.join(", "));
        },
        Err(e) => println!("  could not solve: {}", e),
    }
}

fn main() -> Result<(), EquationError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Quadratic Equation Example ===\n");

    describe(&QuadraticEquation::new([1, -4, -5], "x")?);
    describe(&QuadraticEquation::new([1, -2, 1], "x")?);
    describe(&QuadraticEquation::new([2, -1, 1], "x")?);
    describe(&QuadraticEquation::new([2.0, 23.0, 5.8], "z")?);
    describe(&QuadraticEquation::with_answer([1, 0, 0], 4, "t")?);

    let coefficients = HashMap::from([("a", "2.5"), ("b", "2"), ("c", "5")]);
    describe(&QuadraticEquation::from_map(&coefficients, "x")?);

    println!("\nRejected inputs:");
    for result in [
        QuadraticEquation::new([0.0, -3.1, 4.9], "x"),
        QuadraticEquation::parse_coefficients(["1", "two", "3"], "x"),
        QuadraticEquation::from_slice(&[1, 2], "x"),
    ] {
        if let Err(e) = result {
            println!("  {}", e);
        }
    }

    Ok(())
}
