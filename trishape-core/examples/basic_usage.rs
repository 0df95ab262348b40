//! Basic usage of the triangle classifier

use trishape_core::{classify, EdgeValue, ErrorKind, Triangle};

fn main() -> Result<(), ErrorKind> {
    // Three positional edges
    let triangle = Triangle::from_triple(3, 4, 5)?;
    println!("(3, 4, 5) is {}", triangle.classify()?);

    // One ordered sequence
    let triangle = Triangle::from_sequence([9999.0, 9999.0, 0.0001])?;
    println!("(9999, 9999, 0.0001) is {}", triangle.classify()?);

    // Construct and classify in one step
    println!("(2, 2, 2) is {}", classify(2, 2, 2)?);

    // Failures carry the stage that rejected the input
    let inputs: Vec<Vec<EdgeValue>> = vec![
        vec![EdgeValue::Number(1.0), EdgeValue::Number(2.0)],
        vec!["1".into(), "2".into(), EdgeValue::Number(3.0)],
        vec![EdgeValue::Number(1.0), EdgeValue::Number(-2.0), EdgeValue::Number(3.0)],
        vec![EdgeValue::from(vec![1.0, f64::INFINITY, 3.0])],
    ];

    for args in inputs {
        let label = EdgeValue::Sequence(args.clone());
        match Triangle::from_arguments(args).and_then(|t| t.classify()) {
            Ok(triangle_type) => println!("{label} is {triangle_type}"),
            Err(e) => println!("{label} rejected at {}: {e}", e.stage()),
        }
    }

    Ok(())
}
