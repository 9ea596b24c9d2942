use super::*;
use approx::assert_relative_eq;

#[test]
fn test_pow_forward_and_backward() -> Result<(), MinigradError> {
    for &(x, k) in &[(2.0, 3.0), (4.0, 0.5), (-3.0, 2.0), (1.5, -1.0), (5.0, 1.0)] {
        let mut graph = Graph::new();
        let a = graph.leaf(x);
        let p = pow_op(&mut graph, a, k)?;
        assert_relative_eq!(graph.value(p)?, f64::powf(x, k), epsilon = 1e-12);
        assert_eq!(graph.node(p)?.op(), OpKind::Pow(k));

        graph.backward(p)?;
        assert_relative_eq!(graph.grad(a)?, k * f64::powf(x, k - 1.0), epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn test_pow_zero_exponent() -> Result<(), MinigradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(7.0);
    let p = graph.pow(a, 0.0)?;
    graph.backward(p)?;
    assert_eq!(graph.value(p)?, 1.0);
    assert_eq!(graph.grad(a)?, 0.0);
    Ok(())
}

#[test]
fn test_pow_negative_base_fractional_exponent_is_nan() -> Result<(), MinigradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(-4.0);
    let p = graph.pow(a, 0.5)?;
    assert!(graph.value(p)?.is_nan());

    graph.backward(p)?;
    assert!(graph.grad(a)?.is_nan());
    Ok(())
}

#[test]
fn test_pow_of_zero_with_negative_exponent_is_infinite() -> Result<(), MinigradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(0.0);
    let p = graph.pow(a, -1.0)?;
    assert_eq!(graph.value(p)?, f64::INFINITY);
    Ok(())
}
