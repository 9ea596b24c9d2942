use super::*;
use approx::assert_relative_eq;

#[test]
fn test_tanh_matches_std() -> Result<(), MinigradError> {
    for &x in &[-3.0, -0.5, 0.0, 0.25, 1.0, 4.0] {
        let mut graph = Graph::new();
        let a = graph.leaf(x);
        let t = tanh_op(&mut graph, a)?;
        assert_relative_eq!(graph.value(t)?, f64::tanh(x), epsilon = 1e-12);

        graph.backward(t)?;
        let th = f64::tanh(x);
        assert_relative_eq!(graph.grad(a)?, 1.0 - th * th, epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn test_tanh_zero_has_unit_slope() -> Result<(), MinigradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(0.0);
    let t = graph.tanh(a)?;
    graph.backward(t)?;
    assert_eq!(graph.value(t)?, 0.0);
    assert_eq!(graph.grad(a)?, 1.0);
    Ok(())
}

#[test]
fn test_tanh_saturates() -> Result<(), MinigradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(20.0);
    let t = graph.tanh(a)?;
    graph.backward(t)?;
    assert_relative_eq!(graph.value(t)?, 1.0, epsilon = 1e-12);
    assert!(graph.grad(a)?.abs() < 1e-12);
    Ok(())
}

#[test]
fn test_tanh_overflow_yields_nan() -> Result<(), MinigradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(1000.0);
    let t = graph.tanh(a)?;
    assert!(graph.value(t)?.is_nan());
    Ok(())
}
