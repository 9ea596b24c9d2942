use super::*;

#[test]
fn test_mul_forward_and_backward() -> Result<(), MinigradError> {
    for &(x, y) in &[(2.0, -3.0), (0.0, 5.0), (-1.5, -1.5), (1e-3, 1e3)] {
        let mut graph = Graph::new();
        let a = graph.leaf(x);
        let b = graph.leaf(y);
        let c = mul_op(&mut graph, a, b)?;
        assert_eq!(graph.value(c)?, x * y);

        graph.backward(c)?;
        assert_eq!(graph.grad(a)?, y);
        assert_eq!(graph.grad(b)?, x);
    }
    Ok(())
}

#[test]
fn test_mul_square_sums_both_contributions() -> Result<(), MinigradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(-4.0);
    let sq = graph.mul(a, a)?;
    graph.backward(sq)?;
    assert_eq!(graph.value(sq)?, 16.0);
    assert_eq!(graph.grad(a)?, -8.0);
    Ok(())
}

#[test]
fn test_mul_scales_upstream_gradient() -> Result<(), MinigradError> {
    // out = (a * b) * c: the gradient reaching `a` is b * c.
    let mut graph = Graph::new();
    let a = graph.leaf(2.0);
    let b = graph.leaf(3.0);
    let c = graph.leaf(4.0);
    let ab = graph.mul(a, b)?;
    let out = graph.mul(ab, c)?;
    graph.backward(out)?;
    assert_eq!(graph.grad(ab)?, 4.0);
    assert_eq!(graph.grad(a)?, 12.0);
    assert_eq!(graph.grad(b)?, 8.0);
    assert_eq!(graph.grad(c)?, 6.0);
    Ok(())
}
