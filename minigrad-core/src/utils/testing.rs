//! Assertion helpers shared by unit and integration tests.

use crate::graph::Graph;
use crate::node::NodeId;

/// Checks that the values of `ids` are within `tolerance` of `expected`.
/// Panics with the offending index otherwise.
pub fn check_values_near(graph: &Graph, ids: &[NodeId], expected: &[f64], tolerance: f64) {
    let actual = graph
        .values(ids)
        .expect("check_values_near: node not held by the graph");
    check_near("value", &actual, expected, tolerance);
}

/// Checks that the gradients of `ids` are within `tolerance` of `expected`.
pub fn check_grads_near(graph: &Graph, ids: &[NodeId], expected: &[f64], tolerance: f64) {
    let actual = graph
        .grads(ids)
        .expect("check_grads_near: node not held by the graph");
    check_near("grad", &actual, expected, tolerance);
}

fn check_near(what: &str, actual: &[f64], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "{} length mismatch", what);
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        let diff = (a - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "{} mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                what, i, a, e, diff, tolerance
            );
        }
    }
}
