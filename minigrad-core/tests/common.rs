use minigrad_core::{Graph, NodeId};

// Each test binary includes this module and uses a different subset of it.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates one leaf per value.
#[allow(dead_code)]
pub fn leaves(graph: &mut Graph, values: &[f64]) -> Vec<NodeId> {
    values.iter().map(|&v| graph.leaf(v)).collect()
}

/// Points on three concentric rings, labeled 1 above the line `x0 + x1 = 0`
/// and 0 below it. Points too close to the line are dropped.
#[allow(dead_code)]
pub fn separable_points(n: usize) -> Vec<([f64; 2], i64)> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64 * std::f64::consts::TAU;
            let r = 1.0 + (i % 3) as f64 * 0.25;
            let x = [r * t.cos(), r * t.sin()];
            let label = if x[0] + x[1] > 0.0 { 1 } else { 0 };
            (x, label)
        })
        .filter(|(x, _)| (x[0] + x[1]).abs() > 0.2)
        .collect()
}
