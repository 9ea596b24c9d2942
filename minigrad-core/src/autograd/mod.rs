//! Reverse-mode machinery: the per-operation gradient rules, the topological
//! sorter driving the backward pass, and a finite-difference gradient checker.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::OpKind;
pub use grad_check::{check_grad, GradCheckError};
pub use graph::topological_sort;
