//! # minigrad-core
//!
//! A scalar reverse-mode automatic differentiation engine.
//!
//! Every scalar lives as a [`Node`] in a [`Graph`] arena and is addressed by a
//! [`NodeId`]. Operations (see [`ops`]) evaluate eagerly and record the node
//! they produce; [`Graph::backward`] then fills in `d root / d node` for every
//! node reachable from a scalar root.
//!
//! ```
//! use minigrad_core::Graph;
//!
//! let mut graph = Graph::new();
//! let a = graph.leaf(2.0);
//! let b = graph.leaf(-3.0);
//! let ab = graph.mul(a, b)?;
//! let out = graph.tanh(ab)?;
//! graph.backward(out)?;
//! assert!(graph.grad(a)? < 0.0);
//! # Ok::<(), minigrad_core::MinigradError>(())
//! ```
//!
//! On top of the engine, [`nn`] provides neurons, layers and MLPs with margin
//! losses, and [`optim`] provides SGD and learning-rate schedules.

pub mod autograd;
pub mod error;
pub mod graph;
pub mod nn;
pub mod node;
pub mod ops;
pub mod optim;
pub mod utils;

pub use autograd::OpKind;
pub use error::MinigradError;
pub use graph::{Checkpoint, Graph};
pub use node::{Node, NodeId};
