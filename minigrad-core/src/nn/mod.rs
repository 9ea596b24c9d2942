//! Neural-network building blocks on top of the scalar engine.
//!
//! Parameters are ordinary leaf nodes living in the caller's [`Graph`](crate::Graph).
//! Modules only remember the [`NodeId`](crate::NodeId)s of their parameters, so
//! the same model can be evaluated any number of times on one graph, with
//! per-example nodes discarded through [`Graph::rewind`](crate::Graph::rewind).

pub mod activation;
pub mod init;
pub mod layers;
pub mod losses;
pub mod module;

pub use activation::Activation;
pub use layers::{Layer, Mlp, Neuron};
pub use losses::{hinge_loss, l2_penalty, signed_label, LossOutput, MarginLoss, Reduction};
pub use module::Module;
