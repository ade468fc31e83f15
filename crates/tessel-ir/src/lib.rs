#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `tessel-ir` builds immutable, fully typed dataflow graphs bottom-up. Each [`Node`] is created
//! once from nodes that already exist, with its element type and shape resolved at construction
//! time. Since inputs can never be rebound afterwards, the graph is acyclic by construction.
//!
//! # Architecture
//!
//! - **Shape**: tensor dimensions and the trailing-aligned broadcasting rule
//! - **Node**: an immutable vertex shared through [`NodeRef`] (`Arc<Node>`)
//! - **op**: leaf parameters and the binary elementwise arithmetic contract
//! - **Graph**: owner of result and parameter nodes with topological traversal
//!
//! # Quick Start
//!
//! ```rust
//! use tessel_element::{F32, I32};
//! use tessel_ir::{op, GraphError, Shape};
//!
//! let a = op::parameter(F32.clone(), [4, 4]);
//! let b = op::parameter(F32.clone(), [1, 4]);
//!
//! let min = op::minimum(&a, &b).unwrap();
//! assert_eq!(min.element_type(), &F32);
//! assert_eq!(min.shape(), &Shape::new([4, 4]));
//!
//! let c = op::parameter(I32.clone(), [4, 4]);
//! assert!(matches!(op::minimum(&a, &c), Err(GraphError::TypeMismatch { .. })));
//! ```

/// Configuration of the binary elementwise contract.
pub mod config;

/// Error types for graph construction.
pub mod error;

/// Graph owner and traversal.
///
/// Provides [`Graph`] which holds result and parameter nodes and orders the reachable nodes.
pub mod graph;

/// The immutable graph vertex.
///
/// Provides [`Node`], [`NodeRef`] and [`NodeId`].
pub mod node;

/// Operators that produce nodes.
///
/// Leaf parameters, the shared binary elementwise validation rule and the concrete arithmetic
/// operators built on it.
pub mod op;

/// Tensor shapes and broadcasting.
pub mod shape;

pub use crate::config::AutoBroadcast;
pub use crate::error::GraphError;
pub use crate::graph::{topological_order, Graph};
pub use crate::node::{Node, NodeId, NodeRef};
pub use crate::op::{ArithmeticOp, Op};
pub use crate::shape::Shape;
