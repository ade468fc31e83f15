use std::collections::HashSet;
use std::sync::Arc;

use crate::error::GraphError;
use crate::node::{Node, NodeId, NodeRef};

/// The owner of a built graph: its result nodes and the parameters they depend on.
///
/// Holding a `Graph` keeps every reachable node alive. Consumer lists are not stored on nodes;
/// [`Graph::consumers`] derives them from a traversal.
///
/// # Example
///
/// ```rust
/// use tessel_element::F32;
/// use tessel_ir::{op, Graph};
///
/// let a = op::parameter(F32.clone(), [4]);
/// let b = op::parameter(F32.clone(), [4]);
/// let sum = op::add(&a, &b).unwrap();
/// let min = op::minimum(&sum, &b).unwrap();
///
/// let graph = Graph::new(vec![min], vec![a, b]).unwrap();
/// let names: Vec<_> = graph.ordered_nodes().iter().map(|n| n.description()).collect();
/// assert_eq!(names, ["Parameter", "Parameter", "Add", "Minimum"]);
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    results: Vec<NodeRef>,
    parameters: Vec<NodeRef>,
}

impl Graph {
    /// Creates a new graph.
    ///
    /// # Arguments
    ///
    /// * `results` - The nodes the graph produces.
    /// * `parameters` - The graph inputs, in calling order.
    ///
    /// # Errors
    ///
    /// * [`GraphError::NotAParameter`] if an entry of `parameters` is not a parameter node.
    /// * [`GraphError::UnlistedParameter`] if a parameter reachable from `results` is missing
    ///   from `parameters`.
    pub fn new(results: Vec<NodeRef>, parameters: Vec<NodeRef>) -> Result<Self, GraphError> {
        if let Some(node) = parameters.iter().find(|p| !p.op().is_parameter()) {
            return Err(GraphError::NotAParameter(node.name()));
        }

        let listed: HashSet<NodeId> = parameters.iter().map(|p| p.id()).collect();
        if let Some(node) = topological_order(&results)
            .into_iter()
            .find(|n| n.op().is_parameter() && !listed.contains(&n.id()))
        {
            return Err(GraphError::UnlistedParameter(node.name()));
        }

        Ok(Self {
            results,
            parameters,
        })
    }

    /// The result nodes.
    pub fn results(&self) -> &[NodeRef] {
        &self.results
    }

    /// The parameter nodes.
    pub fn parameters(&self) -> &[NodeRef] {
        &self.parameters
    }

    /// Returns every node reachable from the results, inputs before consumers.
    pub fn ordered_nodes(&self) -> Vec<NodeRef> {
        topological_order(&self.results)
    }

    /// Returns the reachable nodes that take `node` as an input, in topological order.
    pub fn consumers(&self, node: &Node) -> Vec<NodeRef> {
        self.ordered_nodes()
            .into_iter()
            .filter(|n| n.inputs().iter().any(|input| input.id() == node.id()))
            .collect()
    }
}

/// Orders the nodes reachable from `roots` so that every node comes after all of its inputs.
///
/// Each node appears once even if it is shared by several consumers. Inputs are visited in
/// operand order, so the result is deterministic.
pub fn topological_order(roots: &[NodeRef]) -> Vec<NodeRef> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut order = Vec::new();
    let mut stack: Vec<(NodeRef, bool)> = roots.iter().rev().map(|n| (n.clone(), false)).collect();

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            order.push(node);
            continue;
        }
        if !visited.insert(node.id()) {
            continue;
        }
        log::trace!("visiting {}", node.name());
        stack.push((Arc::clone(&node), true));
        for input in node.inputs().iter().rev() {
            if !visited.contains(&input.id()) {
                stack.push((Arc::clone(input), false));
            }
        }
    }

    order
}
