use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tessel_element::ElementType;

use crate::op::Op;
use crate::shape::Shape;

/// A shared handle to an immutable node.
///
/// A node is kept alive by every consumer holding its handle and by the graph owner, and is
/// dropped once no holder remains. The reference count is atomic so handles can cross threads.
pub type NodeRef = Arc<Node>;

static NEXT_NODE_ID: AtomicUsize = AtomicUsize::new(0);

/// A process-unique node identifier.
///
/// Ids are handed out in construction order, so a node's id is greater than the ids of all of
/// its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    fn next() -> Self {
        NodeId(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw id.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An immutable vertex of the dataflow graph.
///
/// A node holds its operator label, the ordered handles of its inputs and its resolved element
/// type and shape. All fields are fixed at construction. A node never references its consumers.
///
/// Nodes are created through the constructors in [`crate::op`], which validate their operands
/// first.
pub struct Node {
    id: NodeId,
    op: Op,
    inputs: Vec<NodeRef>,
    element_type: ElementType,
    shape: Shape,
}

impl Node {
    pub(crate) fn new(
        op: Op,
        inputs: Vec<NodeRef>,
        element_type: ElementType,
        shape: Shape,
    ) -> NodeRef {
        let node = Arc::new(Node {
            id: NodeId::next(),
            op,
            inputs,
            element_type,
            shape,
        });
        log::debug!(
            "created {}: {} {} from [{}]",
            node.name(),
            node.element_type.c_type_string(),
            node.shape,
            node.inputs
                .iter()
                .map(|input| input.name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        node
    }

    /// The unique id of this node.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The operator that produced this node.
    #[inline]
    pub fn op(&self) -> &Op {
        &self.op
    }

    /// The ordered inputs of this node.
    #[inline]
    pub fn inputs(&self) -> &[NodeRef] {
        &self.inputs
    }

    /// The `index`-th input, if present.
    pub fn input(&self, index: usize) -> Option<&NodeRef> {
        self.inputs.get(index)
    }

    /// The resolved output element type.
    #[inline]
    pub fn element_type(&self) -> &ElementType {
        &self.element_type
    }

    /// The resolved output shape.
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The operator label, e.g. `"Minimum"`.
    pub fn description(&self) -> &'static str {
        self.op.name()
    }

    /// A unique name of the form `<description>_<id>`, e.g. `"Minimum_17"`.
    pub fn name(&self) -> String {
        format!("{}_{}", self.description(), self.id)
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        // unlink inputs iteratively so releasing a long chain does not recurse once per level
        let mut pending = std::mem::take(&mut self.inputs);
        while let Some(input) = pending.pop() {
            if let Some(mut node) = Arc::into_inner(input) {
                pending.append(&mut node.inputs);
            }
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("op", &self.op)
            .field(
                "inputs",
                &self.inputs.iter().map(|n| n.id).collect::<Vec<_>>(),
            )
            .field("element_type", &self.element_type)
            .field("shape", &self.shape)
            .finish()
    }
}
