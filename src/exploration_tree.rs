/// Index of a node inside an [ExplorationTree].  Only the tree that minted an id can resolve it.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct NodeId(usize);

#[derive(Debug)]
pub struct ExplorationNode<T> {
  data: T,
  parent: Option<NodeId>,
  children: Vec<NodeId>,
}

impl<T> ExplorationNode<T> {
  pub fn data(&self) -> &T {
    &self.data
  }

  pub fn parent(&self) -> Option<NodeId> {
    self.parent
  }

  pub fn children(&self) -> &[NodeId] {
    &self.children
  }
}

/// General (not binary) tree stored as an arena.  Children are owned through their ids; the
/// parent link is only used to walk back to the root.  Nodes are never removed.
#[derive(Debug)]
pub struct ExplorationTree<T> {
  nodes: Vec<ExplorationNode<T>>,
}

impl<T> ExplorationTree<T> {
  pub fn new(root_data: T) -> Self {
    Self { nodes: vec![ExplorationNode { data: root_data, parent: None, children: vec![] }] }
  }

  pub fn root(&self) -> NodeId {
    NodeId(0)
  }

  pub fn add_child(&mut self, parent: NodeId, child_data: T) -> NodeId {
    let child = NodeId(self.nodes.len());
    self.nodes.push(ExplorationNode { data: child_data, parent: Some(parent), children: vec![] });
    self.nodes[parent.0].children.push(child);
    child
  }

  pub fn lookup(&self, id: NodeId) -> &ExplorationNode<T> {
    &self.nodes[id.0]
  }

  pub fn data(&self, id: NodeId) -> &T {
    &self.lookup(id).data
  }

  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  pub fn depth(&self, id: NodeId) -> usize {
    self.ancestors(id).count() - 1
  }

  /// Walks from `id` up to and including the root.
  pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
    std::iter::successors(Some(id), move |current| self.lookup(*current).parent)
  }

  pub fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
    self.nodes.iter()
        .enumerate()
        .filter(|(_, node)| node.children.is_empty())
        .map(|(index, _)| NodeId(index))
  }
}

impl<T: Clone> ExplorationTree<T> {
  /// Data along the path from the root down to `id`.
  pub fn path_to(&self, id: NodeId) -> Vec<T> {
    let mut path: Vec<T> = self.ancestors(id).map(|n| self.data(n).clone()).collect();
    path.reverse();
    return path;
  }
}
