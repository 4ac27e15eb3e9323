use std::sync::{Arc, RwLock, RwLockWriteGuard};

use tracing::info;
use url::Url;

use crate::error::Error;

/// One selected RPC endpoint. Handles stay valid for in-flight requests after
/// the pool has rotated away from them.
#[derive(Debug, PartialEq, Eq)]
pub struct Node {
    pub index: usize,
    pub url: Url,
}

/// Round-robin selection over a fixed endpoint list.
#[derive(Debug)]
pub struct NodePool {
    nodes: Vec<Url>,
    current: RwLock<Option<Arc<Node>>>,
}

impl NodePool {
    pub fn new(nodes: &[String]) -> Result<NodePool, Error> {
        if nodes.is_empty() {
            return Err(Error::EmptyNodeList());
        }

        let nodes = nodes
            .iter()
            .map(|node| Url::parse(node))
            .collect::<Result<Vec<Url>, _>>()?;

        Ok(NodePool {
            nodes,
            current: RwLock::new(None),
        })
    }

    /// Returns the active node, selecting the first one on first use.
    pub fn current(&self) -> Arc<Node> {
        let current = match self.current.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };

        match current {
            Some(node) => node,
            None => self.rotate(),
        }
    }

    /// Moves to the next endpoint and makes it the active node.
    pub fn rotate(&self) -> Arc<Node> {
        let mut guard = self.write();
        self.advance(&mut guard)
    }

    /// Moves past `failed` only while it is still the active node. Callers
    /// that failed on a node another caller already rotated away from get the
    /// current node back instead of skipping a healthy one.
    pub fn rotate_from(&self, failed: &Node) -> Arc<Node> {
        let mut guard = self.write();

        match guard.as_ref() {
            Some(node) if node.index != failed.index => node.clone(),
            _ => self.advance(&mut guard),
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<Arc<Node>>> {
        match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn advance(&self, current: &mut Option<Arc<Node>>) -> Arc<Node> {
        let index = match current.as_ref() {
            Some(node) => (node.index + 1) % self.nodes.len(),
            None => 0,
        };

        let node = Arc::new(Node {
            index,
            url: self.nodes[index].clone(),
        });

        info!("Switching to Hive node: {}", node.url);
        *current = Some(node.clone());

        node
    }
}
