//! # Chain Index
//!
//! In-memory forest of headers rooted at a fixed genesis anchor.
//!
//! Nodes live in an append-only arena and refer to each other through
//! `NodeId` handles. The head is the tallest node seen; among equal heights
//! the first one to arrive keeps the title.

use std::collections::HashMap;
use std::iter;

use tracing::{debug, trace};

use super::entities::{BlockHeader, HeaderNode};
use super::errors::ChainError;
use super::value_objects::{BlockHash, ChainTip, HeaderStatus, NodeId};
use crate::algorithms::build_locator;

/// Header tree with best-tip tracking.
#[derive(Clone, Debug)]
pub struct ChainIndex {
    /// Arena; a node's `NodeId` is its slot.
    nodes: Vec<HeaderNode>,
    /// Identity hash to arena slot.
    by_hash: HashMap<BlockHash, NodeId>,
    /// Height-0 anchor.
    genesis: NodeId,
    /// Tallest node, first seen wins.
    head: NodeId,
}

impl ChainIndex {
    /// Index holding only a genesis anchor identified by `genesis`.
    pub fn new(genesis: BlockHash) -> Self {
        Self::with_anchor(genesis, None)
    }

    /// Index anchored at `header`, keeping the header itself.
    pub fn from_genesis_header(header: BlockHeader) -> Self {
        Self::with_anchor(header.block_hash(), Some(header))
    }

    fn with_anchor(hash: BlockHash, header: Option<BlockHeader>) -> Self {
        let id = NodeId(0);
        let node = HeaderNode {
            id,
            hash,
            header,
            parent: None,
            children: Vec::new(),
            height: 0,
        };
        let mut by_hash = HashMap::new();
        by_hash.insert(hash, id);

        Self {
            nodes: vec![node],
            by_hash,
            genesis: id,
            head: id,
        }
    }

    /// Insert a header under its parent.
    ///
    /// Returns the stored node and whether it was new. An already indexed
    /// header is returned unchanged. A header whose parent is not indexed
    /// is rejected and leaves the index untouched.
    pub fn connect_header(
        &mut self,
        header: BlockHeader,
    ) -> Result<(&HeaderNode, HeaderStatus), ChainError> {
        let hash = header.block_hash();

        if let Some(&existing) = self.by_hash.get(&hash) {
            trace!(%hash, "header already indexed");
            return Ok((self.at(existing), HeaderStatus::Duplicate));
        }

        let parent_id = match self.by_hash.get(&header.prev_block) {
            Some(&id) => id,
            None => {
                return Err(ChainError::UnknownParent {
                    hash,
                    prev_block: header.prev_block,
                })
            }
        };

        let height = self.at(parent_id).height + 1;
        let id = NodeId(self.nodes.len());
        self.nodes.push(HeaderNode {
            id,
            hash,
            header: Some(header),
            parent: Some(parent_id),
            children: Vec::new(),
            height,
        });
        self.by_hash.insert(hash, id);
        self.nodes[parent_id.0].children.push(id);

        if height > self.at(self.head).height {
            self.head = id;
            debug!(%hash, height, "new chain head");
        } else {
            debug!(%hash, height, "header connected off the best chain");
        }

        Ok((self.at(id), HeaderStatus::Connected))
    }

    /// Insert a header; see [`ChainIndex::connect_header`].
    pub fn add_header(&mut self, header: BlockHeader) -> Result<&HeaderNode, ChainError> {
        self.connect_header(header).map(|(node, _)| node)
    }

    /// Nodes from head back to genesis, head first.
    pub fn longest_path(&self) -> Vec<&HeaderNode> {
        self.ancestors(self.head).collect()
    }

    /// Block locator for the current head.
    ///
    /// The ten most recent hashes, then hashes at exponentially growing
    /// distances, ending at genesis once the chain is long enough to reach it.
    pub fn create_locator(&self) -> Vec<BlockHash> {
        let path: Vec<BlockHash> = self.ancestors(self.head).map(HeaderNode::hash).collect();
        build_locator(&path)
    }

    /// First locator entry that lies on our best chain.
    ///
    /// This is where a peer serving `getheaders` would resume from.
    pub fn find_common_ancestor(&self, locator: &[BlockHash]) -> Option<&HeaderNode> {
        locator
            .iter()
            .filter_map(|hash| self.get(hash))
            .find(|node| self.is_on_best_chain(node))
    }

    /// Whether `node` is an ancestor of (or equal to) the head.
    pub fn is_on_best_chain(&self, node: &HeaderNode) -> bool {
        self.ancestors(self.head)
            .find(|n| n.height <= node.height)
            .map_or(false, |n| n.id == node.id)
    }

    /// Look up a node by identity hash.
    pub fn get(&self, hash: &BlockHash) -> Option<&HeaderNode> {
        self.by_hash.get(hash).map(|&id| self.at(id))
    }

    /// True if `hash` is indexed.
    pub fn contains(&self, hash: &BlockHash) -> bool {
        self.by_hash.contains_key(hash)
    }

    /// Resolve a handle.
    pub fn node(&self, id: NodeId) -> Option<&HeaderNode> {
        self.nodes.get(id.0)
    }

    /// Parent of `node`, `None` for genesis.
    pub fn parent(&self, node: &HeaderNode) -> Option<&HeaderNode> {
        node.parent.and_then(|id| self.node(id))
    }

    /// Children of `node` in insertion order.
    pub fn children<'a>(&'a self, node: &'a HeaderNode) -> impl Iterator<Item = &'a HeaderNode> {
        node.children.iter().filter_map(move |&id| self.node(id))
    }

    /// Tallest node.
    pub fn head(&self) -> &HeaderNode {
        self.at(self.head)
    }

    /// Genesis anchor.
    pub fn genesis(&self) -> &HeaderNode {
        self.at(self.genesis)
    }

    /// Height of the head.
    pub fn height(&self) -> u64 {
        self.head().height
    }

    /// Number of indexed nodes, genesis included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; genesis is never removed.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Head hash and height.
    pub fn tip(&self) -> ChainTip {
        let head = self.head();
        ChainTip::new(head.hash, head.height)
    }

    /// Nodes without children: the head plus every stale fork tip.
    pub fn leaves(&self) -> impl Iterator<Item = &HeaderNode> + '_ {
        self.nodes.iter().filter(|n| n.children.is_empty())
    }

    fn at(&self, id: NodeId) -> &HeaderNode {
        &self.nodes[id.0]
    }

    fn ancestors(&self, from: NodeId) -> impl Iterator<Item = &HeaderNode> + '_ {
        iter::successors(Some(self.at(from)), move |n| self.parent(n))
    }
}
