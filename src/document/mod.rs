// SPDX-License-Identifier: MPL-2.0
//! Host document boundary.
//!
//! The toast core never talks to a concrete UI layer. Everything it needs
//! from the host (a body to hang containers on, element creation, class
//! lists, text and title attributes, detachment, and class lookup) goes
//! through the [`Document`] trait.
//!
//! [`MemoryDocument`] is a small arena-backed implementation used for
//! headless rendering and for every test in this crate.

mod memory;

pub use memory::MemoryDocument;

/// Opaque handle to a node owned by a [`Document`].
///
/// The generation distinguishes a released node from a later node that
/// reuses its slot, so a stale id never aliases a live one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl NodeId {
    /// Only document implementations should mint ids.
    #[must_use]
    pub fn new(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub fn generation(self) -> u32 {
        self.generation
    }
}

/// The subset of a DOM the toast library reads and writes.
pub trait Document {
    /// Root node that containers are appended to.
    fn body(&self) -> NodeId;

    /// Creates a detached element with the given tag name.
    fn create_element(&mut self, tag: &str) -> NodeId;

    /// Appends `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    fn append_child(&mut self, parent: NodeId, child: NodeId);

    /// Detaches `node` (and its subtree) from its parent. No-op if the node
    /// is already detached.
    fn remove(&mut self, node: NodeId);

    /// Adds a class to the node's class list. Duplicates are ignored.
    fn add_class(&mut self, node: NodeId, class: &str);

    fn has_class(&self, node: NodeId, class: &str) -> bool;

    fn set_text(&mut self, node: NodeId, text: &str);

    fn set_title(&mut self, node: NodeId, title: &str);

    /// Detaches `node` and frees it together with its subtree. Ids of freed
    /// nodes read as absent afterwards. The body is never released.
    fn release(&mut self, node: NodeId);

    /// Returns whether the node is reachable from [`Document::body`].
    fn is_connected(&self, node: NodeId) -> bool;

    /// Returns every descendant of `root` carrying `class`, in document
    /// order. `root` itself is not included.
    fn find_by_class(&self, root: NodeId, class: &str) -> Vec<NodeId>;
}
