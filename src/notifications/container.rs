// SPDX-License-Identifier: MPL-2.0
//! One container node per screen position.

use std::collections::HashMap;

use super::styles::ClassNames;
use crate::document::{Document, NodeId};
use crate::domain::toast::Position;

/// Maps each [`Position`] to its container node.
///
/// Containers are created on first use and never destroyed. The cached node
/// is re-validated on every lookup so a host that wipes the body still gets
/// a fresh, attached container.
#[derive(Debug, Default)]
pub struct ContainerRegistry {
    containers: HashMap<Position, NodeId>,
}

impl ContainerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the container for `position`, creating it if needed.
    pub fn get_container<D: Document>(
        &mut self,
        document: &mut D,
        classes: &ClassNames,
        position: Position,
    ) -> NodeId {
        if let Some(&node) = self.containers.get(&position) {
            if document.is_connected(node) {
                return node;
            }
        }

        let node = Self::find_existing(document, classes, position)
            .unwrap_or_else(|| Self::create(document, classes, position));
        self.containers.insert(position, node);
        node
    }

    /// Returns the cached container without creating one.
    #[must_use]
    pub fn peek(&self, position: Position) -> Option<NodeId> {
        self.containers.get(&position).copied()
    }

    // A top lookup must not pick up the bottom container.
    fn find_existing<D: Document>(
        document: &D,
        classes: &ClassNames,
        position: Position,
    ) -> Option<NodeId> {
        document
            .find_by_class(document.body(), &classes.container)
            .into_iter()
            .find(|&node| document.has_class(node, &classes.container_bottom) == position.is_bottom())
    }

    fn create<D: Document>(document: &mut D, classes: &ClassNames, position: Position) -> NodeId {
        let node = document.create_element("div");
        document.add_class(node, &classes.container);
        if position.is_bottom() {
            document.add_class(node, &classes.container_bottom);
        }
        let body = document.body();
        document.append_child(body, node);
        node
    }
}
