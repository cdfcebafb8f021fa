// SPDX-License-Identifier: MPL-2.0
//! Named vertical containers holding notifications, newest on top.

use crate::config::STACK_CLASS_PREFIX;
use crate::dom::{ElementSpec, NodeId, RenderTarget};
use crate::domain::notification::StackName;

/// A named container element appended to the document body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    name: StackName,
    container: NodeId,
}

impl Stack {
    /// Creates the container (classed `notification-stack-<name>`) and
    /// appends it to the body.
    pub fn create<R>(name: StackName, target: &mut R) -> Self
    where
        R: RenderTarget + ?Sized,
    {
        let class = name.container_class(STACK_CLASS_PREFIX);
        let container = ElementSpec::with_classes([class.as_str()]).build(target);
        let body = target.body();
        target.append_child(body, container);
        Self { name, container }
    }

    #[must_use]
    pub fn name(&self) -> &StackName {
        &self.name
    }

    #[must_use]
    pub fn container(&self) -> NodeId {
        self.container
    }

    /// Inserts `node` as the first child of the container.
    pub fn push<R>(&self, target: &mut R, node: NodeId)
    where
        R: RenderTarget + ?Sized,
    {
        match target.first_child(self.container) {
            Some(first) => target.insert_before(self.container, node, first),
            None => target.append_child(self.container, node),
        }
    }
}
