//! Containers: capacity-constrained nodes of the inventory tree.
//!
//! A container holds leaf items and/or other containers. Placement is
//! depth-first first-fit over children in insertion order, with no
//! backtracking across siblings — which sub-container receives an item is
//! part of the observable contract, not an optimization detail.

use serde::{Deserialize, Serialize};

use stowage_core::{DomainError, DomainResult};

use crate::item::Item;

/// Container behaviour variant (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    /// Ordinary container: reports tare weight plus carried payload.
    Plain,
    /// Magic container: reports its tare weight alone, no matter what it
    /// holds. Its own admission gate is unchanged.
    Magic,
}

/// One child slot of a container: either a leaf item or a nested container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    Item(Item),
    Container(Container),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Item(item) => item.name(),
            Node::Container(container) => container.name(),
        }
    }

    /// Weight this node imposes on whoever carries it.
    pub fn carried_weight(&self) -> u32 {
        match self {
            Node::Item(item) => item.current_weight(),
            Node::Container(container) => container.total_carried_weight(),
        }
    }
}

/// Successful placement report.
///
/// `container` is the name the success is attributed to: the container the
/// caller originally targeted, even when the item actually landed in a
/// descendant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub item: String,
    pub container: String,
}

/// A capacity-constrained container.
///
/// `capacity` bounds the combined weight of directly held loose items, less
/// whatever capacity is already reserved for attached sub-containers. Each
/// sub-container's usage is self-contained against its own capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    name: String,
    tare_weight: u32,
    capacity: u32,
    kind: ContainerKind,
    composite: bool,
    children: Vec<Node>,
}

impl Container {
    pub fn new(name: impl Into<String>, tare_weight: u32, capacity: u32) -> Self {
        Self {
            name: name.into(),
            tare_weight,
            capacity,
            kind: ContainerKind::Plain,
            composite: false,
            children: Vec::new(),
        }
    }

    /// Build a magic copy of this container under a new name.
    ///
    /// Tare weight, capacity, composite flag and children carry over; the
    /// child list is deep-copied, so the source and the magic copy evolve
    /// independently afterwards.
    pub fn to_magic(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tare_weight: self.tare_weight,
            capacity: self.capacity,
            kind: ContainerKind::Magic,
            composite: self.composite,
            children: self.children.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tare_weight(&self) -> u32 {
        self.tare_weight
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    pub fn is_magic(&self) -> bool {
        self.kind == ContainerKind::Magic
    }

    /// True once at least one sub-container has been attached. Only
    /// suppresses the normal capacity display (`0/0`): a composite's
    /// literal capacity is the sum of its children's, a derived bound.
    pub fn is_composite(&self) -> bool {
        self.composite
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Direct child by exact name.
    pub fn find_child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|child| child.name() == name)
    }

    /// Combined weight of direct loose items. Does not recurse: each
    /// sub-container's usage counts against its own capacity, not ours.
    pub fn used_capacity(&self) -> u32 {
        self.children
            .iter()
            .filter_map(|child| match child {
                Node::Item(item) => Some(item.current_weight()),
                Node::Container(_) => None,
            })
            .sum()
    }

    /// Capacity already committed to directly attached sub-containers.
    pub fn reserved_child_capacity(&self) -> u32 {
        self.children
            .iter()
            .filter_map(|child| match child {
                Node::Container(sub) => Some(sub.capacity),
                Node::Item(_) => None,
            })
            .sum()
    }

    /// Leaf payload weight over the whole subtree. Sub-container tares are
    /// not counted here (they were folded into this container's tare at
    /// attach time) and a magic subtree contributes nothing upward.
    fn payload_weight(&self) -> u32 {
        self.children
            .iter()
            .map(|child| match child {
                Node::Item(item) => item.current_weight(),
                Node::Container(sub) if sub.is_magic() => 0,
                Node::Container(sub) => sub.payload_weight(),
            })
            .sum()
    }

    /// Total weight this container imposes on whoever carries it.
    ///
    /// A magic container weighs its tare alone, regardless of contents.
    pub fn total_carried_weight(&self) -> u32 {
        match self.kind {
            ContainerKind::Magic => self.tare_weight,
            ContainerKind::Plain => self.tare_weight + self.payload_weight(),
        }
    }

    /// Admission gate shared by direct placement and the first-fit
    /// pre-check on child containers.
    fn has_room_for(&self, weight: u32) -> bool {
        weight.saturating_add(self.used_capacity())
            <= self.capacity.saturating_sub(self.reserved_child_capacity())
    }

    /// Attach a declared sub-container. Structural and unconditional: the
    /// parent's capacity is defined to expand to absorb it, so there is no
    /// capacity check.
    pub fn attach(&mut self, sub: Container) {
        self.composite = true;
        self.capacity += sub.capacity;
        // A magic parent never grows its tare; its reported weight is
        // tare-only regardless of what it carries.
        if self.kind == ContainerKind::Plain {
            self.tare_weight += sub.total_carried_weight();
        }
        tracing::debug!(parent = %self.name, sub = %sub.name, "sub-container attached");
        self.children.push(Node::Container(sub));
    }

    /// Place a loose item somewhere in this container's subtree.
    ///
    /// Depth-first first-fit: the first child container whose admission
    /// gate accepts the item receives the recursion and its outcome is
    /// final (no sibling backtracking). Only if no child qualifies is a
    /// direct fit attempted. A rejected attempt leaves the tree untouched.
    pub fn add_item(&mut self, item: Item) -> DomainResult<Placement> {
        self.place(Node::Item(item), None)
    }

    /// Place a container as ordinary cargo (payload, not attachment): it
    /// weighs its total carried weight for the admission gate.
    pub fn add_node(&mut self, node: Node) -> DomainResult<Placement> {
        self.place(node, None)
    }

    /// Place a batch of items sequentially, one result per item.
    pub fn add_items(&mut self, items: impl IntoIterator<Item = Item>) -> Vec<DomainResult<Placement>> {
        items.into_iter().map(|item| self.add_item(item)).collect()
    }

    fn place(&mut self, node: Node, on_behalf_of: Option<&str>) -> DomainResult<Placement> {
        let weight = node.carried_weight();

        let first_fit = self.children.iter().position(|child| {
            matches!(child, Node::Container(sub) if sub.has_room_for(weight))
        });
        if let Some(idx) = first_fit {
            let origin = on_behalf_of.unwrap_or(&self.name).to_string();
            if let Node::Container(sub) = &mut self.children[idx] {
                return sub.place(node, Some(origin.as_str()));
            }
        }

        if self.has_room_for(weight) {
            let placement = Placement {
                item: node.name().to_string(),
                container: on_behalf_of.unwrap_or(&self.name).to_string(),
            };
            tracing::debug!(item = %placement.item, container = %self.name, "item stored");
            self.children.push(node);
            return Ok(placement);
        }

        tracing::debug!(item = %node.name(), container = %self.name, "item rejected");
        Err(DomainError::capacity_exceeded(node.name(), self.name.as_str()))
    }

    /// Render the subtree as an indented textual listing, containers before
    /// their children, children sorted by name at each level.
    pub fn list_items(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, 0);
        out
    }

    fn render_into(&self, out: &mut String, depth: usize) {
        use core::fmt::Write;

        let indent = "   ".repeat(depth);
        let _ = writeln!(out, "{indent}{self}");

        let mut children: Vec<&Node> = self.children.iter().collect();
        children.sort_by(|a, b| a.name().cmp(b.name()));
        for child in children {
            match child {
                Node::Item(item) => {
                    let _ = writeln!(out, "{}{item}", "   ".repeat(depth + 1));
                }
                Node::Container(sub) => sub.render_into(out, depth + 1),
            }
        }
    }
}

impl core::fmt::Display for Container {
    /// Summary line. Composites show the literal `0/0` capacity pair: their
    /// capacity is derived from their children, not a bound of their own.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} (total weight: {}, empty weight: {}, capacity: ",
            self.name,
            self.total_carried_weight(),
            self.tare_weight,
        )?;
        if self.composite {
            write!(f, "0/0)")
        } else {
            write!(f, "{}/{})", self.used_capacity(), self.capacity)
        }
    }
}
