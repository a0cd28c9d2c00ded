// Copyright 2020-2023 Shin Yoshida
//
// "LGPL-3.0-or-later OR Apache-2.0"
//
// This is part of topdown-rb-tree
//
//  topdown-rb-tree is free software: you can redistribute it and/or modify
//  it under the terms of the GNU Lesser General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  topdown-rb-tree is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU Lesser General Public License for more details.
//
//  You should have received a copy of the GNU Lesser General Public License
//  along with topdown-rb-tree.  If not, see <http://www.gnu.org/licenses/>.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod node;

use self::node::{Color, Direction, Node, NodeId, HEADER, SENTINEL};
use log::{debug, trace};
use std::cmp::Ordering;

/// Number of arena slots taken by the sentinel and the header.
const RESERVED: usize = 2;

/// The nodes visited last by the descent in `RBTree::insert`.
///
/// `current` is the node being visited; the others are its parent, grand parent and great grand
/// parent in that order. Every field starts at the header.
#[derive(Debug, Clone, Copy)]
struct Ancestors {
    current: NodeId,
    parent: NodeId,
    grand: NodeId,
    great: NodeId,
}

impl Ancestors {
    fn new() -> Self {
        Self {
            current: HEADER,
            parent: HEADER,
            grand: HEADER,
            great: HEADER,
        }
    }

    fn shift(&mut self, next: NodeId) {
        self.great = self.grand;
        self.grand = self.parent;
        self.parent = self.current;
        self.current = next;
    }
}

/// Red-black tree over `i32` keys, rebalanced top-down while inserting.
///
/// Nodes are kept in an arena owned by the tree. The arena always starts with the sentinel and
/// the header, so each tree has its own sentinel and nothing is shared between trees.
#[derive(Debug, Clone)]
pub struct RBTree {
    nodes: Vec<Node>,
    #[cfg(test)]
    rotations: usize,
}

impl Default for RBTree {
    fn default() -> Self {
        Self::new()
    }
}

impl RBTree {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty tree with room for `capacity` keys before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(RESERVED + capacity);
        nodes.push(Node::new(0, Color::Black));
        nodes.push(Node::new(i32::MIN, Color::Black));

        debug_assert_eq!(nodes.len(), RESERVED);
        Self {
            nodes,
            #[cfg(test)]
            rotations: 0,
        }
    }

    /// Returns true if the tree has no root.
    pub fn is_empty(&self) -> bool {
        let header = &self.nodes[HEADER];
        header.left() == SENTINEL && header.right() == SENTINEL
    }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len() - RESERVED
    }

    /// Detaches the root and releases every node.
    pub fn clear(&mut self) {
        debug!("clear: dropping {} node(s)", self.len());

        self.nodes.truncate(RESERVED);
        self.nodes[HEADER].set_child(SENTINEL, Direction::Right);
    }

    /// Inserts `item` and returns true, or returns false doing nothing if `item` is already in
    /// the tree.
    pub fn insert(&mut self, item: i32) -> bool {
        // The descent below may flip colors or rotate before it reaches an existing key.
        // Look the key up first so that a duplicate never changes the tree.
        if self.find(item).is_some() {
            debug!("insert: {} is already in the tree", item);
            return false;
        }

        let mut path = Ancestors::new();

        while self.compare(item, path.current) != Ordering::Equal {
            let d = self.direction(item, path.current);
            path.shift(self.nodes[path.current].child(d));

            let current = &self.nodes[path.current];
            if self.color(current.left()) == Color::Red && self.color(current.right()) == Color::Red
            {
                self.reorient(&mut path, item);
            }
        }

        // Existing keys were rejected by `find`, so the descent always ends on the sentinel.
        debug_assert_eq!(path.current, SENTINEL);

        path.current = self.nodes.len();
        self.nodes.push(Node::new(item, Color::Black));

        let d = self.direction(item, path.parent);
        self.nodes[path.parent].set_child(path.current, d);
        self.reorient(&mut path, item);

        true
    }

    /// Returns the position of `item`, if any, without changing the tree.
    fn find(&self, item: i32) -> Option<NodeId> {
        let mut it = self.root();

        while it != SENTINEL {
            let node = &self.nodes[it];
            match item.cmp(&node.key()) {
                Ordering::Less => it = node.left(),
                Ordering::Equal => return Some(it),
                Ordering::Greater => it = node.right(),
            }
        }

        None
    }

    fn root(&self) -> NodeId {
        self.nodes[HEADER].right()
    }

    fn color(&self, id: NodeId) -> Color {
        self.nodes[id].color()
    }

    fn set_color(&mut self, id: NodeId, color: Color) {
        self.nodes[id].set_color(color);
    }

    /// Compares `item` with the key of `id`.
    ///
    /// The header is less than every key and the sentinel is equal to every key, so a descent
    /// always leaves the header to the right and always stops on the sentinel.
    fn compare(&self, item: i32, id: NodeId) -> Ordering {
        match id {
            SENTINEL => Ordering::Equal,
            HEADER => Ordering::Greater,
            _ => item.cmp(&self.nodes[id].key()),
        }
    }

    fn direction(&self, item: i32, id: NodeId) -> Direction {
        match self.compare(item, id) {
            Ordering::Less => Direction::Left,
            _ => Direction::Right,
        }
    }

    /// Makes `path.current` red and its children black, then rotates if that left two red nodes
    /// in a row.
    fn reorient(&mut self, path: &mut Ancestors, item: i32) {
        trace!("reorient: flip colors at {}", self.nodes[path.current].key());

        let current = self.nodes[path.current];
        self.set_color(path.current, Color::Red);
        self.set_color(current.left(), Color::Black);
        self.set_color(current.right(), Color::Black);

        if self.color(path.parent) == Color::Red {
            self.set_color(path.grand, Color::Red);

            if self.direction(item, path.grand) != self.direction(item, path.parent) {
                path.parent = self.rotate(item, path.grand);
            }
            path.current = self.rotate(item, path.great);
            self.set_color(path.current, Color::Black);
        }

        let root = self.root();
        self.set_color(root, Color::Black);

        debug_assert_eq!(self.color(SENTINEL), Color::Black);
        debug_assert_eq!(self.color(HEADER), Color::Black);
    }

    /// Rotates the child of `parent` on the side of `item`, stores the new subtree root in the
    /// same slot and returns it.
    fn rotate(&mut self, item: i32, parent: NodeId) -> NodeId {
        let d = self.direction(item, parent);
        let child = self.nodes[parent].child(d);
        debug_assert_ne!(child, SENTINEL);

        let ret = self.rotate_with(child, self.direction(item, child));
        self.nodes[parent].set_child(ret, d);
        ret
    }

    /// Lifts the child of `node` on side `d` above `node` and returns it.
    ///
    /// `rotate_with(node, Direction::Left)` is a right rotation; `Direction::Right` is a left
    /// rotation. Colors are not changed.
    fn rotate_with(&mut self, node: NodeId, d: Direction) -> NodeId {
        let child = self.nodes[node].child(d);
        debug_assert_ne!(child, SENTINEL);
        trace!(
            "rotate: {} over {}",
            self.nodes[child].key(),
            self.nodes[node].key()
        );

        #[cfg(test)]
        {
            self.rotations += 1;
        }

        let inner = self.nodes[child].child(d.alter());
        self.nodes[node].set_child(inner, d);
        self.nodes[child].set_child(node, d.alter());
        child
    }
}
