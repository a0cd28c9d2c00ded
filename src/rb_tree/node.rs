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

/// Index of a node in the tree's arena.
pub type NodeId = usize;

/// The leaf standing for "no child". Its children are itself.
pub const SENTINEL: NodeId = 0;
/// The node above the root. `header.right` is the root.
pub const HEADER: NodeId = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn alter(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    key: i32,
    left: NodeId,
    right: NodeId,
    color: Color,
}

impl Node {
    /// Creates a node whose children are both the sentinel.
    pub fn new(key: i32, color: Color) -> Self {
        Self {
            key,
            left: SENTINEL,
            right: SENTINEL,
            color,
        }
    }

    pub fn key(&self) -> i32 {
        self.key
    }

    pub fn child(&self, direction: Direction) -> NodeId {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
    pub fn set_child(&mut self, child: NodeId, direction: Direction) {
        match direction {
            Direction::Left => self.left = child,
            Direction::Right => self.right = child,
        }
    }

    pub fn left(&self) -> NodeId {
        self.child(Direction::Left)
    }
    pub fn right(&self) -> NodeId {
        self.child(Direction::Right)
    }

    pub fn color(&self) -> Color {
        self.color
    }
    pub fn set_color(&mut self, color: Color) {
        self.color = color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_points_at_sentinel() {
        let node = Node::new(42, Color::Red);
        assert_eq!(42, node.key());
        assert_eq!(SENTINEL, node.left());
        assert_eq!(SENTINEL, node.right());
        assert_eq!(Color::Red, node.color());
    }

    #[test]
    fn test_set_child() {
        let mut node = Node::new(0, Color::Black);

        node.set_child(7, Direction::Left);
        assert_eq!(7, node.left());
        assert_eq!(SENTINEL, node.right());

        node.set_child(9, Direction::Right);
        assert_eq!(7, node.child(Direction::Left));
        assert_eq!(9, node.child(Direction::Right));
    }

    #[test]
    fn test_alter() {
        assert_eq!(Direction::Right, Direction::Left.alter());
        assert_eq!(Direction::Left, Direction::Right.alter());
    }
}
