//! Partition tree nodes and rooms

use serde::Serialize;

/// Floor rectangle carved inside a leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Room {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center cell, rounding toward the origin
    pub const fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    pub const fn area(&self) -> i32 {
        self.width * self.height
    }

    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// A rectangular region of the map.
///
/// Either a leaf (no children, may own a room) or an internal node with
/// exactly two children whose regions tile this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<Room>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) children: Option<(Box<Node>, Box<Node>)>,
}

impl Node {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            room: None,
            children: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Left/top child
    pub fn left(&self) -> Option<&Node> {
        self.children.as_ref().map(|(left, _)| left.as_ref())
    }

    /// Right/bottom child
    pub fn right(&self) -> Option<&Node> {
        self.children.as_ref().map(|(_, right)| right.as_ref())
    }

    pub(crate) fn attach(&mut self, left: Node, right: Node) {
        debug_assert!(self.room.is_none(), "internal nodes never own rooms");
        self.children = Some((Box::new(left), Box::new(right)));
    }

    /// Height of the subtree (a lone leaf is 0)
    pub fn depth(&self) -> usize {
        match &self.children {
            Some((left, right)) => 1 + left.depth().max(right.depth()),
            None => 0,
        }
    }

    pub fn leaf_count(&self) -> usize {
        match &self.children {
            Some((left, right)) => left.leaf_count() + right.leaf_count(),
            None => 1,
        }
    }

    /// All rooms in this subtree, pre-order
    pub fn rooms(&self) -> Vec<Room> {
        let mut rooms = Vec::new();
        self.collect_rooms(&mut rooms);
        rooms
    }

    fn collect_rooms(&self, rooms: &mut Vec<Room>) {
        if let Some(room) = self.room {
            rooms.push(room);
        }
        if let Some((left, right)) = &self.children {
            left.collect_rooms(rooms);
            right.collect_rooms(rooms);
        }
    }

    /// True if the point lies inside this node's region
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Pre-order collection of every room under `node`
pub fn get_rooms(node: &Node) -> Vec<Room> {
    node.rooms()
}
