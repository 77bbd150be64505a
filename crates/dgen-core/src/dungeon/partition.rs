//! Binary space partitioning
//!
//! Recursively cuts a region in two until pieces are too small (or too deep)
//! to cut again. No grid access happens here.

use dgen_rng::DungeonRng;

use crate::consts::{MAX_SPLIT_DEPTH, SPLIT_ASPECT_RATIO};

use super::node::Node;

/// Try to split `node` into two children, then recurse into both.
///
/// Returns false if `node` stays a leaf. RNG use per successful split is one
/// coin for the direction followed by one draw for the cut position; the coin
/// is drawn even when the aspect ratio overrides it.
pub fn split(node: &mut Node, depth: u32, min_size: i32, rng: &mut impl DungeonRng) -> bool {
    if depth > MAX_SPLIT_DEPTH {
        return false;
    }
    if node.width < min_size * 2 || node.height < min_size * 2 {
        return false;
    }

    // true = stacked top/bottom, false = side by side
    let mut horizontal = rng.coin();
    let (w, h) = (f64::from(node.width), f64::from(node.height));
    if w / h >= SPLIT_ASPECT_RATIO {
        horizontal = false;
    } else if h / w >= SPLIT_ASPECT_RATIO {
        horizontal = true;
    }

    let extent = if horizontal { node.height } else { node.width };
    let range = extent - min_size * 2;
    if range <= 0 {
        return false;
    }
    let cut = min_size + rng.intn(range as u32) as i32;

    let (mut left, mut right) = if horizontal {
        (
            Node::new(node.x, node.y, node.width, cut),
            Node::new(node.x, node.y + cut, node.width, node.height - cut),
        )
    } else {
        (
            Node::new(node.x, node.y, cut, node.height),
            Node::new(node.x + cut, node.y, node.width - cut, node.height),
        )
    };

    // A child that refuses to split simply becomes a bigger leaf.
    split(&mut left, depth + 1, min_size, rng);
    split(&mut right, depth + 1, min_size, rng);

    node.attach(left, right);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use dgen_rng::{Isaac64, SequenceRng};

    fn assert_partition(node: &Node) {
        if let (Some(left), Some(right)) = (node.left(), node.right()) {
            assert_eq!(
                left.width * left.height + right.width * right.height,
                node.width * node.height,
                "children must tile their parent"
            );
            let side_by_side = left.y == right.y && left.x + left.width == right.x;
            let stacked = left.x == right.x && left.y + left.height == right.y;
            assert!(side_by_side || stacked, "children overlap or leave a gap");
            assert_eq!((left.x, left.y), (node.x, node.y));
            assert_partition(left);
            assert_partition(right);
        } else {
            assert!(node.is_leaf());
        }
    }

    #[test]
    fn test_too_small_refuses() {
        let mut node = Node::new(0, 0, 11, 40);
        let mut rng = SequenceRng::new([0]);
        assert!(!split(&mut node, 0, 6, &mut rng));
        assert!(node.is_leaf());
        assert!(rng.calls().is_empty(), "no RNG draw before the size check");
    }

    #[test]
    fn test_depth_ceiling() {
        let mut node = Node::new(0, 0, 100, 100);
        let mut rng = SequenceRng::new([0]);
        assert!(!split(&mut node, MAX_SPLIT_DEPTH + 1, 6, &mut rng));
        assert!(node.is_leaf());
    }

    #[test]
    fn test_exact_double_min_refuses_after_coin() {
        // 12x12 with min 6 leaves no room to move the cut.
        let mut node = Node::new(0, 0, 12, 12);
        let mut rng = SequenceRng::new([0]);
        assert!(!split(&mut node, 0, 6, &mut rng));
        assert_eq!(rng.calls(), &[2]);
    }

    #[test]
    fn test_wide_region_splits_vertically() {
        // Coin says horizontal (0), aspect ratio overrides to side by side.
        let mut node = Node::new(0, 0, 30, 20);
        let mut rng = SequenceRng::new([0, 3]);
        assert!(split(&mut node, MAX_SPLIT_DEPTH, 6, &mut rng));
        let (left, right) = (node.left().unwrap(), node.right().unwrap());
        assert_eq!((left.x, left.width, left.height), (0, 9, 20));
        assert_eq!((right.x, right.width, right.height), (9, 21, 20));
        assert_eq!(rng.calls(), &[2, 18]);
    }

    #[test]
    fn test_tall_region_splits_horizontally() {
        let mut node = Node::new(5, 5, 20, 30);
        let mut rng = SequenceRng::new([1, 0]);
        assert!(split(&mut node, MAX_SPLIT_DEPTH, 6, &mut rng));
        let (top, bottom) = (node.left().unwrap(), node.right().unwrap());
        assert_eq!((top.y, top.height), (5, 6));
        assert_eq!((bottom.y, bottom.height), (11, 24));
        assert_eq!(bottom.width, 20);
    }

    #[test]
    fn test_square_region_follows_coin() {
        let mut node = Node::new(0, 0, 20, 20);
        // coin 1 -> side by side
        let mut rng = SequenceRng::new([1, 2]);
        assert!(split(&mut node, MAX_SPLIT_DEPTH, 6, &mut rng));
        assert_eq!(node.left().unwrap().width, 8);
        assert_eq!(node.left().unwrap().height, 20);
    }

    #[test]
    fn test_children_tile_parent() {
        for seed in [1u64, 42, 12345, 67890] {
            let mut root = Node::new(0, 0, 64, 64);
            assert!(split(&mut root, 0, 6, &mut Isaac64::new(seed)));
            assert_partition(&root);
            assert!(root.depth() <= (MAX_SPLIT_DEPTH + 1) as usize);
        }
    }

    #[test]
    fn test_leaves_respect_min_size() {
        fn check(node: &Node) {
            match (node.left(), node.right()) {
                (Some(l), Some(r)) => {
                    check(l);
                    check(r);
                }
                _ => assert!(node.width >= 6 && node.height >= 6),
            }
        }
        let mut root = Node::new(0, 0, 200, 90);
        split(&mut root, 0, 6, &mut Isaac64::new(3));
        check(&root);
    }
}
