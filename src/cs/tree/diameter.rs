use log::debug;

use super::binary_tree::TreeNode;

/// Computes the diameter of a binary tree: the number of edges on the longest
/// path between any two nodes. The path does not have to pass through the root.
///
/// # Arguments
/// * `root` - The root of the tree, or `None` for the empty tree
///
/// # Returns
/// * The diameter in edges; 0 for an empty or single-node tree
///
/// # Examples
/// ```
/// use lg::cs::tree::{diameter_of_binary_tree, parse_level_order};
///
/// //       1
/// //      / \
/// //     2   3
/// //    / \
/// //   4   5
/// let root = parse_level_order("[1,2,3,4,5]").unwrap();
/// assert_eq!(diameter_of_binary_tree(root.as_deref()), 3); // 4 -> 2 -> 1 -> 3
/// ```
///
/// # Complexity
/// * Time: O(n), every node is visited once
/// * Space: O(h) call stack where h is the height of the tree
pub fn diameter_of_binary_tree<T>(root: Option<&TreeNode<T>>) -> usize {
    let mut diameter = 0;
    height(root, &mut diameter);

    debug!("tree diameter: {}", diameter);
    diameter as usize
}

/// Post-order helper returning the height of `node` in edges, with an absent
/// node at -1 so that a leaf comes out at 0. Raises `diameter` to the longest
/// path that has `node` as its apex.
fn height<T>(node: Option<&TreeNode<T>>, diameter: &mut isize) -> isize {
    let Some(node) = node else {
        return -1;
    };

    let left = height(node.left.as_deref(), diameter);
    let right = height(node.right.as_deref(), diameter);
    *diameter = (*diameter).max(2 + left + right);

    1 + left.max(right)
}

enum Frame<'a, T> {
    Enter(Option<&'a TreeNode<T>>),
    Exit,
}

/// Same result as [`diameter_of_binary_tree`] using an explicit stack instead
/// of recursion, so arbitrarily deep trees do not exhaust the call stack.
///
/// # Examples
/// ```
/// use lg::cs::tree::{diameter_of_binary_tree_iterative, Side, TreeNode};
///
/// let chain = TreeNode::chain(0..100_000, Side::Right);
/// assert_eq!(diameter_of_binary_tree_iterative(chain.as_deref()), 99_999);
/// ```
pub fn diameter_of_binary_tree_iterative<T>(root: Option<&TreeNode<T>>) -> usize {
    let mut diameter: isize = 0;
    // Heights of finished subtrees, left child pushed before right.
    let mut heights: Vec<isize> = Vec::new();
    let mut stack = vec![Frame::Enter(root)];

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter(None) => heights.push(-1),
            Frame::Enter(Some(node)) => {
                stack.push(Frame::Exit);
                stack.push(Frame::Enter(node.right.as_deref()));
                stack.push(Frame::Enter(node.left.as_deref()));
            }
            Frame::Exit => {
                let (Some(right), Some(left)) = (heights.pop(), heights.pop()) else {
                    unreachable!("both child heights are recorded before a node exits");
                };
                diameter = diameter.max(2 + left + right);
                heights.push(1 + left.max(right));
            }
        }
    }

    debug!("tree diameter (iterative): {}", diameter);
    diameter as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::tree::binary_tree::{parse_level_order, Side};

    fn both(root: Option<&TreeNode<i64>>) -> (usize, usize) {
        (
            diameter_of_binary_tree(root),
            diameter_of_binary_tree_iterative(root),
        )
    }

    #[test]
    fn test_empty_tree() {
        assert_eq!(both(None), (0, 0));
    }

    #[test]
    fn test_single_node() {
        let root = TreeNode::new(1_i64);
        assert_eq!(both(Some(&root)), (0, 0));
    }

    #[test]
    fn test_root_with_two_leaves() {
        let root = parse_level_order("[1,2,3]").unwrap();
        assert_eq!(both(root.as_deref()), (2, 2));
    }

    #[test]
    fn test_chain_is_n_minus_one() {
        for n in 1..=50_i64 {
            let left = TreeNode::chain(0..n, Side::Left);
            let right = TreeNode::chain(0..n, Side::Right);
            let expected = (n - 1) as usize;
            assert_eq!(both(left.as_deref()), (expected, expected), "left chain of {}", n);
            assert_eq!(both(right.as_deref()), (expected, expected), "right chain of {}", n);
        }
    }

    #[test]
    fn test_longest_path_avoids_root() {
        //         1
        //        /
        //       2
        //      / \
        //     3   4
        //    /     \
        //   5       6
        //  /         \
        // 7           8
        let root =
            parse_level_order("[1,2,null,3,4,5,null,null,6,7,null,null,8]").unwrap();
        // 7 -> 5 -> 3 -> 2 -> 4 -> 6 -> 8
        assert_eq!(both(root.as_deref()), (6, 6));
    }

    #[test]
    fn test_leetcode_examples() {
        let root = parse_level_order("[1,2,3,4,5]").unwrap();
        assert_eq!(both(root.as_deref()), (3, 3));

        let root = parse_level_order("[1,2]").unwrap();
        assert_eq!(both(root.as_deref()), (1, 1));
    }

    #[test]
    fn test_mirror_invariance() {
        let mut root = parse_level_order("[4,-7,-3,null,null,-9,-3,9,-7,-4,null,6,null,-6,-6]")
            .unwrap()
            .unwrap();
        let before = both(Some(&root));
        root.mirror();
        assert_eq!(both(Some(&root)), before);
    }
}
