use std::collections::VecDeque;

use log::debug;

use crate::error::{Error, Result};

/// A node of a binary tree owning its two optional subtrees.
///
/// Because children are uniquely owned through `Box`, a `TreeNode` can never
/// contain a cycle or share a subtree between two parents.
///
/// Only `Drop` and [`diameter_of_binary_tree_iterative`] avoid recursion.
/// The derived `Clone`, `PartialEq` and `Debug`, along with `height`,
/// `node_count`, `mirror` and the recursive diameter, use one stack frame per
/// level and are limited to trees the call stack can hold.
///
/// [`diameter_of_binary_tree_iterative`]: crate::cs::tree::diameter_of_binary_tree_iterative
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    pub val: T,
    pub left: Option<Box<TreeNode<T>>>,
    pub right: Option<Box<TreeNode<T>>>,
}

/// Which child slot a skewed tree grows along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl<T> TreeNode<T> {
    /// Creates a leaf node.
    pub fn new(val: T) -> Self {
        TreeNode {
            val,
            left: None,
            right: None,
        }
    }

    pub fn with_children(
        val: T,
        left: Option<Box<TreeNode<T>>>,
        right: Option<Box<TreeNode<T>>>,
    ) -> Self {
        TreeNode { val, left, right }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of edges on the longest downward path from this node.
    /// A leaf has height 0.
    pub fn height(&self) -> usize {
        let below = |child: &Option<Box<TreeNode<T>>>| child.as_ref().map_or(0, |n| 1 + n.height());
        below(&self.left).max(below(&self.right))
    }

    /// Number of nodes in the subtree rooted here.
    pub fn node_count(&self) -> usize {
        let count = |child: &Option<Box<TreeNode<T>>>| child.as_ref().map_or(0, |n| n.node_count());
        1 + count(&self.left) + count(&self.right)
    }

    /// Swaps the left and right children of every node in the subtree.
    pub fn mirror(&mut self) {
        std::mem::swap(&mut self.left, &mut self.right);
        if let Some(left) = self.left.as_mut() {
            left.mirror();
        }
        if let Some(right) = self.right.as_mut() {
            right.mirror();
        }
    }

    /// Builds a tree in which every node has exactly one child on `side`,
    /// with the first value at the root. Returns `None` for no values.
    ///
    /// # Examples
    ///
    /// ```
    /// use lg::cs::tree::{Side, TreeNode};
    ///
    /// let root = TreeNode::chain(1..=4, Side::Right).unwrap();
    /// assert_eq!(root.height(), 3);
    /// assert_eq!(root.node_count(), 4);
    /// ```
    pub fn chain<I>(values: I, side: Side) -> Option<Box<TreeNode<T>>>
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = values.into_iter().collect();
        let mut below: Option<Box<TreeNode<T>>> = None;
        for val in values.into_iter().rev() {
            let mut node = Box::new(TreeNode::new(val));
            match side {
                Side::Left => node.left = below,
                Side::Right => node.right = below,
            }
            below = Some(node);
        }
        below
    }
}

impl<T: Clone> TreeNode<T> {
    /// Builds a tree from LeetCode-style level-order values.
    ///
    /// Nodes are listed breadth first. A `None` entry marks an absent child
    /// and has no children of its own listed. Trailing `None`s are ignored.
    ///
    /// # Errors
    /// * `Error::DetachedNode` - a value appears where no parent can hold it:
    ///   after a `None` root, or once every earlier node's child slots are used
    ///
    /// # Examples
    /// ```
    /// use lg::cs::tree::TreeNode;
    ///
    /// let root = TreeNode::from_level_order(&[Some(1), Some(2), Some(3), None, Some(5)])
    ///     .unwrap()
    ///     .unwrap();
    /// assert_eq!(root.node_count(), 4);
    /// assert_eq!(root.left.as_ref().unwrap().right.as_ref().unwrap().val, 5);
    /// ```
    pub fn from_level_order(values: &[Option<T>]) -> Result<Option<Box<TreeNode<T>>>> {
        let root_val = match values.first() {
            None => return Ok(None),
            Some(None) => {
                return match values.iter().position(Option::is_some) {
                    Some(position) => Err(Error::detached_node(position)),
                    None => Ok(None),
                };
            }
            Some(Some(val)) => val.clone(),
        };

        // Nodes are numbered in breadth-first order, so every child id is
        // larger than its parent's.
        let mut slots = vec![Slot::new(root_val)];
        let mut queue = VecDeque::from([0_usize]);
        let mut position = 1;

        while position < values.len() {
            let Some(parent) = queue.pop_front() else {
                break;
            };
            for side in [Side::Left, Side::Right] {
                let Some(entry) = values.get(position) else {
                    break;
                };
                if let Some(val) = entry {
                    let id = slots.len();
                    slots.push(Slot::new(val.clone()));
                    match side {
                        Side::Left => slots[parent].left = Some(id),
                        Side::Right => slots[parent].right = Some(id),
                    }
                    queue.push_back(id);
                }
                position += 1;
            }
        }

        if let Some(offset) = values[position.min(values.len())..]
            .iter()
            .position(Option::is_some)
        {
            return Err(Error::detached_node(position + offset));
        }

        debug!(
            "level order: {} entries, {} nodes",
            values.len(),
            slots.len()
        );

        let mut built: Vec<Option<Box<TreeNode<T>>>> = (0..slots.len()).map(|_| None).collect();
        for (id, slot) in slots.into_iter().enumerate().rev() {
            let left = slot.left.and_then(|child| built[child].take());
            let right = slot.right.and_then(|child| built[child].take());
            built[id] = Some(Box::new(TreeNode::with_children(slot.val, left, right)));
        }
        Ok(built.into_iter().next().flatten())
    }
}

/// Parses level-order text such as `"[1,2,3,null,5]"` into a tree.
///
/// Whitespace around tokens is ignored and `"[]"` is the empty tree.
///
/// # Errors
/// * `Error::MissingBrackets` - the text is not enclosed in `[` and `]`
/// * `Error::InvalidToken` - a token is neither an integer nor `null`
/// * `Error::DetachedNode` - see [`TreeNode::from_level_order`]
pub fn parse_level_order(text: &str) -> Result<Option<Box<TreeNode<i64>>>> {
    let inner = text
        .trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or(Error::MissingBrackets)?
        .trim();
    if inner.is_empty() {
        return Ok(None);
    }

    let values = inner
        .split(',')
        .enumerate()
        .map(|(position, token)| match token.trim() {
            "null" => Ok(None),
            token => token
                .parse::<i64>()
                .map(Some)
                .map_err(|_| Error::invalid_token(position, token)),
        })
        .collect::<Result<Vec<_>>>()?;

    TreeNode::from_level_order(&values)
}

struct Slot<T> {
    val: T,
    left: Option<usize>,
    right: Option<usize>,
}

impl<T> Slot<T> {
    fn new(val: T) -> Self {
        Slot {
            val,
            left: None,
            right: None,
        }
    }
}

// Deep skewed trees would overflow the stack with the default recursive drop.
impl<T> Drop for TreeNode<T> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<TreeNode<T>>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}
