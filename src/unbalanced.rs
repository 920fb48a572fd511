//! An unbalanced BST storing bare values. Nothing is ever rotated, so the shape of the tree is
//! decided entirely by insertion order. Inserting already sorted values builds what is really a
//! linked list with a lot of `None`s hanging off of it.
//!
//! # Examples
//!
//! ```
//! use searchtree::unbalanced::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert_eq!(tree.find_min(), None);
//!
//! for x in [5, 3, 8] {
//!     tree.insert(x);
//! }
//!
//! // Inserting a value that is already present does nothing.
//! assert!(!tree.insert(5));
//!
//! assert!(tree.contains(&3));
//! assert_eq!(tree.find_min(), Some(&3));
//! assert_eq!(tree.find_max(), Some(&8));
//!
//! // Removing a value hands it back. Removing it again finds nothing.
//! assert_eq!(tree.remove(&5), Some(5));
//! assert_eq!(tree.remove(&5), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use tracing::trace;

type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree without any balancing. This can be used for inserting, finding, and
/// removing values. Each value is its own key so there is no separate payload, and a value is
/// stored at most once.
///
/// All operations are `O(height)`. Because nothing keeps the tree balanced, `height` can be as
/// bad as the number of values in the tree.
pub struct Tree<T> {
    root: Link<T>,
}

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        Self::drop_nodes(self.root.take());
    }
}

/// Rebuilds the tree bottom up with an explicit stack so a degenerate tree can't blow the call
/// stack. Children are rebuilt before their parent.
impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        enum Visit<'a, T> {
            Enter(&'a Node<T>),
            Build(&'a Node<T>),
        }

        let mut todo: Vec<_> = self.root.as_deref().map(Visit::Enter).into_iter().collect();
        let mut built: Vec<Box<Node<T>>> = Vec::new();
        while let Some(visit) = todo.pop() {
            match visit {
                Visit::Enter(node) => {
                    todo.push(Visit::Build(node));
                    todo.extend(node.right.as_deref().map(Visit::Enter));
                    todo.extend(node.left.as_deref().map(Visit::Enter));
                }
                Visit::Build(node) => {
                    // The left subtree was finished first so it sits below the right one.
                    let right = node.right.as_ref().and_then(|_| built.pop());
                    let left = node.left.as_ref().and_then(|_| built.pop());
                    built.push(Box::new(Node {
                        value: node.value.clone(),
                        left,
                        right,
                    }));
                }
            }
        }

        Self { root: built.pop() }
    }
}

/// Lists the values in pre-order. Values are distinct, so the pre-order sequence pins down the
/// exact shape of the tree: two trees format the same exactly when they are built the same.
impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct PreOrder<'a, T>(&'a Tree<T>);

        impl<T: fmt::Debug> fmt::Debug for PreOrder<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.pre_order()).finish()
            }
        }

        f.debug_struct("Tree")
            .field("pre_order", &PreOrder(self))
            .finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` if there are no values in the tree.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every value from the tree. Afterwards the tree behaves exactly like one fresh from
    /// [`Tree::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use searchtree::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.clear();
    ///
    /// assert!(tree.is_empty());
    /// assert!(!tree.contains(&1));
    /// ```
    pub fn clear(&mut self) {
        trace!("clearing tree");
        Self::drop_nodes(self.root.take());
    }

    /// Returns the smallest value in the tree, or `None` if the tree is empty.
    pub fn find_min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }

        Some(&node.value)
    }

    /// Returns the largest value in the tree, or `None` if the tree is empty.
    pub fn find_max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }

        Some(&node.value)
    }

    /// Gets the height of the tree: the number of edges on the longest path from the root down to
    /// a leaf. A tree with a single value has a height of `0` and an empty tree has no height at
    /// all, so `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchtree::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), None);
    ///
    /// // Sorted input means every value hangs off the right of the previous one.
    /// for x in 1..=5 {
    ///     tree.insert(x);
    /// }
    /// assert_eq!(tree.height(), Some(4));
    /// ```
    pub fn height(&self) -> Option<usize> {
        let mut stack = vec![(self.root.as_deref()?, 0)];
        let mut height = 0;
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|left| (left, depth + 1)));
            stack.extend(node.right.as_deref().map(|right| (right, depth + 1)));
        }

        Some(height)
    }

    /// Returns the values of the tree in ascending order. An empty tree has nothing to walk and
    /// returns `None` rather than an iterator that never yields.
    ///
    /// The returned iterator is lazy and can be cloned to walk the same values again.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchtree::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.in_order().is_none());
    ///
    /// for x in [2, 3, 1] {
    ///     tree.insert(x);
    /// }
    ///
    /// let values = tree.in_order().unwrap();
    /// assert_eq!(values.clone().collect::<Vec<_>>(), [&1, &2, &3]);
    /// assert_eq!(values.count(), 3);
    /// ```
    pub fn in_order(&self) -> Option<InOrder<'_, T>> {
        self.root.as_deref().map(InOrder::new)
    }

    /// Inserts the given value into the tree. Returns `true` if the value was added and `false` if
    /// an equal value was already present, in which case the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchtree::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert!(tree.contains(&1));
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => return false,
                Ordering::Greater => &mut node.right,
            };
        }

        *link = Some(Node::new_boxed(value));
        true
    }

    /// Returns `true` if a value equal to the given one is in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }

        false
    }

    /// Removes the value equal to the given one from the tree and returns it. If the tree does
    /// not contain such a value, nothing happens and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchtree::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// assert_eq!(tree.remove(&2), Some(2));
    /// assert_eq!(tree.remove(&42), None);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(tree.contains(&3));
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        remove(&mut self.root, value)
    }

    /// Walks the values root first, then the left subtree, then the right subtree.
    fn pre_order(&self) -> impl Iterator<Item = &T> + '_ {
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
            Some(&node.value)
        })
    }

    /// Tears down a subtree without recursing so a degenerate tree can't blow the stack.
    fn drop_nodes(root: Link<T>) {
        let mut stack: Vec<Box<Node<T>>> = root.into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// Removes `value` from the subtree owned by `link`, relinking whatever replaces the removed node
/// into the slot that held it.
fn remove<T: Ord>(mut link: &mut Link<T>, value: &T) -> Option<T> {
    loop {
        let ordering = value.cmp(&link.as_ref()?.value);
        match ordering {
            Ordering::Less => link = &mut link.as_mut()?.left,
            Ordering::Greater => link = &mut link.as_mut()?.right,
            Ordering::Equal => break,
        }
    }

    // With two children the node itself stays put. Its in-order successor gives up its value and
    // that node is unlinked instead.
    let node = link.as_mut()?;
    if node.left.is_some() {
        if let Some(successor) = take_min(&mut node.right) {
            trace!("replaced removed value with its in-order successor");
            return Some(mem::replace(&mut node.value, successor));
        }
    }

    // At most one child. It takes this node's place.
    let Node {
        value: removed,
        left,
        right,
    } = *link.take()?;
    *link = left.or(right);
    Some(removed)
}

/// Unlinks the smallest node of the subtree owned by `link` and returns its value. The smallest
/// node has no left child so its right child (if any) takes its place.
fn take_min<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }

    let Node { value, right, .. } = *link.take()?;
    *link = right;
    Some(value)
}

/// An iterator over the values of a [`Tree`] in ascending order. Created by [`Tree::in_order`].
pub struct InOrder<'a, T> {
    /// Nodes whose left subtrees have been (or are being) visited but which haven't been yielded
    /// yet. The top of the stack is the next value.
    stack: Vec<&'a Node<T>>,
}

/// Manual implementation of `Clone` so cloning the iterator doesn't require `T: Clone`.
impl<T> Clone for InOrder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T> InOrder<'a, T> {
    fn new(root: &'a Node<T>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(Some(root));
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}

impl<T> FusedIterator for InOrder<'_, T> {}

/// Renders the values in ascending order, one per line. An empty tree renders as `Empty tree`.
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.in_order() {
            Some(mut values) => values.try_for_each(|value| writeln!(f, "{}", value)),
            None => writeln!(f, "Empty tree"),
        }
    }
}
