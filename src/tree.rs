//! An ordered key container. Keys are kept in a plain Binary Search Tree
//! which never rebalances and never stores the same key twice.
//!
//! # Examples
//!
//! ```
//! use keytree::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert!(tree.search(&1).is_none());
//!
//! // The first insert of a key creates a node.
//! assert!(tree.insert(1));
//! assert_eq!(tree.search(&1).map(|n| n.key()), Some(&1));
//!
//! // Inserting the same key again is refused.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//! ```
//!
//! Keys must be totally ordered, so mixing key types is a compile error:
//!
//! ```compile_fail
//! use keytree::tree::Tree;
//!
//! let mut tree = Tree::new();
//! tree.insert(1);
//! tree.insert("one");
//! ```
//!
//! as is using a key that is only partially ordered:
//!
//! ```compile_fail
//! use keytree::tree::Tree;
//!
//! let mut tree = Tree::new();
//! tree.insert(1.5_f64);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

/// A Binary Search Tree holding unique keys. This can be used for inserting
/// keys, finding them again, and visiting them in ascending order.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

type Link<K> = Option<Box<Node<K>>>;

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        // Tear down through an explicit stack. The default drop glue would
        // recurse once per level, which overflows on skewed trees.
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns `true` if the tree holds no keys. Once a key has been
    /// inserted this never goes back to `true`.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Inserts the given key into the tree. Returns `true` if a new node
    /// was created and `false` if the key was already present, in which
    /// case the tree is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use keytree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert("Jose"));
    /// assert!(tree.insert("Ana"));
    /// assert!(!tree.insert("Ana"));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let mut link = &mut self.root;
        loop {
            match link {
                None => {
                    *link = Some(Box::new(Node::new(key)));
                    self.len += 1;
                    return true;
                }
                Some(node) => {
                    if cfg!(debug_assertions) {
                        node.assert_ordered_children();
                    }
                    link = match key.cmp(&node.key) {
                        Ordering::Less => &mut node.left,
                        Ordering::Equal => return false,
                        Ordering::Greater => &mut node.right,
                    };
                }
            }
        }
    }

    /// Potentially finds the node holding the given key. If no node has
    /// the key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use keytree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(String::from("Pedro"));
    ///
    /// assert_eq!(tree.search("Pedro").map(|n| n.key().as_str()), Some("Pedro"));
    /// assert!(tree.search("Manuel").is_none());
    /// ```
    pub fn search<Q>(&self, key: &Q) -> Option<&Node<K>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Returns `true` if the tree holds the given key.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).is_some()
    }

    /// Collects every key in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use keytree::tree::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1].into_iter().collect();
    ///
    /// assert_eq!(tree.in_order_traversal(), [&1, &3, &5, &8]);
    /// ```
    pub fn in_order_traversal(&self) -> Vec<&K> {
        self.iter().collect()
    }

    /// Gets an iterator over the keys in ascending order. The iterator
    /// holds a stack no deeper than the tree is tall.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// The number of edges on the longest path from the root to a leaf.
    /// Both an empty tree and a tree with a single key have a height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use keytree::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// // Sorted input leaves every node with only a right child.
    /// tree.extend(0..10);
    /// assert_eq!(tree.height(), 9);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<K>, usize)> =
            self.root.as_deref().map(|root| (root, 0)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            for child in [node.left(), node.right()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        height
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.key)
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.key)
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    /// Inserts every key, silently skipping the ones already present.
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> IntoIterator for Tree<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(self.root.take(), self.len)
    }
}

/// A `Node` holds one key and owns its (possibly absent) children.
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> fmt::Debug for Node<K>
where
    K: fmt::Debug,
{
    // Children are left out so deep subtrees don't recurse.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the subtree holding the keys smaller than this one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the subtree holding the keys larger than this one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    fn assert_ordered_children(&self)
    where
        K: Ord,
    {
        if let Some(left) = self.left() {
            assert!(left.key < self.key);
        }
        if let Some(right) = self.right() {
            assert!(right.key > self.key);
        }
    }
}

/// An in-order iterator over borrowed keys. See [`Tree::iter`].
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Clone for Iter<'a, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, K> Iter<'a, K> {
    fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `node` and then each of its left descendants. The top of the
    /// stack ends up being the smallest key not yet yielded.
    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}
impl<K> FusedIterator for Iter<'_, K> {}

/// An in-order iterator that takes ownership of the keys.
pub struct IntoIter<K> {
    stack: Vec<Box<Node<K>>>,
    remaining: usize,
}

impl<K> IntoIter<K> {
    fn new(root: Link<K>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Link<K>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<K> Drop for IntoIter<K> {
    fn drop(&mut self) {
        // Drain the rest so the remaining subtrees come apart iteratively.
        for _ in self.by_ref() {}
    }
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left_spine(node.right.take());
        self.remaining -= 1;
        Some(node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {}
impl<K> FusedIterator for IntoIter<K> {}
