//! A [`Tree`] that can be shared between threads.
//!
//! The whole tree sits behind one `parking_lot::Mutex`: every operation,
//! read or write, takes the lock for its full duration. Cloning a
//! [`SharedTree`] hands out another handle to the same tree.
//!
//! # Examples
//!
//! ```
//! use std::thread;
//!
//! use keytree::sync::SharedTree;
//!
//! let tree = SharedTree::new();
//! let handles: Vec<_> = (0..4)
//!     .map(|t| {
//!         let tree = tree.clone();
//!         thread::spawn(move || {
//!             for key in (t * 100)..(t * 100 + 100) {
//!                 tree.insert(key);
//!             }
//!         })
//!     })
//!     .collect();
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(tree.len(), 400);
//! assert!(tree.contains(&399));
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::tree::Tree;

/// A handle to a [`Tree`] guarded by a single lock.
pub struct SharedTree<K> {
    inner: Arc<Mutex<Tree<K>>>,
}

impl<K> Clone for SharedTree<K> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K> Default for SharedTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> From<Tree<K>> for SharedTree<K> {
    fn from(tree: Tree<K>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(tree)),
        }
    }
}

impl<K> fmt::Debug for SharedTree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with(|tree| f.debug_tuple("SharedTree").field(tree).finish())
    }
}

impl<K> SharedTree<K> {
    /// Generates a new handle to an empty tree.
    pub fn new() -> Self {
        Tree::new().into()
    }

    /// Runs `f` against the tree while holding the lock.
    ///
    /// # Examples
    ///
    /// ```
    /// use keytree::sync::SharedTree;
    ///
    /// let tree = SharedTree::new();
    /// tree.insert(3);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.with(|t| t.min().copied()), Some(1));
    /// ```
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Tree<K>) -> R,
    {
        let tree = self.inner.lock();
        f(&tree)
    }

    /// See [`Tree::insert`].
    pub fn insert(&self, key: K) -> bool
    where
        K: Ord,
    {
        self.inner.lock().insert(key)
    }

    /// See [`Tree::contains`].
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.inner.lock().contains(key)
    }

    /// See [`Tree::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// See [`Tree::len`].
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// See [`Tree::height`].
    pub fn height(&self) -> usize {
        self.inner.lock().height()
    }

    /// Copies every key out in ascending order. The keys are cloned since
    /// borrows can't outlive the lock.
    pub fn in_order_traversal(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.inner.lock().iter().cloned().collect()
    }

    /// Takes the tree back out if this is the last handle to it. Otherwise
    /// the handle is returned unchanged.
    pub fn try_unwrap(self) -> Result<Tree<K>, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}
