use std::collections::BTreeMap;
use std::ops::Index;

use crate::as_bytes::AsBytes;
use crate::iter::{PrefixIter, PrefixKeys, PrefixValues};
use crate::node_pool::NodePool;

/// A `PrefixIndex` is an ordered map from byte-string keys to values, stored
/// as a trie so that every key sharing a prefix can be enumerated in sorted
/// order.
///
/// Keys are compared byte-wise, which for `str` keys is case-sensitive
/// Unicode code point order.
///
/// # Concurrency
///
/// All queries take `&self`, so a populated index can be shared between
/// threads (for example behind an `Arc`) without locking. Inserting while
/// other threads read requires external synchronization.
///
/// # Examples
///
/// ```
/// use asuggest::PrefixIndex;
///
/// let mut index = PrefixIndex::new();
/// index.insert("interface", 1);
/// index.insert("inet", 2);
/// index.insert("address", 3);
///
/// assert_eq!(index.get("inet"), Some(&2));
/// assert_eq!(index.get("in"), None);
///
/// let keys: Vec<_> = index.prefix_keys("in").collect();
/// assert_eq!(keys, vec![b"inet".to_vec(), b"interface".to_vec()]);
/// ```
pub struct PrefixIndex<T> {
    pub(crate) data: Vec<T>,
    pub(crate) pool: NodePool,
}

impl<T, K: AsBytes, V: Into<T>, const N: usize> From<[(K, V); N]> for PrefixIndex<T> {
    fn from(array: [(K, V); N]) -> Self {
        let mut index = PrefixIndex::with_capacity(N);
        for (key, value) in array {
            index.insert(key, value.into());
        }
        index
    }
}

impl<T> From<BTreeMap<String, T>> for PrefixIndex<T> {
    fn from(map: BTreeMap<String, T>) -> Self {
        let mut index = PrefixIndex::with_capacity(map.len());
        for (k, v) in map {
            index.insert(k, v);
        }
        index
    }
}

impl<T: Clone> Clone for PrefixIndex<T> {
    fn clone(&self) -> Self {
        PrefixIndex {
            data: self.data.clone(),
            pool: self.pool.clone(),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for PrefixIndex<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map_debug = f.debug_map();

        for (key, value) in self.iter() {
            match std::str::from_utf8(&key) {
                Ok(s) => map_debug.entry(&s, value),
                Err(_) => map_debug.entry(&key, value),
            };
        }

        map_debug.finish()
    }
}

impl<T: PartialEq> PartialEq for PrefixIndex<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for PrefixIndex<T> {}

impl<T, Q: ?Sized> Index<&Q> for PrefixIndex<T>
where
    Q: AsBytes,
{
    type Output = T;

    fn index(&self, key: &Q) -> &Self::Output {
        self.get(key).expect("no entry found for key")
    }
}

impl<T, K: AsBytes, V: Into<T>> Extend<(K, V)> for PrefixIndex<T> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v.into());
        }
    }
}

impl<T, K, V> FromIterator<(K, V)> for PrefixIndex<T>
where
    K: AsBytes,
    V: Into<T>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut index = PrefixIndex::new();
        index.extend(iter);
        index
    }
}

impl<T> Default for PrefixIndex<T> {
    /// Creates a new empty `PrefixIndex`.
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PrefixIndex<T> {
    /// Creates a new empty `PrefixIndex`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use asuggest::PrefixIndex;
    /// let index: PrefixIndex<i32> = PrefixIndex::new();
    /// assert!(index.is_empty());
    /// ```
    pub fn new() -> Self {
        PrefixIndex {
            data: Vec::new(),
            pool: NodePool::new(),
        }
    }

    /// Creates a new `PrefixIndex` with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        PrefixIndex {
            data: Vec::with_capacity(capacity),
            pool: NodePool::new(),
        }
    }

    /// Returns the number of keys in the index.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the index contains no keys.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of trie nodes, the root included.
    ///
    /// Useful for estimating memory use: every distinct prefix of every
    /// stored key owns exactly one node.
    pub fn node_count(&self) -> usize {
        self.pool.len()
    }

    /// Removes all keys, keeping the value storage allocated.
    pub fn clear(&mut self) {
        self.data.clear();
        self.pool.clear();
    }

    /// Releases unused capacity held by the node arena and value storage.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
        self.pool.shrink_to_fit();
    }

    /// Inserts a key-value pair into the index.
    ///
    /// Missing nodes along the key's path are created. If the key was
    /// already present its value is replaced and the old value returned;
    /// the key still appears only once. The empty key is allowed and is
    /// stored on the root.
    ///
    /// # Examples
    ///
    /// ```
    /// # use asuggest::PrefixIndex;
    /// let mut index = PrefixIndex::new();
    /// assert_eq!(index.insert("a", 1), None);
    /// assert_eq!(index.insert("a", 2), Some(1));
    /// assert_eq!(index.get("a"), Some(&2));
    /// assert_eq!(index.len(), 1);
    /// ```
    pub fn insert<K: AsBytes>(&mut self, key: K, value: T) -> Option<T> {
        let mut current_id = NodePool::ROOT;
        for byte in key.as_bytes() {
            current_id = self.pool.get_or_add_child(current_id, byte);
        }

        let node = self.pool.get_node_mut(current_id);
        match node.data_idx {
            Some(idx) => Some(std::mem::replace(&mut self.data[idx], value)),
            None => {
                node.data_idx = Some(self.data.len());
                self.data.push(value);
                None
            }
        }
    }

    /// Returns a reference to the value stored under exactly `key`.
    ///
    /// Nodes that only exist because a longer key passes through them are
    /// not matches.
    ///
    /// # Examples
    ///
    /// ```
    /// # use asuggest::PrefixIndex;
    /// let mut index = PrefixIndex::new();
    /// index.insert("family", 1);
    /// assert_eq!(index.get("family"), Some(&1));
    /// assert_eq!(index.get("fam"), None);
    /// ```
    pub fn get<K: AsBytes>(&self, key: K) -> Option<&T> {
        let node_id = self.pool.descend(NodePool::ROOT, key.as_bytes())?;
        let idx = self.pool.get_node(node_id).data_idx?;
        Some(&self.data[idx])
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut<K: AsBytes>(&mut self, key: K) -> Option<&mut T> {
        let node_id = self.pool.descend(NodePool::ROOT, key.as_bytes())?;
        let idx = self.pool.get_node(node_id).data_idx?;
        Some(&mut self.data[idx])
    }

    /// Returns `true` if exactly `key` was inserted.
    pub fn contains_key<K: AsBytes>(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    /// Returns an iterator over all key-value pairs in ascending key order.
    pub fn iter(&self) -> PrefixIter<'_, T> {
        self.prefix_iter(b"")
    }

    /// Returns an iterator over all keys in ascending order.
    pub fn keys(&self) -> PrefixKeys<'_, T> {
        PrefixKeys { inner: self.iter() }
    }

    /// Returns an iterator over all values in ascending key order.
    pub fn values(&self) -> PrefixValues<'_, T> {
        PrefixValues { inner: self.iter() }
    }

    /// Returns an iterator over every entry whose key starts with `prefix`,
    /// in ascending key order.
    ///
    /// The entry stored under `prefix` itself is included. A prefix that
    /// leads nowhere yields nothing; the empty prefix yields every entry.
    ///
    /// # Examples
    ///
    /// ```
    /// # use asuggest::PrefixIndex;
    /// let mut index = PrefixIndex::new();
    /// index.insert("application", 2);
    /// index.insert("apple", 1);
    /// index.insert("app", 0);
    /// index.insert("banana", 3);
    ///
    /// let mut iter = index.prefix_iter("app");
    /// assert_eq!(iter.next(), Some((b"app".to_vec(), &0)));
    /// assert_eq!(iter.next(), Some((b"apple".to_vec(), &1)));
    /// assert_eq!(iter.next(), Some((b"application".to_vec(), &2)));
    /// assert!(iter.next().is_none());
    /// ```
    pub fn prefix_iter<K: AsBytes>(&self, prefix: K) -> PrefixIter<'_, T> {
        let prefix_bytes = prefix.as_bytes_vec();

        let start = self
            .pool
            .descend(NodePool::ROOT, prefix_bytes.iter().copied());
        let iter = match start {
            Some(start) => self.pool.keys_and_indices(start, prefix_bytes),
            None => self.pool.no_keys(),
        };

        PrefixIter {
            data: &self.data,
            iter,
        }
    }

    /// Returns an iterator over all keys that start with the given prefix.
    pub fn prefix_keys<K: AsBytes>(&self, prefix: K) -> PrefixKeys<'_, T> {
        PrefixKeys {
            inner: self.prefix_iter(prefix),
        }
    }

    /// Returns an iterator over all values whose keys start with the given prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use asuggest::PrefixIndex;
    /// let mut index = PrefixIndex::new();
    /// index.insert("access-list", 1);
    /// index.insert("address", 2);
    /// index.insert("family", 3);
    ///
    /// let values: Vec<_> = index.prefix_values("a").collect();
    /// assert_eq!(values, vec![&1, &2]);
    /// ```
    pub fn prefix_values<K: AsBytes>(&self, prefix: K) -> PrefixValues<'_, T> {
        PrefixValues {
            inner: self.prefix_iter(prefix),
        }
    }

    /// Returns `true` if any stored key starts with `prefix`.
    ///
    /// Every node in the trie either carries a value or has a descendant
    /// that does, so reaching the prefix's node is enough.
    pub fn has_prefix<K: AsBytes>(&self, prefix: K) -> bool {
        match self.pool.descend(NodePool::ROOT, prefix.as_bytes()) {
            Some(node_id) => {
                self.pool.get_node(node_id).data_idx.is_some() || self.pool.has_children(node_id)
            }
            None => false,
        }
    }

    /// Finds the longest stored key that is a prefix of `key`.
    ///
    /// Returns the length in bytes of that stored key together with its value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use asuggest::PrefixIndex;
    /// let mut index = PrefixIndex::new();
    /// index.insert("inet", 1);
    /// index.insert("in", 0);
    ///
    /// assert_eq!(index.longest_prefix("inet6"), Some((4, &1)));
    /// assert_eq!(index.longest_prefix("ine"), Some((2, &0)));
    /// assert_eq!(index.longest_prefix("x"), None);
    /// ```
    pub fn longest_prefix<K: AsBytes>(&self, key: K) -> Option<(usize, &T)> {
        let mut current_id = NodePool::ROOT;
        let mut best = self
            .pool
            .get_node(current_id)
            .data_idx
            .map(|idx| (0, idx));

        for (depth, byte) in key.as_bytes().enumerate() {
            match self.pool.get_child_idx(current_id, byte) {
                Some(child) => current_id = child,
                None => break,
            }
            if let Some(idx) = self.pool.get_node(current_id).data_idx {
                best = Some((depth + 1, idx));
            }
        }

        best.map(|(len, idx)| (len, &self.data[idx]))
    }
}
