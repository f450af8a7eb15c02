use crate::{PrefixIndex, node_pool::KeysAndDataIdx};

/// An iterator over the key-value pairs of a `PrefixIndex` whose keys start
/// with a given prefix, in ascending key order.
///
/// This struct is created by the [`prefix_iter`] and [`iter`] methods on
/// [`PrefixIndex`]. The traversal is lazy; cloning the iterator yields an
/// independent cursor at the same position.
///
/// [`prefix_iter`]: PrefixIndex::prefix_iter
/// [`iter`]: PrefixIndex::iter
pub struct PrefixIter<'a, T> {
    pub(crate) data: &'a [T],
    pub(crate) iter: KeysAndDataIdx<'a>,
}

impl<T> Clone for PrefixIter<'_, T> {
    fn clone(&self) -> Self {
        PrefixIter {
            data: self.data,
            iter: self.iter.clone(),
        }
    }
}

impl<'a, T> Iterator for PrefixIter<'a, T> {
    type Item = (Vec<u8>, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter
            .next()
            .map(|(key, data_idx)| (key, &self.data[data_idx]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.data.len())) // Conservative estimate
    }
}

impl<T> std::iter::FusedIterator for PrefixIter<'_, T> {}

/// Iterator for keys that start with a specific prefix.
pub struct PrefixKeys<'a, T> {
    pub(crate) inner: PrefixIter<'a, T>,
}

impl<T> Clone for PrefixKeys<'_, T> {
    fn clone(&self) -> Self {
        PrefixKeys {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Iterator for PrefixKeys<'_, T> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Iterator for values that have keys starting with a specific prefix.
pub struct PrefixValues<'a, T> {
    pub(crate) inner: PrefixIter<'a, T>,
}

impl<T> Clone for PrefixValues<'_, T> {
    fn clone(&self) -> Self {
        PrefixValues {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for PrefixValues<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> IntoIterator for &'a PrefixIndex<T> {
    type Item = (Vec<u8>, &'a T);
    type IntoIter = PrefixIter<'a, T>;

    /// Returns an iterator over references to the key-value pairs of the index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use asuggest::PrefixIndex;
    /// let mut index = PrefixIndex::new();
    /// index.insert("b", 2);
    /// index.insert("a", 1);
    ///
    /// let pairs: Vec<_> = (&index).into_iter().collect();
    /// assert_eq!(pairs, vec![(b"a".to_vec(), &1), (b"b".to_vec(), &2)]);
    /// ```
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
