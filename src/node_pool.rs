use crate::node::{TrieNode, TrieNodeIdx, popcount, set_bit, test_bit};

/// Arena holding every node of a trie. The root always lives at index 0.
#[derive(Clone, Debug)]
pub(crate) struct NodePool {
    pub(crate) nodes: Vec<TrieNode>,
}

impl NodePool {
    pub(crate) const ROOT: TrieNodeIdx = TrieNodeIdx(0);

    /// Creates a pool containing only an empty root
    pub(crate) fn new() -> Self {
        NodePool {
            nodes: vec![TrieNode::new()],
        }
    }

    /// Drops every node except a fresh root
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.nodes.push(TrieNode::new());
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit();
    }

    #[inline(always)]
    pub(crate) fn get_node(&self, idx: TrieNodeIdx) -> &TrieNode {
        &self.nodes[idx.0]
    }

    #[inline(always)]
    pub(crate) fn get_node_mut(&mut self, idx: TrieNodeIdx) -> &mut TrieNode {
        &mut self.nodes[idx.0]
    }

    /// Gets the child node index for a given byte in a trie node
    #[inline(always)]
    pub(crate) fn get_child_idx(&self, node_idx: TrieNodeIdx, byte: u8) -> Option<TrieNodeIdx> {
        let node = self.get_node(node_idx);

        if !test_bit(&node.is_present, byte) {
            return None;
        }

        node.children
            .get(popcount(&node.is_present, byte))
            .copied()
    }

    /// Returns the child for `byte`, allocating an empty one if it is missing.
    pub(crate) fn get_or_add_child(&mut self, node_idx: TrieNodeIdx, byte: u8) -> TrieNodeIdx {
        if let Some(child) = self.get_child_idx(node_idx, byte) {
            return child;
        }

        let child = TrieNodeIdx(self.nodes.len());
        self.nodes.push(TrieNode::new());

        let node = self.get_node_mut(node_idx);
        let insert_pos = popcount(&node.is_present, byte);
        node.children.insert(insert_pos, child);
        set_bit(&mut node.is_present, byte);

        child
    }

    /// Follows `bytes` from `start`, stopping at the first missing edge.
    pub(crate) fn descend<I>(&self, start: TrieNodeIdx, bytes: I) -> Option<TrieNodeIdx>
    where
        I: IntoIterator<Item = u8>,
    {
        let mut current = start;
        for byte in bytes {
            current = self.get_child_idx(current, byte)?;
        }
        Some(current)
    }

    #[inline(always)]
    pub(crate) fn has_children(&self, node_idx: TrieNodeIdx) -> bool {
        self.get_node(node_idx).child_len() > 0
    }

    /// Pre-order walk below `start`, yielding `(key, data_idx)` for every
    /// node with a payload. `path` is the key spelled by `start`.
    pub(crate) fn keys_and_indices(&self, start: TrieNodeIdx, path: Vec<u8>) -> KeysAndDataIdx<'_> {
        KeysAndDataIdx {
            pool: self,
            stack: vec![(start, path)],
        }
    }

    /// A walk that yields nothing.
    pub(crate) fn no_keys(&self) -> KeysAndDataIdx<'_> {
        KeysAndDataIdx {
            pool: self,
            stack: Vec::new(),
        }
    }
}

#[derive(Clone)]
pub(crate) struct KeysAndDataIdx<'a> {
    pool: &'a NodePool,
    stack: Vec<(TrieNodeIdx, Vec<u8>)>, // Node index and complete path to node
}

impl Iterator for KeysAndDataIdx<'_> {
    type Item = (Vec<u8>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node_idx, path)) = self.stack.pop() {
            let node = self.pool.get_node(node_idx);

            // Reverse push so the smallest byte is popped first.
            for (byte, child_idx) in node.edges().rev() {
                let mut child_path = Vec::with_capacity(path.len() + 1);
                child_path.extend_from_slice(&path);
                child_path.push(byte);
                self.stack.push((child_idx, child_path));
            }

            if let Some(data_idx) = node.data_idx {
                return Some((path, data_idx));
            }
        }

        None
    }
}
