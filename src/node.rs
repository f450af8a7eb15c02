#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct TrieNodeIdx(pub(crate) usize);

#[derive(Clone, Debug)]
pub(crate) struct TrieNode {
    /// One bit per child byte.
    pub(crate) is_present: [u64; 4],
    /// Children ordered by byte; position `i` belongs to the `i`-th set bit.
    pub(crate) children: Vec<TrieNodeIdx>,
    pub(crate) data_idx: Option<usize>,
}

impl TrieNode {
    pub(crate) fn new() -> Self {
        TrieNode {
            is_present: [0; 4],
            children: Vec::new(),
            data_idx: None,
        }
    }

    pub(crate) fn child_len(&self) -> usize {
        self.children.len()
    }

    /// Child indices paired with the byte leading to them, in ascending byte order.
    pub(crate) fn edges(&self) -> impl DoubleEndedIterator<Item = (u8, TrieNodeIdx)> + '_ {
        PresentBytes::new(&self.is_present).zip(self.children.iter().copied())
    }
}

// Bit manipulation utilities
pub(crate) fn set_bit(a: &mut [u64; 4], k: u8) {
    a[(k / 64) as usize] |= 1u64 << (k % 64);
}

pub(crate) fn test_bit(a: &[u64; 4], k: u8) -> bool {
    (a[(k / 64) as usize] >> (k % 64)) & 0x01 != 0
}

/// Number of set bits strictly below `k`.
pub(crate) fn popcount(a: &[u64; 4], k: u8) -> usize {
    let word = (k / 64) as usize;
    let below: u32 = a[..word].iter().map(|w| w.count_ones()).sum();
    let mask = (1u64 << (k % 64)) - 1;
    (below + (a[word] & mask).count_ones()) as usize
}

/// Iterates the set bits of a 256-bit bitmap as bytes, from either end.
#[derive(Clone)]
pub(crate) struct PresentBytes {
    words: [u64; 4],
    front: usize,
    back: usize,
}

impl PresentBytes {
    pub(crate) fn new(a: &[u64; 4]) -> Self {
        PresentBytes {
            words: *a,
            front: 0,
            back: 4,
        }
    }
}

impl Iterator for PresentBytes {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        while self.front < self.back {
            let w = &mut self.words[self.front];
            if *w != 0 {
                let bit = w.trailing_zeros();
                *w &= *w - 1;
                return Some((self.front as u32 * 64 + bit) as u8);
            }
            self.front += 1;
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.words[self.front..self.back]
            .iter()
            .map(|w| w.count_ones() as usize)
            .sum();
        (n, Some(n))
    }
}

impl DoubleEndedIterator for PresentBytes {
    fn next_back(&mut self) -> Option<u8> {
        while self.front < self.back {
            let w = &mut self.words[self.back - 1];
            if *w != 0 {
                let bit = 63 - w.leading_zeros();
                *w &= !(1u64 << bit);
                return Some(((self.back - 1) as u32 * 64 + bit) as u8);
            }
            self.back -= 1;
        }
        None
    }
}

impl ExactSizeIterator for PresentBytes {}
