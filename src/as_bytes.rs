/// The `AsBytes` trait allows a type to be used as a key in a `PrefixIndex`.
///
/// Keys are stored as byte sequences. String keys use their UTF-8 encoding,
/// so byte order and Unicode code point order agree.
pub trait AsBytes {
    /// Yields the key's bytes in order.
    fn as_bytes(&self) -> impl Iterator<Item = u8>;

    fn as_bytes_vec(&self) -> Vec<u8> {
        self.as_bytes().collect()
    }
}

impl AsBytes for u8 {
    fn as_bytes(&self) -> impl Iterator<Item = u8> {
        Some(*self).into_iter()
    }
}

impl AsBytes for char {
    fn as_bytes(&self) -> impl Iterator<Item = u8> {
        let mut buf = [0u8; 4];
        let len = self.encode_utf8(&mut buf).len();
        buf.into_iter().take(len)
    }
}

impl AsBytes for [u8] {
    fn as_bytes(&self) -> impl Iterator<Item = u8> {
        self.iter().copied()
    }
}

impl AsBytes for Vec<u8> {
    fn as_bytes(&self) -> impl Iterator<Item = u8> {
        self.iter().copied()
    }
}

impl<const N: usize> AsBytes for [u8; N] {
    fn as_bytes(&self) -> impl Iterator<Item = u8> {
        self.iter().copied()
    }
}

impl AsBytes for str {
    fn as_bytes(&self) -> impl Iterator<Item = u8> {
        str::as_bytes(self).iter().copied()
    }
}

impl AsBytes for String {
    fn as_bytes(&self) -> impl Iterator<Item = u8> {
        self.as_str().as_bytes().iter().copied()
    }
}

impl<T: AsBytes + ?Sized> AsBytes for &T {
    fn as_bytes(&self) -> impl Iterator<Item = u8> {
        T::as_bytes(*self)
    }
}
