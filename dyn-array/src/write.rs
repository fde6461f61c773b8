use crate::*;
use std::io;

/// Write is implemented for `DynArray<u8>` by pushing each byte.
/// The array grows by the usual policy as needed.
impl io::Write for DynArray<u8> {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.extend(buf.iter().copied());
        Ok(buf.len())
    }

    #[inline]
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.extend(buf.iter().copied());
        Ok(())
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_write_grows() {
        let mut arr: DynArray<u8> = DynArray::with_capacity(2).unwrap();
        write!(arr, "hello").unwrap();
        assert_eq!(arr, *b"hello");
        assert!(arr.capacity() > 5);
    }
}
