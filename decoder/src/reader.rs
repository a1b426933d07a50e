use crate::ErrorKind;

/// Bounds-checked cursor over an instruction stream.
///
/// Every read either succeeds and advances, or fails and leaves the position where it was.
#[derive(Debug, Clone)]
pub struct Reader<'data> {
    data: &'data [u8],
    position: usize,
    mark: usize,
}

impl<'data> Reader<'data> {
    pub fn new(data: &'data [u8]) -> Self {
        Self {
            data,
            position: 0,
            mark: 0,
        }
    }

    #[inline]
    pub fn next(&mut self) -> Option<u8> {
        let byte = *self.data.get(self.position)?;
        self.position += 1;
        Some(byte)
    }

    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.position).copied()
    }

    /// Byte `n` positions past the cursor, without consuming anything.
    #[inline]
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.data.get(self.position.checked_add(n)?).copied()
    }

    /// read `buf`-many items from this reader in bulk. if `Reader` cannot read `buf`-many items,
    /// nothing is consumed and `None` is returned.
    #[inline]
    pub fn next_n(&mut self, buf: &mut [u8]) -> Option<()> {
        let end = self.position.checked_add(buf.len())?;
        let src = self.data.get(self.position..end)?;
        buf.copy_from_slice(src);
        self.position = end;
        Some(())
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8, ErrorKind> {
        self.next().ok_or(ErrorKind::ExhaustedInput)
    }

    #[inline]
    pub fn read_u16(&mut self) -> Result<u16, ErrorKind> {
        let mut buf = [0u8; 2];
        self.next_n(&mut buf).ok_or(ErrorKind::ExhaustedInput)?;
        Ok(u16::from_le_bytes(buf))
    }

    #[inline]
    pub fn read_u32(&mut self) -> Result<u32, ErrorKind> {
        let mut buf = [0u8; 4];
        self.next_n(&mut buf).ok_or(ErrorKind::ExhaustedInput)?;
        Ok(u32::from_le_bytes(buf))
    }

    #[inline]
    pub fn read_u64(&mut self) -> Result<u64, ErrorKind> {
        let mut buf = [0u8; 8];
        self.next_n(&mut buf).ok_or(ErrorKind::ExhaustedInput)?;
        Ok(u64::from_le_bytes(buf))
    }

    /// mark the current position as where to measure `offset` against.
    #[inline]
    pub fn mark(&mut self) {
        self.mark = self.position;
    }

    /// the difference, between the current `Reader` position and its last `mark`.
    /// when created, a `Reader`'s initial position is `mark`ed, so creating a `Reader` and
    /// immediately calling `offset()` must return 0.
    #[inline]
    pub fn offset(&self) -> usize {
        self.position - self.mark
    }

    /// the difference, between the current `Reader` position and the initial offset
    /// when constructed.
    #[inline]
    pub fn total_offset(&self) -> usize {
        self.position
    }

    /// Move the cursor to an absolute offset, clamped to the end of the data.
    pub fn seek(&mut self, offset: usize) {
        self.position = offset.min(self.data.len());
        self.mark = self.position;
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Bytes between the last `mark` and the current position.
    pub fn marked(&self) -> &'data [u8] {
        &self.data[self.mark..self.position]
    }
}
