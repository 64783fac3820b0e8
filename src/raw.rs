use std::cmp;
use std::mem;

/// The core implementation of spools.
///
/// This type owns the dual representation and the growth rule; the public
/// [`Spool`][crate::Spool] wrapper is a thin veneer over it. The backing
/// store always keeps a zero byte one past the content, in both variants,
/// so a C-style terminated view never requires a copy.
pub struct RawSpool {
  len: usize,
  store: Store,
}

/// Where the bytes live.
///
/// An explicit two-variant sum, so the inline slot and the owned block can
/// never be mistaken for one another. `Inline` reserves one byte past
/// `INLINE_LEN` for the terminator; `Heap` blocks are allocated one byte
/// longer than their capacity for the same reason.
enum Store {
  Inline([u8; INLINE_LEN + 1]),
  Heap(Box<[u8]>),
}

/// The number of content bytes that fit in the inline slot without
/// allocating. This is 3 on 32-bit and 7 on 64-bit.
pub const INLINE_LEN: usize = {
  let inline_len = mem::size_of::<*const u8>() - 1;
  assert!(
    inline_len >= 2,
    "spools are not supported on architectures with pointers this small"
  );

  inline_len
};

#[test]
fn fits_in_four_words() {
  assert!(mem::size_of::<RawSpool>() <= mem::size_of::<usize>() * 4);
}

impl RawSpool {
  /// Returns an empty spool, in the inline representation.
  pub const fn new() -> Self {
    Self {
      len: 0,
      store: Store::Inline([0; INLINE_LEN + 1]),
    }
  }

  /// Returns a spool with `len` content bytes, all zero.
  ///
  /// Allocates only when the requested size does not fit the inline slot,
  /// in which case the block is sized exactly, with no spare capacity.
  pub fn zeroed(len: usize) -> Self {
    if len <= INLINE_LEN {
      return Self {
        len,
        store: Store::Inline([0; INLINE_LEN + 1]),
      };
    }

    Self {
      len,
      store: Store::Heap(vec![0; len + 1].into_boxed_slice()),
    }
  }

  /// Returns a spool holding a copy of `bytes`.
  pub fn from_slice(bytes: &[u8]) -> Self {
    let mut spool = Self::zeroed(bytes.len());
    spool.as_mut_slice().copy_from_slice(bytes);
    spool
  }

  /// Returns a spool that adopts `bytes` as its backing block, unless the
  /// content fits inline, in which case the allocation is dropped.
  pub fn from_vec(mut bytes: Vec<u8>) -> Self {
    if bytes.len() <= INLINE_LEN {
      return Self::from_slice(&bytes);
    }

    let len = bytes.len();
    bytes.reserve_exact(1);
    bytes.push(0);
    Self {
      len,
      store: Store::Heap(bytes.into_boxed_slice()),
    }
  }

  /// Returns the number of content bytes.
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Checks whether there are no content bytes.
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Returns the number of content bytes the current store can hold
  /// without reallocating.
  pub fn capacity(&self) -> usize {
    match &self.store {
      Store::Inline(..) => INLINE_LEN,
      Store::Heap(block) => block.len() - 1,
    }
  }

  /// Returns whether the content lives in the inline slot.
  pub fn is_inline(&self) -> bool {
    matches!(self.store, Store::Inline(..))
  }

  /// Returns the content bytes.
  pub fn as_slice(&self) -> &[u8] {
    &self.bytes()[..self.len]
  }

  /// Returns the content bytes plus the zero terminator one past them.
  pub fn as_bytes_with_nul(&self) -> &[u8] {
    &self.bytes()[..self.len + 1]
  }

  /// Returns the content bytes, writable.
  pub fn as_mut_slice(&mut self) -> &mut [u8] {
    let len = self.len;
    &mut self.bytes_mut()[..len]
  }

  /// Appends `bytes` to the content.
  ///
  /// When the current capacity cannot take them, the store grows to
  /// `max(capacity * 2, len + count)` first: doubling amortizes the
  /// reallocation cost, and the exact floor guarantees a single growth
  /// step per append.
  pub fn push_bytes(&mut self, bytes: &[u8]) {
    if bytes.is_empty() {
      return;
    }

    assert!(
      bytes.len() <= usize::MAX - self.len,
      "spool cannot grow past usize::MAX bytes"
    );

    let len = self.len;
    let new_len = len + bytes.len();
    if new_len > self.capacity() {
      self.grow(cmp::max(self.capacity() * 2, new_len));
    }

    self.bytes_mut()[len..new_len].copy_from_slice(bytes);
    self.len = new_len;
    self.bytes_mut()[new_len] = 0;
  }

  /// Rebuilds this spool as a copy of `bytes`, reusing the current store
  /// when its capacity suffices.
  pub fn assign(&mut self, bytes: &[u8]) {
    if bytes.len() > self.capacity() {
      *self = Self::from_slice(bytes);
      return;
    }

    self.len = bytes.len();
    self.bytes_mut()[..bytes.len()].copy_from_slice(bytes);
    self.bytes_mut()[bytes.len()] = 0;
  }

  /// Takes the content out of this spool, leaving it empty and inline.
  pub fn take(&mut self) -> Self {
    mem::replace(self, Self::new())
  }

  /// Releases any heap block and resets to the empty inline form.
  /// Idempotent.
  pub fn clear(&mut self) {
    self.len = 0;
    self.store = Store::Inline([0; INLINE_LEN + 1]);
  }

  /// Unwraps this spool into a `Vec`, reusing the heap block when there is
  /// one by truncating away the terminator.
  pub fn into_vec(self) -> Vec<u8> {
    match self.store {
      Store::Inline(slot) => slot[..self.len].to_vec(),
      Store::Heap(block) => {
        let mut vec = Vec::from(block);
        vec.truncate(self.len);
        vec
      }
    }
  }

  /// Reallocates to hold `new_cap` content bytes, preserving the content.
  ///
  /// Growth always lands on the heap: a growth target never fits the
  /// inline slot, and a heap spool never shrinks back into one.
  fn grow(&mut self, new_cap: usize) {
    debug_assert!(new_cap > self.len);

    let mut block = vec![0; new_cap + 1].into_boxed_slice();
    block[..self.len].copy_from_slice(self.as_slice());
    self.store = Store::Heap(block);
  }

  /// Returns the whole backing store, terminator slot included.
  fn bytes(&self) -> &[u8] {
    match &self.store {
      Store::Inline(slot) => slot,
      Store::Heap(block) => block,
    }
  }

  fn bytes_mut(&mut self) -> &mut [u8] {
    match &mut self.store {
      Store::Inline(slot) => slot,
      Store::Heap(block) => block,
    }
  }
}
