//! UTF-8 chunk iteration, for rendering byte content as text.

use std::str;

#[cfg(doc)]
use crate::*;

/// An iterator over the maximal UTF-8 runs in a byte buffer.
///
/// Bytes that do not form valid UTF-8 come out as `Err` chunks, one
/// rejected sequence at a time; everything else comes out as `Ok` string
/// slices.
///
/// See [`Spool::utf8_chunks()`].
#[derive(Copy, Clone)]
pub struct Utf8Chunks<'a> {
  rest: &'a [u8],
}

impl<'a> Utf8Chunks<'a> {
  pub(crate) fn new(buf: &'a [u8]) -> Self {
    Self { rest: buf }
  }

  /// Returns the part of the underlying buffer that has not been yielded.
  pub fn rest(self) -> &'a [u8] {
    self.rest
  }
}

impl<'a> Iterator for Utf8Chunks<'a> {
  type Item = Result<&'a str, &'a [u8]>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.rest.is_empty() {
      return None;
    }

    match str::from_utf8(self.rest) {
      Ok(utf8) => {
        self.rest = &[];
        Some(Ok(utf8))
      }

      Err(e) if e.valid_up_to() > 0 => {
        let (valid, rest) = self.rest.split_at(e.valid_up_to());
        self.rest = rest;

        let utf8 = match cfg!(debug_assertions) {
          true => str::from_utf8(valid).unwrap(),

          // SAFETY: valid_up_to() delimits valid UTF-8, by definition.
          false => unsafe { str::from_utf8_unchecked(valid) },
        };

        Some(Ok(utf8))
      }

      Err(e) => {
        // error_len() is None for an incomplete sequence at the end of the
        // buffer; that tail is one rejected chunk.
        let bad_len = match e.error_len() {
          Some(len) => len,
          None => self.rest.len(),
        };

        let (bad, rest) = self.rest.split_at(bad_len);
        self.rest = rest;
        Some(Err(bad))
      }
    }
  }
}

#[cfg(test)]
mod test {
  use super::*;

  fn chunks(buf: &[u8]) -> Vec<Result<&str, &[u8]>> {
    Utf8Chunks::new(buf).collect()
  }

  #[test]
  fn all_valid() {
    assert!(chunks(b"").is_empty());
    assert_eq!(chunks("猫 cat".as_bytes()), [Ok("猫 cat")]);
  }

  #[test]
  fn rejects_byte_by_byte() {
    assert_eq!(
      chunks(b"abc\xFF\xFE\xFFdef"),
      [
        Ok("abc"),
        Err(&[0xFF][..]),
        Err(&[0xFE][..]),
        Err(&[0xFF][..]),
        Ok("def"),
      ],
    );
  }

  #[test]
  fn incomplete_tail() {
    // The first two bytes of a three-byte sequence, cut short.
    assert_eq!(chunks(b"ok\xE7\x8C"), [Ok("ok"), Err(&b"\xE7\x8C"[..])]);
  }
}
