//! Reading spools out of byte streams.

use std::io;
use std::io::BufRead;
use std::io::Read;

use crate::Spool;

/// Reads one line from `input` into a fresh [`Spool`].
///
/// The line is everything up to the next `\n`, which is consumed and
/// discarded but not included. At end of input the line is whatever bytes
/// remain, so an empty result doubles as the natural stop signal for
/// callers draining an interactive stream.
///
/// ```
/// # use bytespool::*;
/// let mut input = &b"alpha\nbeta"[..];
/// assert_eq!(read_line(&mut input).unwrap(), "alpha");
/// assert_eq!(read_line(&mut input).unwrap(), "beta");
/// assert_eq!(read_line(&mut input).unwrap(), "");
/// ```
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Spool> {
  let mut line = Spool::new();
  for byte in input.by_ref().bytes() {
    let byte = byte?;
    if byte == b'\n' {
      break;
    }

    line.push(byte);
  }

  Ok(line)
}

/// Returns an iterator over the lines of `input`, as spools.
///
/// Unlike bare [`read_line()`] calls, the iterator distinguishes a blank
/// line from the end of input: the former is yielded as an empty spool,
/// the latter ends the iteration.
///
/// ```
/// # use bytespool::*;
/// let input = &b"one\n\ntwo\n"[..];
/// let all: Vec<_> = lines(input).collect::<Result<_, _>>().unwrap();
/// assert_eq!(all, [Spool::from("one"), Spool::from(""), Spool::from("two")]);
/// ```
pub fn lines<R: BufRead>(input: R) -> Lines<R> {
  Lines { input }
}

/// The iterator returned by [`lines()`].
pub struct Lines<R> {
  input: R,
}

impl<R: BufRead> Iterator for Lines<R> {
  type Item = io::Result<Spool>;

  fn next(&mut self) -> Option<Self::Item> {
    let at_eof = match self.input.fill_buf() {
      Ok(buf) => buf.is_empty(),
      Err(e) => return Some(Err(e)),
    };

    if at_eof {
      return None;
    }

    Some(read_line(&mut self.input))
  }
}
