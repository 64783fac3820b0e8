//! `bytespool` - Growable hyper-compact byte strings.
//!
//! A [`Spool`] is an owned, append-friendly byte string with a storage
//! optimization: content up to [`Spool::INLINE_LEN`] bytes (7 on 64-bit
//! architectures) is packed directly into the value itself, so short
//! strings never touch the heap. Longer content lives in an exclusively
//! owned block that grows by doubling, and the backing store always keeps
//! a zero terminator one past the content, so a spool can be handed to
//! anything expecting a classic zero-terminated byte string via
//! [`Spool::as_bytes_with_nul()`].
//!
//! ```
//! # use bytespool::*;
//! let mut spool = spool!("Answer: {}", 42);
//! assert_eq!(spool, "Answer: 42");
//!
//! spool.push_str("!!");
//! assert_eq!(spool.len(), 12);
//! ```
//!
//! Spools are plain value types: cloning is a deep copy, moving transfers
//! the heap block, and byte-wise comparison gives the total order you'd
//! sort with:
//!
//! ```
//! # use bytespool::*;
//! let mut fruit = vec![spool!("banana"), spool!("apple"), spool!("cherry")];
//! fruit.sort_unstable_by(|a, b| b.cmp(a));
//! assert_eq!(fruit, [spool!("cherry"), spool!("banana"), spool!("apple")]);
//! ```
//!
//! Spools hold bytes, not necessarily text; the `Debug` and `Display`
//! impls decode UTF-8 where they can and fall back to `\xNN` escapes or
//! replacement characters where they can't.
//!
//! ```
//! # use bytespool::*;
//! let invalid = Spool::from_byte(0xff);
//! assert_eq!(format!("{invalid:?}"), r#""\xFF""#);
//! assert_eq!(format!("{invalid}"), "�");
//! ```

#![deny(missing_docs)]

mod convert;
mod io;
mod raw;
mod spool;
mod utf8;

pub use crate::io::lines;
pub use crate::io::read_line;
pub use crate::io::Lines;
pub use crate::spool::Spool;
pub use crate::utf8::Utf8Chunks;

// Macro stuff.
#[doc(hidden)]
pub mod m {
  pub extern crate std;
}

/// Similar to [`format!()`], but returns a [`Spool`], instead.
///
/// This macro calls out to [`Spool::from_fmt()`] internally.
#[macro_export]
macro_rules! spool {
  ($($args:tt)*) => {
    $crate::Spool::from_fmt($crate::m::std::format_args!($($args)*))
  };
}
