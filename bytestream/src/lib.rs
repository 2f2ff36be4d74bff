//! Bounded byte primitives for the gw2link chat-link codec.
//!
//! This crate provides [`ByteWriter`] and [`ByteReader`] for the fixed-width,
//! little-endian fields that make up a chat-link record.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Records are assembled field by field, never by
//!   reinterpreting memory.
//! - **Bounded operations** - All reads are bounds-checked.
//! - **No domain knowledge** - This crate knows nothing about headers, items, or links.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use bytestream::{ByteReader, ByteWriter};
//!
//! let mut writer = ByteWriter::new();
//! writer.write_u8(2);
//! writer.write_u24_le(46_762).unwrap();
//!
//! let bytes = writer.finish();
//!
//! let mut reader = ByteReader::new(&bytes);
//! assert_eq!(reader.read_u8().unwrap(), 2);
//! assert_eq!(reader.read_u24_le().unwrap(), 46_762);
//! ```

mod error;
mod reader;
mod writer;

pub use error::{ByteError, ByteResult};
pub use reader::ByteReader;
pub use writer::{ByteWriter, U24_MAX};
