//! Byte-counting reader and writer wrappers for pacer.
//!
//! The wrappers move data through unchanged and record how many bytes went
//! by in a shared [`ByteCounter`], which a sampler can observe while the
//! transfer runs:
//!
//! - [`ByteCounter`] - Shared atomic byte count
//! - [`CountingReader`] - Counts bytes read, sync or async
//! - [`CountingWriter`] - Counts bytes written, sync or async

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/pacer/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod counter;
mod reader;
mod writer;

pub use counter::ByteCounter;
pub use reader::CountingReader;
pub use writer::CountingWriter;
