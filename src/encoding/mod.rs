//! PNG container output: chunk framing, Paeth filtering and the animated
//! PNG encoder built on them.

pub mod apng;
pub mod chunk;
pub mod paeth;

pub use apng::{ApngEncoder, DEFAULT_COMPRESSION, PNG_SIGNATURE};
pub use chunk::ChunkBuffer;
