//! Length-prefixed, CRC-checked PNG chunks.

use std::io::{self, Write};

use crc32fast::Hasher;

/// Builds one PNG chunk at a time.
///
/// Bytes written after [`begin`](Self::begin) are collected together with
/// the tag and folded into a running CRC-32. [`end_chunk`](Self::end_chunk)
/// emits `length | tag | payload | crc` and resets both, so one buffer
/// serves every chunk of a file.
pub struct ChunkBuffer {
    buffer: Vec<u8>,
    crc: Hasher,
}

impl Default for ChunkBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkBuffer {
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            crc: Hasher::new(),
        }
    }

    /// Start a chunk with the 4-byte type code.
    ///
    /// Any bytes written since the last [`end_chunk`](Self::end_chunk) are
    /// discarded.
    pub fn begin(&mut self, tag: &[u8; 4]) {
        self.reset();
        self.append(tag);
    }

    pub fn write_u32(&mut self, value: u32) {
        self.append(&value.to_be_bytes());
    }

    pub fn write_u16(&mut self, value: u16) {
        self.append(&value.to_be_bytes());
    }

    pub fn write_u8(&mut self, value: u8) {
        self.append(&[value]);
    }

    /// Payload bytes written so far, not counting the tag.
    pub fn payload_len(&self) -> usize {
        self.buffer.len().saturating_sub(4)
    }

    /// Write the finished chunk to `sink` and reset for the next one.
    pub fn end_chunk(&mut self, sink: &mut impl Write) -> io::Result<()> {
        let length = self.payload_len() as u32;
        let crc = std::mem::take(&mut self.crc).finalize();
        sink.write_all(&length.to_be_bytes())?;
        sink.write_all(&self.buffer)?;
        sink.write_all(&crc.to_be_bytes())?;
        self.buffer.clear();
        Ok(())
    }

    fn append(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
        self.crc.update(bytes);
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.crc.reset();
    }
}

impl Write for ChunkBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
