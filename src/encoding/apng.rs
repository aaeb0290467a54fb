//! Animated PNG writer.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use palette_reducer::raster::row_bytes;
use palette_reducer::Raster;

use super::chunk::ChunkBuffer;
use super::paeth;
use crate::error::EncodeError;

/// The 8-byte signature that opens every PNG file.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

const BYTES_PER_PIXEL: usize = 4;

/// Largest width or height a PNG header may declare.
const MAX_DIMENSION: usize = (1 << 31) - 1;

/// Default zlib level.
pub const DEFAULT_COMPRESSION: u32 = 6;

/// Writes a sequence of same-sized frames as a looping APNG.
///
/// Every frame is stored whole (no sub-rectangles), as 8-bit RGBA with
/// every scanline Paeth filtered. Frame 0 is the default image in `IDAT`,
/// so viewers without APNG support show the first frame.
///
/// The encoder keeps its chunk buffer, deflate stream and row buffers
/// between calls. Reuse one instance for many files, but not from several
/// threads at once.
pub struct ApngEncoder {
    chunk: ChunkBuffer,
    deflate: ZlibEncoder<Vec<u8>>,
    prev_row: Vec<u8>,
    cur_row: Vec<u8>,
    filtered: Vec<u8>,
    flip_y: bool,
    level: u32,
}

impl Default for ApngEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ApngEncoder {
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create an encoder whose chunk buffer starts with `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chunk: ChunkBuffer::with_capacity(capacity),
            deflate: ZlibEncoder::new(
                Vec::with_capacity(capacity),
                Compression::new(DEFAULT_COMPRESSION),
            ),
            prev_row: Vec::new(),
            cur_row: Vec::new(),
            filtered: Vec::new(),
            flip_y: false,
            level: DEFAULT_COMPRESSION,
        }
    }

    /// Write rows bottom-up, for rasters stored with y pointing up.
    pub fn flip_y(mut self, flip: bool) -> Self {
        self.flip_y = flip;
        self
    }

    /// Set the zlib level, 0 (store) to 9 (smallest). Larger values clamp
    /// to 9.
    pub fn compression(mut self, level: u32) -> Self {
        self.level = level.min(9);
        self.deflate = ZlibEncoder::new(Vec::new(), Compression::new(self.level));
        self
    }

    pub fn compression_level(&self) -> u32 {
        self.level
    }

    pub fn flips_y(&self) -> bool {
        self.flip_y
    }

    /// Encode `frames` as an animation playing at `fps` frames per second
    /// and looping forever, then flush `sink`.
    ///
    /// All frames must share frame 0's size. Nothing is written unless the
    /// whole sequence is valid, but an I/O error part way leaves `sink`
    /// holding a truncated file.
    pub fn write<W: Write, R: Raster>(
        &mut self,
        mut sink: W,
        frames: &[R],
        fps: u16,
    ) -> Result<(), EncodeError> {
        let (width, height) = validate(frames, fps)?;

        sink.write_all(&PNG_SIGNATURE)?;

        self.chunk.begin(b"IHDR");
        self.chunk.write_u32(width as u32);
        self.chunk.write_u32(height as u32);
        self.chunk.write_u8(8); // bit depth
        self.chunk.write_u8(6); // color type: RGBA
        self.chunk.write_u8(0); // compression
        self.chunk.write_u8(0); // filter
        self.chunk.write_u8(0); // interlace
        self.chunk.end_chunk(&mut sink)?;

        self.chunk.begin(b"acTL");
        self.chunk.write_u32(frames.len() as u32);
        self.chunk.write_u32(0); // loop forever
        self.chunk.end_chunk(&mut sink)?;

        let mut sequence = 0u32;
        for (index, frame) in frames.iter().enumerate() {
            self.chunk.begin(b"fcTL");
            self.chunk.write_u32(sequence);
            self.chunk.write_u32(width as u32);
            self.chunk.write_u32(height as u32);
            self.chunk.write_u32(0); // x offset
            self.chunk.write_u32(0); // y offset
            self.chunk.write_u16(1); // delay numerator
            self.chunk.write_u16(fps); // delay denominator
            self.chunk.write_u8(0); // dispose: none
            self.chunk.write_u8(0); // blend: source
            self.chunk.end_chunk(&mut sink)?;
            sequence += 1;

            if index == 0 {
                self.chunk.begin(b"IDAT");
            } else {
                self.chunk.begin(b"fdAT");
                self.chunk.write_u32(sequence);
                sequence += 1;
            }
            self.compress_frame(frame)?;
            self.chunk.write_all(self.deflate.get_ref())?;
            self.chunk.end_chunk(&mut sink)?;
        }

        self.chunk.begin(b"IEND");
        self.chunk.end_chunk(&mut sink)?;
        sink.flush()?;

        tracing::debug!(
            frames = frames.len(),
            width,
            height,
            fps,
            level = self.level,
            "Encoded APNG"
        );
        Ok(())
    }

    /// Filter and deflate one frame. The finished zlib stream is left in
    /// the deflate writer.
    fn compress_frame(&mut self, frame: &dyn Raster) -> std::io::Result<()> {
        let width = frame.width();
        let height = frame.height();
        let stride = width * BYTES_PER_PIXEL;
        self.grow_rows(stride);

        // Fresh zlib stream, reusing the previous frame's output allocation
        let mut spare = self.deflate.reset(Vec::new())?;
        spare.clear();
        *self.deflate.get_mut() = spare;

        self.prev_row[..stride].fill(0);
        for y in 0..height {
            let source_y = if self.flip_y { height - 1 - y } else { y };
            row_bytes(frame, source_y, &mut self.cur_row[..stride]);
            paeth::filter_row(
                &self.cur_row[..stride],
                &self.prev_row[..stride],
                BYTES_PER_PIXEL,
                &mut self.filtered[..stride],
            );
            self.deflate.write_all(&[paeth::FILTER_TYPE])?;
            self.deflate.write_all(&self.filtered[..stride])?;
            std::mem::swap(&mut self.prev_row, &mut self.cur_row);
        }
        self.deflate.try_finish()
    }

    fn grow_rows(&mut self, stride: usize) {
        for row in [&mut self.prev_row, &mut self.cur_row, &mut self.filtered] {
            if row.len() < stride {
                row.resize(stride, 0);
            }
        }
    }
}

/// Check the frame list before any byte is written. Returns the shared
/// frame size.
fn validate<R: Raster>(frames: &[R], fps: u16) -> Result<(usize, usize), EncodeError> {
    let first = frames.first().ok_or(EncodeError::NoFrames)?;
    if fps == 0 {
        return Err(EncodeError::InvalidFrameRate);
    }

    let expected = (first.width(), first.height());
    if expected.0 == 0 || expected.1 == 0 {
        return Err(EncodeError::EmptyFrame);
    }
    if expected.0 > MAX_DIMENSION || expected.1 > MAX_DIMENSION {
        return Err(EncodeError::FrameTooLarge {
            width: expected.0,
            height: expected.1,
        });
    }

    for (index, frame) in frames.iter().enumerate().skip(1) {
        let found = (frame.width(), frame.height());
        if found != expected {
            return Err(EncodeError::FrameSizeMismatch {
                index,
                expected,
                found,
            });
        }
    }
    Ok(expected)
}
