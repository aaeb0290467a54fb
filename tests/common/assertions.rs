//! Assertion helpers for tests.

use std::io::Cursor;

use northlight::encoding::PNG_SIGNATURE;
use palette_reducer::{Raster, Rgba, RgbaImage};
use pretty_assertions::assert_eq;

/// One decoded APNG frame with its frame control values
pub struct DecodedFrame {
    pub image: RgbaImage,
    pub sequence: u32,
    pub delay_num: u16,
    pub delay_den: u16,
}

/// A decoded APNG
pub struct DecodedAnimation {
    pub num_plays: u32,
    pub frames: Vec<DecodedFrame>,
}

/// Decode `bytes` as an APNG with the `png` crate, asserting it is well formed
pub fn decode_apng(bytes: &[u8]) -> DecodedAnimation {
    assert!(
        bytes.starts_with(&PNG_SIGNATURE),
        "Expected PNG signature, got {:?}",
        &bytes[..8.min(bytes.len())]
    );

    let decoder = png::Decoder::new(Cursor::new(bytes));
    let mut reader = decoder.read_info().expect("Should parse PNG header");
    let (width, height) = (reader.info().width, reader.info().height);
    let (num_frames, num_plays) = {
        let control = reader
            .info()
            .animation_control
            .as_ref()
            .expect("Should have an acTL chunk");
        (control.num_frames, control.num_plays)
    };

    let mut frames = Vec::new();
    for _ in 0..num_frames {
        let mut buf = vec![0; reader.output_buffer_size()];
        let output = reader.next_frame(&mut buf).expect("Should decode frame");
        assert_eq!(output.color_type, png::ColorType::Rgba);
        assert_eq!(output.bit_depth, png::BitDepth::Eight);

        let fctl = reader
            .info()
            .frame_control
            .as_ref()
            .expect("Should have an fcTL chunk");
        assert_eq!((fctl.width, fctl.height), (width, height));
        assert_eq!((fctl.x_offset, fctl.y_offset), (0, 0));

        let image = RgbaImage::from_rgba8(
            width as usize,
            height as usize,
            &buf[..output.buffer_size()],
        )
        .expect("Decoded frame should match header size");
        frames.push(DecodedFrame {
            image,
            sequence: fctl.sequence_number,
            delay_num: fctl.delay_num,
            delay_den: fctl.delay_den,
        });
    }

    DecodedAnimation {
        num_plays,
        frames,
    }
}

/// Assert every pixel of `image` is one of `palette`
pub fn assert_palette_only(image: &RgbaImage, palette: &[Rgba]) {
    for y in 0..image.height() {
        for x in 0..image.width() {
            let p = image.pixel(x, y);
            assert!(
                palette.contains(&p),
                "Pixel ({x}, {y}) is {p}, not in palette {palette:?}"
            );
        }
    }
}

/// Flip an image vertically
pub fn flipped(image: &RgbaImage) -> RgbaImage {
    let height = image.height();
    RgbaImage::from_fn(image.width(), height, |x, y| image.pixel(x, height - 1 - y))
}
