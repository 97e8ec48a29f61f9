use criterion::{criterion_group, criterion_main, Criterion};
use pixelveil_core::media::image::decoder::ImageColors;
use pixelveil_core::media::image::{DwtCodec, LsbCodec, StegoCodec};
use pixelveil_core::universal_decoder::{Decoder, OneBitUnveil};
use pixelveil_core::RawImage;
use std::io::Read;

fn carrier() -> RawImage {
    RawImage::from_fn(256, 256, 3, |x, y, c| {
        ((x * 7 + y * 13 + c as u32 * 31) % 200 + 28) as u8
    })
    .expect("Carrier image is not valid.")
}

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let img = LsbCodec
            .hide(&carrier(), "Hello World!", None)
            .expect("Cannot hide secret message");
        let mut buf = [0; 13];

        b.iter(|| {
            Decoder::new(ImageColors::new(&img), OneBitUnveil)
                .read_exact(&mut buf)
                .expect("Failed to read 13 bytes");
        })
    });

    c.bench_function("DWT Unveil", |b| {
        let img = DwtCodec::default()
            .hide(&carrier(), "Hello World!", Some("Secret42"))
            .expect("Cannot hide secret message");

        b.iter(|| {
            DwtCodec::default()
                .unveil(&img, Some("Secret42"))
                .expect("Failed to unveil the message")
        })
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
