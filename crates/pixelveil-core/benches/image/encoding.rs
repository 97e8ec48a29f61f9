use criterion::{criterion_group, criterion_main, Criterion};
use pixelveil_core::media::image::encoder::ImageColorsMut;
use pixelveil_core::media::image::{DwtCodec, StegoCodec};
use pixelveil_core::universal_encoder::{Encoder, OneBitHide};
use pixelveil_core::RawImage;
use std::io::Write;

fn carrier() -> RawImage {
    RawImage::from_fn(256, 256, 3, |x, y, c| {
        ((x * 7 + y * 13 + c as u32 * 31) % 200 + 28) as u8
    })
    .expect("Carrier image is not valid.")
}

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding", |b| {
        let mut plain_image = carrier();
        let secret_message = b"Hello World!";

        b.iter(|| {
            Encoder::new(ImageColorsMut::new(&mut plain_image), OneBitHide)
                .write_all(&secret_message[..])
                .expect("Cannot write secret message");
        })
    });

    c.bench_function("DWT Hide", |b| {
        let plain_image = carrier();

        b.iter(|| {
            DwtCodec::default()
                .hide(&plain_image, "Hello World!", Some("Secret42"))
                .expect("Cannot hide secret message")
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
