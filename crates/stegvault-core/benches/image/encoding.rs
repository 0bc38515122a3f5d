use criterion::{criterion_group, criterion_main, Criterion};
use image::{DynamicImage, Rgba, RgbaImage};
use std::io::Write;
use stegvault_core::media::image::LsbCodec;
use stegvault_core::{CarrierImage, CodecOptions};

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding", |b| {
        let img = RgbaImage::from_fn(512, 512, |x, y| Rgba([x as u8, y as u8, 42, 255]));
        let mut plain_image = CarrierImage::from_image(DynamicImage::ImageRgba8(img));
        let secret_message = b"Hello World!";

        b.iter(|| {
            LsbCodec::encoder(&mut plain_image, &CodecOptions::default())
                .write_all(&secret_message[..])
                .expect("Cannot write secret message");
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
