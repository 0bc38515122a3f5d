use criterion::{criterion_group, criterion_main, Criterion};
use image::{DynamicImage, Rgba, RgbaImage};
use std::io::Read;
use stegvault_core::media::image::{extract_bits, LsbCodec};
use stegvault_core::{CarrierImage, CodecOptions};

pub fn image_decoding(c: &mut Criterion) {
    let img = RgbaImage::from_fn(512, 512, |x, y| Rgba([x as u8, y as u8, 42, 255]));
    let img = CarrierImage::from_image(DynamicImage::ImageRgba8(img));

    c.bench_function("Image Decoding", |b| {
        let mut buf = [0; 13];

        b.iter(|| {
            LsbCodec::decoder(&img, &CodecOptions::default())
                .read_exact(&mut buf)
                .expect("Failed to read 13 bytes");
        })
    });

    c.bench_function("Envelope Header Extraction", |b| {
        b.iter(|| {
            extract_bits(&img, &CodecOptions::default(), 0, 65 * 8)
                .expect("Failed to extract the header region");
        })
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
