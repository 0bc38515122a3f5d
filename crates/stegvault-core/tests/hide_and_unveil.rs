use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, ImageBuffer, LumaA, Rgb, Rgba};
use tempfile::TempDir;

use stegvault_core::commands::{decrypt, encrypt};
use stegvault_core::*;

fn light() -> VaultOptions {
    VaultOptions::default().with_kdf_params(KdfParams::new(1024, 1, 1))
}

fn rgb_carrier(dir: &Path, name: &str, w: u32, h: u32) -> PathBuf {
    let file = dir.join(name);
    DynamicImage::ImageRgb8(ImageBuffer::from_fn(w, h, |x, y| {
        Rgb([(x * 3) as u8, (y * 5) as u8, (x + y) as u8])
    }))
    .save(&file)
    .unwrap();
    file
}

fn message(text: &str) -> Option<PayloadSource> {
    Some(PayloadSource::Message(text.to_string()))
}

#[test]
fn hello_world_round_trip_through_files() {
    let dir = TempDir::new().unwrap();
    let carrier = rgb_carrier(dir.path(), "carrier.png", 100, 100);

    let stego = encrypt(
        &carrier,
        &dir.path().join("stego.png"),
        message("hello world"),
        "correct-horse".into(),
        &light(),
    )
    .unwrap();

    let plain = decrypt(
        &stego,
        &dir.path().join("plain.txt"),
        "correct-horse".into(),
        &light(),
    )
    .unwrap();
    assert_eq!(fs::read_to_string(plain).unwrap(), "hello world");

    let wrong = decrypt(
        &stego,
        &dir.path().join("wrong.txt"),
        "wrong-password".into(),
        &light(),
    );
    assert_eq!(wrong.unwrap_err().code(), ErrorCode::AuthenticationFailed);
    assert!(!dir.path().join("wrong.txt").exists());
}

#[test]
fn stego_image_keeps_dimensions_and_only_low_bits_change() {
    let dir = TempDir::new().unwrap();
    let carrier = rgb_carrier(dir.path(), "carrier.png", 64, 48);

    let stego = encrypt(
        &carrier,
        &dir.path().join("stego.png"),
        message("hello world"),
        "pw".into(),
        &light(),
    )
    .unwrap();

    let before = image::open(&carrier).unwrap();
    let after = image::open(&stego).unwrap();
    assert_eq!(before.dimensions(), after.dimensions());
    assert_eq!(before.color(), after.color());
    assert!(before
        .as_bytes()
        .iter()
        .zip(after.as_bytes())
        .all(|(a, b)| a & !1 == b & !1));
    assert_ne!(before.as_bytes(), after.as_bytes());
}

#[test]
fn jpeg_carriers_are_written_as_png() {
    let dir = TempDir::new().unwrap();
    let carrier = rgb_carrier(dir.path(), "carrier.jpg", 80, 80);

    let stego = encrypt(
        &carrier,
        &dir.path().join("stego.jpg"),
        message("from a jpeg"),
        "pw".into(),
        &light(),
    )
    .unwrap();

    assert_eq!(stego, dir.path().join("stego.jpg.png"));
    assert_eq!(
        image::ImageFormat::from_path(&stego).unwrap(),
        image::ImageFormat::Png
    );
    let plain = decrypt(&stego, &dir.path().join("out"), "pw".into(), &light()).unwrap();
    assert_eq!(fs::read(plain).unwrap(), b"from a jpeg");
}

#[test]
fn binary_files_survive_unchanged() {
    let dir = TempDir::new().unwrap();
    let carrier = rgb_carrier(dir.path(), "carrier.png", 120, 90);
    let data: Vec<u8> = (0..=255u8).cycle().take(2000).collect();
    let data_file = dir.path().join("data.bin");
    fs::write(&data_file, &data).unwrap();

    let stego = encrypt(
        &carrier,
        &dir.path().join("stego"),
        Some(PayloadSource::File(data_file)),
        "pw".into(),
        &light(),
    )
    .unwrap();
    let plain = decrypt(&stego, &dir.path().join("data.out"), "pw".into(), &light()).unwrap();

    assert_eq!(fs::read(plain).unwrap(), data);
}

#[test]
fn alpha_channels_are_preserved() {
    let dir = TempDir::new().unwrap();
    let carrier = dir.path().join("carrier.png");
    DynamicImage::ImageLumaA8(ImageBuffer::from_fn(90, 90, |x, y| {
        LumaA([(x ^ y) as u8, 200])
    }))
    .save(&carrier)
    .unwrap();

    let stego = encrypt(
        &carrier,
        &dir.path().join("stego.png"),
        message("grey"),
        "pw".into(),
        &light(),
    )
    .unwrap();

    let after = image::open(&stego).unwrap().to_luma_alpha8();
    assert!(after.pixels().all(|p| p.0[1] == 200));
    let plain = decrypt(&stego, &dir.path().join("grey.txt"), "pw".into(), &light()).unwrap();
    assert_eq!(fs::read(plain).unwrap(), b"grey");
}

#[test]
fn untouched_images_are_not_encrypted() {
    let dir = TempDir::new().unwrap();
    let carrier = rgb_carrier(dir.path(), "carrier.png", 100, 100);

    let err = decrypt(&carrier, &dir.path().join("out"), "pw".into(), &light()).unwrap_err();

    assert_eq!(err.code(), ErrorCode::NotEncrypted);
    assert_eq!(err.code().exit_code(), 4);
}

#[test]
fn capacity_boundary_is_exact() {
    let dir = TempDir::new().unwrap();
    let carrier = rgb_carrier(dir.path(), "carrier.png", 40, 40);
    let img = CarrierImage::from_file(&carrier).unwrap();
    let max = vault::max_payload_len(&img, &light());
    assert_eq!(max, 40 * 40 * 3 / 8 - 65 - 16);

    let fits = "x".repeat(max);
    assert!(encrypt(
        &carrier,
        &dir.path().join("fits.png"),
        message(&fits),
        "pw".into(),
        &light()
    )
    .is_ok());

    let too_much = "x".repeat(max + 1);
    let err = encrypt(
        &carrier,
        &dir.path().join("too-much.png"),
        message(&too_much),
        "pw".into(),
        &light(),
    )
    .unwrap_err();
    assert_eq!(err.code(), ErrorCode::CapacityExceeded);
    assert!(err.to_string().contains("too large to fit into image"));
    assert!(!dir.path().join("too-much.png").exists());
}

#[test]
fn step_increment_must_match_on_both_sides() {
    let dir = TempDir::new().unwrap();
    let carrier = rgb_carrier(dir.path(), "carrier.png", 100, 100);
    let stepped =
        light().with_codec_options(CodecOptions::default().with_color_channel_step_increment(3));

    let stego = encrypt(
        &carrier,
        &dir.path().join("stego.png"),
        message("every third sample"),
        "pw".into(),
        &stepped,
    )
    .unwrap();

    let plain = decrypt(&stego, &dir.path().join("ok.txt"), "pw".into(), &stepped).unwrap();
    assert_eq!(fs::read(plain).unwrap(), b"every third sample");

    let err = decrypt(&stego, &dir.path().join("nok.txt"), "pw".into(), &light()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotEncrypted);
}
