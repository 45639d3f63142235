//! Concrete end-to-end scenarios.

use approx::assert_relative_eq;
use lumen_core::int_utilities::{make, split};
use lumen_core::{Color, Dimensions, Error, Image, PixelFormat};
use lumen_io::{DiskFile, ImageManager, MemoryFile};
use std::io::Write;
use lumen_math::{Quaternion, Vector3, Vector4, rad};
use lumen_scene::{ClipSpace, Depth, ExtractMatrix, Projection, Transform};
use std::f32::consts::FRAC_PI_2;

#[test]
fn quarter_turn_about_y_sends_x_to_minus_z() {
    let q = Quaternion::from_angle_axis(rad(FRAC_PI_2), Vector3::Y);
    let v = q * Vector3::X;
    assert!((v - Vector3::new(0.0, 0.0, -1.0)).magnitude() < 1e-6);
}

#[test]
fn scale_then_translate() {
    let mut t = Transform::new();
    t.set_scale(Vector3::new(2.0, 3.0, 4.0));
    t.translate(Vector3::new(1.0, 2.0, 3.0));
    let m = t.to_matrix4();

    let p = m * Vector4::new(1.0, 0.0, 0.0, 1.0);
    assert_eq!(p, Vector4::new(3.0, 2.0, 3.0, 1.0));
    // row-vector spelling gives the same point
    assert_eq!(Vector4::new(1.0, 0.0, 0.0, 1.0) * m, p);
}

#[test]
fn orthographic_clip_space() {
    let space = ClipSpace::make(-1.0, 1.0, -1.0, 1.0, 1.0, 100.0);
    let m = Projection::orthographic_space(space).to_matrix4();

    assert_eq!(m.get(0, 0), 1.0);
    assert_eq!(m.get(1, 1), 1.0);
    assert_relative_eq!(m.get(2, 2), -2.0 / 99.0);
    assert_eq!(m.get(3, 3), 1.0);

    assert_eq!(m.get(0, 3), 0.0);
    assert_eq!(m.get(1, 3), 0.0);
    assert_relative_eq!(m.get(2, 3), -101.0 / 99.0);
}

#[test]
fn perspective_quarter_turn_fov() {
    let m = Projection::perspective(rad(FRAC_PI_2), 1.0, Depth::new(1.0, 100.0)).to_matrix4();
    assert_relative_eq!(m.get(0, 0), 1.0, epsilon = 1e-6);
    assert_relative_eq!(m.get(1, 1), 1.0, epsilon = 1e-6);
    assert_relative_eq!(m.get(2, 2), -101.0 / 99.0);
    assert_relative_eq!(m.get(2, 3), -200.0 / 99.0);
    assert_eq!(m.get(3, 2), -1.0);
    assert_eq!(m.get(3, 3), 0.0);
}

#[test]
fn make_integer_from_parts() {
    let x: u32 = make((0x12u8, 0x3456u16, 0x78u8));
    assert_eq!(x, 0x12345678);
}

#[test]
fn split_integer_into_bytes() {
    let bytes: [u8; 4] = split(0x12345678u32);
    assert_eq!(bytes, [0x12, 0x34, 0x56, 0x78]);
}

#[test]
fn blank_image_and_bad_width() {
    let image = Image::make_blank_image(Dimensions::new(4, 2), PixelFormat::Rgba, Color::RED).unwrap();
    for y in 0..2 {
        for x in 0..4 {
            assert_eq!(image.get_pixel(x, y), Color::RED);
        }
    }

    let err = Image::make_image_from_buffer(vec![0u8; 4], Dimensions::new(0, 1), PixelFormat::Rgba)
        .unwrap_err();
    assert_eq!(err, Error::BadWidth);
}

/// 2×2 top-left-origin true-color TGA and the RGBA bytes it decodes to.
fn rgba_tga() -> (Vec<u8>, [u8; 16]) {
    // top-left origin, 8 alpha bits
    let mut blob = vec![0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 2, 0, 32, 0x28];
    let rgba: [u8; 16] = [
        255, 0, 0, 255, 0, 255, 0, 128, //
        0, 0, 255, 64, 10, 20, 30, 40,
    ];
    for px in rgba.chunks(4) {
        blob.extend_from_slice(&[px[2], px[1], px[0], px[3]]);
    }
    (blob, rgba)
}

#[test]
fn tga_rgba_blob_round_trips() {
    let (blob, rgba) = rgba_tga();

    let manager = ImageManager::with_builtin_loaders();
    let image = manager.load("tga", &mut MemoryFile::new(blob)).unwrap();

    assert_eq!(image.width(), 2);
    assert_eq!(image.height(), 2);
    assert_eq!(image.pixel_format(), PixelFormat::Rgba);
    assert_eq!(image.bytes(), &rgba);
}

#[test]
fn tga_from_disk_matches_memory() {
    let (blob, rgba) = rgba_tga();
    let mut tmp = tempfile::Builder::new().suffix(".tga").tempfile().unwrap();
    tmp.write_all(&blob).unwrap();
    tmp.flush().unwrap();

    let manager = ImageManager::with_builtin_loaders();
    let mut file = DiskFile::open(tmp.path()).unwrap();
    let from_disk = manager.load("tga", &mut file).unwrap();
    let from_memory = manager.load("tga", &mut MemoryFile::new(blob)).unwrap();

    assert_eq!(from_disk, from_memory);
    assert_eq!(from_disk.bytes(), &rgba);
    assert!(file.is_closed());
}
