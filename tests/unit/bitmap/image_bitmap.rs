use super::*;
use crate::bitmap::raw::RawImageInfo;

fn red_4x1() -> ImageBitmap {
    let raw = RawImage::new(RawImageInfo::new(4, 1, 3), [255, 0, 0].repeat(4));
    ImageBitmap::from_raw(&raw).unwrap()
}

fn black_2x4() -> ImageBitmap {
    let raw = RawImage::new(RawImageInfo::new(2, 4, 3), vec![0; 2 * 4 * 3]);
    ImageBitmap::from_raw(&raw).unwrap()
}

#[test]
fn new_is_empty_with_alpha() {
    let bitmap = ImageBitmap::new();
    assert_eq!(bitmap.width(), 0);
    assert_eq!(bitmap.height(), 0);
    assert!(bitmap.has_alpha());
    assert!(bitmap.rgb_data().is_empty());
    assert!(bitmap.alpha_data().is_empty());
}

#[test]
fn from_raw_reports_dimensions() {
    let bitmap = black_2x4();
    assert_eq!(bitmap.width(), 2);
    assert_eq!(bitmap.height(), 4);
    assert!(!bitmap.has_alpha());
}

#[test]
fn from_input_adopts_or_builds() {
    let adopted = ImageBitmap::from_input(red_4x1()).unwrap();
    assert_eq!(adopted, red_4x1());

    let raw = RawImage::new(RawImageInfo::new(1, 1, 4), vec![255, 192, 128, 64]);
    let built = ImageBitmap::from_input(raw).unwrap();
    assert_eq!(built.get_rgb(0, 0), [255, 192, 128]);
    assert_eq!(built.get_alpha(0, 0), 64);
    assert!(built.has_alpha());
}

#[test]
fn plane_accessors_expose_backing_data() {
    let bitmap = red_4x1();
    assert_eq!(bitmap.rgb_data(), [255, 0, 0].repeat(4).as_slice());
    assert_eq!(bitmap.alpha_data(), &[255, 255, 255, 255]);
}

#[test]
fn alpha_toggle_controls_channel() {
    let mut bitmap = black_2x4();
    assert!(!bitmap.has_alpha());
    bitmap.enable_alpha();
    assert!(bitmap.has_alpha());

    bitmap.set_alpha(0, 0, 10);
    assert_eq!(bitmap.get_alpha(0, 0), 10);
    bitmap.disable_alpha();
    assert_eq!(bitmap.get_alpha(0, 0), 255);
    assert!(bitmap.alpha_data().iter().all(|&a| a == 255));

    bitmap.set_alpha_enabled(true);
    assert_eq!(bitmap.get_alpha(0, 0), 255);
}

#[test]
fn resize_resizes_and_clamps() {
    let mut bitmap = ImageBitmap::new();
    bitmap.resize(4.0, 4.0).unwrap();
    assert_eq!(bitmap.width(), 4);
    assert_eq!(bitmap.height(), 4);
    assert_eq!(bitmap.rgb_data().len(), 4 * 4 * 3);
    assert_eq!(bitmap.alpha_data().len(), 4 * 4);
    assert!(bitmap.alpha_data().iter().all(|&a| a == 0));

    bitmap.resize(-1.0, -1.0).unwrap();
    assert_eq!(bitmap.width(), 0);
    assert_eq!(bitmap.height(), 0);

    bitmap.resize(2.9, f64::INFINITY).unwrap();
    assert_eq!(bitmap.width(), 2);
    assert_eq!(bitmap.height(), 0);
}

#[test]
fn resize_rejects_too_large() {
    let mut bitmap = ImageBitmap::new();
    assert!(matches!(
        bitmap.resize(2e4, 2e4),
        Err(CleaveError::TooLarge { .. })
    ));
    assert_eq!(bitmap.width(), 0);
}

#[test]
fn resize_with_equal_dimensions_keeps_content() {
    let mut bitmap = red_4x1();
    bitmap.resize(4.0, 1.0).unwrap();
    assert_eq!(bitmap.get_rgb(0, 0), [255, 0, 0]);
}

#[test]
fn resize_zeroes_content_even_if_size_is_unchanged() {
    let mut bitmap = red_4x1();
    assert_eq!(bitmap.get_rgb(0, 0), [255, 0, 0]);
    bitmap.resize(1.0, 4.0).unwrap();
    assert_eq!(bitmap.width(), 1);
    assert_eq!(bitmap.height(), 4);
    assert_eq!(bitmap.get_rgb(0, 0), [0, 0, 0]);
    assert_eq!(bitmap.get_alpha(0, 0), 255);
}

#[test]
fn get_rgb_returns_black_out_of_bounds() {
    let bitmap = red_4x1();
    assert_eq!(bitmap.get_rgb(-2, -2), [0, 0, 0]);
    assert_eq!(bitmap.get_rgb(-1, 0), [0, 0, 0]);
    assert_eq!(bitmap.get_rgb(4, 0), [0, 0, 0]);
    assert_eq!(bitmap.get_rgb(2, 0), [255, 0, 0]);
}

#[test]
fn get_alpha_sentinel_depends_on_alpha_channel() {
    let mut bitmap = red_4x1();
    assert_eq!(bitmap.get_alpha(-2, -2), 255);
    bitmap.enable_alpha();
    assert_eq!(bitmap.get_alpha(-2, -2), 0);
    assert_eq!(bitmap.get_alpha(2, 0), 255);
}

#[test]
fn set_rgb_rejects_wrong_length() {
    let mut bitmap = red_4x1();
    assert!(matches!(
        bitmap.set_rgb(0, 0, &[255, 0]),
        Err(CleaveError::InvalidComponentCount {
            expected: 3,
            actual: 2
        })
    ));
}

#[test]
fn set_rgb_writes_in_bounds_only() {
    let mut bitmap = red_4x1();
    let before = bitmap.clone();
    bitmap.set_rgb_components(-1, 0, 0, 0, 0);
    bitmap.set_rgb(4, 0, &[1, 2, 3]).unwrap();
    assert_eq!(bitmap, before);

    bitmap.set_rgb(0, 0, &[255, 128, 64]).unwrap();
    assert_eq!(bitmap.get_rgb(0, 0), [255, 128, 64]);
    bitmap.set_rgb_components(1, 0, 255, 128, 64);
    assert_eq!(bitmap.get_rgb(1, 0), [255, 128, 64]);
    assert_eq!(bitmap.get_rgb(3, 0), [255, 0, 0]);
}

#[test]
fn set_alpha_requires_alpha_and_bounds() {
    let mut bitmap = red_4x1();
    bitmap.set_alpha(0, 0, 64);
    assert_eq!(bitmap.get_alpha(0, 0), 255);

    bitmap.enable_alpha();
    bitmap.set_alpha(-1, 0, 64);
    assert_eq!(bitmap.get_alpha(3, 0), 255);

    bitmap.set_alpha(1, 0, 64);
    assert_eq!(bitmap.get_alpha(1, 0), 64);
}

#[test]
fn close_reports_zero_size_and_drops_writes() {
    let mut bitmap = red_4x1();
    bitmap.close();
    assert!(bitmap.is_closed());
    assert_eq!(bitmap.width(), 0);
    assert_eq!(bitmap.height(), 0);
    assert_eq!(bitmap.get_rgb(0, 0), [0, 0, 0]);
    bitmap.set_rgb_components(0, 0, 1, 2, 3);
    assert_eq!(bitmap.rgb_data()[..3], [255, 0, 0]);
}
