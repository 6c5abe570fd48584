use super::*;

fn raw(width: i64, height: i64, channels: u8, data: &[u8]) -> RawImage {
    RawImage {
        info: RawImageInfo {
            width,
            height,
            channels,
            premultiplied: false,
            size: None,
        },
        data: data.to_vec(),
    }
}

#[test]
fn validate_rejects_bad_input() {
    assert!(matches!(
        validate(&raw(-1, 1, 2, &[255, 255])),
        Err(CleaveError::InvalidDimensions { .. })
    ));
    assert!(matches!(
        validate(&raw(1, -1, 2, &[255, 255])),
        Err(CleaveError::InvalidDimensions { .. })
    ));
    assert!(matches!(
        validate(&raw(1, 1, 2, &[255])),
        Err(CleaveError::SizeMismatch {
            expected: 2,
            actual: 1
        })
    ));
    assert!(matches!(
        validate(&raw(1, 1, 5, &[255; 5])),
        Err(CleaveError::UnsupportedChannelCount(5))
    ));

    let mut premul = raw(1, 1, 2, &[255, 255]);
    premul.info.premultiplied = true;
    assert!(matches!(
        validate(&premul),
        Err(CleaveError::PremultipliedUnsupported)
    ));

    let mut bad_size = raw(1, 1, 2, &[255, 255]);
    bad_size.info.size = Some(1);
    assert!(matches!(
        validate(&bad_size),
        Err(CleaveError::SizeMetadataMismatch {
            declared: 1,
            actual: 2
        })
    ));

    assert_eq!(validate(&raw(1, 1, 2, &[255, 255])).unwrap(), (1, 1));
}

#[test]
fn validate_overflowing_geometry_is_a_size_mismatch() {
    assert!(matches!(
        validate(&raw(i64::MAX, i64::MAX, 4, &[])),
        Err(CleaveError::SizeMismatch { .. })
    ));
}

#[test]
fn unpack_expands_each_channel_layout() {
    let y8 = unpack(&raw(1, 1, 1, &[255])).unwrap();
    assert_eq!(y8.rgb, vec![255, 255, 255]);
    assert_eq!(y8.alpha, vec![255]);
    assert!(!y8.has_alpha);

    let y16 = unpack(&raw(1, 1, 2, &[255, 128])).unwrap();
    assert_eq!(y16.rgb, vec![255, 255, 255]);
    assert_eq!(y16.alpha, vec![128]);
    assert!(y16.has_alpha);

    let rgb24 = unpack(&raw(1, 1, 3, &[255, 192, 128])).unwrap();
    assert_eq!(rgb24.rgb, vec![255, 192, 128]);
    assert_eq!(rgb24.alpha, vec![255]);
    assert!(!rgb24.has_alpha);

    let rgb32 = unpack(&raw(1, 1, 4, &[255, 192, 128, 64])).unwrap();
    assert_eq!(rgb32.rgb, vec![255, 192, 128]);
    assert_eq!(rgb32.alpha, vec![64]);
    assert!(rgb32.has_alpha);
}

#[test]
fn unpack_keeps_row_major_order() {
    let planes = unpack(&raw(2, 1, 2, &[10, 20, 30, 40])).unwrap();
    assert_eq!(planes.width, 2);
    assert_eq!(planes.height, 1);
    assert_eq!(planes.rgb, vec![10, 10, 10, 30, 30, 30]);
    assert_eq!(planes.alpha, vec![20, 40]);
}

#[test]
fn pack_interleaves_alpha_only_when_present() {
    let rgb = [1, 2, 3, 4, 5, 6];
    let opaque = pack(2, 1, &rgb, None);
    assert_eq!(opaque.info.channels, 3);
    assert_eq!(opaque.data, rgb.to_vec());
    assert_eq!(opaque.info.size, Some(6));

    let with_alpha = pack(2, 1, &rgb, Some(&[7, 8]));
    assert_eq!(with_alpha.info.channels, 4);
    assert_eq!(with_alpha.data, vec![1, 2, 3, 7, 4, 5, 6, 8]);
    assert!(!with_alpha.info.premultiplied);
}
