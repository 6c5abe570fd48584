use super::*;
use crate::{
    bitmap::{
        image_bitmap::ImageBitmap,
        raw::{RawImage, RawImageInfo},
    },
    elements::image::Image,
    foundation::error::CleaveError,
};

fn red_4x1() -> RawImage {
    RawImage::new(RawImageInfo::new(4, 1, 3), [255, 0, 0].repeat(4))
}

#[test]
fn draw_image_accepts_every_source_kind() {
    let image = Image::from_input(red_4x1()).unwrap();
    let bitmap = ImageBitmap::from_raw(&red_4x1()).unwrap();
    let other = Canvas::from_input(red_4x1()).unwrap();

    let mut canvas = Canvas::with_size(4, 3).unwrap();
    let mut ctx = canvas.context_2d(None);
    ctx.draw_image(&image, 0, 0).unwrap();
    ctx.draw_image(&bitmap, 0, 1).unwrap();
    ctx.draw_image(&other, 0, 2).unwrap();

    for y in 0..3 {
        assert_eq!(ctx.canvas().image_bitmap().get_pixel(3, y), [255, 0, 0, 255]);
    }
}

#[test]
fn draw_image_region_forwards_errors() {
    let image = Image::from_input(red_4x1()).unwrap();
    let mut canvas = Canvas::with_size(4, 4).unwrap();
    let mut ctx = canvas.context_2d(None);
    assert!(matches!(
        ctx.draw_image_region(&image, Rect::new(0, 0, 4, 1), Rect::new(0, 0, 2, 1)),
        Err(CleaveError::ResizeNotSupported { .. })
    ));
    ctx.draw_image_region(&image, Rect::new(1, 0, 2, 1), Rect::new(2, 3, 2, 1))
        .unwrap();
    assert_eq!(ctx.get_image_data(2, 3, 2, 1).unwrap().data(), &[255, 0, 0, 255, 255, 0, 0, 255]);
}

#[test]
fn get_image_data_reads_canvas_bitmap() {
    let mut canvas = Canvas::from_input(red_4x1()).unwrap();
    let ctx = canvas.context_2d(None);
    let idata = ctx.get_image_data(0, 0, 1, 1).unwrap();
    assert_eq!(idata.data(), &[255, 0, 0, 255]);
}

#[test]
fn put_image_data_writes_canvas_bitmap() {
    let mut canvas = Canvas::with_size(1, 1).unwrap();
    let mut ctx = canvas.context_2d(None);
    let idata = ImageData::from_vec(1, 1, vec![1, 2, 3, 4]).unwrap();
    ctx.put_image_data(&idata, 0.0, 0.0).unwrap();
    assert_eq!(ctx.get_image_data(0, 0, 1, 1).unwrap(), idata);

    let patch = ImageData::from_vec(2, 1, vec![9, 9, 9, 9, 7, 7, 7, 7]).unwrap();
    ctx.put_image_data_dirty(&patch, -1.0, 0.0, DirtyRect::new(1.0, 0.0, 1.0, 1.0))
        .unwrap();
    assert_eq!(ctx.get_image_data(0, 0, 1, 1).unwrap().data(), &[7, 7, 7, 7]);
}

#[test]
fn alpha_disabled_context_reads_opaque() {
    let mut canvas = Canvas::with_size(1, 1).unwrap();
    let ctx = canvas.context_2d(Some(crate::elements::canvas::ContextOptions { alpha: false }));
    assert_eq!(ctx.get_image_data(0, 0, 1, 1).unwrap().data(), &[0, 0, 0, 255]);
}

#[test]
fn create_image_data_is_blank() {
    let mut canvas = Canvas::new();
    let ctx = canvas.context_2d(None);
    let idata = ctx.create_image_data(300, 150);
    assert_eq!(idata.width(), 300);
    assert_eq!(idata.height(), 150);
    assert_eq!(idata.data().len(), 300 * 150 * 4);

    let input = ImageData::from_vec(1, 1, vec![1, 2, 3, 4]).unwrap();
    let like = ctx.create_image_data_like(&input);
    assert_eq!(like.width(), 1);
    assert_eq!(like.height(), 1);
    assert_eq!(like.data(), &[0, 0, 0, 0]);
}
