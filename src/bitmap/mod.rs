pub mod blend;
pub mod draw;
pub mod image_bitmap;
pub mod image_data;
pub mod raw;
pub mod transfer;
