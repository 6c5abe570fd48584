pub mod bitmap;
pub mod canvas2d;
