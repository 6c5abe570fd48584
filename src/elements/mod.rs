pub mod canvas;
pub mod document;
pub mod image;
pub mod source;
