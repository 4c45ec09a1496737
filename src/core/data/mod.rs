pub mod complex;
pub mod pixel_rect;
pub mod point;
pub mod viewport;
