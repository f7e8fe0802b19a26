pub mod colour;
pub mod coloured_pixel;
pub mod complex;
pub mod complex_rect;
pub mod escape;
pub mod image_properties;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point;
pub mod viewport;
