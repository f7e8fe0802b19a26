pub mod burning_ship;
pub mod colour_mapping;
pub mod fractal_kinds;
pub mod julia;
pub mod mandelbrot;
