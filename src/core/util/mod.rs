pub mod calculate_worker_threads;
pub mod hsb_to_rgb;
pub mod partition_tiles;
pub mod pixel_to_complex_coords;
