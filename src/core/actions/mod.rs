pub mod assemble_frame;
pub mod escape_time;
pub mod generation;
pub mod render_tile;
