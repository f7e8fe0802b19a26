pub mod escape_map_lookup;
pub mod ports;
pub mod render_tile;
