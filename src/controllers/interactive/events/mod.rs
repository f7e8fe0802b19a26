pub mod control;
pub mod render;
