pub mod escape_time;
pub mod escape_time_algorithm;
pub mod ports;
