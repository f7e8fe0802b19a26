//! Tile-parallel render scheduling.
//!
//! `RenderScheduler` turns render requests into generations of tile tasks on a
//! worker pool. Finished tiles flow back through a single `ResultIntake`, which
//! assembles the framebuffer and reports to the presentation layer.
//!
//! # Architecture
//!
//! - **Input**: `request_render`, resize notifications and `ControlEvent`s
//! - **Output**: the `RenderEventPort` trait, receiving progress and completed frames
//! - **Core**: escape-time kernel, tile rendering and frame assembly from `core/`

pub mod cache;
pub mod config;
pub mod data;
pub mod events;
pub mod intake;
pub mod ports;
pub mod resize;
pub mod scheduler;
mod shared_state;
pub mod task;
