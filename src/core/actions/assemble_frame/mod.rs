pub mod frame_assembly;
