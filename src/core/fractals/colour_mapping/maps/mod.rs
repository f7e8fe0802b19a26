pub mod smooth_hsb;
