pub mod clear_alpha;
pub mod edge_detect;
pub mod estimate_background;
pub mod flood_fill;
pub mod remove_background;
