pub mod decor;
pub mod knot_vis2d;
