mod axes;
mod color;

pub use axes::{convert_points, y_up_to_z_up, z_up_to_y_up};
pub use color::turbo;
