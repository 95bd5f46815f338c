use glam::Vec3;

/// Remaps a point from the "x-forward, y-right, z-up" convention to the
/// viewer's "x-right, y-up, z-forward" convention.
pub fn z_up_to_y_up(v: Vec3) -> Vec3 {
    Vec3::new(v.y, v.z, v.x)
}

/// Inverse of [`z_up_to_y_up`].
pub fn y_up_to_z_up(v: Vec3) -> Vec3 {
    Vec3::new(v.z, v.x, v.y)
}

/// Converts a batch of points into the viewer convention. Points already
/// authored y-up pass through unchanged.
pub fn convert_points(points: &[Vec3], y_up: bool) -> Vec<Vec3> {
    if y_up {
        points.to_vec()
    } else {
        points.iter().map(|&p| z_up_to_y_up(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_z_up_to_y_up_permutes_axes() {
        let v = z_up_to_y_up(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(v, Vec3::new(2.0, 3.0, 1.0));
    }

    #[test]
    fn test_axis_round_trip() {
        let original = Vec3::new(-4.5, 0.25, 17.0);
        let round_tripped = y_up_to_z_up(z_up_to_y_up(original));
        assert_eq!(round_tripped, original);
    }

    #[test]
    fn test_convert_points_y_up_is_identity() {
        let points = vec![Vec3::new(1.0, 2.0, 3.0), Vec3::new(-1.0, 0.0, 5.0)];
        let converted = convert_points(&points, true);
        assert_eq!(converted, points);
    }

    #[test]
    fn test_convert_points_z_up_swizzles_all() {
        let points = vec![Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)];
        let converted = convert_points(&points, false);
        assert_eq!(converted[0], Vec3::new(2.0, 3.0, 1.0));
        assert_eq!(converted[1], Vec3::new(5.0, 6.0, 4.0));
    }
}
