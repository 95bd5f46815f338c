use glam::{Vec2, Vec3};
use multiscene::seam::{self, SEAM_SPREAD_THRESHOLD};

#[cfg(test)]
mod seam_tests {
    use super::*;

    fn triangle_positions() -> Vec<Vec3> {
        vec![Vec3::ZERO, Vec3::X, Vec3::Y]
    }

    fn triangle_normals() -> Vec<Vec3> {
        vec![Vec3::Z; 3]
    }

    #[test]
    fn test_crossing_face_duplicates_vertices_with_remapped_us() {
        let positions = triangle_positions();
        let normals = triangle_normals();
        let uvs = vec![
            Vec2::new(0.1, 0.2),
            Vec2::new(0.9, 0.4),
            Vec2::new(0.95, 0.6),
        ];
        let faces = vec![[0u32, 1, 2]];

        let unwrapped = seam::unwrap_frame(&positions, &normals, &uvs, &faces);

        // The crossing face disappears from the original index range and
        // reappears as a fresh triple one past the maximum original index.
        assert_eq!(unwrapped.faces, vec![[3u32, 4, 5]]);
        assert_eq!(unwrapped.positions.len(), 6);
        assert_eq!(unwrapped.normals.len(), 6);
        assert_eq!(unwrapped.positions[3..6], positions[..]);
        assert_eq!(unwrapped.normals[3..6], normals[..]);

        // 0.1 is below the split point, so it shifts up a full texture width
        // before the doubled range is halved back into [0, 1].
        let duplicated_us: Vec<f32> = unwrapped.uvs[3..6].iter().map(|uv| uv.x).collect();
        assert_eq!(duplicated_us, vec![(0.1 + 1.0) / 2.0, 0.9 / 2.0, 0.95 / 2.0]);

        // V coordinates survive untouched.
        let duplicated_vs: Vec<f32> = unwrapped.uvs[3..6].iter().map(|uv| uv.y).collect();
        assert_eq!(duplicated_vs, vec![0.2, 0.4, 0.6]);

        // Original U values are halved as well.
        assert_eq!(unwrapped.uvs[0].x, 0.05);
        assert_eq!(unwrapped.uvs[0].y, 0.2);
    }

    #[test]
    fn test_non_crossing_face_keeps_original_indices() {
        let positions = triangle_positions();
        let normals = triangle_normals();
        let uvs = vec![
            Vec2::new(0.2, 0.0),
            Vec2::new(0.3, 0.5),
            Vec2::new(0.25, 1.0),
        ];
        let faces = vec![[0u32, 1, 2]];

        let unwrapped = seam::unwrap_frame(&positions, &normals, &uvs, &faces);

        assert_eq!(unwrapped.faces, faces);
        assert_eq!(unwrapped.positions, positions);
        assert_eq!(unwrapped.normals, normals);
    }

    #[test]
    fn test_mixed_faces_split_into_pass_through_and_duplicated_block() {
        // Quad over 4 vertices: one face stays on one side of the seam, the
        // other crosses it.
        let positions = vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::ONE];
        let normals = vec![Vec3::Z; 4];
        let uvs = vec![
            Vec2::new(0.1, 0.0),
            Vec2::new(0.2, 0.0),
            Vec2::new(0.15, 1.0),
            Vec2::new(0.95, 1.0),
        ];
        let faces = vec![[0u32, 1, 2], [1, 2, 3]];

        let unwrapped = seam::unwrap_frame(&positions, &normals, &uvs, &faces);

        // Non-crossing face first with original indices, then the duplicate.
        assert_eq!(unwrapped.faces, vec![[0u32, 1, 2], [4, 5, 6]]);
        assert_eq!(unwrapped.positions.len(), 7);
        assert_eq!(unwrapped.positions[4], positions[1]);
        assert_eq!(unwrapped.positions[5], positions[2]);
        assert_eq!(unwrapped.positions[6], positions[3]);

        // Wrapped-side U values of the duplicated face shift before halving;
        // 0.95 stays put.
        assert_eq!(unwrapped.uvs[4].x, (0.2 + 1.0) / 2.0);
        assert_eq!(unwrapped.uvs[5].x, (0.15 + 1.0) / 2.0);
        assert_eq!(unwrapped.uvs[6].x, 0.95 / 2.0);
    }

    #[test]
    fn test_spread_exactly_at_threshold_passes_through() {
        let us = [0.0, 0.5, SEAM_SPREAD_THRESHOLD];
        assert!(!seam::face_crosses_seam(us));
    }

    #[test]
    fn test_any_crossing_face_detection() {
        let uvs = vec![
            Vec2::new(0.05, 0.0),
            Vec2::new(0.5, 0.0),
            Vec2::new(0.98, 0.0),
        ];
        assert!(seam::any_crossing_face(&[[0, 1, 2]], &uvs));
        assert!(!seam::any_crossing_face(&[[0, 1, 1]], &uvs));
    }
}
