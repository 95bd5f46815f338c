use glam::Vec3;
use multiscene::{demo, MeshData, MultiScene, Scene, Timeline};

#[cfg(test)]
mod document_tests {
    use super::*;

    fn triangle() -> MeshData {
        MeshData::new(
            Timeline::Static(vec![Vec3::ZERO, Vec3::X, Vec3::Y]),
            vec![[0, 1, 2]],
            Timeline::Static(vec![Vec3::Z; 3]),
        )
    }

    fn extract_payload(html: &str) -> serde_json::Value {
        // Look for the call site, not the function definition inside the
        // embedded bootstrap script.
        let start = html
            .find("renderMultiScene([")
            .expect("missing renderMultiScene call")
            + "renderMultiScene(".len();
        // The payload is the first argument; serde_json output is compact, so
        // "], " only occurs where the camera parameters begin.
        let rest = &html[start..];
        let end = rest.find("], ").expect("missing payload terminator") + 1;
        serde_json::from_str(&rest[..end]).expect("payload is not valid JSON")
    }

    #[test]
    fn test_document_contains_one_canvas_per_scene() {
        let mut scene = MultiScene::new(2, 3);
        scene.add_mesh(0, 0, triangle(), true).unwrap();
        let html = scene.make().unwrap();
        assert_eq!(html.matches(r#"<canvas class="sceneCanvas">"#).count(), 6);
        assert!(html.contains(r#"<canvas id="engineCanvas">"#));
        assert!(html.contains("width: 33vw"));
        assert!(html.contains("height: 50vh"));
    }

    #[test]
    fn test_payload_parses_as_json_with_required_keys() {
        let mut scene = MultiScene::new(1, 2);
        scene.add_mesh(0, 0, triangle(), true).unwrap();
        scene
            .add_point_cloud(0, 1, demo::scatter_cloud(10, 1.0), true)
            .unwrap();
        scene
            .add_curve(0, 1, demo::circle_curve(8, 1.0), true)
            .unwrap();

        let html = scene.make().unwrap();
        let payload = extract_payload(&html);
        let objects = payload.as_array().expect("payload is not an array");
        assert_eq!(objects.len(), 3);

        assert_eq!(objects[0]["type"], "mesh");
        assert_eq!(objects[0]["sceneId"], 0);
        assert!(objects[0]["positions"].is_array());
        assert!(objects[0]["indices"].is_array());
        assert!(objects[0]["normals"].is_array());
        assert_eq!(objects[0]["hasUvs"], false);
        assert_eq!(objects[0]["hasColors"], false);
        assert_eq!(objects[0]["isAnimated"], false);
        assert!(objects[0].get("uvs").is_none());
        assert!(objects[0].get("colors").is_none());

        assert_eq!(objects[1]["type"], "pointCloud");
        assert_eq!(objects[1]["sceneId"], 1);
        assert_eq!(objects[1]["numPoints"], 10);
        assert!(objects[1]["radii"].is_number());
        assert_eq!(objects[1]["hasColors"], true);

        assert_eq!(objects[2]["type"], "curve");
        assert_eq!(objects[2]["sceneId"], 1);
        assert!(objects[2]["radius"].is_number());
    }

    #[test]
    fn test_document_embeds_camera_and_animation_parameters() {
        let scene = MultiScene::new(1, 1)
            .with_camera(0.5, 1.0)
            .with_animation(24, 42);
        let html = scene.make().unwrap();
        assert!(html.contains("renderMultiScene([], 0.5, 1, 24, 42);"));
    }

    #[test]
    fn test_single_scene_wrapper_targets_scene_zero() {
        let mut scene = Scene::new();
        scene.add_mesh(triangle(), true).unwrap();
        scene
            .add_curve(demo::helix_curve(2, 16, 1.0), true)
            .unwrap();
        assert!(scene.objects().iter().all(|o| o.scene_id() == 0));
        let html = scene.make().unwrap();
        assert!(html.contains("width: 100vw"));
        assert!(html.contains("height: 100vh"));
    }

    #[test]
    fn test_write_html_round_trips() {
        let dir = std::env::temp_dir().join("multiscene_doc_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.html");

        let scene = MultiScene::new(1, 1);
        let html = scene.make().unwrap();
        multiscene::document::write_html(&path, &html).unwrap();
        let read_back = std::fs::read_to_string(&path).unwrap();
        assert_eq!(read_back, html);
    }
}
