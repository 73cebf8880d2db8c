mod support;

use support::{approx_eq, block_typeface};
use trophyrs::TextError;
use trophyrs::float_types::Real;
use trophyrs::mesh::Mesh;
use trophyrs::scene::Euler;
use trophyrs::text::{TextOptions, Typeface};
use trophyrs::text_mesh::{TextMeshManager, TextTransform, TransformAxis};
use trophyrs::traits::MeshOps;
use trophyrs::triangulated::Triangulated3D;

const EPS: Real = 1e-5;

#[test]
fn no_font_refuses_any_string() {
    let mut manager = TextMeshManager::default();
    for text in ["", "   ", "Champion", "O D C", "\n"] {
        assert_eq!(
            manager.set_text(text, None, &TextTransform::default()).unwrap_err(),
            TextError::FontNotReady
        );
    }
    assert!(manager.current().is_none());
}

#[test]
fn no_font_keeps_existing_mesh() {
    let face = block_typeface();
    let mut manager = TextMeshManager::default();
    let placed = manager.set_text("OD", Some(&face), &TextTransform::default()).unwrap();
    let id = placed.geometry.id();
    assert!(manager.set_text("C", None, &TextTransform::default()).is_err());
    assert_eq!(manager.current().unwrap().geometry.id(), id);
    assert_eq!(manager.content(), "OD");
}

#[test]
fn blank_strings_are_rejected() {
    let face = block_typeface();
    let mut manager = TextMeshManager::default();
    for text in ["", "   ", "\t\n "] {
        assert_eq!(
            manager.set_text(text, Some(&face), &TextTransform::default()).unwrap_err(),
            TextError::EmptyInput
        );
    }
    assert!(manager.current().is_none());
}

#[test]
fn notices_read_like_alerts() {
    assert_eq!(
        TextError::FontNotReady.to_string(),
        "Font is still loading, please wait a moment and try again."
    );
    assert_eq!(TextError::EmptyInput.to_string(), "Please enter some text.");
}

#[test]
fn identical_text_rebuilds_equal_mesh() {
    let face = block_typeface();
    let mut transform = TextTransform::default();
    transform.set(TransformAxis::PositionX, 1.0);
    transform.set(TransformAxis::PositionY, 2.0);
    transform.set(TransformAxis::PositionZ, 3.0);
    transform.set(TransformAxis::Scale, 1.0);

    let mut manager = TextMeshManager::default();
    let first = manager.set_text("DOC", Some(&face), &transform).unwrap().clone();
    let first_content = manager.content().to_string();
    let first_polygons = first.geometry.get().unwrap().polygons.clone();

    let second = manager.set_text("DOC", Some(&face), &transform).unwrap().clone();

    assert!(first.geometry.is_disposed());
    assert!(first.material.is_disposed());
    assert_ne!(first.geometry.id(), second.geometry.id());
    assert_eq!(second.geometry.get().unwrap().polygons, first_polygons);
    assert_eq!(first.transform, second.transform);
    assert_eq!(first.transform.position.z, 3.0);
    assert_eq!(manager.content(), first_content);
}

#[test]
fn text_is_centred_on_x() {
    let face = block_typeface();
    let mut manager = TextMeshManager::default();
    for text in ["O", "DOC", "C O D", "??"] {
        let node = manager.set_text(text, Some(&face), &TextTransform::default()).unwrap();
        let bb = node.geometry.get().unwrap().bounding_box();
        assert!(approx_eq(bb.mins.x + bb.maxs.x, 0.0, EPS), "{text}: {bb:?}");
    }
}

#[test]
fn y_and_z_stay_at_extrusion_origin() {
    let face = block_typeface();
    let mut manager = TextMeshManager::default();
    let node = manager.set_text("O", Some(&face), &TextTransform::default()).unwrap();
    let bb = node.geometry.get().unwrap().bounding_box();
    // 0.5 em over 1000 units; bevel adds 0.02 around and 0.03 in front and behind
    assert!(approx_eq(bb.mins.y, -0.02, EPS));
    assert!(approx_eq(bb.maxs.y, 0.37, EPS));
    assert!(approx_eq(bb.mins.z, -0.03, EPS));
    assert!(approx_eq(bb.maxs.z, 0.23, EPS));
    assert!(approx_eq(bb.maxs.x - bb.mins.x, 0.34, EPS));
}

#[test]
fn counters_stay_open() {
    let face = block_typeface();
    let solid = Typeface::from_json(
        &support::BLOCK_TYPEFACE.replace(
            " m 150 150 l 450 150 l 450 550 l 150 550 z",
            "",
        ),
    )
    .unwrap();
    let options = TextOptions::default();
    let with_hole = Mesh::text("O", &face, &options);
    let without_hole = Mesh::text("O", &solid, &options);
    assert!(with_hole.triangle_count() > without_hole.triangle_count());
}

#[test]
fn unknown_characters_use_question_mark() {
    let face = block_typeface();
    let options = TextOptions::default();
    let unknown = Mesh::text("x", &face, &options);
    let question = Mesh::text("?", &face, &options);
    assert_eq!(unknown.polygons, question.polygons);
}

#[test]
fn newline_moves_down_one_line() {
    let face = block_typeface();
    let options = TextOptions { bevel: None, ..TextOptions::default() };
    let two_lines = Mesh::text("O\nO", &face, &options);
    let bb = two_lines.bounding_box();
    // line height (900 + 200 + 50) * 0.0005
    assert!(approx_eq(bb.mins.y, -0.575, EPS));
    assert!(approx_eq(bb.maxs.y, 0.35, EPS));
    assert!(approx_eq(bb.maxs.x, 0.3, EPS));
}

#[test]
fn sliders_drive_the_node_transform() {
    let face = block_typeface();
    let mut transform = TextTransform::default();
    transform.set(TransformAxis::PositionY, 1.8);
    transform.set(TransformAxis::PositionZ, 1.25);
    transform.set(TransformAxis::RotationX, -0.2);
    transform.set(TransformAxis::Scale, 0.5);

    let mut manager = TextMeshManager::default();
    let node = manager.set_text("D", Some(&face), &transform).unwrap();
    assert_eq!(node.transform.position.y, 1.8);
    assert_eq!(node.transform.position.z, 1.25);
    assert_eq!(node.transform.rotation, Euler::new(-0.2, 0.0, 0.0));
    assert_eq!(node.transform.scale.x, 0.5);
    assert_eq!(node.transform.scale.z, 0.5);

    assert!(manager.apply_transform(TransformAxis::PositionX, -0.4));
    let moved = manager.current().unwrap().transform;
    assert_eq!(moved.position.x, -0.4);
    assert_eq!(moved.position.y, 1.8);
}
