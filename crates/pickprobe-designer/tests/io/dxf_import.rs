use dxf::entities::{Arc, Circle, Entity, EntityType, Line};
use dxf::{Drawing, Point};
use pickprobe_core::{BoundingBox, DrawingPoint, Primitive};
use pickprobe_designer::{
    load_drawing, loader_for_path, DrawingLoadError, DrawingLoader, DxfLoader, FileFormat,
};
use std::path::{Path, PathBuf};

fn write_dxf(dir: &Path, name: &str, entities: Vec<EntityType>) -> PathBuf {
    let mut drawing = Drawing::new();
    for specific in entities {
        drawing.add_entity(Entity::new(specific));
    }
    let mut content = Vec::new();
    drawing.save(&mut content).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> EntityType {
    EntityType::Line(Line::new(Point::new(x1, y1, 0.0), Point::new(x2, y2, 0.0)))
}

fn circle(x: f64, y: f64, r: f64) -> EntityType {
    EntityType::Circle(Circle::new(Point::new(x, y, 0.0), r))
}

#[test]
fn test_dxf_lines_and_circles() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dxf(
        dir.path(),
        "part.dxf",
        vec![line(0.0, 0.0, 100.0, 0.0), circle(50.0, 25.0, 10.0)],
    );

    let primitives = DxfLoader.parse(&path).unwrap();
    assert_eq!(
        primitives,
        vec![
            Primitive::line(DrawingPoint::new(0.0, 0.0), DrawingPoint::new(100.0, 0.0)),
            Primitive::circle(DrawingPoint::new(50.0, 25.0), 10.0),
        ]
    );
}

#[test]
fn test_dxf_unsupported_entities_are_kept_but_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dxf(
        dir.path(),
        "arc.dxf",
        vec![
            line(0.0, 0.0, 10.0, 10.0),
            EntityType::Arc(Arc::new(Point::new(0.0, 0.0, 0.0), 50.0, 0.0, 90.0)),
        ],
    );

    let drawing = load_drawing(&path).unwrap();
    assert_eq!(drawing.format, FileFormat::Dxf);
    assert_eq!(drawing.primitives.len(), 2);
    assert_eq!(drawing.primitives[1].kind(), "ARC");
    assert_eq!(drawing.drawable_count(), 1);
    assert_eq!(drawing.bounds, BoundingBox::new(0.0, 0.0, 10.0, 10.0));
}

#[test]
fn test_dxf_without_drawable_entities() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dxf(dir.path(), "empty.dxf", vec![]);

    let result = load_drawing(&path);
    assert!(matches!(result, Err(DrawingLoadError::NoDrawableEntities(_))));
}

#[test]
fn test_format_sniffed_without_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dxf(dir.path(), "drawing", vec![line(0.0, 0.0, 5.0, 5.0)]);

    let loader = loader_for_path(&path).unwrap();
    assert_eq!(loader.format(), FileFormat::Dxf);
    assert_eq!(load_drawing(&path).unwrap().format, FileFormat::Dxf);
}

#[test]
fn test_unknown_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "just some text").unwrap();

    assert!(matches!(
        load_drawing(&path),
        Err(DrawingLoadError::UnsupportedFormat(_))
    ));
    assert!(matches!(
        loader_for_path(&path),
        Err(DrawingLoadError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_drawing(&dir.path().join("absent.dxf"));
    assert!(matches!(result, Err(DrawingLoadError::Io(_))));
}

#[test]
fn test_dxf_paper_space_entities_ignored() {
    let dir = tempfile::tempdir().unwrap();

    let mut drawing = Drawing::new();
    drawing.add_entity(Entity::new(line(0.0, 0.0, 10.0, 10.0)));
    let mut title_block = Entity::new(line(500.0, 500.0, 600.0, 600.0));
    title_block.common.is_in_paper_space = true;
    drawing.add_entity(title_block);

    let mut content = Vec::new();
    drawing.save(&mut content).unwrap();
    let path = dir.path().join("sheet.dxf");
    std::fs::write(&path, content).unwrap();

    let loaded = load_drawing(&path).unwrap();
    assert_eq!(loaded.primitives.len(), 1);
    assert_eq!(loaded.bounds, BoundingBox::new(0.0, 0.0, 10.0, 10.0));
}
