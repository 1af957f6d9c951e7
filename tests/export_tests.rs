#![cfg(feature = "dxf-io")]

use bentplate::{
    ExportConfig, ExportDriver, ExportError, Hole, LFrame, LayoutError, PlacedShape, Rectangle, attach_holes,
    flatten,
    io::{RecordingBackend, dxf::DxfBackend},
};
use dxf::entities::EntityType;
use nalgebra::Point2;

fn bracket() -> Rectangle {
    let rect = flatten(LFrame::new(200.0, 50.0, 10.0, 90.0)).with_offsets(6.0, 10.0);
    attach_holes(rect, vec![Hole::circle(5.0).unwrap(); 7]).unwrap()
}

fn slotted() -> Rectangle {
    attach_holes(
        Rectangle::new(150.0, 50.0).with_offsets(40.0, 5.0),
        vec![Hole::slot(5.0, 10.0, 45.0).unwrap(); 3],
    )
    .unwrap()
}

#[test]
fn driver_forwards_shapes_and_hatches_on_save() {
    let dir = tempfile::tempdir().unwrap();
    let mut driver =
        ExportDriver::with_backend(ExportConfig::in_directory(dir.path()), RecordingBackend::default()).unwrap();

    let shapes = driver.add_rectangle(&bracket(), Point2::origin()).unwrap();
    assert_eq!(shapes.len(), 8);
    assert_eq!(driver.backend().shapes, shapes);
    assert!(driver.backend().hatch_lines.is_empty());

    let path = driver.save("bracket").unwrap();
    assert_eq!(path, dir.path().join("bracket.dxf"));

    let backend = driver.into_backend();
    assert_eq!(backend.saved_to, vec![path]);
    assert_eq!(backend.hatch_lines.len(), 1);
    assert!(!backend.hatch_lines[0].0.is_empty());
}

#[test]
fn failed_rectangle_leaves_driver_untouched() {
    let mut driver = ExportDriver::with_backend(ExportConfig::default(), RecordingBackend::default()).unwrap();
    driver.add_rectangle(&bracket(), Point2::origin()).unwrap();
    let drawn = driver.backend().shapes.len();

    let lonely = attach_holes(Rectangle::new(50.0, 20.0), [Hole::circle(2.0).unwrap()]).unwrap();
    let err = driver.add_rectangle(&lonely, Point2::new(0.0, 100.0)).unwrap_err();
    assert_eq!(err, LayoutError::InsufficientHoles { count: 1 });

    assert_eq!(driver.backend().shapes.len(), drawn);
    assert_eq!(driver.rectangle_count(), 1);

    driver.add_rectangle(&slotted(), Point2::new(0.0, 79.0)).unwrap();
    assert_eq!(driver.rectangle_count(), 2);
}

#[test]
fn dxf_file_has_forms_and_hatches() {
    let dir = tempfile::tempdir().unwrap();
    let mut driver = ExportDriver::new(ExportConfig::in_directory(dir.path().join("nested"))).unwrap();
    driver.add_rectangle(&bracket(), Point2::origin()).unwrap();
    driver.add_rectangle(&slotted(), Point2::new(0.0, 79.0)).unwrap();
    let path = driver.save("demo").unwrap();
    assert!(path.exists());

    let drawing = dxf::Drawing::load_file(&path).unwrap();
    let forms: Vec<_> = drawing
        .entities()
        .filter(|e| e.common.layer == "FORMS")
        .collect();
    let hatches = drawing
        .entities()
        .filter(|e| e.common.layer == "HATCHES")
        .count();

    let polylines = forms
        .iter()
        .filter(|e| matches!(e.specific, EntityType::LwPolyline(_)))
        .count();
    let circles = forms
        .iter()
        .filter(|e| matches!(e.specific, EntityType::Circle(_)))
        .count();
    let lines = forms
        .iter()
        .filter(|e| matches!(e.specific, EntityType::Line(_)))
        .count();
    assert_eq!(polylines, 2);
    assert_eq!(circles, 7 + 3 * 2);
    assert_eq!(lines, 3 * 2);
    assert!(hatches > 0);

    assert!(drawing.layers().any(|l| l.name == "FORMS"));
    assert!(drawing.layers().any(|l| l.name == "HATCHES"));
}

#[test]
fn dxf_circles_land_on_layout_centers() {
    let config = ExportConfig::default();
    let mut backend = DxfBackend::new(&config);
    let shapes = bentplate::layout(&bracket(), Point2::new(10.0, 20.0)).unwrap();
    for shape in &shapes {
        bentplate::io::DrawingBackend::draw(&mut backend, shape);
    }

    let centers: Vec<_> = backend
        .drawing()
        .entities()
        .filter_map(|e| match &e.specific {
            EntityType::Circle(c) => Some((c.center.x, c.center.y, c.radius)),
            _ => None,
        })
        .collect();
    let expected: Vec<_> = shapes
        .iter()
        .filter_map(|s| match s {
            PlacedShape::Circle { center, radius } => {
                Some((center.x as f64, center.y as f64, *radius as f64))
            },
            _ => None,
        })
        .collect();
    assert_eq!(centers, expected);
    assert!(!backend.to_bytes().unwrap().is_empty());
}

#[test]
fn hatching_can_be_disabled() {
    let mut config = ExportConfig::default();
    config.hatch.enabled = false;
    let mut driver = ExportDriver::with_backend(config, RecordingBackend::default()).unwrap();
    driver.add_rectangle(&bracket(), Point2::origin()).unwrap();
    driver.save("plain").unwrap();
    assert!(driver.backend().hatch_lines.is_empty());
}

#[test]
fn saving_twice_does_not_hatch_twice() {
    let dir = tempfile::tempdir().unwrap();
    let mut driver =
        ExportDriver::with_backend(ExportConfig::in_directory(dir.path()), RecordingBackend::default()).unwrap();
    driver.add_rectangle(&bracket(), Point2::origin()).unwrap();
    driver.save("first").unwrap();
    driver.save("second").unwrap();
    let backend = driver.into_backend();
    assert_eq!(backend.saved_to.len(), 2);
    assert!(backend.hatch_lines[1].0.is_empty());
}

#[test]
fn saved_drawing_has_a_single_configured_active_view_port() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("view.dxf");
    let mut backend = DxfBackend::new(&ExportConfig::default());
    bentplate::io::DrawingBackend::save(&mut backend, &path).unwrap();

    let drawing = dxf::Drawing::load_file(&path).unwrap();
    let active: Vec<_> = drawing
        .view_ports()
        .filter(|v| v.name.eq_ignore_ascii_case("*ACTIVE"))
        .collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].view_center.x, 4.0);
    assert_eq!(active[0].view_center.y, 4.0);
    assert_eq!(active[0].view_height, 15.0);
}

#[test]
fn driver_rejects_invalid_config() {
    let mut config = ExportConfig::default();
    config.hatch.spacing = 1e-12;
    assert!(matches!(
        ExportDriver::with_backend(config.clone(), RecordingBackend::default()),
        Err(ExportError::Config(_))
    ));
    assert!(matches!(ExportDriver::new(config), Err(ExportError::Config(_))));

    let mut config = ExportConfig::default();
    config.layout.circle_segments = 2;
    assert!(ExportDriver::with_backend(config, RecordingBackend::default()).is_err());
}
