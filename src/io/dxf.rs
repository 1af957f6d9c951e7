//! [DXF] drawing backend.
//!
//! Outlines are written as closed `LWPOLYLINE`s, holes as `CIRCLE`s and slot edges as
//! `LINE`s, all on the forms layer. The `dxf` crate has no `HATCH` entity, so the fill
//! overlay is written as plain `LINE`s on the hatch layer.
//!
//! [DXF]: https://en.wikipedia.org/wiki/AutoCAD_DXF

use crate::config::ExportConfig;
use crate::errors::ExportError;
use crate::float_types::Real;
use crate::io::DrawingBackend;
use crate::layout::PlacedShape;
use geo::MultiLineString;
use nalgebra::Point2;
use std::path::Path;
use tracing::debug;

use dxf::entities::*;
use dxf::enums::AcadVersion;
use dxf::tables::{Layer, ViewPort};
use dxf::{Color, Drawing, LwPolylineVertex};

#[allow(clippy::unnecessary_cast)]
fn point(p: &Point2<Real>) -> dxf::Point {
    dxf::Point::new(p.x as f64, p.y as f64, 0.0)
}

const ACTIVE_VIEW_PORT: &str = "*ACTIVE";

pub struct DxfBackend {
    drawing: Drawing,
    forms_layer: String,
    hatch_layer: String,
    hatch_color: Color,
}

impl DxfBackend {
    /// New document with the forms and hatch layers and the initial viewport from
    /// `config`.
    #[allow(clippy::unnecessary_cast)]
    pub fn new(config: &ExportConfig) -> Self {
        let mut drawing = Drawing::new();
        drawing.header.version = AcadVersion::R2010;

        let layers = &config.layers;
        let mut forms = Layer::default();
        forms.name = layers.forms.clone();
        forms.color = Color::from_index(layers.forms_color);
        drawing.add_layer(forms);

        let mut hatches = Layer::default();
        hatches.name = layers.hatches.clone();
        drawing.add_layer(hatches);

        // `Drawing::new` already carries an `*ACTIVE` entry; configure it in place
        let view_center = dxf::Point::new(
            config.viewport.center_x as f64,
            config.viewport.center_y as f64,
            0.0,
        );
        let view_height = config.viewport.height as f64;
        let mut configured = false;
        for view_port in drawing.view_ports_mut() {
            if view_port.name.eq_ignore_ascii_case(ACTIVE_VIEW_PORT) {
                view_port.view_center = view_center.clone();
                view_port.view_height = view_height;
                configured = true;
            }
        }
        if !configured {
            let mut view_port = ViewPort::default();
            view_port.name = ACTIVE_VIEW_PORT.to_string();
            view_port.view_center = view_center;
            view_port.view_height = view_height;
            drawing.add_view_port(view_port);
        }

        Self {
            drawing,
            forms_layer: layers.forms.clone(),
            hatch_layer: layers.hatches.clone(),
            hatch_color: Color::from_index(layers.hatch_color),
        }
    }

    pub const fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    pub fn into_drawing(self) -> Drawing {
        self.drawing
    }

    /// Serializes the document without touching the filesystem.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ExportError> {
        let mut buffer = Vec::new();
        self.drawing.save(&mut buffer)?;
        Ok(buffer)
    }

    fn add_on_layer(&mut self, specific: EntityType, layer: &str, color: Option<Color>) {
        let mut entity = Entity::new(specific);
        entity.common.layer = layer.to_string();
        if let Some(color) = color {
            entity.common.color = color;
        }
        self.drawing.add_entity(entity);
    }
}

impl DrawingBackend for DxfBackend {
    #[allow(clippy::unnecessary_cast)]
    fn draw(&mut self, shape: &PlacedShape) {
        let specific = match shape {
            PlacedShape::Outline { corners } => {
                let mut polyline = LwPolyline::default();
                polyline.vertices = corners
                    .iter()
                    .map(|c| LwPolylineVertex {
                        x: c.x as f64,
                        y: c.y as f64,
                        ..Default::default()
                    })
                    .collect();
                polyline.set_is_closed(true);
                EntityType::LwPolyline(polyline)
            },
            PlacedShape::Circle { center, radius } => {
                EntityType::Circle(Circle::new(point(center), *radius as f64))
            },
            PlacedShape::Line { start, end } => {
                EntityType::Line(Line::new(point(start), point(end)))
            },
        };
        let layer = self.forms_layer.clone();
        self.add_on_layer(specific, &layer, None);
    }

    #[allow(clippy::unnecessary_cast)]
    fn hatch(&mut self, lines: &MultiLineString<Real>) {
        let layer = self.hatch_layer.clone();
        let color = self.hatch_color.clone();
        for segment in lines.0.iter().flat_map(|line| line.lines()) {
            let line = Line::new(
                dxf::Point::new(segment.start.x as f64, segment.start.y as f64, 0.0),
                dxf::Point::new(segment.end.x as f64, segment.end.y as f64, 0.0),
            );
            self.add_on_layer(EntityType::Line(line), &layer, Some(color.clone()));
        }
    }

    fn save(&mut self, path: &Path) -> Result<(), ExportError> {
        debug!(path = %path.display(), entities = self.drawing.entities().count(), "writing DXF");
        self.drawing.save_file(path)?;
        Ok(())
    }
}
