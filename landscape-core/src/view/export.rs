//! Plotly-compatible figure export.
//!
//! Panels and composed views are turned into `{"data": [...], "layout": {...}}`
//! documents. Non-finite numbers serialize as `null`.

use serde_json::{json, Map, Value};

use crate::error::Result;
use crate::geometry::Interval;
use crate::sampling::SampledField;

use super::composed::ComposedView;
use super::layer::{Arrow, Layer, LineRole};
use super::panel::{Panel, PanelKind, PanelLayout};

const FIELD_HOVER: &str = "x1 %{x}<br>x2 %{y}<br>f(x) %{z}<extra></extra>";
const LINE_HOVER: &str = "x1 %{x}<br>x2 %{y}<extra></extra>";

/// Horizontal split of the composed figure.
const LEFT_CELL: [f64; 2] = [0.0, 0.45];
const RIGHT_CELL: [f64; 2] = [0.55, 1.0];

fn field_z(field: &SampledField) -> Vec<Vec<f64>> {
    field.rows().map(<[f64]>::to_vec).collect()
}

fn insert_color(trace: &mut Map<String, Value>, key: &str, color: &Option<String>) {
    if let Some(c) = color {
        trace.insert(key.to_string(), json!({ "color": c }));
    }
}

pub(crate) fn layer_to_trace(layer: &Layer) -> Value {
    match layer {
        Layer::Contour(field) => json!({
            "type": "contour",
            "x": field.x_axis(),
            "y": field.y_axis(),
            "z": field_z(field),
            "contours": { "coloring": "lines" },
            "showscale": false,
            "hovertemplate": FIELD_HOVER,
        }),
        Layer::Surface { field, style } => {
            let mut trace = json!({
                "type": "surface",
                "x": field.x_axis(),
                "y": field.y_axis(),
                "z": field_z(field),
                "opacity": style.opacity,
                "showscale": style.show_scale,
                "hovertemplate": FIELD_HOVER,
            });
            if let (Some(scale), Some(obj)) = (&style.color_scale, trace.as_object_mut()) {
                obj.insert("colorscale".to_string(), json!(scale));
            }
            trace
        }
        Layer::Line(line) => {
            let mut trace = Map::new();
            trace.insert("type".into(), json!("scatter"));
            trace.insert("x".into(), json!(line.x));
            trace.insert("y".into(), json!(line.y));
            let mode = if line.markers { "lines+markers" } else { "lines" };
            trace.insert("mode".into(), json!(mode));
            trace.insert("showlegend".into(), json!(false));
            match line.role {
                LineRole::Trajectory => {
                    insert_color(&mut trace, "line", &line.color);
                    trace.insert("hovertemplate".into(), json!(LINE_HOVER));
                }
                LineRole::Constraint => insert_color(&mut trace, "marker", &line.color),
            }
            Value::Object(trace)
        }
        Layer::Line3d(line) => {
            let mut trace = Map::new();
            trace.insert("type".into(), json!("scatter3d"));
            trace.insert("x".into(), json!(line.x));
            trace.insert("y".into(), json!(line.y));
            trace.insert("z".into(), json!(line.z));
            trace.insert("mode".into(), json!("lines"));
            trace.insert("showlegend".into(), json!(false));
            insert_color(&mut trace, "line", &line.color);
            trace.insert("hovertemplate".into(), json!(FIELD_HOVER));
            Value::Object(trace)
        }
    }
}

pub(crate) fn arrow_to_annotation(arrow: &Arrow) -> Value {
    json!({
        "ax": arrow.tail.x1,
        "ay": arrow.tail.x2,
        "x": arrow.head.x1,
        "y": arrow.head.x2,
        "xref": "x",
        "yref": "y",
        "axref": "x",
        "ayref": "y",
        "text": "",
        "showarrow": true,
        "arrowhead": 2,
        "arrowwidth": 2,
        "arrowcolor": arrow.color,
    })
}

fn axis(title: &str, range: Option<[f64; 2]>) -> Value {
    let mut axis = json!({ "title": { "text": title } });
    if let (Some(range), Some(obj)) = (range, axis.as_object_mut()) {
        obj.insert("range".to_string(), json!(range));
    }
    axis
}

fn base_layout(layout: &PanelLayout, annotations: &[Arrow]) -> Map<String, Value> {
    let mut out = Map::new();
    out.insert("template".into(), json!(layout.template));
    out.insert("width".into(), json!(layout.width));
    out.insert("height".into(), json!(layout.height));
    if let Some(title) = &layout.title {
        out.insert("title".into(), json!({ "text": title }));
    }
    out.insert(
        "annotations".into(),
        Value::Array(annotations.iter().map(arrow_to_annotation).collect()),
    );
    out
}

fn scene(
    layout: &PanelLayout,
    x: Interval,
    y: Interval,
    z: Option<(f64, f64)>,
) -> Map<String, Value> {
    let [tx, ty, tz] = layout.axis_titles;
    let mut scene = Map::new();
    scene.insert("xaxis".into(), axis(tx, Some(x.as_array())));
    scene.insert("yaxis".into(), axis(ty, Some(y.as_array())));
    scene.insert("zaxis".into(), axis(tz, z.map(|(lo, hi)| [lo, hi])));
    scene
}

impl Panel {
    /// Standalone figure of this panel.
    pub fn to_figure(&self) -> Value {
        let data: Vec<Value> = self.layers().iter().map(layer_to_trace).collect();
        let domain = self.domain();
        let [tx, ty, _] = self.layout().axis_titles;

        let mut layout = base_layout(self.layout(), self.annotations());
        match self.kind() {
            PanelKind::Planar => {
                layout.insert("xaxis".into(), axis(tx, Some(domain.x.as_array())));
                layout.insert("yaxis".into(), axis(ty, Some(domain.y.as_array())));
            }
            PanelKind::Volumetric(_) => {
                let z = self.field().value_range();
                layout.insert(
                    "scene".into(),
                    Value::Object(scene(self.layout(), domain.x, domain.y, z)),
                );
            }
        }

        json!({ "data": data, "layout": layout })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_figure())?)
    }
}

impl ComposedView {
    /// One-row, two-column figure: contour on the left, surface on the right.
    pub fn to_figure(&self) -> Value {
        let mut data = Vec::with_capacity(self.layer_count());
        for layer in &self.planar.layers {
            let mut trace = layer_to_trace(layer);
            if let Some(obj) = trace.as_object_mut() {
                obj.insert("xaxis".into(), json!("x"));
                obj.insert("yaxis".into(), json!("y"));
            }
            data.push(trace);
        }
        for layer in &self.volumetric.layers {
            let mut trace = layer_to_trace(layer);
            if let (Layer::Surface { .. } | Layer::Line3d(_), Some(obj)) =
                (layer, trace.as_object_mut())
            {
                obj.insert("scene".into(), json!("scene"));
            }
            data.push(trace);
        }

        let [tx, ty, _] = self.layout.axis_titles;
        let mut layout = base_layout(&self.layout, &self.annotations);
        layout.insert(
            "grid".into(),
            json!({ "rows": 1, "columns": ComposedView::CELLS, "pattern": "independent" }),
        );

        let mut xaxis = axis(tx, Some(self.planar.x_range.as_array()));
        if let Some(obj) = xaxis.as_object_mut() {
            obj.insert("domain".into(), json!(LEFT_CELL));
        }
        layout.insert("xaxis".into(), xaxis);
        layout.insert("yaxis".into(), axis(ty, Some(self.y_range.as_array())));

        let mut scene = scene(
            &self.layout,
            self.volumetric.x_range,
            self.y_range,
            self.objective_range,
        );
        scene.insert("domain".into(), json!({ "x": RIGHT_CELL, "y": [0.0, 1.0] }));
        layout.insert("scene".into(), Value::Object(scene));
        layout.insert(
            "meta".into(),
            json!({
                "cells": ["contour", "surface"],
                "shared_yaxes": self.shared_yaxes,
            }),
        );

        json!({ "data": data, "layout": layout })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_figure())?)
    }
}
