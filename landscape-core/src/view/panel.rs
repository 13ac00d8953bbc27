use serde::Serialize;

use crate::geometry::{Domain, Interval, Point2};
use crate::sampling::SampledField;

use super::layer::{Arrow, Layer, LineRole, SurfaceStyle};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum PanelKind {
    /// Line contour in the (x1, x2) plane.
    Planar,
    /// Surface in (x1, x2, f(x)) space.
    Volumetric(SurfaceStyle),
}

/// Figure-level metadata of a panel or a composed view.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PanelLayout {
    pub title: Option<String>,
    pub template: String,
    pub width: u32,
    pub height: u32,
    /// Titles of the x1, x2 and f(x) axes.
    pub axis_titles: [&'static str; 3],
}

/// One renderable surface: a sampled field plus overlays.
///
/// The displayed domain is always the field's domain. Overlays live in data
/// coordinates and are never resampled.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Panel {
    kind: PanelKind,
    field: SampledField,
    overlays: Vec<Layer>,
    annotations: Vec<Arrow>,
    layout: PanelLayout,
    result: Option<Point2>,
}

impl Panel {
    pub(crate) fn new(kind: PanelKind, field: SampledField, layout: PanelLayout) -> Self {
        Self {
            kind,
            field,
            overlays: Vec::new(),
            annotations: Vec::new(),
            layout,
            result: None,
        }
    }

    pub fn kind(&self) -> &PanelKind {
        &self.kind
    }

    pub fn is_planar(&self) -> bool {
        matches!(self.kind, PanelKind::Planar)
    }

    pub fn field(&self) -> &SampledField {
        &self.field
    }

    pub fn domain(&self) -> Domain {
        self.field.domain()
    }

    pub fn x_range(&self) -> Interval {
        self.domain().x
    }

    pub fn y_range(&self) -> Interval {
        self.domain().y
    }

    /// Overlay layers in attachment order.
    pub fn overlays(&self) -> &[Layer] {
        &self.overlays
    }

    pub fn annotations(&self) -> &[Arrow] {
        &self.annotations
    }

    pub fn layout(&self) -> &PanelLayout {
        &self.layout
    }

    pub fn title(&self) -> Option<&str> {
        self.layout.title.as_deref()
    }

    /// Final point of the attached trajectory.
    pub fn result(&self) -> Option<Point2> {
        self.result
    }

    pub fn trajectory_overlay(&self) -> Option<&Layer> {
        self.overlays
            .iter()
            .find(|l| l.role() == Some(LineRole::Trajectory))
    }

    pub fn constraint_overlay(&self) -> Option<&Layer> {
        self.overlays
            .iter()
            .find(|l| l.role() == Some(LineRole::Constraint))
    }

    /// The field rendering followed by every overlay, in drawing order.
    pub fn layers(&self) -> Vec<Layer> {
        let mut layers = Vec::with_capacity(self.overlays.len() + 1);
        layers.push(self.field_layer());
        layers.extend(self.overlays.iter().cloned());
        layers
    }

    /// Run `edit` on a copy of the panel and keep the copy only if `edit`
    /// returns `Ok`.
    ///
    /// Lets callers whose callbacks report failure after the fact (e.g. an
    /// error slot checked once sampling is done) discard a half-made change.
    pub fn edit<E, F>(&mut self, edit: F) -> std::result::Result<(), E>
    where
        F: FnOnce(&mut Panel) -> std::result::Result<(), E>,
    {
        let mut next = self.clone();
        edit(&mut next)?;
        *self = next;
        Ok(())
    }

    pub(crate) fn field_layer(&self) -> Layer {
        match &self.kind {
            PanelKind::Planar => Layer::Contour(self.field.clone()),
            PanelKind::Volumetric(style) => Layer::Surface {
                field: self.field.clone(),
                style: style.clone(),
            },
        }
    }

    pub(crate) fn replace_field(&mut self, field: SampledField) {
        self.field = field;
    }

    /// Attach an overlay; one with the same role is replaced in its slot.
    pub(crate) fn set_overlay(&mut self, layer: Layer) {
        let role = layer.role();
        match self
            .overlays
            .iter_mut()
            .find(|l| role.is_some() && l.role() == role)
        {
            Some(slot) => *slot = layer,
            None => self.overlays.push(layer),
        }
    }

    pub(crate) fn push_annotation(&mut self, arrow: Arrow) {
        self.annotations.push(arrow);
    }

    pub(crate) fn set_result(&mut self, result: Point2) {
        self.result = Some(result);
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.layout.title = Some(title);
    }

    pub(crate) fn into_parts(self) -> (Vec<Layer>, Vec<Arrow>, PanelLayout, Option<Point2>) {
        let layers = self.layers();
        (layers, self.annotations, self.layout, self.result)
    }
}
