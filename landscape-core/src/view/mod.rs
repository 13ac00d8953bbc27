//! Paired contour/surface panels and their composition.

mod composed;
mod composer;
pub mod export;
mod layer;
mod panel;
mod summary;

pub use composed::{Cell, ComposedView};
pub use composer::ViewComposer;
pub use layer::{Arrow, Layer, LineRole, Polyline, Polyline3d, SurfaceStyle};
pub use panel::{Panel, PanelKind, PanelLayout};
pub use summary::RunSummary;
