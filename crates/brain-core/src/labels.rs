use crate::catalog::{Catalog, Region};
use crate::state::{Camera, Viewport};
use glam::{Vec2, Vec3};

/// Screen-space text for one region. `anchor` is a copy of the region
/// position taken at build time and is never updated.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub anchor: Vec3,
}

pub fn build_label(region: &Region) -> Label {
    Label {
        text: region.name.clone(),
        anchor: region.position,
    }
}

/// One label per region, same order as the catalog.
pub fn build_labels(catalog: &Catalog) -> Vec<Label> {
    catalog.iter().map(build_label).collect()
}

/// Project a world point to viewport pixels (origin top-left).
///
/// No culling: points behind the camera or outside the view still get a
/// (possibly off-screen) coordinate.
#[inline]
pub fn project_to_screen(anchor: Vec3, camera: &Camera, viewport: Viewport) -> Vec2 {
    let ndc = camera.view_projection().project_point3(anchor);
    Vec2::new(
        (ndc.x * 0.5 + 0.5) * viewport.width as f32,
        (-ndc.y * 0.5 + 0.5) * viewport.height as f32,
    )
}

/// CSS transform that centers an element on `px`.
pub fn label_transform(px: Vec2) -> String {
    format!("translate(-50%, -50%) translate({}px, {}px)", px.x, px.y)
}
