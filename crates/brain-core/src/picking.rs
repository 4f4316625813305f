use crate::scene::{MarkerId, Scene};
use crate::state::{Camera, Viewport};
use glam::{Vec2, Vec3, Vec4};
use smallvec::SmallVec;

/// Map pixel coordinates (origin top-left) to normalized device
/// coordinates in [-1, 1] with +Y up.
#[inline]
pub fn pointer_to_ndc(x: f32, y: f32, viewport: Viewport) -> Vec2 {
    let w = viewport.width.max(1) as f32;
    let h = viewport.height.max(1) as f32;
    Vec2::new((x / w) * 2.0 - 1.0, -(y / h) * 2.0 + 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length.
    pub dir: Vec3,
}

impl Ray {
    /// Ray from the camera eye through an NDC point on the image plane.
    pub fn from_camera(camera: &Camera, ndc: Vec2) -> Self {
        let inv = camera.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let origin = camera.eye;
        Self {
            origin,
            dir: (p1 - origin).normalize(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Distance along the ray to where it enters an axis-aligned ellipsoid.
///
/// Only entering hits count: a ray starting inside the ellipsoid, or one
/// whose ellipsoid lies behind the origin, returns `None`.
#[inline]
pub fn ray_ellipsoid(ray: &Ray, center: Vec3, radii: Vec3) -> Option<f32> {
    // In the ellipsoid's local frame it is the unit sphere; `t` is shared.
    let o = (ray.origin - center) / radii;
    let d = ray.dir / radii;
    let a = d.dot(d);
    let b = o.dot(d);
    let c = o.dot(o) - 1.0;
    let disc = b * b - a * c;
    if disc < 0.0 || a <= 0.0 {
        return None;
    }
    let t = (-b - disc.sqrt()) / a;
    (t >= 0.0).then_some(t)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub marker: MarkerId,
    pub distance: f32,
    pub point: Vec3,
}

/// All marker hits along the ray, nearest first. Equal distances keep
/// catalog order, so the lower marker index wins a tie.
pub fn intersect_markers(ray: &Ray, scene: &Scene) -> SmallVec<[Hit; 4]> {
    let mut hits: SmallVec<[Hit; 4]> = scene
        .markers()
        .iter()
        .enumerate()
        .filter_map(|(i, m)| {
            ray_ellipsoid(ray, m.center, m.radii).map(|t| Hit {
                marker: MarkerId(i),
                distance: t,
                point: ray.at(t),
            })
        })
        .collect();
    // stable sort
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

/// Which region, if any, is under the pointer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Hovering(String),
}

impl Selection {
    pub fn name(&self) -> Option<&str> {
        match self {
            Selection::None => None,
            Selection::Hovering(name) => Some(name.as_str()),
        }
    }

    pub fn is_hovering(&self) -> bool {
        matches!(self, Selection::Hovering(_))
    }
}

/// Host-side effects of a pick: cursor style and the info panel.
pub trait HoverView {
    /// Interactive cursor, panel shown with `name`.
    fn show_region(&mut self, name: &str);
    /// Default cursor, panel hidden.
    fn clear(&mut self);
}

/// Resolve the selection for a pointer at pixel `(x, y)` from scratch.
pub fn pick(x: f32, y: f32, camera: &Camera, viewport: Viewport, scene: &Scene) -> Selection {
    let ray = Ray::from_camera(camera, pointer_to_ndc(x, y, viewport));
    intersect_markers(&ray, scene)
        .first()
        .and_then(|hit| scene.marker_name(hit.marker))
        .map(|name| Selection::Hovering(name.to_owned()))
        .unwrap_or_default()
}

/// Push a selection out to the host view.
pub fn apply_selection(selection: &Selection, view: &mut impl HoverView) {
    match selection {
        Selection::Hovering(name) => view.show_region(name),
        Selection::None => view.clear(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ndc_corners_and_center() {
        let vp = Viewport::new(800, 600);
        assert_eq!(pointer_to_ndc(0.0, 0.0, vp), Vec2::new(-1.0, 1.0));
        assert_eq!(pointer_to_ndc(800.0, 600.0, vp), Vec2::new(1.0, -1.0));
        assert_eq!(pointer_to_ndc(400.0, 300.0, vp), Vec2::ZERO);
    }

    #[test]
    fn center_ray_points_down_negative_z() {
        let camera = Camera::default();
        let ray = Ray::from_camera(&camera, Vec2::ZERO);
        assert_eq!(ray.origin, Vec3::new(0.0, 0.0, 5.0));
        assert!((ray.dir - Vec3::NEG_Z).length() < 1e-4);
    }
}
