//! Scene model: the translucent shell plus one ellipsoidal marker per region.
//!
//! Markers carry geometry and material only. The region name for a marker is
//! kept in a side table indexed by [`MarkerId`], which is also the catalog
//! index of the region the marker was built from.

use crate::catalog::{Catalog, Region, Rgb};
use crate::constants::*;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerId(pub usize);

/// Whole-brain outline. Drawn as a wireframe and never picked.
#[derive(Clone, Debug, PartialEq)]
pub struct Shell {
    pub center: Vec3,
    pub radii: Vec3,
    pub color: Rgb,
    pub opacity: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub center: Vec3,
    pub radii: Vec3,
    pub color: Rgb,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    pub ambient: Rgb,
    pub ambient_intensity: f32,
    pub directional: Rgb,
    pub directional_intensity: f32,
    /// Light position; the light shines from here towards the origin.
    pub directional_position: Vec3,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: Rgb(AMBIENT_COLOR),
            ambient_intensity: AMBIENT_INTENSITY,
            directional: Rgb(DIRECTIONAL_COLOR),
            directional_intensity: DIRECTIONAL_INTENSITY,
            directional_position: Vec3::from(DIRECTIONAL_POSITION),
        }
    }
}

pub fn build_shell() -> Shell {
    Shell {
        center: Vec3::ZERO,
        radii: shell_radii(),
        color: Rgb(SHELL_COLOR),
        opacity: SHELL_OPACITY,
    }
}

pub fn build_marker(region: &Region) -> Marker {
    Marker {
        center: region.position,
        radii: region.scale,
        color: region.color,
        opacity: region.opacity.unwrap_or(MARKER_DEFAULT_OPACITY),
    }
}

#[derive(Clone, Debug)]
pub struct Scene {
    pub background: Rgb,
    pub lighting: Lighting,
    shell: Shell,
    markers: Vec<Marker>,
    names: Vec<String>,
}

impl Scene {
    /// Shell first, then markers in catalog order.
    pub fn build(catalog: &Catalog) -> Self {
        let shell = build_shell();
        let mut markers = Vec::with_capacity(catalog.len());
        let mut names = Vec::with_capacity(catalog.len());
        for region in catalog {
            markers.push(build_marker(region));
            names.push(region.name.clone());
        }
        log::info!("[scene] shell + {} markers", markers.len());
        Self {
            background: Rgb(BACKGROUND_COLOR),
            lighting: Lighting::default(),
            shell,
            markers,
            names,
        }
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn marker(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.get(id.0)
    }

    pub fn marker_name(&self, id: MarkerId) -> Option<&str> {
        self.names.get(id.0).map(String::as_str)
    }

    pub fn marker_ids(&self) -> impl Iterator<Item = MarkerId> {
        (0..self.markers.len()).map(MarkerId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RegionBuilder;

    #[test]
    fn opacity_override_and_default() {
        let catalog = Catalog::from_builders(vec![
            RegionBuilder::new()
                .name("Plain")
                .color(0x112233)
                .position(0.0, 0.0, 0.0)
                .scale(1.0, 1.0, 1.0),
            RegionBuilder::new()
                .name("Faded")
                .color(0x445566)
                .position(1.0, 0.0, 0.0)
                .scale(0.2, 0.2, 0.2)
                .opacity(0.7),
        ])
        .unwrap();
        let scene = Scene::build(&catalog);
        assert_eq!(scene.markers()[0].opacity, MARKER_DEFAULT_OPACITY);
        assert_eq!(scene.markers()[1].opacity, 0.7);
        assert_eq!(scene.markers()[1].radii, Vec3::splat(0.2));
        assert_eq!(scene.marker_name(MarkerId(1)), Some("Faded"));
        assert_eq!(scene.marker_name(MarkerId(2)), None);
    }

    #[test]
    fn shell_is_translucent_ellipsoid() {
        let shell = build_shell();
        assert_eq!(shell.opacity, 0.2);
        assert!((shell.radii - Vec3::new(1.5, 1.2, 1.8)).length() < 1e-6);
    }

    #[test]
    fn marker_ids_walk_markers_in_catalog_order() {
        let catalog = Catalog::builtin().unwrap();
        let scene = Scene::build(&catalog);
        let ids: Vec<MarkerId> = scene.marker_ids().collect();
        assert_eq!(ids.len(), catalog.len());
        for (id, region) in ids.into_iter().zip(&catalog) {
            let marker = scene.marker(id).unwrap();
            assert_eq!(marker.center, region.position);
            assert_eq!(marker.radii, region.scale);
        }
        assert!(scene.marker(MarkerId(catalog.len())).is_none());
    }
}
