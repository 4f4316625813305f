//! Application context: every piece of mutable view state in one place.
//!
//! Frontends own exactly one `AppContext` and route host events into it:
//! pointer moves go to [`AppContext::pointer_move`], window size changes to
//! [`AppContext::resize`], and each displayed frame calls
//! [`AppContext::tick`] before drawing.

use crate::catalog::Catalog;
use crate::controls::OrbitControls;
use crate::labels::{build_labels, project_to_screen, Label};
use crate::picking::{apply_selection, pick, HoverView, Selection};
use crate::scene::Scene;
use crate::state::{Camera, Viewport};
use glam::Vec2;

/// Result of one frame step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameOutput {
    /// Pixel position of each label, same order as the catalog.
    pub label_positions: Vec<Vec2>,
    pub camera_moved: bool,
}

pub struct AppContext {
    pub catalog: Catalog,
    pub scene: Scene,
    pub labels: Vec<Label>,
    pub camera: Camera,
    pub controls: OrbitControls,
    viewport: Viewport,
    selection: Selection,
}

impl AppContext {
    pub fn new(catalog: Catalog, viewport: Viewport) -> Self {
        let scene = Scene::build(&catalog);
        let labels = build_labels(&catalog);
        let camera = Camera {
            aspect: viewport.aspect(),
            ..Camera::default()
        };
        let controls = OrbitControls::new(&camera);
        Self {
            catalog,
            scene,
            labels,
            camera,
            controls,
            viewport,
            selection: Selection::None,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Recompute the selection for a pointer at pixel `(x, y)` and push the
    /// result to `view`. Every call fully replaces the previous selection.
    pub fn pointer_move(&mut self, x: f32, y: f32, view: &mut impl HoverView) -> &Selection {
        let next = pick(x, y, &self.camera, self.viewport, &self.scene);
        if next != self.selection {
            match next.name() {
                Some(name) => log::info!("[pick] hovering {}", name),
                None => log::info!("[pick] idle"),
            }
        }
        apply_selection(&next, view);
        self.selection = next;
        &self.selection
    }

    /// Update viewport and camera aspect together. Returns false (and
    /// changes nothing) for zero-sized or unchanged viewports.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        let next = Viewport::new(width, height);
        if next.is_empty() || next == self.viewport {
            return false;
        }
        self.viewport = next;
        self.camera.aspect = next.aspect();
        log::info!("[resize] {}x{}", width, height);
        true
    }

    pub fn label_positions(&self) -> Vec<Vec2> {
        self.labels
            .iter()
            .map(|l| project_to_screen(l.anchor, &self.camera, self.viewport))
            .collect()
    }

    /// Project labels with the current camera, then advance the orbit
    /// controls by one step. Drawing is left to the caller.
    pub fn tick(&mut self) -> FrameOutput {
        let label_positions = self.label_positions();
        let camera_moved = self.controls.update(&mut self.camera);
        FrameOutput {
            label_positions,
            camera_moved,
        }
    }
}
