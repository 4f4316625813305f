use crate::constants::{LABEL_BASE_STYLE, LABEL_CLASS};
use crate::teardown::Teardown;
use brain_core::{label_transform, Label};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One absolutely positioned `div.label` per region, appended to the
/// container and moved every frame with a CSS transform. Each appended
/// element registers its removal with `teardown`.
pub struct LabelOverlay {
    elements: Vec<web::HtmlElement>,
}

impl LabelOverlay {
    pub fn new(
        document: &web::Document,
        container: &web::HtmlElement,
        labels: &[Label],
        teardown: &mut Teardown,
    ) -> anyhow::Result<Self> {
        let mut elements = Vec::with_capacity(labels.len());
        for label in labels {
            let el = document
                .create_element("div")
                .map_err(|e| anyhow::anyhow!("{:?}", e))?
                .dyn_into::<web::HtmlElement>()
                .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
            el.set_class_name(LABEL_CLASS);
            _ = el.set_attribute("style", LABEL_BASE_STYLE);
            el.set_text_content(Some(&label.text));
            container
                .append_child(&el)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            let appended = el.clone();
            teardown.push(move || appended.remove());
            elements.push(el);
        }
        log::info!("[labels] {} elements", elements.len());
        Ok(Self { elements })
    }

    /// Positions are matched to elements by index.
    pub fn apply(&self, positions: &[Vec2]) {
        for (el, px) in self.elements.iter().zip(positions) {
            _ = el.style().set_property("transform", &label_transform(*px));
        }
    }
}
