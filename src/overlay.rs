use crate::constants::{CURSOR_DEFAULT, CURSOR_HOVER, PANEL_HIDDEN, PANEL_SHOWN};
use brain_core::HoverView;
use web_sys as web;

/// Hover feedback in the host page: the region-info panel plus the body
/// cursor.
pub struct InfoPanel {
    body: web::HtmlElement,
    panel: web::HtmlElement,
    text: web::Element,
}

impl InfoPanel {
    pub fn new(body: web::HtmlElement, panel: web::HtmlElement, text: web::Element) -> Self {
        let mut info = Self { body, panel, text };
        info.clear();
        info
    }
}

impl HoverView for InfoPanel {
    fn show_region(&mut self, name: &str) {
        self.text.set_text_content(Some(name));
        _ = self.panel.style().set_property("display", PANEL_SHOWN);
        _ = self.body.style().set_property("cursor", CURSOR_HOVER);
    }

    fn clear(&mut self) {
        _ = self.panel.style().set_property("display", PANEL_HIDDEN);
        _ = self.body.style().set_property("cursor", CURSOR_DEFAULT);
    }
}
