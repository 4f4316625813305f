// Host page contract and DOM styling used by the web frontend.

// Mount points that must exist before startup
pub const CONTAINER_ID: &str = "brain-container";
pub const INFO_PANEL_ID: &str = "region-info";
pub const INFO_TEXT_ID: &str = "region-name";

// Label elements
pub const LABEL_CLASS: &str = "label";
pub const LABEL_BASE_STYLE: &str = "position:absolute;left:0;top:0;pointer-events:none;";

// Cursor styles on document.body
pub const CURSOR_HOVER: &str = "pointer";
pub const CURSOR_DEFAULT: &str = "auto";

// Info panel display values
pub const PANEL_SHOWN: &str = "block";
pub const PANEL_HIDDEN: &str = "none";
