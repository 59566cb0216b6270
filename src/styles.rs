//! Inline style definitions shared by the navigation menu and layout.

/// Header container wrapping the navigation row.
pub const MAIN_HEADER_STYLE: &str = "border-bottom: 1px solid #ececf1; \
     padding: 8px 16px; \
     margin-bottom: 16px;";

/// Flex row holding the page buttons.
pub const NAV_ROW_STYLE: &str = "display: flex; flex-direction: row; gap: 12px;";

/// Highlight for the current page's button.
pub const CURRENT_NAV_STYLE: &str = "background-color: #1a73e8; \
     color: #ffffff; \
     border-color: #1a73e8; \
     font-weight: 600;";

/// Style of every other page button.
pub const DEFAULT_NAV_STYLE: &str = "";

/// Layout body spacing below the header.
pub const MAIN_CONTENT_STYLE: &str = "padding: 0 16px;";
