//! The markup contract a strip is mounted on.
//!
//! ```text
//! <scrollable-subcollections>
//!   <button class="scroll-arrow--left">
//!   <nav class="scrollable-subcollection-nav" data-auto-scroll="true">
//!     <a class="scrollable-subcollection-nav-button" href=".." data-collection="..">
//!     ...
//!   <button class="scroll-arrow--right">
//! ```

use crate::element::Element;
use crate::error::MountError;

pub const NAV_CLASS: &str = "scrollable-subcollection-nav";
pub const LEFT_ARROW_CLASS: &str = "scroll-arrow--left";
pub const RIGHT_ARROW_CLASS: &str = "scroll-arrow--right";
pub const BUTTON_CLASS: &str = "scrollable-subcollection-nav-button";
pub const ACTIVE_CLASS: &str = "active";

pub const HANDLE_ATTR: &str = "data-collection";
pub const AUTO_SCROLL_ATTR: &str = "data-auto-scroll";

/// One navigable entry, captured at mount.
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub href: Option<String>,
    /// Lookup key for [`NavStrip::scroll_to_collection`](crate::NavStrip::scroll_to_collection).
    pub handle: Option<String>,
    /// Left edge relative to the start of the scrollable content.
    pub offset_left: f32,
    pub width: f32,
}

impl NavItem {
    fn from_element(element: &Element) -> Self {
        Self {
            id: element.id.clone(),
            label: element.label().to_string(),
            href: element.attribute("href").map(str::to_string),
            handle: element.attribute(HANDLE_ATTR).map(str::to_string),
            offset_left: element.offset_left,
            width: element.width,
        }
    }

    pub fn right(&self) -> f32 {
        self.offset_left + self.width
    }

    /// Offset that centers this item in a viewport of `viewport` pixels.
    pub fn centered_offset(&self, viewport: f32) -> f32 {
        centered_offset(self.offset_left, self.width, viewport)
    }
}

/// Offset that centers a box starting at `left` in a viewport of `viewport` pixels.
pub fn centered_offset(left: f32, width: f32, viewport: f32) -> f32 {
    left - viewport / 2.0 + width / 2.0
}

/// Element ids and layout of a strip's markup.
#[derive(Debug, Clone, PartialEq)]
pub struct Parts {
    pub nav: String,
    /// Left edge of the scroll region on the page.
    pub nav_left: f32,
    /// Visible width at mount. The live value is the region's viewport extent.
    pub nav_width: f32,
    pub auto_scroll: bool,
    pub left_arrow: Option<String>,
    pub right_arrow: Option<String>,
    pub items: Vec<NavItem>,
}

impl Parts {
    /// Both arrow ids. Arrow state is only synced when the markup has both.
    pub fn arrows(&self) -> Option<(&str, &str)> {
        Some((self.left_arrow.as_deref()?, self.right_arrow.as_deref()?))
    }

    pub fn arrow_side(&self, id: &str) -> Option<ArrowSide> {
        if self.left_arrow.as_deref() == Some(id) {
            Some(ArrowSide::Left)
        } else if self.right_arrow.as_deref() == Some(id) {
            Some(ArrowSide::Right)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowSide {
    Left,
    Right,
}

/// Locate the strip's parts inside `root`.
pub fn locate(root: &Element) -> Result<Parts, MountError> {
    let nav = root.query_class(NAV_CLASS).ok_or_else(|| MountError::MissingNav {
        container: root.id.clone(),
        class: NAV_CLASS,
    })?;

    let left_arrow = root.query_class(LEFT_ARROW_CLASS).map(|el| el.id.clone());
    let right_arrow = root.query_class(RIGHT_ARROW_CLASS).map(|el| el.id.clone());
    if left_arrow.is_some() != right_arrow.is_some() {
        log::debug!("[navstrip] only one arrow in {}, arrow state not synced", root.id);
    }

    let items: Vec<NavItem> = nav
        .query_class_all(BUTTON_CLASS)
        .into_iter()
        .map(NavItem::from_element)
        .collect();

    Ok(Parts {
        nav: nav.id.clone(),
        nav_left: nav.offset_left,
        nav_width: nav.width,
        auto_scroll: nav.attribute(AUTO_SCROLL_ATTR) == Some("true"),
        left_arrow,
        right_arrow,
        items,
    })
}
