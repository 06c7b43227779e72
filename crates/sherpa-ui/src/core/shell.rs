//! Header behaviour, scroll locking and active-link matching.
//!
//! # Design
//! - Scroll suspension is a set of holders, not a flag, so one surface closing
//!   cannot re-enable scrolling while another is still open.
//! - Releases are idempotent; every holder releases on close and on unmount.

use std::collections::BTreeSet;

use crate::core::locale;
use crate::core::routing::Page;

/// Vertical scroll offset (px) past which the header turns opaque.
pub const SCROLL_THRESHOLD: f64 = 50.0;
/// Viewport width (px) from which the desktop navigation is shown.
pub const DESKTOP_MIN_WIDTH: f64 = 1024.0;

/// Header presentation state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct HeaderState {
    /// Opaque header once the page has scrolled.
    pub scrolled: bool,
    /// Mobile slide-in panel open.
    pub menu_open: bool,
}

impl HeaderState {
    /// Apply a scroll position.
    #[must_use]
    pub fn on_scroll(self, offset_y: f64) -> Self {
        Self {
            scrolled: offset_y > SCROLL_THRESHOLD,
            ..self
        }
    }

    /// Apply a viewport width; the mobile panel closes on desktop widths.
    #[must_use]
    pub fn on_resize(self, width: f64) -> Self {
        if width >= DESKTOP_MIN_WIDTH {
            self.close_menu()
        } else {
            self
        }
    }

    /// Flip the mobile panel.
    #[must_use]
    pub const fn toggle_menu(self) -> Self {
        Self {
            menu_open: !self.menu_open,
            ..self
        }
    }

    /// Close the mobile panel.
    #[must_use]
    pub const fn close_menu(self) -> Self {
        Self {
            menu_open: false,
            ..self
        }
    }
}

/// Events the header reacts to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HeaderAction {
    /// Window scrolled to this vertical offset.
    Scrolled(f64),
    /// Window resized to this width.
    Resized(f64),
    /// Hamburger pressed.
    ToggleMenu,
    /// Link followed or route changed.
    CloseMenu,
}

impl HeaderState {
    /// Apply one header event.
    #[must_use]
    pub fn apply(self, action: HeaderAction) -> Self {
        match action {
            HeaderAction::Scrolled(offset_y) => self.on_scroll(offset_y),
            HeaderAction::Resized(width) => self.on_resize(width),
            HeaderAction::ToggleMenu => self.toggle_menu(),
            HeaderAction::CloseMenu => self.close_menu(),
        }
    }
}

/// Surfaces that may suspend page scrolling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScrollHolder {
    /// Mobile navigation panel.
    MobileMenu,
    /// Header booking-inquiry modal.
    BookingModal,
    /// Gallery lightbox.
    GalleryLightbox,
}

/// Set of surfaces currently suspending scroll.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ScrollLock {
    holders: BTreeSet<ScrollHolder>,
}

impl ScrollLock {
    /// Add a holder; adding twice is a no-op.
    pub fn acquire(&mut self, holder: ScrollHolder) {
        self.holders.insert(holder);
    }

    /// Remove a holder; removing an absent holder is a no-op.
    pub fn release(&mut self, holder: ScrollHolder) {
        self.holders.remove(&holder);
    }

    /// Whether any holder is active.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        !self.holders.is_empty()
    }
}

/// Whether `target` is the page at `current`, ignoring locale prefixes and
/// trailing slashes.
#[must_use]
pub fn is_active_link(current: &str, target: &str) -> bool {
    normalise(current) == normalise(target)
}

fn normalise(path: &str) -> &str {
    let (_, rest) = locale::split_prefix(path);
    let rest = rest.trim_end_matches('/');
    if rest.is_empty() { "/" } else { rest }
}

/// A header navigation entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// Destination page.
    pub page: Page,
    /// Translation key of the label.
    pub label_key: &'static str,
}

/// Header and footer navigation entries, in display order.
#[must_use]
pub fn nav_items() -> [NavItem; 5] {
    [
        NavItem {
            page: Page::Home,
            label_key: "nav.home",
        },
        NavItem {
            page: Page::About,
            label_key: "nav.about",
        },
        NavItem {
            page: Page::Rooms,
            label_key: "nav.rooms",
        },
        NavItem {
            page: Page::Gallery,
            label_key: "nav.gallery",
        },
        NavItem {
            page: Page::Contact,
            label_key: "nav.contact",
        },
    ]
}
