//! Route table keyed by (language, logical page).
//!
//! # Design
//! - One pattern per locale and page kind, built once and shared.
//! - Unmatched paths resolve to a redirect, never to an error page.

use crate::core::locale;
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};

/// Path parameter placeholder used in room-detail patterns.
const ID_PARAM: &str = ":id";

/// Logical page without its parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    /// Landing page.
    Home,
    /// Hotel story and values.
    About,
    /// Service overview.
    Services,
    /// Room catalog list.
    Rooms,
    /// Single room.
    RoomDetail,
    /// Contact details.
    Contact,
    /// Photo gallery.
    Gallery,
    /// Standalone booking inquiry.
    BookNow,
}

impl PageKind {
    /// Every page kind in table order.
    #[must_use]
    pub const fn all() -> [Self; 8] {
        [
            Self::Home,
            Self::About,
            Self::Services,
            Self::Rooms,
            Self::RoomDetail,
            Self::Contact,
            Self::Gallery,
            Self::BookNow,
        ]
    }

    const fn slug(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::About => "about",
            Self::Services => "services",
            Self::Rooms => "rooms",
            Self::RoomDetail => "room/:id",
            Self::Contact => "contact",
            Self::Gallery => "gallery",
            Self::BookNow => "book-now",
        }
    }
}

/// Logical page with its parameters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    /// Landing page.
    Home,
    /// Hotel story and values.
    About,
    /// Service overview.
    Services,
    /// Room catalog list.
    Rooms,
    /// Single room; `id` is the raw path segment.
    RoomDetail {
        /// Room identifier as it appeared in the path.
        id: String,
    },
    /// Contact details.
    Contact,
    /// Photo gallery.
    Gallery,
    /// Standalone booking inquiry.
    BookNow,
}

impl Page {
    /// Parameterless kind of this page.
    #[must_use]
    pub const fn kind(&self) -> PageKind {
        match self {
            Self::Home => PageKind::Home,
            Self::About => PageKind::About,
            Self::Services => PageKind::Services,
            Self::Rooms => PageKind::Rooms,
            Self::RoomDetail { .. } => PageKind::RoomDetail,
            Self::Contact => PageKind::Contact,
            Self::Gallery => PageKind::Gallery,
            Self::BookNow => PageKind::BookNow,
        }
    }

    /// Whether the header and footer wrap this page.
    ///
    /// Room details render full-bleed in every language.
    #[must_use]
    pub const fn shows_shell(&self) -> bool {
        !matches!(self, Self::RoomDetail { .. })
    }
}

/// A matched page together with the locale its prefix selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalizedRoute {
    /// Locale selected by the path prefix (default when unprefixed).
    pub locale: LocaleCode,
    /// Page to render.
    pub page: Page,
}

/// Result of resolving a path against the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteMatch {
    /// The path names a page.
    Matched(LocalizedRoute),
    /// The path is unknown; replace it with this one.
    Redirect(String),
}

#[derive(Clone, Debug)]
struct RouteEntry {
    locale: LocaleCode,
    kind: PageKind,
    segments: Vec<&'static str>,
}

/// Table of every (locale, page) pattern.
#[derive(Clone, Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteTable {
    /// Build one entry per supported locale and page kind.
    #[must_use]
    pub fn new() -> Self {
        let entries = LocaleCode::all()
            .into_iter()
            .flat_map(|locale| {
                PageKind::all().into_iter().map(move |kind| {
                    let mut segments = Vec::new();
                    if locale != DEFAULT_LOCALE {
                        segments.push(locale.code());
                    }
                    segments.extend(kind.slug().split('/').filter(|part| !part.is_empty()));
                    RouteEntry {
                        locale,
                        kind,
                        segments,
                    }
                })
            })
            .collect();
        Self { entries }
    }

    /// Number of patterns in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no patterns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a browser path. Trailing and doubled slashes are ignored.
    #[must_use]
    pub fn parse(&self, path: &str) -> RouteMatch {
        let parts: Vec<&str> = path.split('/').filter(|part| !part.is_empty()).collect();
        self.entries
            .iter()
            .find_map(|entry| match_entry(entry, &parts))
            .map_or_else(|| RouteMatch::Redirect(home_path()), RouteMatch::Matched)
    }

    /// Path of `page` in `locale`.
    #[must_use]
    pub fn href(&self, locale: LocaleCode, page: &Page) -> String {
        let kind = page.kind();
        let Some(entry) = self
            .entries
            .iter()
            .find(|entry| entry.locale == locale && entry.kind == kind)
        else {
            return home_path();
        };
        let rendered: Vec<&str> = entry
            .segments
            .iter()
            .map(|segment| match (segment, page) {
                (&ID_PARAM, Page::RoomDetail { id }) => id.as_str(),
                _ => *segment,
            })
            .collect();
        format!("/{}", rendered.join("/"))
    }
}

fn match_entry(entry: &RouteEntry, parts: &[&str]) -> Option<LocalizedRoute> {
    if entry.segments.len() != parts.len() {
        return None;
    }
    let mut id = None;
    for (pattern, part) in entry.segments.iter().zip(parts) {
        if *pattern == ID_PARAM {
            id = Some((*part).to_string());
        } else if pattern != part {
            return None;
        }
    }
    let page = match entry.kind {
        PageKind::Home => Page::Home,
        PageKind::About => Page::About,
        PageKind::Services => Page::Services,
        PageKind::Rooms => Page::Rooms,
        PageKind::RoomDetail => Page::RoomDetail { id: id? },
        PageKind::Contact => Page::Contact,
        PageKind::Gallery => Page::Gallery,
        PageKind::BookNow => Page::BookNow,
    };
    Some(LocalizedRoute {
        locale: entry.locale,
        page,
    })
}

fn home_path() -> String {
    "/".to_string()
}

/// Rewrite `path` for `to`: strip a known prefix, prepend the new one
/// (none for the default language) and keep the remainder.
#[must_use]
pub fn switch_locale(path: &str, to: LocaleCode) -> String {
    let (_, rest) = locale::split_prefix(path);
    let rest = rest.trim_end_matches('/');
    let joined = format!("{}{rest}", locale::prefix(to));
    if joined.is_empty() {
        home_path()
    } else {
        joined
    }
}
