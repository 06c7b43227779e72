//! Client-side catalog state, pagination and lookup.

use std::rc::Rc;

use sherpa_api_models::Room;
use thiserror::Error;

/// Rooms per page in the list view.
pub const LIST_PAGE_SIZE: usize = 9;

/// Errors surfaced by the catalog client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The request failed or the body could not be decoded.
    #[error("room catalog request failed")]
    Network {
        /// Transport or decode detail, for logs only.
        detail: String,
    },
    /// No room matches the requested identifier.
    #[error("room not found")]
    NotFound {
        /// Identifier as requested.
        id: String,
    },
}

/// Catalog data as seen by a page view.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    /// The single fetch for this view is in flight.
    Loading,
    /// The fetch settled; failures settle to an empty list.
    Ready(Rc<Vec<Room>>),
}

impl CatalogState {
    /// Settle a fetch outcome. Errors become an empty catalog; callers log
    /// them before handing the result over.
    #[must_use]
    pub fn settle(result: Result<Vec<Room>, CatalogError>) -> Self {
        Self::Ready(Rc::new(result.unwrap_or_default()))
    }
}

/// One page of the catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomPage<'a> {
    /// Rooms on this page, in catalog order.
    pub rooms: &'a [Room],
    /// 1-indexed page number after clamping.
    pub current: usize,
    /// Total number of pages, at least 1.
    pub total_pages: usize,
}

/// Slice `rooms` into 1-indexed pages of `page_size`.
///
/// Page 0 clamps to 1 and pages past the end clamp to the last page. An empty
/// list has exactly one, empty, page.
#[must_use]
pub fn paginate(rooms: &[Room], page_size: usize, page: usize) -> RoomPage<'_> {
    let page_size = page_size.max(1);
    let total_pages = rooms.len().div_ceil(page_size).max(1);
    let current = page.clamp(1, total_pages);
    let start = (current - 1) * page_size;
    let end = (start + page_size).min(rooms.len());
    RoomPage {
        rooms: rooms.get(start..end).unwrap_or_default(),
        current,
        total_pages,
    }
}

/// Find the room whose identifier matches `id` after numeric/string coercion.
///
/// # Errors
///
/// Returns [`CatalogError::NotFound`] when no room matches.
pub fn find_by_id<'a>(rooms: &'a [Room], id: &str) -> Result<&'a Room, CatalogError> {
    rooms
        .iter()
        .find(|room| room.id.matches(id))
        .ok_or_else(|| CatalogError::NotFound { id: id.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sherpa_api_models::RoomId;

    fn room(id: RoomId) -> Room {
        Room {
            name: format!("Room {id}"),
            id,
            description: String::new(),
            guests: 2,
            size: String::new(),
            beds: String::new(),
            price: 100.0,
            amenities: Vec::new(),
            features: Vec::new(),
            images: vec!["https://img.example/a.jpg".into()],
        }
    }

    fn rooms(count: u64) -> Vec<Room> {
        (1..=count).map(|n| room(RoomId::Number(n))).collect()
    }

    #[test]
    fn pages_hold_at_most_page_size() {
        let all = rooms(20);
        let first = paginate(&all, LIST_PAGE_SIZE, 1);
        assert_eq!(first.rooms.len(), 9);
        assert_eq!(first.total_pages, 3);
        let last = paginate(&all, LIST_PAGE_SIZE, 3);
        assert_eq!(last.rooms.len(), 2);
    }

    #[test]
    fn out_of_range_pages_clamp() {
        let all = rooms(20);
        assert_eq!(paginate(&all, 9, 0), paginate(&all, 9, 1));
        assert_eq!(paginate(&all, 9, 99), paginate(&all, 9, 3));
    }

    #[test]
    fn empty_catalog_has_one_empty_page() {
        let page = paginate(&[], LIST_PAGE_SIZE, 4);
        assert!(page.rooms.is_empty());
        assert_eq!(page.current, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn find_by_id_coerces_and_reports_missing() {
        let mut all = rooms(3);
        all.push(room(RoomId::Text("65f0a1".into())));
        assert_eq!(
            find_by_id(&all, "2").map(|room| &room.id),
            Ok(&RoomId::Number(2))
        );
        assert_eq!(
            find_by_id(&all, "65f0a1").map(|room| &room.id),
            Ok(&RoomId::Text("65f0a1".into()))
        );
        assert_eq!(
            find_by_id(&all, "9"),
            Err(CatalogError::NotFound { id: "9".into() })
        );
    }

    #[test]
    fn failed_fetch_settles_to_empty() {
        let state = CatalogState::settle(Err(CatalogError::Network {
            detail: "timeout".into(),
        }));
        assert_eq!(state, CatalogState::Ready(Rc::new(Vec::new())));
        assert_ne!(state, CatalogState::Loading);
    }
}
