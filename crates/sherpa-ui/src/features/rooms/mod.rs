//! Room catalog pages.

mod detail;
mod list;

pub(crate) use detail::RoomDetailPage;
pub(crate) use list::RoomsPage;
