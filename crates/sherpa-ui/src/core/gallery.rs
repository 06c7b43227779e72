//! Gallery media list.

/// Kind of gallery entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    /// Still image.
    Image,
    /// Muted looping clip.
    Video,
}

/// One gallery entry, served from the site's static assets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryItem {
    /// Site-relative source.
    pub src: &'static str,
    /// Rendering kind.
    pub kind: MediaKind,
}

const fn image(src: &'static str) -> GalleryItem {
    GalleryItem {
        src,
        kind: MediaKind::Image,
    }
}

/// Gallery contents in display order.
pub const GALLERY_ITEMS: &[GalleryItem] = &[
    GalleryItem {
        src: "/media/hero-video.mp4",
        kind: MediaKind::Video,
    },
    image("/media/gallery/lobby.jpg"),
    image("/media/gallery/deluxe-room.jpg"),
    image("/media/gallery/rooftop.jpg"),
    image("/media/gallery/breakfast.jpg"),
    image("/media/gallery/twin-room.jpg"),
    image("/media/gallery/thamel-street.jpg"),
    image("/media/gallery/reception.jpg"),
    image("/media/gallery/family-suite.jpg"),
    image("/media/gallery/terrace.jpg"),
    image("/media/gallery/stupa-view.jpg"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::carousel::CarouselCursor;

    #[test]
    fn lightbox_wraps_over_the_gallery() {
        let cursor = CarouselCursor::new(GALLERY_ITEMS.len());
        assert!(cursor.shows_controls());
        assert_eq!(cursor.prev().index(), GALLERY_ITEMS.len() - 1);
        assert!(GALLERY_ITEMS.iter().all(|item| item.src.starts_with('/')));
    }
}
