//! View models for room cards, pagination controls and the detail page.

use std::ops::RangeInclusive;

use sherpa_api_models::Room;

/// Characters of description shown on a card.
pub const CARD_DESCRIPTION_CHARS: usize = 120;
/// Amenities listed on a card before the overflow count.
pub const CARD_AMENITY_LIMIT: usize = 3;
/// Check-in time shown on the detail page.
pub const CHECK_IN_TIME: &str = "12:00";
/// Check-out time shown on the detail page.
pub const CHECK_OUT_TIME: &str = "12:00";
/// Translation keys of the house notes under the check-in/out cards.
pub const HOUSE_NOTE_KEYS: [&str; 3] = [
    "room.detail.notes.id",
    "room.detail.notes.early",
    "room.detail.notes.late",
];

/// Everything a list-view card renders.
#[derive(Clone, Debug, PartialEq)]
pub struct CardSummary {
    /// Path segment for the detail link.
    pub id: String,
    /// Primary image URL (may be empty).
    pub image: String,
    /// Room name.
    pub name: String,
    /// Guest capacity.
    pub guests: u32,
    /// Floor area label.
    pub size: String,
    /// Bed configuration label.
    pub beds: String,
    /// Truncated description.
    pub excerpt: String,
    /// Leading amenities.
    pub amenities: Vec<String>,
    /// Amenities not shown.
    pub more_amenities: usize,
    /// First feature, shown as a badge.
    pub badge: Option<String>,
    /// Nightly price.
    pub price: f64,
}

impl CardSummary {
    /// Summarise `room` for a card.
    #[must_use]
    pub fn from_room(room: &Room) -> Self {
        let shown = room.amenities.len().min(CARD_AMENITY_LIMIT);
        Self {
            id: room.id.to_string(),
            image: room.primary_image().to_string(),
            name: room.name.clone(),
            guests: room.guests,
            size: room.size.clone(),
            beds: room.beds.clone(),
            excerpt: truncate_chars(&room.description, CARD_DESCRIPTION_CHARS),
            amenities: room.amenities[..shown].to_vec(),
            more_amenities: room.amenities.len() - shown,
            badge: room.features.first().cloned(),
            price: room.price,
        }
    }
}

/// Cut `text` to `limit` characters, appending an ellipsis when shortened.
#[must_use]
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte, _)) => format!("{}…", text[..byte].trim_end()),
        None => text.to_string(),
    }
}

/// Price label: whole amounts without decimals, others with two.
#[must_use]
pub fn format_price(price: f64) -> String {
    if price.fract().abs() < f64::EPSILON {
        format!("{price:.0}")
    } else {
        format!("{price:.2}")
    }
}

/// Previous/next and numbered page buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageControls {
    /// Current page (1-indexed).
    pub current: usize,
    /// Total pages, at least 1.
    pub total: usize,
}

impl PageControls {
    /// Controls for `current` of `total`, clamped into range.
    #[must_use]
    pub fn new(current: usize, total: usize) -> Self {
        let total = total.max(1);
        Self {
            current: current.clamp(1, total),
            total,
        }
    }

    /// Hidden when everything fits on one page.
    #[must_use]
    pub const fn visible(self) -> bool {
        self.total > 1
    }

    /// Numbered buttons.
    #[must_use]
    pub const fn pages(self) -> RangeInclusive<usize> {
        1..=self.total
    }

    /// Target of the previous button; `None` disables it.
    #[must_use]
    pub const fn prev(self) -> Option<usize> {
        if self.current > 1 {
            Some(self.current - 1)
        } else {
            None
        }
    }

    /// Target of the next button; `None` disables it.
    #[must_use]
    pub const fn next(self) -> Option<usize> {
        if self.current < self.total {
            Some(self.current + 1)
        } else {
            None
        }
    }
}

/// Tabs on the detail page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DetailTab {
    /// Description and room facts.
    #[default]
    Overview,
    /// Amenity grid.
    Amenities,
    /// Feature list.
    Features,
}

impl DetailTab {
    /// Tabs in display order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Overview, Self::Amenities, Self::Features]
    }

    /// Translation key of the tab label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Overview => "room.detail.tabs.overview",
            Self::Amenities => "room.detail.tabs.amenities",
            Self::Features => "room.detail.tabs.features",
        }
    }
}

/// Icon family for an amenity label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AmenityIcon {
    /// Internet access.
    Wifi,
    /// Parking.
    Parking,
    /// Coffee or tea.
    Coffee,
    /// Restaurant or dining.
    Dining,
    /// Anything else.
    Other,
}

impl AmenityIcon {
    /// Classify by keywords in the label, case-insensitively.
    #[must_use]
    pub fn for_label(label: &str) -> Self {
        let lowered = label.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|word| lowered.contains(word));
        if has(&["wifi", "wi-fi", "internet"]) {
            Self::Wifi
        } else if has(&["parking", "car"]) {
            Self::Parking
        } else if has(&["coffee", "tea"]) {
            Self::Coffee
        } else if has(&["dining", "restaurant"]) {
            Self::Dining
        } else {
            Self::Other
        }
    }

    /// Glyph rendered in the amenity grid.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Wifi => "📶",
            Self::Parking => "🅿",
            Self::Coffee => "☕",
            Self::Dining => "🍽",
            Self::Other => "✓",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sherpa_api_models::RoomId;

    fn deluxe() -> Room {
        Room {
            id: RoomId::Number(2),
            name: "Deluxe Double Room".into(),
            description: "Spacious and elegant room ".repeat(10),
            guests: 2,
            size: "35 sq m".into(),
            beds: "1 King Bed".into(),
            price: 200.0,
            amenities: vec![
                "Free WiFi".into(),
                "Cable TV".into(),
                "Work Desk".into(),
                "Tea Maker".into(),
                "Safe".into(),
            ],
            features: vec!["Connecting Rooms".into(), "City View".into()],
            images: vec!["https://img.example/1.jpg".into()],
        }
    }

    #[test]
    fn card_summary_limits_amenities_and_description() {
        let card = CardSummary::from_room(&deluxe());
        assert_eq!(card.id, "2");
        assert_eq!(card.amenities, vec!["Free WiFi", "Cable TV", "Work Desk"]);
        assert_eq!(card.more_amenities, 2);
        assert_eq!(card.badge.as_deref(), Some("Connecting Rooms"));
        assert!(card.excerpt.ends_with('…'));
        assert!(card.excerpt.chars().count() <= CARD_DESCRIPTION_CHARS + 1);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_chars("舒适的房间", 3), "舒适的…");
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("", 3), "");
    }

    #[test]
    fn page_controls_disable_edges() {
        let first = PageControls::new(1, 3);
        assert!(first.visible());
        assert_eq!(first.prev(), None);
        assert_eq!(first.next(), Some(2));
        let last = PageControls::new(9, 3);
        assert_eq!(last.current, 3);
        assert_eq!(last.next(), None);
        assert_eq!(last.pages().count(), 3);
        assert!(!PageControls::new(1, 1).visible());
        assert!(!PageControls::new(1, 0).visible());
    }

    #[test]
    fn amenity_icons_follow_keywords() {
        assert_eq!(AmenityIcon::for_label("Free WiFi"), AmenityIcon::Wifi);
        assert_eq!(AmenityIcon::for_label("High-speed Internet"), AmenityIcon::Wifi);
        assert_eq!(AmenityIcon::for_label("Car Parking"), AmenityIcon::Parking);
        assert_eq!(AmenityIcon::for_label("Tea Maker"), AmenityIcon::Coffee);
        assert_eq!(AmenityIcon::for_label("In-house Restaurant"), AmenityIcon::Dining);
        assert_eq!(AmenityIcon::for_label("Safe"), AmenityIcon::Other);
    }

    #[test]
    fn default_tab_is_overview() {
        assert_eq!(DetailTab::default(), DetailTab::Overview);
        assert_eq!(DetailTab::all().len(), 3);
    }

    #[test]
    fn prices_drop_trailing_zero_decimals() {
        assert_eq!(format_price(200.0), "200");
        assert_eq!(format_price(89.5), "89.50");
    }
}
