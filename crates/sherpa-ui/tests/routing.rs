//! Routing, locale and pagination behaviour through the public API.

use sherpa_api_models::{Room, RoomId};
use sherpa_ui::core::catalog::{CatalogError, LIST_PAGE_SIZE, find_by_id, paginate};
use sherpa_ui::core::locale::{initial_preference, resolve};
use sherpa_ui::core::routing::{LocalizedRoute, Page, RouteMatch, RouteTable, switch_locale};
use sherpa_ui::i18n::LocaleCode;

fn pages() -> Vec<Page> {
    vec![
        Page::Home,
        Page::About,
        Page::Services,
        Page::Rooms,
        Page::RoomDetail { id: "7".into() },
        Page::RoomDetail {
            id: "65f0a1c2".into(),
        },
        Page::Contact,
        Page::Gallery,
        Page::BookNow,
    ]
}

fn catalog(len: usize) -> Vec<Room> {
    (1..=len)
        .map(|number| Room {
            id: RoomId::Number(u64::try_from(number).expect("room number")),
            name: format!("Room {number}"),
            description: String::new(),
            guests: 2,
            size: String::new(),
            beds: String::new(),
            price: 80.0,
            amenities: Vec::new(),
            features: Vec::new(),
            images: Vec::new(),
        })
        .collect()
}

#[test]
fn every_localized_href_resolves_to_its_page() {
    let table = RouteTable::new();
    for locale in LocaleCode::all() {
        for page in pages() {
            let href = table.href(locale, &page);
            assert_eq!(
                table.parse(&href),
                RouteMatch::Matched(LocalizedRoute {
                    locale,
                    page: page.clone()
                }),
                "{href}"
            );
            assert_eq!(resolve(&href), locale, "{href}");
        }
    }
}

#[test]
fn switching_language_keeps_the_page() {
    let table = RouteTable::new();
    for from in LocaleCode::all() {
        for to in LocaleCode::all() {
            for page in pages() {
                let switched = switch_locale(&table.href(from, &page), to);
                assert_eq!(switched, table.href(to, &page));
            }
        }
    }
}

#[test]
fn boot_preference_order_is_stored_prefix_browser() {
    assert_eq!(initial_preference(Some("ar"), "/zh/rooms", Some("en-US")), LocaleCode::Ar);
    assert_eq!(initial_preference(Some("ch"), "/zh/rooms", Some("ar")), LocaleCode::Zh);
    assert_eq!(initial_preference(None, "/rooms", Some("zh-CN")), LocaleCode::Zh);
    assert_eq!(initial_preference(Some("ch"), "/", Some("fr")), LocaleCode::En);
}

#[test]
fn pages_partition_the_catalog() {
    for len in [0, 1, 8, 9, 10, 18, 19, 27] {
        let rooms = catalog(len);
        let first = paginate(&rooms, LIST_PAGE_SIZE, 1);
        let mut seen = Vec::new();
        for page in 1..=first.total_pages {
            let slice = paginate(&rooms, LIST_PAGE_SIZE, page);
            assert!(slice.rooms.len() <= LIST_PAGE_SIZE);
            assert_eq!(slice.current, page);
            seen.extend(slice.rooms.iter().cloned());
        }
        assert_eq!(seen, rooms, "len {len}");
        assert_eq!(first.total_pages, len.div_ceil(LIST_PAGE_SIZE).max(1));
    }
}

#[test]
fn out_of_range_pages_clamp() {
    let rooms = catalog(20);
    assert_eq!(paginate(&rooms, LIST_PAGE_SIZE, 0).current, 1);
    let last = paginate(&rooms, LIST_PAGE_SIZE, 99);
    assert_eq!(last.current, 3);
    assert_eq!(last.rooms.len(), 2);
}

#[test]
fn detail_lookup_coerces_identifiers() {
    let rooms = catalog(3);
    assert_eq!(find_by_id(&rooms, "2").map(|room| room.name.as_str()), Ok("Room 2"));
    assert_eq!(find_by_id(&rooms, "02").map(|room| room.name.as_str()), Ok("Room 2"));
    assert_eq!(
        find_by_id(&rooms, "9"),
        Err(CatalogError::NotFound { id: "9".into() })
    );
}
