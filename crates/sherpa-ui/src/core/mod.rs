//! DOM-free logic shared by the component tree.
//!
//! # Design
//! - Everything here compiles on the host target so it can be unit-tested.
//! - Components stay thin: they hold state handles and call into these types.

pub mod booking;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod gallery;
pub mod locale;
pub mod room_view;
pub mod routing;
pub mod shell;
pub mod store;
