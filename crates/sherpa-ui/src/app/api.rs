//! API client context and the catalog hook built on it.
//!
//! # Design
//! - Create exactly one API client per app boot.
//! - Each view fetches once on mount; results for an unmounted view are dropped.

use std::cell::Cell;
use std::rc::Rc;

use gloo::console;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::core::catalog::{CatalogError, CatalogState};
use crate::core::config::SiteConfig;
use crate::services::api::ApiClient;

/// Shared API client context for UI services.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    client: Rc<ApiClient>,
}

impl ApiCtx {
    pub(crate) fn new(config: &SiteConfig) -> Self {
        Self {
            client: Rc::new(ApiClient::new(config)),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}

/// Fetch the room catalog once for the calling view.
#[hook]
pub(crate) fn use_catalog() -> CatalogState {
    let api = use_context::<ApiCtx>();
    let state = use_state(|| CatalogState::Loading);
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let alive = Rc::new(Cell::new(true));
                let task_alive = Rc::clone(&alive);
                spawn_local(async move {
                    let result = match api {
                        Some(api) => api.client.fetch_rooms().await,
                        None => Err(CatalogError::Network {
                            detail: "api context missing".to_string(),
                        }),
                    };
                    if let Err(err) = &result {
                        console::error!("room catalog unavailable", err.to_string(), detail(err));
                    }
                    if task_alive.get() {
                        state.set(CatalogState::settle(result));
                    }
                });
                move || alive.set(false)
            },
            (),
        );
    }
    (*state).clone()
}

fn detail(err: &CatalogError) -> String {
    match err {
        CatalogError::Network { detail } => detail.clone(),
        CatalogError::NotFound { id } => id.clone(),
    }
}
