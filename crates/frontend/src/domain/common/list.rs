//! Loading state of a record list page.

use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use wasm_bindgen_futures::spawn_local;

use crate::shared::api::{crud, ApiClient};
use crate::shared::components::table::ListState;

pub struct RecordList<T: Send + Sync + 'static> {
    pub state: RwSignal<ListState<T>>,
    /// Re-fetch `GET /{collection}/`
    pub reload: Callback<()>,
}

impl<T: Send + Sync + 'static> Clone for RecordList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for RecordList<T> {}

/// Creates the list state and starts the first fetch
pub fn use_record_list<T>(client: ApiClient) -> RecordList<T>
where
    T: AggregateRoot + DeserializeOwned + Send + Sync + 'static,
{
    let state = RwSignal::new(ListState::<T>::Loading);
    let reload = Callback::new(move |_| {
        let client = client.clone();
        spawn_local(async move {
            let result = crud::fetch_list::<T>(&client).await;
            if let Err(e) = &result {
                log::error!("Failed to load {}: {}", T::full_name(), e);
            }
            state.set(ListState::from_result(result));
        });
    });
    reload.run(());
    RecordList { state, reload }
}
