//! Neighborhood picker.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard sends every signed-in user without a neighborhood here. Saving
//! goes through the session store, whose `UserUpdated` notification lifts
//! the redirect; the page then moves on to `/`.

#[cfg(test)]
#[path = "select_neighborhood_test.rs"]
mod select_neighborhood_test;

use gate::Neighborhood;
#[cfg(feature = "hydrate")]
use gate::{ProfileUpdate, SessionStore};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Neighborhoods of Tarragona offered by the picker.
pub const NEIGHBORHOODS: &[&str] = &[
    "Part Alta",
    "Eixample",
    "Serrallo",
    "Sant Pere i Sant Pau",
    "Sant Salvador",
    "Torreforta",
    "Bonavista",
    "Camp Clar",
    "La Floresta",
    "Llevant",
    "Ponent",
    "Tarragona 2",
    "Cala Romana",
];

/// Validate the picker value.
fn neighborhood_choice(raw: &str) -> Result<Neighborhood, &'static str> {
    Neighborhood::parse(raw).ok_or("Choose a neighborhood.")
}

#[component]
pub fn SelectNeighborhoodPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let current = auth.with_untracked(|a| {
        a.identity()
            .and_then(|i| i.neighborhood.as_ref())
            .map(ToString::to_string)
            .unwrap_or_default()
    });
    let choice = RwSignal::new(current);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let neighborhood = match neighborhood_choice(&choice.get_untracked()) {
            Ok(n) => n,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let store = store.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match store.update_profile(&ProfileUpdate::neighborhood(neighborhood)).await {
                    Ok(_) => navigate(gate::guard::HOME_PATH, crate::util::auth::redirect_options()),
                    Err(e) => {
                        error.set(Some(format!("Could not save your neighborhood: {e}")));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (neighborhood, &navigate);
        }
    };

    view! {
        <div class="notice-page">
            <form class="notice-card" on:submit=on_submit>
                <h1>"Where do you live?"</h1>
                <p>"Pick your neighborhood to see what is happening around you."</p>
                <select
                    class="neighborhood-select"
                    prop:value=move || choice.get()
                    on:change=move |ev| choice.set(event_target_value(&ev))
                >
                    <option value="">"Select..."</option>
                    {NEIGHBORHOODS
                        .iter()
                        .map(|name| view! { <option value=*name>{*name}</option> })
                        .collect_view()}
                </select>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Save"
                </button>
                <Show when=move || error.get().is_some()>
                    <p class="form-message form-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </form>
        </div>
    }
}
