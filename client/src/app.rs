//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the one `SessionStore` for the page and mirrors every store
//! notification into the `RwSignal<AuthState>` that pages and the route
//! guard read. Both are provided as context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guarded::Guarded;
use crate::net::api::start_session_store;
use crate::pages::{
    banned::BannedPage, home::HomePage, login::LoginPage, profile::ProfilePage,
    select_neighborhood::SelectNeighborhoodPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ca">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let store = start_session_store();
    // Lives as long as the page; the store is never torn down.
    store
        .subscribe(move |session| {
            let session = session.clone();
            auth.try_update(|a| a.apply_session(session));
        })
        .detach();

    provide_context(store);
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/comunitarr.css"/>
        <Title text="ComuniTarr"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("banned") view=BannedPage/>
                <Route
                    path=StaticSegment("select-neighborhood")
                    view=|| view! { <Guarded><SelectNeighborhoodPage/></Guarded> }
                />
                <Route path=StaticSegment("profile") view=|| view! { <Guarded><ProfilePage/></Guarded> }/>
                <Route path=StaticSegment("") view=|| view! { <Guarded><HomePage/></Guarded> }/>
            </Routes>
        </Router>
    }
}
