//! Catch-all page for unmatched URLs.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::routes::RouteId;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Not found · ParkEase"/>
        <section class="notice">
            <h1>"Page not found"</h1>
            <p>"The page you were looking for does not exist."</p>
            <A href=RouteId::Home.path()>"Go home"</A>
        </section>
    }
}
