//! Shown when the guard refuses a route for the current role.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::routes::RouteId;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <Title text="Unauthorized · ParkEase"/>
        <section class="notice">
            <h1>"Access denied"</h1>
            <p>"Your account does not have permission to view that page."</p>
            <A href=RouteId::Dashboard.path()>"Back to dashboard"</A>
        </section>
    }
}
