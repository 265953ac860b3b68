//! Top navigation with role-dependent links and logout.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::RouteId;
use crate::state::context::SessionContext;
use crate::state::session::{Role, Session};

/// Links shown for `session`, in display order.
pub(crate) fn nav_links(session: &Session) -> Vec<(&'static str, RouteId)> {
    match session.role() {
        None => vec![("Home", RouteId::Home), ("Login", RouteId::Login), ("Register", RouteId::Register)],
        Some(Role::User) => vec![
            ("Dashboard", RouteId::Dashboard),
            ("Parking Lots", RouteId::ParkingLots),
            ("My Reservations", RouteId::Reservations),
            ("Exports", RouteId::ExportsReports),
        ],
        Some(Role::Admin) => vec![
            ("Dashboard", RouteId::Dashboard),
            ("Parking Lots", RouteId::ParkingLots),
            ("Users", RouteId::AdminUsers),
            ("Exports & Reports", RouteId::ExportsReports),
        ],
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"ParkEase"</span>
            <div class="nav-bar__links">
                {move || {
                    nav_links(&ctx.session())
                        .into_iter()
                        .map(|(label, id)| view! { <A href=id.path()>{label}</A> })
                        .collect_view()
                }}
            </div>
            <Show when=move || ctx.session().is_authenticated()>
                <span class="nav-bar__user">
                    {move || ctx.session().user().map(|u| u.username.clone()).unwrap_or_default()}
                </span>
                // The router handles the navigation; the session is cleared first.
                <a class="nav-bar__logout" href=RouteId::Login.path() on:click=move |_| ctx.logout()>
                    "Logout"
                </a>
            </Show>
        </nav>
    }
}
