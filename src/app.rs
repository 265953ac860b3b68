//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::route_guard::Guarded;
use crate::config::ClientConfig;
use crate::pages::{
    admin_users::AdminUsersPage, bookings::BookingsPage, dashboard::DashboardPage, exports::ExportsReportsPage,
    home::HomePage, login::LoginPage, lot_reservations::LotReservationsPage, lots::ParkingLotsPage,
    not_found::NotFoundPage, register::RegisterPage, reservations::ReservationsPage, unauthorized::UnauthorizedPage,
};
use crate::routes::RouteId;
use crate::state::context::SessionContext;

/// Root application component.
///
/// Rehydrates the session, provides it to every page, and registers one
/// guarded route per route-table entry.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let session = SessionContext::new(config);
    provide_context(session);

    view! {
        <Title text="ParkEase"/>

        <Router>
            <NavBar/>
            <main class="page">
                <Routes fallback=|| view! { <Guarded route=RouteId::NotFound><NotFoundPage/></Guarded> }>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <Guarded route=RouteId::Home><HomePage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("login")
                        view=|| view! { <Guarded route=RouteId::Login><LoginPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("register")
                        view=|| view! { <Guarded route=RouteId::Register><RegisterPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <Guarded route=RouteId::Dashboard><DashboardPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("lots")
                        view=|| view! { <Guarded route=RouteId::ParkingLots><ParkingLotsPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("reservations")
                        view=|| view! { <Guarded route=RouteId::Reservations><ReservationsPage/></Guarded> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("users"))
                        view=|| view! { <Guarded route=RouteId::AdminUsers><AdminUsersPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("exports-reports")
                        view=|| view! { <Guarded route=RouteId::ExportsReports><ExportsReportsPage/></Guarded> }
                    />
                    <Route
                        path=(StaticSegment("book"), ParamSegment("lot_id"))
                        view=|| view! { <Guarded route=RouteId::Bookings><BookingsPage/></Guarded> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("reservations"), ParamSegment("lot_id"))
                        view=|| view! { <Guarded route=RouteId::LotReservations><LotReservationsPage/></Guarded> }
                    />
                    <Route
                        path=StaticSegment("unauthorized")
                        view=|| view! { <Guarded route=RouteId::Unauthorized><UnauthorizedPage/></Guarded> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
