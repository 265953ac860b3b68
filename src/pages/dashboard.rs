//! Dashboard: a reservation summary for users and system totals for admins.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::net::types::{AdminDashboard, Reservation};
use crate::routes::RouteId;
use crate::state::context::SessionContext;
use crate::state::session::Role;
use crate::util::format;

/// Aggregate view over the caller's reservation history.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ReservationSummary {
    pub active: usize,
    pub completed: usize,
    pub total_spent: f64,
}

/// Completed stays contribute their final cost; active ones are not billed yet.
pub(crate) fn summarize_reservations(reservations: &[Reservation]) -> ReservationSummary {
    reservations.iter().fold(ReservationSummary::default(), |mut acc, r| {
        if r.is_active() {
            acc.active += 1;
        } else {
            acc.completed += 1;
            acc.total_spent += r.parking_cost.unwrap_or(0.0);
        }
        acc
    })
}

/// Percentage of occupied spots, rounded down. Zero when there are no spots.
pub(crate) fn occupancy_percent(stats: &AdminDashboard) -> u32 {
    if stats.total_spots == 0 {
        return 0;
    }
    stats.occupied_spots.saturating_mul(100) / stats.total_spots
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    let is_admin = move || ctx.session().role() == Some(Role::Admin);
    let greeting = move || {
        ctx.session().user().map(|u| format!("Welcome, {}", u.username)).unwrap_or_else(|| "Welcome".to_owned())
    };

    view! {
        <Title text="Dashboard · ParkEase"/>
        <section class="dashboard">
            <h1>{greeting}</h1>
            <Show when=is_admin fallback=|| view! { <UserSummary/> }>
                <AdminSummary/>
            </Show>
        </section>
    }
}

#[component]
fn UserSummary() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    let summary = RwSignal::new(None::<ReservationSummary>);
    let error = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match ctx.api().fetch_my_reservations().await {
            Ok(reservations) => summary.set(Some(summarize_reservations(&reservations))),
            Err(e) => {
                leptos::logging::warn!("dashboard: reservations fetch failed: {e}");
                error.set(e.user_message());
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = ctx;

    view! {
        <Show when=move || !error.get().is_empty()>
            <p class="error">{move || error.get()}</p>
        </Show>
        {move || {
            summary
                .get()
                .map(|s| {
                    view! {
                        <div class="stat-grid">
                            <div class="stat">
                                <span class="stat__value">{s.active}</span>
                                <span class="stat__label">"Active reservations"</span>
                            </div>
                            <div class="stat">
                                <span class="stat__value">{s.completed}</span>
                                <span class="stat__label">"Completed stays"</span>
                            </div>
                            <div class="stat">
                                <span class="stat__value">{format::money(s.total_spent)}</span>
                                <span class="stat__label">"Total spent"</span>
                            </div>
                        </div>
                    }
                })
        }}
        <div class="dashboard__actions">
            <A href=RouteId::ParkingLots.path()>"Find a spot"</A>
            <A href=RouteId::Reservations.path()>"My reservations"</A>
        </div>
    }
}

#[component]
fn AdminSummary() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    let stats = RwSignal::new(None::<AdminDashboard>);
    let error = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match ctx.api().fetch_admin_dashboard().await {
            Ok(data) => stats.set(Some(data)),
            Err(e) => {
                leptos::logging::warn!("dashboard: admin stats fetch failed: {e}");
                error.set(e.user_message());
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = ctx;

    view! {
        <Show when=move || !error.get().is_empty()>
            <p class="error">{move || error.get()}</p>
        </Show>
        {move || {
            stats
                .get()
                .map(|s| {
                    let occupancy = occupancy_percent(&s);
                    view! {
                        <div class="stat-grid">
                            <div class="stat">
                                <span class="stat__value">{s.total_lots}</span>
                                <span class="stat__label">"Parking lots"</span>
                            </div>
                            <div class="stat">
                                <span class="stat__value">{format::availability(s.available_spots, s.total_spots)}</span>
                                <span class="stat__label">"Spots"</span>
                            </div>
                            <div class="stat">
                                <span class="stat__value">{format!("{occupancy}%")}</span>
                                <span class="stat__label">"Occupancy"</span>
                            </div>
                            <div class="stat">
                                <span class="stat__value">{s.total_users}</span>
                                <span class="stat__label">"Users"</span>
                            </div>
                            <div class="stat">
                                <span class="stat__value">{s.active_reservations}</span>
                                <span class="stat__label">"Active reservations"</span>
                            </div>
                        </div>
                    }
                })
        }}
        <div class="dashboard__actions">
            <A href=RouteId::ParkingLots.path()>"Manage lots"</A>
            <A href=RouteId::AdminUsers.path()>"Users"</A>
            <A href=RouteId::ExportsReports.path()>"Exports & reports"</A>
        </div>
    }
}
