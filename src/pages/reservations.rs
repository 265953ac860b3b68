//! The caller's reservations, with release for active ones.

#[cfg(test)]
#[path = "reservations_test.rs"]
mod reservations_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::net::types::{ReleaseResponse, Reservation};
use crate::state::context::SessionContext;
use crate::util::format;

/// Active reservations first, each group newest first.
pub(crate) fn sort_reservations(reservations: &mut [Reservation]) {
    reservations.sort_by(|a, b| {
        b.is_active().cmp(&a.is_active()).then_with(|| b.parking_timestamp.cmp(&a.parking_timestamp))
    });
}

pub(crate) fn release_summary(resp: &ReleaseResponse) -> String {
    format!("{} Total: {} for {}.", resp.message, format::money(resp.total_cost), format::hours(resp.duration_hours))
}

#[component]
pub fn ReservationsPage() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    let reservations = RwSignal::new(Vec::<Reservation>::new());
    let info = RwSignal::new(String::new());
    let releasing = RwSignal::new(None::<i64>);

    let reload = move || {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match ctx.api().fetch_my_reservations().await {
                Ok(mut list) => {
                    sort_reservations(&mut list);
                    reservations.set(list);
                }
                Err(e) => {
                    leptos::logging::warn!("reservations: fetch failed: {e}");
                    info.set(e.user_message());
                }
            }
        });
    };
    reload();

    let release = move |reservation_id: i64| {
        if releasing.get().is_some() {
            return;
        }
        releasing.set(Some(reservation_id));

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match ctx.api().release_spot(reservation_id).await {
                Ok(resp) => {
                    info.set(release_summary(&resp));
                    reload();
                }
                Err(e) => info.set(e.user_message()),
            }
            releasing.set(None);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = ctx;
            releasing.set(None);
        }
    };

    view! {
        <Title text="My Reservations · ParkEase"/>
        <section class="reservations">
            <h1>"My reservations"</h1>
            <Show when=move || !info.get().is_empty()>
                <p class="reservations__message">{move || info.get()}</p>
            </Show>
            <Show
                when=move || !reservations.with(Vec::is_empty)
                fallback=|| view! { <p class="reservations__empty">"No reservations yet."</p> }
            >
                <table class="reservations__table">
                    <thead>
                        <tr>
                            <th>"Lot"</th>
                            <th>"Spot"</th>
                            <th>"Vehicle"</th>
                            <th>"Parked"</th>
                            <th>"Left"</th>
                            <th>"Cost"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            reservations
                                .get()
                                .into_iter()
                                .map(|r| {
                                    let id = r.id;
                                    let action = if r.is_active() {
                                        view! {
                                            <button
                                                disabled=move || releasing.get().is_some()
                                                on:click=move |_| release(id)
                                            >
                                                "Release"
                                            </button>
                                        }
                                            .into_any()
                                    } else {
                                        view! { <span class="reservations__done">"Completed"</span> }.into_any()
                                    };
                                    view! {
                                        <tr>
                                            <td>{r.lot_name}</td>
                                            <td>{r.spot_number}</td>
                                            <td>{r.vehicle_number.unwrap_or_default()}</td>
                                            <td>{format::timestamp(&r.parking_timestamp)}</td>
                                            <td>
                                                {r.leaving_timestamp.as_deref().map(format::timestamp).unwrap_or_default()}
                                            </td>
                                            <td>{r.parking_cost.map(format::money).unwrap_or_default()}</td>
                                            <td>{action}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
