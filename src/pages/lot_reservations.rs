//! Admin occupancy view for one lot: spot grid plus who is parked where.

#[cfg(test)]
#[path = "lot_reservations_test.rs"]
mod lot_reservations_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::net::types::{LotOccupancy, SpotStatus};
use crate::pages::bookings::parse_lot_id;
use crate::routes::RouteId;
use crate::state::context::SessionContext;
use crate::util::format;

pub(crate) fn spot_class(status: SpotStatus) -> &'static str {
    match status {
        SpotStatus::Available => "spot spot--available",
        SpotStatus::Occupied => "spot spot--occupied",
    }
}

pub(crate) fn occupancy_label(occupancy: &LotOccupancy) -> String {
    format!("{} of {} spots occupied", occupancy.occupied_count, occupancy.total_spots)
}

#[component]
pub fn LotReservationsPage() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    let params = use_params_map();
    let lot_id = Memo::new(move |_| params.with(|p| parse_lot_id(p.get("lot_id").as_deref())));

    let occupancy = RwSignal::new(None::<LotOccupancy>);
    let error = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    match lot_id.get_untracked() {
        Some(id) => leptos::task::spawn_local(async move {
            match ctx.api().fetch_lot_occupancy(id).await {
                Ok(data) => occupancy.set(Some(data)),
                Err(e) => {
                    leptos::logging::warn!("lot {id}: occupancy fetch failed: {e}");
                    error.set(e.user_message());
                }
            }
        }),
        None => error.set("Invalid parking lot.".to_owned()),
    }
    #[cfg(not(feature = "csr"))]
    let _ = (ctx, lot_id);

    view! {
        <Title text="Lot occupancy · ParkEase"/>
        <section class="occupancy">
            <h1>"Lot occupancy"</h1>
            <Show when=move || !error.get().is_empty()>
                <p class="error">{move || error.get()}</p>
            </Show>
            {move || {
                occupancy
                    .get()
                    .map(|data| {
                        let label = occupancy_label(&data);
                        let grid = data
                            .summary
                            .iter()
                            .map(|s| view! { <div class=spot_class(s.status)>{s.spot_number}</div> })
                            .collect_view();
                        let rows = data
                            .details
                            .into_iter()
                            .map(|d| {
                                view! {
                                    <tr>
                                        <td>{d.spot_number}</td>
                                        <td>{d.username}</td>
                                        <td>{d.vehicle_number.unwrap_or_default()}</td>
                                        <td>{format::timestamp(&d.parking_timestamp)}</td>
                                    </tr>
                                }
                            })
                            .collect_view();
                        view! {
                            <p class="occupancy__label">{label}</p>
                            <div class="occupancy__grid">{grid}</div>
                            <table class="occupancy__table">
                                <thead>
                                    <tr>
                                        <th>"Spot"</th>
                                        <th>"User"</th>
                                        <th>"Vehicle"</th>
                                        <th>"Since"</th>
                                    </tr>
                                </thead>
                                <tbody>{rows}</tbody>
                            </table>
                        }
                    })
            }}
            <A href=RouteId::ParkingLots.path()>"Back to lots"</A>
        </section>
    }
}
