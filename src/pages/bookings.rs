//! Reserve a spot in one lot. The lot comes from the `:lot_id` URL segment.

#[cfg(test)]
#[path = "bookings_test.rs"]
mod bookings_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::net::types::{ParkingLot, ReserveResponse};
use crate::routes::RouteId;
use crate::state::context::SessionContext;
use crate::util::format;

pub(crate) fn parse_lot_id(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

/// Uppercase with all whitespace removed: `" ka 01 ab 1234 "` -> `"KA01AB1234"`.
pub(crate) fn normalize_vehicle_number(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).flat_map(char::to_uppercase).collect()
}

pub(crate) fn booking_summary(resp: &ReserveResponse) -> String {
    format!(
        "Spot {} reserved at {}. Initial charge {}.",
        resp.spot_number,
        resp.lot_name,
        format::money(resp.initial_cost)
    )
}

#[component]
pub fn BookingsPage() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    let params = use_params_map();
    let lot_id = Memo::new(move |_| params.with(|p| parse_lot_id(p.get("lot_id").as_deref())));

    let lot = RwSignal::new(None::<ParkingLot>);
    let vehicle = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let booked = RwSignal::new(false);
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    if let Some(id) = lot_id.get_untracked() {
        leptos::task::spawn_local(async move {
            match ctx.api().fetch_lots().await {
                Ok(list) => match list.into_iter().find(|l| l.id == id) {
                    Some(found) => lot.set(Some(found)),
                    None => info.set("Parking lot not found.".to_owned()),
                },
                Err(e) => info.set(e.user_message()),
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() || booked.get() {
            return;
        }
        let Some(id) = lot_id.get() else {
            info.set("Invalid parking lot.".to_owned());
            return;
        };
        let vehicle_number = normalize_vehicle_number(&vehicle.get());
        if vehicle_number.is_empty() {
            info.set("Enter your vehicle number.".to_owned());
            return;
        }
        busy.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match ctx.api().reserve_spot(id, &vehicle_number).await {
                Ok(resp) => {
                    booked.set(true);
                    info.set(booking_summary(&resp));
                }
                Err(e) => info.set(e.user_message()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ctx, id, vehicle_number);
            busy.set(false);
        }
    };

    view! {
        <Title text="Book a spot · ParkEase"/>
        <section class="booking">
            <h1>"Book a spot"</h1>
            <Show
                when=move || lot_id.get().is_some()
                fallback=|| view! { <p class="error">"Invalid parking lot."</p> }
            >
                {move || {
                    lot.get()
                        .map(|l| {
                            view! {
                                <div class="booking__lot">
                                    <h2>{l.prime_location_name}</h2>
                                    <p>{l.address}</p>
                                    <p>{format!("{} per hour", format::money(l.price))}</p>
                                    <p>{format::availability(l.available_spots, l.number_of_spots)}</p>
                                </div>
                            }
                        })
                }}
                <form class="booking__form" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Vehicle number"
                        prop:value=move || vehicle.get()
                        on:input=move |ev| vehicle.set(event_target_value(&ev))
                    />
                    <button type="submit" disabled=move || busy.get() || booked.get()>"Reserve"</button>
                </form>
            </Show>
            <Show when=move || !info.get().is_empty()>
                <p class="booking__message">{move || info.get()}</p>
            </Show>
            <A href=RouteId::Reservations.path()>"View my reservations"</A>
        </section>
    }
}
