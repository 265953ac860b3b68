//! Parking lot listing. Users book from here; admins also create, edit,
//! and delete lots and drill into per-lot occupancy.
//!
//! DESIGN
//! ======
//! The form holds raw strings and is parsed by `validate_lot_form` only on
//! submit, so partially typed numbers never reach the server. The list is
//! refetched after every successful mutation instead of patched locally,
//! keeping available-spot counts authoritative.

#[cfg(test)]
#[path = "lots_test.rs"]
mod lots_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::net::types::{LotInput, ParkingLot};
use crate::routes::{booking_path, lot_reservations_path};
use crate::state::context::SessionContext;
use crate::state::session::Role;
use crate::util::format;

/// Raw text of the admin lot form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct LotForm {
    pub name: String,
    pub price: String,
    pub address: String,
    pub pin_code: String,
    pub spots: String,
}

impl LotForm {
    pub(crate) fn from_lot(lot: &ParkingLot) -> Self {
        Self {
            name: lot.prime_location_name.clone(),
            price: lot.price.to_string(),
            address: lot.address.clone(),
            pin_code: lot.pin_code.clone(),
            spots: lot.number_of_spots.to_string(),
        }
    }
}

pub(crate) fn validate_lot_form(form: &LotForm) -> Result<LotInput, &'static str> {
    let name = form.name.trim();
    let address = form.address.trim();
    let pin_code = form.pin_code.trim();
    if name.is_empty() || address.is_empty() || pin_code.is_empty() {
        return Err("Name, address, and pin code are required.");
    }
    let price = match form.price.trim().parse::<f64>() {
        Ok(p) if p.is_finite() && p > 0.0 => p,
        _ => return Err("Price must be a positive number."),
    };
    let spots = match form.spots.trim().parse::<u32>() {
        Ok(n) if n >= 1 => n,
        _ => return Err("Number of spots must be at least 1."),
    };
    Ok(LotInput {
        prime_location_name: name.to_owned(),
        price,
        address: address.to_owned(),
        pin_code: pin_code.to_owned(),
        number_of_spots: spots,
    })
}

/// Users can only book into lots with a free spot.
pub(crate) fn can_book(lot: &ParkingLot) -> bool {
    lot.available_spots > 0
}

#[component]
pub fn ParkingLotsPage() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    let is_admin = move || ctx.session().role() == Some(Role::Admin);

    let lots = RwSignal::new(Vec::<ParkingLot>::new());
    let info = RwSignal::new(String::new());
    let form = RwSignal::new(LotForm::default());
    let editing = RwSignal::new(None::<i64>);
    let busy = RwSignal::new(false);

    let reload = move || {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match ctx.api().fetch_lots().await {
                Ok(list) => lots.set(list),
                Err(e) => {
                    leptos::logging::warn!("lots: fetch failed: {e}");
                    info.set(e.user_message());
                }
            }
        });
    };
    reload();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_lot_form(&form.get()) {
            Ok(input) => input,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        let target = editing.get();

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let api = ctx.api();
            let result = match target {
                Some(id) => api.update_lot(id, &input).await,
                None => api.create_lot(&input).await,
            };
            match result {
                Ok(resp) => {
                    info.set(resp.message);
                    form.set(LotForm::default());
                    editing.set(None);
                    reload();
                }
                Err(e) => info.set(e.user_message()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (input, target);
            busy.set(false);
        }
    };

    let start_edit = move |lot: &ParkingLot| {
        form.set(LotForm::from_lot(lot));
        editing.set(Some(lot.id));
        info.set(String::new());
    };

    let cancel_edit = move |_| {
        form.set(LotForm::default());
        editing.set(None);
    };

    let delete = move |lot_id: i64| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match ctx.api().delete_lot(lot_id).await {
                Ok(resp) => {
                    info.set(resp.message);
                    reload();
                }
                Err(e) => info.set(e.user_message()),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = lot_id;
    };

    let field = move |label: &'static str, get: fn(&LotForm) -> String, set: fn(&mut LotForm, String)| {
        view! {
            <label class="lot-form__field">
                <span>{label}</span>
                <input
                    class="lot-form__input"
                    type="text"
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <Title text="Parking Lots · ParkEase"/>
        <section class="lots">
            <h1>"Parking lots"</h1>
            <Show when=move || !info.get().is_empty()>
                <p class="lots__message">{move || info.get()}</p>
            </Show>

            <Show when=is_admin>
                <form class="lot-form" on:submit=on_submit>
                    <h2>{move || if editing.get().is_some() { "Edit lot" } else { "New lot" }}</h2>
                    {field("Name", |f| f.name.clone(), |f, v| f.name = v)}
                    {field("Price per hour", |f| f.price.clone(), |f, v| f.price = v)}
                    {field("Address", |f| f.address.clone(), |f, v| f.address = v)}
                    {field("Pin code", |f| f.pin_code.clone(), |f, v| f.pin_code = v)}
                    {field("Number of spots", |f| f.spots.clone(), |f, v| f.spots = v)}
                    <button type="submit" disabled=move || busy.get()>
                        {move || if editing.get().is_some() { "Save changes" } else { "Create lot" }}
                    </button>
                    <Show when=move || editing.get().is_some()>
                        <button type="button" on:click=cancel_edit>"Cancel"</button>
                    </Show>
                </form>
            </Show>

            <table class="lots__table">
                <thead>
                    <tr>
                        <th>"Location"</th>
                        <th>"Address"</th>
                        <th>"Price / h"</th>
                        <th>"Availability"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let admin = is_admin();
                        lots.get()
                            .into_iter()
                            .map(|lot| {
                                let lot_id = lot.id;
                                let bookable = can_book(&lot);
                                let actions = if admin {
                                    let for_edit = lot.clone();
                                    view! {
                                        <A href=lot_reservations_path(lot_id)>"Spots"</A>
                                        <button on:click=move |_| start_edit(&for_edit)>"Edit"</button>
                                        <button on:click=move |_| delete(lot_id)>"Delete"</button>
                                    }
                                        .into_any()
                                } else if bookable {
                                    view! { <A href=booking_path(lot_id)>"Book"</A> }.into_any()
                                } else {
                                    view! { <span class="lots__full">"Full"</span> }.into_any()
                                };
                                view! {
                                    <tr>
                                        <td>{lot.prime_location_name}</td>
                                        <td>{format!("{} ({})", lot.address, lot.pin_code)}</td>
                                        <td>{format::money(lot.price)}</td>
                                        <td>{format::availability(lot.available_spots, lot.number_of_spots)}</td>
                                        <td class="lots__actions">{actions}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </section>
    }
}
