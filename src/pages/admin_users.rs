//! Admin view of registered users.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::net::types::AdminUser;
use crate::state::context::SessionContext;
use crate::util::format;

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    let users = RwSignal::new(Vec::<AdminUser>::new());
    let error = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match ctx.api().fetch_users().await {
            Ok(list) => users.set(list),
            Err(e) => {
                leptos::logging::warn!("admin users: fetch failed: {e}");
                error.set(e.user_message());
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = ctx;

    view! {
        <Title text="Users · ParkEase"/>
        <section class="admin-users">
            <h1>"Registered users"</h1>
            <Show when=move || !error.get().is_empty()>
                <p class="error">{move || error.get()}</p>
            </Show>
            <table class="admin-users__table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Username"</th>
                        <th>"Email"</th>
                        <th>"Phone"</th>
                        <th>"Joined"</th>
                        <th>"Reservations"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        users
                            .get()
                            .into_iter()
                            .map(|u| {
                                view! {
                                    <tr>
                                        <td>{u.id}</td>
                                        <td>{u.username}</td>
                                        <td>{u.email}</td>
                                        <td>{u.phone.unwrap_or_default()}</td>
                                        <td>{format::timestamp(&u.created_at)}</td>
                                        <td>{u.total_reservations}</td>
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
