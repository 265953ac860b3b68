//! Public landing page.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::routes::RouteId;
use crate::state::context::SessionContext;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();

    view! {
        <Title text="ParkEase"/>
        <section class="hero">
            <h1>"Find and reserve a parking spot"</h1>
            <p>"Browse lots, check live availability, and release your spot when you leave."</p>
            <Show
                when=move || ctx.session().is_authenticated()
                fallback=|| {
                    view! {
                        <div class="hero__actions">
                            <A href=RouteId::Login.path()>"Login"</A>
                            <A href=RouteId::Register.path()>"Register"</A>
                        </div>
                    }
                }
            >
                <div class="hero__actions">
                    <A href=RouteId::Dashboard.path()>"Go to dashboard"</A>
                </div>
            </Show>
        </section>
    }
}
