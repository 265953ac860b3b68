//! Route wrapper applying the navigation guard before a page renders.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route in `App` renders through `Guarded`. The decision is computed
//! synchronously inside the render closure, so a denied page is replaced by
//! a `<Redirect>` without ever being built. The closure tracks the session
//! signal, which also re-runs the guard when the user logs out on a
//! protected page.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::routes::RouteId;
use crate::state::context::SessionContext;
use crate::util::guard::{GuardDecision, evaluate};

#[component]
pub fn Guarded(route: RouteId, children: ChildrenFn) -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    let requirement = route.requirement();

    move || match evaluate(requirement, &ctx.session()) {
        GuardDecision::Allow => children().into_any(),
        GuardDecision::Redirect(target) => {
            leptos::logging::log!("guard: {route:?} -> {}", target.path());
            view! { <Redirect path=target.path()/> }.into_any()
        }
    }
}
