//! Login page: username + password against `POST /login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::net::types::Credentials;
use crate::routes::RouteId;
use crate::state::context::SessionContext;

fn validate_login_input(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "csr")]
        {
            use crate::net::auth::{Authenticator, HttpAuthenticator};

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let auth = HttpAuthenticator::new(&ctx.config());
                let outcome = auth.login(&credentials).await;
                match ctx.apply_login(outcome) {
                    Ok(()) => {
                        info.set(String::new());
                        navigate(RouteId::Dashboard.path(), leptos_router::NavigateOptions::default());
                    }
                    Err(e) => info.set(e.to_string()),
                }
                password.set(String::new());
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ctx, credentials);
        }
    };

    view! {
        <Title text="Login · ParkEase"/>
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Login"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "No account? "
                    <A href=RouteId::Register.path()>"Register"</A>
                </p>
            </div>
        </div>
    }
}
