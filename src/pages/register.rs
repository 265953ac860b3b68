//! Registration page. A new account does not sign the user in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::net::types::Registration;
use crate::routes::RouteId;
use crate::state::context::SessionContext;

const MIN_PASSWORD_LEN: usize = 6;
#[cfg(feature = "csr")]
const REDIRECT_DELAY_MS: u64 = 1500;

fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    phone: &str,
) -> Result<Registration, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Username, email, and password are required.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok(Registration {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        phone: phone.trim().to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let registered = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let registration = match validate_registration(&username.get(), &email.get(), &password.get(), &phone.get()) {
            Ok(registration) => registration,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "csr")]
        {
            use crate::net::auth::{Authenticator, HttpAuthenticator};

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let auth = HttpAuthenticator::new(&ctx.config());
                match auth.register(&registration).await {
                    Ok(()) => {
                        registered.set(true);
                        info.set("Registered successfully. You can now log in.".to_owned());
                        gloo_timers::future::sleep(std::time::Duration::from_millis(REDIRECT_DELAY_MS)).await;
                        navigate(RouteId::Login.path(), leptos_router::NavigateOptions::default());
                    }
                    Err(msg) => info.set(msg),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ctx, registration);
        }
    };

    view! {
        <Title text="Register · ParkEase"/>
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password (min 6 characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="tel"
                        placeholder="Phone (optional)"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get() || registered.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already registered? "
                    <A href=RouteId::Login.path()>"Login"</A>
                </p>
            </div>
        </div>
    }
}
