use crate::api::JobSightClient;
use crate::app::entry_destination;
use crate::components::toast::{toast_error, toast_success};
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use shared::models::{LoginRequest, RegisterRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    SignIn,
    Register,
}

/// Combined login/register page. A successful login consults the profile
/// endpoint to pick the destination; a fresh registration always lands in
/// onboarding.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (_state, dispatch) = use_store::<AppState>();
    let mode = use_state(|| AuthMode::SignIn);
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let loading = use_state(|| false);
    let navigator = use_navigator();

    let onsubmit = {
        let mode = *mode;
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let loading = loading.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let name_value = (*name).clone();
            let email_value = (*email).clone();
            let password_value = (*password).clone();
            let loading = loading.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            loading.set(true);
            spawn_local(async move {
                let client = JobSightClient::shared();
                match mode {
                    AuthMode::SignIn => {
                        let request = LoginRequest {
                            email: email_value,
                            password: password_value,
                        };
                        match client.login(&request).await {
                            Ok(response) => {
                                dispatch.reduce_mut(|state| state.user = Some(response.user));
                                toast_success("Welcome back!");
                                // Returning users with a profile skip onboarding.
                                let profile = client.get_profile().await.ok().flatten();
                                if let Some(ref nav) = navigator {
                                    nav.push(&entry_destination(profile.is_some()));
                                }
                            }
                            Err(err) => toast_error(err.detail_or("Invalid credentials")),
                        }
                    }
                    AuthMode::Register => {
                        let request = RegisterRequest {
                            email: email_value,
                            password: password_value,
                            name: name_value,
                        };
                        match client.register(&request).await {
                            Ok(response) => {
                                dispatch.reduce_mut(|state| state.user = Some(response.user));
                                toast_success("Account created!");
                                if let Some(ref nav) = navigator {
                                    nav.push(&MainRoute::Onboarding);
                                }
                            }
                            Err(err) => toast_error(err.detail_or("Registration failed")),
                        }
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_name_change = {
        let name = name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                name.set(input.value());
            }
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let toggle_mode = {
        let mode = mode.clone();
        Callback::from(move |_: MouseEvent| {
            mode.set(match *mode {
                AuthMode::SignIn => AuthMode::Register,
                AuthMode::Register => AuthMode::SignIn,
            });
        })
    };

    let is_busy = *loading;
    let needs_name = *mode == AuthMode::Register && (*name).is_empty();
    let disable_submit = (*email).is_empty() || (*password).is_empty() || needs_name || is_busy;
    let (title, submit_label, busy_label, toggle_label) = match *mode {
        AuthMode::SignIn => (
            "Sign in",
            "Sign in",
            "Signing in...",
            "New here? Create an account",
        ),
        AuthMode::Register => (
            "Create account",
            "Create account",
            "Creating account...",
            "Already registered? Sign in",
        ),
    };

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{ title }</h2>
                    if *mode == AuthMode::Register {
                        <div class="form-control">
                            <label class="label" for="name">
                                <span class="label-text">{"Full name"}</span>
                            </label>
                            <input
                                id="name"
                                class="input input-bordered"
                                type="text"
                                value={(*name).clone()}
                                oninput={on_name_change}
                            />
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{"Email"}</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            required=true
                            value={(*email).clone()}
                            oninput={on_email_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*password).clone()}
                            oninput={on_password_change}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            { if is_busy { busy_label } else { submit_label } }
                        </button>
                    </div>
                    <button type="button" class="btn btn-link btn-sm mt-2" onclick={toggle_mode}>
                        { toggle_label }
                    </button>
                </form>
            </div>
        </div>
    }
}
