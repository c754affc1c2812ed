use crate::api::{ApiError, JobSightClient};
use crate::components::loading::Loading;
use crate::components::toast::{Toaster, toast_success};
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use shared::models::User;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Where an authenticated user landing on the entry route should go:
/// straight to the dashboard when a profile exists, otherwise into
/// onboarding.
pub fn entry_destination(profile_present: bool) -> MainRoute {
    if profile_present {
        MainRoute::Dashboard
    } else {
        MainRoute::Onboarding
    }
}

/// Collapse the mount-time session check into what the app keeps: the
/// identity to store and whether a profile lookup (and the navigation it
/// drives) should follow.
///
/// Any failure, 401 included, yields an anonymous session. The profile
/// lookup only happens for an identified user sitting on the entry route;
/// everywhere else the check settles with no navigation side effect.
pub fn resolve_session(
    session: Result<User, ApiError>,
    on_entry_route: bool,
) -> (Option<User>, bool) {
    match session {
        Ok(user) => (Some(user), on_entry_route),
        Err(_) => (None, false),
    }
}

/// Log out: the server call may fail, but the local session is cleared and
/// the user is returned to the entry route regardless. Used by any view
/// with a logout control.
pub fn logout(navigator: &Navigator, dispatch: &Dispatch<AppState>) {
    let navigator = navigator.clone();
    let dispatch = dispatch.clone();
    spawn_local(async move {
        let client = JobSightClient::shared();
        if let Err(err) = client.logout().await {
            log(std::format!("logout request failed: {err}").as_str());
        }
        dispatch.reduce_mut(|state| state.user = None);
        navigator.push(&MainRoute::Home);
        toast_success("Logged out successfully");
    });
}

/// Application root: toast layer plus the router wrapped in the session
/// resolver.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Toaster />
            <SessionGate />
        </BrowserRouter>
    }
}

/// Resolves the session once on mount and blocks all route rendering until
/// the probe settles.
///
/// Probe outcome: success stores the identity; when the app started on the
/// entry route a follow-up profile fetch decides between dashboard and
/// onboarding. Any failure, including 401, is treated as anonymous with no
/// toast.
#[function_component(SessionGate)]
fn session_gate() -> Html {
    let (_state, dispatch) = use_store::<AppState>();
    let resolving = use_state(|| true);
    let navigator = use_navigator();
    let location = use_location();

    {
        let resolving = resolving.clone();
        let dispatch = dispatch.clone();
        let on_entry_route = location
            .as_ref()
            .is_some_and(|location| location.path() == "/");
        use_effect_with((), move |()| {
            spawn_local(async move {
                let client = JobSightClient::shared();
                let session = client.me().await;
                if let Err(ref err) = session {
                    if err.is_unauthorized() {
                        // Anonymous; expected on first visit.
                        log("no active session");
                    } else {
                        log(std::format!("session check failed: {err}").as_str());
                    }
                }
                let (user, lookup_profile) = resolve_session(session, on_entry_route);
                dispatch.reduce_mut(|state| state.user = user);
                if lookup_profile {
                    match client.get_profile().await {
                        Ok(profile) => {
                            if let Some(ref nav) = navigator {
                                nav.push(&entry_destination(profile.is_some()));
                            }
                        }
                        Err(err) => {
                            log(std::format!("profile check failed: {err}").as_str());
                        }
                    }
                }
                resolving.set(false);
            });
            || ()
        });
    }

    if *resolving {
        return html! { <Loading /> };
    }

    html! { <Switch<MainRoute> render={crate::routes::switch} /> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use shared::models::ErrorResponse;

    fn sample_user() -> User {
        serde_json::from_str(
            r#"{"id":"00000000-0000-0000-0000-000000000001","name":"Ada","email":"ada@example.com"}"#,
        )
        .unwrap()
    }

    fn unauthorized() -> ApiError {
        ApiError::Server {
            status: StatusCode::UNAUTHORIZED,
            body: ErrorResponse::default(),
        }
    }

    #[test]
    fn test_entry_destination_with_profile_is_dashboard() {
        assert_eq!(entry_destination(true), MainRoute::Dashboard);
    }

    #[test]
    fn test_entry_destination_without_profile_is_onboarding() {
        assert_eq!(entry_destination(false), MainRoute::Onboarding);
    }

    #[test]
    fn test_session_failure_clears_identity_without_navigation() {
        // A 401 off the entry route settles anonymous with no side effects.
        let (user, lookup_profile) = resolve_session(Err(unauthorized()), false);
        assert!(user.is_none());
        assert!(!lookup_profile);
    }

    #[test]
    fn test_session_failure_on_entry_route_still_never_navigates() {
        let (user, lookup_profile) = resolve_session(Err(unauthorized()), true);
        assert!(user.is_none());
        assert!(!lookup_profile);
    }

    #[test]
    fn test_session_success_off_entry_route_keeps_location() {
        let (user, lookup_profile) = resolve_session(Ok(sample_user()), false);
        assert_eq!(user, Some(sample_user()));
        assert!(!lookup_profile);
    }

    #[test]
    fn test_session_success_on_entry_route_consults_profile() {
        let (user, lookup_profile) = resolve_session(Ok(sample_user()), true);
        assert!(user.is_some());
        assert!(lookup_profile);
    }
}
