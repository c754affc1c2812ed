use crate::models::app_state::AppState;
use crate::pages::{DashboardPage, LandingPage, LoginPage, NotFoundPage, OnboardingPage};
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The application routes.
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum MainRoute {
    /// Public landing page; the entry route.
    #[at("/")]
    Home,
    /// Login/register page.
    #[at("/login")]
    Login,
    /// Profile onboarding wizard; requires a session.
    #[at("/onboarding")]
    Onboarding,
    /// Readiness dashboard; requires a session.
    #[at("/dashboard")]
    Dashboard,
    /// Catch-all.
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
struct MainRouteViewProps {
    route: MainRoute,
}

/// Renders one route, applying the session guard at render time.
///
/// The guard is a pure function of the current session state: it is
/// re-evaluated on every render and never caches its decision.
#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let user = use_selector(|state: &AppState| state.user.clone());
    let is_authenticated = user.is_some();

    match props.route.clone() {
        MainRoute::Home => html! { <LandingPage /> },
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::Onboarding => {
            if !is_authenticated {
                return html! { <Redirect<MainRoute> to={MainRoute::Home} /> };
            }
            html! { <OnboardingPage /> }
        }
        MainRoute::Dashboard => {
            if !is_authenticated {
                return html! { <Redirect<MainRoute> to={MainRoute::Home} /> };
            }
            html! { <DashboardPage /> }
        }
        MainRoute::NotFound => html! { <NotFoundPage /> },
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log(std::format!("Switching to route: {route:?}").as_str());
    html! { <MainRouteView {route} /> }
}
