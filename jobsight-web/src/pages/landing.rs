use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// Public entry page. Carries no behavior beyond linking into the app; the
/// session resolver handles redirecting returning users away from here.
#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let user = use_selector(|state: &AppState| state.user.clone());

    let call_to_action = if user.is_some() {
        html! {
            <Link<MainRoute> to={MainRoute::Dashboard} classes="btn btn-primary btn-lg">
                { "Open your dashboard" }
            </Link<MainRoute>>
        }
    } else {
        html! {
            <div class="flex gap-4 justify-center">
                <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary btn-lg">
                    { "Get started" }
                </Link<MainRoute>>
                <Link<MainRoute> to={MainRoute::Login} classes="btn btn-outline btn-lg">
                    { "Sign in" }
                </Link<MainRoute>>
            </div>
        }
    };

    html! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-xl">
                    <Icon icon_id={IconId::HeroiconsOutlineChartBar} class="w-16 h-16 mx-auto mb-6 text-primary" />
                    <h1 class="text-5xl font-bold">{ "Know where you stand." }</h1>
                    <p class="py-6 text-base-content/70">
                        { "JobSight scores your profile against your target job domain, \
                           shows which skills you are missing, and writes your resume, \
                           cover letter and recruiter outreach for you." }
                    </p>
                    { call_to_action }
                </div>
            </div>
        </div>
    }
}
