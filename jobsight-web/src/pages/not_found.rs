use crate::routes::MainRoute;
use yew::prelude::*;
use yew_router::prelude::*;

/// Catch-all page for unknown paths.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div>
                    <h1 class="text-4xl font-bold">{ "Page not found" }</h1>
                    <p class="py-4 text-base-content/70">{ "There is nothing at this address." }</p>
                    <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary">
                        { "Back to start" }
                    </Link<MainRoute>>
                </div>
            </div>
        </div>
    }
}
