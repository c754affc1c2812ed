use crate::api::JobSightClient;
use crate::components::loading::Loading;
use crate::components::toast::{toast_error, toast_success};
use crate::models::app_state::AppState;
use crate::models::dashboard::{
    cold_email_request, cover_letter_request, effective_template, resolve_role, resume_request,
    trigger_disabled,
};
use shared::models::{
    Analysis, AnalysisFailure, AnalyzeRequest, ContentKind, Domain, MarketTemplate, Profile,
    RefreshTemplateRequest,
};
use std::str::FromStr;
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

fn input_value(event: &InputEvent) -> Option<String> {
    event
        .target_dyn_into::<HtmlInputElement>()
        .map(|input| input.value())
}

fn set_string(handle: &UseStateHandle<String>) -> Callback<InputEvent> {
    let handle = handle.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(value) = input_value(&event) {
            handle.set(value);
        }
    })
}

/// Main authenticated view: readiness score, skill gaps, roadmap, market
/// signals and the three content generators.
///
/// Profile and latest analysis load concurrently on mount. A fresh analysis
/// replaces the held one wholesale and copies its embedded market template
/// into the standalone slot so the template card always shows the newest
/// snapshot.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let (_state, dispatch) = use_store::<AppState>();
    let navigator = use_navigator();

    let profile = use_state(|| None::<Profile>);
    let analysis = use_state(|| None::<Analysis>);
    let template = use_state(|| None::<MarketTemplate>);
    let loading = use_state(|| true);

    let domain = use_state(Domain::default);
    let role_input = use_state(String::new);
    let analyzing = use_state(|| false);
    let refreshing = use_state(|| false);

    let generating = use_state(|| None::<ContentKind>);
    let content = use_state(|| None::<(ContentKind, String)>);
    let resume_role = use_state(String::new);
    let letter_company = use_state(String::new);
    let letter_position = use_state(String::new);
    let letter_description = use_state(String::new);
    let email_recruiter = use_state(String::new);
    let email_company = use_state(String::new);

    {
        let profile = profile.clone();
        let analysis = analysis.clone();
        let loading = loading.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let client = JobSightClient::shared();
                let (profile_result, analysis_result) =
                    futures::join!(client.get_profile(), client.latest_analysis());
                match profile_result {
                    Ok(stored) => profile.set(stored),
                    Err(err) => toast_error(err.detail_or("Failed to load your profile")),
                }
                // No stored analysis yet is the normal first-visit state.
                if let Ok(stored) = analysis_result {
                    analysis.set(stored);
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_domain_change = {
        let domain = domain.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                if let Ok(picked) = Domain::from_str(&select.value()) {
                    domain.set(picked);
                }
            }
        })
    };

    let on_run_analysis = {
        let domain = domain.clone();
        let role_input = role_input.clone();
        let profile = profile.clone();
        let analysis = analysis.clone();
        let template = template.clone();
        let analyzing = analyzing.clone();
        Callback::from(move |_: MouseEvent| {
            let request = AnalyzeRequest {
                domain: *domain,
                role: resolve_role(&role_input, (*profile).as_ref()),
            };
            let analysis = analysis.clone();
            let template = template.clone();
            let analyzing = analyzing.clone();
            analyzing.set(true);
            spawn_local(async move {
                let client = JobSightClient::shared();
                match client.run_analysis(&request).await {
                    Ok(result) => {
                        if result.market_template.is_some() {
                            template.set(result.market_template.clone());
                        }
                        analysis.set(Some(result));
                        toast_success("Analysis completed!");
                    }
                    Err(err) => {
                        let failure = AnalysisFailure::classify(err.server_body());
                        toast_error(failure.user_message().to_string());
                    }
                }
                analyzing.set(false);
            });
        })
    };

    let on_refresh_template = {
        let domain = domain.clone();
        let role_input = role_input.clone();
        let profile = profile.clone();
        let template = template.clone();
        let refreshing = refreshing.clone();
        Callback::from(move |_: MouseEvent| {
            let picked = *domain;
            let role = resolve_role(&role_input, (*profile).as_ref()).unwrap_or_default();
            let request = RefreshTemplateRequest {
                domain: picked,
                role: role.clone(),
            };
            let template = template.clone();
            let refreshing = refreshing.clone();
            refreshing.set(true);
            spawn_local(async move {
                let client = JobSightClient::shared();
                match client.refresh_template(&request).await {
                    Ok(response) => match response.template {
                        Some(mut fresh) => {
                            // Older backends omit provenance on the snapshot.
                            if fresh.role.is_none() && !role.is_empty() {
                                fresh.role = Some(role);
                            }
                            if fresh.domain.is_none() {
                                fresh.domain = Some(picked.as_str().to_string());
                            }
                            template.set(Some(fresh));
                            toast_success("Market template refreshed with latest data!");
                        }
                        None => toast_error("Failed to refresh market template"),
                    },
                    Err(err) => {
                        toast_error(err.detail_or("Failed to refresh market template"));
                    }
                }
                refreshing.set(false);
            });
        })
    };

    let generate = {
        let generating = generating.clone();
        let content = content.clone();
        let resume_role = resume_role.clone();
        let letter_company = letter_company.clone();
        let letter_position = letter_position.clone();
        let letter_description = letter_description.clone();
        let email_recruiter = email_recruiter.clone();
        let email_company = email_company.clone();
        Callback::from(move |kind: ContentKind| {
            let generating = generating.clone();
            let content = content.clone();
            let resume_role = (*resume_role).clone();
            let letter_company = (*letter_company).clone();
            let letter_position = (*letter_position).clone();
            let letter_description = (*letter_description).clone();
            let email_recruiter = (*email_recruiter).clone();
            let email_company = (*email_company).clone();
            generating.set(Some(kind));
            spawn_local(async move {
                let client = JobSightClient::shared();
                let result = match kind {
                    ContentKind::Resume => {
                        client.generate_resume(&resume_request(&resume_role)).await
                    }
                    ContentKind::CoverLetter => {
                        client
                            .generate_cover_letter(&cover_letter_request(
                                &letter_company,
                                &letter_position,
                                &letter_description,
                            ))
                            .await
                    }
                    ContentKind::ColdEmail => {
                        client
                            .generate_cold_email(&cold_email_request(
                                &email_recruiter,
                                &email_company,
                            ))
                            .await
                    }
                };
                match result {
                    Ok(generated) => {
                        content.set(Some((kind, generated.content)));
                        toast_success("Content generated!");
                    }
                    Err(err) => toast_error(err.detail_or("Failed to generate content")),
                }
                generating.set(None);
            });
        })
    };

    let on_logout = {
        Callback::from(move |_: MouseEvent| {
            if let Some(ref nav) = navigator {
                crate::app::logout(nav, &dispatch);
            }
        })
    };

    if *loading {
        return html! { <Loading /> };
    }

    let greeting = (*profile)
        .as_ref()
        .map_or_else(|| "there".to_string(), |p| p.name.clone());
    let shown_template = effective_template((*template).as_ref(), (*analysis).as_ref()).cloned();

    html! {
        <div class="min-h-screen bg-base-200">
            <div class="navbar bg-base-100 shadow-sm px-6">
                <div class="flex-1">
                    <span class="text-xl font-bold">{ "JobSight" }</span>
                </div>
                <div class="flex-none">
                    <button type="button" class="btn btn-ghost btn-sm" onclick={on_logout}>
                        <Icon icon_id={IconId::HeroiconsOutlineArrowRightOnRectangle} class="w-4 h-4" />
                        { "Log out" }
                    </button>
                </div>
            </div>

            <div class="max-w-6xl mx-auto p-6 space-y-6">
                <div>
                    <h1 class="text-3xl font-bold">{ format!("Welcome back, {greeting}") }</h1>
                    <p class="text-base-content/70">
                        { "Pick a target domain and run the analysis to see where you stand." }
                    </p>
                </div>

                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{ "Readiness analysis" }</h2>
                        <div class="flex flex-wrap items-end gap-4">
                            <div class="form-control">
                                <label class="label" for="domain">
                                    <span class="label-text">{ "Target domain" }</span>
                                </label>
                                <select
                                    id="domain"
                                    class="select select-bordered"
                                    onchange={on_domain_change}
                                >
                                    { for Domain::iter().map(|candidate| html! {
                                        <option
                                            value={candidate.as_str()}
                                            selected={candidate == *domain}
                                        >
                                            { candidate.label() }
                                        </option>
                                    }) }
                                </select>
                            </div>
                            <div class="form-control flex-1 min-w-48">
                                <label class="label" for="role-override">
                                    <span class="label-text">{ "Target role (optional)" }</span>
                                </label>
                                <input
                                    id="role-override"
                                    class="input input-bordered"
                                    type="text"
                                    placeholder="Defaults to your first listed role"
                                    value={(*role_input).clone()}
                                    oninput={set_string(&role_input)}
                                />
                            </div>
                            <button
                                type="button"
                                class="btn btn-primary"
                                onclick={on_run_analysis}
                                disabled={*analyzing}
                            >
                                { if *analyzing { "Analyzing..." } else { "Run analysis" } }
                            </button>
                        </div>
                    </div>
                </div>

                { render_analysis((*analysis).as_ref()) }
                { render_market(shown_template.as_ref(), &on_refresh_template, *refreshing) }
                { render_generators(
                    &generate,
                    *generating,
                    (*content).as_ref(),
                    &resume_role,
                    &letter_company,
                    &letter_position,
                    &letter_description,
                    &email_recruiter,
                    &email_company,
                ) }
            </div>
        </div>
    }
}

fn render_analysis(analysis: Option<&Analysis>) -> Html {
    let Some(analysis) = analysis else {
        return html! {
            <div class="card bg-base-100 shadow">
                <div class="card-body items-center text-center">
                    <Icon icon_id={IconId::HeroiconsOutlineChartBar} class="w-10 h-10 text-base-content/40" />
                    <p class="text-base-content/70">
                        { "No analysis yet. Run one above to get your readiness score." }
                    </p>
                </div>
            </div>
        };
    };

    let breakdown = &analysis.score_breakdown;
    let level = format!("{:.0}", analysis.level);

    html! {
        <>
            <div class="grid lg:grid-cols-3 gap-6">
                <div class="card bg-base-100 shadow">
                    <div class="card-body items-center">
                        <h2 class="card-title">{ "Readiness score" }</h2>
                        <div
                            class="radial-progress text-primary text-3xl font-bold"
                            style={format!("--value:{level}; --size:9rem;")}
                        >
                            { format!("{level}%") }
                        </div>
                        <p class="text-sm text-base-content/70">
                            { format!(
                                "{} of {} required skills matched ({})",
                                breakdown.matched_skills_count,
                                breakdown.total_required_skills,
                                analysis.domain,
                            ) }
                        </p>
                    </div>
                </div>

                <div class="card bg-base-100 shadow lg:col-span-2">
                    <div class="card-body">
                        <h2 class="card-title">{ "Score breakdown" }</h2>
                        { score_bar("Skill match", breakdown.skill_match, 40.0) }
                        { score_bar("Experience", breakdown.experience, 30.0) }
                        { score_bar("Recency", breakdown.recency, 15.0) }
                        { score_bar("Projects", breakdown.projects, 15.0) }
                    </div>
                </div>
            </div>

            <div class="grid lg:grid-cols-3 gap-6">
                { skill_tier("Bare minimum", &analysis.category_results.bare_minimum) }
                { skill_tier("Intermediate", &analysis.category_results.intermediate) }
                { skill_tier("Standout", &analysis.category_results.standout) }
            </div>

            if !analysis.missing_skills.is_empty() {
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{ "Missing skills" }</h2>
                        <div class="flex flex-wrap gap-2">
                            { for analysis.missing_skills.iter().map(|skill| html! {
                                <span class="badge badge-error badge-outline py-3">{ skill }</span>
                            }) }
                        </div>
                    </div>
                </div>
            }

            if !analysis.roadmap.is_empty() {
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{ "Learning roadmap" }</h2>
                        <ol class="space-y-3">
                            { for analysis.roadmap.iter().enumerate().map(|(index, step)| html! {
                                <li class="flex items-start gap-3">
                                    <span class="badge badge-primary">{ index + 1 }</span>
                                    <div>
                                        <p class="font-medium">{ &step.step }</p>
                                        <p class="text-sm text-base-content/70">
                                            { format!("~{} weeks", step.estimate_weeks) }
                                            { " \u{2022} " }
                                            <a
                                                class="link link-primary"
                                                href={step.resource.clone()}
                                                target="_blank"
                                            >
                                                { "resource" }
                                            </a>
                                        </p>
                                    </div>
                                </li>
                            }) }
                        </ol>
                    </div>
                </div>
            }
        </>
    }
}

fn score_bar(label: &str, value: f64, max: f64) -> Html {
    html! {
        <div class="mb-2">
            <div class="flex justify-between text-sm mb-1">
                <span>{ label }</span>
                <span>{ format!("{value:.0} / {max:.0}") }</span>
            </div>
            <progress
                class="progress progress-primary w-full"
                value={format!("{value:.0}")}
                max={format!("{max:.0}")}
            />
        </div>
    }
}

fn skill_tier(title: &str, skills: &[String]) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="font-semibold">{ title }</h3>
                if skills.is_empty() {
                    <p class="text-sm text-base-content/50">{ "None matched" }</p>
                } else {
                    <div class="flex flex-wrap gap-2">
                        { for skills.iter().map(|skill| html! {
                            <span class="badge badge-success badge-outline py-3">{ skill }</span>
                        }) }
                    </div>
                }
            </div>
        </div>
    }
}

fn render_market(
    template: Option<&MarketTemplate>,
    on_refresh: &Callback<MouseEvent>,
    refreshing: bool,
) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h2 class="card-title">{ "Market signals" }</h2>
                    <button
                        type="button"
                        class="btn btn-outline btn-sm"
                        onclick={on_refresh.clone()}
                        disabled={refreshing}
                    >
                        <Icon icon_id={IconId::HeroiconsOutlineArrowPath} class="w-4 h-4" />
                        { if refreshing { "Refreshing..." } else { "Refresh template" } }
                    </button>
                </div>
                { match template {
                    Some(template) => html! {
                        <>
                            <div class="flex flex-wrap gap-2">
                                { for template.top_keywords.iter().map(|keyword| html! {
                                    <span class="badge badge-primary badge-outline py-3">{ keyword }</span>
                                }) }
                            </div>
                            <p class="text-sm text-base-content/60">
                                { market_caption(template) }
                            </p>
                        </>
                    },
                    None => html! {
                        <p class="text-base-content/70">
                            { "No market snapshot yet. Run an analysis or refresh the template." }
                        </p>
                    },
                } }
            </div>
        </div>
    }
}

fn market_caption(template: &MarketTemplate) -> String {
    let mut parts = Vec::new();
    if let Some(role) = template.role.as_deref().filter(|r| !r.is_empty()) {
        parts.push(role.to_string());
    }
    if let Some(domain) = template.domain.as_deref().filter(|d| !d.is_empty()) {
        parts.push(domain.to_string());
    }
    if let Some(generated_at) = &template.generated_at {
        parts.push(format!("generated {generated_at}"));
    }
    parts.join(" \u{2022} ")
}

#[allow(clippy::too_many_arguments)]
fn render_generators(
    generate: &Callback<ContentKind>,
    generating: Option<ContentKind>,
    content: Option<&(ContentKind, String)>,
    resume_role: &UseStateHandle<String>,
    letter_company: &UseStateHandle<String>,
    letter_position: &UseStateHandle<String>,
    letter_description: &UseStateHandle<String>,
    email_recruiter: &UseStateHandle<String>,
    email_company: &UseStateHandle<String>,
) -> Html {
    let trigger = |kind: ContentKind| {
        let generate = generate.clone();
        let label = kind.label();
        let disabled = trigger_disabled(generating, kind);
        let onclick = Callback::from(move |_: MouseEvent| generate.emit(kind));
        html! {
            <button type="button" class="btn btn-primary btn-sm" {onclick} {disabled}>
                { if disabled { "Generating...".to_string() } else { format!("Generate {label}") } }
            </button>
        }
    };

    let on_description = {
        let handle = letter_description.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                handle.set(area.value());
            }
        })
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body space-y-4">
                <h2 class="card-title">{ "Content generators" }</h2>
                <div class="grid lg:grid-cols-3 gap-6">
                    <div class="bg-base-200 border border-base-300 rounded-xl p-4 space-y-3">
                        <h3 class="font-semibold">{ ContentKind::Resume.label() }</h3>
                        <input
                            class="input input-bordered input-sm w-full"
                            type="text"
                            placeholder="Target role"
                            value={(**resume_role).clone()}
                            oninput={set_string(resume_role)}
                        />
                        { trigger(ContentKind::Resume) }
                    </div>
                    <div class="bg-base-200 border border-base-300 rounded-xl p-4 space-y-3">
                        <h3 class="font-semibold">{ ContentKind::CoverLetter.label() }</h3>
                        <input
                            class="input input-bordered input-sm w-full"
                            type="text"
                            placeholder="Company"
                            value={(**letter_company).clone()}
                            oninput={set_string(letter_company)}
                        />
                        <input
                            class="input input-bordered input-sm w-full"
                            type="text"
                            placeholder="Position"
                            value={(**letter_position).clone()}
                            oninput={set_string(letter_position)}
                        />
                        <textarea
                            class="textarea textarea-bordered textarea-sm w-full"
                            rows="2"
                            placeholder="Job description (optional)"
                            value={(**letter_description).clone()}
                            oninput={on_description}
                        />
                        { trigger(ContentKind::CoverLetter) }
                    </div>
                    <div class="bg-base-200 border border-base-300 rounded-xl p-4 space-y-3">
                        <h3 class="font-semibold">{ ContentKind::ColdEmail.label() }</h3>
                        <input
                            class="input input-bordered input-sm w-full"
                            type="text"
                            placeholder="Recruiter name"
                            value={(**email_recruiter).clone()}
                            oninput={set_string(email_recruiter)}
                        />
                        <input
                            class="input input-bordered input-sm w-full"
                            type="text"
                            placeholder="Company"
                            value={(**email_company).clone()}
                            oninput={set_string(email_company)}
                        />
                        { trigger(ContentKind::ColdEmail) }
                    </div>
                </div>

                if let Some((kind, text)) = content {
                    <div class="bg-base-200 border border-base-300 rounded-xl p-4">
                        <h3 class="font-semibold mb-2">{ kind.label() }</h3>
                        <pre class="whitespace-pre-wrap text-sm font-sans">{ text }</pre>
                    </div>
                }
            </div>
        </div>
    }
}
