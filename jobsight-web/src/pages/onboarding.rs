use crate::api::{JobSightClient, ResumeUpload};
use crate::components::tag_input::TagInput;
use crate::components::toast::{toast_error, toast_success};
use crate::models::app_state::AppState;
use crate::models::onboarding::{FIRST_STEP, LAST_STEP, OnboardingForm};
use crate::routes::MainRoute;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_selector;

/// Build an input callback that applies a field edit to a fresh copy of the
/// wizard state. Non-capturing `apply` keeps this a plain `fn` pointer.
fn edit_input(
    form: &UseStateHandle<OnboardingForm>,
    apply: fn(&mut OnboardingForm, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        }
    })
}

/// Same as [`edit_input`], for textarea-backed fields.
fn edit_textarea(
    form: &UseStateHandle<OnboardingForm>,
    apply: fn(&mut OnboardingForm, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlTextAreaElement>() {
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        }
    })
}

/// Build the add-entry callback for a collection: validate, admit, toast.
fn add_entry(
    form: &UseStateHandle<OnboardingForm>,
    add: fn(&mut OnboardingForm) -> Result<(), &'static str>,
    success_message: &'static str,
) -> Callback<MouseEvent> {
    let form = form.clone();
    Callback::from(move |_: MouseEvent| {
        let mut next = (*form).clone();
        match add(&mut next) {
            Ok(()) => {
                form.set(next);
                toast_success(success_message);
            }
            Err(message) => toast_error(message),
        }
    })
}

/// Build a remove-at-index callback for a collection.
fn remove_at(
    form: &UseStateHandle<OnboardingForm>,
    index: usize,
    remove: fn(&mut OnboardingForm, usize),
) -> Callback<MouseEvent> {
    let form = form.clone();
    Callback::from(move |_: MouseEvent| {
        let mut next = (*form).clone();
        remove(&mut next, index);
        form.set(next);
    })
}

/// Build the commit callback for a tag-like collection.
fn commit_tag(
    form: &UseStateHandle<OnboardingForm>,
    commit: fn(&mut OnboardingForm),
) -> Callback<()> {
    let form = form.clone();
    Callback::from(move |()| {
        let mut next = (*form).clone();
        commit(&mut next);
        form.set(next);
    })
}

async fn read_file(file: &web_sys::File) -> Result<ResumeUpload, ()> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| ())?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(ResumeUpload {
        file_name: file.name(),
        mime_type: file.type_(),
        bytes,
    })
}

fn removable_badge(label: String, onremove: Callback<MouseEvent>) -> Html {
    html! {
        <span class="badge badge-outline gap-1 py-3">
            { label }
            <button type="button" class="cursor-pointer" onclick={onremove}>
                <Icon icon_id={IconId::HeroiconsOutlineXMark} class="w-3 h-3" />
            </button>
        </span>
    }
}

/// Four-step onboarding wizard. Accumulates a [`OnboardingForm`] in memory
/// and submits the finished draft plus the optional resume as one multipart
/// request; the draft survives a failed submission so the user can retry.
#[function_component(OnboardingPage)]
pub fn onboarding_page() -> Html {
    let user = use_selector(|state: &AppState| state.user.clone());
    let form = use_state(|| OnboardingForm::new(user.as_ref().as_ref().map(|u| u.name.as_str())));
    let resume = use_state(|| None::<ResumeUpload>);
    let submitting = use_state(|| false);
    let navigator = use_navigator();

    let on_previous = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.previous_step();
            form.set(next);
        })
    };

    let on_next = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.next_step();
            form.set(next);
        })
    };

    let on_file_change = {
        let resume = resume.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let resume = resume.clone();
            spawn_local(async move {
                match read_file(&file).await {
                    Ok(upload) => {
                        toast_success(format!("File \"{}\" selected", upload.file_name));
                        resume.set(Some(upload));
                    }
                    Err(()) => toast_error("Could not read the selected file"),
                }
            });
        })
    };

    let on_file_clear = {
        let resume = resume.clone();
        Callback::from(move |_: MouseEvent| resume.set(None))
    };

    let on_submit = {
        let form = form.clone();
        let resume = resume.clone();
        let submitting = submitting.clone();
        let navigator = navigator;
        Callback::from(move |_: MouseEvent| {
            // The backend cannot score a profile without skills; never
            // issue the request.
            if form.submit_blocked() {
                toast_error("Please add at least one skill");
                return;
            }
            let draft = form.draft.clone();
            let upload = (*resume).clone();
            let submitting = submitting.clone();
            let navigator = navigator.clone();
            submitting.set(true);
            spawn_local(async move {
                let client = JobSightClient::shared();
                match client.create_profile(&draft, upload).await {
                    Ok(()) => {
                        toast_success("Profile created successfully!");
                        if let Some(ref nav) = navigator {
                            nav.push(&MainRoute::Dashboard);
                        }
                    }
                    Err(err) => toast_error(err.detail_or("Failed to create profile")),
                }
                submitting.set(false);
            });
        })
    };

    let step_body = match form.step {
        2 => render_skills_step(&form),
        3 => render_projects_step(&form),
        4 => render_education_step(&form, resume.as_ref(), &on_file_change, &on_file_clear),
        _ => render_basics_step(&form),
    };

    let is_submitting = *submitting;

    html! {
        <div class="min-h-screen bg-base-200 py-12 px-6">
            <div class="max-w-4xl mx-auto card bg-base-100 shadow-xl">
                <div class="card-body space-y-6">
                    <div>
                        <h1 class="text-3xl font-bold">{ "Tell us about yourself" }</h1>
                        <p class="text-base-content/70">
                            { "Your background drives the readiness analysis" }
                        </p>
                    </div>

                    <div>
                        <div class="flex items-center justify-between mb-1 text-sm">
                            <span>{ format!("Step {} of {}", form.step, LAST_STEP) }</span>
                            <span>{ format!("{}%", form.progress_percent()) }</span>
                        </div>
                        <progress
                            class="progress progress-primary w-full"
                            value={form.progress_percent().to_string()}
                            max="100"
                        />
                    </div>

                    { step_body }

                    <div class="flex justify-between pt-6 border-t border-base-300">
                        <button
                            type="button"
                            class="btn btn-outline"
                            onclick={on_previous}
                            disabled={form.step == FIRST_STEP}
                        >
                            { "Previous" }
                        </button>
                        if form.step < LAST_STEP {
                            <button type="button" class="btn btn-primary" onclick={on_next}>
                                { "Next" }
                                <Icon icon_id={IconId::HeroiconsOutlineChevronRight} class="w-4 h-4" />
                            </button>
                        } else {
                            <button
                                type="button"
                                class="btn btn-primary"
                                onclick={on_submit}
                                disabled={is_submitting}
                            >
                                { if is_submitting { "Creating profile..." } else { "Complete setup" } }
                            </button>
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}

fn render_basics_step(form: &UseStateHandle<OnboardingForm>) -> Html {
    let on_name = edit_input(form, |f, v| f.draft.name = v);
    let on_experience = edit_input(form, |f, v| {
        f.draft.experience_years = v.parse().unwrap_or(0.0);
    });
    let on_location = edit_input(form, |f, v| f.draft.location = v);
    let on_role_input = commit_value(form, |f, v| f.role_entry = v);
    let on_role_commit = commit_tag(form, OnboardingForm::commit_role);
    let on_interest_input = commit_value(form, |f, v| f.interest_entry = v);
    let on_interest_commit = commit_tag(form, OnboardingForm::commit_interest);

    html! {
        <div class="space-y-6">
            <div class="form-control">
                <label class="label" for="name"><span class="label-text">{ "Full name" }</span></label>
                <input
                    id="name"
                    class="input input-bordered"
                    type="text"
                    placeholder="John Doe"
                    value={form.draft.name.clone()}
                    oninput={on_name}
                />
            </div>
            <div class="form-control">
                <label class="label" for="experience">
                    <span class="label-text">{ "Years of experience" }</span>
                </label>
                <input
                    id="experience"
                    class="input input-bordered"
                    type="number"
                    min="0"
                    step="0.5"
                    value={form.draft.experience_years.to_string()}
                    oninput={on_experience}
                />
            </div>
            <div class="form-control">
                <label class="label" for="location">
                    <span class="label-text">{ "Location (optional)" }</span>
                </label>
                <input
                    id="location"
                    class="input input-bordered"
                    type="text"
                    placeholder="San Francisco, CA"
                    value={form.draft.location.clone()}
                    oninput={on_location}
                />
            </div>
            <div class="form-control">
                <label class="label"><span class="label-text">{ "Roles you are interested in" }</span></label>
                <TagInput
                    value={form.role_entry.clone()}
                    placeholder="e.g., Frontend Developer"
                    oninput={on_role_input}
                    oncommit={on_role_commit}
                />
                <div class="flex flex-wrap gap-2 mt-3">
                    { for form.draft.roles.iter().enumerate().map(|(index, role)| {
                        removable_badge(role.clone(), remove_at(form, index, OnboardingForm::remove_role))
                    }) }
                </div>
            </div>
            <div class="form-control">
                <label class="label"><span class="label-text">{ "Domain interests" }</span></label>
                <TagInput
                    value={form.interest_entry.clone()}
                    placeholder="e.g., Web Development, Cloud"
                    oninput={on_interest_input}
                    oncommit={on_interest_commit}
                />
                <div class="flex flex-wrap gap-2 mt-3">
                    { for form.draft.interests.iter().enumerate().map(|(index, interest)| {
                        removable_badge(interest.clone(), remove_at(form, index, OnboardingForm::remove_interest))
                    }) }
                </div>
            </div>
        </div>
    }
}

fn render_skills_step(form: &UseStateHandle<OnboardingForm>) -> Html {
    let on_skill_name = edit_input(form, |f, v| f.skill_entry.name = v);
    let on_skill_years = edit_input(form, |f, v| {
        f.skill_entry.years = v.parse().unwrap_or(0.0);
    });
    let on_skill_last_used = edit_input(form, |f, v| {
        f.skill_entry.last_used = if v.is_empty() { None } else { Some(v) };
    });
    let on_skill_level = edit_input(form, |f, v| {
        f.skill_entry.level = v.parse().map_or(5, |level: u8| level.clamp(1, 10));
    });
    let on_add_skill = add_entry(form, OnboardingForm::add_skill, "Skill added successfully");

    html! {
        <div class="space-y-6">
            <div class="bg-base-200 border border-base-300 rounded-xl p-4">
                <h3 class="font-semibold mb-4">{ "Add your skills" }</h3>
                <div class="grid md:grid-cols-2 gap-4">
                    <div class="form-control">
                        <label class="label" for="skill-name">
                            <span class="label-text">{ "Skill name" }</span>
                        </label>
                        <input
                            id="skill-name"
                            class="input input-bordered"
                            type="text"
                            placeholder="e.g., React"
                            value={form.skill_entry.name.clone()}
                            oninput={on_skill_name}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="skill-years">
                            <span class="label-text">{ "Years of experience" }</span>
                        </label>
                        <input
                            id="skill-years"
                            class="input input-bordered"
                            type="number"
                            min="0"
                            step="0.5"
                            value={form.skill_entry.years.to_string()}
                            oninput={on_skill_years}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="skill-last-used">
                            <span class="label-text">{ "Last used (optional)" }</span>
                        </label>
                        <input
                            id="skill-last-used"
                            class="input input-bordered"
                            type="month"
                            value={form.skill_entry.last_used.clone().unwrap_or_default()}
                            oninput={on_skill_last_used}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="skill-level">
                            <span class="label-text">{ "Proficiency (1-10)" }</span>
                        </label>
                        <input
                            id="skill-level"
                            class="input input-bordered"
                            type="number"
                            min="1"
                            max="10"
                            value={form.skill_entry.level.to_string()}
                            oninput={on_skill_level}
                        />
                    </div>
                </div>
                <button type="button" class="btn btn-primary mt-4" onclick={on_add_skill}>
                    <Icon icon_id={IconId::HeroiconsOutlinePlus} class="w-4 h-4" />
                    { "Add skill" }
                </button>
            </div>

            <div class="space-y-2">
                { for form.draft.skills.iter().enumerate().map(|(index, skill)| {
                    let onremove = remove_at(form, index, OnboardingForm::remove_skill);
                    html! {
                        <div class="flex items-center justify-between bg-base-100 rounded-xl p-4 border border-base-300">
                            <div>
                                <span class="font-semibold">{ &skill.name }</span>
                                <span class="text-sm text-base-content/70 ml-3">
                                    { format!("{} years \u{2022} Level {}/10", skill.years, skill.level) }
                                </span>
                            </div>
                            <button type="button" class="btn btn-ghost btn-xs text-error" onclick={onremove}>
                                <Icon icon_id={IconId::HeroiconsOutlineXMark} class="w-4 h-4" />
                            </button>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}

fn render_projects_step(form: &UseStateHandle<OnboardingForm>) -> Html {
    let on_title = edit_input(form, |f, v| f.project_entry.title = v);
    let on_description = edit_textarea(form, |f, v| f.project_entry.description = v);
    let on_stack_input = commit_value(form, |f, v| f.stack_entry = v);
    let on_stack_commit = commit_tag(form, OnboardingForm::commit_stack_item);
    let on_add_project = add_entry(form, OnboardingForm::add_project, "Project added successfully");

    html! {
        <div class="space-y-6">
            <div class="bg-base-200 border border-base-300 rounded-xl p-4">
                <h3 class="font-semibold mb-4">{ "Add your projects" }</h3>
                <div class="space-y-4">
                    <div class="form-control">
                        <label class="label" for="project-title">
                            <span class="label-text">{ "Project title" }</span>
                        </label>
                        <input
                            id="project-title"
                            class="input input-bordered"
                            type="text"
                            placeholder="E-commerce Platform"
                            value={form.project_entry.title.clone()}
                            oninput={on_title}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="project-desc">
                            <span class="label-text">{ "Description" }</span>
                        </label>
                        <textarea
                            id="project-desc"
                            class="textarea textarea-bordered"
                            rows="3"
                            placeholder="Built a full-stack e-commerce platform with payment integration..."
                            value={form.project_entry.description.clone()}
                            oninput={on_description}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label"><span class="label-text">{ "Tech stack" }</span></label>
                        <TagInput
                            value={form.stack_entry.clone()}
                            placeholder="e.g., React, Node.js"
                            oninput={on_stack_input}
                            oncommit={on_stack_commit}
                        />
                        <div class="flex flex-wrap gap-2 mt-2">
                            { for form.project_entry.stack.iter().enumerate().map(|(index, tech)| {
                                removable_badge(tech.clone(), remove_at(form, index, OnboardingForm::remove_stack_item))
                            }) }
                        </div>
                    </div>
                </div>
                <button type="button" class="btn btn-primary mt-4" onclick={on_add_project}>
                    <Icon icon_id={IconId::HeroiconsOutlinePlus} class="w-4 h-4" />
                    { "Add project" }
                </button>
            </div>

            <div class="space-y-2">
                { for form.draft.projects.iter().enumerate().map(|(index, project)| {
                    let onremove = remove_at(form, index, OnboardingForm::remove_project);
                    html! {
                        <div class="bg-base-100 rounded-xl p-4 border border-base-300">
                            <div class="flex items-start justify-between">
                                <div class="flex-1">
                                    <h4 class="font-semibold mb-1">{ &project.title }</h4>
                                    <p class="text-sm text-base-content/70 mb-2">{ &project.description }</p>
                                    <div class="flex flex-wrap gap-2">
                                        { for project.stack.iter().map(|tech| html! {
                                            <span class="badge badge-sm badge-primary badge-outline">{ tech }</span>
                                        }) }
                                    </div>
                                </div>
                                <button type="button" class="btn btn-ghost btn-xs text-error ml-4" onclick={onremove}>
                                    <Icon icon_id={IconId::HeroiconsOutlineXMark} class="w-4 h-4" />
                                </button>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}

fn render_education_step(
    form: &UseStateHandle<OnboardingForm>,
    resume: Option<&ResumeUpload>,
    on_file_change: &Callback<Event>,
    on_file_clear: &Callback<MouseEvent>,
) -> Html {
    let on_degree = edit_input(form, |f, v| f.education_entry.degree = v);
    let on_institution = edit_input(form, |f, v| f.education_entry.institution = v);
    let on_year = edit_input(form, |f, v| {
        f.education_entry.year = if v.is_empty() { None } else { Some(v) };
    });
    let on_add_education = add_entry(
        form,
        OnboardingForm::add_education,
        "Education added successfully",
    );

    html! {
        <div class="space-y-6">
            <div class="bg-base-200 border border-base-300 rounded-xl p-4">
                <h3 class="font-semibold mb-4">{ "Add education" }</h3>
                <div class="grid md:grid-cols-2 gap-4">
                    <div class="form-control">
                        <label class="label" for="degree">
                            <span class="label-text">{ "Degree" }</span>
                        </label>
                        <input
                            id="degree"
                            class="input input-bordered"
                            type="text"
                            placeholder="B.S. Computer Science"
                            value={form.education_entry.degree.clone()}
                            oninput={on_degree}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="institution">
                            <span class="label-text">{ "Institution" }</span>
                        </label>
                        <input
                            id="institution"
                            class="input input-bordered"
                            type="text"
                            placeholder="Stanford University"
                            value={form.education_entry.institution.clone()}
                            oninput={on_institution}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="year">
                            <span class="label-text">{ "Year (optional)" }</span>
                        </label>
                        <input
                            id="year"
                            class="input input-bordered"
                            type="text"
                            placeholder="2020"
                            value={form.education_entry.year.clone().unwrap_or_default()}
                            oninput={on_year}
                        />
                    </div>
                </div>
                <button type="button" class="btn btn-primary mt-4" onclick={on_add_education}>
                    <Icon icon_id={IconId::HeroiconsOutlinePlus} class="w-4 h-4" />
                    { "Add education" }
                </button>
            </div>

            <div class="space-y-2">
                { for form.draft.education.iter().enumerate().map(|(index, education)| {
                    let onremove = remove_at(form, index, OnboardingForm::remove_education);
                    let year = education.year.clone().map(|y| format!(" \u{2022} {y}")).unwrap_or_default();
                    html! {
                        <div class="flex items-center justify-between bg-base-100 rounded-xl p-4 border border-base-300">
                            <div>
                                <span class="font-semibold">{ &education.degree }</span>
                                <span class="text-sm text-base-content/70 ml-3">
                                    { format!("{}{year}", education.institution) }
                                </span>
                            </div>
                            <button type="button" class="btn btn-ghost btn-xs text-error" onclick={onremove}>
                                <Icon icon_id={IconId::HeroiconsOutlineXMark} class="w-4 h-4" />
                            </button>
                        </div>
                    }
                }) }
            </div>

            <div class="form-control">
                <label class="label" for="resume">
                    <span class="label-text">{ "Upload resume (optional)" }</span>
                </label>
                <p class="text-sm text-base-content/60 mb-2">
                    { "PDF or Word format, used to enrich the analysis" }
                </p>
                <input
                    id="resume"
                    class="file-input file-input-bordered w-full"
                    type="file"
                    accept=".pdf,.docx,.doc"
                    onchange={on_file_change.clone()}
                />
                if let Some(upload) = resume {
                    <div class="mt-2 flex items-center gap-2 text-sm">
                        <span class="font-medium">{ "Selected:" }</span>
                        <span>{ upload.file_name.clone() }</span>
                        <button type="button" class="btn btn-ghost btn-xs text-error" onclick={on_file_clear.clone()}>
                            <Icon icon_id={IconId::HeroiconsOutlineXMark} class="w-4 h-4" />
                        </button>
                    </div>
                }
            </div>
        </div>
    }
}

/// Like [`edit_input`], kept separate so tag entry edits read at the call
/// site as what they are.
fn commit_value(
    form: &UseStateHandle<OnboardingForm>,
    apply: fn(&mut OnboardingForm, String),
) -> Callback<String> {
    let form = form.clone();
    Callback::from(move |value: String| {
        let mut next = (*form).clone();
        apply(&mut next, value);
        form.set(next);
    })
}
