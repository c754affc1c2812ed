use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};

/// Props for [`TagInput`].
#[derive(Properties, PartialEq)]
pub struct TagInputProps {
    /// Controlled input value.
    pub value: String,
    /// Placeholder text.
    #[prop_or_default]
    pub placeholder: AttrValue,
    /// Emitted on every keystroke with the new value.
    pub oninput: Callback<String>,
    /// Emitted when the user commits the pending tag, by Enter key or by
    /// clicking the add button. Both triggers funnel into the same callback
    /// so the non-empty check lives in one place upstream.
    pub oncommit: Callback<()>,
}

/// Text input with a dual commit trigger, used for roles, interests and
/// project tech stacks.
#[function_component(TagInput)]
pub fn tag_input(props: &TagInputProps) -> Html {
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                oninput.emit(input.value());
            }
        })
    };

    let onkeydown = {
        let oncommit = props.oncommit.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Enter" {
                event.prevent_default();
                oncommit.emit(());
            }
        })
    };

    let onclick = {
        let oncommit = props.oncommit.clone();
        Callback::from(move |_: MouseEvent| oncommit.emit(()))
    };

    html! {
        <div class="flex gap-2">
            <input
                class="input input-bordered flex-1"
                type="text"
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                {oninput}
                {onkeydown}
            />
            <button type="button" class="btn btn-primary" {onclick}>
                <Icon icon_id={IconId::HeroiconsOutlinePlus} class="w-4 h-4" />
            </button>
        </div>
    }
}
