use crate::core::languages::{Language, language_options};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LanguageSelectProps {
    pub(crate) id: AttrValue,
    pub(crate) value: String,
    /// Language picked on the other side of a two-language picker.
    #[prop_or_default]
    pub(crate) excluded: Option<Language>,
    pub(crate) on_change: Callback<String>,
}

#[function_component(LanguageSelect)]
pub(crate) fn language_select(props: &LanguageSelectProps) -> Html {
    let on_change = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                on_change.emit(select.value());
            }
        })
    };

    html! {
        <select id={props.id.clone()} class="form-select" onchange={on_change}>
            {for language_options(props.excluded).into_iter().map(|option| html! {
                <option
                    value={option.value}
                    disabled={option.disabled}
                    selected={!option.disabled && (option.selected || option.value == props.value)}
                >
                    {option.label}
                </option>
            })}
        </select>
    }
}
