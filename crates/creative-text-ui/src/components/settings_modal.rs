//! Settings modal.
//!
//! # Design
//! - Form state is raw control text; parsing and validation happen in
//!   [`SettingsForm::parse`] when the user saves.
//! - Persistence and apply stay in the app shell, reached through `on_save`.
//! - The control named by a validation error is marked `is-invalid` until the
//!   next edit.

use crate::app::AppCtx;
use crate::components::language_select::LanguageSelect;
use crate::core::alerts::AlertLevel;
use crate::core::form::SettingsForm;
use crate::core::languages::level_choices;
use crate::core::settings::{
    FONT_SIZE_RANGE, MAX_RETRIES_RANGE, SettingKey, Settings, TEMPERATURE_RANGE, ThemeMode,
    TOP_P_RANGE,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsModalProps {
    pub(crate) open: bool,
    pub(crate) settings: Settings,
    pub(crate) on_save: Callback<Settings>,
    pub(crate) on_reset: Callback<()>,
    pub(crate) on_close: Callback<()>,
}

#[function_component(SettingsModal)]
pub(crate) fn settings_modal(props: &SettingsModalProps) -> Html {
    let ctx = use_context::<AppCtx>();
    let form = use_state(|| SettingsForm::from_settings(&props.settings));
    let invalid = use_state(|| None::<&'static str>);

    {
        let form = form.clone();
        let invalid = invalid.clone();
        use_effect_with_deps(
            move |(open, settings): &(bool, Settings)| {
                if *open {
                    form.set(SettingsForm::from_settings(settings));
                    invalid.set(None);
                }
                || ()
            },
            (props.open, props.settings.clone()),
        );
    }

    let set_field = {
        let form = form.clone();
        let invalid = invalid.clone();
        move |key: SettingKey| {
            let form = form.clone();
            let invalid = invalid.clone();
            Callback::from(move |value: String| {
                let mut next = (*form).clone();
                next.set_raw(key, value);
                form.set(next);
                if *invalid == Some(key.name()) {
                    invalid.set(None);
                }
            })
        }
    };
    let control = |base: &'static str, key: SettingKey| {
        classes!(base, (*invalid == Some(key.name())).then_some("is-invalid"))
    };
    let on_input = |key: SettingKey| {
        let set = set_field(key);
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                set.emit(input.value());
            }
        })
    };
    let on_select = |key: SettingKey| {
        let set = set_field(key);
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                set.emit(select.value());
            }
        })
    };
    let on_history = {
        let set = set_field(SettingKey::SaveHistory);
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                set.emit(input.checked().to_string());
            }
        })
    };

    let on_save = {
        let form = form.clone();
        let invalid = invalid.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |_| match form.parse() {
            Ok(settings) => on_save.emit(settings),
            Err(err) => {
                invalid.set(Some(err.field()));
                if let Some(ctx) = ctx.as_ref() {
                    ctx.alerts.emit((err.to_string(), AlertLevel::Danger));
                }
            }
        })
    };
    let on_reset = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_| on_reset.emit(()))
    };
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    let modal_class = classes!("modal", "fade", props.open.then_some("show d-block"));

    html! {
        <div class={modal_class} id="settingsModal" tabindex="-1" role="dialog" aria-modal="true">
            <div class="modal-dialog">
                <div class="modal-content">
                    <div class="modal-header">
                        <h5 class="modal-title">{"Settings"}</h5>
                        <button type="button" class="btn-close" aria-label="Close" onclick={on_close.clone()}></button>
                    </div>
                    <div class="modal-body">
                        <div class="mb-3">
                            <label for="defaultLanguage" class="form-label">{"Default language"}</label>
                            <LanguageSelect
                                id="defaultLanguage"
                                value={form.default_language.clone()}
                                on_change={set_field(SettingKey::DefaultLanguage)}
                            />
                        </div>
                        <div class="mb-3">
                            <label for="defaultLevel" class="form-label">{"Default level"}</label>
                            <select id="defaultLevel" class={control("form-select", SettingKey::DefaultLevel)} onchange={on_select(SettingKey::DefaultLevel)}>
                                {for level_choices(&form.default_level).into_iter().map(|level| html! {
                                    <option value={level.to_string()} selected={form.default_level == level}>{level.to_string()}</option>
                                })}
                            </select>
                        </div>
                        <div class="form-check mb-3">
                            <input
                                id="saveHistory"
                                type="checkbox"
                                class="form-check-input"
                                checked={form.save_history}
                                onchange={on_history}
                            />
                            <label for="saveHistory" class="form-check-label">{"Save history"}</label>
                        </div>
                        <div class="mb-3">
                            <label for="temperature" class="form-label">
                                {"Temperature: "}<span id="temperatureValue">{form.temperature.clone()}</span>
                            </label>
                            <input
                                id="temperature"
                                type="range"
                                class={control("form-range", SettingKey::Temperature)}
                                min={TEMPERATURE_RANGE.0.to_string()}
                                max={TEMPERATURE_RANGE.1.to_string()}
                                step="0.1"
                                value={form.temperature.clone()}
                                oninput={on_input(SettingKey::Temperature)}
                            />
                        </div>
                        <div class="mb-3">
                            <label for="topP" class="form-label">
                                {"Top P: "}<span id="topPValue">{form.top_p.clone()}</span>
                            </label>
                            <input
                                id="topP"
                                type="range"
                                class={control("form-range", SettingKey::TopP)}
                                min={TOP_P_RANGE.0.to_string()}
                                max={TOP_P_RANGE.1.to_string()}
                                step="0.05"
                                value={form.top_p.clone()}
                                oninput={on_input(SettingKey::TopP)}
                            />
                        </div>
                        <div class="mb-3">
                            <label for="maxRetries" class="form-label">{"Max retries"}</label>
                            <input
                                id="maxRetries"
                                type="number"
                                class={control("form-control", SettingKey::MaxRetries)}
                                min={MAX_RETRIES_RANGE.0.to_string()}
                                max={MAX_RETRIES_RANGE.1.to_string()}
                                value={form.max_retries.clone()}
                                oninput={on_input(SettingKey::MaxRetries)}
                            />
                        </div>
                        <div class="mb-3">
                            <label for="fontSize" class="form-label">
                                {"Font size: "}<span id="fontSizeValue">{form.font_size.clone()}</span>{"px"}
                            </label>
                            <input
                                id="fontSize"
                                type="range"
                                class={control("form-range", SettingKey::FontSize)}
                                min={FONT_SIZE_RANGE.0.to_string()}
                                max={FONT_SIZE_RANGE.1.to_string()}
                                step="1"
                                value={form.font_size.clone()}
                                oninput={on_input(SettingKey::FontSize)}
                            />
                        </div>
                        <div class="mb-3">
                            <label for="theme" class="form-label">{"Theme"}</label>
                            <select id="theme" class="form-select" onchange={on_select(SettingKey::Theme)}>
                                {for [ThemeMode::Light, ThemeMode::Dark].into_iter().map(|theme| html! {
                                    <option value={theme.as_str()} selected={form.theme == theme.as_str()}>
                                        {if theme == ThemeMode::Dark { "Dark" } else { "Light" }}
                                    </option>
                                })}
                            </select>
                        </div>
                    </div>
                    <div class="modal-footer">
                        <button type="button" class="btn btn-link me-auto" onclick={on_reset}>{"Restore defaults"}</button>
                        <button type="button" class="btn btn-secondary" onclick={on_close}>{"Cancel"}</button>
                        <button id="saveSettings" type="button" class="btn btn-primary" onclick={on_save}>{"Save"}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
