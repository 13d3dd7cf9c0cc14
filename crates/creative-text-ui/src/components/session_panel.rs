use crate::app::AppCtx;
use crate::app::clipboard::spawn_copy;
use crate::core::format::format_date;
use crate::core::session::SessionCommand;
use serde_json::Value;
use wasm_bindgen::JsValue;
use yew::prelude::*;

/// Current text and story, with copy and discard actions.
#[function_component(SessionPanel)]
pub(crate) fn session_panel() -> Html {
    let Some(ctx) = use_context::<AppCtx>() else {
        return html! {};
    };
    let session = &ctx.session.0;
    if session.text_data().is_none() && session.story_data().is_none() {
        return html! {
            <p class="text-muted">{"Generate a text or story to see it here."}</p>
        };
    }

    html! {
        <div class="session-panel">
            {session.text_data().map_or_else(Html::default, |data| {
                render_entry(&ctx, "Text", "text", data, SessionCommand::ClearText)
            })}
            {session.story_data().map_or_else(Html::default, |data| {
                render_entry(&ctx, "Story", "story", data, SessionCommand::ClearStory)
            })}
        </div>
    }
}

fn render_entry(
    ctx: &AppCtx,
    label: &'static str,
    body_field: &'static str,
    data: &Value,
    discard: SessionCommand,
) -> Html {
    let title = data
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or(label)
        .to_string();
    let body = data
        .get(body_field)
        .and_then(Value::as_str)
        .map_or_else(|| pretty(data), str::to_string);
    let created = data
        .get("created_at")
        .and_then(Value::as_str)
        .map(display_date);

    let on_copy = {
        let alerts = ctx.alerts.clone();
        let body = body.clone();
        Callback::from(move |_| spawn_copy(alerts.clone(), body.clone()))
    };
    let on_discard = {
        let session = ctx.session.clone();
        Callback::from(move |_| session.dispatch(discard.clone()))
    };

    html! {
        <section class="card mb-3">
            <div class="card-header d-flex justify-content-between">
                <strong>{title}</strong>
                {created.map_or_else(Html::default, |created| html! {
                    <small class="text-muted">{created}</small>
                })}
            </div>
            <div class="card-body generated-text">{body}</div>
            <div class="card-footer d-flex gap-2">
                <button type="button" class="btn btn-sm btn-outline-primary" onclick={on_copy}>{"Copy"}</button>
                <button type="button" class="btn btn-sm btn-outline-danger" onclick={on_discard}>{"Discard"}</button>
            </div>
        </section>
    }
}

fn pretty(data: &Value) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string())
}

/// Host-locale rendering with the core formatter as fallback.
fn display_date(raw: &str) -> String {
    let parsed = js_sys::Date::new(&JsValue::from_str(raw));
    if parsed.get_time().is_nan() {
        return format_date(raw).unwrap_or_else(|| raw.to_string());
    }
    let date: String = parsed
        .to_locale_date_string("default", &JsValue::UNDEFINED)
        .into();
    let time: String = parsed.to_locale_time_string("default").into();
    format!("{date} {time}")
}
