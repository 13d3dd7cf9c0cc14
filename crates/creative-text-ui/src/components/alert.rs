use crate::core::alerts::{ALERT_TIMEOUT_MS, Alert};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct AlertHostProps {
    pub(crate) alert: Option<Alert>,
    pub(crate) on_dismiss: Callback<u64>,
}

/// Renders the single visible alert and owns its dismissal timer.
#[function_component(AlertHost)]
pub(crate) fn alert_host(props: &AlertHostProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.alert.as_ref().map(|alert| alert.id);
        use_effect_with_deps(
            move |id: &Option<u64>| {
                // Dropping the handle cancels the timer when a newer alert replaces this one.
                let handle = id.map(|id| Timeout::new(ALERT_TIMEOUT_MS, move || on_dismiss.emit(id)));
                move || drop(handle)
            },
            id,
        );
    }

    let Some(alert) = props.alert.as_ref() else {
        return html! {};
    };
    let id = alert.id;
    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(id))
    };

    html! {
        <div
            class={classes!(
                "custom-alert",
                "alert",
                format!("alert-{}", alert.level.as_str()),
                "alert-dismissible",
                "fade",
                "show"
            )}
            role="alert"
        >
            <div>{alert.message.clone()}</div>
            <button type="button" class="btn-close" aria-label="Close" onclick={on_close}></button>
        </div>
    }
}
