use crate::core::loading::LoadingState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LoadingOverlayProps {
    pub(crate) state: LoadingState,
}

#[function_component(LoadingOverlay)]
pub(crate) fn loading_overlay(props: &LoadingOverlayProps) -> Html {
    let hidden = (!props.state.is_visible()).then_some("d-none");
    html! {
        <div id="loadingOverlay" class={classes!("loading-overlay", hidden)} aria-busy="true">
            <div class="spinner-border" role="status"></div>
            <p id="loadingMessage">{props.state.caption()}</p>
        </div>
    }
}
