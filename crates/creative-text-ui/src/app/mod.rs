use crate::components::alert::AlertHost;
use crate::components::loading::LoadingOverlay;
use crate::components::session_panel::SessionPanel;
use crate::components::settings_modal::SettingsModal;
use crate::core::alerts::{Alert, AlertCenter, AlertLevel};
use crate::core::loading::{LoadingCommand, LoadingState};
use crate::core::session::{SessionCommand, SessionState};
use crate::core::settings::Settings;
use crate::core::store::SettingsStore;
use bridge::{LOADING_EVENT, SESSION_EVENT, listen};
use preferences::{BrowserStorage, DocumentSurface, log_load_outcome, log_storage_error};
use std::rc::Rc;
use yew::prelude::*;

mod bridge;
pub(crate) mod clipboard;
mod preferences;

/// Shared handles for components below the shell.
#[derive(Clone, PartialEq)]
pub(crate) struct AppCtx {
    pub(crate) alerts: Callback<(String, AlertLevel)>,
    pub(crate) session: UseReducerHandle<SessionSlice>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct SessionSlice(pub(crate) SessionState);

impl Reducible for SessionSlice {
    type Action = SessionCommand;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        action.apply(&mut next);
        Rc::new(Self(next))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct LoadingSlice(pub(crate) LoadingState);

impl Reducible for LoadingSlice {
    type Action = LoadingCommand;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        action.apply(&mut next);
        Rc::new(Self(next))
    }
}

#[function_component(CreativeTextApp)]
pub(crate) fn creative_text_app() -> Html {
    let store = use_mut_ref(|| SettingsStore::new(BrowserStorage));
    let settings = use_state(Settings::default);
    let modal_open = use_state(|| false);
    let alert_center = use_mut_ref(AlertCenter::new);
    let alert = use_state(|| None as Option<Alert>);
    let loading = use_reducer(LoadingSlice::default);
    let session = use_reducer(SessionSlice::default);

    {
        let store = store.clone();
        let settings = settings.clone();
        use_effect_with_deps(
            move |_| {
                let mut store = store.borrow_mut();
                store.load().apply(&mut DocumentSurface);
                log_load_outcome(store.last_load());
                settings.set(store.settings().clone());
                || ()
            },
            (),
        );
    }

    let show_alert = {
        let alert_center = alert_center.clone();
        let alert = alert.clone();
        Callback::from(move |(message, level): (String, AlertLevel)| {
            let next = alert_center.borrow_mut().show(message, level);
            alert.set(Some(next));
        })
    };

    let on_alert_dismiss = {
        let alert_center = alert_center.clone();
        let alert = alert.clone();
        Callback::from(move |id: u64| {
            if alert_center.borrow_mut().expire(id) {
                alert.set(None);
            }
        })
    };

    let on_loading = {
        let loading = loading.clone();
        Callback::from(move |command: LoadingCommand| loading.dispatch(command))
    };

    {
        let session = session.clone();
        use_effect_with_deps(
            move |_| {
                let on_session = Callback::from(move |command: SessionCommand| {
                    session.dispatch(command);
                });
                let listeners = [
                    listen(SESSION_EVENT, on_session),
                    listen(LOADING_EVENT, on_loading),
                ];
                move || drop(listeners)
            },
            (),
        );
    }

    let on_save = {
        let store = store.clone();
        let settings = settings.clone();
        let modal_open = modal_open.clone();
        let show_alert = show_alert.clone();
        Callback::from(move |next: Settings| {
            let mut store = store.borrow_mut();
            if let Err(err) = store.replace(next) {
                show_alert.emit((format!("Settings not saved: {err}"), AlertLevel::Danger));
                return;
            }
            store.save().apply(&mut DocumentSurface);
            settings.set(store.settings().clone());
            modal_open.set(false);
            if let Some(err) = store.last_save_error() {
                log_storage_error(err);
                show_alert.emit((
                    "Settings applied but could not be stored in this browser.".to_string(),
                    AlertLevel::Warning,
                ));
            } else {
                show_alert.emit(("Settings saved successfully!".to_string(), AlertLevel::Success));
            }
        })
    };

    let on_reset = {
        let store = store.clone();
        let settings = settings.clone();
        let show_alert = show_alert.clone();
        Callback::from(move |()| {
            let mut store = store.borrow_mut();
            store.reset().apply(&mut DocumentSurface);
            settings.set(store.settings().clone());
            show_alert.emit(("Settings restored to defaults.".to_string(), AlertLevel::Info));
        })
    };

    let open_settings = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| modal_open.set(true))
    };
    let close_settings = {
        let modal_open = modal_open.clone();
        Callback::from(move |()| modal_open.set(false))
    };

    let ctx = AppCtx {
        alerts: show_alert,
        session,
    };

    html! {
        <ContextProvider<AppCtx> context={ctx}>
            <div class="app-shell">
                <nav class="navbar navbar-expand-lg">
                    <div class="container">
                        <span class="navbar-brand">{"Creative Text Generator"}</span>
                        <button
                            type="button"
                            class="btn btn-outline-secondary"
                            onclick={open_settings}
                        >
                            {"Settings"}
                        </button>
                    </div>
                </nav>
                <main class="container">
                    <SessionPanel />
                </main>
                <SettingsModal
                    open={*modal_open}
                    settings={(*settings).clone()}
                    on_save={on_save}
                    on_reset={on_reset}
                    on_close={close_settings}
                />
                <AlertHost alert={(*alert).clone()} on_dismiss={on_alert_dismiss} />
                <LoadingOverlay state={loading.0.clone()} />
            </div>
        </ContextProvider<AppCtx>>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<CreativeTextApp>::with_root(root).render();
    } else {
        yew::Renderer::<CreativeTextApp>::new().render();
    }
}
