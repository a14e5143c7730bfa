//! Page bootstrap and the document-level loan dispatcher.
//!
//! # Design
//! - One delegated click listener routes every loan and cancel control.
//! - Page state lives in a single `Rc<RefCell<_>>`; borrows never span an await.
//! - Alerts and achievements go to mounted Yew hosts through their scopes.

mod environment;

use crate::components::achievements::{AchievementHost, AchievementHostProps, AchievementMsg};
use crate::components::alerts::{AlertHost, AlertHostProps, AlertMsg};
use crate::core::alerts::AlertKind;
use crate::core::config::{Timings, UiConfig};
use crate::core::controller::{LoanController, LoanEffect};
use crate::core::error::UiResult;
use crate::core::loan::{BOOK_ID_ATTR, CANCEL_BUTTON_SELECTOR, LOAN_BUTTON_SELECTOR};
use crate::core::page::dashboard_should_reload;
use crate::dom::buttons::{self, ButtonRegistry};
use crate::dom::{self, badge, by_id, closest, counters, enhancements, missing, query_all, ratings};
use crate::i18n::TranslationBundle;
use crate::services::api::ApiClient;
use anyhow::anyhow;
use gloo::console;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use gloo::utils::{body, document};
use readingtrail_api_models::BookId;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlElement};
use yew::html::Scope;

const ALERT_CONTAINER_ID: &str = "alert-container";
const DASHBOARD_CARD_SELECTOR: &str = ".col-lg-6, .col-xl-4";
const RETURN_BUTTON_SELECTOR: &str = ".return-btn";

struct Page {
    controller: LoanController,
    buttons: ButtonRegistry,
    bundle: TranslationBundle,
    timings: Timings,
    client: Rc<ApiClient>,
    alerts: Option<Scope<AlertHost>>,
    achievements: Scope<AchievementHost>,
}

impl Page {
    fn render_button(&self, book_id: &BookId) {
        if let (Some(model), Some(elements)) =
            (self.controller.button(book_id), self.buttons.get(book_id))
        {
            buttons::render(elements, model, &self.bundle);
        }
    }
}

type PageHandle = Rc<RefCell<Page>>;

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let document = document();
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| boot_logged()).forget();
    } else {
        boot_logged();
    }
}

fn boot_logged() {
    if let Err(err) = boot() {
        console::error!("ReadingTrail failed to start", err.to_string());
    }
}

fn boot() -> anyhow::Result<()> {
    let config = environment::load_config();
    let page_kind = config.page_kind(&environment::pathname());
    let bundle = TranslationBundle::new(config.locale);
    let client = Rc::new(ApiClient::new(config.base_url.clone()));

    enhancements::inject_styles();

    let (models, registry) = buttons::hydrate();
    let mut controller = LoanController::new(page_kind);
    for model in models {
        controller.register(model);
    }

    let alerts = mount_alert_host(&config, &bundle);
    let achievements = mount_achievement_host(&config, &bundle)?;

    console::log!(format!("ReadingTrail page: {:?}", controller.page()));
    let page = Rc::new(RefCell::new(Page {
        controller,
        buttons: registry,
        bundle,
        timings: config.timings,
        client: Rc::clone(&client),
        alerts,
        achievements,
    }));

    counters::adjust_borrowed(0, config.timings.counter_pulse_ms);
    refresh_notifications(&client);
    ratings::load_all(&client);
    bind_dispatcher(&page);
    enhancements::bind_shortcuts();
    enhancements::bind_search_busy();
    enhancements::lazy_load_images();

    Ok(())
}

fn mount_alert_host(config: &UiConfig, bundle: &TranslationBundle) -> Option<Scope<AlertHost>> {
    let Some(root) = by_id(ALERT_CONTAINER_ID) else {
        console::debug!("no alert container on this page; alerts are dropped");
        return None;
    };
    let props = AlertHostProps {
        dismiss_ms: config.timings.alert_dismiss_ms,
        close_label: bundle.text("alert.close", "Close").into(),
    };
    let handle = yew::Renderer::<AlertHost>::with_root_and_props(root.into(), props).render();
    Some((*handle).clone())
}

fn mount_achievement_host(
    config: &UiConfig,
    bundle: &TranslationBundle,
) -> anyhow::Result<Scope<AchievementHost>> {
    let root = document()
        .create_element("div")
        .map_err(|err| anyhow!("create achievement host: {err:?}"))?;
    root.set_id("readingtrail-achievements");
    body()
        .append_child(&root)
        .map_err(|err| anyhow!("attach achievement host: {err:?}"))?;
    let props = AchievementHostProps {
        stagger_ms: config.timings.achievement_stagger_ms,
        bundle: bundle.clone(),
    };
    let handle = yew::Renderer::<AchievementHost>::with_root_and_props(root, props).render();
    Ok((*handle).clone())
}

fn refresh_notifications(client: &Rc<ApiClient>) {
    let client = Rc::clone(client);
    spawn_local(async move {
        match client.unread_notifications().await {
            Ok(count) => counters::show_notifications(count),
            Err(err) => console::error!("Error updating notification count", err.to_string()),
        }
    });
}

fn bind_dispatcher(page: &PageHandle) {
    let page = Rc::clone(page);
    EventListener::new(&document(), "click", move |event| {
        let Some(target) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
        else {
            return;
        };
        if let Some(button) = closest(&target, LOAN_BUTTON_SELECTOR) {
            event.prevent_default();
            on_loan_click(&page, button);
        } else if let Some(button) = closest(&target, CANCEL_BUTTON_SELECTOR) {
            event.prevent_default();
            on_cancel_click(&page, button);
        }
    })
    .forget();
}

fn on_loan_click(page: &PageHandle, button: Element) {
    let Some(book_id) = button.get_attribute(BOOK_ID_ATTR).map(BookId::new) else {
        return;
    };
    let proposed_due_date = buttons::proposed_due_date(&button);
    let (ticket, client) = {
        let mut guard = page.borrow_mut();
        let Some(ticket) = guard.controller.press(&book_id, proposed_due_date) else {
            return;
        };
        guard.render_button(&book_id);
        (ticket, Rc::clone(&guard.client))
    };

    let page = Rc::clone(page);
    spawn_local(async move {
        let action = ticket.action();
        let outcome = client
            .submit_loan(&action.path(&book_id), &action.request())
            .await;
        if let Err(err) = &outcome {
            console::error!("Error:", err.to_string());
        }
        let effects = {
            let mut guard = page.borrow_mut();
            let state = &mut *guard;
            let effects = state.controller.settle(ticket, outcome, &state.bundle);
            state.render_button(&book_id);
            effects
        };
        apply_effects(&page, &button, &book_id, effects);
    });
}

fn on_cancel_click(page: &PageHandle, button: Element) {
    let Some(book_id) = button.get_attribute(BOOK_ID_ATTR).map(BookId::new) else {
        return;
    };
    let (client, bundle) = {
        let state = page.borrow();
        (Rc::clone(&state.client), state.bundle.clone())
    };
    if !gloo::dialogs::confirm(&bundle.text("cancel.confirm", "")) {
        return;
    }

    let page = Rc::clone(page);
    spawn_local(async move {
        let outcome = client.cancel_borrow_request(&book_id).await;
        if let Err(err) = &outcome {
            console::error!("Error:", err.to_string());
        }
        let effects = LoanController::cancel_effects(outcome, &bundle);
        apply_effects(&page, &button, &book_id, effects);
    });
}

fn apply_effects(page: &PageHandle, button: &Element, book_id: &BookId, effects: Vec<LoanEffect>) {
    let (timings, bundle, alerts, achievements) = {
        let state = page.borrow();
        (
            state.timings,
            state.bundle.clone(),
            state.alerts.clone(),
            state.achievements.clone(),
        )
    };
    for effect in effects {
        match effect {
            LoanEffect::Alert { kind, message } => show_alert(alerts.as_ref(), kind, message),
            LoanEffect::Achievements(records) => {
                achievements.send_message(AchievementMsg::Batch(records));
            }
            LoanEffect::AdjustBorrowed(delta) => {
                counters::adjust_borrowed(delta, timings.counter_pulse_ms);
            }
            LoanEffect::Badge(change) => {
                if let Err(err) = badge::apply(button, change, &bundle) {
                    console::debug!("cover badge skipped", err.to_string());
                }
            }
            LoanEffect::RemoveCard => {
                {
                    let mut state = page.borrow_mut();
                    state.controller.forget(book_id);
                    state.buttons.remove(book_id);
                }
                if let Err(err) = remove_card(button, timings) {
                    console::debug!("dashboard card not removed", err.to_string());
                }
            }
            LoanEffect::ReloadPage => dom::reload_after(timings.cancel_reload_ms),
        }
    }
}

fn show_alert(alerts: Option<&Scope<AlertHost>>, kind: AlertKind, message: String) {
    match alerts {
        Some(scope) => scope.send_message(AlertMsg::Show(kind, message)),
        None => console::debug!(format!("alert dropped ({}): {message}", kind.as_str())),
    }
}

fn remove_card(button: &Element, timings: Timings) -> UiResult<()> {
    let card =
        closest(button, DASHBOARD_CARD_SELECTOR).ok_or_else(|| missing(DASHBOARD_CARD_SELECTOR))?;
    if let Some(card) = card.dyn_ref::<HtmlElement>() {
        let _ = card.style().set_property(
            "animation",
            &format!("fadeOut {}ms ease-out", timings.card_fade_ms),
        );
    }
    Timeout::new(timings.card_fade_ms, move || {
        card.remove();
        let remaining = query_all(RETURN_BUTTON_SELECTOR).len();
        if dashboard_should_reload(remaining) {
            dom::reload_after(timings.dashboard_reload_ms);
        }
    })
    .forget();
    Ok(())
}
