//! Alert container host: renders the alert stack and closes alerts on a timer.

use crate::core::alerts::{AlertKind, AlertStack};
use gloo::timers::callback::Timeout;
use std::collections::HashMap;
use yew::prelude::*;

pub(crate) enum AlertMsg {
    Show(AlertKind, String),
    Dismiss(u64),
}

#[derive(Properties, PartialEq)]
pub(crate) struct AlertHostProps {
    pub(crate) dismiss_ms: u32,
    pub(crate) close_label: AttrValue,
}

pub(crate) struct AlertHost {
    stack: AlertStack,
    timers: HashMap<u64, Timeout>,
}

impl Component for AlertHost {
    type Message = AlertMsg;
    type Properties = AlertHostProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            stack: AlertStack::default(),
            timers: HashMap::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AlertMsg::Show(kind, message) => {
                let id = self.stack.push(kind, message);
                let link = ctx.link().clone();
                let timer = Timeout::new(ctx.props().dismiss_ms, move || {
                    link.send_message(AlertMsg::Dismiss(id));
                });
                self.timers.insert(id, timer);
                true
            }
            AlertMsg::Dismiss(id) => {
                self.timers.remove(&id);
                self.stack.dismiss(id)
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let close_label = ctx.props().close_label.clone();
        html! {
            {for self.stack.alerts().iter().map(|alert| {
                let id = alert.id;
                let on_close = ctx.link().callback(move |_| AlertMsg::Dismiss(id));
                html! {
                    <div
                        key={id}
                        class={classes!("alert", alert.kind.class(), "alert-dismissible", "fade", "show")}
                        role="alert"
                    >
                        <i class={classes!("fas", format!("fa-{}", alert.kind.icon()), "me-2")}></i>
                        {alert.message.clone()}
                        <button
                            type="button"
                            class="btn-close"
                            aria-label={close_label.clone()}
                            onclick={on_close}
                        ></button>
                    </div>
                }
            })}
        }
    }
}
