//! Achievement modal host: presents staggered modals that remove themselves on close.

use crate::core::achievements::{points_label, stagger_schedule};
use crate::i18n::TranslationBundle;
use gloo::timers::callback::Timeout;
use readingtrail_api_models::AchievementRecord;
use yew::prelude::*;

pub(crate) enum AchievementMsg {
    Batch(Vec<AchievementRecord>),
    Open(u64, AchievementRecord),
    Close(u64),
}

#[derive(Properties, PartialEq)]
pub(crate) struct AchievementHostProps {
    pub(crate) stagger_ms: u32,
    pub(crate) bundle: TranslationBundle,
}

pub(crate) struct AchievementHost {
    open: Vec<(u64, AchievementRecord)>,
    next_id: u64,
}

impl Component for AchievementHost {
    type Message = AchievementMsg;
    type Properties = AchievementHostProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            open: Vec::new(),
            next_id: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AchievementMsg::Batch(records) => {
                for scheduled in stagger_schedule(records, ctx.props().stagger_ms) {
                    self.next_id += 1;
                    let id = self.next_id;
                    let link = ctx.link().clone();
                    let record = scheduled.record;
                    Timeout::new(scheduled.delay_ms, move || {
                        link.send_message(AchievementMsg::Open(id, record));
                    })
                    .forget();
                }
                false
            }
            AchievementMsg::Open(id, record) => {
                self.open.push((id, record));
                true
            }
            AchievementMsg::Close(id) => {
                let before = self.open.len();
                self.open.retain(|(open_id, _)| *open_id != id);
                before != self.open.len()
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let bundle = &ctx.props().bundle;
        let title = bundle.text("achievement.title", "");
        let dismiss = bundle.text("achievement.dismiss", "");
        let unit = bundle.text("achievement.points", "");
        html! {
            <>
                {for self.open.iter().map(|(id, record)| {
                    let id = *id;
                    let on_close = ctx.link().callback(move |_| AchievementMsg::Close(id));
                    html! {
                        <div key={id} class="modal fade show d-block achievement-modal" tabindex="-1" role="dialog" aria-modal="true">
                            <div class="modal-dialog modal-dialog-centered">
                                <div class="modal-content">
                                    <div class="modal-body text-center p-4">
                                        <div class="achievement-icon-large mb-3">
                                            <i class={classes!("fas", record.icon.clone())}></i>
                                        </div>
                                        <h3 class="achievement-title mb-2">{title.clone()}</h3>
                                        <h4 class="achievement-name mb-3">{record.name.clone()}</h4>
                                        <p class="achievement-description mb-3">{record.description.clone()}</p>
                                        <div class="achievement-points">
                                            <i class="fas fa-star"></i>
                                            {points_label(record.points, &unit)}
                                        </div>
                                        <button type="button" class="btn btn-primary mt-3" onclick={on_close}>
                                            <i class="fas fa-trophy me-2"></i>{dismiss.clone()}
                                        </button>
                                    </div>
                                </div>
                            </div>
                        </div>
                    }
                })}
                if !self.open.is_empty() {
                    <div class="modal-backdrop fade show"></div>
                }
            </>
        }
    }
}
