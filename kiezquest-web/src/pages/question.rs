use yew::prelude::*;

use crate::i18n;
use kiezquest_core::{Feedback, Station};

#[derive(Properties, Clone, PartialEq)]
pub struct QuestionPageProps {
    pub station: Station,
    /// The option currently picked, owned by the flow controller.
    #[prop_or_default]
    pub selected: Option<AttrValue>,
    #[prop_or_default]
    pub feedback: Option<Feedback>,
    pub on_select: Callback<String>,
    pub on_submit: Callback<()>,
    pub on_back: Callback<()>,
}

fn option_class(selected: Option<&str>, option: &str) -> &'static str {
    if selected == Some(option) {
        "option-btn is-selected"
    } else {
        "option-btn"
    }
}

#[function_component(QuestionPage)]
pub fn question_page(props: &QuestionPageProps) -> Html {
    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_| on_submit.emit(()))
    };
    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_| on_back.emit(()))
    };
    let selected = props.selected.as_deref();

    html! {
        <section class="panel question" data-testid="question-screen">
            <h2>{ &props.station.title }</h2>
            <p class="riddle">{ &props.station.riddle }</p>
            { props.feedback.map_or_else(Html::default, |feedback| html! {
                <p class="error" role="alert">{ i18n::t(feedback.key()) }</p>
            }) }
            <fieldset class="options" data-testid="answer-options">
                <legend class="sr-only">{ i18n::t("question.answer_label") }</legend>
                { for props.station.options.iter().map(|option| {
                    let value = option.clone();
                    let on_select = props.on_select.clone();
                    html! {
                        <button
                            class={option_class(selected, option)}
                            aria-pressed={(selected == Some(option.as_str())).to_string()}
                            onclick={Callback::from(move |_| on_select.emit(value.clone()))}
                        >
                            { option }
                        </button>
                    }
                }) }
            </fieldset>
            <div class="controls">
                <button class="btn-primary" disabled={selected.is_none()} onclick={on_submit}>
                    { i18n::t("question.submit") }
                </button>
                <button class="btn-secondary" onclick={on_back}>
                    { i18n::t("question.back") }
                </button>
            </div>
        </section>
    }
}
