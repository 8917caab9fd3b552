use yew::prelude::*;

use crate::i18n;

#[derive(Properties, Clone, PartialEq)]
pub struct CompletedPageProps {
    pub on_download: Callback<()>,
}

#[function_component(CompletedPage)]
pub fn completed_page(props: &CompletedPageProps) -> Html {
    let on_click = {
        let on_download = props.on_download.clone();
        Callback::from(move |_| on_download.emit(()))
    };

    html! {
        <section class="panel completed" data-testid="completed-screen">
            <h2>{ i18n::t("done.title") }</h2>
            <p class="muted">{ i18n::t("done.body") }</p>
            <div class="controls">
                <button class="btn-primary" onclick={on_click}>
                    { i18n::t("done.download") }
                </button>
            </div>
        </section>
    }
}
