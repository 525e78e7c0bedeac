use yew::prelude::*;

use crate::i18n::{t, Locale};
use crate::nav::Page;

#[derive(Properties, PartialEq)]
pub struct ThankYouProps {
    pub locale: Locale,
    pub on_navigate: Callback<Page>,
}

#[function_component(ThankYou)]
pub fn thank_you(props: &ThankYouProps) -> Html {
    let locale = props.locale;
    let go_home = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Page::Home);
        })
    };

    html! {
        <div class="thanks-page">
            <style>
                {r#"
                    .thanks-page {
                        min-height: 60vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        padding: 2rem;
                    }
                    .thanks-page h1 { color: #9fe8c5; }
                    .thanks-page p {
                        color: rgba(255, 255, 255, 0.85);
                        max-width: 460px;
                    }
                    .thanks-page button {
                        margin-top: 1.5rem;
                        padding: 0.8rem 2rem;
                        border: none;
                        border-radius: 8px;
                        background: linear-gradient(45deg, #1e90ff, #66ccff);
                        color: #04101c;
                        font-weight: bold;
                        cursor: pointer;
                    }
                "#}
            </style>
            <h1>{ t(locale, "thanks.title") }</h1>
            <p>{ t(locale, "thanks.body") }</p>
            <button onclick={go_home}>{ t(locale, "thanks.back") }</button>
        </div>
    }
}
