use yew::prelude::*;

use crate::components::suggestion_form::SuggestionForm;
use crate::i18n::Locale;

#[derive(Properties, PartialEq)]
pub struct InfoProps {
    pub locale: Locale,
    /// Fired once the simulated send completes.
    pub on_suggested: Callback<()>,
}

#[function_component(Info)]
pub fn info(props: &InfoProps) -> Html {
    html! {
        <div class="info-page">
            <style>
                {r#"
                    .info-page {
                        max-width: 860px;
                        margin: 0 auto;
                        padding: 5rem 2rem;
                    }
                    .info-page h1 { color: #bfe6ff; }
                    .info-page .expedition {
                        border-bottom: 1px solid rgba(102, 204, 255, 0.15);
                        padding: 1.5rem 0;
                    }
                    .info-page .expedition h3 { margin-bottom: 0.4rem; }
                    .info-page .expedition .meta {
                        color: #66ccff;
                        font-size: 0.85rem;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                    }
                    .info-page .expedition p {
                        color: rgba(255, 255, 255, 0.8);
                        line-height: 1.6;
                    }
                    .info-page .suggest-section {
                        margin-top: 4rem;
                    }
                "#}
            </style>
            <h1>{"Expedition log"}</h1>

            <div class="expedition">
                <h3>{"The Midnight Zone"}</h3>
                <span class="meta">{"Atacama Trench · 28 days · ROV + lander"}</span>
                <p>{"Below a thousand metres the water stops being a place and becomes a
                     schedule: things arrive, glow, and leave. We set the lander on a ledge
                     and let the trench decide the shot list."}</p>
            </div>
            <div class="expedition">
                <h3>{"Kelp Cathedral"}</h3>
                <span class="meta">{"Tasmania · 12 days · breath-hold only"}</span>
                <p>{"No tanks on this one. The kelp moves like weather, and scuba bubbles
                     scatter everything that lives in it. Four minutes down per take,
                     forty minutes of shivering per minute of footage."}</p>
            </div>
            <div class="expedition">
                <h3>{"Wreck of the Serra"}</h3>
                <span class="meta">{"Azores · 9 days · twin-set trimix"}</span>
                <p>{"The Serra went down in 1911 with a hold full of roof tiles. The tiles
                     are still stacked. The octopus who owns them now is not selling."}</p>
            </div>

            <section class="suggest-section">
                <SuggestionForm locale={props.locale} on_submitted={props.on_suggested.clone()} />
            </section>
        </div>
    }
}
