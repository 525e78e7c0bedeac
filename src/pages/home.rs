use yew::prelude::*;

use crate::config::{INSTAGRAM_URL, X_URL, YOUTUBE_URL};
use crate::i18n::{t, Locale};
use crate::nav::Page;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub locale: Locale,
    pub on_navigate: Callback<Page>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let locale = props.locale;
    let go_info = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Page::Info);
        })
    };

    html! {
        <div class="home-page">
            <style>
                {r#"
                    .home-page .hero {
                        min-height: 80vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        text-align: center;
                        padding: 4rem 2rem;
                        background: radial-gradient(ellipse at bottom, #06263f 0%, #020c16 70%);
                    }
                    .home-page .hero h1 {
                        font-size: 3rem;
                        background: linear-gradient(45deg, #fff, #66ccff);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .home-page .hero-subtitle {
                        color: rgba(255, 255, 255, 0.8);
                        font-size: 1.2rem;
                        max-width: 540px;
                    }
                    .home-page .hero-cta {
                        margin-top: 2rem;
                        padding: 1rem 2.4rem;
                        border: none;
                        border-radius: 10px;
                        background: linear-gradient(45deg, #1e90ff, #66ccff);
                        color: #04101c;
                        font-size: 1.05rem;
                        font-weight: bold;
                        cursor: pointer;
                    }
                    .home-page .featured {
                        padding: 4rem 2rem;
                        text-align: center;
                    }
                    .home-page .featured-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 1.5rem;
                        max-width: 960px;
                        margin: 2rem auto 0;
                    }
                    .home-page .featured-item {
                        background: rgba(8, 28, 44, 0.8);
                        border: 1px solid rgba(102, 204, 255, 0.15);
                        border-radius: 12px;
                        padding: 1.6rem;
                    }
                    .home-page .featured-item h3 { color: #bfe6ff; }
                    .home-page .follow {
                        padding: 3rem 2rem 4rem;
                        text-align: center;
                    }
                    .home-page .follow a {
                        color: #66ccff;
                        margin: 0 0.8rem;
                    }
                "#}
            </style>

            // Hero Section
            <section class="hero">
                <h1>{ t(locale, "hero.title") }</h1>
                <p class="hero-subtitle">{ t(locale, "hero.subtitle") }</p>
                <button class="hero-cta" onclick={go_info}>
                    { t(locale, "hero.cta") }
                </button>
            </section>

            // Featured expeditions
            <section class="featured">
                <h2>{"Recent dives"}</h2>
                <div class="featured-grid">
                    <div class="featured-item">
                        <h3>{"The Midnight Zone"}</h3>
                        <p>{"Four weeks over the Atacama Trench filming bioluminescence a kilometre down. The lights down there don't blink for anyone."}</p>
                    </div>
                    <div class="featured-item">
                        <h3>{"Kelp Cathedral"}</h3>
                        <p>{"Free-diving the giant kelp forests off Tasmania before the warm water takes them. Some cathedrals grow back. We hope."}</p>
                    </div>
                    <div class="featured-item">
                        <h3>{"Wreck of the Serra"}</h3>
                        <p>{"A cargo steamer lost in 1911, now a reef with a postal address. Every porthole has a tenant."}</p>
                    </div>
                </div>
            </section>

            // Social links
            <section class="follow">
                <h2>{ t(locale, "footer.follow") }</h2>
                <p>
                    <a href={YOUTUBE_URL} target="_blank" rel="noopener noreferrer">{"YouTube"}</a>
                    <a href={INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                    <a href={X_URL} target="_blank" rel="noopener noreferrer">{"X"}</a>
                </p>
            </section>
        </div>
    }
}
