use gloo_timers::callback::Timeout;
use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

mod config;
mod gate;
mod i18n;
mod nav;
mod storage;
mod components {
    pub mod lock_screen;
    pub mod suggestion_form;
}
mod pages {
    pub mod about;
    pub mod home;
    pub mod info;
    pub mod secret_garden;
    pub mod thank_you;
    pub mod tribute;
}

use components::lock_screen::LockScreen;
use config::PAGE_TRANSITION_MS;
use gate::AccessGate;
use i18n::{t, Locale};
use nav::{NavState, Page};
use pages::{
    about::About, home::Home, info::Info, secret_garden::SecretGarden, thank_you::ThankYou,
    tribute::Tribute,
};
use storage::{BrowserStorage, MemoryStorage};

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub locale: Locale,
    pub current: Page,
    pub on_navigate: Callback<Page>,
    pub on_toggle_locale: Callback<()>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let locale = props.locale;
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 80);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let link = |target: Page, key: &'static str| -> Html {
        let on_navigate = props.on_navigate.clone();
        let menu_open = menu_open.clone();
        let class = classes!("nav-link", (props.current == target).then(|| "active"));
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            on_navigate.emit(target);
        });
        html! {
            <a href="#" {class} {onclick}>{ t(locale, key) }</a>
        }
    };

    let toggle_locale = {
        let on_toggle_locale = props.on_toggle_locale.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_locale.emit(());
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo" onclick={{
                    let on_navigate = props.on_navigate.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        on_navigate.emit(Page::Home);
                    })
                }}>
                    {"deep currents"}
                </a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { link(Page::Home, "nav.home") }
                    { link(Page::About, "nav.about") }
                    { link(Page::Info, "nav.info") }
                    { link(Page::Tribute, "nav.tribute") }
                    { link(Page::SecretGarden, "nav.secret") }
                    <button class="locale-toggle" onclick={toggle_locale}>
                        { locale.toggle_label() }
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let gate = use_mut_ref(|| AccessGate::new(BrowserStorage, MemoryStorage::default()));
    let gate_state = use_state({
        let gate = gate.clone();
        move || gate.borrow().initialize(now_ms())
    });
    let locale = use_state(|| i18n::load_preferred(&BrowserStorage));
    let nav_state = use_state(NavState::default);
    // Slot for the in-flight page transition. Writing a new Timeout here
    // drops the old one, which cancels it: the latest target wins.
    let pending_nav = use_mut_ref(|| None::<Timeout>);

    {
        let current = *locale;
        use_effect_with_deps(
            move |l: &Locale| {
                i18n::apply_to_document(*l);
                || ()
            },
            current,
        );
    }

    let navigate = {
        let nav_state = nav_state.clone();
        let pending_nav = pending_nav.clone();
        Callback::from(move |target: Page| {
            if let Some(fading) = nav_state.depart(target) {
                nav_state.set(fading);
                let setter = nav_state.setter();
                let timeout = Timeout::new(PAGE_TRANSITION_MS, move || {
                    setter.set(NavState::arrive(target));
                });
                *pending_nav.borrow_mut() = Some(timeout);
            }
        })
    };

    let toggle_locale = {
        let locale = locale.clone();
        Callback::from(move |_| {
            let next = locale.other();
            i18n::store_preferred(&BrowserStorage, next);
            locale.set(next);
        })
    };

    let on_code = {
        let gate = gate.clone();
        let gate_state = gate_state.clone();
        Callback::from(move |code: String| {
            let (granted, next) = gate.borrow().submit(&code, &gate_state, now_ms());
            if granted {
                info!("secret gate unlocked for this session");
            }
            gate_state.set(next);
        })
    };

    let on_gate_tick = {
        let gate = gate.clone();
        let gate_state = gate_state.clone();
        Callback::from(move |_| {
            let next = gate.borrow().tick(&gate_state, now_ms());
            if next != *gate_state {
                info!("secret gate lockout expired");
                gate_state.set(next);
            }
        })
    };

    let on_suggested = {
        let navigate = navigate.clone();
        Callback::from(move |_| navigate.emit(Page::ThankYou))
    };

    let page = match nav_state.current {
        Page::Home => html! { <Home locale={*locale} on_navigate={navigate.clone()} /> },
        Page::About => html! { <About /> },
        Page::Info => html! { <Info locale={*locale} on_suggested={on_suggested} /> },
        Page::Tribute => html! { <Tribute /> },
        // Whether "secret" means the lock screen or the garden is decided
        // here, not in the navigation controller.
        Page::SecretGarden => {
            if gate_state.unlocked {
                html! { <SecretGarden /> }
            } else {
                html! {
                    <LockScreen
                        locale={*locale}
                        state={(*gate_state).clone()}
                        on_submit={on_code}
                        on_tick={on_gate_tick}
                    />
                }
            }
        }
        Page::ThankYou => html! { <ThankYou locale={*locale} on_navigate={navigate.clone()} /> },
    };

    html! {
        <>
            <style>
                {r#"
                    body {
                        margin: 0;
                        background: #020c16;
                        color: #eaf6ff;
                        font-family: 'Inter', 'Helvetica Neue', Arial, sans-serif;
                    }
                    html[dir="rtl"] body {
                        font-family: 'Noto Naskh Arabic', 'Amiri', serif;
                    }
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 100;
                        transition: background 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(2, 12, 22, 0.95);
                        box-shadow: 0 2px 12px rgba(0, 0, 0, 0.4);
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1rem 2rem;
                    }
                    .nav-logo {
                        color: #66ccff;
                        font-weight: bold;
                        letter-spacing: 0.1em;
                        text-decoration: none;
                    }
                    .nav-right { display: flex; align-items: center; gap: 1.2rem; }
                    .nav-link {
                        color: rgba(255, 255, 255, 0.8);
                        text-decoration: none;
                    }
                    .nav-link.active { color: #66ccff; }
                    .locale-toggle {
                        background: none;
                        border: 1px solid rgba(102, 204, 255, 0.4);
                        border-radius: 6px;
                        color: #66ccff;
                        padding: 0.3rem 0.8rem;
                        cursor: pointer;
                    }
                    .burger-menu { display: none; }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: block;
                            background: none;
                            border: none;
                            cursor: pointer;
                        }
                        .burger-menu span {
                            display: block;
                            width: 22px;
                            height: 2px;
                            margin: 5px 0;
                            background: #66ccff;
                        }
                        .nav-right { display: none; }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            inset-inline-end: 0;
                            background: rgba(2, 12, 22, 0.98);
                            padding: 1.5rem 2rem;
                        }
                    }
                    main.page {
                        padding-top: 3.5rem;
                        opacity: 1;
                        transition: opacity 350ms ease;
                    }
                    main.page.page-exit { opacity: 0; }
                "#}
            </style>
            <NavBar
                locale={*locale}
                current={nav_state.current}
                on_navigate={navigate}
                on_toggle_locale={toggle_locale}
            />
            <main class={classes!("page", nav_state.transitioning.then(|| "page-exit"))}>
                { page }
            </main>
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
