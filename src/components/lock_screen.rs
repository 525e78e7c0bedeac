use gloo_timers::callback::Interval;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::gate::{remaining_lock_minutes, GateState};
use crate::i18n::{t, Locale};

#[derive(Properties, PartialEq)]
pub struct LockScreenProps {
    pub locale: Locale,
    pub state: GateState,
    /// Fired with the entered code; the app shell judges it.
    pub on_submit: Callback<String>,
    /// Fired once per second while locked so the countdown stays honest.
    pub on_tick: Callback<()>,
}

/// The line under the input: countdown while locked, retry prompt after a
/// miss, nothing on a pristine gate. Pure so the clock dependency is
/// checkable: the same state must read differently as `now` advances.
fn status_message(locale: Locale, state: &GateState, now: i64) -> Option<String> {
    if state.is_locked(now) {
        let minutes = remaining_lock_minutes(state, now);
        Some(format!(
            "{} {} {}",
            t(locale, "gate.locked"),
            minutes,
            t(locale, "gate.minutes"),
        ))
    } else if state.attempts > 0 {
        Some(format!(
            "{} {} {}",
            t(locale, "gate.wrong"),
            state.remaining_attempts(),
            t(locale, "gate.attempts_left"),
        ))
    } else {
        None
    }
}

#[function_component(LockScreen)]
pub fn lock_screen(props: &LockScreenProps) -> Html {
    let locale = props.locale;
    // The component keeps its own clock; the countdown interval bumps it
    // so the remaining-minutes line is recomputed every tick even though
    // the gate state itself only changes on expiry.
    let now = use_state(|| chrono::Utc::now().timestamp_millis());
    let locked = props.state.is_locked(*now);
    let code = use_state(String::new);

    // Countdown poll, only while a lockout is armed. Dropping the handle
    // on deps change or unmount is what stops it.
    {
        let on_tick = props.on_tick.clone();
        let now = now.setter();
        use_effect_with_deps(
            move |locked_until: &Option<i64>| {
                let interval = locked_until.map(|until| {
                    gloo_console::log!("secret gate locked until", until.to_string());
                    Interval::new(1_000, move || {
                        now.set(chrono::Utc::now().timestamp_millis());
                        on_tick.emit(());
                    })
                });
                move || drop(interval)
            },
            props.state.locked_until,
        );
    }

    // A failed attempt bumps the counter; clear the field so the visitor
    // retypes rather than resubmitting the same miss.
    {
        let code = code.clone();
        use_effect_with_deps(
            move |_attempts| {
                code.set(String::new());
                || ()
            },
            props.state.attempts,
        );
    }

    let on_input = {
        let code = code.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            code.set(input.value());
        })
    };

    let on_click = {
        let code = code.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            // Empty codes never reach the gate and never count.
            if code.is_empty() {
                return;
            }
            on_submit.emit((*code).clone());
        })
    };

    let status = match status_message(locale, &props.state, *now) {
        Some(message) => {
            let class = if locked {
                "gate-status locked"
            } else {
                "gate-status wrong"
            };
            html! { <p {class}>{ message }</p> }
        }
        None => html! {},
    };

    html! {
        <div class="lock-screen">
            <style>
                {r#"
                    .lock-screen {
                        min-height: 60vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 2rem;
                    }
                    .lock-panel {
                        background: rgba(8, 28, 44, 0.85);
                        border: 1px solid rgba(102, 204, 255, 0.2);
                        border-radius: 16px;
                        padding: 2.5rem;
                        max-width: 420px;
                        text-align: center;
                    }
                    .lock-panel h1 {
                        color: #bfe6ff;
                        margin-top: 0;
                    }
                    .lock-panel input {
                        width: 100%;
                        padding: 0.8rem;
                        margin: 1rem 0;
                        border-radius: 8px;
                        border: 1px solid rgba(102, 204, 255, 0.3);
                        background: rgba(4, 16, 28, 0.9);
                        color: #eaf6ff;
                        text-align: center;
                        letter-spacing: 0.3em;
                    }
                    .lock-panel button {
                        padding: 0.8rem 2rem;
                        border: none;
                        border-radius: 8px;
                        background: linear-gradient(45deg, #1e90ff, #66ccff);
                        color: #04101c;
                        font-weight: bold;
                        cursor: pointer;
                    }
                    .lock-panel button:disabled {
                        opacity: 0.5;
                        cursor: not-allowed;
                    }
                    .gate-status.wrong { color: #ffcc80; }
                    .gate-status.locked { color: #ff8c7a; }
                "#}
            </style>
            <div class="lock-panel">
                <h1>{ t(locale, "gate.title") }</h1>
                <p>{ t(locale, "gate.prompt") }</p>
                <input
                    type="password"
                    inputmode="numeric"
                    placeholder={t(locale, "gate.placeholder").to_string()}
                    value={(*code).clone()}
                    oninput={on_input}
                    disabled={locked}
                />
                { status }
                <button onclick={on_click} disabled={locked}>
                    { t(locale, "gate.submit") }
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    fn locked_state() -> GateState {
        GateState {
            attempts: 5,
            locked_until: Some(NOW + 900_000),
            unlocked: false,
        }
    }

    #[test]
    fn countdown_line_follows_the_clock_while_state_stays_put() {
        // The gate state never changes during the lockout; only the clock
        // the interval refreshes does, and the message must track it.
        let state = locked_state();
        let at_start = status_message(Locale::En, &state, NOW).unwrap();
        assert!(at_start.contains(" 15 "));

        let later = status_message(Locale::En, &state, NOW + 120_001).unwrap();
        assert!(later.contains(" 13 "));
        assert_ne!(at_start, later);
    }

    #[test]
    fn retry_prompt_counts_the_attempts_left() {
        let state = GateState {
            attempts: 2,
            locked_until: None,
            unlocked: false,
        };
        let message = status_message(Locale::En, &state, NOW).unwrap();
        assert!(message.contains(" 3 "));
    }

    #[test]
    fn pristine_gate_shows_no_status() {
        assert_eq!(status_message(Locale::En, &GateState::default(), NOW), None);
    }
}
