use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::FORM_SUBMIT_DELAY_MS;
use crate::i18n::{t, Locale};

/// Field-name → error-message-key mapping; empty means the form is good.
pub fn validate(title: &str, email: &str) -> HashMap<&'static str, &'static str> {
    let mut errors = HashMap::new();
    if title.trim().is_empty() {
        errors.insert("title", "form.error.required");
    }
    if !email.is_empty() && !email_looks_valid(email) {
        errors.insert("email", "form.error.invalid_email");
    }
    errors
}

/// Loose `local@domain.tld` shape check. Deliverability is not our
/// problem; this only catches obvious typos.
fn email_looks_valid(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && !name.ends_with('.') && !tld.is_empty(),
        None => false,
    }
}

#[derive(Properties, PartialEq)]
pub struct SuggestionFormProps {
    pub locale: Locale,
    pub on_submitted: Callback<()>,
}

#[function_component(SuggestionForm)]
pub fn suggestion_form(props: &SuggestionFormProps) -> Html {
    let locale = props.locale;
    let title = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let errors = use_state(HashMap::<&'static str, &'static str>::new);
    let sending = use_state(|| false);
    // The handle keeps the simulated send alive; unmounting drops it.
    let pending = use_mut_ref(|| None::<Timeout>);

    let on_title = {
        let title = title.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            title.set(input.value());
            if errors.contains_key("title") {
                let mut cleared = (*errors).clone();
                cleared.remove("title");
                errors.set(cleared);
            }
        })
    };

    let on_email = {
        let email = email.clone();
        let errors = errors.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            if errors.contains_key("email") {
                let mut cleared = (*errors).clone();
                cleared.remove("email");
                errors.set(cleared);
            }
        })
    };

    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let on_submit = {
        let title = title.clone();
        let email = email.clone();
        let errors = errors.clone();
        let sending = sending.clone();
        let pending = pending.clone();
        let on_submitted = props.on_submitted.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if *sending {
                return;
            }
            let found = validate(&title, &email);
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            errors.set(HashMap::new());
            sending.set(true);
            gloo_console::log!("suggestion queued");
            let on_submitted = on_submitted.clone();
            let timeout = Timeout::new(FORM_SUBMIT_DELAY_MS, move || {
                on_submitted.emit(());
            });
            *pending.borrow_mut() = Some(timeout);
        })
    };

    let field_error = |field: &str| -> Html {
        match errors.get(field) {
            Some(key) => html! { <span class="field-error">{ t(locale, key) }</span> },
            None => html! {},
        }
    };

    html! {
        <div class="suggestion-form">
            <style>
                {r#"
                    .suggestion-form {
                        background: rgba(8, 28, 44, 0.8);
                        border: 1px solid rgba(102, 204, 255, 0.15);
                        border-radius: 16px;
                        padding: 2rem;
                        max-width: 540px;
                        margin: 0 auto;
                    }
                    .suggestion-form h2 {
                        margin-top: 0;
                        color: #bfe6ff;
                    }
                    .suggestion-form label {
                        display: block;
                        margin: 1rem 0 0.3rem;
                        color: rgba(255, 255, 255, 0.8);
                        font-size: 0.9rem;
                    }
                    .suggestion-form input,
                    .suggestion-form textarea {
                        width: 100%;
                        padding: 0.7rem;
                        border-radius: 8px;
                        border: 1px solid rgba(102, 204, 255, 0.3);
                        background: rgba(4, 16, 28, 0.9);
                        color: #eaf6ff;
                    }
                    .field-error {
                        color: #ff8c7a;
                        font-size: 0.85rem;
                    }
                    .suggestion-form button {
                        margin-top: 1.4rem;
                        padding: 0.8rem 1.8rem;
                        border: none;
                        border-radius: 8px;
                        background: linear-gradient(45deg, #1e90ff, #66ccff);
                        color: #04101c;
                        font-weight: bold;
                        cursor: pointer;
                    }
                    .suggestion-form button:disabled {
                        opacity: 0.6;
                        cursor: wait;
                    }
                "#}
            </style>
            <h2>{ t(locale, "form.heading") }</h2>
            <label>{ t(locale, "form.title_label") }</label>
            <input type="text" value={(*title).clone()} oninput={on_title} />
            { field_error("title") }
            <label>{ t(locale, "form.email_label") }</label>
            <input type="email" value={(*email).clone()} oninput={on_email} />
            { field_error("email") }
            <label>{ t(locale, "form.message_label") }</label>
            <textarea rows="4" value={(*message).clone()} oninput={on_message} />
            <button onclick={on_submit} disabled={*sending}>
                { if *sending { t(locale, "form.sending") } else { t(locale, "form.submit") } }
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_title_is_the_only_error_on_a_blank_form() {
        let errors = validate("", "");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("title"), Some(&"form.error.required"));
    }

    #[test]
    fn whitespace_title_still_counts_as_missing() {
        let errors = validate("   ", "");
        assert!(errors.contains_key("title"));
    }

    #[test]
    fn bad_email_is_flagged_once_a_title_exists() {
        let errors = validate("x", "bad");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some(&"form.error.invalid_email"));
    }

    #[test]
    fn simple_valid_email_passes() {
        assert!(validate("x", "a@b.co").is_empty());
    }

    #[test]
    fn email_shape_edge_cases() {
        assert!(!email_looks_valid("a@b"));
        assert!(!email_looks_valid("@b.co"));
        assert!(!email_looks_valid("a@.co"));
        assert!(!email_looks_valid("a@b.co "));
        assert!(!email_looks_valid("a@b@c.co"));
        assert!(email_looks_valid("dive.fan+tag@reef.example.org"));
    }
}
