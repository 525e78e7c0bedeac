use crate::config::LANGUAGE_KEY;
use crate::storage::Storage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Locale {
    En,
    Ar,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    pub fn dir(self) -> &'static str {
        match self {
            Locale::En => "ltr",
            Locale::Ar => "rtl",
        }
    }

    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "en" => Some(Locale::En),
            "ar" => Some(Locale::Ar),
            _ => None,
        }
    }

    /// Label for the switcher button: the language you would switch to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Locale::En => "عربي",
            Locale::Ar => "English",
        }
    }

    pub fn other(self) -> Locale {
        match self {
            Locale::En => Locale::Ar,
            Locale::Ar => Locale::En,
        }
    }
}

pub fn load_preferred(store: &impl Storage) -> Locale {
    store
        .get(LANGUAGE_KEY)
        .and_then(|code| Locale::from_code(&code))
        .unwrap_or(Locale::En)
}

pub fn store_preferred(store: &impl Storage, locale: Locale) {
    store.set(LANGUAGE_KEY, locale.code());
}

/// Sets `dir` and `lang` on the document element. The Arabic font stack
/// rides on the `dir` attribute in CSS.
pub fn apply_to_document(locale: Locale) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("dir", locale.dir());
        let _ = root.set_attribute("lang", locale.code());
    }
}

/// Flat key-path lookup. Unknown keys fall back to the key itself, which
/// keeps a missing translation visible instead of blank.
pub fn t(locale: Locale, key: &str) -> &str {
    let text = match locale {
        Locale::En => match key {
            "nav.home" => "Home",
            "nav.about" => "About",
            "nav.info" => "Expeditions",
            "nav.tribute" => "Tribute",
            "nav.secret" => "The Secret Garden",
            "hero.title" => "Stories from the Deep",
            "hero.subtitle" => "Dive films and field notes from the open ocean.",
            "hero.cta" => "Watch the latest expedition",
            "footer.follow" => "Follow the voyage",
            "gate.title" => "The Secret Garden",
            "gate.prompt" => "This cove is for the crew. Enter the passcode from the end credits.",
            "gate.placeholder" => "Passcode",
            "gate.submit" => "Open the gate",
            "gate.wrong" => "That's not it.",
            "gate.attempts_left" => "attempts left before the tide locks you out",
            "gate.locked" => "Too many attempts. The gate reopens in",
            "gate.minutes" => "minute(s)",
            "form.heading" => "Suggest a dive",
            "form.title_label" => "Where should we go?",
            "form.email_label" => "Email (optional, if you want a reply)",
            "form.message_label" => "Tell us more",
            "form.submit" => "Send suggestion",
            "form.sending" => "Sending...",
            "form.error.required" => "required",
            "form.error.invalid_email" => "invalid",
            "thanks.title" => "Thank you!",
            "thanks.body" => "Your suggestion is in the logbook. We read every one between dives.",
            "thanks.back" => "Back to shore",
            _ => key,
        },
        Locale::Ar => match key {
            "nav.home" => "الرئيسية",
            "nav.about" => "من نحن",
            "nav.info" => "الرحلات",
            "nav.tribute" => "تكريم",
            "nav.secret" => "الحديقة السرية",
            "hero.title" => "حكايات من الأعماق",
            "hero.subtitle" => "أفلام غوص ويوميات من عرض المحيط.",
            "hero.cta" => "شاهد أحدث رحلة",
            "footer.follow" => "تابع الرحلة",
            "gate.title" => "الحديقة السرية",
            "gate.prompt" => "هذا المكان لطاقمنا. أدخل الرمز من نهاية الفيلم.",
            "gate.placeholder" => "الرمز السري",
            "gate.submit" => "افتح البوابة",
            "gate.wrong" => "ليس هذا الرمز.",
            "gate.attempts_left" => "محاولات متبقية قبل الإغلاق",
            "gate.locked" => "محاولات كثيرة. تفتح البوابة بعد",
            "gate.minutes" => "دقيقة",
            "form.heading" => "اقترح غوصة",
            "form.title_label" => "إلى أين نذهب؟",
            "form.email_label" => "البريد الإلكتروني (اختياري)",
            "form.message_label" => "أخبرنا المزيد",
            "form.submit" => "أرسل الاقتراح",
            "form.sending" => "جارٍ الإرسال...",
            "form.error.required" => "مطلوب",
            "form.error.invalid_email" => "غير صالح",
            "thanks.title" => "شكرًا لك!",
            "thanks.body" => "اقتراحك في دفتر الرحلات. نقرأ كل اقتراح بين الغوصات.",
            "thanks.back" => "عودة إلى الشاطئ",
            _ => key,
        },
    };
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn lookup_finds_both_locales() {
        assert_eq!(t(Locale::En, "nav.home"), "Home");
        assert_eq!(t(Locale::Ar, "nav.home"), "الرئيسية");
    }

    #[test]
    fn missing_keys_fall_back_to_the_key_itself() {
        assert_eq!(t(Locale::En, "no.such.key"), "no.such.key");
        assert_eq!(t(Locale::Ar, "no.such.key"), "no.such.key");
    }

    #[test]
    fn preferred_locale_round_trips_through_storage() {
        let store = MemoryStorage::default();
        assert_eq!(load_preferred(&store), Locale::En);

        store_preferred(&store, Locale::Ar);
        assert_eq!(load_preferred(&store), Locale::Ar);

        // Garbage in storage falls back to the default.
        store.set(crate::config::LANGUAGE_KEY, "fi");
        assert_eq!(load_preferred(&store), Locale::En);
    }

    #[test]
    fn arabic_reads_right_to_left() {
        assert_eq!(Locale::Ar.dir(), "rtl");
        assert_eq!(Locale::En.dir(), "ltr");
        assert_eq!(Locale::En.other(), Locale::Ar);
    }
}
