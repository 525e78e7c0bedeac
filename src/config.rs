// Site-wide constants. The passcode lives client-side on purpose: the gate
// gates bonus content for fans, it is not a security boundary.

pub const SECRET_CODE: &str = "109942301960";

pub const MAX_ATTEMPTS: u32 = 5;
pub const LOCKOUT_MS: i64 = 15 * 60 * 1000;

pub const PAGE_TRANSITION_MS: u32 = 350;
pub const FORM_SUBMIT_DELAY_MS: u32 = 1000;

// Durable storage keys (localStorage).
pub const ATTEMPTS_KEY: &str = "secretAttempts";
pub const LOCK_UNTIL_KEY: &str = "secretLockUntil";
pub const LANGUAGE_KEY: &str = "preferred-language";

// Volatile storage key, cleared on every full reload.
pub const UNLOCKED_KEY: &str = "secretUnlocked";

pub const YOUTUBE_URL: &str = "https://www.youtube.com/@deepcurrents";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/deepcurrents.film";
pub const X_URL: &str = "https://x.com/deepcurrents";
