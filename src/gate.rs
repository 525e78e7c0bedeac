use crate::config::{
    ATTEMPTS_KEY, LOCKOUT_MS, LOCK_UNTIL_KEY, MAX_ATTEMPTS, SECRET_CODE, UNLOCKED_KEY,
};
use crate::storage::Storage;

/// Passcode gate state for the secret page. `attempts` and `locked_until`
/// survive reloads; `unlocked` lives only for the current session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GateState {
    pub attempts: u32,
    pub locked_until: Option<i64>,
    pub unlocked: bool,
}

impl GateState {
    pub fn is_locked(&self, now: i64) -> bool {
        self.locked_until.map_or(false, |until| now < until)
    }

    pub fn remaining_attempts(&self) -> u32 {
        MAX_ATTEMPTS.saturating_sub(self.attempts)
    }
}

/// Whole minutes left on the lockout, rounded up so the message never
/// shows "0 minutes" while still locked.
pub fn remaining_lock_minutes(state: &GateState, now: i64) -> i64 {
    match state.locked_until {
        Some(until) if now < until => (until - now + 59_999) / 60_000,
        _ => 0,
    }
}

/// The gate itself. Durable fields are written through `durable`
/// synchronously on every state change; the session unlock flag goes to
/// `volatile`, which a fresh page load replaces.
pub struct AccessGate<D: Storage, V: Storage> {
    durable: D,
    volatile: V,
}

impl<D: Storage, V: Storage> AccessGate<D, V> {
    pub fn new(durable: D, volatile: V) -> Self {
        Self { durable, volatile }
    }

    /// Loads persisted attempts and lockout at startup. A lockout that
    /// already expired is cleared before anyone sees it.
    pub fn initialize(&self, now: i64) -> GateState {
        let state = GateState {
            attempts: self
                .durable
                .get(ATTEMPTS_KEY)
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
            locked_until: self
                .durable
                .get(LOCK_UNTIL_KEY)
                .and_then(|v| v.parse().ok()),
            unlocked: self.volatile.get(UNLOCKED_KEY).as_deref() == Some("true"),
        };
        self.tick(&state, now)
    }

    /// Judges one passcode submission. Rejected outright while locked; a
    /// match grants access and resets the counters; a miss counts the
    /// attempt and arms the lockout on the fifth.
    pub fn submit(&self, code: &str, state: &GateState, now: i64) -> (bool, GateState) {
        // An expired lockout clears before the attempt is judged, keeping
        // the counter inside [0, MAX_ATTEMPTS] even if no tick ran.
        let state = self.tick(state, now);
        if state.is_locked(now) {
            return (false, state);
        }

        if code == SECRET_CODE {
            self.durable.remove(ATTEMPTS_KEY);
            self.durable.remove(LOCK_UNTIL_KEY);
            self.volatile.set(UNLOCKED_KEY, "true");
            return (
                true,
                GateState {
                    attempts: 0,
                    locked_until: None,
                    unlocked: true,
                },
            );
        }

        let mut next = state;
        next.attempts += 1;
        self.durable.set(ATTEMPTS_KEY, &next.attempts.to_string());
        if next.attempts >= MAX_ATTEMPTS {
            let until = now + LOCKOUT_MS;
            next.locked_until = Some(until);
            self.durable.set(LOCK_UNTIL_KEY, &until.to_string());
        }
        (false, next)
    }

    /// Countdown poll. Clears the lockout (memory and storage) once the
    /// wall clock passes it; otherwise returns the state untouched.
    pub fn tick(&self, state: &GateState, now: i64) -> GateState {
        match state.locked_until {
            Some(until) if now >= until => {
                self.durable.remove(ATTEMPTS_KEY);
                self.durable.remove(LOCK_UNTIL_KEY);
                GateState {
                    attempts: 0,
                    locked_until: None,
                    unlocked: state.unlocked,
                }
            }
            _ => state.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    const NOW: i64 = 1_700_000_000_000;

    fn gate() -> AccessGate<MemoryStorage, MemoryStorage> {
        AccessGate::new(MemoryStorage::default(), MemoryStorage::default())
    }

    fn gate_with_stores(
        durable: MemoryStorage,
        volatile: MemoryStorage,
    ) -> AccessGate<MemoryStorage, MemoryStorage> {
        AccessGate::new(durable, volatile)
    }

    #[test]
    fn wrong_codes_below_limit_count_without_locking() {
        let gate = gate();
        let mut state = gate.initialize(NOW);

        for n in 1..=4 {
            let (granted, next) = gate.submit("000000000000", &state, NOW);
            assert!(!granted);
            assert_eq!(next.attempts, n);
            assert_eq!(next.locked_until, None);
            state = next;
        }
    }

    #[test]
    fn correct_code_grants_after_any_number_of_misses() {
        for misses in 0..5 {
            let durable = MemoryStorage::default();
            let gate = gate_with_stores(durable.clone(), MemoryStorage::default());
            let mut state = gate.initialize(NOW);

            for _ in 0..misses {
                state = gate.submit("000000000000", &state, NOW).1;
            }
            let (granted, next) = gate.submit(SECRET_CODE, &state, NOW);
            assert!(granted, "misses={misses}");
            assert_eq!(next.attempts, 0);
            assert_eq!(next.locked_until, None);
            assert!(next.unlocked);
            assert_eq!(durable.get(ATTEMPTS_KEY), None);
        }
    }

    #[test]
    fn fifth_miss_arms_a_fifteen_minute_lockout() {
        let gate = gate();
        let mut state = gate.initialize(NOW);

        for _ in 0..4 {
            state = gate.submit("000000000000", &state, NOW).1;
        }
        let (granted, locked) = gate.submit("000000000000", &state, NOW);
        assert!(!granted);
        assert_eq!(locked.attempts, 5);
        assert_eq!(locked.locked_until, Some(NOW + 900_000));

        // Even the true code bounces off the lockout, uncounted.
        let (granted, unchanged) = gate.submit(SECRET_CODE, &locked, NOW + 1);
        assert!(!granted);
        assert_eq!(unchanged, locked);
    }

    #[test]
    fn tick_clears_the_lockout_once_it_expires() {
        let durable = MemoryStorage::default();
        let gate = gate_with_stores(durable.clone(), MemoryStorage::default());
        let mut state = gate.initialize(NOW);
        for _ in 0..5 {
            state = gate.submit("000000000000", &state, NOW).1;
        }

        let still_locked = gate.tick(&state, NOW + 899_999);
        assert_eq!(still_locked, state);

        let cleared = gate.tick(&state, NOW + 900_000);
        assert_eq!(cleared.attempts, 0);
        assert_eq!(cleared.locked_until, None);
        assert_eq!(durable.get(ATTEMPTS_KEY), None);
        assert_eq!(durable.get(LOCK_UNTIL_KEY), None);

        let (granted, _) = gate.submit(SECRET_CODE, &cleared, NOW + 900_000);
        assert!(granted);
    }

    #[test]
    fn submit_after_expiry_works_even_without_a_tick() {
        let gate = gate();
        let mut state = gate.initialize(NOW);
        for _ in 0..5 {
            state = gate.submit("000000000000", &state, NOW).1;
        }

        // The expired lock clears inside submit, so this miss counts as
        // the first of a fresh window rather than a sixth.
        let (granted, next) = gate.submit("000000000000", &state, NOW + 900_000);
        assert!(!granted);
        assert_eq!(next.attempts, 1);
        assert_eq!(next.locked_until, None);
    }

    #[test]
    fn initialize_restores_persisted_state_and_drops_expired_locks() {
        let durable = MemoryStorage::default();
        durable.set(ATTEMPTS_KEY, "3");
        let gate = gate_with_stores(durable.clone(), MemoryStorage::default());
        let state = gate.initialize(NOW);
        assert_eq!(state.attempts, 3);
        assert!(!state.unlocked);

        durable.set(ATTEMPTS_KEY, "5");
        durable.set(LOCK_UNTIL_KEY, &(NOW - 1).to_string());
        let state = gate.initialize(NOW);
        assert_eq!(state.attempts, 0);
        assert_eq!(state.locked_until, None);
        assert_eq!(durable.get(LOCK_UNTIL_KEY), None);
    }

    #[test]
    fn session_unlock_flag_is_read_back_from_the_volatile_store() {
        let volatile = MemoryStorage::default();
        let gate = gate_with_stores(MemoryStorage::default(), volatile.clone());
        let state = gate.initialize(NOW);
        let (granted, _) = gate.submit(SECRET_CODE, &state, NOW);
        assert!(granted);
        assert_eq!(volatile.get(UNLOCKED_KEY).as_deref(), Some("true"));

        // Same session: a re-created gate over the same volatile store
        // still sees the unlock. A reload replaces the store, clearing it.
        let gate = gate_with_stores(MemoryStorage::default(), volatile);
        assert!(gate.initialize(NOW).unlocked);
    }

    #[test]
    fn remaining_minutes_round_up_and_never_increase() {
        let gate = gate();
        let mut state = gate.initialize(NOW);
        for _ in 0..5 {
            state = gate.submit("000000000000", &state, NOW).1;
        }

        assert_eq!(remaining_lock_minutes(&state, NOW), 15);
        assert_eq!(remaining_lock_minutes(&state, NOW + 1), 15);
        assert_eq!(remaining_lock_minutes(&state, NOW + 60_000), 14);

        let mut last = i64::MAX;
        for step in 0..=15 {
            let minutes = remaining_lock_minutes(&state, NOW + step * 60_000);
            assert!(minutes <= last);
            last = minutes;
        }
        assert_eq!(remaining_lock_minutes(&state, NOW + 900_000), 0);

        let unlocked = gate.tick(&state, NOW + 900_000);
        assert_eq!(remaining_lock_minutes(&unlocked, NOW + 900_000), 0);
    }
}
