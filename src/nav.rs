/// The pages the site can show. Which component actually renders for
/// `SecretGarden` is the app shell's call, based on the gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Info,
    Tribute,
    SecretGarden,
    ThankYou,
}

/// Current page plus the fade flag. While `transitioning` is set the
/// displayed page stays put; the scheduled timer carries the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavState {
    pub current: Page,
    pub transitioning: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            current: Page::Home,
            transitioning: false,
        }
    }
}

impl NavState {
    /// Starts a transition toward `target`. Returns the state to render
    /// while the exit fade plays, or `None` when already on target (no
    /// timer should be scheduled in that case).
    pub fn depart(&self, target: Page) -> Option<NavState> {
        if target == self.current {
            None
        } else {
            Some(NavState {
                current: self.current,
                transitioning: true,
            })
        }
    }

    /// The state once the transition window has elapsed.
    pub fn arrive(target: Page) -> NavState {
        NavState {
            current: target,
            transitioning: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depart_holds_the_current_page_while_fading() {
        let state = NavState::default();
        let fading = state.depart(Page::About).unwrap();
        assert_eq!(fading.current, Page::Home);
        assert!(fading.transitioning);
    }

    #[test]
    fn arrive_lands_on_the_target_with_the_flag_cleared() {
        let landed = NavState::arrive(Page::About);
        assert_eq!(landed.current, Page::About);
        assert!(!landed.transitioning);
    }

    #[test]
    fn navigating_to_the_current_page_is_a_no_op() {
        let state = NavState::default();
        assert_eq!(state.depart(Page::Home), None);
    }
}
