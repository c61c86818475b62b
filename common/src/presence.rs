/// Visual lifecycle of something that animates in and out, such as the sidebar
/// or its sub-menu. Only `Hidden` is unmounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presence {
    Hidden,
    Entering,
    Visible,
    Exiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceEvent {
    /// The parent changed `is_open`.
    Target(bool),
    /// The transition timer scheduled while in this phase has fired.
    Settled(Presence),
}

impl Presence {
    pub fn initial(open: bool) -> Self {
        if open {
            Self::Entering
        } else {
            Self::Hidden
        }
    }

    pub fn apply(self, event: PresenceEvent) -> Self {
        match event {
            PresenceEvent::Target(open) => self.target(open),
            // a timer from an earlier phase lost the race against a new target
            PresenceEvent::Settled(phase) if phase != self => self,
            PresenceEvent::Settled(_) => self.settle(),
        }
    }

    fn target(self, open: bool) -> Self {
        match (self, open) {
            (Self::Hidden | Self::Exiting, true) => Self::Entering,
            (Self::Entering | Self::Visible, false) => Self::Exiting,
            (s, _) => s,
        }
    }

    fn settle(self) -> Self {
        match self {
            Self::Entering => Self::Visible,
            Self::Exiting => Self::Hidden,
            s => s,
        }
    }

    pub fn is_mounted(self) -> bool {
        self != Self::Hidden
    }

    /// The phase a parent would eventually see with no further input.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Entering | Self::Visible)
    }

    /// When a transition of `duration_ms` settles this phase, `None` for resting phases.
    pub fn settles_after(self, duration_ms: u32) -> Option<u32> {
        match self {
            Self::Entering | Self::Exiting => Some(duration_ms),
            Self::Visible | Self::Hidden => None,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Hidden => "is-hidden",
            Self::Entering => "is-entering",
            Self::Visible => "is-visible",
            Self::Exiting => "is-exiting",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{OVERLAY_TRANSITION_MS, SUBMENU_FADE_MS};
    use PresenceEvent::*;

    fn run(start: Presence, events: &[PresenceEvent]) -> Presence {
        events.iter().fold(start, |p, e| p.apply(*e))
    }

    #[test]
    fn closed_is_unmounted() {
        assert!(!Presence::initial(false).is_mounted());
        assert_eq!(Presence::initial(false).settles_after(OVERLAY_TRANSITION_MS), None);
    }

    #[test]
    fn open_close_lifecycle() {
        let p = Presence::initial(true);
        assert_eq!(p, Presence::Entering);
        let p = p.apply(Settled(Presence::Entering));
        assert_eq!(p, Presence::Visible);
        let p = p.apply(Target(false));
        assert_eq!(p, Presence::Exiting);
        assert!(p.is_mounted());
        let p = p.apply(Settled(Presence::Exiting));
        assert_eq!(p, Presence::Hidden);
        assert!(!p.is_mounted());
    }

    #[test]
    fn rapid_toggle_settles_on_last_target() {
        let p = run(
            Presence::Hidden,
            &[Target(true), Target(false), Target(true)],
        );
        assert_eq!(p, Presence::Entering);
        assert_eq!(p.apply(Settled(p)), Presence::Visible);

        let p = run(
            Presence::Visible,
            &[Target(false), Target(true), Target(false)],
        );
        assert_eq!(p, Presence::Exiting);
        assert_eq!(p.apply(Settled(p)), Presence::Hidden);
    }

    #[test]
    fn stale_timer_is_ignored() {
        // entering timer fires after the parent already closed
        let p = run(
            Presence::Hidden,
            &[Target(true), Target(false), Settled(Presence::Entering)],
        );
        assert_eq!(p, Presence::Exiting);

        // exiting timer fires after a reopen
        let p = run(
            Presence::Visible,
            &[Target(false), Target(true), Settled(Presence::Exiting)],
        );
        assert_eq!(p, Presence::Entering);
        assert!(p.is_mounted());
    }

    #[test]
    fn repeated_targets_are_idempotent() {
        assert_eq!(run(Presence::Visible, &[Target(true), Target(true)]), Presence::Visible);
        assert_eq!(run(Presence::Hidden, &[Target(false), Target(false)]), Presence::Hidden);
    }

    #[test]
    fn any_sequence_ends_matching_the_last_target() {
        let phases = [
            Presence::Hidden,
            Presence::Entering,
            Presence::Visible,
            Presence::Exiting,
        ];
        for start in phases {
            for bits in 0u8..16 {
                let targets = (0..4).map(|i| bits & (1 << i) != 0).collect::<Vec<_>>();
                let mut p = start;
                for open in &targets {
                    p = p.apply(Target(*open));
                }
                while p.settles_after(OVERLAY_TRANSITION_MS).is_some() {
                    p = p.apply(Settled(p));
                }
                assert_eq!(p.is_open(), targets[3], "start {start:?}, targets {targets:?}");
                assert_eq!(p.is_mounted(), targets[3]);
            }
        }
    }

    #[test]
    fn timer_uses_the_requested_duration() {
        assert_eq!(
            Presence::Entering.settles_after(OVERLAY_TRANSITION_MS),
            Some(OVERLAY_TRANSITION_MS)
        );
        assert_eq!(
            Presence::Exiting.settles_after(SUBMENU_FADE_MS),
            Some(SUBMENU_FADE_MS)
        );
        assert_eq!(Presence::Visible.settles_after(SUBMENU_FADE_MS), None);
    }

    #[test]
    fn collapsing_submenu_stays_mounted_until_faded() {
        let expanded = Presence::initial(true).apply(Settled(Presence::Entering));
        assert_eq!(expanded, Presence::Visible);

        let collapsing = expanded.apply(Target(false));
        assert_eq!(collapsing, Presence::Exiting);
        assert!(collapsing.is_mounted());
        assert_eq!(collapsing.class(), "is-exiting");
        assert_eq!(collapsing.settles_after(SUBMENU_FADE_MS), Some(SUBMENU_FADE_MS));

        let gone = collapsing.apply(Settled(Presence::Exiting));
        assert!(!gone.is_mounted());
    }
}
