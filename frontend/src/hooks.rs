use std::rc::Rc;

use common::presence::{Presence, PresenceEvent};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Debug)]
struct PresenceState(Presence);

impl Reducible for PresenceState {
    type Action = PresenceEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.0.apply(action);
        if next == self.0 {
            self
        } else {
            Rc::new(Self(next))
        }
    }
}

/// Tracks the visual phase of something that animates in and out.
/// The returned phase stays mounted until the `duration_ms` exit transition has run.
#[hook]
pub fn use_presence(open: bool, duration_ms: u32) -> Presence {
    let state = use_reducer_eq(|| PresenceState(Presence::initial(open)));

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |open| {
                dispatcher.dispatch(PresenceEvent::Target(*open));
                || {}
            },
            open,
        );
    }

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |deps: &(Presence, u32)| {
                let (phase, duration_ms) = *deps;
                if crate::helpers::verbose() {
                    gloo::console::log!(format!("presence: {phase:?}"));
                }
                let timeout = phase.settles_after(duration_ms).map(|ms| {
                    Timeout::new(ms, move || {
                        dispatcher.dispatch(PresenceEvent::Settled(phase));
                    })
                });
                move || {
                    // dropping the handle clears the pending timer
                    drop(timeout);
                }
            },
            (state.0, duration_ms),
        );
    }

    state.0
}

/// Sets `document.title` after render.
#[hook]
pub fn use_title(title: String) {
    use_effect_with_deps(
        move |title| {
            gloo::utils::document().set_title(title);
            || {}
        },
        title,
    );
}
