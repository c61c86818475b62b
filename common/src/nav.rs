use crate::structs::{NavIcon, NavItem, NavTarget, SubNavItem};

pub const ACTIVITIES_ITEMS: &[SubNavItem] = &[
    SubNavItem {
        label: "Events",
        target: "/events",
    },
    SubNavItem {
        label: "Projects",
        target: "/projects",
    },
];

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Home",
        target: NavTarget::Link("/"),
        icon: NavIcon::Sparkles,
    },
    NavItem {
        label: "Teams",
        target: NavTarget::Link("/teams"),
        icon: NavIcon::Code,
    },
    NavItem {
        label: "Activities",
        target: NavTarget::Dropdown(ACTIVITIES_ITEMS),
        icon: NavIcon::Zap,
    },
    NavItem {
        label: "Contact",
        target: NavTarget::Link("/contact"),
        icon: NavIcon::ExternalLink,
    },
];

/// Everything the user can do inside an open sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEvent {
    BackdropClicked,
    CloseClicked,
    LinkSelected(&'static str),
    DropdownToggled,
}

/// What the component has to do after an event, in order: navigate, then close.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarEffects {
    pub navigate: Option<&'static str>,
    pub close: bool,
}

impl SidebarEffects {
    /// Carries out the effects: navigation first, then at most one close.
    pub fn run(self, navigate: impl FnOnce(&'static str), close: impl FnOnce()) {
        if let Some(target) = self.navigate {
            navigate(target);
        }
        if self.close {
            close();
        }
    }
}

/// The only state the sidebar owns. Starts collapsed and is dropped on unmount,
/// so a reopened sidebar is always collapsed again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    pub expanded: bool,
}

impl NavMenu {
    pub fn apply(self, event: SidebarEvent) -> (Self, SidebarEffects) {
        match event {
            SidebarEvent::BackdropClicked | SidebarEvent::CloseClicked => (
                self,
                SidebarEffects {
                    navigate: None,
                    close: true,
                },
            ),
            SidebarEvent::LinkSelected(target) => (
                self,
                SidebarEffects {
                    navigate: Some(target),
                    close: true,
                },
            ),
            SidebarEvent::DropdownToggled => (
                Self {
                    expanded: !self.expanded,
                },
                SidebarEffects::default(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    /// Applies `event` to `menu` and records the effects in the order they run.
    fn effect_log(menu: NavMenu, event: SidebarEvent) -> Vec<String> {
        let log = RefCell::new(Vec::new());
        let (_, effects) = menu.apply(event);
        effects.run(
            |target| log.borrow_mut().push(format!("navigate {target}")),
            || log.borrow_mut().push("close".to_owned()),
        );
        log.into_inner()
    }

    #[test]
    fn only_teams_is_active_on_teams() {
        let active = NAV_ITEMS
            .iter()
            .filter(|item| item.is_active("/teams"))
            .map(|item| item.label)
            .collect::<Vec<_>>();
        assert_eq!(active, vec!["Teams"]);
    }

    #[test]
    fn active_match_is_exact() {
        assert!(NAV_ITEMS.iter().all(|item| !item.is_active("/teams/alpha")));
        assert!(NAV_ITEMS.iter().all(|item| !item.is_active("/nowhere")));
        assert!(NAV_ITEMS.iter().all(|item| !item.is_active("")));
    }

    #[test]
    fn exactly_one_dropdown() {
        let dropdowns = NAV_ITEMS
            .iter()
            .filter(|item| item.is_dropdown())
            .collect::<Vec<_>>();
        assert_eq!(dropdowns.len(), 1);
        assert_eq!(dropdowns[0].label, "Activities");
        assert_eq!(
            dropdowns[0].target,
            NavTarget::Dropdown(ACTIVITIES_ITEMS)
        );
    }

    #[test]
    fn backdrop_closes_once_without_navigating() {
        let (menu, effects) = NavMenu::default().apply(SidebarEvent::BackdropClicked);
        assert_eq!(menu, NavMenu::default());
        assert_eq!(
            effects,
            SidebarEffects {
                navigate: None,
                close: true
            }
        );
    }

    #[test]
    fn leaf_link_navigates_and_closes() {
        let (_, effects) = NavMenu::default().apply(SidebarEvent::LinkSelected("/"));
        assert_eq!(effects.navigate, Some("/"));
        assert!(effects.close);

        let expanded = NavMenu { expanded: true };
        let (menu, effects) = expanded.apply(SidebarEvent::LinkSelected("/events"));
        assert_eq!(effects.navigate, Some("/events"));
        assert!(effects.close);
        assert!(menu.expanded);
    }

    #[test]
    fn dropdown_toggles_without_side_effects() {
        let menu = NavMenu::default();
        assert!(!menu.expanded);

        let (menu, effects) = menu.apply(SidebarEvent::DropdownToggled);
        assert!(menu.expanded);
        assert_eq!(effects, SidebarEffects::default());

        let (menu, effects) = menu.apply(SidebarEvent::DropdownToggled);
        assert!(!menu.expanded);
        assert_eq!(effects, SidebarEffects::default());
    }

    #[test]
    fn home_link_navigates_before_closing_once() {
        assert_eq!(
            effect_log(NavMenu::default(), SidebarEvent::LinkSelected("/")),
            vec!["navigate /".to_owned(), "close".to_owned()]
        );
        assert_eq!(
            effect_log(NavMenu { expanded: true }, SidebarEvent::LinkSelected("/projects")),
            vec!["navigate /projects".to_owned(), "close".to_owned()]
        );
    }

    #[test]
    fn backdrop_and_close_button_only_close_once() {
        for event in [SidebarEvent::BackdropClicked, SidebarEvent::CloseClicked] {
            assert_eq!(effect_log(NavMenu::default(), event), vec!["close".to_owned()]);
        }
    }

    #[test]
    fn dropdown_toggle_runs_no_effects() {
        assert!(effect_log(NavMenu::default(), SidebarEvent::DropdownToggled).is_empty());
        assert!(effect_log(NavMenu { expanded: true }, SidebarEvent::DropdownToggled).is_empty());
    }
}
