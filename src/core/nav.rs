use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// User input relevant to the mobile menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    Toggle,
    LinkActivated,
    OutsideClick,
    Escape,
    /// Tab key inside the page. `focused` is the index of the focused menu
    /// link, if focus is on one.
    Tab {
        shift: bool,
        focused: Option<usize>,
        link_count: usize,
    },
}

/// Side effects the DOM layer applies after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEffect {
    /// Menu/toggle `active` classes and `aria-expanded`.
    SetOpen(bool),
    LockScroll(bool),
    FocusFirstLink,
    FocusToggle,
    FocusLink(usize),
    PreventDefault,
}

pub type NavEffects = SmallVec<[NavEffect; 4]>;

/// Open/closed state machine for the mobile navigation menu.
#[derive(Clone, Debug, Default)]
pub struct NavMenu {
    state: MenuState,
    lock_scroll: bool,
    scroll_locked: bool,
}

impl NavMenu {
    /// `lock_scroll` is whether opening the menu should lock page scroll
    /// (true below the mobile breakpoint).
    pub fn new(lock_scroll: bool) -> Self {
        Self {
            state: MenuState::Closed,
            lock_scroll,
            scroll_locked: false,
        }
    }

    #[inline]
    pub fn state(&self) -> MenuState {
        self.state
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Viewport changes can cross the breakpoint. Applies from the next open.
    pub fn set_lock_scroll(&mut self, lock_scroll: bool) {
        self.lock_scroll = lock_scroll;
    }

    pub fn handle(&mut self, event: NavEvent) -> NavEffects {
        let mut fx = NavEffects::new();
        match (self.state, event) {
            (MenuState::Closed, NavEvent::Toggle) => {
                self.state = MenuState::Open;
                fx.push(NavEffect::SetOpen(true));
                if self.lock_scroll {
                    self.scroll_locked = true;
                    fx.push(NavEffect::LockScroll(true));
                }
                fx.push(NavEffect::FocusFirstLink);
            }
            (MenuState::Open, NavEvent::Toggle)
            | (MenuState::Open, NavEvent::LinkActivated)
            | (MenuState::Open, NavEvent::OutsideClick) => {
                self.close(&mut fx);
            }
            (MenuState::Open, NavEvent::Escape) => {
                self.close(&mut fx);
                fx.push(NavEffect::FocusToggle);
            }
            (
                MenuState::Open,
                NavEvent::Tab {
                    shift,
                    focused,
                    link_count,
                },
            ) => {
                if let Some(i) = focus_trap_target(shift, focused, link_count) {
                    fx.push(NavEffect::PreventDefault);
                    fx.push(NavEffect::FocusLink(i));
                }
            }
            (MenuState::Closed, _) => {}
        }
        fx
    }

    fn close(&mut self, fx: &mut NavEffects) {
        self.state = MenuState::Closed;
        fx.push(NavEffect::SetOpen(false));
        // unlock whatever was locked on open, even if the breakpoint moved since
        if self.scroll_locked {
            self.scroll_locked = false;
            fx.push(NavEffect::LockScroll(false));
        }
    }
}

/// Where Tab should move focus to keep it inside the menu.
///
/// `None` means the browser's default order already stays inside.
pub fn focus_trap_target(shift: bool, focused: Option<usize>, link_count: usize) -> Option<usize> {
    if link_count == 0 {
        return None;
    }
    let last = link_count - 1;
    match (shift, focused) {
        (false, None) => Some(0),
        (true, None) => Some(last),
        (false, Some(i)) if i >= last => Some(0),
        (true, Some(0)) => Some(last),
        _ => None,
    }
}
