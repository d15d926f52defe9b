//! Leptos Hover Utilities
//!
//! Per-element hover state driven by mouseenter/mouseleave.
//! Handler factories return `Copy` closures usable directly as `on:` handlers.

use leptos::prelude::*;

/// Hover state signals for one element
#[derive(Clone, Copy)]
pub struct HoverSignals {
    pub hovered_read: ReadSignal<bool>,
    pub hovered_write: WriteSignal<bool>,
}

impl HoverSignals {
    /// Mark the element as hovered
    pub fn enter(&self) {
        self.hovered_write.set(true);
    }

    /// Mark the element as no longer hovered
    pub fn leave(&self) {
        self.hovered_write.set(false);
    }

    /// Tracked read of the hover state
    pub fn is_hovered(&self) -> bool {
        self.hovered_read.get()
    }

    /// Pick `hovered` while the pointer is over the element, `normal` otherwise.
    /// Tracked, so it can drive a reactive attribute.
    pub fn pick<T>(&self, normal: T, hovered: T) -> T {
        if self.is_hovered() { hovered } else { normal }
    }
}

pub fn create_hover_signals() -> HoverSignals {
    let (hovered_read, hovered_write) = signal(false);
    HoverSignals {
        hovered_read,
        hovered_write,
    }
}

/// Create mouseenter handler
pub fn make_on_mouseenter(hover: HoverSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| hover.enter()
}

/// Create mouseleave handler
pub fn make_on_mouseleave(hover: HoverSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| hover.leave()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_not_hovered() {
        let owner = Owner::new();
        owner.set();

        let hover = create_hover_signals();
        assert!(!hover.hovered_read.get_untracked());
    }

    #[test]
    fn test_enter_then_leave() {
        let owner = Owner::new();
        owner.set();

        let hover = create_hover_signals();
        hover.enter();
        assert!(hover.hovered_read.get_untracked());
        // Entering twice is harmless
        hover.enter();
        assert!(hover.hovered_read.get_untracked());
        hover.leave();
        assert!(!hover.hovered_read.get_untracked());
    }

    #[test]
    fn test_pick_follows_state() {
        let owner = Owner::new();
        owner.set();

        let hover = create_hover_signals();
        assert_eq!(hover.pick("#f8f9fa", "#e9ecef"), "#f8f9fa");
        hover.enter();
        assert_eq!(hover.pick("#f8f9fa", "#e9ecef"), "#e9ecef");
    }
}
