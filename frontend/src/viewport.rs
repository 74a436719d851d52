use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::MOBILE_BREAKPOINT;

pub fn is_mobile_width(width: f64) -> bool {
    width <= MOBILE_BREAKPOINT
}

/// Re-renders the caller whenever the window crosses the mobile breakpoint.
#[hook]
pub fn use_is_mobile() -> bool {
    let (width, _height) = use_window_size();
    is_mobile_width(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        assert!(is_mobile_width(375.0));
        assert!(is_mobile_width(768.0));
        assert!(!is_mobile_width(769.0));
        assert!(!is_mobile_width(1440.0));
    }
}
