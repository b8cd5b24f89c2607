//! One-shot reveal-on-scroll latch.
//!
//! The first intersection flips the latch for good; the caller stops
//! observing as soon as [`RevealLatch::observe`] returns true.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one intersection report. Returns true only on the report that
    /// reveals the content.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Transition classes for a reveal wrapper.
pub fn reveal_classes(visible: bool, extra: &str) -> String {
    let state = if visible {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-10"
    };
    let base = format!("transition-all duration-1000 ease-out transform {state}");
    match extra.trim() {
        "" => base,
        extra => format!("{base} {extra}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_exactly_once() {
        let mut latch = RevealLatch::new();
        assert!(!latch.observe(false));
        assert!(!latch.is_revealed());

        assert!(latch.observe(true));
        assert!(latch.is_revealed());

        assert!(!latch.observe(true));
        assert!(!latch.observe(false));
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_classes() {
        assert!(reveal_classes(false, "").ends_with("opacity-0 translate-y-10"));
        assert!(reveal_classes(true, "").ends_with("opacity-100 translate-y-0"));
        assert!(reveal_classes(true, " delay-200 ").ends_with("translate-y-0 delay-200"));
    }
}
