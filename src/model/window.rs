use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// The voting time window.
///
/// Only the end instant is stored; openness is always derived from the
/// current time, so a window past its end reports closed without any
/// explicit closing call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionWindow {
    end_time: Option<DateTime<Utc>>,
}

impl ElectionWindow {
    /// A window that has never been opened.
    pub fn unset() -> Self {
        Self::default()
    }

    /// Open (or re-open) the window to close `duration` after `now`.
    /// Returns the new end time.
    pub fn open_for(&mut self, duration: Duration, now: DateTime<Utc>) -> DateTime<Utc> {
        let end_time = now + duration;
        self.end_time = Some(end_time);
        end_time
    }

    /// Whether the window is open at `instant`: it has been opened at some
    /// point, and `instant` is strictly before the end time.
    pub fn ongoing_at(&self, instant: DateTime<Utc>) -> bool {
        match self.end_time {
            Some(end_time) => instant < end_time,
            None => false,
        }
    }

    /// When the window closes, if it has ever been opened.
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_window_is_closed() {
        let window = ElectionWindow::unset();
        assert!(!window.ongoing_at(Utc::now()));
        assert_eq!(window.end_time(), None);
    }

    #[test]
    fn openness_is_derived_from_time() {
        let mut window = ElectionWindow::unset();
        let now = Utc::now();
        let end_time = window.open_for(Duration::seconds(60), now);
        assert_eq!(end_time, now + Duration::seconds(60));
        assert_eq!(window.end_time(), Some(end_time));

        assert!(window.ongoing_at(now));
        assert!(window.ongoing_at(end_time - Duration::seconds(1)));
        // Closed exactly at the end instant, with no closing call.
        assert!(!window.ongoing_at(end_time));
        assert!(!window.ongoing_at(end_time + Duration::seconds(1)));
    }

    #[test]
    fn reopening_replaces_the_end_time() {
        let mut window = ElectionWindow::example_expired();
        let now = Utc::now();
        assert!(!window.ongoing_at(now));

        window.open_for(Duration::seconds(60), now);
        assert!(window.ongoing_at(now));
    }
}
