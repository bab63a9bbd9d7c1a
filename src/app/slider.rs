pub const SLIDER_MAX: u8 = 100;

/// A seek bar whose movement is applied once the gesture ends.
///
/// The first nudge starts tracking and remembers where the gesture began;
/// [`release`](Slider::release) ends it and reports how far the thumb travelled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Slider {
    position: u8,
    tracking_from: Option<u8>,
}

impl Slider {
    pub fn position(&self) -> u8 {
        self.position
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking_from.is_some()
    }

    pub fn ratio(&self) -> f64 {
        f64::from(self.position) / f64::from(SLIDER_MAX)
    }

    pub fn nudge(&mut self, step: i16) {
        if self.tracking_from.is_none() {
            self.tracking_from = Some(self.position);
        }
        let next = (i16::from(self.position) + step).clamp(0, i16::from(SLIDER_MAX));
        self.position = next as u8;
    }

    /// Ends the gesture. Returns the travelled distance, if a gesture was running.
    pub fn release(&mut self) -> Option<i32> {
        let start = self.tracking_from.take()?;
        Some(i32::from(self.position) - i32::from(start))
    }

    /// Aborts the gesture and puts the thumb back where it started.
    pub fn cancel(&mut self) {
        if let Some(start) = self.tracking_from.take() {
            self.position = start;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_reports_travelled_distance() {
        let mut slider = Slider::default();
        slider.nudge(10);
        slider.nudge(5);
        assert!(slider.is_tracking());
        assert_eq!(slider.release(), Some(15));
        assert!(!slider.is_tracking());

        slider.nudge(-20);
        assert_eq!(slider.release(), Some(-15));
        assert_eq!(slider.position(), 0);
    }

    #[test]
    fn release_without_gesture_is_noop() {
        let mut slider = Slider::default();
        assert_eq!(slider.release(), None);
    }

    #[test]
    fn position_is_clamped() {
        let mut slider = Slider::default();
        slider.nudge(500);
        assert_eq!(slider.position(), SLIDER_MAX);
        assert_eq!(slider.release(), Some(100));
        slider.nudge(-500);
        assert_eq!(slider.position(), 0);
    }

    #[test]
    fn cancel_restores_start() {
        let mut slider = Slider::default();
        slider.nudge(30);
        slider.release();
        slider.nudge(12);
        slider.cancel();
        assert_eq!(slider.position(), 30);
        assert!(!slider.is_tracking());
    }
}
