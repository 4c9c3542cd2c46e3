/// Runtime state of a single rig, supplied by the presentation host before
/// display and updated from the device afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigState {
    /// Device identifier, rendered as a two-digit label.
    pub id: u32,
    /// Rope position in centimeters, measured from the zero switch.
    pub position: f64,
    /// Range-sensor reading below the lamp in centimeters.
    pub distance: f64,
    /// Whether the rig currently sees motion underneath it.
    pub motion: bool,
}

impl RigState {
    /// Creates the state for a freshly presented screen. Motion starts
    /// cleared; the device reports it once the screen is live.
    pub fn new(id: u32, position: f64, distance: f64) -> Self {
        Self {
            id,
            position,
            distance,
            motion: false,
        }
    }

    /// Two-digit display label, e.g. `07`.
    pub fn label(&self) -> String {
        format!("{:02}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_zero_pads() {
        assert_eq!(RigState::new(0, 100.0, 100.0).label(), "00");
        assert_eq!(RigState::new(7, 100.0, 100.0).label(), "07");
        assert_eq!(RigState::new(42, 100.0, 100.0).label(), "42");
    }

    #[test]
    fn test_label_keeps_wide_ids() {
        assert_eq!(RigState::new(123, 100.0, 100.0).label(), "123");
    }

    #[test]
    fn test_new_starts_without_motion() {
        assert!(!RigState::new(1, 150.0, 30.0).motion);
    }
}
