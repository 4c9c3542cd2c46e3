use once_cell::sync::Lazy;

use crate::models::RigState;

/// Fixed dimensions of the rig schematic.
///
/// The schematic is drawn to proportion: a hairline rope carrying a narrow
/// 200 px lamp, a 300 px floor line near the bottom edge and a 100 px wide
/// falling object between lamp and floor.
#[derive(Debug, Clone)]
pub struct SchematicLayout {
    /// Lamp width in pixels (default: 10)
    pub light_width: f64,
    /// Lamp length in pixels (default: 200)
    pub light_length: f64,
    /// Falling-object width in pixels (default: 100)
    pub object_width: f64,
    /// Floor-line width in pixels (default: 300)
    pub floor_width: f64,
    /// Floor-line height in pixels (default: 3)
    pub floor_height: f64,
    /// Padding between floor line and viewport bottom (default: 50)
    pub bottom_padding: f64,
}

impl Default for SchematicLayout {
    fn default() -> Self {
        Self {
            light_width: 10.0,
            light_length: 200.0,
            object_width: 100.0,
            floor_width: 300.0,
            floor_height: 3.0,
            bottom_padding: 50.0,
        }
    }
}

/// Process-wide layout constants, initialized once.
static SHARED: Lazy<SchematicLayout> = Lazy::new(SchematicLayout::default);

/// Axis-aligned box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Horizontal midpoint.
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Lower edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Frames of the four schematic elements for one viewport and rig state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchematicFrames {
    pub rope: Rect,
    pub light: Rect,
    pub floor: Rect,
    pub object: Rect,
}

impl SchematicLayout {
    /// The shared read-only instance.
    pub fn shared() -> &'static SchematicLayout {
        &SHARED
    }

    /// Computes the four element frames.
    ///
    /// # Algorithm
    /// 1. The object's on-screen height is how far the rope has paid out
    ///    past the range reading: `position - distance`.
    /// 2. The rope takes whatever vertical space remains above the lamp,
    ///    so rope, lamp, the `distance` gap and the object stack exactly
    ///    onto the floor line.
    /// 3. Rope, lamp, floor and object share the viewport's vertical axis.
    ///
    /// Pure function of its inputs; callers re-run it on every viewport or
    /// state change. No bounds checks: an object taller than the available
    /// space yields a negative rope length, returned as-is.
    ///
    /// # Arguments
    /// * `viewport_width` - Available width in pixels
    /// * `viewport_height` - Available height in pixels
    /// * `state` - Current rig position and distance
    pub fn compute(
        &self,
        viewport_width: f64,
        viewport_height: f64,
        state: &RigState,
    ) -> SchematicFrames {
        let fw = viewport_width;
        let fh = viewport_height;
        let object_height = state.position - state.distance;
        let rope_length =
            fh - self.bottom_padding - object_height - state.distance - self.light_length;

        SchematicFrames {
            rope: Rect {
                x: fw / 2.0,
                y: 0.0,
                width: 1.0,
                height: rope_length,
            },
            light: Rect {
                x: fw / 2.0 - self.light_width / 2.0,
                y: rope_length,
                width: self.light_width,
                height: self.light_length,
            },
            floor: Rect {
                x: fw / 2.0 - self.floor_width / 2.0,
                y: fh - self.bottom_padding,
                width: self.floor_width,
                height: self.floor_height,
            },
            object: Rect {
                x: fw / 2.0 - self.object_width / 2.0,
                y: fh - self.bottom_padding - object_height,
                width: self.object_width,
                height: object_height,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(position: f64, distance: f64) -> RigState {
        RigState::new(7, position, distance)
    }

    #[test]
    fn test_reference_frames() {
        let layout = SchematicLayout::default();
        let frames = layout.compute(300.0, 500.0, &state(100.0, 100.0));

        assert_eq!(
            frames.rope,
            Rect {
                x: 150.0,
                y: 0.0,
                width: 1.0,
                height: 150.0
            }
        );
        assert_eq!(
            frames.light,
            Rect {
                x: 145.0,
                y: 150.0,
                width: 10.0,
                height: 200.0
            }
        );
        assert_eq!(
            frames.floor,
            Rect {
                x: 0.0,
                y: 450.0,
                width: 300.0,
                height: 3.0
            }
        );
        assert_eq!(
            frames.object,
            Rect {
                x: 100.0,
                y: 350.0,
                width: 100.0,
                height: 0.0
            }
        );
    }

    #[test]
    fn test_vertical_partition() {
        // Rope, lamp, the distance gap and the object stack exactly onto
        // the floor line for any viewport and state.
        let cases = [
            (300.0, 500.0, 100.0, 100.0),
            (1024.0, 768.0, 180.0, 40.0),
            (200.0, 900.0, 60.0, 130.0),
        ];
        let layout = SchematicLayout::default();

        for (fw, fh, position, distance) in cases {
            let frames = layout.compute(fw, fh, &state(position, distance));
            let stacked =
                frames.rope.height + frames.light.height + distance + frames.object.height;
            assert!(
                (stacked - (fh - layout.bottom_padding)).abs() < 1e-9,
                "stack {} does not reach the floor line {} for {:?}",
                stacked,
                fh - layout.bottom_padding,
                (fw, fh, position, distance)
            );
            assert!(
                (frames.light.bottom() + distance - frames.object.y).abs() < 1e-9,
                "object top must sit one distance below the lamp"
            );
            assert!(
                (frames.object.bottom() - frames.floor.y).abs() < 1e-9,
                "object bottom must rest on the floor line"
            );
        }
    }

    #[test]
    fn test_horizontal_centering() {
        let layout = SchematicLayout::default();
        for fw in [120.0, 300.0, 1920.0] {
            let frames = layout.compute(fw, 600.0, &state(140.0, 60.0));
            assert_eq!(frames.rope.x, fw / 2.0);
            assert!((frames.light.center_x() - fw / 2.0).abs() < 1e-9);
            assert!((frames.floor.center_x() - fw / 2.0).abs() < 1e-9);
            assert!((frames.object.center_x() - fw / 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_oversized_object_goes_unclamped() {
        // An object taller than the viewport pushes the rope length
        // negative; the pure layer must not correct it.
        let layout = SchematicLayout::default();
        let frames = layout.compute(300.0, 400.0, &state(500.0, 20.0));

        assert_eq!(frames.object.height, 480.0);
        assert_eq!(frames.rope.height, -350.0);
        assert_eq!(frames.light.y, -350.0);
    }

    #[test]
    fn test_recompute_tracks_viewport() {
        // Same state, two viewports: frames follow the container.
        let layout = SchematicLayout::default();
        let rig = state(150.0, 50.0);

        let small = layout.compute(300.0, 500.0, &rig);
        let large = layout.compute(600.0, 1000.0, &rig);

        assert_eq!(small.object.height, large.object.height);
        assert_eq!(large.rope.height - small.rope.height, 500.0);
        assert_eq!(large.rope.x - small.rope.x, 150.0);
    }

    #[test]
    fn test_shared_instance_carries_defaults() {
        let shared = SchematicLayout::shared();
        let defaults = SchematicLayout::default();
        assert_eq!(shared.light_width, defaults.light_width);
        assert_eq!(shared.light_length, defaults.light_length);
        assert_eq!(shared.object_width, defaults.object_width);
        assert_eq!(shared.floor_width, defaults.floor_width);
        assert_eq!(shared.floor_height, defaults.floor_height);
        assert_eq!(shared.bottom_padding, defaults.bottom_padding);
    }
}
