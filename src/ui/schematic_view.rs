use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Fixed, Orientation};
use std::rc::Rc;

use crate::layout::{Rect, SchematicLayout};
use crate::models::RigState;

/// Renders the rig schematic: rope, lamp, floor line and falling object,
/// absolutely positioned from the pure layout.
pub struct SchematicView {
    container: Fixed,
    rope: GtkBox,
    light: GtkBox,
    floor: GtkBox,
    object: GtkBox,
}

impl SchematicView {
    pub fn new() -> Rc<Self> {
        let container = Fixed::new();
        container.set_hexpand(true);
        container.set_vexpand(true);
        container.add_css_class("schematic");

        let rope = Self::element("rope");
        let light = Self::element("light");
        let floor = Self::element("floor");
        let object = Self::element("falling-object");

        container.put(&rope, 0.0, 0.0);
        container.put(&light, 0.0, 0.0);
        container.put(&floor, 0.0, 0.0);
        container.put(&object, 0.0, 0.0);

        Rc::new(Self {
            container,
            rope,
            light,
            floor,
            object,
        })
    }

    fn element(css_class: &str) -> GtkBox {
        let widget = GtkBox::new(Orientation::Vertical, 0);
        widget.add_css_class(css_class);
        widget
    }

    /// The widget to place in the window.
    pub fn widget(&self) -> &Fixed {
        &self.container
    }

    /// Recomputes all four frames from the current allocation and state.
    pub fn relayout(&self, state: &RigState) {
        let width = self.container.width() as f64;
        let height = self.container.height() as f64;
        if width <= 0.0 || height <= 0.0 {
            // Not allocated yet; the resize observer calls back.
            return;
        }

        let frames = SchematicLayout::shared().compute(width, height, state);
        tracing::debug!(
            "Relayout {}x{}: rope {:.0}px, object {:.0}px",
            width,
            height,
            frames.rope.height,
            frames.object.height
        );

        self.place(&self.rope, &frames.rope);
        self.place(&self.light, &frames.light);
        self.place(&self.floor, &frames.floor);
        self.place(&self.object, &frames.object);
    }

    fn place(&self, widget: &GtkBox, frame: &Rect) {
        // GTK reads a negative size request as "unset"; collapse to zero
        // at this boundary only, the layout math stays unclamped.
        let width = frame.width.round().max(0.0) as i32;
        let height = frame.height.round().max(0.0) as i32;
        widget.set_size_request(width, height);
        self.container.move_(widget, frame.x, frame.y);
    }
}
