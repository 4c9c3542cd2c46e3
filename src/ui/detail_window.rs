use gdk4::Display;
use gtk4::prelude::*;
use gtk4::{
    Align, Application, ApplicationWindow, Box as GtkBox, Button, CssProvider, Label, Orientation,
    Settings, STYLE_PROVIDER_PRIORITY_APPLICATION,
};
use std::cell::{Cell, RefCell};
use std::path::Path;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::control::{Command, CommandSender, StateUpdate};
use crate::models::RigState;
use crate::ui::{Keybindings, SchematicView};

/// Embedded fallback stylesheet, used when src/style.css is missing
const FALLBACK_CSS: &str = r#"
window {
    background-color: #000000;
    color: #e0e0e0;
    font-family: monospace;
}

.rig-id {
    font-size: 24px;
    font-weight: bold;
    color: #ffffff;
}

.motion-indicator {
    color: #444444;
    font-weight: bold;
}

.motion-on {
    color: #ffb000;
}

.rope {
    background-color: #ffffff;
}

.light {
    background-color: #ffffff;
}

.floor {
    border: 3px solid #ffffff;
}

.falling-object {
    background-color: #0a0a0a;
    border: 1px solid #333333;
}
"#;

/// Load and apply the stylesheet
fn load_css() {
    let provider = CssProvider::new();

    // Try to load from file first, fall back to embedded CSS
    let css_path = concat!(env!("CARGO_MANIFEST_DIR"), "/src/style.css");

    if Path::new(css_path).exists() {
        provider.load_from_path(css_path);
        tracing::info!("Loaded CSS from: {}", css_path);
    } else {
        provider.load_from_string(FALLBACK_CSS);
        tracing::info!("Loaded fallback embedded CSS");
    }

    // Apply to the default display
    if let Some(display) = Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}

/// Detail screen for a single rig: schematic on top, control bar below.
///
/// Every control-bar action results in exactly one `send` through the
/// injected [`CommandSender`], carrying this screen's rig id. Dismissal
/// (back button, Escape, q) closes the window and sends nothing.
pub struct DetailWindow {
    self_weak: RefCell<Weak<DetailWindow>>,
    window: ApplicationWindow,
    schematic: Rc<SchematicView>,
    keybindings: Rc<Keybindings>,
    state: RefCell<RigState>,
    sender: Rc<dyn CommandSender>,
    motion_indicator: Label,
    last_schematic_size: Cell<(i32, i32)>,
    relayout_pending: Cell<bool>,
}

impl DetailWindow {
    pub fn new(app: &Application, state: RigState, sender: Rc<dyn CommandSender>) -> Rc<Self> {
        // Load CSS before creating widgets
        load_css();
        if let Some(settings) = Settings::default() {
            settings.set_gtk_application_prefer_dark_theme(true);
        }

        let window = ApplicationWindow::builder()
            .application(app)
            .title("rigctl - Rig Control")
            .default_width(400)
            .default_height(720)
            .build();

        // Header: back button, rig id, motion indicator
        let header = GtkBox::new(Orientation::Horizontal, 8);
        header.add_css_class("header-bar");
        header.set_margin_start(8);
        header.set_margin_end(8);
        header.set_margin_top(4);
        header.set_margin_bottom(4);

        let back_button = Button::with_label("[<] BACK");
        back_button.add_css_class("btn-nav");
        back_button.set_tooltip_text(Some("Dismiss the screen (Escape / q)"));

        let id_label = Label::new(Some(&state.label()));
        id_label.add_css_class("rig-id");
        id_label.set_halign(Align::Center);
        id_label.set_hexpand(true);

        let motion_indicator = Label::new(Some("MOTION -"));
        motion_indicator.add_css_class("motion-indicator");
        motion_indicator.set_halign(Align::End);

        header.append(&back_button);
        header.append(&id_label);
        header.append(&motion_indicator);

        // Schematic area between header and controls
        let schematic = SchematicView::new();

        // Control bar: movement row, then lamp effects row
        let controls = GtkBox::new(Orientation::Vertical, 6);
        controls.add_css_class("control-bar");
        controls.set_margin_start(8);
        controls.set_margin_end(8);
        controls.set_margin_top(4);
        controls.set_margin_bottom(8);

        let movement_row = GtkBox::new(Orientation::Horizontal, 8);
        movement_row.set_halign(Align::Center);
        let effects_row = GtkBox::new(Orientation::Horizontal, 8);
        effects_row.set_halign(Align::Center);
        controls.append(&movement_row);
        controls.append(&effects_row);

        let window_box = GtkBox::new(Orientation::Vertical, 0);
        window_box.append(&header);
        window_box.append(schematic.widget());
        window_box.append(&controls);
        window.set_child(Some(&window_box));

        let keybindings = Rc::new(Keybindings::new());
        keybindings.attach(&window);

        let detail_window = Rc::new(Self {
            self_weak: RefCell::new(Weak::new()),
            window,
            schematic,
            keybindings,
            state: RefCell::new(state),
            sender,
            motion_indicator,
            last_schematic_size: Cell::new((0, 0)),
            relayout_pending: Cell::new(false),
        });
        *detail_window.self_weak.borrow_mut() = Rc::downgrade(&detail_window);

        // One button per command
        for command in Command::ALL {
            let button = Button::with_label(command.label());
            button.add_css_class("btn-command");
            button.set_tooltip_text(Some(command.tooltip()));

            let weak_self = detail_window.self_weak.borrow().clone();
            button.connect_clicked(move |_| {
                if let Some(window) = weak_self.upgrade() {
                    window.dispatch(command);
                }
            });

            let row = match command {
                Command::Flash | Command::Disco => &effects_row,
                _ => &movement_row,
            };
            row.append(&button);
        }

        // Back button closes without sending
        let weak_self = detail_window.self_weak.borrow().clone();
        back_button.connect_clicked(move |_| {
            if let Some(window) = weak_self.upgrade() {
                window.dismiss();
            }
        });

        // Keyboard equivalents for every action
        let weak_self = detail_window.self_weak.borrow().clone();
        detail_window.keybindings.connect_command(move |command| {
            if let Some(window) = weak_self.upgrade() {
                window.dispatch(command);
            }
        });
        let weak_self = detail_window.self_weak.borrow().clone();
        detail_window.keybindings.connect_dismiss(move || {
            if let Some(window) = weak_self.upgrade() {
                window.dismiss();
            }
        });

        detail_window.refresh_motion_indicator();
        detail_window.setup_schematic_resize_observer();

        detail_window
    }

    pub fn present(&self) {
        self.window.present();
    }

    /// Sends exactly one message for the given action.
    fn dispatch(&self, command: Command) {
        let state = self.state.borrow();
        tracing::debug!(
            "Dispatch rig {:02}: {} {:?}",
            state.id,
            command.topic(),
            command.payload()
        );
        self.sender
            .send(state.id, command.topic(), command.payload());
    }

    /// Closes the screen. Sends nothing.
    fn dismiss(&self) {
        tracing::debug!("Dismissing rig {}", self.state.borrow().label());
        self.window.close();
    }

    /// Applies a device state update and refreshes the dependent views.
    pub fn apply_update(&self, update: StateUpdate) {
        update.apply(&mut self.state.borrow_mut());
        self.refresh_motion_indicator();
        self.relayout_now();
    }

    /// Polls device updates from the GLib main loop until the sending side
    /// of the channel goes away.
    pub fn attach_updates(self: &Rc<Self>, updates: flume::Receiver<StateUpdate>) {
        let weak_self = Rc::downgrade(self);
        glib::timeout_add_local(Duration::from_millis(16), move || {
            let Some(window) = weak_self.upgrade() else {
                return glib::ControlFlow::Break;
            };
            loop {
                match updates.try_recv() {
                    Ok(update) => window.apply_update(update),
                    Err(flume::TryRecvError::Empty) => break,
                    Err(flume::TryRecvError::Disconnected) => return glib::ControlFlow::Break,
                }
            }
            glib::ControlFlow::Continue
        });
    }

    fn refresh_motion_indicator(&self) {
        if self.state.borrow().motion {
            self.motion_indicator.add_css_class("motion-on");
            self.motion_indicator.set_text("MOTION +");
        } else {
            self.motion_indicator.remove_css_class("motion-on");
            self.motion_indicator.set_text("MOTION -");
        }
    }

    fn relayout_now(&self) {
        let state = self.state.borrow();
        self.schematic.relayout(&state);
    }

    fn schedule_relayout_debounced(&self, delay: Duration) {
        if self.relayout_pending.replace(true) {
            return;
        }
        let weak_self = self.self_weak.borrow().clone();
        glib::timeout_add_local(delay, move || {
            if let Some(window) = weak_self.upgrade() {
                window.relayout_pending.set(false);
                window.relayout_now();
            }
            glib::ControlFlow::Break
        });
    }

    fn setup_schematic_resize_observer(self: &Rc<Self>) {
        let weak_self = Rc::downgrade(self);
        let area = self.schematic.widget().clone();
        area.add_tick_callback(move |widget, _clock| {
            if let Some(window) = weak_self.upgrade() {
                let size = (widget.width(), widget.height());
                if size.0 > 0 && size.1 > 0 && size != window.last_schematic_size.get() {
                    window.last_schematic_size.set(size);
                    window.schedule_relayout_debounced(Duration::from_millis(80));
                }
            }
            glib::ControlFlow::Continue
        });
    }
}
