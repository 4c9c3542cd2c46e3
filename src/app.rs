use gtk4::prelude::*;
use gtk4::{gio, Application};
use std::rc::Rc;

use crate::control::{ChannelSender, CommandSender};
use crate::models::RigState;
use crate::ui::DetailWindow;

const APP_ID: &str = "com.rigctl.Controller";

/// Application shell: presents the detail screen for one rig.
pub struct RigApp {
    app: Application,
}

impl RigApp {
    pub fn new(state: RigState, sender: ChannelSender) -> Self {
        // One process per rig; screens for different rigs run side by side.
        let app = Application::builder()
            .application_id(APP_ID)
            .flags(gio::ApplicationFlags::NON_UNIQUE)
            .build();

        app.connect_activate(move |app| {
            let sender: Rc<dyn CommandSender> = Rc::new(sender.clone());
            let window = DetailWindow::new(app, state, sender);
            window.present();
            // Keep the window alive by storing it on the Application.
            unsafe {
                app.set_data("detail-window", window);
            }
        });

        Self { app }
    }

    /// Runs the GTK main loop. Argv stays with the caller.
    pub fn run(&self) -> i32 {
        self.app.run_with_args::<&str>(&[]).into()
    }
}
