// Keybindings for the rig detail screen
// Every control-bar action has a keyboard equivalent
//
// Keybindings:
// - s: Stop
// - a / Shift+A: Automation on / off
// - Up or k: Turn up
// - Down or j: Turn down
// - r: Reset position counter
// - f: Flash
// - d: Disco
// - Escape / q: Dismiss the screen

use gdk4::Key;
use gtk4::prelude::*;
use gtk4::{EventControllerKey, PropagationPhase, Widget};
use std::cell::RefCell;
use std::rc::Rc;

use crate::control::Command;

/// What a key press asks the screen to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Send the command to the rig.
    Command(Command),
    /// Close the screen without sending anything.
    Dismiss,
}

/// Maps a key press to its screen action.
pub fn action_for_key(keyval: Key) -> Option<KeyAction> {
    match keyval {
        Key::s => Some(KeyAction::Command(Command::Stop)),
        Key::a => Some(KeyAction::Command(Command::AutomateOn)),
        Key::A => Some(KeyAction::Command(Command::AutomateOff)),
        Key::Up | Key::k => Some(KeyAction::Command(Command::TurnUp)),
        Key::Down | Key::j => Some(KeyAction::Command(Command::TurnDown)),
        Key::r => Some(KeyAction::Command(Command::Reset)),
        Key::f => Some(KeyAction::Command(Command::Flash)),
        Key::d => Some(KeyAction::Command(Command::Disco)),
        Key::Escape | Key::q => Some(KeyAction::Dismiss),
        _ => None,
    }
}

/// Callback type for command dispatch
pub type CommandCallback = Box<dyn Fn(Command)>;
/// Callback type for dismissing the screen
pub type DismissCallback = Box<dyn Fn()>;

/// Keybinding manager for the detail screen
pub struct Keybindings {
    controller: EventControllerKey,
    on_command: Rc<RefCell<Option<CommandCallback>>>,
    on_dismiss: Rc<RefCell<Option<DismissCallback>>>,
}

impl Keybindings {
    /// Create a new keybinding manager
    pub fn new() -> Self {
        let controller = EventControllerKey::new();
        controller.set_propagation_phase(PropagationPhase::Capture);

        let on_command: Rc<RefCell<Option<CommandCallback>>> = Rc::new(RefCell::new(None));
        let on_dismiss: Rc<RefCell<Option<DismissCallback>>> = Rc::new(RefCell::new(None));

        let on_command_clone = on_command.clone();
        let on_dismiss_clone = on_dismiss.clone();

        controller.connect_key_pressed(move |_controller, keyval, _keycode, _state| {
            match action_for_key(keyval) {
                Some(KeyAction::Command(command)) => {
                    if let Some(ref callback) = *on_command_clone.borrow() {
                        callback(command);
                    }
                    glib::Propagation::Stop
                }
                Some(KeyAction::Dismiss) => {
                    if let Some(ref callback) = *on_dismiss_clone.borrow() {
                        callback();
                    }
                    glib::Propagation::Stop
                }
                None => glib::Propagation::Proceed,
            }
        });

        Self {
            controller,
            on_command,
            on_dismiss,
        }
    }

    /// Attach keybindings to a widget (typically the window)
    pub fn attach(&self, widget: &impl IsA<Widget>) {
        widget.add_controller(self.controller.clone());
    }

    /// Connect callback for command dispatch
    pub fn connect_command<F>(&self, callback: F)
    where
        F: Fn(Command) + 'static,
    {
        *self.on_command.borrow_mut() = Some(Box::new(callback));
    }

    /// Connect callback for dismissing the screen
    pub fn connect_dismiss<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        *self.on_dismiss.borrow_mut() = Some(Box::new(callback));
    }
}

impl Default for Keybindings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_command_has_a_key() {
        let bound: Vec<Command> = [
            Key::s,
            Key::a,
            Key::A,
            Key::Up,
            Key::Down,
            Key::r,
            Key::f,
            Key::d,
        ]
        .into_iter()
        .map(|key| match action_for_key(key) {
            Some(KeyAction::Command(command)) => command,
            other => panic!("expected a command, got {:?}", other),
        })
        .collect();

        assert_eq!(bound, Command::ALL);
    }

    #[test]
    fn test_vi_aliases_match_arrows() {
        assert_eq!(action_for_key(Key::k), action_for_key(Key::Up));
        assert_eq!(action_for_key(Key::j), action_for_key(Key::Down));
    }

    #[test]
    fn test_dismiss_keys_send_no_command() {
        assert_eq!(action_for_key(Key::Escape), Some(KeyAction::Dismiss));
        assert_eq!(action_for_key(Key::q), Some(KeyAction::Dismiss));
    }

    #[test]
    fn test_unbound_keys_pass_through() {
        assert_eq!(action_for_key(Key::x), None);
        assert_eq!(action_for_key(Key::space), None);
        assert_eq!(action_for_key(Key::Return), None);
    }
}
