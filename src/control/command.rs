//! Outbound command actions and their wire literals.

/// A user action on the detail screen, mapped to the `(topic, payload)`
/// pair the device understands. Payloads are the exact strings the
/// firmware parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Halt movement and switch automation off.
    Stop,
    /// Let the rig follow its motion sensor.
    AutomateOn,
    /// Back to manual control.
    AutomateOff,
    /// Wind the rope up.
    TurnUp,
    /// Pay the rope out.
    TurnDown,
    /// Re-seat the position counter at 100 cm.
    Reset,
    /// Pulse the lamp for 500 ms.
    Flash,
    /// Random lamp colors.
    Disco,
}

impl Command {
    /// Every command, in control-bar order.
    pub const ALL: [Command; 8] = [
        Command::Stop,
        Command::AutomateOn,
        Command::AutomateOff,
        Command::TurnUp,
        Command::TurnDown,
        Command::Reset,
        Command::Flash,
        Command::Disco,
    ];

    /// Message topic for this command.
    pub fn topic(self) -> &'static str {
        match self {
            Command::Stop => "stop",
            Command::AutomateOn | Command::AutomateOff => "naos/set/automate",
            Command::TurnUp | Command::TurnDown => "turn",
            Command::Reset => "reset",
            Command::Flash => "flash",
            Command::Disco => "disco",
        }
    }

    /// Message payload for this command.
    pub fn payload(self) -> &'static str {
        match self {
            Command::Stop | Command::Disco => "",
            Command::AutomateOn => "on",
            Command::AutomateOff => "off",
            Command::TurnUp => "up",
            Command::TurnDown => "down",
            Command::Reset => "100",
            Command::Flash => "500",
        }
    }

    /// Control-bar button label.
    pub fn label(self) -> &'static str {
        match self {
            Command::Stop => "[STOP]",
            Command::AutomateOn => "[AUTO ON]",
            Command::AutomateOff => "[AUTO OFF]",
            Command::TurnUp => "[UP]",
            Command::TurnDown => "[DOWN]",
            Command::Reset => "[RESET]",
            Command::Flash => "[FLASH]",
            Command::Disco => "[DISCO]",
        }
    }

    /// Button tooltip, with the keyboard shortcut.
    pub fn tooltip(self) -> &'static str {
        match self {
            Command::Stop => "Stop all movement (s)",
            Command::AutomateOn => "Follow the motion sensor (a)",
            Command::AutomateOff => "Back to manual control (Shift+A)",
            Command::TurnUp => "Wind the rope up (Up / k)",
            Command::TurnDown => "Pay the rope out (Down / j)",
            Command::Reset => "Re-seat the position counter at 100 (r)",
            Command::Flash => "Pulse the lamp for 500 ms (f)",
            Command::Disco => "Random lamp colors (d)",
        }
    }
}
