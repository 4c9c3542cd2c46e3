//! Control surface for a motorized hanging-light rig.
//!
//! Renders a schematic of one rig's physical state (rope, lamp, floor line,
//! falling object) and forwards user actions as `(topic, payload)` command
//! messages through an injected sender. Transport is out of scope: the
//! channel ends handed out by [`control::ChannelSender`] and consumed by
//! [`ui::DetailWindow::attach_updates`] are the boundary to the connection
//! layer.

pub mod app;
pub mod control;
pub mod layout;
pub mod models;
pub mod ui;
