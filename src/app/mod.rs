//! The `app` module is the core of the explorer session.
//!
//! It owns the session state, turns key presses and clicks into
//! [`CommandAction`]s and routes those to the preference stores.

/// `actions` module: the command set and its dispatcher.
mod actions;
/// `init` module: builds the `App` from settings.
mod init;
/// `keyboard` module: key bindings.
mod keyboard;
/// `mouse` module: click routing through the control registry.
mod mouse;
/// `preferences` module: language and theme toggles.
mod preferences;
/// `state` module: the `App` struct itself.
mod state;
/// `tick` module: time-based housekeeping.
mod tick;

pub use actions::CommandAction;
pub use keyboard::key_binding;
pub use state::App;
