//! UI effect types.
//!
//! The reducer never touches the trigger or the terminal; it returns
//! effects and the runtime executes them. This keeps the reducer a pure
//! function of state and event.

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,
    /// Ask the trigger to open the wallet picker with the host wallet list.
    OpenPicker,
}
