pub mod io;
pub mod logging;
pub mod time;

pub use io::{ask_yes_no, Console, ScriptedConsole, TerminalConsole};
