pub mod menu;

pub use menu::{show_main_menu, MainMenuChoice};

use log::{debug, info};
use std::io;

use crate::modules::advisor::Dispatcher;
use crate::modules::auth::{
    handle_interactive_login, handle_interactive_registration, AuthService,
};
use crate::modules::utils::io::{ask_yes_no, Console};
use crate::modules::utils::logging::log_advisory;

/// Who, if anyone, is logged in for the current pass through the menus
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated(String),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}

/// Top-level interactive loop: outer auth menu, then the topic menu
pub struct Session<'a, C: Console + ?Sized> {
    console: &'a mut C,
    auth: &'a mut AuthService,
    dispatcher: &'a Dispatcher,
    state: SessionState,
}

impl<'a, C: Console + ?Sized> Session<'a, C> {
    pub fn new(console: &'a mut C, auth: &'a mut AuthService, dispatcher: &'a Dispatcher) -> Self {
        Self {
            console,
            auth,
            dispatcher,
            state: SessionState::Anonymous,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Run until the user chooses Exit or input runs out
    pub fn run(&mut self) -> io::Result<()> {
        match self.run_outer_menu() {
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                info!("Input closed, ending session");
                self.state = SessionState::Anonymous;
                Ok(())
            }
            other => other,
        }
    }

    fn run_outer_menu(&mut self) -> io::Result<()> {
        loop {
            show_main_menu(&mut *self.console);
            let input = self.console.read_line("Enter your choice: ")?;

            match MainMenuChoice::parse(&input) {
                Ok(MainMenuChoice::Register) => {
                    let outcome = handle_interactive_registration(&mut *self.console, &mut *self.auth)?;
                    debug!("Registration finished: {:?}", outcome);
                }
                Ok(MainMenuChoice::Login) => {
                    if let Some(username) = handle_interactive_login(&mut *self.console, &*self.auth)? {
                        self.state = SessionState::Authenticated(username);
                        self.run_topic_loop()?;
                        self.state = SessionState::Anonymous;
                    }
                }
                Ok(MainMenuChoice::Exit) => {
                    self.console.show("Goodbye!");
                    return Ok(());
                }
                Err(e) => self.console.show(&e.to_string()),
            }
        }
    }

    fn run_topic_loop(&mut self) -> io::Result<()> {
        debug_assert!(self.state.is_authenticated());
        loop {
            self.dispatcher.show_menu(&mut *self.console);
            let input = self.console.read_line("Enter your choice: ")?;

            let topic = match self.dispatcher.select(&input) {
                Ok(topic) => topic,
                Err(e) => {
                    self.console.show(&e.to_string());
                    continue;
                }
            };

            let outcome = self.dispatcher.run(&mut *self.console, topic)?;
            if let SessionState::Authenticated(username) = &self.state {
                log_advisory(username, topic.label, &outcome.to_string());
            }

            self.console.show("");
            self.console.show("Thank you for using ABC Algae Bloom Control!");

            if !ask_yes_no(&mut *self.console, "Would you like to address another problem?")? {
                self.console.show("");
                self.console
                    .show("Thank you for approaching us. Best wishes with your problem!");
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::utils::io::ScriptedConsole;
    use std::time::Duration;

    fn fixtures() -> (AuthService, Dispatcher) {
        (AuthService::new(10), Dispatcher::new(Duration::ZERO))
    }

    fn run_script(script: &[&str], auth: &mut AuthService, dispatcher: &Dispatcher) -> ScriptedConsole {
        let mut console = ScriptedConsole::new(script.iter().copied());
        let mut session = Session::new(&mut console, auth, dispatcher);
        session.run().unwrap();
        assert_eq!(session.state(), &SessionState::Anonymous);
        console
    }

    #[test]
    fn test_exit_without_authentication() {
        let (mut auth, dispatcher) = fixtures();
        let console = run_script(&["3", "never read"], &mut auth, &dispatcher);
        assert!(console.saw("Goodbye!"));
        assert_eq!(console.remaining(), 1);
    }

    #[test]
    fn test_invalid_outer_choice_reprompts() {
        let (mut auth, dispatcher) = fixtures();
        let console = run_script(&["9", "hello", "exit"], &mut auth, &dispatcher);
        assert_eq!(console.count("Invalid choice. Please try again."), 2);
        assert!(console.saw("Goodbye!"));
    }

    #[test]
    fn test_full_register_login_advise_flow() {
        let (mut auth, dispatcher) = fixtures();
        let script = [
            "1", "alice", "weak", "P@ssw0rd", // register, one rejected password
            "2", "alice", "P@ssw0rd", // login
            "42", "1", "no", "yes", // bad topic, then soil: wet
            "maybe", "yes", // another problem, after one bad answer
            "7", "yes", // pH too high
            "no", // done
            "3",
        ];
        let console = run_script(&script, &mut auth, &dispatcher);

        assert!(console.saw("Registration successful!"));
        assert!(console.saw("Login successful!"));
        assert!(console.saw("Invalid choice. Please try again."));
        assert!(console.saw("Solution: Improve drainage and reduce watering."));
        assert!(console.saw("Solution: Add sulfur or acidifiers to lower the pH."));
        assert_eq!(console.count("Thank you for using ABC Algae Bloom Control!"), 2);
        assert!(console.saw("Invalid response. Please answer with 'yes' or 'no'."));
        assert!(console.saw("Thank you for approaching us. Best wishes with your problem!"));
        assert!(console.saw("Goodbye!"));
        assert_eq!(console.remaining(), 0);
    }

    #[test]
    fn test_failed_login_returns_to_outer_menu() {
        let (mut auth, dispatcher) = fixtures();
        auth.register("alice", "P@ssw0rd").unwrap();

        let console = run_script(&["2", "alice", "nope", "3"], &mut auth, &dispatcher);

        assert!(console.saw("Invalid username or password. Please try again."));
        assert!(!console.saw("Please select the issue you are facing:"));
        assert!(console.saw("Goodbye!"));
    }

    #[test]
    fn test_duplicate_registration_through_menu() {
        let (mut auth, dispatcher) = fixtures();
        let script = [
            "1", "alice", "P@ssw0rd", //
            "1", "alice", "back", //
            "3",
        ];
        let console = run_script(&script, &mut auth, &dispatcher);

        assert_eq!(console.count("Registration successful!"), 1);
        assert!(console.saw("Username already exists. Please try again."));
        assert_eq!(auth.store().len(), 1);
    }

    #[test]
    fn test_end_of_input_ends_session_cleanly() {
        let (mut auth, dispatcher) = fixtures();
        auth.register("alice", "P@ssw0rd").unwrap();

        // Script stops in the middle of a decision procedure
        let console = run_script(&["2", "alice", "P@ssw0rd", "5", "no"], &mut auth, &dispatcher);

        assert!(console.saw("Are the banks of the water body collapsing? (yes/no): "));
        assert!(!console.saw("Goodbye!"));
    }

    #[test]
    fn test_logout_after_topics_requires_login_again() {
        let (mut auth, dispatcher) = fixtures();
        auth.register("alice", "P@ssw0rd").unwrap();
        let script = [
            "2", "alice", "P@ssw0rd", "13", "no", "no", "no", // advise once, leave
            "2", "alice", "bad", // login again fails
            "3",
        ];
        let console = run_script(&script, &mut auth, &dispatcher);

        assert!(console.saw(
            "Solution: Regularly monitor fish health and manage the ecosystem to support fish populations."
        ));
        assert_eq!(console.count("Login successful!"), 1);
        assert_eq!(console.count("Please select the issue you are facing:"), 1);
    }
}
