use crate::modules::advisor::MenuError;
use crate::modules::utils::io::Console;

/// Options on the outer menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuChoice {
    Register,
    Login,
    Exit,
}

impl MainMenuChoice {
    /// Accepts the option number or its command word
    pub fn parse(input: &str) -> Result<Self, MenuError> {
        let choice = input.trim();
        match choice.to_lowercase().as_str() {
            "1" | "register" => Ok(MainMenuChoice::Register),
            "2" | "login" => Ok(MainMenuChoice::Login),
            "3" | "exit" => Ok(MainMenuChoice::Exit),
            _ => Err(MenuError::InvalidMenuChoice(choice.to_string())),
        }
    }
}

/// Function to show the outer menu
pub fn show_main_menu<C: Console + ?Sized>(console: &mut C) {
    console.show("");
    console.show("Welcome to ABC Algae Bloom Control");
    console.show("1. Register   (or type 'register')");
    console.show("2. Login      (or type 'login')");
    console.show("3. Exit       (or type 'exit')");
}
