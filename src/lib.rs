// First, declare the modules folder itself
mod modules;

// Re-export everything from modules for easier access
pub use modules::{advisor, auth, config, encryption, session, utils};

// Re-export commonly used types
pub use modules::advisor::Dispatcher;
pub use modules::auth::AuthService;
pub use modules::config::AdvisorConfig;
pub use modules::session::Session;
pub use modules::utils::io::{Console, ScriptedConsole, TerminalConsole};

// Constants
pub const APP_NAME: &str = "abc-advisor";
pub const DEFAULT_PAUSE_MILLIS: u64 = 2000;
pub const DEFAULT_HASH_ITERATIONS: u32 = 100_000;

// Type aliases
pub type HmacSha256 = hmac::Hmac<sha2::Sha256>;
