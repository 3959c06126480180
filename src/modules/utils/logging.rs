use env_logger::{Builder, Env, WriteStyle};
use log::{info, warn, LevelFilter};
use std::fs::OpenOptions;

/// Initialize the logging system
///
/// With a log file, records are appended to it at `Info`. Without one they go
/// to stderr filtered at `warn` (override with `RUST_LOG`) so the interactive
/// transcript stays readable.
pub fn initialize_logging(log_file: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let mut builder = match log_file {
        Some(path) => {
            // Create or append to log file
            let file = OpenOptions::new().create(true).append(true).open(path)?;

            let mut builder = Builder::new();
            builder
                .filter_level(LevelFilter::Info)
                .target(env_logger::Target::Pipe(Box::new(file)));
            builder
        }
        None => {
            let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
            builder.write_style(WriteStyle::Auto);
            builder
        }
    };

    builder
        .format_timestamp_secs()
        .format_module_path(true)
        .try_init()?;

    info!("Logging system initialized");
    Ok(())
}

/// Helper function to format sensitive data for logging
fn format_sensitive(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}***{}", head, tail)
}

/// Structured logging for authentication events
pub fn log_auth_event(event_type: &str, username: &str, success: bool, details: Option<&str>) {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    if success {
        info!(
            "Auth event: type={}, user={}, success=true, timestamp={}, details={:?}",
            event_type,
            format_sensitive(username),
            timestamp,
            details
        );
    } else {
        warn!(
            "Auth event: type={}, user={}, success=false, timestamp={}, details={:?}",
            event_type,
            format_sensitive(username),
            timestamp,
            details
        );
    }
}

/// Structured logging for a completed advisory
pub fn log_advisory(user: &str, topic: &str, outcome: &str) {
    info!(
        "Advisory: user={}, topic={}, outcome={}",
        format_sensitive(user),
        topic,
        outcome
    );
}
