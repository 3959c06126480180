use std::fmt;
use std::io;
use std::time::Duration;

use super::decision::Outcome;
use super::topics::{Topic, TOPICS};
use crate::modules::utils::io::Console;

/// Menu input that does not name an available option
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    InvalidMenuChoice(String),
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuError::InvalidMenuChoice(_) => write!(f, "Invalid choice. Please try again."),
        }
    }
}

impl std::error::Error for MenuError {}

/// Maps menu selections to topics and runs their decision trees
pub struct Dispatcher {
    topics: &'static [Topic],
    pause: Duration,
}

impl Dispatcher {
    /// Dispatcher over the built-in topic table
    pub fn new(pause: Duration) -> Self {
        Self::with_topics(&TOPICS, pause)
    }

    pub fn with_topics(topics: &'static [Topic], pause: Duration) -> Self {
        Self { topics, pause }
    }

    pub fn topics(&self) -> &'static [Topic] {
        self.topics
    }

    /// Print the numbered topic list
    pub fn show_menu<C: Console + ?Sized>(&self, console: &mut C) {
        console.show("");
        console.show("Welcome to ABC Algae Bloom Control!");
        console.show("Please select the issue you are facing:");
        for topic in self.topics {
            console.show(&format!("{}. {}", topic.id, topic.label));
        }
    }

    /// Look up a topic by the id typed at the menu
    pub fn select(&self, input: &str) -> Result<&'static Topic, MenuError> {
        let choice = input.trim();
        // Exact id text only: "01" and "+1" are not menu entries
        self.topics
            .iter()
            .find(|topic| topic.id.to_string() == choice)
            .ok_or_else(|| MenuError::InvalidMenuChoice(choice.to_string()))
    }

    /// Walk a topic's tree and print the advice it lands on
    pub fn run<C: Console + ?Sized>(&self, console: &mut C, topic: &Topic) -> io::Result<Outcome> {
        console.show("");
        console.show(topic.intro);

        let outcome = topic.tree.walk(console)?;
        let leaf = topic.tree.leaf(outcome);
        console.show(&format!("Solution: {}", leaf.solution));
        console.show(&format!("Explanation: {}", leaf.explanation));

        console.pause(self.pause);
        Ok(outcome)
    }
}
