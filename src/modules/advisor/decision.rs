use std::fmt;
use std::io;

use crate::modules::utils::io::{ask_yes_no, Console};

/// Terminal advice at the end of a decision path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leaf {
    pub solution: &'static str,
    pub explanation: &'static str,
}

/// Which of the three leaves a walk ended on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Primary,   // first question answered yes
    Secondary, // first no, follow-up yes
    Fallback,  // both no
}

impl Outcome {
    /// Pure mapping from the two answers; `second` is ignored when `first` is yes
    pub fn from_answers(first: bool, second: bool) -> Self {
        match (first, second) {
            (true, _) => Outcome::Primary,
            (false, true) => Outcome::Secondary,
            (false, false) => Outcome::Fallback,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Primary => write!(f, "primary"),
            Outcome::Secondary => write!(f, "secondary"),
            Outcome::Fallback => write!(f, "fallback"),
        }
    }
}

/// Two-question yes/no tree shared by every topic
///
/// ```text
/// question --yes--> yes
///    |no
/// follow_up --yes--> follow_up_yes
///    |no
/// fallback
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionTree {
    pub question: &'static str,
    pub yes: Leaf,
    pub follow_up: &'static str,
    pub follow_up_yes: Leaf,
    pub fallback: Leaf,
}

impl DecisionTree {
    pub fn leaf(&self, outcome: Outcome) -> &Leaf {
        match outcome {
            Outcome::Primary => &self.yes,
            Outcome::Secondary => &self.follow_up_yes,
            Outcome::Fallback => &self.fallback,
        }
    }

    pub fn resolve(&self, first: bool, second: bool) -> &Leaf {
        self.leaf(Outcome::from_answers(first, second))
    }

    /// Ask the questions on `console`; the follow-up is only asked after a "no"
    pub fn walk<C: Console + ?Sized>(&self, console: &mut C) -> io::Result<Outcome> {
        if ask_yes_no(console, self.question)? {
            return Ok(Outcome::Primary);
        }
        let second = ask_yes_no(console, self.follow_up)?;
        Ok(Outcome::from_answers(false, second))
    }
}
