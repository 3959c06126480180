pub mod decision;
pub mod dispatcher;
pub mod topics;

pub use decision::{DecisionTree, Leaf, Outcome};
pub use dispatcher::{Dispatcher, MenuError};
pub use topics::{Topic, TOPICS, TOPIC_COUNT};
