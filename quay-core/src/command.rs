use crate::{ParameterSet, truncate_long};
use std::fmt::{self, Display};

/// One statement to run against a connection, together with its parameters.
///
/// Created empty of parameters when the statement is constructed, mutated
/// only through [`ParameterSet`] operations and discarded with the
/// statement. A command never outlives the logical statement it binds.
#[derive(Debug, Clone, Default)]
pub struct Command {
    text: String,
    parameters: ParameterSet,
}

impl Command {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parameters: ParameterSet::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut ParameterSet {
        &mut self.parameters
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", truncate_long!(self.text))
    }
}

impl From<&str> for Command {
    fn from(text: &str) -> Self {
        Command::new(text)
    }
}

impl From<String> for Command {
    fn from(text: String) -> Self {
        Command::new(text)
    }
}
