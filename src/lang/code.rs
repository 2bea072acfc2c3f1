use crate::{lang::source_buffer::SourceLocation, runtime::data_structures::cell::Procedure};
use std::fmt::{self, Debug, Formatter};

/// One step of a compiled word.  The procedure is resolved at compile time, the location is where
/// the step appeared in the defining source and is what the call stack reports.
#[derive(Clone)]
pub struct Instruction {
    location: SourceLocation,
    procedure: Procedure,
}

/// The compiled body of a user defined word.
pub type CodeBlock = Vec<Instruction>;

impl Instruction {
    pub fn new(location: SourceLocation, procedure: Procedure) -> Instruction {
        Instruction {
            location,
            procedure,
        }
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn procedure(&self) -> &Procedure {
        &self.procedure
    }

    pub fn into_procedure(self) -> Procedure {
        self.procedure
    }
}

impl Debug for Instruction {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.procedure.name())
    }
}
