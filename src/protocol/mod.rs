// Wire protocol shared with the dictionary server

mod definition;

pub use definition::{DefinitionParseError, SlangDefinition};
