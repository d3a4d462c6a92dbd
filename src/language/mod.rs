// Language identification — script counting plus dictionary disambiguation.
//
// The script classifier tallies which writing systems appear in a text. Most
// scripts map straight to one language; Latin and Cyrillic are shared by many
// languages, so those go through a stopword-scoring disambiguator.

pub mod cyrillic;
pub mod latin;
pub mod resolver;
pub mod script;

pub use resolver::{detect_language, resolve_language, script_label, UNKNOWN};
pub use script::{classify, Script, ScriptCounts};
