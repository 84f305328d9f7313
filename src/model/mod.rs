pub mod idea;
pub mod issue;
