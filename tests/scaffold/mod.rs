pub mod generation;
pub mod makefile;
