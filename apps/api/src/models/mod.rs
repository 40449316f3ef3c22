pub mod graph;
pub mod run;
