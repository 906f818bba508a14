pub mod run;
pub mod trial;
