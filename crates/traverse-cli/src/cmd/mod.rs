pub mod fixture;
pub mod run;
