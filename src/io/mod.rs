pub mod output;
pub mod writers;
