pub mod contam_commands;
pub mod pipeline;
