pub mod commands;
pub mod dimension;
pub mod output_format;
pub mod session_command;
