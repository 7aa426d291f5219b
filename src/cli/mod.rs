mod args;
mod styles;

pub(crate) use args::{CliArgs, parse_cli};
