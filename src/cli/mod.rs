mod args;
mod output;

pub(crate) use args::{CliArgs, OutputFormat, parse_cli};
pub(crate) use output::{
    print_banner, print_outcome, print_papers, print_subscribe_outcome,
};
