use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Which fragment the split command prints
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Part {
    /// Lines belonging to the keys
    Extracted,
    /// Everything else
    Remainder,
    /// Both, each under a header
    #[default]
    Both,
}

/// Arguments for the split command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show both fragments for the device keys:\n    cfgmigrate split /etc/thermal-uploader.yaml\n\n\
                  Print only what would be extracted for custom keys:\n    cfgmigrate split conf.yaml -k id -k owner --part extracted")]
pub struct SplitArgs {
    /// YAML file to split
    pub file: PathBuf,

    /// Key to extract; repeat for several (defaults to the configured keys)
    #[arg(long = "key", short = 'k', value_name = "KEY")]
    pub keys: Vec<String>,

    /// Fragment to print
    #[arg(long, value_enum, default_value_t = Part::Both)]
    pub part: Part,

    /// Keep comment lines at the end of the file in the remainder
    #[arg(long)]
    pub keep_trailing_comments: bool,
}
