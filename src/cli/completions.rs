use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    cfgmigrate completions bash > ~/.bash_completion.d/cfgmigrate\n\n\
                  Generate zsh completions:\n    cfgmigrate completions zsh > ~/.zfunc/_cfgmigrate\n\n\
                  Generate fish completions:\n    cfgmigrate completions fish > ~/.config/fish/completions/cfgmigrate.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
