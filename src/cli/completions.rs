use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    weft completions bash > ~/.bash_completion.d/weft\n\n\
                  Generate zsh completions:\n    weft completions zsh > ~/.zfunc/_weft\n\n\
                  Generate fish completions:\n    weft completions fish > ~/.config/fish/completions/weft.fish\n\n\
                  Generate PowerShell completions:\n    weft completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
