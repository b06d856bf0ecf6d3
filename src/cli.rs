use postfix::Strictness;

#[derive(clap::Parser, Debug)]
#[clap(about, long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// How malformed expressions are handled
    #[arg(short, long, global = true)]
    #[clap(value_enum, default_value_t = Mode::Lenient)]
    pub mode: Mode,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub(crate) enum Mode {
    Lenient,
    Balanced,
    Strict,
}

impl From<Mode> for Strictness {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Lenient => Strictness::Lenient,
            Mode::Balanced => Strictness::Balanced,
            Mode::Strict => Strictness::Strict,
        }
    }
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Command {
    /// Convert a single infix expression
    Convert { expression: String },

    /// Convert every non-empty line of a file
    File { file: std::path::PathBuf },
}
