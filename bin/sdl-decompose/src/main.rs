mod error;
mod logger;

use std::{
    io::{Read, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use sdl_decompose::{decompose, DecompositionOptions, OperationKind};
use tracing::{debug, error};

use crate::{
    error::CliError,
    logger::{configure_logging, LoggingFormat},
};

#[derive(Parser, Debug)]
#[command(
    name = "sdl-decompose",
    version,
    about = "Decompose GraphQL SDL by operation name to produce partial SDL"
)]
struct Cli {
    /// Path to the SDL file. Reads from stdin when omitted.
    #[arg(short, long, value_name = "FILE", env = "SDL_DECOMPOSE_SDL")]
    sdl: Option<PathBuf>,
    /// Root field to decompose.
    #[arg(short, long, value_name = "NAME", env = "SDL_DECOMPOSE_OPERATION")]
    operation: String,
    /// Operation type: query, mutation or subscription.
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        env = "SDL_DECOMPOSE_TYPE",
        default_value_t = OperationKind::Query
    )]
    kind: OperationKind,
    /// Output file path. Prints to stdout when omitted.
    #[arg(long, value_name = "FILE", env = "SDL_DECOMPOSE_OUTPUT")]
    output: Option<PathBuf>,
    /// Include built-in scalar types in the collected types.
    #[arg(long, env = "SDL_DECOMPOSE_INCLUDE_BUILTINS")]
    include_builtins: bool,
    /// Remove descriptions from the output SDL.
    #[arg(long, env = "SDL_DECOMPOSE_EXCLUDE_COMMENTS")]
    exclude_comments: bool,
    /// Keep fields marked with @deprecated.
    #[arg(long, env = "SDL_DECOMPOSE_INCLUDE_DEPRECATED")]
    include_deprecated: bool,
    /// Print the whole result as JSON instead of bare SDL.
    #[arg(long, env = "SDL_DECOMPOSE_JSON")]
    json: bool,
    #[arg(
        long,
        value_enum,
        env = "SDL_DECOMPOSE_LOG_FORMAT",
        default_value_t = LoggingFormat::PrettyCompact
    )]
    log_format: LoggingFormat,
}

impl Cli {
    fn options(&self) -> DecompositionOptions {
        DecompositionOptions {
            include_builtin_scalars: self.include_builtins,
            exclude_comments: self.exclude_comments,
            include_deprecated: self.include_deprecated,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    configure_logging(cli.log_format);

    match run(&cli, std::io::stdin().lock(), &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "decomposition failed");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, stdin: impl Read, stdout: &mut impl Write) -> Result<(), CliError> {
    let full_sdl = read_sdl(cli.sdl.as_deref(), stdin)?;
    let result = decompose(&full_sdl, &cli.operation, cli.kind, &cli.options())?;

    if !result.operation_found {
        return Err(CliError::OperationNotFound {
            operation: cli.operation.clone(),
            kind: cli.kind,
        });
    }

    let rendered = if cli.json {
        serde_json::to_string_pretty(&result)?
    } else {
        result.sdl.clone()
    };

    match &cli.output {
        Some(output) => {
            std::fs::write(output, &rendered)?;
            debug!(path = %output.display(), "result written");

            let collected_types: Vec<&str> =
                result.collected_types.iter().map(String::as_str).collect();
            writeln!(stdout, "Decomposed SDL written to: {}", output.display())?;
            writeln!(stdout, "Collected types: {}", collected_types.join(", "))?;
        }
        None => writeln!(stdout, "{}", rendered)?,
    }

    Ok(())
}

fn read_sdl(path: Option<&Path>, mut stdin: impl Read) -> Result<String, CliError> {
    match path {
        Some(path) => {
            if !path.exists() {
                let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
                return Err(CliError::SdlFileNotFound(absolute));
            }

            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            let mut sdl = String::new();
            stdin.read_to_string(&mut sdl)?;

            if sdl.trim().is_empty() {
                return Err(CliError::EmptyStdin);
            }

            Ok(sdl)
        }
    }
}
