// alco: Alpha compiler front end

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser as _;

use alco::diagnostics::Reporter;
use alco::env::{Bits, CompilationEnvironment, WarningToggle};
use alco::errors::CompileError;
use alco::parser::{lint, tokenize, Parser};
use alco::source::SourceText;

#[derive(clap::Parser)]
#[command(name = "alco")]
#[command(about = "Front end of the Alpha compiler")]
struct Args {
    /// Target word width in bits: 32 or 64 (default: host)
    #[arg(short = 'm', long = "machine", value_name = "BITS")]
    machine: Option<Bits>,

    /// Turn a warning on or off: octalish, no-octalish
    #[arg(short = 'W', value_name = "WARNING")]
    warnings: Vec<WarningToggle>,

    /// Print the tokens of the first source file and exit
    #[arg(long)]
    tokens: bool,

    /// Print the parsed file header of the first source file and exit
    #[arg(long = "pre-ast")]
    pre_ast: bool,

    /// Report progress on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Source files (.al) and objects (.o)
    sources: Vec<PathBuf>,
}

/// Whether to go on to the next file after one is done.
enum Step {
    Continue,
    Stop,
}

impl Args {
    fn environment(&self) -> CompilationEnvironment {
        let mut env = CompilationEnvironment::new(self.machine.unwrap_or_default());
        for toggle in &self.warnings {
            env.warnings.set(*toggle);
        }
        env
    }
}

fn program_name() -> String {
    std::env::args()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .and_then(|name| name.to_str())
        .unwrap_or("alco")
        .to_string()
}

/// The `.al` files to compile, in command-line order. Object files are
/// accepted and left for the linker.
fn collect_sources(args: &Args) -> Result<Vec<&Path>, CompileError> {
    if args.sources.is_empty() {
        return Err(CompileError::NoSources);
    }

    let mut sources = Vec::new();
    for path in &args.sources {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("al") => sources.push(path.as_path()),
            Some("o") => {
                if args.verbose {
                    eprintln!("Skipping object file {}", path.display());
                }
            }
            _ => {
                return Err(CompileError::UnknownSourceType {
                    path: path.display().to_string(),
                })
            }
        }
    }
    Ok(sources)
}

fn compile(
    source: &SourceText,
    env: &CompilationEnvironment,
    args: &Args,
    reporter: &Reporter,
) -> Result<Step, CompileError> {
    if args.verbose {
        eprintln!("Lexing {}...", source.name());
    }
    let mut tokens = tokenize(source)?;
    if args.verbose {
        eprintln!("Lexed {} tokens.", tokens.len());
    }

    if args.tokens {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        tokens
            .dump(&mut out)
            .and_then(|()| out.flush())
            .map_err(|err| CompileError::Io {
                path: PathBuf::from("<stdout>"),
                source: err,
            })?;
        return Ok(Step::Stop);
    }

    for warning in lint::check_tokens(&tokens, &env.warnings) {
        reporter.emit_warning(&warning);
    }

    let header = Parser::new(&mut tokens, env).parse_file(source.name())?;
    if args.verbose {
        eprintln!("Parsed header of {}: {}", source.name(), header);
    }

    if args.pre_ast {
        println!("{}", header);
        return Ok(Step::Stop);
    }

    Ok(Step::Continue)
}

fn main() -> ExitCode {
    let args = Args::parse();
    let reporter = Reporter::new(program_name());
    let env = args.environment();

    if args.verbose {
        eprintln!("Target: {}-bit", env.bits);
    }

    let sources = match collect_sources(&args) {
        Ok(sources) => sources,
        Err(err) => {
            reporter.emit_error(&err);
            return ExitCode::FAILURE;
        }
    };

    for path in sources {
        let source = match SourceText::load(path) {
            Ok(source) => source,
            Err(err) => {
                reporter.emit_error(&err);
                return ExitCode::FAILURE;
            }
        };

        let file_reporter = reporter.for_source(&source);
        match compile(&source, &env, &args, &file_reporter) {
            Ok(Step::Continue) => {}
            Ok(Step::Stop) => break,
            Err(err) => {
                file_reporter.emit_error(&err);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
