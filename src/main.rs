use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use owo_colors::OwoColorize;
use plaintalk::interpreter::{run_with_sink, StdoutSink};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "plaintalk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "English-like scripting language interpreter", long_about = None)]
struct Args {
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    #[arg(short, long, value_name = "SOURCE", conflicts_with = "script")]
    eval: Option<String>,

    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorChoice,

    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    #[arg(long = "dump-vars")]
    dump_vars: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Complete {
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl std::str::FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            _ => Err(format!(
                "Invalid color choice: {}. Must be 'auto', 'always', or 'never'",
                s
            )),
        }
    }
}

struct AppConfig {
    color_enabled: bool,
    verbose: bool,
    dump_vars: bool,
}

impl AppConfig {
    fn from_args(args: &Args) -> Self {
        let color_enabled = match args.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => atty::is(atty::Stream::Stderr) && atty::is(atty::Stream::Stdout),
        };

        AppConfig {
            color_enabled,
            verbose: args.verbose,
            dump_vars: args.dump_vars,
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Some(Commands::Complete { shell }) = args.command {
        generate_completions(shell);
        return;
    }

    let config = AppConfig::from_args(&args);

    verbose_log(&config, "Starting plaintalk");

    let source = match read_source(&args, &config) {
        Ok(s) => s,
        Err(e) => {
            error_message(&config, &e);
            std::process::exit(1);
        }
    };

    verbose_log(&config, &format!("Read {} bytes of source", source.len()));

    let mut sink = StdoutSink;
    match run_with_sink(&source, &mut sink) {
        Ok(env) => {
            verbose_log(&config, "Program finished");
            if config.dump_vars {
                for (name, value) in env.bindings() {
                    println!("{} = {}", name, value);
                }
            }
        }
        Err(e) => {
            error_message(&config, &e.to_string());
            std::process::exit(1);
        }
    }
}

fn read_source(args: &Args, config: &AppConfig) -> Result<String, String> {
    if let Some(source) = &args.eval {
        verbose_log(config, "Using source from command-line argument");
        return Ok(source.clone());
    }

    if let Some(script) = &args.script {
        verbose_log(
            config,
            &format!("Reading script from file: {}", script.display()),
        );
        return read_file(script);
    }

    if atty::is(atty::Stream::Stdin) {
        read_interactive(config)
    } else {
        verbose_log(config, "Reading script from stdin");
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| format!("Failed to read from stdin: {}", e))?;

        if buffer.trim().is_empty() {
            return Err(
                "No input provided. Must provide a script file, --eval, or a program via stdin"
                    .to_string(),
            );
        }

        Ok(buffer)
    }
}

fn read_interactive(config: &AppConfig) -> Result<String, String> {
    if !config.verbose {
        println!("plaintalk interactive editor");
        println!("Type your program (multi-line supported). Run it with Ctrl+D (Ctrl+Z on Windows) or type 'run' on a new line.");
        println!();
    } else {
        verbose_log(config, "Entering interactive mode");
    }

    let mut source = String::new();

    loop {
        print!("plaintalk> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {
                let trimmed = line.trim();

                if trimmed == "run" || trimmed == "exit" {
                    break;
                }

                source.push_str(&line);
            }
            Err(e) => return Err(format!("Error reading input: {}", e)),
        }
    }

    if source.trim().is_empty() {
        return Err("No program entered.".to_string());
    }

    Ok(source)
}

fn generate_completions(shell: Shell) {
    let mut cmd = Args::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, &bin_name, &mut io::stdout());
}

fn read_file(path: &Path) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e))
}

fn verbose_log(config: &AppConfig, message: &str) {
    if config.verbose {
        eprintln!("[plaintalk:debug] {}", message);
    }
}

fn error_message(config: &AppConfig, message: &str) {
    if config.color_enabled {
        eprintln!("{}", message.red().bold());
    } else {
        eprintln!("{}", message);
    }
}
