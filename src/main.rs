//! CLI entrypoint for `pwgauge`.
//!
//! Parses command-line arguments, evaluates a password taken from the command
//! line, stdin, or an interactive masked prompt, prints a terminal report,
//! and optionally writes JSON/TXT report files when an output directory is
//! provided.
use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use colored::Colorize;
use inquire::{InquireError, Password, PasswordDisplayMode};
use log::{LevelFilter, error};
use pwgauge::{
    analysis::Analysis,
    export::{save_report_json, save_summary_txt},
    report::render_report,
};

#[derive(Parser, Debug)]
#[command(
    name = "pwgauge",
    version,
    about = "Password strength meter for the terminal",
    after_help = ABOUT_NOTES
)]
struct Args {
    /// Password to evaluate (omit to start an interactive prompt)
    password: Option<String>,

    /// Read the password from the first line of stdin
    #[arg(long = "stdin", conflicts_with = "password")]
    stdin: bool,

    /// Echo the password while typing at the interactive prompt
    #[arg(long = "show")]
    show: bool,

    /// Path to the output directory for JSON/TXT reports
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Control color output (auto, always, never)
    #[arg(long = "color", value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Suppress report output (still writes exports if -o is provided)
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

const ASCII_TITLE: &str = r#"
 ┌─┐┬ ┬┌─┐┌─┐┬ ┬┌─┐┌─┐
 ├─┘││││ ┬├─┤│ ││ ┬├┤
 ┴  └┴┘└─┘┴ ┴└─┘└─┘└─┘
"#;

const ABOUT_NOTES: &str = "Evaluation combines several signals:
  - Length: longer passwords are generally stronger
  - Character variety: lowercase, uppercase, digits, and special characters
  - Entropy: a coarse measure of the brute-force search space
  - Patterns: sequential runs, repeated runs, and keyboard rows
  - Dictionary: well-known passwords and common words

The 0-4 strength score comes from the zxcvbn heuristic; entropy, composition,
pattern, and crack-time figures are computed independently of it.

This tool is for educational purposes only. Use a password manager to generate
and store strong, unique passwords.";

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init();
}

/// Run one full evaluate/render/export cycle for a single password.
fn evaluate(password: &str, args: &Args) {
    let analysis = Analysis::of(password);
    if !args.quiet {
        println!("{}", render_report(&analysis));
    }
    if let Some(outdir) = &args.output {
        let ts = chrono::Local::now().format("%Y.%m.%d_%H.%M.%S");
        let json = outdir.join(format!("pwgauge_report_{}.json", ts));
        let txt = outdir.join(format!("pwgauge_summary_{}.txt", ts));
        if let Err(e) = save_report_json(&analysis, &json) {
            error!("failed to write {}: {}", json.display(), e);
            std::process::exit(5);
        }
        if let Err(e) = save_summary_txt(&analysis, &txt) {
            error!("failed to write {}: {}", txt.display(), e);
            std::process::exit(6);
        }
    }
}

/// Prompt loop: each entry is an independent evaluation; an empty entry or a
/// cancelled prompt ends the session.
fn run_interactive(args: &Args) {
    let display_mode = if args.show {
        PasswordDisplayMode::Full
    } else {
        PasswordDisplayMode::Masked
    };
    loop {
        let entry = Password::new("Password to evaluate:")
            .with_display_mode(display_mode)
            .without_confirmation()
            .with_help_message("press enter on an empty line or ESC to quit")
            .prompt();
        match entry {
            Ok(p) if p.is_empty() => break,
            Ok(p) => evaluate(&p, args),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => {
                error!("prompt failed: {}", e);
                std::process::exit(3);
            }
        }
    }
}

fn read_stdin_password() -> io::Result<String> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    // Keep interior whitespace; only the line ending is trimmed
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);
    // Configure color policy
    match args.color {
        ColorChoice::Always => {
            colored::control::set_override(true);
        }
        ColorChoice::Never => {
            colored::control::set_override(false);
        }
        ColorChoice::Auto => {}
    }

    if let Some(outdir) = &args.output {
        if let Err(e) = fs::create_dir_all(outdir) {
            error!(
                "failed to create output directory {}: {}",
                outdir.display(),
                e
            );
            std::process::exit(4);
        }
    }

    if !args.quiet {
        println!("{}", ASCII_TITLE.bold().green());
    }

    if args.stdin {
        match read_stdin_password() {
            Ok(password) => evaluate(&password, &args),
            Err(e) => {
                error!("failed to read password from stdin: {}", e);
                std::process::exit(3);
            }
        }
    } else if let Some(password) = args.password.clone() {
        evaluate(&password, &args);
    } else {
        run_interactive(&args);
    }
}
