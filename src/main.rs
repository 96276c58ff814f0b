// algotrace: step-through algorithm tracer with a playback TUI

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::{Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use algotrace::generators::Algorithm;
use algotrace::input::{self, XorShift64, MAX_INPUT_LEN, MAX_VALUE, MIN_INPUT_LEN, MIN_VALUE};
use algotrace::playback::{DEFAULT_SPEED_MS, MAX_SPEED_MS, MIN_SPEED_MS};
use algotrace::ui::App;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    Bubble,
    Selection,
    BinarySearch,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Bubble => Algorithm::BubbleSort,
            AlgorithmArg::Selection => Algorithm::SelectionSort,
            AlgorithmArg::BinarySearch => Algorithm::BinarySearch,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "algotrace")]
#[command(about = "Step through sorting and searching algorithms one snapshot at a time")]
#[command(version)]
struct Cli {
    /// Algorithm to trace
    #[arg(short, long, value_enum, default_value = "bubble")]
    algorithm: AlgorithmArg,

    /// Input array, e.g. "5,2,8,1,9" or "[5, 2, 8, 1, 9]"
    #[arg(short, long, conflicts_with = "random")]
    input: Option<String>,

    /// Use a random array of this many elements
    #[arg(long)]
    random: Option<usize>,

    /// Seed for random arrays
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Value to search for (binary search; defaults to the median)
    #[arg(short, long, allow_negative_numbers = true)]
    target: Option<i64>,

    /// Delay between automatic steps in milliseconds
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_SPEED_MS,
        value_parser = clap::value_parser!(u64).range(MIN_SPEED_MS..=MAX_SPEED_MS)
    )]
    speed: u64,

    /// Pseudocode line to break on (repeatable)
    #[arg(short = 'b', long = "break")]
    breakpoints: Vec<usize>,

    /// Print the step sequence as JSON and exit
    #[arg(long)]
    dump: bool,

    /// Write logs to this file while the TUI is running
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if cli.dump {
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(io::stderr)
            .init();
    } else if let Some(path) = &cli.log_file {
        // Never log to the terminal the TUI owns
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let algorithm = Algorithm::from(cli.algorithm);
    let mut rng = XorShift64::new(cli.seed);

    let values = match (&cli.input, cli.random) {
        (Some(text), _) => match input::parse_array(text) {
            Ok(values) => values,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        (None, size) => {
            let size = size.unwrap_or(8).clamp(MIN_INPUT_LEN, MAX_INPUT_LEN);
            input::random_array(&mut rng, size, MIN_VALUE, MAX_VALUE)
        }
    };

    let mut app = match App::new(algorithm, values, cli.target, rng) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    app.controller.set_speed(cli.speed);
    for &line in &cli.breakpoints {
        if !app.controller.has_breakpoint(line) {
            app.controller.toggle_breakpoint(line);
        }
    }

    if cli.dump {
        tracing::info!(
            algorithm = %algorithm,
            steps = app.controller.len(),
            "dumping trace"
        );
        println!("{}", serde_json::to_string_pretty(app.controller.steps())?);
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_outside_controller_range_is_rejected() {
        assert!(Cli::try_parse_from(["algotrace", "--speed", "10"]).is_err());
        assert!(Cli::try_parse_from(["algotrace", "--speed", "10000"]).is_err());

        let cli = Cli::try_parse_from(["algotrace", "--speed", "50"]).expect("lower bound");
        assert_eq!(cli.speed, MIN_SPEED_MS);
        let cli = Cli::try_parse_from(["algotrace", "--speed", "5000"]).expect("upper bound");
        assert_eq!(cli.speed, MAX_SPEED_MS);
    }
}
