use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use stress_meter::assess::{Answers, MAX_ANSWER};
use stress_meter::logging::{self, LogTarget};
use stress_meter::questionnaire::{export_assessment, Questionnaire};
use stress_meter::ui::{self, Theme};
use stress_meter::{events, App, ColorChoice, Settings};

#[derive(Parser, Debug)]
#[command(name = "stress-meter", version)]
#[command(about = "Check your stress level with a slider or a short questionnaire")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file (the meter never logs to the screen)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive 0-10 slider (default)
    Meter {
        /// Starting slider position
        #[arg(long)]
        level: Option<f64>,
    },

    /// Answer three questions and get a stress percentage
    Quiz {
        /// When to color the report
        #[arg(long, value_enum)]
        color: Option<ColorChoice>,

        /// Pause before the report, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Also write the result to this JSON file
        #[arg(short, long)]
        export: Option<PathBuf>,
    },

    /// Score answers given on the command line
    Score {
        /// Sleep quality last night (0=Restless, 10=Deeply Rested)
        #[arg(long, value_parser = answer_parser())]
        sleep: u8,

        /// Workload manageability (0=Overwhelmed, 10=Fully Controlled)
        #[arg(long, value_parser = answer_parser())]
        workload: u8,

        /// Current mood (0=Highly Irritable, 10=Calm and Happy)
        #[arg(long, value_parser = answer_parser())]
        mood: u8,

        /// Print the assessment as JSON instead of the report
        #[arg(long)]
        json: bool,

        /// When to color the report
        #[arg(long, value_enum)]
        color: Option<ColorChoice>,
    },
}

fn answer_parser() -> clap::builder::RangedI64ValueParser<u8> {
    clap::value_parser!(u8).range(0..=i64::from(MAX_ANSWER))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = Settings::load(args.config.as_deref())?;
    let command = args.command.unwrap_or(Command::Meter { level: None });

    let log_target = match (&args.log_file, &command) {
        (Some(path), _) => LogTarget::File(path.as_path()),
        (None, Command::Meter { .. }) => LogTarget::Disabled,
        (None, _) => LogTarget::Stderr,
    };
    logging::init(args.verbose, log_target)?;

    match command {
        Command::Meter { level } => {
            if let Some(level) = level {
                settings.initial_level = level;
                settings.validate()?;
            }
            run_meter(&settings)
        }
        Command::Quiz {
            color,
            delay_ms,
            export,
        } => {
            if let Some(color) = color {
                settings.color = color;
            }
            if let Some(delay_ms) = delay_ms {
                settings.delay_ms = delay_ms;
            }
            run_quiz(&settings, export)
        }
        Command::Score {
            sleep,
            workload,
            mood,
            json,
            color,
        } => {
            if let Some(color) = color {
                settings.color = color;
            }
            run_score(&settings, Answers::new(sleep, workload, mood), json)
        }
    }
}

/// Run the console questionnaire on stdin/stdout
fn run_quiz(settings: &Settings, export: Option<PathBuf>) -> Result<()> {
    let questionnaire = Questionnaire::from_settings(settings, settings.color.apply());
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut writer = io::stdout().lock();

    let assessment = questionnaire.run(&mut reader, &mut writer)?;

    if let Some(path) = export {
        export_assessment(&assessment, &path)?;
        writeln!(writer, "Exported result to: {}", path.display())?;
    }
    Ok(())
}

/// Score answers passed as flags
fn run_score(settings: &Settings, answers: Answers, json: bool) -> Result<()> {
    let questionnaire = Questionnaire::from_settings(settings, settings.color.apply());
    let assessment = questionnaire.assess(answers);
    let mut writer = BufWriter::new(io::stdout().lock());

    if json {
        serde_json::to_writer_pretty(&mut writer, &assessment)?;
        writeln!(writer)?;
    } else {
        write!(writer, "{}", questionnaire.report(&assessment))?;
    }
    writer.flush()?;
    Ok(())
}

/// Run the interactive meter
fn run_meter(settings: &Settings) -> Result<()> {
    // Query the background before raw mode takes over the terminal
    let theme = Theme::auto_detect();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic);
    }));

    let mut app = App::from_settings(settings, theme);
    info!(initial = app.slider(), "meter started");

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!(final_level = app.level().value(), "meter closed");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Some(event) = events::poll_event(Duration::from_millis(250))? {
            events::handle_event(app, event);
        }
    }

    Ok(())
}
