use std::error::Error;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use tennis_score::{
    CompetitionFormat, MatchSheet, Side, WireScores, create_scorer_from_spec, fill_sheet,
    render_sheet, wire,
};

/// Default seed for random scorers.
const DEFAULT_SEED: u64 = 0x7E11_15C0_DE5E_ED00;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    OneSet,
    ThreeSet,
    FiveSet,
    ThreeSetMatchTiebreak,
    MatchTiebreak,
}

impl From<FormatArg> for CompetitionFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::OneSet => CompetitionFormat::OneSet,
            FormatArg::ThreeSet => CompetitionFormat::ThreeSet,
            FormatArg::FiveSet => CompetitionFormat::FiveSet,
            FormatArg::ThreeSetMatchTiebreak => CompetitionFormat::ThreeSetWithMatchTiebreak,
            FormatArg::MatchTiebreak => CompetitionFormat::MatchTiebreakOnly,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "scorecard",
    about = "Fill in a tennis match scorecard and print the saved score arrays."
)]
struct Args {
    /// Competition format of the match
    #[arg(short = 'f', long = "format", value_enum, default_value_t = FormatArg::ThreeSet)]
    format: FormatArg,

    /// Who enters the scores: human[:name] or random[:seed]
    #[arg(long = "scorer", default_value = "human")]
    scorer: String,

    /// Base seed for random scorers without an explicit seed
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Display name of the first player
    #[arg(long = "player-one")]
    player_one: Option<String>,

    /// Display name of the second player
    #[arg(long = "player-two")]
    player_two: Option<String>,

    /// Start from saved score arrays (JSON with playerOneScores/playerTwoScores)
    #[arg(long = "load")]
    load: Option<String>,

    /// Print the score arrays as JSON when done
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,

    /// Do not print the final scoreboard
    #[arg(short = 'q', long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,

    /// Log engine decisions (overridden by RUST_LOG)
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let format = CompetitionFormat::from(args.format);
    let mut builder = MatchSheet::builder(format);
    if let Some(name) = args.player_one {
        builder = builder.with_label(Side::A, name);
    }
    if let Some(name) = args.player_two {
        builder = builder.with_label(Side::B, name);
    }
    if let Some(json) = args.load.as_deref() {
        let saved: WireScores = serde_json::from_str(json)?;
        builder = builder.with_scores(&saved)?;
    }
    let mut sheet = builder.build();

    let mut scorer = create_scorer_from_spec(&args.scorer, args.seed)?;
    tracing::info!(%format, scorer = %args.scorer, "filling scorecard");
    let report = fill_sheet(&mut sheet, scorer.as_mut());
    tracing::info!(prompts = report.prompts, applied = report.applied, "scorecard filled");

    if !args.quiet {
        println!("{}", render_sheet(&sheet));
    }
    if args.json {
        println!("{}", wire::to_json(sheet.document())?);
    }
    Ok(())
}
