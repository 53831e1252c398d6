use std::fs;
use std::path::{
    Path,
    PathBuf
};
use std::process::ExitCode;

use clap::{
    ArgAction,
    Args,
    Parser,
    Subcommand
};
use log::{
    debug,
    error,
    info
};
use serde::Deserialize;
use thiserror::Error;

use rolequest::comparison::comparisonset::ComparisonSet;
use rolequest::configuration::Configuration;
use rolequest::manager::managererror::ManagerError;
use rolequest::model::breakdown::TimeSaved;
use rolequest::model::questresult::QuestResult;
use rolequest::quest::lane::{
    ChampionType,
    Lane
};
use rolequest::quest::questerror::QuestError;
use rolequest::quest::scenario::ScenarioInput;
use rolequest::report::chart::Chart;
use rolequest::report::textreport::TextReport;
use rolequest::time::gameclock::GameTime;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Quest(#[from] QuestError),
    #[error(transparent)]
    Manager(#[from] ManagerError),
    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: std::io::Error
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error)
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Role quest completion time calculator", long_about = None)]
struct Cli {
    /// JSON file with extra or replacement quest configs (`{"quests": [...]}`)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the configured quests
    Lanes,
    /// Completion time, point breakdown and time saved for one scenario
    Calc(CalcArgs),
    /// Completion time with passive generation only
    Baseline(QuestArgs),
    /// Compare labelled scenarios read from a JSON file
    Compare(CompareArgs),
}

#[derive(Args, Debug)]
struct QuestArgs {
    /// Lane (top, mid, bot) or the name of a quest from --config
    #[arg(short, long, default_value = "mid")]
    lane: String,
}

#[derive(Args, Debug)]
struct ScenarioArgs {
    /// CS per minute in your own lane
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    cs: f64,

    /// CS per minute in other lanes
    #[arg(long = "cs-off", default_value_t = 0.0, allow_negative_numbers = true)]
    cs_off: f64,

    /// Champion damage per minute (lanes with a damage term only)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    damage: f64,

    /// melee|ranged, or 0|1
    #[arg(long)]
    champion: Option<ChampionType>,

    /// Champion takedowns (kills + assists)
    #[arg(long, default_value_t = 0)]
    takedowns: u32,

    #[arg(long, default_value_t = 0)]
    plates: u32,

    #[arg(long = "plates-off", default_value_t = 0)]
    plates_off: u32,

    #[arg(long, default_value_t = 0)]
    turrets: u32,

    #[arg(long = "turrets-off", default_value_t = 0)]
    turrets_off: u32,

    /// Dragons, heralds, barons
    #[arg(long, default_value_t = 0)]
    epics: u32,
}

impl ScenarioArgs {
    fn to_scenario(&self) -> ScenarioInput {
        ScenarioInput::default()
            .with_cs(self.cs, self.cs_off)
            .with_damage_per_minute(self.damage)
            .with_champion_type(self.champion)
            .with_takedowns(self.takedowns)
            .with_plates(self.plates, self.plates_off)
            .with_turrets(self.turrets, self.turrets_off)
            .with_epic_monsters(self.epics)
    }
}

#[derive(Args, Debug)]
struct CalcArgs {
    #[command(flatten)]
    quest: QuestArgs,

    #[command(flatten)]
    scenario: ScenarioArgs,

    /// Print the full result as JSON instead of the text report
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// Write chart series as JSON to this path
    #[arg(long)]
    chart: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct CompareArgs {
    #[command(flatten)]
    quest: QuestArgs,

    /// JSON array of `{"label": "...", "scenario": {...}}`
    #[arg(long)]
    scenarios: PathBuf,

    /// Write chart series as JSON to this path
    #[arg(long)]
    chart: Option<PathBuf>,
}

#[derive(Deserialize)]
struct LabelledScenario {
    #[serde(default)]
    label: Option<String>,
    scenario: serde_json::Value,
}

fn quest_name(lane: &str) -> String {
    lane.parse::<Lane>()
        .map(|lane| lane.config_name().to_owned())
        .unwrap_or_else(|_| lane.to_owned())
}

fn write_chart(path: &Path, chart: &Chart) -> Result<(), CliError> {
    fs::write(path, chart.to_json()?).map_err(|source| CliError::Io {
        path: path.to_owned(),
        source,
    })?;
    info!("chart written to {}", path.display());
    Ok(())
}

fn print_lanes(configuration: &Configuration) -> Result<(), CliError> {
    let manager = configuration.quest_config_manager();
    for name in manager.names() {
        let config = manager.get(&name)?;
        println!(
            "{:<12}{:<6}{:>6} pts  {:>5} pts/min from {}",
            name,
            config.lane(),
            config.total_points(),
            config.passive_points_per_minute(),
            GameTime::from_minutes(config.passive_start_minutes())
        );
    }
    Ok(())
}

fn calc(configuration: &Configuration, args: &CalcArgs) -> Result<(), CliError> {
    let model = configuration.model(&quest_name(&args.quest.lane))?;
    let scenario = args.scenario.to_scenario();
    debug!("scenario: {:?}", scenario);
    let result = model.compute(&scenario)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", TextReport::new(&result));
    }
    if let Some(path) = &args.chart {
        write_chart(path, &Chart::build(&model, Some(&result), &ComparisonSet::new())?)?;
    }
    Ok(())
}

fn baseline(configuration: &Configuration, args: &QuestArgs) -> Result<(), CliError> {
    let model = configuration.model(&quest_name(&args.lane))?;
    let completion = model.baseline()?;
    println!("{} passive only: {}", model.config().name(), completion);
    Ok(())
}

fn compare(configuration: &Configuration, args: &CompareArgs) -> Result<(), CliError> {
    let model = configuration.model(&quest_name(&args.quest.lane))?;
    let text = fs::read_to_string(&args.scenarios).map_err(|source| CliError::Io {
        path: args.scenarios.clone(),
        source,
    })?;
    let labelled: Vec<LabelledScenario> = serde_json::from_str(&text)?;

    let mut comparisons = ComparisonSet::new();
    for item in labelled {
        let scenario = ScenarioInput::from_json(item.scenario)?;
        let result: QuestResult = model.compute(&scenario)?;
        comparisons.add(item.label.as_deref(), &result);
    }

    let baseline = model.baseline()?;
    println!("{} baseline (passive only): {}", model.config().name(), baseline);
    for entry in &comparisons {
        let saved = TimeSaved::between(entry.completion(), baseline);
        println!("  {:<48}{:>8}  saves {}", entry.label(), entry.completion().to_string(), saved);
    }
    if let Some(path) = &args.chart {
        write_chart(path, &Chart::build(&model, None, &comparisons)?)?;
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let configuration = match &cli.config {
        Some(path) => Configuration::from_reader(path)?,
        None => Configuration::new(),
    };
    match &cli.command {
        Command::Lanes => print_lanes(&configuration),
        Command::Calc(args) => calc(&configuration, args),
        Command::Baseline(args) => baseline(&configuration, args),
        Command::Compare(args) => compare(&configuration, args),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
