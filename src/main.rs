use std::env;
use std::ffi::OsStr;
use std::io;

use anyhow::Context as _;
use log::info;
use seahorse::{App, Command, Context, Flag, FlagType};

use vacation_planner::input::{Config, SourceKind};
use vacation_planner::sink::{JsonSink, TaskBoardSink};
use vacation_planner::time::Date;

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    run();
}

mod seahorse_exts {
    use std::path::PathBuf;

    use anyhow::Context as _;
    use log::error;
    use seahorse::Context;

    pub fn exit_on_error(result: anyhow::Result<()>) {
        if let Err(e) = result {
            error!("{:?}", e);
            ::std::process::exit(1);
        }
    }

    pub trait ContextExt {
        fn context(&self) -> &Context;

        fn optional_string_flag(&self, name: &str) -> Option<String> {
            self.context().string_flag(name).ok()
        }

        fn required_string_flag(&self, name: &str) -> Result<String, anyhow::Error> {
            self.optional_string_flag(name)
                .with_context(|| anyhow::anyhow!("missing required flag \"{}\"", name))
        }

        fn required_path_flag(&self, name: &str) -> Result<PathBuf, anyhow::Error> {
            self.required_string_flag(name).map(PathBuf::from)
        }

        fn optional_usize_flag(&self, name: &str) -> Result<Option<usize>, anyhow::Error> {
            self.optional_string_flag(name)
                .map(|value| {
                    value
                        .parse::<usize>()
                        .with_context(|| format!("invalid value for flag \"{}\": {}", name, value))
                })
                .transpose()
        }
    }

    impl ContextExt for Context {
        fn context(&self) -> &Context {
            self
        }
    }
}

use seahorse_exts::{exit_on_error, ContextExt};

fn build_config(context: &Context) -> anyhow::Result<Config> {
    let mut config = Config::try_from_toml_file(context.required_path_flag("config")?)?;

    if let Some(start) = context.optional_string_flag("start") {
        config.start(start.parse::<Date>()?);
    }

    if let Some(end) = context.optional_string_flag("end") {
        config.end(end.parse::<Date>()?);
    }

    if let Some(min_run_length) = context.optional_usize_flag("min-run")? {
        config.min_run_length(min_run_length);
    }

    if let Some(max_bridge_gap) = context.optional_usize_flag("max-gap")? {
        config.max_bridge_gap(max_bridge_gap);
    }

    if let Some(source) = context.optional_string_flag("source") {
        config.source(source.parse::<SourceKind>()?);
    }

    let config = config.build()?;

    info!("finished building config");

    Ok(config)
}

fn suggest(context: &Context) -> anyhow::Result<()> {
    let config = build_config(context)?;
    let holidays = config.holidays()?;

    let suggestions = config.planner().suggestions(&holidays, config.range())?;
    info!("found {} suggestions in {}", suggestions.len(), config.range());

    JsonSink::new(io::stdout()).publish(&suggestions)
}

fn runs(context: &Context) -> anyhow::Result<()> {
    let config = build_config(context)?;
    let holidays = config.holidays()?;

    let runs = config.planner().runs(&holidays, config.range());
    info!("found {} runs in {}", runs.len(), config.range());

    JsonSink::new(io::stdout()).write(&runs)
}

fn board(context: &Context) -> anyhow::Result<()> {
    let config = build_config(context)?;
    let mut board = config.task_board()?;
    let holidays = config.holidays()?;

    let suggestions = config.planner().suggestions(&holidays, config.range())?;

    board
        .publish(&suggestions)
        .context("failed to publish the suggestions")?;

    info!("published {} suggestions", suggestions.len());

    Ok(())
}

fn flags(command: Command) -> Command {
    command
        .flag(Flag::new("config", FlagType::String).description("Path to the config file."))
        .flag(
            Flag::new("start", FlagType::String)
                .description("[optional] The first day of the range, like 2024-01-01."),
        )
        .flag(
            Flag::new("end", FlagType::String)
                .description("[optional] The last day of the range, like 2024-12-31."),
        )
        .flag(
            Flag::new("min-run", FlagType::String)
                .description("[optional] The minimum number of consecutive free days of a run."),
        )
        .flag(
            Flag::new("max-gap", FlagType::String)
                .description("[optional] The maximum number of days between two runs."),
        )
        .flag(
            Flag::new("source", FlagType::String)
                .description("[optional] Where the holidays come from: google, file or austria."),
        )
}

fn run() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or(env!("CARGO_PKG_NAME"), String::as_str);

    let suggest_command = flags(
        Command::new("suggest")
            .usage(format!("{} suggest --config planner.toml [args]", program))
            .description("Prints the suggested vacations as json."),
    )
    .action(|context: &Context| exit_on_error(suggest(context)));

    let runs_command = flags(
        Command::new("runs")
            .usage(format!("{} runs --config planner.toml [args]", program))
            .description("Prints the runs of free days as json."),
    )
    .action(|context: &Context| exit_on_error(runs(context)));

    let board_command = flags(
        Command::new("board")
            .usage(format!("{} board --config planner.toml [args]", program))
            .description("Puts the suggested vacations on a new trello board."),
    )
    .action(|context: &Context| exit_on_error(board(context)));

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [command] [args]", program))
        .command(suggest_command)
        .command(runs_command)
        .command(board_command);

    app.run(args);
}
