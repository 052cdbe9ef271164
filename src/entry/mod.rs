mod plan;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::RangeArgs;
use crate::config::{apply_config, load_config, resolve_presets};
use crate::error::AppResult;

use plan::{build_plan, execute_plan};

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;

    let config = load_config(args.config.as_deref())?;
    if let Some(config) = config.as_ref() {
        apply_config(&mut args, &matches, config)?;
    }

    crate::logger::init_logging(args.verbose, args.no_color);

    let presets = resolve_presets(config.as_ref())?;
    let plan = build_plan(args, presets)?;
    execute_plan(plan)
}

fn parse_args() -> AppResult<(RangeArgs, ArgMatches)> {
    let matches = RangeArgs::command().get_matches_from(std::env::args_os());
    let args = RangeArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}
