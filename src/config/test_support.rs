use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::RangeArgs;
use crate::error::{AppError, AppResult};

pub(crate) fn parse_with_matches(argv: &[&str]) -> AppResult<(RangeArgs, ArgMatches)> {
    let matches = RangeArgs::command().try_get_matches_from(argv)?;
    let args = RangeArgs::from_arg_matches(&matches).map_err(AppError::from)?;
    Ok((args, matches))
}
