use clap::Parser;

use crate::error::{AppError, AppResult};

use super::RangeArgs;

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<RangeArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    RangeArgs::try_parse_from(args).map_err(AppError::from)
}
