use clap::Parser;

use crate::error::{AppError, AppResult};

use super::ThorArgs;

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<ThorArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    ThorArgs::try_parse_from(args).map_err(AppError::from)
}
