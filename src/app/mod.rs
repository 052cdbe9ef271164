mod headless;
mod interactive;
mod output;
mod session;

pub(crate) use headless::run_headless;
pub(crate) use interactive::run_interactive;
pub(crate) use output::print_result;
pub(crate) use session::Session;
