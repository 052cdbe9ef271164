mod app;
mod args;
mod config;
mod editor;
mod entry;
mod error;
mod logger;
mod ui;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
