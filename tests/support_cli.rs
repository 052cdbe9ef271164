use std::ffi::OsStr;
use std::process::{Command, Output};

/// Run the `rangemask` binary with piped stdio and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_rangemask<I, S>(args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = rangemask_bin()?;
    Command::new(bin)
        .args(args)
        .env("RANGEMASK_LOG", "error")
        .env_remove("NO_COLOR")
        .output()
        .map_err(|err| format!("run rangemask failed: {}", err))
}

/// Run the binary and return its trimmed stdout, failing on a non-zero exit.
///
/// # Errors
///
/// Returns an error if the binary fails or exits unsuccessfully.
pub fn stdout_of<I, S>(args: I) -> Result<String, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = run_rangemask(args)?;
    if !output.status.success() {
        return Err(format!(
            "stdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_owned())
}

fn rangemask_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_rangemask").map_or_else(
        || Err("CARGO_BIN_EXE_rangemask missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
