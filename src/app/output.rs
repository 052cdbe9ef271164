use serde::Serialize;

use crate::args::OutputFormat;
use crate::editor::{MASK_TEMPLATE, TimeRange};
use crate::error::AppResult;

#[derive(Debug, Serialize)]
struct RangeOutput {
    from: Option<String>,
    to: Option<String>,
    text: String,
}

impl RangeOutput {
    fn new(range: Option<&TimeRange>) -> Self {
        match range {
            Some(range) => Self {
                from: Some(range.from_clock().format("%H:%M").to_string()),
                to: Some(range.to_clock().format("%H:%M").to_string()),
                text: range.to_string(),
            },
            None => Self {
                from: None,
                to: None,
                text: MASK_TEMPLATE.to_owned(),
            },
        }
    }
}

/// Formats the final range for stdout.
///
/// # Errors
///
/// Returns an error when JSON serialization fails.
pub(crate) fn render_output(range: Option<&TimeRange>, format: OutputFormat) -> AppResult<String> {
    let output = RangeOutput::new(range);
    match format {
        OutputFormat::Text => Ok(output.text),
        OutputFormat::Json => Ok(serde_json::to_string(&output)?),
    }
}

pub(crate) fn print_result(range: Option<&TimeRange>, format: OutputFormat) -> AppResult<()> {
    let rendered = render_output(range, format)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::render_output;
    use crate::args::OutputFormat;
    use crate::editor::TimeRange;
    use crate::error::{AppError, AppResult};

    #[test]
    fn text_output_matches_mask_layout() -> AppResult<()> {
        let range = TimeRange::from_hm(23, 45, 8, 30);
        let text = render_output(Some(&range), OutputFormat::Text)?;
        if text != "23:45 - 08:30" {
            return Err(AppError::validation(format!("Unexpected text {text}")));
        }
        if render_output(None, OutputFormat::Text)? != "hh:mm - hh:mm" {
            return Err(AppError::validation("Expected placeholder text"));
        }
        Ok(())
    }

    #[test]
    fn json_output_has_clock_fields() -> AppResult<()> {
        let range = TimeRange::from_hm(7, 5, 19, 0);
        let json = render_output(Some(&range), OutputFormat::Json)?;
        let value: serde_json::Value = serde_json::from_str(&json)?;
        if value["from"] != "07:05" || value["to"] != "19:00" || value["text"] != "07:05 - 19:00" {
            return Err(AppError::validation(format!("Unexpected json {json}")));
        }
        let empty: serde_json::Value =
            serde_json::from_str(&render_output(None, OutputFormat::Json)?)?;
        if !empty["from"].is_null() {
            return Err(AppError::validation("Expected null from"));
        }
        Ok(())
    }
}
