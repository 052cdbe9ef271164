use std::io::{self, IsTerminal};

use crate::app::{Session, print_result, run_headless, run_interactive};
use crate::args::{KeyScript, OutputFormat, RangeArgs};
use crate::editor::{PresetRange, RangeEditor, SystemClock, TimeRange, preset_range};
use crate::error::{AppError, AppResult, ValidationError};

pub(super) enum RunPlan {
    Headless {
        session: Session,
        script: KeyScript,
        output_format: OutputFormat,
    },
    Interactive {
        session: Session,
        output_format: OutputFormat,
        no_color: bool,
    },
}

pub(super) fn build_plan(args: RangeArgs, presets: Vec<PresetRange>) -> AppResult<RunPlan> {
    let editor = initial_editor(&args)?;
    let session = Session::new(editor, presets);

    let interactive_capable = io::stdout().is_terminal() && io::stdin().is_terminal();
    if args.keys.is_some() || args.no_ui || !interactive_capable {
        return Ok(RunPlan::Headless {
            session,
            script: args.keys.unwrap_or_default(),
            output_format: args.output_format,
        });
    }

    Ok(RunPlan::Interactive {
        session,
        output_format: args.output_format,
        no_color: args.no_color,
    })
}

fn initial_editor(args: &RangeArgs) -> AppResult<RangeEditor> {
    let mut editor = match (args.from, args.to) {
        (Some(from), Some(to)) => RangeEditor::with_value(TimeRange::on_reference_date(from, to)),
        (None, None) => RangeEditor::new(),
        (Some(_), None) | (None, Some(_)) => {
            return Err(AppError::validation(ValidationError::IncompleteRange));
        }
    };
    if let Some(hours) = args.last_hours {
        editor.write_value(Some(preset_range(hours, &SystemClock)));
    }
    Ok(editor)
}

pub(super) fn execute_plan(plan: RunPlan) -> AppResult<()> {
    match plan {
        RunPlan::Headless {
            mut session,
            script,
            output_format,
        } => {
            run_headless(&mut session, &script);
            print_result(session.editor.value().as_ref(), output_format)
        }
        RunPlan::Interactive {
            mut session,
            output_format,
            no_color,
        } => {
            run_interactive(&mut session, no_color, &SystemClock)?;
            print_result(session.editor.value().as_ref(), output_format)
        }
    }
}
