pub mod export;
pub mod partial;
pub mod render;
pub mod resolve;

use crate::domain::{AppError, PromptInputs};

/// Parse `NAME=VALUE` assignments into rendering inputs.
///
/// The value may contain `=`; only the first one separates name and value.
/// Later assignments of the same name win.
pub fn parse_inputs<I, S>(assignments: I) -> Result<PromptInputs, AppError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut inputs = PromptInputs::new();
    for assignment in assignments {
        let assignment = assignment.as_ref();
        let Some((name, value)) = assignment.split_once('=') else {
            return Err(AppError::InvalidVariable(assignment.to_string()));
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidVariable(assignment.to_string()));
        }
        inputs = inputs.with_var(name, value);
    }
    Ok(inputs)
}
