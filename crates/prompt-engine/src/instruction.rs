//! System instruction sent with every remote rewrite

use prompt_core::AnalysisResult;

use crate::templates::{SYSTEM_INSTRUCTION_PREAMBLE, SYSTEM_INSTRUCTION_TASK};

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Build the rewrite instruction for an analyzed prompt
pub fn build_system_instruction(analysis: &AnalysisResult) -> String {
    let characteristics = &analysis.characteristics;
    let length = if characteristics.is_too_short {
        "Too Short"
    } else {
        "Adequate"
    };

    format!(
        "{preamble}\n\n\
         CURRENT PROMPT ANALYSIS:\n\
         - Score: {score}/100\n\
         - Feedback: {feedback}\n\
         - Has Role Definition: {role}\n\
         - Has Constraints: {constraints}\n\
         - Has Examples: {examples}\n\
         - Length: {length}\n\n\
         {task}",
        preamble = SYSTEM_INSTRUCTION_PREAMBLE,
        score = analysis.score,
        feedback = analysis.feedback,
        role = yes_no(characteristics.has_role),
        constraints = yes_no(characteristics.has_constraints),
        examples = yes_no(characteristics.has_examples),
        length = length,
        task = SYSTEM_INSTRUCTION_TASK,
    )
}
