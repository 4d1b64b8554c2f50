pub mod prompts;
pub mod render;

pub use prompts::{prompt_body_weight, prompt_training_day, prompt_yes_no, validate_body_weight};
pub use render::{
    display_accuracy_report, display_lookup, display_plan, display_reconcile_summary,
    display_targets,
};
