pub mod prompts;
pub mod render;

pub use prompts::{prompt_select_diet, prompt_yes_no, resolve_diet};
pub use render::{display_classification, display_diet_list, display_insights};
