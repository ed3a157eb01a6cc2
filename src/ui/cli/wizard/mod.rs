mod wizard;

pub use wizard::{prompt_choice, prompt_enum, prompt_enum_or_none, prompt_kind, prompt_output_path};
