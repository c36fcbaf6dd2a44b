//! Session engine: turn state, prompt pools, and the thinking delay.

pub mod prompts;
pub mod session;
pub mod thinking;

pub use prompts::{CyclePicker, Prompt, PromptPicker, RandomPicker};
pub use session::{Mode, Session, Turn};
pub use thinking::ThinkingTask;
