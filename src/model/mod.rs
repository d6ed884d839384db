//! Static questionnaire data and the answer store.
//!
//! Steps and parts are plain value records loaded once at startup. The
//! [`AnswerStore`] is the only mutable data, owned by the controller.
//!
//! ```
//! use life_inventory::model::{Questionnaire, Step};
//!
//! let q = Questionnaire::with_steps(vec![
//!     Step::select("Period", "Which one?", "period", ["then", "now"]),
//! ])?;
//! assert_eq!(q.len(), 1);
//! # Ok::<(), life_inventory::InventoryError>(())
//! ```

mod answers;
mod builtin;
mod questionnaire;
mod step;

pub use answers::AnswerStore;
pub use builtin::builtin_steps;
pub use questionnaire::{Labels, Questionnaire};
pub use step::{FOLLOWUP_SUFFIX, Part, Step, StepKind, followup_key};
