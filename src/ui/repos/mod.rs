//! Repository list feature module.
//!
//! Drives the one screen of the app: username input, confirm button and the
//! list/progress/message body.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Screen state (input, confirm button, list view, focus)
//! - `intent.rs` - User actions and effect outcomes
//! - `effect.rs` - Side effects requested by the reducer
//! - `reducer.rs` - State transitions (pure, no side effects)

mod effect;
mod intent;
mod reducer;
mod state;

pub use effect::RepoEffect;
pub use intent::{FetchFailure, InputEdit, RepoIntent, RowAction};
pub use reducer::{RepoReducer, PAGE_SIZE};
pub use state::{
    ConfirmButton, ConfirmLabel, ErrorMessage, Focus, ListView, Notice, NoticeKind,
    RepoScreenState, EMPTY_MESSAGE,
};
