//! Model-View-Intent (MVI) architecture primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ (State, Effects) ──→ View
//!    ↑                        │
//!    └──── effect outcomes ───┘
//! ```
//!
//! - **State**: plain data the view renders from
//! - **Intent**: user actions or system events (key presses, fetch results)
//! - **Reducer**: pure function from state and intent to the next state plus
//!   the side effects the caller has to perform

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
