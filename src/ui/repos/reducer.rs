use crate::ui::mvi::Reducer;

use super::effect::RepoEffect;
use super::intent::{FetchFailure, InputEdit, RepoIntent, RowAction};
use super::state::{
    ConfirmButton, ConfirmLabel, ErrorMessage, Focus, ListView, Notice, RepoScreenState,
};

/// Rows moved by `PageUp` / `PageDown`.
pub const PAGE_SIZE: usize = 10;

/// Reducer for the repository list screen.
///
/// Pure function: persisting, fetching and the share/open hand-offs are
/// returned as [`RepoEffect`]s and run by [`App`](crate::ui::app::App).
pub struct RepoReducer;

type Outcome = (RepoScreenState, Vec<RepoEffect>);

impl Reducer for RepoReducer {
    type State = RepoScreenState;
    type Intent = RepoIntent;
    type Effect = RepoEffect;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Outcome {
        if intent.is_user_input() {
            state.notice = None;
        }

        match intent {
            RepoIntent::Activate { stored_user } => {
                let mut state = state;
                if !stored_user.trim().is_empty() {
                    state.input = stored_user.clone();
                    state.confirm = ConfirmButton::saved();
                }
                state.saved_user = stored_user.clone();
                issue_fetch(state, stored_user)
            }

            RepoIntent::Edit(edit) => {
                let mut state = state;
                match edit {
                    InputEdit::Insert(ch) => state.input.push(ch),
                    InputEdit::Backspace => {
                        state.input.pop();
                    }
                    InputEdit::Clear => state.input.clear(),
                }
                if state.confirm.label != ConfirmLabel::Confirm {
                    state.confirm = ConfirmButton::ready();
                }
                (state, Vec::new())
            }

            RepoIntent::Confirm => {
                let user = state.input.trim().to_string();
                if user.is_empty() || !state.confirm.enabled {
                    return (state, Vec::new());
                }
                let mut state = state;
                state.confirm = ConfirmButton::saving();
                (state, vec![RepoEffect::Persist { user }])
            }

            RepoIntent::Persisted { user, result } => {
                let mut state = state;
                match result {
                    Ok(()) => {
                        state.confirm = ConfirmButton::saved();
                        state.saved_user = user.clone();
                        issue_fetch(state, user)
                    }
                    Err(reason) => {
                        state.confirm = ConfirmButton::ready();
                        state.notice = Some(Notice::error(format!(
                            "Could not save username: {}",
                            reason
                        )));
                        (state, Vec::new())
                    }
                }
            }

            RepoIntent::Refresh => {
                let user = state.saved_user.clone();
                issue_fetch(state, user)
            }

            RepoIntent::FetchCompleted { request, outcome } => {
                if request != state.latest_request {
                    return (state, Vec::new());
                }
                let mut state = state;
                state.view = match outcome {
                    Ok(repos) if repos.is_empty() => ListView::Empty,
                    Ok(repos) => ListView::Loaded { repos, selected: 0 },
                    Err(FetchFailure::UserNotFound) => ListView::Error(ErrorMessage::NotFound),
                    Err(FetchFailure::Other { .. }) => ListView::Error(ErrorMessage::Generic),
                };
                (state, Vec::new())
            }

            RepoIntent::SelectNext => {
                let state = move_selection(state, |current, _| current.saturating_add(1));
                (state, Vec::new())
            }
            RepoIntent::SelectPrevious => {
                let state = move_selection(state, |current, _| current.saturating_sub(1));
                (state, Vec::new())
            }
            RepoIntent::SelectFirst => (move_selection(state, |_, _| 0), Vec::new()),
            RepoIntent::SelectLast => {
                let state = move_selection(state, |_, len| len.saturating_sub(1));
                (state, Vec::new())
            }
            RepoIntent::PageDown => {
                let state = move_selection(state, |current, _| current.saturating_add(PAGE_SIZE));
                (state, Vec::new())
            }
            RepoIntent::PageUp => {
                let state = move_selection(state, |current, _| current.saturating_sub(PAGE_SIZE));
                (state, Vec::new())
            }

            RepoIntent::FocusNext => {
                let mut state = state;
                state.focus = match state.focus {
                    Focus::Input => Focus::List,
                    Focus::List => Focus::Input,
                };
                (state, Vec::new())
            }

            RepoIntent::Share { index } => row_action(state, index, RowAction::Share),
            RepoIntent::Open { index } => row_action(state, index, RowAction::Open),

            RepoIntent::ActionFinished {
                action,
                url,
                result,
            } => {
                let mut state = state;
                state.notice = Some(match (action, result) {
                    (RowAction::Share, Ok(())) => {
                        Notice::info(format!("Copied {} to clipboard", url))
                    }
                    (RowAction::Open, Ok(())) => Notice::info(format!("Opened {}", url)),
                    (RowAction::Share, Err(reason)) => {
                        Notice::error(format!("Could not share {}: {}", url, reason))
                    }
                    (RowAction::Open, Err(reason)) => {
                        Notice::error(format!("Could not open {}: {}", url, reason))
                    }
                });
                (state, Vec::new())
            }
        }
    }
}

/// Start a new request: progress on, list and message off.
fn issue_fetch(mut state: RepoScreenState, user: String) -> Outcome {
    state.latest_request += 1;
    state.view = ListView::Loading;
    let request = state.latest_request;
    (state, vec![RepoEffect::Fetch { request, user }])
}

/// Apply `step(current, len)` to the selection, clamped to the list.
fn move_selection(
    mut state: RepoScreenState,
    step: impl Fn(usize, usize) -> usize,
) -> RepoScreenState {
    if let ListView::Loaded { repos, selected } = &mut state.view {
        let len = repos.len();
        *selected = step(*selected, len).min(len.saturating_sub(1));
    }
    state
}

fn row_action(mut state: RepoScreenState, index: usize, action: RowAction) -> Outcome {
    let url = match &state.view {
        ListView::Loaded { repos, .. } => repos.get(index).map(|repo| repo.html_url.clone()),
        _ => None,
    };
    let Some(url) = url else {
        return (state, Vec::new());
    };
    if let ListView::Loaded { selected, .. } = &mut state.view {
        *selected = index;
    }
    let effect = match action {
        RowAction::Share => RepoEffect::Share { url },
        RowAction::Open => RepoEffect::Open { url },
    };
    (state, vec![effect])
}
