use ghrepos::github::Repository;
use ghrepos::ui::mvi::Reducer;
use ghrepos::ui::repos::{
    ConfirmButton, ConfirmLabel, ErrorMessage, FetchFailure, Focus, InputEdit, ListView,
    NoticeKind, RepoEffect, RepoIntent, RepoReducer, RepoScreenState, PAGE_SIZE,
};

fn reduce(state: RepoScreenState, intent: RepoIntent) -> (RepoScreenState, Vec<RepoEffect>) {
    RepoReducer::reduce(state, intent)
}

fn apply(state: RepoScreenState, intents: Vec<RepoIntent>) -> RepoScreenState {
    intents
        .into_iter()
        .fold(state, |state, intent| reduce(state, intent).0)
}

fn type_text(state: RepoScreenState, text: &str) -> RepoScreenState {
    apply(
        state,
        text.chars()
            .map(|ch| RepoIntent::Edit(InputEdit::Insert(ch)))
            .collect(),
    )
}

fn repos(count: usize) -> Vec<Repository> {
    (0..count)
        .map(|i| Repository::new(format!("repo-{i}"), format!("https://github.com/x/repo-{i}")))
        .collect()
}

fn loaded(count: usize) -> RepoScreenState {
    let (state, _) = reduce(
        RepoScreenState::default(),
        RepoIntent::Activate {
            stored_user: "x".to_string(),
        },
    );
    reduce(
        state,
        RepoIntent::FetchCompleted {
            request: 1,
            outcome: Ok(repos(count)),
        },
    )
    .0
}

fn selected(state: &RepoScreenState) -> Option<usize> {
    state.view.selected()
}

#[test]
fn test_activate_with_stored_user() {
    let (state, effects) = reduce(
        RepoScreenState::default(),
        RepoIntent::Activate {
            stored_user: "octocat".to_string(),
        },
    );

    assert_eq!(state.input, "octocat");
    assert_eq!(state.confirm, ConfirmButton::saved());
    assert_eq!(state.view, ListView::Loading);
    assert_eq!(
        effects,
        vec![RepoEffect::Fetch {
            request: 1,
            user: "octocat".to_string()
        }]
    );
}

#[test]
fn test_activate_without_stored_user_fetches_blank() {
    let (state, effects) = reduce(
        RepoScreenState::default(),
        RepoIntent::Activate {
            stored_user: String::new(),
        },
    );

    assert_eq!(state.input, "");
    assert_eq!(state.confirm, ConfirmButton::ready());
    assert_eq!(
        effects,
        vec![RepoEffect::Fetch {
            request: 1,
            user: String::new()
        }]
    );
}

#[test]
fn test_confirm_label_sequence() {
    let state = type_text(RepoScreenState::default(), "  hubot ");
    assert_eq!(state.confirm.label, ConfirmLabel::Confirm);
    assert!(state.confirm.enabled);

    let (state, effects) = reduce(state, RepoIntent::Confirm);
    assert_eq!(state.confirm, ConfirmButton::saving());
    assert_eq!(
        effects,
        vec![RepoEffect::Persist {
            user: "hubot".to_string()
        }]
    );

    let (state, effects) = reduce(
        state,
        RepoIntent::Persisted {
            user: "hubot".to_string(),
            result: Ok(()),
        },
    );
    assert_eq!(state.confirm, ConfirmButton::saved());
    assert_eq!(state.saved_user, "hubot");
    assert_eq!(state.view, ListView::Loading);
    assert_eq!(
        effects,
        vec![RepoEffect::Fetch {
            request: 1,
            user: "hubot".to_string()
        }]
    );
}

#[test]
fn test_editing_after_saved_reenables_confirm() {
    let (state, _) = reduce(
        RepoScreenState::default(),
        RepoIntent::Activate {
            stored_user: "octocat".to_string(),
        },
    );
    assert!(!state.confirm.enabled);

    let (state, effects) = reduce(state, RepoIntent::Edit(InputEdit::Insert('s')));
    assert_eq!(state.input, "octocats");
    assert_eq!(state.confirm, ConfirmButton::ready());
    assert!(effects.is_empty());
}

#[test]
fn test_editing_never_fetches() {
    let state = type_text(RepoScreenState::default(), "abc");
    let (state, effects) = reduce(state, RepoIntent::Edit(InputEdit::Backspace));
    assert!(effects.is_empty());
    let (state, effects) = reduce(state, RepoIntent::Edit(InputEdit::Clear));
    assert!(effects.is_empty());
    assert_eq!(state.input, "");
    assert_eq!(state.latest_request, 0);
}

#[test]
fn test_confirm_ignored_when_blank_or_disabled() {
    let state = type_text(RepoScreenState::default(), "   ");
    let (state, effects) = reduce(state, RepoIntent::Confirm);
    assert!(effects.is_empty());
    assert_eq!(state.confirm, ConfirmButton::ready());

    let state = type_text(RepoScreenState::default(), "hubot");
    let (state, _) = reduce(state, RepoIntent::Confirm);
    let (_, effects) = reduce(state, RepoIntent::Confirm);
    assert!(effects.is_empty(), "second confirm while saving is ignored");
}

#[test]
fn test_failed_save_shows_notice_and_does_not_fetch() {
    let state = type_text(RepoScreenState::default(), "hubot");
    let (state, _) = reduce(state, RepoIntent::Confirm);
    let (state, effects) = reduce(
        state,
        RepoIntent::Persisted {
            user: "hubot".to_string(),
            result: Err("disk full".to_string()),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.confirm, ConfirmButton::ready());
    assert_eq!(state.saved_user, "");
    let notice = state.notice.expect("notice");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert!(notice.text.contains("disk full"));
}

#[test]
fn test_fetch_outcomes_map_to_one_view() {
    let cases = vec![
        (Ok(repos(3)), "loaded"),
        (Ok(Vec::new()), "empty"),
        (Err(FetchFailure::UserNotFound), "not found"),
        (
            Err(FetchFailure::Other {
                cause: "connection refused".to_string(),
            }),
            "generic",
        ),
    ];

    for (outcome, label) in cases {
        let (state, _) = reduce(RepoScreenState::default(), RepoIntent::Refresh);
        let (state, _) = reduce(
            state,
            RepoIntent::FetchCompleted {
                request: 1,
                outcome,
            },
        );
        let expected_message = match label {
            "empty" => Some("This user has no public repositories."),
            "not found" => Some("User not found on GitHub."),
            "generic" => Some("Could not load repositories."),
            _ => None,
        };
        assert!(!state.view.is_loading(), "{label}");
        assert_eq!(state.view.message(), expected_message, "{label}");
        assert_eq!(
            state.view.repositories().len(),
            if label == "loaded" { 3 } else { 0 },
            "{label}"
        );
    }
}

#[test]
fn test_error_view_carries_error_message() {
    let (state, _) = reduce(RepoScreenState::default(), RepoIntent::Refresh);
    let (state, _) = reduce(
        state,
        RepoIntent::FetchCompleted {
            request: 1,
            outcome: Err(FetchFailure::UserNotFound),
        },
    );
    assert_eq!(state.view, ListView::Error(ErrorMessage::NotFound));
}

#[test]
fn test_stale_completion_is_ignored() {
    let (state, _) = reduce(
        RepoScreenState::default(),
        RepoIntent::Activate {
            stored_user: "slow".to_string(),
        },
    );
    let state = type_text(state, "-fast");
    let (state, _) = reduce(state, RepoIntent::Confirm);
    let (state, effects) = reduce(
        state,
        RepoIntent::Persisted {
            user: "slow-fast".to_string(),
            result: Ok(()),
        },
    );
    assert_eq!(
        effects,
        vec![RepoEffect::Fetch {
            request: 2,
            user: "slow-fast".to_string()
        }]
    );

    let (state, _) = reduce(
        state,
        RepoIntent::FetchCompleted {
            request: 2,
            outcome: Ok(repos(1)),
        },
    );
    let (state, effects) = reduce(
        state,
        RepoIntent::FetchCompleted {
            request: 1,
            outcome: Err(FetchFailure::UserNotFound),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.view.repositories().len(), 1);
    assert_eq!(state.view.message(), None);
}

#[test]
fn test_refresh_refetches_saved_user() {
    let state = loaded(2);
    let (state, effects) = reduce(state, RepoIntent::Refresh);
    assert_eq!(state.view, ListView::Loading);
    assert_eq!(
        effects,
        vec![RepoEffect::Fetch {
            request: 2,
            user: "x".to_string()
        }]
    );
}

#[test]
fn test_selection_is_clamped() {
    let state = loaded(3);
    assert_eq!(selected(&state), Some(0));

    let state = reduce(state, RepoIntent::SelectPrevious).0;
    assert_eq!(selected(&state), Some(0));

    let state = apply(
        state,
        vec![
            RepoIntent::SelectNext,
            RepoIntent::SelectNext,
            RepoIntent::SelectNext,
        ],
    );
    assert_eq!(selected(&state), Some(2));

    let state = reduce(state, RepoIntent::SelectFirst).0;
    assert_eq!(selected(&state), Some(0));
    let state = reduce(state, RepoIntent::SelectLast).0;
    assert_eq!(selected(&state), Some(2));
}

#[test]
fn test_paging_moves_by_page_size() {
    let state = loaded(PAGE_SIZE * 2 + 5);
    let state = reduce(state, RepoIntent::PageDown).0;
    assert_eq!(selected(&state), Some(PAGE_SIZE));
    let state = apply(state, vec![RepoIntent::PageDown, RepoIntent::PageDown]);
    assert_eq!(selected(&state), Some(PAGE_SIZE * 2 + 4));
    let state = reduce(state, RepoIntent::PageUp).0;
    assert_eq!(selected(&state), Some(PAGE_SIZE + 4));
}

#[test]
fn test_selection_outside_loaded_is_noop() {
    let (state, _) = reduce(RepoScreenState::default(), RepoIntent::Refresh);
    let after = reduce(state.clone(), RepoIntent::SelectNext).0;
    assert_eq!(after, state);
}

#[test]
fn test_focus_toggles() {
    let state = reduce(RepoScreenState::default(), RepoIntent::FocusNext).0;
    assert_eq!(state.focus, Focus::List);
    let state = reduce(state, RepoIntent::FocusNext).0;
    assert_eq!(state.focus, Focus::Input);
}

#[test]
fn test_row_actions_emit_row_url() {
    let state = loaded(3);
    let (state, effects) = reduce(state, RepoIntent::Share { index: 2 });
    assert_eq!(
        effects,
        vec![RepoEffect::Share {
            url: "https://github.com/x/repo-2".to_string()
        }]
    );
    assert_eq!(selected(&state), Some(2));

    let (_, effects) = reduce(state, RepoIntent::Open { index: 1 });
    assert_eq!(
        effects,
        vec![RepoEffect::Open {
            url: "https://github.com/x/repo-1".to_string()
        }]
    );
}

#[test]
fn test_row_action_out_of_range_is_noop() {
    let state = loaded(1);
    let (state, effects) = reduce(state, RepoIntent::Open { index: 5 });
    assert!(effects.is_empty());
    assert_eq!(selected(&state), Some(0));

    let (_, effects) = reduce(RepoScreenState::default(), RepoIntent::Share { index: 0 });
    assert!(effects.is_empty());
}

#[test]
fn test_octocat_single_repository() {
    let (state, _) = reduce(
        RepoScreenState::default(),
        RepoIntent::Activate {
            stored_user: "octocat".to_string(),
        },
    );
    let (state, _) = reduce(
        state,
        RepoIntent::FetchCompleted {
            request: 1,
            outcome: Ok(vec![Repository::new(
                "Hello-World",
                "https://github.com/octocat/Hello-World",
            )]),
        },
    );

    let names: Vec<&str> = state
        .view
        .repositories()
        .iter()
        .map(|repo| repo.name.as_str())
        .collect();
    assert_eq!(names, vec!["Hello-World"]);

    let (_, effects) = reduce(state, RepoIntent::Share { index: 0 });
    assert_eq!(
        effects,
        vec![RepoEffect::Share {
            url: "https://github.com/octocat/Hello-World".to_string()
        }]
    );
}
