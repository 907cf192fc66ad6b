use crate::github::{FetchError, Repository};
use crate::platform::Platform;
use crate::store::UsernameStore;
use crate::ui::fetch::FetchLauncher;
use crate::ui::mvi::Reducer;
use crate::ui::repos::{
    FetchFailure, RepoEffect, RepoIntent, RepoReducer, RepoScreenState, RowAction,
};
use std::collections::VecDeque;
use tracing::{debug, error, info, warn};

/// Screen controller: owns the state, runs reducer effects against the
/// collaborators and feeds their outcomes back in as intents.
pub struct App {
    should_quit: bool,
    screen: RepoScreenState,
    spinner_tick: usize,
    store: Box<dyn UsernameStore>,
    platform: Box<dyn Platform>,
    launcher: Box<dyn FetchLauncher>,
}

impl App {
    pub fn new(
        store: Box<dyn UsernameStore>,
        platform: Box<dyn Platform>,
        launcher: Box<dyn FetchLauncher>,
    ) -> Self {
        Self {
            should_quit: false,
            screen: RepoScreenState::default(),
            spinner_tick: 0,
            store,
            platform,
            launcher,
        }
    }

    pub fn screen(&self) -> &RepoScreenState {
        &self.screen
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Index into the spinner animation; advances on ticks while loading.
    pub fn spinner_tick(&self) -> usize {
        self.spinner_tick
    }

    pub fn on_tick(&mut self) {
        if self.screen.view.is_loading() {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
    }

    /// Screen shown: restore the stored username and fetch its repositories.
    pub fn activate(&mut self) {
        let stored_user = self.store.get();
        self.dispatch(RepoIntent::Activate { stored_user });
    }

    /// Completion of a fetch started through the launcher.
    pub fn on_fetch_completed(
        &mut self,
        request: u64,
        result: Result<Vec<Repository>, FetchError>,
    ) {
        if request != self.screen.latest_request {
            debug!(
                request,
                latest = self.screen.latest_request,
                "Ignoring stale fetch completion"
            );
        } else if let Err(err) = &result {
            if err.is_user_not_found() {
                info!(error = %err, "Repository fetch found no such user");
            } else {
                warn!(error = %err, "Repository fetch failed");
            }
        }

        let outcome = result.map_err(|err| FetchFailure::from(&err));
        self.dispatch(RepoIntent::FetchCompleted { request, outcome });
    }

    /// Reduce `intent`, then run every effect, dispatching follow-up intents
    /// in order until none are left.
    pub fn dispatch(&mut self, intent: RepoIntent) {
        let mut pending = VecDeque::from([intent]);
        while let Some(intent) = pending.pop_front() {
            let (state, effects) = RepoReducer::reduce(std::mem::take(&mut self.screen), intent);
            self.screen = state;
            for effect in effects {
                if let Some(follow_up) = self.run_effect(effect) {
                    pending.push_back(follow_up);
                }
            }
        }
    }

    fn run_effect(&mut self, effect: RepoEffect) -> Option<RepoIntent> {
        match effect {
            RepoEffect::Fetch { request, user } => {
                debug!(request, user = %user, "Issuing repository fetch");
                self.launcher.launch(request, user);
                None
            }
            RepoEffect::Persist { user } => {
                let result = self.store.set(&user).map_err(|err| {
                    error!(error = %err, "Failed to save username");
                    err.to_string()
                });
                if result.is_ok() {
                    info!(user = %user, "User saved successfully");
                }
                Some(RepoIntent::Persisted { user, result })
            }
            RepoEffect::Share { url } => {
                let result = self.platform.share(&url).map_err(|err| {
                    warn!(error = %err, "Share failed");
                    err.to_string()
                });
                Some(RepoIntent::ActionFinished {
                    action: RowAction::Share,
                    url,
                    result,
                })
            }
            RepoEffect::Open { url } => {
                let result = self.platform.open(&url).map_err(|err| {
                    warn!(error = %err, "Open failed");
                    err.to_string()
                });
                Some(RepoIntent::ActionFinished {
                    action: RowAction::Open,
                    url,
                    result,
                })
            }
        }
    }
}
