use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Handle;

use crate::github::GitHubClient;
use crate::ui::events::AppEvent;

/// Starts a repository fetch without blocking the UI thread.
///
/// The completion is expected back as `AppEvent::FetchCompleted` carrying
/// the same `request` id.
pub trait FetchLauncher: Send {
    fn launch(&self, request: u64, user: String);
}

/// Runs fetches on a tokio runtime and posts results to the event channel.
pub struct GitHubFetchLauncher {
    client: Arc<GitHubClient>,
    runtime: Handle,
    events: Sender<AppEvent>,
}

impl GitHubFetchLauncher {
    pub fn new(client: Arc<GitHubClient>, runtime: Handle, events: Sender<AppEvent>) -> Self {
        Self {
            client,
            runtime,
            events,
        }
    }
}

impl FetchLauncher for GitHubFetchLauncher {
    fn launch(&self, request: u64, user: String) {
        let client = Arc::clone(&self.client);
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let result = client.fetch_repositories(&user).await;
            // The UI may already be gone; nothing to deliver to then.
            let _ = events.send(AppEvent::FetchCompleted { request, result });
        });
    }
}
