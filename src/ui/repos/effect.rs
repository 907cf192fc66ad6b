/// Side effects requested by [`RepoReducer`](super::RepoReducer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoEffect {
    /// Fetch the repositories of `user`. The completion must carry `request`.
    Fetch { request: u64, user: String },

    /// Save `user` in the username store.
    Persist { user: String },

    /// Hand `url` to the share collaborator.
    Share { url: String },

    /// Hand `url` to the browser collaborator.
    Open { url: String },
}
