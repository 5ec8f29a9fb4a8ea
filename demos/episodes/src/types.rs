//! Domain types for the episodes demo.

/// A logged-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Stable identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
}

/// One watchable episode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    /// Stable identifier.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Playback location.
    pub video_url: String,
}

impl Episode {
    /// Convenience constructor for demo data.
    #[must_use]
    pub fn new(id: u64, title: &str, video_url: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            video_url: video_url.to_string(),
        }
    }
}

/// Account-level preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Whether push notifications are enabled.
    pub notifications_on: bool,
}

/// State owned by the account feature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountState {
    /// The current session's user, if any.
    pub logged_in_user: Option<User>,
    /// Account preferences.
    pub settings: Settings,
    /// Episodes watched while signed in.
    pub watched_episodes: Vec<Episode>,
}

/// State owned by the episodes feature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EpisodesState {
    /// The full catalogue.
    pub episodes: Vec<Episode>,
    /// Episodes the viewer has watched.
    pub watched_episodes: Vec<Episode>,
}

/// The whole application's state: each feature owns its slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    /// Account feature slice.
    pub account: AccountState,
    /// Episodes feature slice.
    pub episodes: EpisodesState,
}

/// Everything the account feature responds to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountAction {
    /// A user signed in.
    Login(User),
    /// The signed-in user watched an episode.
    WatchedEpisode(Episode),
    /// The user signed out.
    Logout,
    /// Notifications were toggled.
    SetNotifications(bool),
}

/// Everything the episodes feature responds to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EpisodesAction {
    /// The viewer watched an episode.
    WatchedEpisode(Episode),
}

/// The application action: one variant per feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// An account feature action.
    Account(AccountAction),
    /// An episodes feature action.
    Episodes(EpisodesAction),
}
