use const_format::concatcp;
use tracing::level_filters::LevelFilter;

/// Title used when the push payload doesn't carry one
pub const DEFAULT_TITLE: &str = "Restaurant AI";

/// Body used when the push payload doesn't carry a message
pub const DEFAULT_BODY: &str = "New Notification";

const ICON_HOST: &str = "https://cdn-icons-png.flaticon.com";

pub const NOTIFICATION_ICON_URL: &str = concatcp!(ICON_HOST, "/512/3081/3081840.png");
pub const NOTIFICATION_BADGE_URL: &str = NOTIFICATION_ICON_URL;

/// On/off durations in milliseconds
pub const VIBRATE_PATTERN: [u32; 3] = [100, 50, 100];

pub const PRIMARY_KEY: u32 = 1;

/// Page opened when a notification is clicked
pub const CLICK_TARGET_URL: &str = "/";

/// Release builds leave out the per-event trace and debug lines
pub const LOG_LEVEL: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::TRACE
} else {
    LevelFilter::INFO
};

/// Message a page can post to make a waiting worker take over immediately
pub const SKIP_WAITING: &str = "SKIP_WAITING";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Explore,
    Close,
}

impl Action {
    /// Buttons shown on every notification, in display order
    pub const ALL: [Action; 2] = [Action::Explore, Action::Close];

    pub const fn id(&self) -> &'static str {
        use Action::*;
        match self {
            Explore => "explore",
            Close => "close",
        }
    }

    pub const fn title(&self) -> &'static str {
        use Action::*;
        match self {
            Explore => "Voir Commandes",
            Close => "Fermer",
        }
    }

    pub const fn icon(&self) -> &'static str {
        use Action::*;
        match self {
            Explore => "checkmark.png",
            Close => "xmark.png",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.id() == id)
    }
}
