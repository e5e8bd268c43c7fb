pub mod error;

pub mod config;

pub mod controller {
    pub mod actions;
    pub use actions::Action;

    pub mod event_loop;
    pub use event_loop::{EventLoop, TaskResult};
}

pub mod model {
    pub mod app_state;
    pub use app_state::AppState;

    pub mod match_record;
    pub use match_record::MatchRecord;

    pub mod search_state;
    pub use search_state::{SearchState, UIState};
}

pub mod view {
    pub mod theme;

    pub mod presenter;
    pub use presenter::{DisplayPayload, MatchCard, present};

    pub mod ui;
    pub use ui::UIRenderer;

    pub mod components {
        pub mod error_banner;
        pub use error_banner::ErrorBanner;
        pub mod loading_indicator;
        pub use loading_indicator::LoadingIndicator;
        pub mod placeholder;
        pub use placeholder::Placeholder;
        pub mod results_list;
        pub use results_list::ResultsList;
        pub mod search_bar;
        pub use search_bar::SearchBar;
        pub mod status_bar;
        pub use status_bar::StatusBar;
    }

    pub use components::*;
}

pub use view::*;

pub mod tasks {
    pub mod search_task;
}

pub mod logging;
pub use logging::Logger;

pub use error::AppError;

pub use model::{app_state::AppState, match_record::MatchRecord, search_state::SearchState};
