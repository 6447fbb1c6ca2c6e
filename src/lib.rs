pub mod app;
pub mod config;
pub mod error;
pub mod state;

pub mod crypto {
    pub mod password;
    pub mod session_token;
}

pub mod models {
    pub mod invitation;
    pub mod session;
    pub mod user;
}

pub mod repositories {
    pub mod user;
}

pub mod services {
    pub mod auth;
    pub mod vortex;
}

pub mod handlers {
    pub mod auth;
    pub mod demo;
    pub mod health;
    pub mod vortex;
}

pub mod middleware_layer {
    pub mod auth;
}

pub mod validation {
    pub mod auth;
}

pub use app::build_router;
pub use config::Config;
pub use state::AppState;
