use meeple_api::{app, AppState};
use meeple_test::{seeded_pool, TestApp};

pub async fn test_app() -> TestApp {
    TestApp::new(app(AppState::new(seeded_pool().await)))
}
