pub mod api_controller;
pub mod category_controller;
pub mod comment_controller;
pub mod review_controller;
pub mod user_controller;
