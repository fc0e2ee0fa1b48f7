pub mod chatbot;
pub mod common_modal;
pub mod common_toast;
pub mod event_form;
pub mod final_result;
pub mod navbar;
pub mod round_management;
pub mod score_submission;
pub mod sidebar;
pub mod tag_input;
