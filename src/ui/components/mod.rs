pub mod coach_bubble;
pub mod fun_message;
pub mod progress_bar;
pub mod question_area;
pub mod summary_panel;
