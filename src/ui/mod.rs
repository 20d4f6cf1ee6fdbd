pub mod components;
pub mod gradient;
pub mod layout;
pub mod line_input;
pub mod mascot;
pub mod theme;
