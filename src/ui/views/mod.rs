pub mod debug;
pub mod difficulty_select;
pub mod home;
pub mod results;
