pub mod constants;
pub mod game;
pub mod steam;
pub mod titles;
