//! Terminal front end for Delvekeep.
//!
//! Maps key presses onto simulation intents and draws the game state with
//! ratatui. No game rules live here.

pub mod app;
pub mod camera;
pub mod input;
pub mod markup;
pub mod terminal;
pub mod view;
