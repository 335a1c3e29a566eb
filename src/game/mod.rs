// Game content: upgrades, session state, level data and the objects built from it

pub mod editor;
pub mod entities;
pub mod level;
pub mod palette;
pub mod player;
pub mod session;
pub mod upgrades;
