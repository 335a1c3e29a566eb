// Shared helpers that don't belong to the engine or the game

pub mod math;
