// Engine modules: renderer, physics, input, audio, scenes

pub mod assets;
pub mod audio;
pub mod events;
pub mod game_loop;
pub mod input;
pub mod physics;
pub mod renderer;
pub mod scene;
