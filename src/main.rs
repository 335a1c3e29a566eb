use anyhow::Result;
use glam::Vec2;
use log::{debug, error, info};
use std::sync::Arc;
use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, Event, MouseButton, TouchPhase, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

mod common;
mod config;
mod engine;
mod game;
mod scenes;

use config::{GameConfig, PIXELS_PER_UNIT};
use engine::assets::GameAssets;
use engine::audio::{AudioCue, AudioQueue};
use engine::events::EventBus;
use engine::game_loop::GameLoop;
use engine::input::{InputConfig, InputManager, MobileControl};
use engine::renderer::{Camera, DrawList, Renderer};
use engine::scene::{SceneContext, SceneKey, SceneManager};
use scenes::{create_scene, SceneRequest};

/// Everything the scenes borrow through `SceneContext`
struct Shared {
    config: GameConfig,
    input: InputManager,
    events: EventBus,
    assets: GameAssets,
    audio: AudioQueue,
}

impl Shared {
    fn ctx(&mut self) -> SceneContext<'_> {
        SceneContext {
            config: &self.config,
            input: &mut self.input,
            events: &mut self.events,
            assets: &mut self.assets,
            audio: &mut self.audio,
        }
    }
}

struct App {
    window: Arc<Window>,
    renderer: Renderer,
    shared: Shared,
    scenes: SceneManager,
    game_loop: GameLoop,
    camera: Camera,
    draw_list: DrawList,
    controls: Vec<MobileControl>,
    cursor: Vec2,
}

impl App {
    fn new(window: Arc<Window>, config: GameConfig) -> Result<Self> {
        let logical = Vec2::new(config.width, config.height);
        let renderer = pollster::block_on(Renderer::new(window.clone(), logical))?;

        let mut shared = Shared {
            assets: GameAssets::new(&config.asset_dir),
            input: InputManager::new(InputConfig::default()),
            events: EventBus::new(),
            audio: AudioQueue::new(),
            config,
        };
        let mut scenes = SceneManager::new(Box::new(create_scene));
        scenes.start(SceneRequest::Loading, &mut shared.ctx());

        Ok(Self {
            window,
            renderer,
            camera: Camera::new(
                Vec2::ZERO,
                logical.x / PIXELS_PER_UNIT,
                logical.y / PIXELS_PER_UNIT,
            ),
            controls: MobileControl::default_layout(logical.x, logical.y),
            shared,
            scenes,
            game_loop: GameLoop::new(),
            draw_list: DrawList::new(),
            cursor: Vec2::ZERO,
        })
    }

    /// Touch controls are only shown while a level is running
    fn controls_visible(&self) -> bool {
        self.shared.config.mobile_controls && self.scenes.is_running(SceneKey::Game)
    }

    fn pointer_down(&mut self, window_pos: Vec2) {
        let Some(position) = self.renderer.letterbox().to_logical(window_pos) else {
            return;
        };
        if self.controls_visible() {
            let events = &mut self.shared.events;
            if self
                .controls
                .iter_mut()
                .any(|control| control.pointer_down(position, events))
            {
                return;
            }
        }
        self.scenes.pointer_down(position, &mut self.shared.ctx());
    }

    fn pointer_up(&mut self, window_pos: Vec2) {
        for control in &mut self.controls {
            control.pointer_up(&mut self.shared.events);
        }
        if let Some(position) = self.renderer.letterbox().to_logical(window_pos) {
            self.scenes.pointer_up(position, &mut self.shared.ctx());
        }
    }

    fn frame(&mut self) {
        let steps = self.game_loop.begin_frame();
        let dt = self.game_loop.fixed_timestep();
        for _ in 0..steps {
            self.scenes.update(dt, &mut self.shared.ctx());
            self.shared.input.state_mut().end_step();
        }

        for cue in self.shared.audio.drain() {
            match cue {
                AudioCue::Play(sound) => info!("Playing sound {}", sound.key()),
                AudioCue::Stop(sound) => debug!("Stopping sound {}", sound.key()),
            }
        }

        self.draw_list.clear();
        self.scenes.draw(&mut self.draw_list, &mut self.camera);
        if self.controls_visible() {
            for control in &self.controls {
                control.draw(&mut self.draw_list);
            }
        }
        if let Err(err) = self.renderer.render(&self.draw_list, &self.camera) {
            error!("Render error: {}", err);
        }

        if self.game_loop.frame_count() % 600 == 0 {
            debug!("FPS: {:.1}", self.game_loop.fps());
        }
    }

    fn shutdown(&mut self) {
        self.scenes.shutdown_all(&mut self.shared.ctx());
    }
}

fn to_vec2(position: PhysicalPosition<f64>) -> Vec2 {
    Vec2::new(position.x as f32, position.y as f32)
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = GameConfig::from_env();
    info!("Starting {}...", config.title);

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height))
            .with_resizable(true)
            .build(&event_loop)?,
    );

    info!("Window created successfully");

    let mut app = App::new(window, config)?;

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    app.shutdown();
                    elwt.exit();
                }
                WindowEvent::Resized(physical_size) => {
                    app.renderer.resize(physical_size);
                }
                WindowEvent::Focused(focused) => {
                    if focused {
                        app.game_loop.resume();
                    } else {
                        // Keys released while unfocused are never reported
                        app.shared.input.state_mut().reset();
                        app.game_loop.pause();
                    }
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    app.shared.input.process_keyboard_event(&event);
                }
                WindowEvent::CursorMoved { position, .. } => {
                    app.cursor = to_vec2(position);
                }
                WindowEvent::MouseInput {
                    state,
                    button: MouseButton::Left,
                    ..
                } => match state {
                    ElementState::Pressed => app.pointer_down(app.cursor),
                    ElementState::Released => app.pointer_up(app.cursor),
                },
                WindowEvent::Touch(touch) => match touch.phase {
                    TouchPhase::Started => app.pointer_down(to_vec2(touch.location)),
                    TouchPhase::Ended | TouchPhase::Cancelled => {
                        app.pointer_up(to_vec2(touch.location))
                    }
                    TouchPhase::Moved => {}
                },
                WindowEvent::RedrawRequested => {
                    app.frame();
                    if app.scenes.quit_requested() {
                        app.shutdown();
                        elwt.exit();
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                // Request redraw on next frame
                app.window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
