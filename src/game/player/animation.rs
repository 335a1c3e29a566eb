// Frame animation with raw and unraw variants
//
// There are no sprite sheets: the frame index drives simple shape changes
// (a bobbing player, a spinning checkpoint). Every clip exists twice, the
// raw variant being choppier, and the graphics upgrade picks the unraw one.

use std::collections::HashMap;

/// A single animation clip
#[derive(Debug, Clone)]
pub struct AnimationClip {
    /// Name of the animation (e.g., "idle", "walk", "rotate")
    pub name: String,
    /// Number of frames in the animation
    pub frame_count: usize,
    /// Duration of each frame in seconds
    pub frame_duration: f32,
    /// Whether the animation loops
    pub looping: bool,
}

impl AnimationClip {
    /// Create a new animation clip
    pub fn new(name: &str, frame_count: usize, fps: f32, looping: bool) -> Self {
        Self {
            name: name.to_string(),
            frame_count: frame_count.max(1),
            frame_duration: 1.0 / fps,
            looping,
        }
    }

    /// Create a looping animation
    pub fn looping(name: &str, frame_count: usize, fps: f32) -> Self {
        Self::new(name, frame_count, fps, true)
    }
}

/// Key of the raw variant of a clip
pub fn raw_name(name: &str) -> String {
    format!("{name}_raw")
}

/// Manages animation playback
#[derive(Debug)]
pub struct AnimationPlayer {
    /// All available animations
    animations: HashMap<String, AnimationClip>,
    /// Play the unraw variants
    unraw: bool,
    /// Currently playing animation name (without variant suffix)
    current_animation: String,
    current_frame: usize,
    /// Time elapsed in current frame
    frame_timer: f32,
    playing: bool,
    /// Whether the shape should be mirrored horizontally
    flip_horizontal: bool,
}

impl AnimationPlayer {
    pub fn new(unraw: bool) -> Self {
        Self {
            animations: HashMap::new(),
            unraw,
            current_animation: String::new(),
            current_frame: 0,
            frame_timer: 0.0,
            playing: true,
            flip_horizontal: false,
        }
    }

    /// Player animations for every `PlayerState`
    pub fn with_player_animations(unraw: bool) -> Self {
        let mut player = Self::new(unraw);

        for (name, frames, fps) in [
            ("idle", 4, 6.0),
            ("walk", 6, 12.0),
            ("jump", 2, 10.0),
            ("fall", 2, 10.0),
            ("crouch", 2, 4.0),
            ("crouch_walk", 4, 8.0),
        ] {
            player.add_variants(AnimationClip::looping(name, frames, fps));
        }

        player.play("idle");
        player
    }

    /// Checkpoint spin
    pub fn with_checkpoint_animations(unraw: bool) -> Self {
        let mut player = Self::new(unraw);
        player.add_variants(AnimationClip::looping("rotate", 8, 8.0));
        player.play("rotate");
        player
    }

    /// Add an animation clip under its own name
    pub fn add_animation(&mut self, clip: AnimationClip) {
        self.animations.insert(clip.name.clone(), clip);
    }

    /// Add the unraw clip and a raw variant with half the frames
    pub fn add_variants(&mut self, clip: AnimationClip) {
        let mut raw = clip.clone();
        raw.name = raw_name(&clip.name);
        raw.frame_count = (clip.frame_count / 2).max(1);
        raw.frame_duration = clip.frame_duration * 2.0;
        self.add_animation(raw);
        self.add_animation(clip);
    }

    fn clip(&self, name: &str) -> Option<&AnimationClip> {
        if self.unraw {
            self.animations.get(name)
        } else {
            self.animations
                .get(&raw_name(name))
                .or_else(|| self.animations.get(name))
        }
    }

    /// Play an animation by name
    pub fn play(&mut self, name: &str) {
        if self.current_animation != name {
            self.play_from_start(name);
        }
    }

    /// Play an animation from the beginning, even if it's the same
    fn play_from_start(&mut self, name: &str) {
        self.current_animation = name.to_string();
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.playing = true;
    }

    pub fn set_flip_horizontal(&mut self, flip: bool) {
        self.flip_horizontal = flip;
    }

    pub fn is_flipped_horizontal(&self) -> bool {
        self.flip_horizontal
    }

    /// Update the animation (called every step)
    pub fn update(&mut self, dt: f32) {
        if !self.playing {
            return;
        }

        let Some(clip) = self.clip(&self.current_animation).cloned() else {
            return;
        };

        self.frame_timer += dt;

        while self.frame_timer >= clip.frame_duration {
            self.frame_timer -= clip.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= clip.frame_count {
                if clip.looping {
                    self.current_frame = 0;
                } else {
                    // Stay on last frame
                    self.current_frame = clip.frame_count - 1;
                    self.playing = false;
                    break;
                }
            }
        }
    }

    /// Get the current animation name
    pub fn current_animation(&self) -> &str {
        &self.current_animation
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Check if the current animation has finished (for non-looping animations)
    pub fn is_finished(&self) -> bool {
        match self.clip(&self.current_animation) {
            Some(clip) => !clip.looping && self.current_frame >= clip.frame_count - 1 && !self.playing,
            None => true,
        }
    }

    /// Position in the current cycle in 0.0..1.0
    pub fn cycle_position(&self) -> f32 {
        self.clip(&self.current_animation)
            .map(|clip| self.current_frame.min(clip.frame_count - 1) as f32 / clip.frame_count as f32)
            .unwrap_or(0.0)
    }
}
