// Sound cues
//
// There is no audio backend. Scenes queue cues here and the main loop
// drains and logs them once per frame.

use std::collections::HashSet;

/// Sounds the game knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    /// Typing noise of the build log
    Build,
    /// Background music in the level
    Music,
    /// Checkpoint reached
    Checkpoint,
    /// Level finished
    Yeah,
}

impl Sound {
    /// Asset key of the sound
    pub fn key(self) -> &'static str {
        match self {
            Sound::Build => "buildSound",
            Sound::Music => "musicSound",
            Sound::Checkpoint => "checkpointSound",
            Sound::Yeah => "yeahSound",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    Play(Sound),
    Stop(Sound),
}

/// Pending cues plus the set of sounds currently considered playing
#[derive(Debug, Default)]
pub struct AudioQueue {
    cues: Vec<AudioCue>,
    playing: HashSet<Sound>,
}

impl AudioQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn play(&mut self, sound: Sound) {
        self.playing.insert(sound);
        self.cues.push(AudioCue::Play(sound));
    }

    /// Stop a sound; a no-op when it isn't playing
    pub fn stop(&mut self, sound: Sound) {
        if self.playing.remove(&sound) {
            self.cues.push(AudioCue::Stop(sound));
        }
    }

    pub fn is_playing(&self, sound: Sound) -> bool {
        self.playing.contains(&sound)
    }

    /// Take the cues queued since the last drain
    pub fn drain(&mut self) -> Vec<AudioCue> {
        std::mem::take(&mut self.cues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_and_stop() {
        let mut audio = AudioQueue::new();
        audio.play(Sound::Build);
        assert!(audio.is_playing(Sound::Build));
        audio.stop(Sound::Build);
        assert!(!audio.is_playing(Sound::Build));
        assert_eq!(
            audio.drain(),
            vec![AudioCue::Play(Sound::Build), AudioCue::Stop(Sound::Build)]
        );
        assert!(audio.drain().is_empty());
    }

    #[test]
    fn test_stop_without_play_is_ignored() {
        let mut audio = AudioQueue::new();
        audio.stop(Sound::Music);
        assert!(audio.drain().is_empty());
    }

    #[test]
    fn test_sound_keys() {
        assert_eq!(Sound::Build.key(), "buildSound");
        assert_eq!(Sound::Yeah.key(), "yeahSound");
    }
}
