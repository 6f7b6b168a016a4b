//! Rotating multilingual greeting shown before the page.
//!
//! The intro is a fixed timeline: greetings rotate every
//! [`GREETING_STEP`], the welcome line appears half a second after one full
//! rotation, the fade-out starts 2.5 s after that, and the intro completes
//! once the fade has run.

use std::time::Duration;

/// Time each greeting stays on screen.
pub const GREETING_STEP: Duration = Duration::from_millis(400);
/// Delay after the first rotation before the welcome line shows.
pub const WELCOME_DELAY: Duration = Duration::from_millis(500);
/// Delay after the first rotation before fading out.
pub const FADE_DELAY: Duration = Duration::from_millis(3000);
/// Length of the fade-out.
pub const FADE_DURATION: Duration = Duration::from_millis(800);

/// A greeting and the language it is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Greeting {
    pub text: &'static str,
    pub language: &'static str,
}

pub const GREETINGS: &[Greeting] = &[
    Greeting { text: "Hi", language: "English" },
    Greeting { text: "नमस्ते", language: "Hindi" },
    Greeting { text: "Hola", language: "Spanish" },
    Greeting { text: "Bonjour", language: "French" },
    Greeting { text: "Hallo", language: "German" },
    Greeting { text: "こんにちは", language: "Japanese" },
    Greeting { text: "你好", language: "Chinese" },
    Greeting { text: "Olá", language: "Portuguese" },
    Greeting { text: "Ciao", language: "Italian" },
    Greeting { text: "Привет", language: "Russian" },
    Greeting { text: "مرحبا", language: "Arabic" },
    Greeting { text: "안녕하세요", language: "Korean" },
];

/// What the intro shows at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreetingFrame {
    pub greeting: Greeting,
    pub show_welcome: bool,
    pub fading: bool,
    pub complete: bool,
}

/// Timeline over a list of greetings.
#[derive(Debug, Clone, Copy)]
pub struct GreetingSequence {
    greetings: &'static [Greeting],
    step: Duration,
}

impl Default for GreetingSequence {
    fn default() -> Self {
        Self::new(GREETINGS, GREETING_STEP)
    }
}

impl GreetingSequence {
    /// `greetings` must not be empty.
    pub fn new(greetings: &'static [Greeting], step: Duration) -> Self {
        debug_assert!(!greetings.is_empty());
        Self {
            greetings,
            step: step.max(Duration::from_millis(1)),
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    fn rotation(&self) -> Duration {
        self.step * self.greetings.len() as u32
    }

    pub fn welcome_at(&self) -> Duration {
        self.rotation() + WELCOME_DELAY
    }

    pub fn fade_at(&self) -> Duration {
        self.rotation() + FADE_DELAY
    }

    pub fn complete_at(&self) -> Duration {
        self.fade_at() + FADE_DURATION
    }

    pub fn frame_at(&self, elapsed: Duration) -> GreetingFrame {
        let steps = (elapsed.as_millis() / self.step.as_millis()) as usize;
        let greeting = self
            .greetings
            .get(steps % self.greetings.len().max(1))
            .copied()
            .unwrap_or(Greeting { text: "Hi", language: "English" });
        GreetingFrame {
            greeting,
            show_welcome: elapsed >= self.welcome_at(),
            fading: elapsed >= self.fade_at(),
            complete: elapsed >= self.complete_at(),
        }
    }
}
