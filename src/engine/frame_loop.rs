use crate::engine::SceneComposer;
use crate::error::DioramaError;
use crate::input::{InputEvent, InputProcessor};
use crate::render::RenderBackend;
use crate::util::frame_timing::FrameTiming;

/// Window or context that feeds events in and shows finished frames.
pub trait FrameHost {
    /// Append every event that arrived since the last call.
    fn poll_events(&mut self, events: &mut Vec<InputEvent>);

    /// Show the frame just drawn. A lost context surfaces as
    /// [`DioramaError::Backend`] and ends the loop.
    fn present(&mut self) -> Result<(), DioramaError>;
}

/// Single-threaded poll → update → draw → present loop.
///
/// Quitting is only observed at the start of an iteration, so a frame that
/// has begun always completes.
#[derive(Debug)]
pub struct FrameLoop {
    composer: SceneComposer,
    input: InputProcessor,
    timing: FrameTiming,
    events: Vec<InputEvent>,
    frames: u64,
}

impl FrameLoop {
    /// Wrap a composer, pacing frames at the configured target FPS.
    #[must_use]
    pub fn new(composer: SceneComposer) -> Self {
        let timing = FrameTiming::new(composer.options().display.target_fps);
        let input = InputProcessor::with_key_bindings(
            composer.options().keybindings.clone(),
        );
        Self {
            composer,
            input,
            timing,
            events: Vec::new(),
            frames: 0,
        }
    }

    /// The composer being driven.
    #[must_use]
    pub fn composer(&self) -> &SceneComposer {
        &self.composer
    }

    /// Mutable composer access.
    pub fn composer_mut(&mut self) -> &mut SceneComposer {
        &mut self.composer
    }

    /// Frame pacing and FPS.
    #[must_use]
    pub fn timing(&self) -> &FrameTiming {
        &self.timing
    }

    /// Frames completed so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Translate and apply one raw event.
    pub fn handle_event(&mut self, event: &InputEvent) {
        if let Some(cmd) = self.input.handle_event(event) {
            self.composer.execute(cmd);
        }
    }

    /// Run one full frame of `dt` seconds: poll, update, draw, present.
    pub fn step(
        &mut self,
        host: &mut dyn FrameHost,
        backend: &mut dyn RenderBackend,
        dt: f32,
    ) -> Result<(), DioramaError> {
        let mut events = std::mem::take(&mut self.events);
        host.poll_events(&mut events);
        for event in events.drain(..) {
            self.handle_event(&event);
        }
        self.events = events;

        self.composer.update(dt);
        let _ = self.composer.render(backend);
        host.present()?;
        self.frames += 1;
        Ok(())
    }

    /// Close the previous frame on the frame timer and run the next one
    /// with the measured `dt`.
    pub fn next_frame(
        &mut self,
        host: &mut dyn FrameHost,
        backend: &mut dyn RenderBackend,
    ) -> Result<(), DioramaError> {
        let dt = self.timing.end_frame();
        self.step(host, backend, dt)
    }

    /// Loop until a quit command arrives or presenting fails.
    pub fn run(
        &mut self,
        host: &mut dyn FrameHost,
        backend: &mut dyn RenderBackend,
    ) -> Result<(), DioramaError> {
        log::info!(
            "frame loop started ({} fps cap)",
            self.timing.target_fps()
        );
        while !self.composer.quit_requested() {
            if !self.timing.should_render() {
                std::thread::sleep(self.timing.time_until_next_frame());
                continue;
            }
            self.next_frame(host, backend)?;
        }
        log::info!("frame loop stopped after {} frames", self.frames);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::engine::tests::knight_composer;
    use crate::render::recording::{Call, RecordingBackend};

    /// Host that replays one batch of events per frame.
    #[derive(Default)]
    struct ScriptedHost {
        batches: VecDeque<Vec<InputEvent>>,
        presented: u32,
        fail_on: Option<u32>,
    }

    impl FrameHost for ScriptedHost {
        fn poll_events(&mut self, events: &mut Vec<InputEvent>) {
            if let Some(batch) = self.batches.pop_front() {
                events.extend(batch);
            }
        }

        fn present(&mut self) -> Result<(), DioramaError> {
            self.presented += 1;
            if self.fail_on == Some(self.presented) {
                return Err(DioramaError::Backend("context lost".into()));
            }
            Ok(())
        }
    }

    fn key(k: &str) -> InputEvent {
        InputEvent::KeyDown { key: k.into() }
    }

    #[test]
    fn quit_finishes_the_current_frame() {
        let mut frame_loop = FrameLoop::new(knight_composer());
        let mut host = ScriptedHost {
            batches: VecDeque::from([vec![], vec![key("Escape")]]),
            ..ScriptedHost::default()
        };
        let mut backend = RecordingBackend::default();
        frame_loop.run(&mut host, &mut backend).unwrap();

        assert_eq!(frame_loop.frames(), 2);
        assert_eq!(host.presented, 2);
        let begins = backend.calls.iter().filter(|c| **c == Call::Begin).count();
        assert_eq!(begins, 2);
    }

    #[test]
    fn present_failure_ends_the_loop() {
        let mut frame_loop = FrameLoop::new(knight_composer());
        let mut host = ScriptedHost {
            fail_on: Some(3),
            ..ScriptedHost::default()
        };
        let mut backend = RecordingBackend::default();
        let result = frame_loop.run(&mut host, &mut backend);
        assert!(matches!(result, Err(DioramaError::Backend(_))));
        assert_eq!(frame_loop.frames(), 2);
    }

    #[test]
    fn step_applies_events_before_update() {
        let mut frame_loop = FrameLoop::new(knight_composer());
        let mut host = ScriptedHost {
            batches: VecDeque::from([vec![key("ArrowRight")]]),
            ..ScriptedHost::default()
        };
        let mut backend = RecordingBackend::default();
        frame_loop.step(&mut host, &mut backend, 0.25).unwrap();

        let rig = frame_loop.composer().camera_rig();
        assert_eq!(rig.preset_index(), 1);
        // Full View (6.0) → Sword Focus (3.5), half way through the blend
        assert!((rig.state().distance - 4.75).abs() < 1e-5);
    }
}
