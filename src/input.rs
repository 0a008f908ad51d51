//! Input mapping
//!
//! Turns a batch of platform-neutral input events into paddle motion and a
//! quit request. The windowing layer decides which physical keys map to
//! which [`Key`]; this module only knows what each one does.

use crate::sim::GameState;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Escape,
    Other,
}

/// A raw input event drained from the platform queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close / OS quit request
    Quit,
    /// Key pressed (OS auto-repeat produces more of these while held)
    KeyDown(Key),
}

/// Result of applying a batch of events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Continue,
    Quit,
}

/// Applies input events to the player's (left) paddle
#[derive(Debug, Clone, Copy)]
pub struct InputMapper {
    paddle_speed: f32,
}

impl InputMapper {
    pub fn new(paddle_speed: f32) -> Self {
        Self { paddle_speed }
    }

    /// Apply every event in the batch.
    ///
    /// Paddle moves are not clamped here; the next simulation tick pulls the
    /// paddle back on court before anything is drawn.
    pub fn apply<I>(&self, events: I, state: &mut GameState) -> InputCommand
    where
        I: IntoIterator<Item = InputEvent>,
    {
        let mut command = InputCommand::Continue;
        for event in events {
            match event {
                InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => {
                    command = InputCommand::Quit;
                }
                InputEvent::KeyDown(Key::Up) => state.left_paddle.y -= self.paddle_speed,
                InputEvent::KeyDown(Key::Down) => state.left_paddle.y += self.paddle_speed,
                InputEvent::KeyDown(Key::Other) => {}
            }
        }
        command
    }
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::new(crate::consts::PADDLE_SPEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_up_and_down_move_left_paddle() {
        let mut state = GameState::default();
        let mapper = InputMapper::default();

        let command = mapper.apply([InputEvent::KeyDown(Key::Up)], &mut state);
        assert_eq!(command, InputCommand::Continue);
        assert_eq!(state.left_paddle.y, 252.0);

        mapper.apply(
            [InputEvent::KeyDown(Key::Down), InputEvent::KeyDown(Key::Down)],
            &mut state,
        );
        assert_eq!(state.left_paddle.y, 288.0);
        // Right paddle belongs to the computer
        assert_eq!(state.right_paddle.y, 270.0);
    }

    #[test]
    fn test_escape_and_close_request_quit() {
        let mut state = GameState::default();
        let mapper = InputMapper::default();

        assert_eq!(
            mapper.apply([InputEvent::KeyDown(Key::Escape)], &mut state),
            InputCommand::Quit
        );
        assert_eq!(mapper.apply([InputEvent::Quit], &mut state), InputCommand::Quit);
    }

    #[test]
    fn test_batch_is_fully_drained_after_quit() {
        let mut state = GameState::default();
        let mapper = InputMapper::default();

        let command = mapper.apply(
            [InputEvent::Quit, InputEvent::KeyDown(Key::Up)],
            &mut state,
        );
        assert_eq!(command, InputCommand::Quit);
        assert_eq!(state.left_paddle.y, 252.0);
    }

    #[test]
    fn test_no_clamping_on_input() {
        let mut state = GameState::default();
        let mapper = InputMapper::default();

        let presses = std::iter::repeat_n(InputEvent::KeyDown(Key::Up), 20);
        mapper.apply(presses, &mut state);
        assert_eq!(state.left_paddle.y, 270.0 - 20.0 * 18.0);
    }

    #[test]
    fn test_other_keys_and_empty_batch_do_nothing() {
        let mut state = GameState::default();
        let mapper = InputMapper::default();

        assert_eq!(
            mapper.apply([InputEvent::KeyDown(Key::Other)], &mut state),
            InputCommand::Continue
        );
        assert_eq!(mapper.apply(Vec::new(), &mut state), InputCommand::Continue);
        assert_eq!(state.left_paddle.y, 270.0);
    }
}
