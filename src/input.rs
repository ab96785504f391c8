//! Control polling
//!
//! The presentation layer owns the real keyboard; the simulation only asks
//! whether a logical control is held or was pressed this frame.

/// Logical game controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Up,
    Down,
    Left,
    Right,
    /// Discrete climb (one press = one step)
    NudgeUp,
    /// Discrete dive (one press = one step)
    NudgeDown,
    Restart,
    Quit,
}

/// Source of per-frame control state
pub trait InputSource {
    /// Is the control currently held down
    fn is_held(&self, control: Control) -> bool;
    /// Was the control pressed during this frame (non-repeating)
    fn was_pressed(&self, control: Control) -> bool;
}

/// Plain snapshot of the controls for one frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    held: Vec<Control>,
    pressed: Vec<Control>,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a control as held
    pub fn hold(mut self, control: Control) -> Self {
        if !self.held.contains(&control) {
            self.held.push(control);
        }
        self
    }

    /// Mark a control as pressed this frame
    pub fn press(mut self, control: Control) -> Self {
        if !self.pressed.contains(&control) {
            self.pressed.push(control);
        }
        self
    }

    pub fn set_held(&mut self, control: Control, down: bool) {
        match down {
            true if !self.held.contains(&control) => {
                self.held.push(control);
                self.pressed.push(control);
            }
            false => self.held.retain(|c| *c != control),
            _ => {}
        }
    }

    /// Forget one-shot presses (call after each frame)
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
    }
}

impl InputSource for FrameInput {
    fn is_held(&self, control: Control) -> bool {
        self.held.contains(&control)
    }

    fn was_pressed(&self, control: Control) -> bool {
        self.pressed.contains(&control)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_held_records_press_once() {
        let mut input = FrameInput::new();
        input.set_held(Control::Up, true);
        assert!(input.is_held(Control::Up));
        assert!(input.was_pressed(Control::Up));

        input.begin_frame();
        input.set_held(Control::Up, true);
        assert!(input.is_held(Control::Up));
        assert!(!input.was_pressed(Control::Up));

        input.set_held(Control::Up, false);
        assert!(!input.is_held(Control::Up));
    }

    #[test]
    fn test_builder() {
        let input = FrameInput::new().hold(Control::Left).press(Control::Quit);
        assert!(input.is_held(Control::Left));
        assert!(!input.is_held(Control::Quit));
        assert!(input.was_pressed(Control::Quit));
    }
}
