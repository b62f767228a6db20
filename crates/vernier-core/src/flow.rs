// File: crates/vernier-core/src/flow.rs
// Summary: Linear screen flow: a named sequence with forward/back transitions.

/// Screens of the host application, in their linear order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Goals,
    Measurements,
    Birthdate,
    GeneratePlan,
    PlanReady,
    Dashboard,
    Camera,
    Profile,
}

/// One-directional navigation over a fixed screen sequence: forward on
/// continue, backward on cancel. No cycles, no dynamic dispatch; position
/// is tracked with a simple back stack.
pub struct Flow {
    sequence: Vec<Screen>,
    position: usize,
    stack: Vec<usize>,
}

impl Flow {
    /// Default onboarding-through-app sequence of the host.
    pub fn onboarding() -> Self {
        Self::new(vec![
            Screen::Welcome,
            Screen::Goals,
            Screen::Measurements,
            Screen::Birthdate,
            Screen::GeneratePlan,
            Screen::PlanReady,
            Screen::Dashboard,
        ])
    }

    /// Flow over an explicit non-empty sequence.
    /// An empty sequence falls back to a single Welcome screen.
    pub fn new(sequence: Vec<Screen>) -> Self {
        let sequence = if sequence.is_empty() { vec![Screen::Welcome] } else { sequence };
        Self { sequence, position: 0, stack: Vec::new() }
    }

    pub fn current(&self) -> Screen {
        self.sequence[self.position]
    }

    /// Move forward; returns the new screen, or `None` at the end.
    pub fn advance(&mut self) -> Option<Screen> {
        if self.position + 1 >= self.sequence.len() {
            return None;
        }
        self.stack.push(self.position);
        self.position += 1;
        Some(self.current())
    }

    /// Move backward by popping the stack; `None` at the start.
    pub fn back(&mut self) -> Option<Screen> {
        self.position = self.stack.pop()?;
        Some(self.current())
    }

    /// How many screens deep the back stack is.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
