//! Two-input barrier guarding the one-shot render.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateInput {
    /// The page shell is available to render into.
    DomReady,
    /// The catalog has been loaded and joined.
    DataLoaded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateAction {
    Wait,
    Render,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Waiting { dom_ready: bool, data_loaded: bool },
    Rendered,
}

/// Fires [`GateAction::Render`] exactly once: on whichever signal completes
/// the pair. Signals may arrive in either order; repeats are ignored.
#[derive(Debug, Clone)]
pub struct ReadyGate {
    state: GateState,
}

impl Default for ReadyGate {
    fn default() -> Self {
        Self {
            state: GateState::Waiting {
                dom_ready: false,
                data_loaded: false,
            },
        }
    }
}

impl ReadyGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_rendered(&self) -> bool {
        self.state == GateState::Rendered
    }

    pub fn signal(&mut self, input: GateInput) -> GateAction {
        let GateState::Waiting {
            mut dom_ready,
            mut data_loaded,
        } = self.state
        else {
            return GateAction::Wait;
        };

        match input {
            GateInput::DomReady => dom_ready = true,
            GateInput::DataLoaded => data_loaded = true,
        }

        if dom_ready && data_loaded {
            self.state = GateState::Rendered;
            GateAction::Render
        } else {
            self.state = GateState::Waiting {
                dom_ready,
                data_loaded,
            };
            GateAction::Wait
        }
    }
}
