/// Whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnPhase {
    /// Waiting for player input.
    #[default]
    PlayerTurn,
    /// Monsters act.
    MobTurn,
}

/// What player input currently controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Movement, attacks and pickups.
    #[default]
    Normal,
    /// The examine cursor moves instead of the player.
    Examining,
    /// The inventory listing is open.
    Menu,
    /// Details of one inventory item are shown.
    InformationSubscreen,
}

/// A player command, already decoded from raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Step (or move the examine cursor) by one tile in any of 8 directions.
    Move {
        /// Horizontal step.
        dx: i32,
        /// Vertical step.
        dy: i32,
    },
    /// Let a turn pass.
    Wait,
    /// Enter or leave examine mode.
    ToggleExamine,
    /// Open the inventory menu.
    OpenInventory,
    /// Back out of the current screen.
    Cancel,
    /// Pick up what lies underfoot.
    Pickup,
    /// Select an inventory letter.
    SelectItem(char),
}

impl Intent {
    /// Whether this intent costs a turn when resolved in [`Mode::Normal`].
    pub fn takes_turn(self) -> bool {
        matches!(self, Self::Move { .. } | Self::Wait | Self::Pickup)
    }
}

/// The result of handling one intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player acted and the mob sweep ran.
    TurnTaken,
    /// Something changed but no time passed.
    FreeAction,
    /// The intent means nothing in the current mode.
    Ignored,
}
