/// Identifies a resize controller when it claims the system cursor.
pub type ControllerId = u64;

/// Process-wide visibility of the platform pointer.
///
/// A controller hides the pointer by claiming it; the last claim wins. Only
/// the current owner can make it visible again.
#[derive(Debug)]
pub struct SystemCursor {
    visible: bool,
    owner: Option<ControllerId>,
}

impl Default for SystemCursor {
    fn default() -> Self {
        Self {
            visible: true,
            owner: None,
        }
    }
}

impl SystemCursor {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn owner(&self) -> Option<ControllerId> {
        self.owner
    }

    pub fn hide_for(&mut self, id: ControllerId) {
        self.owner = Some(id);
        self.visible = false;
    }

    /// Restores visibility if `id` holds the claim. Returns `true` on release.
    pub fn release(&mut self, id: ControllerId) -> bool {
        if self.owner != Some(id) {
            return false;
        }
        self.owner = None;
        self.visible = true;
        true
    }
}
