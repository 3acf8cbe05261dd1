//! Dropdown menu visibility with outside-click dismissal.

/// Where a click landed relative to the dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOrigin {
    /// The toggle control.
    Toggle,
    /// Anywhere inside the menu, items included.
    Menu,
    /// Anywhere else on the page.
    Outside,
}

/// Visibility state of the dropdown menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dropdown {
    visible: bool,
}

impl Dropdown {
    /// Hidden menu.
    #[must_use]
    pub const fn new() -> Self {
        Self { visible: false }
    }

    /// Seeded from markup, for a menu that ships already shown.
    #[must_use]
    pub const fn with_visible(visible: bool) -> Self {
        Self { visible }
    }

    /// Whether the menu is shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Apply a click. Toggle flips, menu clicks keep the menu as is and
    /// outside clicks close it.
    pub fn click(&mut self, origin: ClickOrigin) {
        match origin {
            ClickOrigin::Toggle => self.visible = !self.visible,
            ClickOrigin::Menu => {}
            ClickOrigin::Outside => self.visible = false,
        }
    }
}
