//! Pointer and keyboard interaction demo.

/// Default text of the key display line.
pub const KEY_PROMPT: &str = "Press any key to see it here";

/// Pointer events the demo box reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoEvent {
    /// Pointer entered the box.
    Enter,
    /// Pointer left the box.
    Leave,
    /// Single click.
    Click,
    /// Double click.
    DoubleClick,
}

impl DemoEvent {
    /// DOM event name the browser layer listens for.
    #[must_use]
    pub const fn dom_event(self) -> &'static str {
        match self {
            Self::Enter => "mouseover",
            Self::Leave => "mouseout",
            Self::Click => "click",
            Self::DoubleClick => "dblclick",
        }
    }

    /// Every event, in registration order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Enter, Self::Leave, Self::Click, Self::DoubleClick]
    }
}

/// Background colours used by the demo box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoColor {
    /// Resting blue.
    Blue,
    /// Hover red.
    Red,
    /// Click green.
    Green,
    /// Double-click purple.
    Purple,
}

impl DemoColor {
    /// CSS hex value.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Blue => "#4a90e2",
            Self::Red => "#e74c3c",
            Self::Green => "#2ecc71",
            Self::Purple => "#9b59b6",
        }
    }
}

/// Appearance of the demo box after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoBox {
    /// Background colour.
    pub color: DemoColor,
    /// Text shown inside the box.
    pub label: &'static str,
}

impl DemoBox {
    /// Appearance for `event`. The last event always wins.
    #[must_use]
    pub const fn for_event(event: DemoEvent) -> Self {
        match event {
            DemoEvent::Enter => Self {
                color: DemoColor::Red,
                label: "Mouse Over!",
            },
            DemoEvent::Leave => Self {
                color: DemoColor::Blue,
                label: "Click Me!",
            },
            DemoEvent::Click => Self {
                color: DemoColor::Green,
                label: "Clicked!",
            },
            DemoEvent::DoubleClick => Self {
                color: DemoColor::Purple,
                label: "Double Clicked!",
            },
        }
    }
}

/// Content of the key display line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum KeyStatus {
    /// Default prompt.
    #[default]
    Prompt,
    /// Most recent key identifier.
    Pressed(String),
}

impl KeyStatus {
    /// Text to render.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Prompt => KEY_PROMPT.to_string(),
            Self::Pressed(key) => format!("You pressed: {key}"),
        }
    }
}
