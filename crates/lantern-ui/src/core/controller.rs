//! The single UI controller owning every behaviour's state.
//!
//! # Design
//! - Browser glue calls one method per DOM event and renders the result.
//! - Timers come back as [`Scheduled`] descriptors. Nothing retains a handle,
//!   so overlapping timers all fire and the last write wins.

use crate::config::PageConfig;
use crate::core::demo::{DemoBox, DemoEvent, KeyStatus};
use crate::core::dropdown::{ClickOrigin, Dropdown};
use crate::core::faq::Accordion;
use crate::core::form::{FormState, FormValues};
use crate::core::prefs::PreferenceStore;
use crate::core::theme::{ThemeMode, resolve};
use crate::core::validation::{Field, FieldStatus};

/// Work to run once a timer elapses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deferred {
    /// Put the key display back to its prompt.
    RevertKeyStatus,
    /// Clear the form and hide the success banner.
    ResetForm,
}

/// A fire-and-forget timer request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheduled {
    /// Delay in milliseconds.
    pub after_ms: u32,
    /// What to run afterwards.
    pub task: Deferred,
}

/// Result of a submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; show the banner and reset later.
    Accepted(Scheduled),
    /// At least one field failed; nothing beyond inline feedback.
    Rejected,
}

/// Open/closed state already present in the page markup at start-up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageSeed {
    /// Number of FAQ panels on the page.
    pub faq_panels: usize,
    /// Panel already marked open, if any.
    pub faq_open: Option<usize>,
    /// Whether the dropdown menu is already shown.
    pub dropdown_visible: bool,
}

impl PageSeed {
    /// Everything closed.
    #[must_use]
    pub const fn closed(faq_panels: usize) -> Self {
        Self {
            faq_panels,
            faq_open: None,
            dropdown_visible: false,
        }
    }
}

/// Page state plus the injected preference store.
#[derive(Debug)]
pub struct Controller<S> {
    store: S,
    theme_key: String,
    key_revert_ms: u32,
    reset_delay_ms: u32,
    theme: ThemeMode,
    faq: Accordion,
    dropdown: Dropdown,
    demo: Option<DemoBox>,
    key_status: KeyStatus,
    form: FormState,
    success_visible: bool,
}

impl<S: PreferenceStore> Controller<S> {
    /// Build the controller, resolving the start-up theme from `store`
    /// and the system colour-scheme flag. FAQ and dropdown state start from
    /// `seed`.
    #[must_use]
    pub fn new(config: &PageConfig, store: S, prefers_dark: bool, seed: PageSeed) -> Self {
        let persisted = store.get(&config.theme.storage_key);
        let theme = resolve(persisted.as_deref(), prefers_dark);
        Self {
            store,
            theme_key: config.theme.storage_key.clone(),
            key_revert_ms: config.demo.key_revert_ms,
            reset_delay_ms: config.form.reset_delay_ms,
            theme,
            faq: Accordion::with_open(seed.faq_panels, seed.faq_open),
            dropdown: Dropdown::with_visible(seed.dropdown_visible),
            demo: None,
            key_status: KeyStatus::Prompt,
            form: FormState::new(),
            success_visible: false,
        }
    }

    /// Borrow the preference store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Current theme.
    #[must_use]
    pub const fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Flip the theme and persist the new value.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggled();
        self.store.set(&self.theme_key, self.theme.as_str());
        self.theme
    }

    /// FAQ accordion state.
    #[must_use]
    pub const fn faq(&self) -> &Accordion {
        &self.faq
    }

    /// Header click on FAQ panel `index`.
    pub fn click_faq(&mut self, index: usize) {
        self.faq.click(index);
    }

    /// Whether the dropdown menu is shown.
    #[must_use]
    pub const fn dropdown_visible(&self) -> bool {
        self.dropdown.is_visible()
    }

    /// Route a click to the dropdown.
    pub fn dropdown_click(&mut self, origin: ClickOrigin) -> bool {
        self.dropdown.click(origin);
        self.dropdown.is_visible()
    }

    /// Demo box appearance, `None` until the first pointer event.
    #[must_use]
    pub const fn demo(&self) -> Option<DemoBox> {
        self.demo
    }

    /// Pointer event on the demo box.
    pub fn demo_event(&mut self, event: DemoEvent) -> DemoBox {
        let look = DemoBox::for_event(event);
        self.demo = Some(look);
        look
    }

    /// Key display content.
    #[must_use]
    pub const fn key_status(&self) -> &KeyStatus {
        &self.key_status
    }

    /// Keydown anywhere on the page. Each press schedules its own revert.
    pub fn key_down(&mut self, key: &str) -> Scheduled {
        self.key_status = KeyStatus::Pressed(key.to_string());
        Scheduled {
            after_ms: self.key_revert_ms,
            task: Deferred::RevertKeyStatus,
        }
    }

    /// Status of one form field.
    #[must_use]
    pub const fn field_status(&self, field: Field) -> FieldStatus {
        self.form.status(field)
    }

    /// Input event on one form field.
    pub fn input(&mut self, field: Field, raw: &str) -> FieldStatus {
        self.form.input(field, raw)
    }

    /// Whether the success banner is shown.
    #[must_use]
    pub const fn success_visible(&self) -> bool {
        self.success_visible
    }

    /// Submit attempt with the current raw values.
    pub fn submit(&mut self, values: &FormValues) -> SubmitOutcome {
        if self.form.submit(values) {
            self.success_visible = true;
            SubmitOutcome::Accepted(Scheduled {
                after_ms: self.reset_delay_ms,
                task: Deferred::ResetForm,
            })
        } else {
            SubmitOutcome::Rejected
        }
    }

    /// Run a task whose timer elapsed.
    pub fn run_deferred(&mut self, task: Deferred) {
        match task {
            Deferred::RevertKeyStatus => self.key_status = KeyStatus::Prompt,
            Deferred::ResetForm => {
                self.form.clear_success();
                self.success_visible = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prefs::MemoryPreferences;

    fn controller(store: MemoryPreferences, prefers_dark: bool) -> Controller<MemoryPreferences> {
        Controller::new(
            &PageConfig::default(),
            store,
            prefers_dark,
            PageSeed::closed(3),
        )
    }

    #[test]
    fn start_up_does_not_write_the_preference() {
        let ui = controller(MemoryPreferences::new(), true);
        assert_eq!(ui.theme(), ThemeMode::Dark);
        assert_eq!(ui.store().get("theme"), None);
    }

    #[test]
    fn toggle_persists_the_new_mode() {
        let mut ui = controller(MemoryPreferences::with("theme", "dark"), false);
        assert_eq!(ui.toggle_theme(), ThemeMode::Light);
        assert_eq!(ui.store().get("theme").as_deref(), Some("light"));
        assert_eq!(ui.toggle_theme(), ThemeMode::Dark);
        assert_eq!(ui.store().get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn custom_storage_key_is_honoured() {
        let mut config = PageConfig::default();
        config.theme.storage_key = "site.theme".to_string();
        let mut ui = Controller::new(
            &config,
            MemoryPreferences::new(),
            false,
            PageSeed::closed(0),
        );
        ui.toggle_theme();
        assert_eq!(ui.store().get("site.theme").as_deref(), Some("dark"));
        assert_eq!(ui.store().get("theme"), None);
    }

    #[test]
    fn rapid_keys_each_schedule_a_revert() {
        let mut ui = controller(MemoryPreferences::new(), false);
        let first = ui.key_down("a");
        let second = ui.key_down("b");
        assert_eq!(first, second);
        assert_eq!(first.after_ms, 2_000);
        assert_eq!(ui.key_status().text(), "You pressed: b");
        // The first timer still fires and wins over the newer key.
        ui.run_deferred(first.task);
        assert_eq!(*ui.key_status(), KeyStatus::Prompt);
        ui.run_deferred(second.task);
        assert_eq!(*ui.key_status(), KeyStatus::Prompt);
    }

    #[test]
    fn demo_remembers_only_the_last_event() {
        let mut ui = controller(MemoryPreferences::new(), false);
        assert_eq!(ui.demo(), None);
        ui.demo_event(DemoEvent::Click);
        let look = ui.demo_event(DemoEvent::Leave);
        assert_eq!(look.label, "Click Me!");
        assert_eq!(ui.demo(), Some(look));
    }

    #[test]
    fn input_during_reset_delay_keeps_its_error() {
        let mut ui = controller(MemoryPreferences::new(), false);
        let values = FormValues {
            name: "Jo".to_string(),
            email: "a@b.co".to_string(),
            password: "Abcdef1!".to_string(),
            phone: "1234567890".to_string(),
        };
        let SubmitOutcome::Accepted(scheduled) = ui.submit(&values) else {
            panic!("valid form rejected");
        };
        assert_eq!(ui.input(Field::Email, "a@"), FieldStatus::Invalid);
        ui.run_deferred(scheduled.task);
        assert!(!ui.success_visible());
        assert_eq!(ui.field_status(Field::Email), FieldStatus::Invalid);
        assert_eq!(ui.field_status(Field::Phone), FieldStatus::Untouched);
    }

    #[test]
    fn markup_seed_drives_first_clicks() {
        let seed = PageSeed {
            faq_panels: 2,
            faq_open: Some(1),
            dropdown_visible: true,
        };
        let mut ui = Controller::new(
            &PageConfig::default(),
            MemoryPreferences::new(),
            false,
            seed,
        );
        ui.click_faq(1);
        assert_eq!(ui.faq().open_panel(), None);
        assert!(!ui.dropdown_click(ClickOrigin::Toggle));
    }

    #[test]
    fn rejected_submit_keeps_banner_hidden() {
        let mut ui = controller(MemoryPreferences::new(), false);
        let outcome = ui.submit(&FormValues::default());
        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert!(!ui.success_visible());
        assert_eq!(ui.field_status(Field::Email), FieldStatus::Invalid);
    }
}
