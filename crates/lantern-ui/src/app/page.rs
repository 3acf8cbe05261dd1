//! Element handles captured at start-up and state-to-DOM rendering.

use crate::app::dom::{
    by_id, has_class, html_by_id, query, query_all, query_in, set_class, set_display, set_text,
    typed_by_id,
};
use crate::config::{CONFIG_ATTRIBUTE, PageConfig};
use crate::core::controller::PageSeed;
use crate::core::demo::{DemoBox, KeyStatus};
use crate::core::faq::Accordion;
use crate::core::form::FormValues;
use crate::core::theme::ThemeMode;
use crate::core::validation::{Field, FieldStatus};
use crate::error::{UiError, UiResult};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement};

/// One FAQ panel and its parts.
pub(crate) struct FaqPanel {
    pub(crate) item: Element,
    pub(crate) question: Element,
    pub(crate) icon: Element,
}

/// Every element the controller touches.
pub(crate) struct Page {
    pub(crate) config: PageConfig,
    pub(crate) document: Document,
    pub(crate) body: HtmlElement,
    pub(crate) theme_toggle: HtmlElement,
    pub(crate) faq: Vec<FaqPanel>,
    pub(crate) dropdown_toggle: Element,
    pub(crate) dropdown_menu: Element,
    pub(crate) demo_box: HtmlElement,
    pub(crate) key_display: Element,
    pub(crate) form: HtmlFormElement,
    pub(crate) inputs: [HtmlInputElement; 4],
    pub(crate) errors: [HtmlElement; 4],
    pub(crate) success: HtmlElement,
}

impl Page {
    pub(crate) fn capture(document: Document) -> UiResult<Self> {
        let body = document.body().ok_or_else(|| UiError::MissingElement {
            selector: "body".to_string(),
        })?;
        let config = PageConfig::from_attribute(body.get_attribute(CONFIG_ATTRIBUTE).as_deref())?;

        let faq = query_all(&document, &config.faq.item_selector)?
            .into_iter()
            .map(|item| -> UiResult<FaqPanel> {
                Ok(FaqPanel {
                    question: query_in(&item, &config.faq.question_selector)?,
                    icon: query_in(&item, &config.faq.icon_selector)?,
                    item,
                })
            })
            .collect::<UiResult<Vec<_>>>()?;

        let form_ids = &config.form;
        let inputs = each(&form_ids.input_ids, |id| {
            typed_by_id::<HtmlInputElement>(&document, id, "HtmlInputElement")
        })?;
        let errors = each(&form_ids.error_ids, |id| html_by_id(&document, id))?;

        Ok(Self {
            theme_toggle: html_by_id(&document, &config.theme.toggle_id)?,
            faq,
            dropdown_toggle: query(&document, &config.dropdown.toggle_selector)?,
            dropdown_menu: query(&document, &config.dropdown.menu_selector)?,
            demo_box: html_by_id(&document, &config.demo.box_id)?,
            key_display: by_id(&document, &config.demo.key_display_id)?,
            form: typed_by_id(&document, &form_ids.form_id, "HtmlFormElement")?,
            inputs,
            errors,
            success: html_by_id(&document, &form_ids.success_id)?,
            body,
            document,
            config,
        })
    }

    pub(crate) fn seed(&self) -> PageSeed {
        PageSeed {
            faq_panels: self.faq.len(),
            faq_open: self
                .faq
                .iter()
                .position(|panel| has_class(&panel.item, &self.config.faq.open_class)),
            dropdown_visible: has_class(&self.dropdown_menu, &self.config.dropdown.visible_class),
        }
    }

    pub(crate) fn input(&self, field: Field) -> &HtmlInputElement {
        &self.inputs[field.index()]
    }

    pub(crate) fn values(&self) -> FormValues {
        FormValues {
            name: self.input(Field::Name).value(),
            email: self.input(Field::Email).value(),
            password: self.input(Field::Password).value(),
            phone: self.input(Field::Phone).value(),
        }
    }

    pub(crate) fn render_theme(&self, theme: ThemeMode) {
        set_class(&self.body, &self.config.theme.dark_class, theme.is_dark());
        set_text(&self.theme_toggle, theme.toggle_label());
    }

    pub(crate) fn render_faq(&self, faq: &Accordion) {
        for (index, panel) in self.faq.iter().enumerate() {
            set_class(&panel.item, &self.config.faq.open_class, faq.is_open(index));
            set_text(&panel.icon, faq.icon(index));
        }
    }

    pub(crate) fn render_dropdown(&self, visible: bool) {
        set_class(
            &self.dropdown_menu,
            &self.config.dropdown.visible_class,
            visible,
        );
    }

    pub(crate) fn render_demo(&self, look: DemoBox) {
        let _ = self
            .demo_box
            .style()
            .set_property("background-color", look.color.hex());
        set_text(&self.demo_box, look.label);
    }

    pub(crate) fn render_key_status(&self, status: &KeyStatus) {
        set_text(&self.key_display, &status.text());
    }

    pub(crate) fn render_field(&self, field: Field, status: FieldStatus) {
        let form = &self.config.form;
        let input = self.input(field);
        match status {
            FieldStatus::Invalid => {
                set_class(input, &form.error_class, true);
                set_class(input, &form.success_class, false);
                set_display(&self.errors[field.index()], true);
            }
            FieldStatus::Valid => {
                set_class(input, &form.error_class, false);
                set_class(input, &form.success_class, true);
                if let Some(sibling) = input.next_element_sibling()
                    && has_class(&sibling, &form.error_message_class)
                    && let Ok(message) = sibling.dyn_into::<HtmlElement>()
                {
                    set_display(&message, false);
                }
            }
            FieldStatus::Untouched => set_class(input, &form.success_class, false),
        }
    }

    pub(crate) fn render_success(&self, visible: bool) {
        set_display(&self.success, visible);
    }
}

fn each<T>(ids: &[String; 4], mut lookup: impl FnMut(&str) -> UiResult<T>) -> UiResult<[T; 4]> {
    let [name, email, password, phone] = ids;
    Ok([
        lookup(name)?,
        lookup(email)?,
        lookup(password)?,
        lookup(phone)?,
    ])
}
