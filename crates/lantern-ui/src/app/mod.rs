//! Browser glue: binds one [`Controller`] to the live document.
//!
//! Listeners live for the lifetime of the page, so every handle is
//! forgotten after registration. Timers are fire-and-forget as well.

use crate::core::controller::{Controller, Deferred, Scheduled, SubmitOutcome};
use crate::core::demo::DemoEvent;
use crate::core::dropdown::ClickOrigin;
use crate::core::validation::Field;
use crate::error::UiResult;
use gloo::console;
use gloo::events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use page::Page;
use preferences::{LocalPreferences, prefers_dark};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

mod dom;
mod page;
mod preferences;

struct App {
    page: Page,
    ui: RefCell<Controller<LocalPreferences>>,
}

impl App {
    fn schedule(self: &Rc<Self>, scheduled: Scheduled) {
        let app = Rc::clone(self);
        Timeout::new(scheduled.after_ms, move || app.finish(scheduled.task)).forget();
    }

    fn finish(&self, task: Deferred) {
        if task == Deferred::ResetForm {
            self.page.form.reset();
        }
        self.ui.borrow_mut().run_deferred(task);
        let ui = self.ui.borrow();
        match task {
            Deferred::RevertKeyStatus => self.page.render_key_status(ui.key_status()),
            Deferred::ResetForm => {
                self.page.render_success(ui.success_visible());
                for field in Field::ALL {
                    self.page.render_field(field, ui.field_status(field));
                }
            }
        }
    }
}

/// Bind every behaviour to the current document.
pub fn run_app() {
    console_error_panic_hook::set_once();
    match bind() {
        Ok(listeners) => console::log!("lantern: page bound", listeners.to_string(), "listeners"),
        Err(err) => console::error!("lantern: page left inert", err.to_string()),
    }
}

fn bind() -> UiResult<usize> {
    let page = Page::capture(gloo::utils::document())?;
    let ui = Controller::new(
        &page.config,
        LocalPreferences::open(),
        prefers_dark(),
        page.seed(),
    );
    page.render_theme(ui.theme());
    let app = Rc::new(App {
        page,
        ui: RefCell::new(ui),
    });

    let mut listeners = Vec::new();
    listeners.extend(bind_theme(&app));
    listeners.extend(bind_faq(&app));
    listeners.extend(bind_dropdown(&app));
    listeners.extend(bind_demo(&app));
    listeners.extend(bind_form(&app));

    let count = listeners.len();
    listeners.into_iter().for_each(EventListener::forget);
    Ok(count)
}

fn bind_theme(app: &Rc<App>) -> Vec<EventListener> {
    let handler = EventListener::new(&app.page.theme_toggle, "click", {
        let app = Rc::clone(app);
        move |_event| {
            let theme = app.ui.borrow_mut().toggle_theme();
            app.page.render_theme(theme);
        }
    });
    vec![handler]
}

fn bind_faq(app: &Rc<App>) -> Vec<EventListener> {
    app.page
        .faq
        .iter()
        .enumerate()
        .map(|(index, panel)| {
            let handler_app = Rc::clone(app);
            EventListener::new(&panel.question, "click", move |_event| {
                handler_app.ui.borrow_mut().click_faq(index);
                handler_app.page.render_faq(handler_app.ui.borrow().faq());
            })
        })
        .collect()
}

fn bind_dropdown(app: &Rc<App>) -> Vec<EventListener> {
    let route = |origin: ClickOrigin, stop: bool| {
        let app = Rc::clone(app);
        move |event: &web_sys::Event| {
            if stop {
                event.stop_propagation();
            }
            let visible = app.ui.borrow_mut().dropdown_click(origin);
            app.page.render_dropdown(visible);
        }
    };
    vec![
        EventListener::new(
            &app.page.dropdown_toggle,
            "click",
            route(ClickOrigin::Toggle, true),
        ),
        EventListener::new(
            &app.page.dropdown_menu,
            "click",
            route(ClickOrigin::Menu, true),
        ),
        EventListener::new(
            &app.page.document,
            "click",
            route(ClickOrigin::Outside, false),
        ),
    ]
}

fn bind_demo(app: &Rc<App>) -> Vec<EventListener> {
    let mut listeners: Vec<EventListener> = DemoEvent::all()
        .into_iter()
        .map(|demo_event| {
            let handler_app = Rc::clone(app);
            EventListener::new(&app.page.demo_box, demo_event.dom_event(), move |_event| {
                let look = handler_app.ui.borrow_mut().demo_event(demo_event);
                handler_app.page.render_demo(look);
            })
        })
        .collect();

    listeners.push(EventListener::new(&app.page.document, "keydown", {
        let app = Rc::clone(app);
        move |event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                return;
            };
            let scheduled = app.ui.borrow_mut().key_down(&key);
            app.page.render_key_status(app.ui.borrow().key_status());
            app.schedule(scheduled);
        }
    }));
    listeners
}

fn bind_form(app: &Rc<App>) -> Vec<EventListener> {
    let mut listeners: Vec<EventListener> = Field::ALL
        .into_iter()
        .map(|field| {
            let handler_app = Rc::clone(app);
            EventListener::new(app.page.input(field), "input", move |_event| {
                let raw = handler_app.page.input(field).value();
                let status = handler_app.ui.borrow_mut().input(field, &raw);
                handler_app.page.render_field(field, status);
            })
        })
        .collect();

    listeners.push(EventListener::new_with_options(
        &app.page.form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        {
            let app = Rc::clone(app);
            move |event| {
                event.prevent_default();
                let values = app.page.values();
                let outcome = app.ui.borrow_mut().submit(&values);
                {
                    let ui = app.ui.borrow();
                    for field in Field::ALL {
                        app.page.render_field(field, ui.field_status(field));
                    }
                }
                if let SubmitOutcome::Accepted(scheduled) = outcome {
                    app.page.render_success(true);
                    app.schedule(scheduled);
                }
            }
        },
    ));
    listeners
}
