//! `wasm-bindgen` exports for the pagination widget.
//!
//! Widget state lives in `Rc<RefCell<..>>` shared with the DOM listeners. JS
//! callbacks are kept in a separate hub and run with neither the widget nor the
//! hub borrowed, so a `changePage` callback may call `refresh`, `on`, `once` or
//! `off` on the same pager. Only compiled on `wasm32` targets.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Object, Reflect};
use juke_pager_core::services::class_names as cn;
use juke_pager_core::utils::{add_class, remove_class};
use juke_pager_core::{ClickTarget, EventHub, PagerError, PagerEvent, PagerEventType};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, HtmlSelectElement};

use crate::console_log;
use crate::dom::{DomContainer, DomDocument};
use crate::options::{parse_event_type, parse_options, parse_patch};

type Core = juke_pager_core::Pagination<DomContainer>;
type Listener = Closure<dyn FnMut(Event)>;

const DOM_EVENTS: [&str; 4] = ["click", "change", "mouseover", "mouseout"];

fn js_error(msg: &str) -> JsValue {
    js_sys::Error::new(msg).into()
}

fn pager_error(err: &PagerError) -> JsValue {
    js_error(&err.to_string())
}

fn busy() -> JsValue {
    js_error("pagination is busy dispatching an event")
}

fn stringify(value: &JsValue) -> Result<String, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(String::new());
    }
    js_sys::JSON::stringify(value).map(String::from)
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Selector recorded in the options for a container passed as an element:
/// `#id` when it has one, otherwise its tag name.
fn element_selector(element: &Element) -> String {
    let id = element.id();
    if id.is_empty() {
        element.tag_name().to_lowercase()
    } else {
        format!("#{id}")
    }
}

/// Split an `el` given as an element out of the options object.
///
/// Selector strings stay in the options and are resolved by the core. An
/// element is replaced by [`element_selector`] so `options.el` still names it.
fn take_element(options: &JsValue) -> Result<(Option<Element>, JsValue), JsValue> {
    if !options.is_object() {
        return Ok((None, options.clone()));
    }
    let el = Reflect::get(options, &"el".into())?;
    let Ok(element) = el.dyn_into::<Element>() else {
        return Ok((None, options.clone()));
    };
    let rest = Object::assign(&Object::new(), options.unchecked_ref());
    Reflect::set(&rest, &"el".into(), &element_selector(&element).into())?;
    Ok((Some(element), rest.into()))
}

/// Wrap a JS function as an event hub handler.
fn js_handler(func: js_sys::Function) -> impl FnMut(u32) + 'static {
    move |value| {
        if let Err(err) = func.call1(&JsValue::NULL, &JsValue::from(value)) {
            console_log::console_error(&format!("pagination listener threw: {err:?}"));
        }
    }
}

fn dispatch(hub: &RefCell<EventHub>, events: &[PagerEvent]) {
    for event in events {
        EventHub::dispatch(hub, *event);
    }
}

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

/// Collect what the click resolver needs from the clicked element.
fn click_target(root: &Element, element: &Element) -> ClickTarget {
    let mut target = ClickTarget::new(element.class_name());
    if let Some(page) = element.get_attribute("data-page") {
        target = target.with_data_page(page);
    }
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        if let Ok(index) = usize::try_from(select.selected_index()) {
            target = target.with_selected_index(index);
        }
    }
    let input = root
        .query_selector(&format!("#{}", cn::PAGE_INPUT_ID))
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok());
    if let Some(input) = input {
        target = target.with_input_value(input.value());
    }
    target
}

/// Shared by the DOM listeners.
struct Handlers {
    state: Rc<RefCell<Core>>,
    hub: Rc<RefCell<EventHub>>,
    root: Element,
}

impl Handlers {
    fn handle(&self, kind: &str, event: &Event) {
        let Some(element) = event_element(event) else {
            return;
        };
        match kind {
            "click" => self.click(&element),
            "change" => self.change(&element),
            "mouseover" => set_hover(&element, true),
            "mouseout" => set_hover(&element, false),
            _ => {}
        }
    }

    fn click(&self, element: &Element) {
        // the select resolves on `change` only
        if element.id() == cn::SELECT_OPTION_ID {
            return;
        }
        self.resolve(element);
    }

    fn resolve(&self, element: &Element) {
        let target = click_target(&self.root, element);
        let resolved = match self.state.try_borrow() {
            Ok(core) => core.resolve_click(&target),
            Err(_) => return,
        };
        match resolved {
            Ok(events) => dispatch(&self.hub, &events),
            Err(err) => err.log(),
        }
    }

    fn change(&self, element: &Element) {
        if element.id() == cn::SELECT_OPTION_ID {
            self.resolve(element);
            return;
        }
        if element.id() != cn::PAGE_INPUT_ID {
            return;
        }
        let Some(input) = element.dyn_ref::<HtmlInputElement>() else {
            return;
        };
        let value = input.value();
        let clamped = match self.state.try_borrow() {
            Ok(core) => core.page_input_changed(&value),
            Err(_) => return,
        };
        if clamped != value {
            input.set_value(&clamped);
        }
    }
}

fn set_hover(element: &Element, on: bool) {
    let class_name = element.class_name();
    let Some(icon) = juke_pager_core::services::hover_icon(&class_name) else {
        return;
    };
    let updated = if on {
        add_class(&class_name, icon)
    } else {
        remove_class(&class_name, icon)
    };
    element.set_class_name(&updated);
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_log::init();
}

/// Set the console log level (`error`, `warn`, `info`, `debug`, `trace`, `off`).
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> bool {
    console_log::set_level(level)
}

/// Pagination widget bound to a DOM element.
#[wasm_bindgen]
pub struct Pagination {
    state: Rc<RefCell<Core>>,
    hub: Rc<RefCell<EventHub>>,
    root: Element,
    listeners: Vec<(&'static str, Listener)>,
}

#[wasm_bindgen]
impl Pagination {
    /// Render into `options.el` (selector or element) and bind the listeners.
    ///
    /// An element given as `el` is recorded in the options as `#id`, or as its
    /// tag name when it has no id. Throws when the wrapper element does not
    /// exist or the options are malformed.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<Pagination, JsValue> {
        console_log::init();

        let (element, rest) = take_element(&options)?;
        let options = parse_options(&stringify(&rest)?).map_err(|e| pager_error(&e))?;
        let core = match element {
            Some(element) => Core::new(options, DomContainer::new(element)),
            None => {
                let document = DomDocument::current().ok_or_else(|| js_error("no document"))?;
                Core::mount(options, &document).map_err(|e| pager_error(&e))?
            }
        };
        let root = core.container().element().clone();

        let handlers = Rc::new(Handlers {
            state: Rc::new(RefCell::new(core)),
            hub: Rc::new(RefCell::new(EventHub::new())),
            root: root.clone(),
        });

        let mut listeners = Vec::with_capacity(DOM_EVENTS.len());
        for kind in DOM_EVENTS {
            let handlers = Rc::clone(&handlers);
            let closure: Listener = Closure::new(move |event: Event| handlers.handle(kind, &event));
            root.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
            listeners.push((kind, closure));
        }

        Ok(Self {
            state: Rc::clone(&handlers.state),
            hub: Rc::clone(&handlers.hub),
            root,
            listeners,
        })
    }

    /// Merge `patch` over the current options and re-render.
    pub fn refresh(&self, patch: JsValue) -> Result<(), JsValue> {
        let patch = parse_patch(&stringify(&patch)?).map_err(|e| pager_error(&e))?;
        self.state.try_borrow_mut().map_err(|_| busy())?.refresh(&patch);
        Ok(())
    }

    /// Register `handler` for `changePage` or `changePageSize`.
    pub fn on(&self, event_type: &str, handler: js_sys::Function) -> Result<(), JsValue> {
        let ty = Self::event_type(event_type)?;
        self.hub
            .try_borrow_mut()
            .map_err(|_| busy())?
            .on(ty, js_handler(handler));
        Ok(())
    }

    /// Register `handler` for a single delivery.
    pub fn once(&self, event_type: &str, handler: js_sys::Function) -> Result<(), JsValue> {
        let ty = Self::event_type(event_type)?;
        self.hub
            .try_borrow_mut()
            .map_err(|_| busy())?
            .once(ty, js_handler(handler));
        Ok(())
    }

    /// Remove every handler of `event_type`, returns how many were removed.
    pub fn off(&self, event_type: &str) -> Result<u32, JsValue> {
        let ty = Self::event_type(event_type)?;
        let removed = self.hub.try_borrow_mut().map_err(|_| busy())?.off(ty);
        Ok(count(removed))
    }

    /// Emit an event to the registered handlers, returns how many ran.
    pub fn trigger(&self, event_type: &str, value: u32) -> Result<u32, JsValue> {
        let ty = Self::event_type(event_type)?;
        let ran = EventHub::dispatch(&self.hub, PagerEvent::new(ty, value));
        Ok(count(ran))
    }

    /// Selector of the container, see the constructor for elements.
    #[wasm_bindgen(getter)]
    pub fn el(&self) -> Result<String, JsValue> {
        Ok(self.core()?.options().el.clone())
    }

    #[wasm_bindgen(getter, js_name = currentPage)]
    pub fn current_page(&self) -> Result<u32, JsValue> {
        Ok(self.core()?.options().current_page)
    }

    #[wasm_bindgen(getter, js_name = pageCount)]
    pub fn page_count(&self) -> Result<u32, JsValue> {
        Ok(self.core()?.options().page_count)
    }

    #[wasm_bindgen(getter, js_name = pageSize)]
    pub fn page_size(&self) -> Result<u32, JsValue> {
        Ok(self.core()?.options().page_size)
    }

    #[wasm_bindgen(getter, js_name = showPrevMore)]
    pub fn show_prev_more(&self) -> Result<bool, JsValue> {
        Ok(self.core()?.window().show_prev_more)
    }

    #[wasm_bindgen(getter, js_name = showNextMore)]
    pub fn show_next_more(&self) -> Result<bool, JsValue> {
        Ok(self.core()?.window().show_next_more)
    }

    /// Page numbers currently shown between the first and last button.
    #[wasm_bindgen(js_name = visiblePages)]
    pub fn visible_pages(&self) -> Result<Array, JsValue> {
        Ok(self
            .core()?
            .window()
            .pages
            .iter()
            .map(|page| JsValue::from(*page))
            .collect())
    }
}

impl Pagination {
    fn core(&self) -> Result<std::cell::Ref<'_, Core>, JsValue> {
        self.state.try_borrow().map_err(|_| busy())
    }

    fn event_type(name: &str) -> Result<PagerEventType, JsValue> {
        parse_event_type(name).map_err(|e| {
            e.log();
            pager_error(&e)
        })
    }
}

impl Drop for Pagination {
    fn drop(&mut self) {
        for (kind, closure) in &self.listeners {
            let _ = self
                .root
                .remove_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        }
    }
}
