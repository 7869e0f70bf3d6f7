use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::window;

/// Creates a window resize listener that only fires `callback` once resizing has
/// been quiet for `delay_ms`.
///
/// Returns `None` outside a browser window. The listener is removed when dropped,
/// so keep it alive for as long as the chart it redraws:
///
/// ```rust,ignore
/// use_effect_with(container_ref.clone(), move |container_ref| {
///     let listener = debounced_resize_listener(move || redraw(), 150);
///     move || drop(listener)
/// });
/// ```
pub fn debounced_resize_listener<F>(callback: F, delay_ms: u32) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);
    let window = window()?;

    Some(EventListener::new(&window, "resize", move |_| {
        // Replacing the handle cancels the pending timeout
        let cb = callback.clone();
        *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || cb()));
    }))
}
