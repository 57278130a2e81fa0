use std::any::Any;
use std::panic;
use leptos::logging::log;

/// Pulls the human-readable message out of a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    }
}

/// Sets up a panic hook that forwards to the browser console and adds context
/// for panics raised from a disposed reactive owner.
pub fn set_custom_panic_hook() {
    console_error_panic_hook::set_once();
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Call the original hook first
        original_hook(panic_info);

        let message = panic_message(panic_info.payload());
        if message.contains("OwnerDisposed") || message.contains("disposed") {
            log!("[PANIC] A reactive owner was disposed. This usually happens when:");
            log!("[PANIC] 1. A product card was unmounted while its review was being classified");
            log!("[PANIC] 2. A callback fired after the storefront was torn down");
        }
    }));
}

/// Call from the client entry points before mounting.
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_static_and_owned_messages() {
        let owned: Box<dyn Any + Send> = Box::new(String::from("OwnerDisposed(1v1)"));
        let borrowed: Box<dyn Any + Send> = Box::new("boom");
        let other: Box<dyn Any + Send> = Box::new(7_u8);

        assert_eq!(panic_message(owned.as_ref()), "OwnerDisposed(1v1)");
        assert_eq!(panic_message(borrowed.as_ref()), "boom");
        assert_eq!(panic_message(other.as_ref()), "Unknown panic");
    }
}
