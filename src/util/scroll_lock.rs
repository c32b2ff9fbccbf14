//! Body scroll lock for the mobile menu overlay.
//!
//! The lock is the `overflow-hidden` class on `<body>`. It is process-wide
//! state with no reference counting: the sidebar acquires it when the mobile
//! menu opens and releases it on close and on unmount.

/// Apply or release the body scroll lock.
pub fn set(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let class_list = body.class_list();
            if locked {
                let _ = class_list.add_1("overflow-hidden");
            } else {
                let _ = class_list.remove_1("overflow-hidden");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}
