//! Platform sleep for UI timers (toast auto-dismiss).

/// Resolve after `ms` milliseconds.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                &resolve,
                ms.min(i32::MAX as u32) as i32,
            );
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

#[cfg(all(not(target_arch = "wasm32"), feature = "server"))]
pub async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}

/// No timer available: never resolves, so nothing auto-dismisses.
#[cfg(all(not(target_arch = "wasm32"), not(feature = "server")))]
pub async fn sleep_ms(_ms: u32) {
    futures::future::pending::<()>().await;
}
