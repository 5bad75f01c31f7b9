//! Todo-List Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod models;
mod render;

use app::App;
use leptos::mount::mount_to;
use wasm_bindgen::JsCast;

/// Id of the host element the app mounts into, supplied by index.html.
const MOUNT_HOST_ID: &str = "todo-app";

fn main() {
    console_error_panic_hook::set_once();

    let host = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(MOUNT_HOST_ID));
    let Some(host) = host else {
        web_sys::console::error_1(
            &format!("Mount host #{} missing. Check index.html IDs.", MOUNT_HOST_ID).into(),
        );
        return;
    };

    mount_to(host.unchecked_into(), App).forget();
}
