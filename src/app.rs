//! Todo-List Frontend App
//!
//! Root component: owns the task-list state and the fetch-and-render cycle.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{NewTodoForm, TodoList};
use crate::context::AppContext;
use crate::models::Todo;
use crate::render;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (todos, set_todos) = signal(Vec::<Todo>::new());
    let (load_error, set_load_error) = signal::<Option<String>>(None);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(AppContext::new((reload_trigger, set_reload_trigger)));

    // Load the list on mount and whenever a submission succeeds
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        web_sys::console::log_1(&format!("[App] Loading todos, trigger={}", trigger).into());
        spawn_local(async move {
            match api::list_todos().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[App] Loaded {} todos", loaded.len()).into());
                    set_load_error.set(None);
                    set_todos.set(loaded);
                }
                Err(error) => {
                    web_sys::console::error_1(
                        &format!("[App] Error fetching todos: {}", error).into(),
                    );
                    set_load_error.set(Some(render::list_error_line(&error)));
                }
            }
        });
    });

    view! {
        <div class="todo-app">
            <h1>"My To-Do List"</h1>
            <NewTodoForm/>
            <TodoList todos=todos load_error=load_error/>
        </div>
    }
}
