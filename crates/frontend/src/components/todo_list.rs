//! Todo lists of the dashboard

use todo_core::{TaskId, Todo};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TodoListProps {
    pub title: AttrValue,
    pub title_color: AttrValue,
    pub todos: Vec<Todo>,
    /// Shown instead of the list when it is empty
    #[prop_or_default]
    pub placeholder: Option<&'static str>,
    #[prop_or_default]
    pub on_complete: Option<Callback<TaskId>>,
    #[prop_or_default]
    pub on_edit: Option<Callback<(TaskId, String)>>,
    /// Receives the task id and the list it was removed from
    pub on_delete: Callback<(TaskId, bool)>,
}

#[function_component(TodoList)]
pub fn todo_list(props: &TodoListProps) -> Html {
    html! {
        <div class="card my-2">
            <h4 class="card-header" style={format!("color: {}", props.title_color)}>
                {props.title.clone()}
            </h4>
            <ul class="list-group list-group-flush">
                if let Some(placeholder) = props.placeholder {
                    <li class="list-group-item text-muted">{placeholder}</li>
                }
                { for props.todos.iter().map(|todo| html! {
                    <TodoItem
                        key={todo.task_id.to_string()}
                        todo={todo.clone()}
                        on_complete={props.on_complete.clone()}
                        on_edit={props.on_edit.clone()}
                        on_delete={props.on_delete.clone()}
                    />
                }) }
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TodoItemProps {
    pub todo: Todo,
    #[prop_or_default]
    pub on_complete: Option<Callback<TaskId>>,
    #[prop_or_default]
    pub on_edit: Option<Callback<(TaskId, String)>>,
    pub on_delete: Callback<(TaskId, bool)>,
}

/// Single todo row. Incomplete rows can be edited in place.
#[function_component(TodoItem)]
pub fn todo_item(props: &TodoItemProps) -> Html {
    let draft = use_state(|| None::<String>);
    let todo = &props.todo;

    let on_delete = {
        let on_delete = props.on_delete.clone();
        let task_id = todo.task_id.clone();
        let completed = todo.completed;
        Callback::from(move |_| on_delete.emit((task_id.clone(), completed)))
    };

    if todo.completed {
        return html! {
            <li class="list-group-item d-flex justify-content-between align-items-center">
                <span class="text-decoration-line-through">{&todo.task_details}</span>
                <button class="btn btn-sm btn-outline-danger" onclick={on_delete}>{"Delete"}</button>
            </li>
        };
    }

    if let Some(text) = (*draft).clone() {
        let on_input = {
            let draft = draft.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                draft.set(Some(input.value()));
            })
        };
        let on_save = {
            let draft = draft.clone();
            let on_edit = props.on_edit.clone();
            let task_id = todo.task_id.clone();
            let text = text.clone();
            Callback::from(move |_| {
                if let Some(on_edit) = &on_edit {
                    on_edit.emit((task_id.clone(), text.clone()));
                }
                draft.set(None);
            })
        };
        let on_cancel = {
            let draft = draft.clone();
            Callback::from(move |_| draft.set(None))
        };

        return html! {
            <li class="list-group-item d-flex justify-content-between align-items-center">
                <input type="text" class="form-control me-2" value={text} oninput={on_input} />
                <div class="btn-group">
                    <button class="btn btn-sm btn-outline-primary" onclick={on_save}>{"Save"}</button>
                    <button class="btn btn-sm btn-outline-secondary" onclick={on_cancel}>{"Cancel"}</button>
                </div>
            </li>
        };
    }

    let on_complete = {
        let on_complete = props.on_complete.clone();
        let task_id = todo.task_id.clone();
        Callback::from(move |_| {
            if let Some(on_complete) = &on_complete {
                on_complete.emit(task_id.clone());
            }
        })
    };
    let on_start_edit = {
        let draft = draft.clone();
        let details = todo.task_details.clone();
        Callback::from(move |_| draft.set(Some(details.clone())))
    };

    html! {
        <li class="list-group-item d-flex justify-content-between align-items-center">
            <span>{&todo.task_details}</span>
            <div class="btn-group">
                if props.on_complete.is_some() {
                    <button class="btn btn-sm btn-outline-success" onclick={on_complete}>{"Done"}</button>
                }
                if props.on_edit.is_some() {
                    <button class="btn btn-sm btn-outline-primary" onclick={on_start_edit}>{"Edit"}</button>
                }
                <button class="btn btn-sm btn-outline-danger" onclick={on_delete}>{"Delete"}</button>
            </div>
        </li>
    }
}
