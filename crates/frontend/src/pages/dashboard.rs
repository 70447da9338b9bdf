use crate::app::Route;
use crate::components::{Navbar, TodoList};
use std::collections::HashSet;
use std::rc::Rc;
use todo_core::{BoardChange, TaskId, Todo, TodoBoard};
use todo_frontend_common::auth::{use_current_session, use_session, SessionAction};
use todo_frontend_common::services::todos::{
    ADD_FAILED_MSG, DELETE_FAILED_MSG, EDIT_FAILED_MSG, UPDATE_FAILED_MSG,
};
use todo_frontend_common::services::TodoService;
use todo_frontend_common::time::now_secs;
use todo_frontend_common::utils::report_failure;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

/// Board held by the dashboard; changes only after the API call succeeded
#[derive(Clone, Debug, Default, PartialEq)]
struct BoardState(TodoBoard);

enum BoardAction {
    Loaded(Vec<Todo>),
    Applied(BoardChange),
}

impl Reducible for BoardState {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut board = self.0.clone();
        match action {
            BoardAction::Loaded(todos) => board.load(todos),
            BoardAction::Applied(change) => {
                board.apply(change);
            }
        }

        // An ignored change before the first load is still recorded
        if board == self.0 {
            self
        } else {
            Rc::new(Self(board))
        }
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let session_ctx = use_session();
    let session = use_current_session();
    let navigator = use_navigator();
    let board = use_reducer(BoardState::default);
    let new_task = use_state(String::new);
    // Ids of adds awaiting a response
    let in_flight = use_mut_ref(HashSet::<TaskId>::new);

    let service = use_memo(session.clone(), |session| {
        session.as_ref().and_then(|session| match TodoService::new(session) {
            Ok(service) => Some(service),
            Err(e) => {
                tracing::error!("Failed to create todo client: {e}");
                None
            }
        })
    });

    // Load the user's todos once
    {
        let service = service.clone();
        let board = board.clone();
        use_effect_with((), move |_| {
            if let Some(service) = (*service).clone() {
                wasm_bindgen_futures::spawn_local(async move {
                    match service.fetch().await {
                        Ok(Some(todos)) => board.dispatch(BoardAction::Loaded(todos)),
                        Ok(None) => tracing::debug!("No todos stored yet"),
                        Err(e) => tracing::error!("Failed to fetch todos: {e}"),
                    }
                });
            }
        });
    }

    let on_logout = {
        let session_ctx = session_ctx.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            session_ctx.dispatch(SessionAction::Logout);
            if let Some(navigator) = &navigator {
                navigator.replace(&Route::Login);
            }
        })
    };

    let on_new_task_input = {
        let new_task = new_task.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            new_task.set(input.value());
        })
    };

    let on_add = {
        let service = service.clone();
        let board = board.clone();
        let new_task = new_task.clone();
        let in_flight = in_flight.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(service) = (*service).clone() else {
                return;
            };
            let drafted = board
                .0
                .draft(service.user_id(), &new_task, now_secs(), &in_flight.borrow());
            let Some(todo) = drafted else {
                return;
            };
            in_flight.borrow_mut().insert(todo.task_id.clone());

            let board = board.clone();
            let new_task = new_task.clone();
            let in_flight = in_flight.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match service.add(&todo).await {
                    Ok(()) => {
                        board.dispatch(BoardAction::Applied(BoardChange::Added(todo)));
                        new_task.set(String::new());
                    }
                    Err(e) => {
                        in_flight.borrow_mut().remove(&todo.task_id);
                        report_failure(&e, ADD_FAILED_MSG);
                    }
                }
            });
        })
    };

    let on_complete = {
        let service = service.clone();
        let board = board.clone();
        Callback::from(move |task_id: TaskId| {
            let Some(service) = (*service).clone() else {
                return;
            };
            let board = board.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match service.complete(&task_id).await {
                    Ok(()) => board.dispatch(BoardAction::Applied(BoardChange::Completed(task_id))),
                    Err(e) => report_failure(&e, UPDATE_FAILED_MSG),
                }
            });
        })
    };

    let on_edit = {
        let service = service.clone();
        let board = board.clone();
        Callback::from(move |(task_id, details): (TaskId, String)| {
            let Some(service) = (*service).clone() else {
                return;
            };
            if details.trim().is_empty() {
                return;
            }
            let board = board.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match service.edit(&task_id, &details).await {
                    Ok(()) => {
                        board.dispatch(BoardAction::Applied(BoardChange::Edited(task_id, details)));
                    }
                    Err(e) => report_failure(&e, EDIT_FAILED_MSG),
                }
            });
        })
    };

    let on_delete = {
        let service = service.clone();
        let board = board.clone();
        Callback::from(move |(task_id, completed): (TaskId, bool)| {
            let Some(service) = (*service).clone() else {
                return;
            };
            let board = board.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match service.delete(&task_id).await {
                    Ok(()) => board.dispatch(BoardAction::Applied(BoardChange::Deleted {
                        task_id,
                        completed,
                    })),
                    Err(e) => report_failure(&e, DELETE_FAILED_MSG),
                }
            });
        })
    };

    let Some(session) = session else {
        return html! {};
    };

    html! {
        <div>
            <Navbar on_logout={on_logout} />
            <div class="m-1">
                <h2>{format!("Welcome, {}!", session.display_name())}</h2>
            </div>

            <div class="container d-flex justify-content-center my-3">
                <div class="row">
                    <form class="form-inline d-flex justify-content-center" onsubmit={on_add}>
                        <input
                            type="text"
                            class="form-control mx-2"
                            placeholder="Add a task"
                            value={(*new_task).clone()}
                            oninput={on_new_task_input}
                        />
                        <button type="submit" class="btn btn-outline-primary my-2 my-sm-0">{"Add"}</button>
                    </form>
                </div>
            </div>

            <div class="container">
                <div class="row">
                    <div class="col-6">
                        <TodoList
                            title="Incomplete Todos"
                            title_color="red"
                            todos={board.0.incomplete().to_vec()}
                            placeholder={board.0.incomplete_placeholder()}
                            on_complete={Some(on_complete)}
                            on_edit={Some(on_edit)}
                            on_delete={on_delete.clone()}
                        />
                    </div>
                    <div class="col-6">
                        <TodoList
                            title="Completed Todos"
                            title_color="green"
                            todos={board.0.completed().to_vec()}
                            placeholder={board.0.completed_placeholder()}
                            on_delete={on_delete}
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
