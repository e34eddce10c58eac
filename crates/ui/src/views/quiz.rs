use dioxus::prelude::*;

use services::QuizPhase;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{QuizVm, RoundVm, start_quiz};

/// Snapshot of the vm taken once per render, so event closures below are
/// free to mutate the signal.
struct BoardData {
    round: Option<RoundVm>,
    score: u32,
    asked: u32,
    total_rounds: u32,
    message: String,
    awaiting: bool,
    scored: bool,
    finished: bool,
}

fn board_data(vm: &QuizVm) -> BoardData {
    let phase = vm.phase();
    BoardData {
        round: vm.round(),
        score: vm.score(),
        asked: vm.asked(),
        total_rounds: vm.total_rounds(),
        message: vm.message().unwrap_or_default(),
        awaiting: phase == QuizPhase::AwaitingAnswer,
        scored: phase == QuizPhase::RoundScored,
        finished: phase == QuizPhase::Finished,
    }
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let source = ctx.catalog_source();

    let vm = use_signal(|| None::<QuizVm>);
    let error = use_signal(|| None::<ViewError>);

    // One-time catalog load; the engine never calls the provider again.
    let resource = use_resource(move || {
        let source = source.clone();
        let mut vm = vm;

        async move {
            let started = start_quiz(source.as_ref()).await?;
            vm.set(Some(started));
            Ok::<_, ViewError>(())
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page quiz",
            h2 { "Flag Quiz" }

            match state {
                ViewState::Idle => rsx! {
                    p { class: "message", "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "message", "Loading countries..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "message", "{err.message()}" }
                },
                ViewState::Ready(()) => rsx! {
                    {render_board(vm, error)}
                },
            }
        }
    }
}

fn render_board(mut vm: Signal<Option<QuizVm>>, mut error: Signal<Option<ViewError>>) -> Element {
    let Some(data) = vm.read().as_ref().map(board_data) else {
        return rsx! {
            p { class: "message", "Idle" }
        };
    };
    let BoardData {
        round,
        score,
        asked,
        total_rounds,
        message,
        awaiting,
        scored,
        finished,
    } = data;

    let message = (*error.read())
        .map(|err| err.message().to_owned())
        .unwrap_or(message);

    let question = match round {
        Some(round) => rsx! {
            p { class: "question-number", "{round.question_label}" }
            img { class: "flag", src: "{round.flag_src}", alt: "{round.flag_alt}" }
            div { class: "options",
                for option in round.options {
                    button {
                        r#type: "button",
                        class: "{option.class}",
                        disabled: !awaiting,
                        onclick: {
                            let label = option.label.clone();
                            move |_| {
                                if let Some(quiz) = vm.write().as_mut() {
                                    if let Err(err) = quiz.select(&label) {
                                        error.set(Some(err));
                                    }
                                }
                            }
                        },
                        "{option.label}"
                    }
                }
            }
        },
        None => rsx! {},
    };

    rsx! {
        div { class: "board",
            p { class: "status",
                span { class: "score", "Score: {score}" }
                span { class: "asked", "Asked: {asked} / {total_rounds}" }
            }

            {question}

            p { class: "message", "{message}" }

            div { class: "controls",
                button {
                    r#type: "button",
                    class: "next",
                    disabled: !scored,
                    onclick: move |_| {
                        if let Some(quiz) = vm.write().as_mut() {
                            if let Err(err) = quiz.next() {
                                error.set(Some(err));
                            }
                        }
                    },
                    "Next"
                }

                if finished {
                    button {
                        r#type: "button",
                        class: "restart",
                        onclick: move |_| {
                            if let Some(quiz) = vm.write().as_mut() {
                                if let Err(err) = quiz.restart() {
                                    error.set(Some(err));
                                } else {
                                    error.set(None);
                                }
                            }
                        },
                        "Restart"
                    }
                }
            }
        }
    }
}
