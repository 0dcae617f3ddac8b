use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, view_error_from};
use crate::vm::{QuizIntent, ResultsVm, apply_intent};

#[component]
pub fn ResultsView(vm: ResultsVm) -> Element {
    let ctx = use_context::<AppContext>();
    let mut error = use_signal(|| None::<ViewError>);

    let on_restart = move |_| {
        if let Err(err) = apply_intent(&ctx.quiz_loop(), QuizIntent::Restart) {
            error.set(view_error_from(&err));
        }
    };
    let perfect = vm.is_perfect();

    rsx! {
        div { class: "page",
            div { class: "card",
                h2 { class: "card__title", "Результаты игры" }
                dl { class: "results",
                    dt { "Всего вопросов" }
                    dd { "{vm.total}" }

                    dt { "Правильных ответов" }
                    dd { "{vm.correct}" }

                    dt { "Неправильных ответов" }
                    dd { "{vm.incorrect}" }

                    dt { "Точность" }
                    dd { "{vm.accuracy}%" }

                    dt { "Максимальная серия" }
                    dd { "{vm.max_streak}" }

                    dt { "Общее время" }
                    dd { "{vm.total_seconds} секунд" }

                    dt { "Среднее время на вопрос" }
                    dd { "{vm.average_seconds} сек." }
                }

                if perfect {
                    p { class: "results__perfect",
                        "Отличная работа! Вы ответили правильно на все вопросы!"
                    }
                } else {
                    h3 { class: "results__subtitle", "Просмотр неправильных ответов:" }
                    table { class: "results__table",
                        thead {
                            tr {
                                th { "Буква" }
                                th { "Правильный ответ" }
                                th { "Ваш ответ" }
                            }
                        }
                        tbody {
                            for (idx, row) in vm.wrong_answers.iter().enumerate() {
                                tr { key: "{idx}",
                                    td { class: "results__symbol", lang: "ar", "{row.symbol}" }
                                    td { class: "results__correct", "{row.correct_answer}" }
                                    td { class: "results__wrong", "{row.user_answer}" }
                                }
                            }
                        }
                    }
                }

                if let Some(err) = error() {
                    p { class: "quiz-error", "{err.message()}" }
                }
                div { class: "card__actions",
                    button {
                        class: "btn btn-secondary",
                        id: "quiz-restart",
                        r#type: "button",
                        onclick: on_restart,
                        "Перезапустить игру"
                    }
                }
            }
        }
    }
}
