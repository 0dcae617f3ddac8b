use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, view_error_from};
use crate::vm::{QuizIntent, apply_intent};

#[component]
pub fn InstructionsView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut error = use_signal(|| None::<ViewError>);

    let on_start = move |_| {
        if let Err(err) = apply_intent(&ctx.quiz_loop(), QuizIntent::Start) {
            error.set(view_error_from(&err));
        }
    };

    rsx! {
        div { class: "page",
            div { class: "card",
                h2 { class: "card__title", "Инструкции" }
                p { class: "card__text",
                    "Добро пожаловать в игру «Изучаем арабские буквы»! В этой игре вам будет показана "
                    "арабская буква, и ваша задача: выбрать правильное название буквы из предложенных вариантов."
                }
                p { class: "card__text",
                    "На экране вы увидите таймер, который показывает время, прошедшее с начала вопроса. "
                    "Игра ведёт подсчёт правильных и неправильных ответов, а также вашей текущей серии. "
                    "После завершения игры вам будут показаны подробные результаты."
                }
                p { class: "card__hint", "Клавиши 1–3 выбирают ответ, пробел повторяет звук, M выключает звук." }
                if let Some(err) = error() {
                    p { class: "quiz-error", "{err.message()}" }
                }
                div { class: "card__actions",
                    button {
                        class: "btn btn-primary",
                        id: "quiz-start",
                        r#type: "button",
                        onclick: on_start,
                        "Начать игру"
                    }
                }
            }
        }
    }
}
