use dioxus::document::eval;
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, view_error_from};
use crate::vm::{OptionVm, QuizIntent, QuizVm, apply_intent};

/// Keyboard shortcuts. Physical codes, so they work with any layout.
fn intent_for_code(code: Code) -> Option<QuizIntent> {
    match code {
        Code::Digit1 | Code::Numpad1 => Some(QuizIntent::Answer(0)),
        Code::Digit2 | Code::Numpad2 => Some(QuizIntent::Answer(1)),
        Code::Digit3 | Code::Numpad3 => Some(QuizIntent::Answer(2)),
        Code::Space => Some(QuizIntent::ReplayAudio),
        Code::KeyM => Some(QuizIntent::ToggleMute),
        _ => None,
    }
}

#[component]
pub fn QuestionView(vm: QuizVm) -> Element {
    let ctx = use_context::<AppContext>();
    let mut error = use_signal(|| None::<ViewError>);

    let dispatch = use_callback(move |intent: QuizIntent| {
        match apply_intent(&ctx.quiz_loop(), intent) {
            Ok(()) => error.set(None),
            Err(err) => {
                if let Some(view_err) = view_error_from(&err) {
                    error.set(Some(view_err));
                }
            }
        }
    });

    use_effect(|| {
        let _ = eval(r#"document.getElementById("quiz-root")?.focus();"#);
    });

    let on_key = move |evt: KeyboardEvent| {
        if let Some(intent) = intent_for_code(evt.data.code()) {
            evt.prevent_default();
            dispatch.call(intent);
        }
    };

    let progress_style = vm.progress_style();
    let mute_icon = vm.mute_icon();
    let mute_title = if vm.muted { "Включить звук" } else { "Выключить звук" };

    rsx! {
        div { class: "page quiz-page", id: "quiz-root", tabindex: "0", onkeydown: on_key,
            div { class: "quiz-progress", dir: "rtl",
                div { class: "quiz-progress__bar", style: "{progress_style}" }
            }
            div { class: "card",
                header { class: "card__header",
                    h2 { class: "card__title", "Изучаем арабские буквы" }
                    button {
                        class: "btn btn-ghost",
                        id: "quiz-mute",
                        r#type: "button",
                        title: "{mute_title}",
                        onclick: move |_| dispatch.call(QuizIntent::ToggleMute),
                        "{mute_icon}"
                    }
                }
                div { class: "quiz-question",
                    button {
                        class: "quiz-symbol",
                        id: "quiz-symbol",
                        r#type: "button",
                        lang: "ar",
                        onclick: move |_| dispatch.call(QuizIntent::ReplayAudio),
                        "{vm.symbol}"
                    }
                    p { class: "quiz-timer", "Таймер: {vm.question_secs} секунд" }
                }
                div { class: "quiz-options",
                    for option in vm.options.iter().cloned() {
                        OptionButton { key: "{option.index}", option, on_intent: dispatch }
                    }
                }
                if vm.answered {
                    div { class: "quiz-feedback",
                        if !vm.pronunciation.is_empty() {
                            p { class: "quiz-feedback__pronunciation", "{vm.pronunciation}" }
                        }
                        if !vm.rule_tags.is_empty() {
                            ul { class: "quiz-feedback__tags",
                                for tag in vm.rule_tags.iter() {
                                    li { key: "{tag}", class: "quiz-tag", "{tag}" }
                                }
                            }
                        }
                    }
                }
                div { class: "quiz-score",
                    span { class: "quiz-score__item",
                        "Правильно: "
                        span { class: "quiz-score__correct", "{vm.correct}" }
                    }
                    span { class: "quiz-score__item",
                        "Неправильно: "
                        span { class: "quiz-score__incorrect", "{vm.incorrect}" }
                    }
                    span { class: "quiz-score__item",
                        "Серия: "
                        span { class: "quiz-score__streak", "{vm.streak}" }
                    }
                }
                if let Some(err) = error() {
                    p { class: "quiz-error", "{err.message()}" }
                }
                footer { class: "card__footer",
                    span { class: "quiz-footer__item", "Вопрос {vm.progress_label}" }
                    span { class: "quiz-footer__item", "Время: {vm.session_clock}" }
                }
                div { class: "card__actions",
                    button {
                        class: "btn btn-secondary",
                        id: "quiz-end",
                        r#type: "button",
                        onclick: move |_| dispatch.call(QuizIntent::EndNow),
                        "Завершить игру"
                    }
                    button {
                        class: "btn btn-secondary",
                        id: "quiz-restart",
                        r#type: "button",
                        onclick: move |_| dispatch.call(QuizIntent::Restart),
                        "Перезапустить игру"
                    }
                }
            }
        }
    }
}

#[component]
fn OptionButton(option: OptionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let index = option.index;
    rsx! {
        button {
            class: "{option.class()}",
            id: "quiz-option-{index}",
            r#type: "button",
            disabled: option.disabled(),
            onclick: move |_| on_intent.call(QuizIntent::Answer(index)),
            "{option.label}"
        }
    }
}
