use std::time::Duration;

use services::QuizLoopService;

use super::test_harness::setup_view_harness;

fn correct_index(quiz_loop: &QuizLoopService) -> usize {
    quiz_loop
        .snapshot()
        .question
        .expect("active question")
        .correct_index()
}

#[tokio::test(flavor = "current_thread")]
async fn instructions_render_before_start() {
    let mut harness = setup_view_harness(|_| {});
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Инструкции"), "missing title in {html}");
    assert!(html.contains("Начать игру"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_renders_symbol_options_and_score() {
    let mut harness = setup_view_harness(|quiz_loop| quiz_loop.start().unwrap());
    harness.rebuild();
    let html = harness.render();

    let snapshot = harness.quiz_loop.snapshot();
    let question = snapshot.question.expect("active question");
    assert!(html.contains(question.item().symbol()), "missing symbol in {html}");
    for option in question.options() {
        assert!(html.contains(option.as_str()), "missing {option} in {html}");
    }
    assert!(html.contains("Правильно: "), "missing score in {html}");
    assert!(html.contains("Вопрос 1 / 28"), "missing progress in {html}");
    assert!(html.contains("🔇"), "missing mute icon in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn answered_question_shows_feedback() {
    let mut harness = setup_view_harness(|quiz_loop| {
        quiz_loop.start().unwrap();
        quiz_loop.answer(correct_index(quiz_loop)).unwrap();
    });
    harness.rebuild();
    let html = harness.render();

    let item = harness.quiz_loop.snapshot().question.unwrap().item().clone();
    assert!(html.contains("quiz-option--correct"), "missing highlight in {html}");
    assert!(html.contains(item.rule_tags()[0].as_str()), "missing tag in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_list_wrong_answers() {
    let mut harness = setup_view_harness(|quiz_loop| {
        quiz_loop.start().unwrap();
        let wrong = (correct_index(quiz_loop) + 1) % 3;
        quiz_loop.answer(wrong).unwrap();
        quiz_loop.end_now().unwrap();
    });
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Результаты игры"), "missing title in {html}");
    assert!(html.contains("Просмотр неправильных ответов"), "missing table in {html}");
    assert!(html.contains("0.00%"), "missing accuracy in {html}");
    assert!(!html.contains("Отличная работа"), "unexpected perfect message in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn perfect_run_shows_message() {
    let mut harness = setup_view_harness(|quiz_loop| {
        quiz_loop.start().unwrap();
        quiz_loop.answer(correct_index(quiz_loop)).unwrap();
        quiz_loop.end_now().unwrap();
    });
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Отличная работа!"), "missing perfect message in {html}");
    assert!(html.contains("100.00%"), "missing accuracy in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn change_events_refresh_the_screen() {
    let mut harness = setup_view_harness(|_| {});
    harness.rebuild();
    assert!(harness.render().contains("Инструкции"));

    harness.quiz_loop.start().unwrap();
    for _ in 0..3 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(html.contains("Изучаем арабские буквы"), "missing question screen in {html}");
    assert!(!html.contains("Инструкции"), "instructions still shown in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn running_session_ticks_the_timers() {
    let mut harness = setup_view_harness(|quiz_loop| quiz_loop.start().unwrap());
    harness.rebuild();
    harness.drive_async().await;

    assert!(harness.wakes_within(Duration::from_secs(3)).await);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn ending_the_session_stops_ticking() {
    let mut harness = setup_view_harness(|quiz_loop| quiz_loop.start().unwrap());
    harness.rebuild();
    harness.drive_async().await;

    harness.quiz_loop.end_now().unwrap();
    for _ in 0..3 {
        harness.drive_async().await;
    }
    assert!(harness.render().contains("Результаты игры"));

    assert!(!harness.wakes_within(Duration::from_secs(3)).await);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn instructions_do_not_tick() {
    let mut harness = setup_view_harness(|_| {});
    harness.rebuild();
    harness.drive_async().await;

    assert!(!harness.wakes_within(Duration::from_secs(3)).await);
}
