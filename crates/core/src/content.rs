//! The built-in content set: the 28 letters of the Arabic alphabet.

use crate::model::{Catalog, CatalogError, CatalogItem};

/// `(symbol, name, pronunciation, audio, rule tags)`
type Entry = (&'static str, &'static str, &'static str, &'static str, &'static [&'static str]);

const ARABIC_ALPHABET: &[Entry] = &[
    ("ا", "Алиф", "Длинный звук «а»", "/audio/alif.mp3", &["Маркер удлинения"]),
    ("ب", "Ба", "Звук «б»", "/audio/ba.mp3", &["Четкая артикуляция"]),
    ("ت", "Та", "Звук «т»", "/audio/ta.mp3", &["Четкое произношение"]),
    ("ث", "Са", "Звук «θ» (как в английском 'think')", "/audio/tha.mp3", &["Свистящий звук"]),
    ("ج", "Джим", "Звук «дж»", "/audio/jeem.mp3", &["Произносится с задней части горла"]),
    ("ح", "Хьа", "Глубокий беззвучный звук «х»", "/audio/ha.mp3", &["Глубокий горловой звук"]),
    ("خ", "Хо", "Гортанный звук «х»", "/audio/kha.mp3", &["Гортанный"]),
    ("د", "Даль", "Звук «д»", "/audio/dal.mp3", &["Четкий звук"]),
    ("ذ", "Заль", "Звук «ð» (как в английском 'this')", "/audio/thal.mp3", &["Отчетливый"]),
    ("ر", "Ро", "Звук «р»", "/audio/ra.mp3", &["Легкое дрожание"]),
    ("ز", "За", "Звук «з»", "/audio/zay.mp3", &["Четкий звук"]),
    ("س", "Син", "Звук «с»", "/audio/seen.mp3", &["Шипящий"]),
    ("ش", "Шин", "Звук «ш»", "/audio/sheen.mp3", &["Четкий звук"]),
    ("ص", "Сод", "Тяжёлый звук «с»", "/audio/sad.mp3", &["Эмфатический"]),
    ("ض", "Дод", "Тяжёлый звук «д»", "/audio/dad.mp3", &["Эмфатический"]),
    ("ط", "Т1о", "Тяжёлый звук «т»", "/audio/taa.mp3", &["Эмфатический"]),
    ("ظ", "Зо", "Тяжёлый звук «з»", "/audio/zaa.mp3", &["Эмфатический"]),
    ("ع", "1айн", "Глубокий горловой звук", "/audio/ain.mp3", &["Гортанный"]),
    ("غ", "Г1ойн", "Хриплый горловой звук", "/audio/ghain.mp3", &["Гортанный"]),
    ("ف", "Фа", "Звук «ф»", "/audio/fa.mp3", &["Лабиодентальный"]),
    ("ق", "Къоф", "Глубокий звук «к»", "/audio/qaf.mp3", &["Эмфатический"]),
    ("ك", "Каф", "Звук «к»", "/audio/kaf.mp3", &["Четкий"]),
    ("ل", "Льам", "Звук «л»", "/audio/lam.mp3", &["Четкий"]),
    ("م", "Мим", "Звук «м»", "/audio/meem.mp3", &["Четкий"]),
    ("ن", "Нун", "Звук «н»", "/audio/noon.mp3", &["Четкий"]),
    ("ه", "Х1а", "Звук «х»", "/audio/ha2.mp3", &["Мягкий"]),
    ("و", "Вав", "Звук «в»", "/audio/waw.mp3", &["Четкий"]),
    ("ي", "Йа", "Звук «й»", "/audio/ya.mp3", &["Четкий"]),
];

/// Items of the built-in catalog in reference order.
#[must_use]
pub fn arabic_alphabet_items() -> Vec<CatalogItem> {
    ARABIC_ALPHABET
        .iter()
        .map(|(symbol, name, pronunciation, audio, tags)| {
            CatalogItem::new(
                *symbol,
                *name,
                *pronunciation,
                *audio,
                tags.iter().map(|tag| (*tag).to_string()).collect(),
            )
        })
        .collect()
}

/// The built-in catalog, validated.
///
/// # Errors
///
/// Returns `CatalogError` if the built-in table ever becomes invalid.
pub fn arabic_alphabet() -> Result<Catalog, CatalogError> {
    Catalog::new(arabic_alphabet_items())
}
