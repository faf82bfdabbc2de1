use criterion::{black_box, criterion_group, criterion_main, Criterion};

use word_reveal::core::WordList;
use word_reveal::rules::RoundEngine;
use word_reveal::view::BoardView;

fn long_list() -> WordList {
    let words: Vec<String> = (0..1000)
        .map(|i| {
            let a = (b'a' + (i % 26) as u8) as char;
            let b = (b'a' + ((i / 26) % 26) as u8) as char;
            format!("{}{}word", a, b)
        })
        .collect();
    WordList::new(words)
}

fn bench_full_game(c: &mut Criterion) {
    let words = long_list();
    c.bench_function("play 1000 words with one miss each", |b| {
        b.iter(|| {
            let mut engine = RoundEngine::with_words(words.clone());
            while let Some(target) = engine.active_word().map(str::to_string) {
                engine.set_input("zzz");
                engine.submit_guess();
                engine.set_input(&target);
                black_box(engine.submit_guess());
            }
            black_box(engine.total_score())
        })
    });
}

fn bench_board_view(c: &mut Criterion) {
    let mut engine = RoundEngine::with_words(long_list());
    for _ in 0..500 {
        if let Some(target) = engine.active_word().map(str::to_string) {
            engine.set_input(&target);
            engine.submit_guess();
        }
    }
    c.bench_function("board view over 1000 words", |b| {
        b.iter(|| black_box(BoardView::from_engine(&engine)))
    });
}

criterion_group!(benches, bench_full_game, bench_board_view);
criterion_main!(benches);
