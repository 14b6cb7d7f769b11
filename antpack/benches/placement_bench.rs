use std::hint::black_box;

use antpack::entities::{ItemSet, Layout};
use antpack::geometry::{BinSize, Rectangle};
use antpack::placement::find_position;
use criterion::{Criterion, criterion_group, criterion_main};

fn item_dims(n: u32) -> Vec<(u32, u32)> {
    //deterministic mix of widths and heights in 1..=4
    (0..n).map(|i| (i % 4 + 1, (i * 7) % 4 + 1)).collect()
}

fn fill_layout(c: &mut Criterion) {
    let bin = BinSize::new(21, 21);
    let items = ItemSet::new(item_dims(65));

    c.bench_function("fill 21x21 with 65 items", |b| {
        b.iter(|| {
            let mut layout = Layout::new(bin);
            for item in items.items() {
                let _ = layout.try_place(Rectangle::from_item(item));
            }
            black_box(layout.packed_area())
        })
    });
}

fn search_crowded_layout(c: &mut Criterion) {
    let bin = BinSize::new(21, 21);
    let items = ItemSet::new(item_dims(65));
    let mut layout = Layout::new(bin);
    for item in items.items() {
        let _ = layout.try_place(Rectangle::from_item(item));
    }

    c.bench_function("search in crowded layout", |b| {
        b.iter(|| {
            let mut candidate = Rectangle::new(0, 3, 2);
            black_box(find_position(layout.packed(), &mut candidate, &bin))
        })
    });
}

criterion_group!(benches, fill_layout, search_crowded_layout);
criterion_main!(benches);
