use criterion::{Criterion, black_box, criterion_group, criterion_main};
use il_core::Image;
use il_resize::shrink_to_max_u8;

fn bench_shrink_u8(c: &mut Criterion) {
    let width = 1280usize;
    let height = 1024usize;
    let mut data = Vec::with_capacity(width * height);
    for i in 0..(width * height) {
        data.push((i % 251) as u8);
    }
    let img = Image::from_vec(width, height, data).expect("valid image");
    let view = img.as_view();

    c.bench_function("shrink_to_max_u8_1280x1024_to_60", |b| {
        b.iter(|| {
            let out = shrink_to_max_u8(black_box(&view), 60);
            black_box(out.mult);
        });
    });
}

criterion_group!(benches, bench_shrink_u8);
criterion_main!(benches);
