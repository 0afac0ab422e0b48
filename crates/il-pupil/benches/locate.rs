use criterion::{Criterion, black_box, criterion_group, criterion_main};
use il_core::Image;
use il_pupil::PupilLocator;

fn synthetic_eye(width: usize, height: usize) -> Image<u8> {
    let (cx, cy, r) = (width as i64 / 2, height as i64 / 2, height as i64 / 8);
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height as i64 {
        for x in 0..width as i64 {
            let d2 = (x - cx) * (x - cx) + (y - cy) * (y - cy);
            let base = if d2 <= r * r { 12 } else { 150 };
            data.push((base + (x * 7 + y * 13) % 23) as u8);
        }
    }
    Image::from_vec(width, height, data).expect("valid image")
}

fn bench_locate(c: &mut Criterion) {
    let img = synthetic_eye(640, 480);
    let view = img.as_view();
    let locator = PupilLocator::default();

    c.bench_function("edge_maps_640x480", |b| {
        b.iter(|| {
            let maps = locator.edge_maps(black_box(&view)).expect("edge maps succeed");
            black_box(maps.fused.data()[0]);
        });
    });

    c.bench_function("locate_pupil_640x480", |b| {
        b.iter(|| {
            let loc = locator.locate(black_box(&view)).expect("locate succeeds");
            black_box(loc.refined);
        });
    });
}

criterion_group!(benches, bench_locate);
criterion_main!(benches);
