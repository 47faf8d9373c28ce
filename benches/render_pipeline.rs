use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mandelbrot_viewer::{Complex, NeverCancel, PixelSize, RenderRequest, ViewState, render_frame};

fn request(zoom: f64, render_size: PixelSize) -> RenderRequest {
    let view = match ViewState::new(
        Complex {
            real: -0.5,
            imag: 0.0,
        },
        zoom,
        500,
    ) {
        Ok(view) => view,
        Err(err) => panic!("invalid benchmark view: {err}"),
    };

    RenderRequest { view, render_size }
}

fn bench_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");
    group.sample_size(10);

    for (width, height) in [(200, 150), (400, 300), (800, 600)] {
        let size = PixelSize::new(width, height);
        let request = request(1.0, size);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &request,
            |b, request| b.iter(|| render_frame(black_box(request), &NeverCancel)),
        );
    }

    group.finish();
}

fn bench_render_frame_zoomed(c: &mut Criterion) {
    let request = request(4.0, PixelSize::new(400, 300));

    c.bench_function("render_frame_zoom_4", |b| {
        b.iter(|| render_frame(black_box(&request), &NeverCancel))
    });
}

criterion_group!(benches, bench_render_frame, bench_render_frame_zoomed);
criterion_main!(benches);
