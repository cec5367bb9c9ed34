use criterion::{black_box, criterion_group, criterion_main, Criterion};
use easel_motion_core::{
    sample_motion, AccuracyTier, BounceCurve, MotionParams, OvershootCurve, OvershootStyle,
    SpringCurve, WiggleCurve,
};

fn bench_sample_motion(c: &mut Criterion) {
    let cases = [
        ("spring_heavy", MotionParams::Spring(SpringCurve::Heavy.params())),
        ("bounce_firm", MotionParams::Bounce(BounceCurve::Firm.params())),
        ("wiggle_intense", MotionParams::Wiggle(WiggleCurve::Intense.params())),
        (
            "overshoot_dramatic",
            MotionParams::Overshoot(OvershootCurve::Dramatic.params(OvershootStyle::InOut)),
        ),
    ];

    let mut group = c.benchmark_group("sample_motion");
    for (name, params) in cases {
        for tier in [AccuracyTier::Low, AccuracyTier::Ultra] {
            group.bench_function(format!("{name}/{tier}"), |b| {
                b.iter(|| sample_motion(black_box(&params), tier).expect("sample"))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_sample_motion);
criterion_main!(benches);
