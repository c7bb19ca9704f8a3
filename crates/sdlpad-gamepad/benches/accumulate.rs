use codspeed_criterion_compat::{black_box, criterion_group, criterion_main, Criterion};
use sdlpad_gamepad::memory::MemoryBackend;
use sdlpad_gamepad::{
    Axis, AxisBuffer, GameAxis, GamepadManager, JoystickCollection, JoystickConfig,
};

fn build_manager(pads: u32) -> (MemoryBackend, GamepadManager<MemoryBackend>) {
    let backend = MemoryBackend::new();
    for i in 0..pads {
        backend.add_controller(&format!("bench pad {i}"));
    }
    let mut manager = GamepadManager::new(backend.clone());
    for i in 0..pads {
        if let Some(c) = manager.controller_mut(i) {
            c.set_axis_map(Axis::LeftX.index(), Some(GameAxis::Side));
            c.set_axis_map(Axis::LeftY.index(), Some(GameAxis::Forward));
            c.set_axis_map(Axis::RightX.index(), Some(GameAxis::Yaw));
            c.set_axis_map(Axis::RightY.index(), Some(GameAxis::Pitch));
            c.set_axis_scale(Axis::RightY.index(), -1.0);
        }
    }
    (backend, manager)
}

pub fn bench_poll_accumulate(c: &mut Criterion) {
    let (backend, mut manager) = build_manager(4);

    c.bench_function("manager_poll_accumulate", |b| {
        b.iter(|| {
            for t in 0..16i16 {
                let raw = t.wrapping_mul(2048);
                backend.set_axis(0, Axis::LeftX, raw);
                backend.set_axis(1, Axis::RightY, -raw);
                manager.poll();
                let mut axes = AxisBuffer::default();
                manager.accumulate_axes(&mut axes);
                black_box(axes);
            }
        })
    });
}

criterion_group!(benches, bench_poll_accumulate);
criterion_main!(benches);
