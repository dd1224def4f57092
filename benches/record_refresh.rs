use criterion::{black_box, criterion_group, criterion_main, Criterion};
use window_process::process::{ProcessRecord, ScriptedProvider};
use window_process::WindowHandle;

fn provider() -> ScriptedProvider {
    let mut provider = ScriptedProvider::new()
        .with_shell_window(WindowHandle::from_raw(0x10010), 3100, 3104)
        .with_process(3100, "\\Device\\HarddiskVolume3\\Windows\\explorer.exe");
    for pid in 1000..1064u32 {
        provider = provider
            .with_process(pid, format!("C:\\Program Files\\App{}\\app{}.exe", pid, pid))
            .with_window(WindowHandle::from_raw(pid as isize * 16), pid, pid + 4);
    }
    provider
}

fn benchmark_refresh_cycle(c: &mut Criterion) {
    let provider = provider();
    let windows: Vec<WindowHandle> = (1000..1064)
        .map(|pid: isize| WindowHandle::from_raw(pid * 16))
        .collect();

    c.bench_function("refresh_64_windows", |b| {
        b.iter(|| {
            for &window in &windows {
                let record = ProcessRecord::from_window(&provider, window).unwrap();
                black_box(record.is_shell_process(&provider));
            }
        });
    });
}

criterion_group!(benches, benchmark_refresh_cycle);
criterion_main!(benches);
