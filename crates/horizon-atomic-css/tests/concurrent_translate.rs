//! Integration tests for sharing one engine across threads.

use std::sync::Arc;
use std::thread;

use horizon_atomic_css::prelude::*;

#[test]
fn engine_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StyleEngine>();
}

#[test]
fn parallel_translate_registers_each_class_once() {
    let engine = Arc::new(StyleEngine::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let scale = Spacing::ALL[i % Spacing::ALL.len()];
                let color = ColorKey::ALL[i % ColorKey::ALL.len()];
                for _ in 0..50 {
                    let request = Style::new().p(scale).bg(color).d(Display::Block).build();
                    let classes = engine.translate(&request).unwrap();
                    assert_eq!(
                        classes,
                        format!("p-{} bg-{} d-block", scale.as_str(), color.as_str())
                    );
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // 8 padding steps, 4 colors, 1 display keyword.
    assert_eq!(engine.len(), 13);

    let dump = engine.dump();
    let mut lines: Vec<_> = dump.lines().collect();
    lines.sort_unstable();
    lines.dedup();
    assert_eq!(lines.len(), 13);
}
