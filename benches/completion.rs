use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use bytecode_complete::{BytecodeClass, Completer, MemoryWorkspace, StaticClassPath, WorkspaceSlot};

/// A classpath roughly the size of a JDK module image.
fn large_class_path() -> StaticClassPath {
    let mut cp = StaticClassPath::new();
    for pkg in 0..200 {
        for class in 0..100 {
            cp.add_name(&format!("pkg{pkg}/sub/Class{class}"));
        }
    }
    cp
}

fn small_workspace() -> MemoryWorkspace {
    MemoryWorkspace::from_classes((0..500).map(|i| BytecodeClass {
        name: format!("com/example/Type{i}"),
        ..BytecodeClass::default()
    }))
}

fn bench_completion(c: &mut Criterion) {
    let slot = Arc::new(WorkspaceSlot::with_workspace(Arc::new(small_workspace())));
    let completer = Completer::new(Arc::new(large_class_path()), slot);

    c.bench_function("internal_name_cached", |b| {
        b.iter(|| completer.complete_internal_name(black_box("pkg1")))
    });

    c.bench_function("descriptor_cached", |b| {
        b.iter(|| completer.complete_descriptor(black_box("[Lcom/example/Type1")))
    });

    c.bench_function("index_rebuild", |b| {
        b.iter(|| {
            completer.invalidate_class_names();
            completer.complete_internal_name(black_box("com/"))
        })
    });
}

criterion_group!(benches, bench_completion);
criterion_main!(benches);
