use alfred_script_filter::{
    to_vec, to_vec_indent, Icon, IconType, Item, ItemType, Modifier, ScriptFilter,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn full_item(n: u32) -> Item {
    Item::new(format!("Title {n}"))
        .uid(format!("uid-{n}"))
        .subtitle("Subtitle")
        .arg(format!("arg-{n}"))
        .icon(Icon::with_type("./icon.png", IconType::FileIcon))
        .valid(true)
        .match_text("match")
        .autocomplete("ac")
        .item_type(ItemType::Default)
        .mod_cmd(Modifier::new().subtitle("Cmd").arg("cmd-arg").valid(false))
        .text("Text")
        .quicklook_url("http://localhost")
}

fn filter_with_items(count: u32) -> ScriptFilter {
    let mut sf = ScriptFilter::new();
    sf.append((0..count).map(full_item));
    sf.put_variable("session", "abc123");
    sf
}

fn benchmark_serialize_single_item(c: &mut Criterion) {
    let sf = filter_with_items(1);

    c.bench_function("serialize_single_item", |b| {
        b.iter(|| to_vec(black_box(&sf)))
    });
}

fn benchmark_serialize_compact(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_compact");

    for size in [10, 50, 100, 500].iter() {
        let sf = filter_with_items(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_vec(black_box(&sf)))
        });
    }
    group.finish();
}

fn benchmark_serialize_indented(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_indented");

    for size in [10, 50, 100, 500].iter() {
        let sf = filter_with_items(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_vec_indent(black_box(&sf), "", "  "))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_serialize_single_item,
    benchmark_serialize_compact,
    benchmark_serialize_indented
);
criterion_main!(benches);
