use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lineal_geometry::Rect;
use lineal_layout::{compute_preferred_size, perform_layout, Alignment, Element};
use lineal_testing::fixed;

const FORM_ROWS: usize = 64;
const FORM_ROW_SAMPLES: &[usize] = &[FORM_ROWS];
const NESTING_DEPTH: usize = 64;
const NESTING_DEPTH_SAMPLES: &[usize] = &[NESTING_DEPTH];
const ROOT_BOUNDS: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 1080.0,
    height: 1920.0,
};

/// A label/field form: `rows` aligned rows of three cells each, the last
/// cell scaling. Exercises cell unification across the whole column.
fn form_tree(rows: usize) -> Element {
    let mut lines = Vec::with_capacity(rows);
    for row in 0..rows {
        let label_width = 40.0 + (row % 7) as f32 * 10.0;
        lines.push(
            Element::row([
                fixed(label_width, 20.0),
                fixed(120.0, 24.0),
                Element::spacer().scale(),
            ])
            .aligned()
            .align(Alignment::Fill),
        );
    }
    Element::column(lines)
}

/// Alternating rows and columns nested `depth` levels deep, two leaves per
/// level. Exercises context derivation down a long spine.
fn nested_tree(depth: usize) -> Element {
    let mut node = fixed(20.0, 20.0);
    for level in 0..depth {
        let children = [fixed(10.0, 10.0), node];
        node = if level % 2 == 0 {
            Element::row(children)
        } else {
            Element::column(children)
        };
    }
    node
}

fn form_element_count(rows: usize) -> usize {
    1 + rows * 4
}

fn nested_element_count(depth: usize) -> usize {
    1 + depth * 2
}

fn bench_form_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("form_measure");
    for &rows in FORM_ROW_SAMPLES {
        group.bench_with_input(
            BenchmarkId::new("elements", form_element_count(rows)),
            &rows,
            |b, &rows| {
                let tree = form_tree(rows);
                b.iter(|| {
                    let size = compute_preferred_size(&tree, ROOT_BOUNDS);
                    black_box(size);
                });
            },
        );
    }
    group.finish();
}

fn bench_form_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("form_layout");
    for &rows in FORM_ROW_SAMPLES {
        group.bench_with_input(
            BenchmarkId::new("elements", form_element_count(rows)),
            &rows,
            |b, &rows| {
                let mut tree = form_tree(rows);
                b.iter(|| {
                    perform_layout(&mut tree, ROOT_BOUNDS);
                });
            },
        );
    }
    group.finish();
}

fn bench_nested_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested_layout");
    for &depth in NESTING_DEPTH_SAMPLES {
        group.bench_with_input(
            BenchmarkId::new("elements", nested_element_count(depth)),
            &depth,
            |b, &depth| {
                let mut tree = nested_tree(depth);
                b.iter(|| {
                    perform_layout(&mut tree, ROOT_BOUNDS);
                });
            },
        );
    }
    group.finish();
}

fn bench_wide_row_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide_row_layout");
    for &cells in &[256_usize] {
        group.bench_with_input(BenchmarkId::new("cells", cells), &cells, |b, &cells| {
            let children: Vec<Element> = (0..cells)
                .map(|i| fixed(4.0 + (i % 5) as f32, 16.0))
                .collect();
            let mut tree = Element::row(children);
            b.iter(|| {
                perform_layout(&mut tree, ROOT_BOUNDS);
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_form_measure,
    bench_form_layout,
    bench_nested_layout,
    bench_wide_row_layout
);
criterion_main!(benches);
