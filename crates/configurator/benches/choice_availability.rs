use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use courtside_catalog::{ProductOption, Stock, Variant};
use courtside_configurator::{AvailabilityIndex, Selection, VariantResolver};
use courtside_core::VariantId;

/// Colors × sizes × weights, every third combination sold out.
fn catalog(colors: usize, sizes: usize, weights: usize) -> (Vec<ProductOption>, Vec<Variant>) {
    let color_labels: Vec<String> = (0..colors).map(|i| format!("Color-{i}")).collect();
    let size_labels: Vec<String> = (0..sizes).map(|i| format!("Size-{i}")).collect();
    let weight_labels: Vec<String> = (0..weights).map(|i| format!("{}U", i + 2)).collect();

    let options = vec![
        ProductOption::with_labels("Color", color_labels.clone()),
        ProductOption::with_labels("Size", size_labels.clone()),
        ProductOption::with_labels("Weight", weight_labels.clone()),
    ];

    let mut variants = Vec::new();
    let mut n = 0u32;
    for c in &color_labels {
        for s in &size_labels {
            for w in &weight_labels {
                let stock = if n % 3 == 0 { Stock::out_of_stock() } else { Stock::available(n % 7 + 1) };
                variants.push(Variant::new(
                    VariantId::new(),
                    [("Color", c.as_str()), ("Size", s.as_str()), ("Weight", w.as_str())],
                    stock,
                ));
                n += 1;
            }
        }
    }
    (options, variants)
}

/// Every choice of every option checked once, as a render pass does.
fn render_pass(
    options: &[ProductOption],
    selection: &Selection,
    enabled: impl Fn(&str, &str, &Selection) -> bool,
) -> usize {
    options
        .iter()
        .flat_map(|o| o.choices.iter().map(move |c| (o.name.as_str(), c.description.as_str())))
        .filter(|(o, c)| enabled(*o, *c, selection))
        .count()
}

fn bench_choice_availability(c: &mut Criterion) {
    let mut group = c.benchmark_group("choice_availability");

    for &(colors, sizes, weights) in &[(3, 3, 2), (6, 5, 4), (10, 8, 6)] {
        let (options, variants) = catalog(colors, sizes, weights);
        let resolver = VariantResolver::new(&options, &variants);
        let index = AvailabilityIndex::build(&variants);
        let selection = Selection::new().select("Color", "Color-1");
        let label = format!("{}_variants", variants.len());

        group.bench_with_input(BenchmarkId::new("scan", &label), &selection, |b, sel| {
            b.iter(|| render_pass(&options, black_box(sel), |o, ch, s| resolver.is_choice_enabled(o, ch, s)))
        });

        group.bench_with_input(BenchmarkId::new("index", &label), &selection, |b, sel| {
            b.iter(|| render_pass(&options, black_box(sel), |o, ch, s| index.is_choice_enabled(o, ch, s)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_choice_availability);
criterion_main!(benches);
